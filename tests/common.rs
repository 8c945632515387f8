use chrono::{DateTime, Utc};

use atelier_admin::models::*;

const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_section_0() -> AboutSection {
    AboutSection {
        id: "sec0".to_string(),
        title: "Our Mission".to_string(),
        kind: "mission".to_string(),
        image: Some("https://cdn.test/mission.png".to_string()),
        created_at: Some(parse_time("2026-02-11 09:30:00+00")),
    }
}

pub fn get_seed_blog_0() -> Blog {
    Blog {
        id: "blog0".to_string(),
        title: "Launch Notes".to_string(),
        description: "What shipped this quarter".to_string(),
        image: Some("https://cdn.test/cover.png".to_string()),
        heading_image: Some("https://cdn.test/heading.png".to_string()),
        headings: vec!["Intro".to_string(), "Details".to_string()],
        items: vec![
            BlogItem {
                title: "First".to_string(),
                description: "First item body".to_string(),
            },
            BlogItem {
                title: "Second".to_string(),
                description: "Second item body".to_string(),
            },
        ],
        created_at: Some(parse_time("2026-03-02 14:05:00+00")),
    }
}

pub fn get_seed_footer_0() -> Footer {
    Footer {
        id: "footer0".to_string(),
        contact_info: ContactInfo {
            phone: "+1 555 0100".to_string(),
            hours: "Mon-Fri 9-17".to_string(),
            address: "1 Main St".to_string(),
        },
        social_links: vec![
            SocialLink {
                platform: "facebook".to_string(),
                url: "https://facebook.com/acme".to_string(),
            },
            SocialLink {
                platform: "linkedin".to_string(),
                url: "https://linkedin.com/company/acme".to_string(),
            },
        ],
    }
}

pub fn get_seed_job_0() -> Job {
    Job {
        id: "job0".to_string(),
        title: "Backend Engineer".to_string(),
        department: "Engineering".to_string(),
        location: "Remote".to_string(),
        kind: "Full-time".to_string(),
        created_at: Some(parse_time("2026-04-01 10:00:00+00")),
    }
}

pub fn get_seed_testimonial_0() -> Testimonial {
    Testimonial {
        id: "t0".to_string(),
        title: "Great".to_string(),
        name: "A".to_string(),
        description: "Nice work".to_string(),
        rating: 4.5,
        created_at: Some(parse_time("2026-01-20 08:00:00+00")),
    }
}
