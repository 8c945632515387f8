use askama::Template;

use atelier_admin::api::reports::Column;
use atelier_admin::models::{
    AboutDraft, AboutSection, Blog, BlogDraft, Footer, Job, JobDraft,
    Testimonial, TestimonialDraft,
};

/// Shared page chrome rendered by the base layout.
pub struct Chrome {
    pub title: String,
    pub active: &'static str,
    pub nav: Vec<NavItem>,
    pub role_name: String,
    pub theme_mode: String,
    pub theme_color: String,
}

pub struct NavItem {
    pub slug: &'static str,
    pub label: &'static str,
    pub href: String,
}

pub struct Alert {
    pub tone: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub user_id: String,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub chrome: Chrome,
    pub sections: Vec<AboutSection>,
    pub modal: Option<AboutModal>,
    pub alert: Option<Alert>,
}

pub struct AboutModal {
    pub action: &'static str,
    pub heading: &'static str,
    pub submit: &'static str,
    pub edit_id: String,
    pub error: Option<String>,
    /// Previous image URL, shown while the file input stays empty.
    pub preview: Option<String>,
    pub draft: AboutDraft,
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub chrome: Chrome,
    pub blogs: Vec<Blog>,
    pub modal: Option<BlogModal>,
    pub alert: Option<Alert>,
}

pub struct BlogModal {
    pub action: &'static str,
    pub heading: &'static str,
    pub submit: &'static str,
    pub edit_id: String,
    pub error: Option<String>,
    pub preview_image: Option<String>,
    pub preview_heading_image: Option<String>,
    pub draft: BlogDraft,
}

#[derive(Template)]
#[template(path = "footer.html")]
pub struct FooterTemplate {
    pub chrome: Chrome,
    pub footer: Option<Footer>,
    pub modal: Option<FooterModal>,
    pub alert: Option<Alert>,
}

pub struct FooterModal {
    pub action: &'static str,
    pub heading: &'static str,
    pub submit: &'static str,
    pub edit_id: String,
    pub error: Option<String>,
    pub phone: String,
    pub hours: String,
    pub address: String,
    pub links: Vec<LinkRow>,
}

/// One social-link row with its platform `<select>` pre-resolved, so
/// the template stays dumb.
pub struct LinkRow {
    pub url: String,
    pub options: Vec<PlatformOption>,
}

pub struct PlatformOption {
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "testimonial.html")]
pub struct TestimonialTemplate {
    pub chrome: Chrome,
    pub testimonials: Vec<Testimonial>,
    pub modal: Option<TestimonialModal>,
    pub alert: Option<Alert>,
}

pub struct TestimonialModal {
    pub action: &'static str,
    pub heading: &'static str,
    pub submit: &'static str,
    pub edit_id: String,
    pub error: Option<String>,
    pub draft: TestimonialDraft,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobTemplate {
    pub chrome: Chrome,
    pub jobs: Vec<Job>,
    pub modal: Option<JobModal>,
    pub alert: Option<Alert>,
}

pub struct JobModal {
    pub action: &'static str,
    pub heading: &'static str,
    pub submit: &'static str,
    pub edit_id: String,
    pub error: Option<String>,
    pub draft: JobDraft,
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub chrome: Chrome,
    pub columns: &'static [Column],
    pub rows: Vec<ReportRow>,
    pub alert: Option<Alert>,
}

pub struct ReportRow {
    pub cells: Vec<String>,
}
