//! Role-based page routing.
//!
//! A single declarative table maps each role to its permitted page set
//! and a default landing page. Navigating anywhere outside the allowed
//! set redirects to the role's default; the sidebar only renders the
//! allowed pages.

/// Page slugs, in sidebar order. Each corresponds to one admin view.
pub const ALL_PAGES: &[&str] = &[
    "applied-candidates",
    "revenue",
    "orders",
    "crm",
    "quotation",
    "jobs",
    "about",
    "blog",
    "footer",
    "testimonial",
];

const CRM_PAGES: &[&str] = &["crm", "quotation"];
const TEAM_PAGES: &[&str] = &["orders"];
const FALLBACK_PAGES: &[&str] = &["applied-candidates"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Crm,
    Team,
    Admin,
    Unknown,
}

impl Role {
    /// Parses the stored role string. Anything unrecognized collapses
    /// to `Unknown`, which only ever sees the fallback page.
    pub fn parse(s: &str) -> Role {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRM" => Role::Crm,
            "TEAM" => Role::Team,
            "ADMIN" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Crm => "CRM",
            Role::Team => "TEAM",
            Role::Admin => "ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSet {
    pub allowed: &'static [&'static str],
    pub default: &'static str,
}

impl RouteSet {
    pub fn contains(&self, slug: &str) -> bool {
        self.allowed.iter().any(|s| *s == slug)
    }
}

pub fn routes_for(role: Role) -> RouteSet {
    match role {
        Role::Crm => RouteSet {
            allowed: CRM_PAGES,
            default: "crm",
        },
        Role::Team => RouteSet {
            allowed: TEAM_PAGES,
            default: "orders",
        },
        Role::Admin => RouteSet {
            allowed: ALL_PAGES,
            default: "applied-candidates",
        },
        Role::Unknown => RouteSet {
            allowed: FALLBACK_PAGES,
            default: "applied-candidates",
        },
    }
}

pub fn is_allowed(role: Role, slug: &str) -> bool {
    routes_for(role).contains(slug)
}

/// Sidebar label for a page slug.
pub fn page_label(slug: &str) -> &'static str {
    match slug {
        "applied-candidates" => "Applied Candidates",
        "revenue" => "Revenue",
        "orders" => "Orders",
        "crm" => "CRM",
        "quotation" => "Quotations",
        "jobs" => "Posted Jobs",
        "about" => "About Sections",
        "blog" => "Blog",
        "footer" => "Footer",
        "testimonial" => "Testimonials",
        _ => "Unknown",
    }
}
