pub mod about;
pub mod auth;
pub mod blog;
pub mod footer;
pub mod jobs;
pub mod reports;
pub mod settings;
pub mod testimonial;

use actix_web::{web, HttpRequest, HttpResponse};

use atelier_admin::routing;

use crate::web::helpers::{see_other, session_from};

pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    settings::configure(cfg);
    about::configure(cfg);
    blog::configure(cfg);
    footer::configure(cfg);
    jobs::configure(cfg);
    testimonial::configure(cfg);
    reports::configure(cfg);
}

/// Catch-all: anything outside the routing table goes to the role's
/// default page, or the login form when no session exists.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    match session_from(&req) {
        Some(session) => {
            let default = routing::routes_for(session.role).default;
            see_other(&format!("/{default}"))
        }
        None => see_other("/login"),
    }
}
