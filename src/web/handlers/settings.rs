use actix_web::{post, web, HttpResponse};

use atelier_admin::models::{COLOR_COOKIE, MODE_COOKIE};

use crate::web::forms::ThemeForm;
use crate::web::helpers::session_cookie;

/// Persists the theme picker. The cookies are cleared with the rest
/// of the session on logout.
#[post("/settings/theme")]
pub async fn save_theme(form: web::Form<ThemeForm>) -> HttpResponse {
    let back = if form.next.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", form.next)
    };

    let mut resp = HttpResponse::SeeOther();
    if !form.color.is_empty() {
        resp.cookie(session_cookie(COLOR_COOKIE, form.color.clone()));
    }
    if !form.mode.is_empty() {
        resp.cookie(session_cookie(MODE_COOKIE, form.mode.clone()));
    }
    resp.insert_header(("Location", back)).finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(save_theme);
}
