use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use atelier_admin::models::{
    Session, COLOR_COOKIE, MODE_COOKIE, ROLE_COOKIE, AUTH_COOKIE,
};
use atelier_admin::routing;

use crate::web::templates::{Alert, Chrome, NavItem};

const DEFAULT_THEME_COLOR: &str = "#03C9D7";
const DEFAULT_THEME_MODE: &str = "Light";

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// Loads the session context from the request cookies. `None` means
/// the visitor sees the login form.
pub fn session_from(req: &HttpRequest) -> Option<Session> {
    let authed = req
        .cookie(AUTH_COOKIE)
        .map(|c| c.value() == "true")
        .unwrap_or(false);
    if !authed {
        return None;
    }
    let role = req.cookie(ROLE_COOKIE)?.value().to_string();
    Some(Session::new(&role))
}

pub fn require_session(req: &HttpRequest) -> Result<Session, HttpResponse> {
    session_from(req).ok_or_else(|| see_other("/login"))
}

/// Redirects to the role's default page when this role may not see
/// `slug`. One table consult, no per-page branching.
pub fn guard_page(session: &Session, slug: &str) -> Result<(), HttpResponse> {
    if routing::is_allowed(session.role, slug) {
        Ok(())
    } else {
        let default = routing::routes_for(session.role).default;
        Err(see_other(&format!("/{default}")))
    }
}

/// Shared page chrome: title, sidebar restricted to the role's allowed
/// pages, theme cookies.
pub fn chrome_for(
    req: &HttpRequest,
    session: &Session,
    active: &'static str,
    title: &str,
) -> Chrome {
    let set = routing::routes_for(session.role);
    let nav = set
        .allowed
        .iter()
        .copied()
        .map(|slug| NavItem {
            slug,
            label: routing::page_label(slug),
            href: format!("/{slug}"),
        })
        .collect();

    Chrome {
        title: title.to_string(),
        active,
        nav,
        role_name: session.role_name.clone(),
        theme_mode: cookie_or(req, MODE_COOKIE, DEFAULT_THEME_MODE),
        theme_color: cookie_or(req, COLOR_COOKIE, DEFAULT_THEME_COLOR),
    }
}

fn cookie_or(req: &HttpRequest, name: &str, fallback: &str) -> String {
    req.cookie(name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn alert_from_query(
    notice: &Option<String>,
    error: &Option<String>,
) -> Option<Alert> {
    if let Some(message) = error {
        return Some(Alert {
            tone: "danger",
            message: message.clone(),
        });
    }
    notice.as_ref().map(|message| Alert {
        tone: "success",
        message: message.clone(),
    })
}

pub fn notice_url(base: &str, message: &str) -> String {
    format!("{base}?notice={}", urlencoding::encode(message))
}

pub fn error_url(base: &str, message: &str) -> String {
    format!("{base}?error={}", urlencoding::encode(message))
}

pub fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .same_site(SameSite::Lax)
        .finish()
}

pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}
