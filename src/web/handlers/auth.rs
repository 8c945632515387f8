use actix_web::{get, post, web, HttpRequest, HttpResponse};

use atelier_admin::api;
use atelier_admin::models::{Session, AUTH_COOKIE, ROLE_COOKIE, SESSION_COOKIES};
use atelier_admin::routing;

use crate::web::forms::LoginForm;
use crate::web::helpers::{
    removal_cookie, render, see_other, session_cookie, session_from,
};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

fn default_page(session: &Session) -> String {
    format!("/{}", routing::routes_for(session.role).default)
}

#[get("/")]
pub async fn index(req: HttpRequest) -> HttpResponse {
    match session_from(&req) {
        Some(session) => see_other(&default_page(&session)),
        None => see_other("/login"),
    }
}

#[get("/login")]
pub async fn login_form(req: HttpRequest) -> HttpResponse {
    if let Some(session) = session_from(&req) {
        return see_other(&default_page(&session));
    }
    render(LoginTemplate {
        error: None,
        user_id: String::new(),
    })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    match api::auth::login(&state.auth, &form.user_id, &form.password).await {
        Ok(role) => {
            let session = Session::new(&role);
            HttpResponse::SeeOther()
                .cookie(session_cookie(AUTH_COOKIE, "true".to_string()))
                .cookie(session_cookie(ROLE_COOKIE, role))
                .insert_header(("Location", default_page(&session)))
                .finish()
        }
        // Missing credentials never issued a request; rejections carry
        // the backend's message. Either way the form stays up with the
        // entered user id intact.
        Err(err) => render(LoginTemplate {
            error: Some(err.to_string()),
            user_id: form.user_id.clone(),
        }),
    }
}

#[post("/logout")]
pub async fn logout() -> HttpResponse {
    let mut resp = HttpResponse::SeeOther();
    for name in SESSION_COOKIES.iter().copied() {
        resp.cookie(removal_cookie(name));
    }
    resp.insert_header(("Location", "/login")).finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(login_form)
        .service(login_submit)
        .service(logout);
}
