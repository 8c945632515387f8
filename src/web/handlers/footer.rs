use actix_web::{get, post, web, HttpRequest, HttpResponse};

use atelier_admin::models::{Footer, FooterDraft, Session, PLATFORMS};

use crate::web::forms::PageQuery;
use crate::web::helpers::{
    alert_from_query, chrome_for, error_url, guard_page, notice_url, render,
    require_session, see_other,
};
use crate::web::state::AppState;
use crate::web::templates::{FooterModal, FooterTemplate, LinkRow, PlatformOption};

const PAGE: &str = "footer";
const GET_PATH: &str = "/api/footer/get";

async fn fetch_footer(state: &AppState) -> Option<Footer> {
    // The backend holds at most one footer document.
    match state.api.get_optional::<Footer>(GET_PATH).await {
        Ok(footer) => footer,
        Err(err) => {
            log::error!("Error fetching footer: {err}");
            None
        }
    }
}

fn link_rows(draft: &FooterDraft) -> Vec<LinkRow> {
    draft
        .social_links
        .iter()
        .map(|link| LinkRow {
            url: link.url.clone(),
            options: PLATFORMS
                .iter()
                .copied()
                .map(|p| PlatformOption {
                    value: p,
                    selected: link.platform == p,
                })
                .collect(),
        })
        .collect()
}

fn build_modal(draft: FooterDraft, edit_id: String, error: Option<String>) -> FooterModal {
    let editing = !edit_id.is_empty();
    FooterModal {
        action: "/footer/save",
        heading: if editing { "Edit Footer" } else { "Create Footer" },
        submit: if editing { "Update" } else { "Save" },
        edit_id,
        error,
        links: link_rows(&draft),
        phone: draft.phone,
        hours: draft.hours,
        address: draft.address,
    }
}

#[get("/footer")]
pub async fn footer_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let session = match require_session(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(resp) = guard_page(&session, PAGE) {
        return resp;
    }

    let footer = fetch_footer(&state).await;

    let modal = if query.edit.is_some() || query.new.is_some() {
        match &footer {
            Some(record) => Some(build_modal(
                FooterDraft::from_record(record),
                record.id.clone(),
                None,
            )),
            None => Some(build_modal(FooterDraft::default(), String::new(), None)),
        }
    } else {
        None
    };
    let alert = alert_from_query(&query.notice, &query.error);

    render(FooterTemplate {
        chrome: chrome_for(&req, &session, "footer", "Footer Settings"),
        footer,
        modal,
        alert,
    })
}

async fn rerender_with_modal(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    session: &Session,
    draft: FooterDraft,
    edit_id: String,
    error: String,
) -> HttpResponse {
    let footer = fetch_footer(state).await;
    render(FooterTemplate {
        chrome: chrome_for(req, session, "footer", "Footer Settings"),
        footer,
        modal: Some(build_modal(draft, edit_id, Some(error))),
        alert: None,
    })
}

/// The social-link rows repeat `platform`/`url` pairs; folding the
/// raw pair list through the draft keeps submission order.
fn draft_from_pairs(pairs: &[(String, String)]) -> (FooterDraft, String) {
    let mut draft = FooterDraft::default();
    let mut edit_id = String::new();

    for (name, value) in pairs {
        if name == "id" {
            edit_id = value.trim().to_string();
        } else {
            draft.apply_field(name, value);
        }
    }

    (draft, edit_id)
}

#[post("/footer/save")]
pub async fn footer_save(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<Vec<(String, String)>>,
) -> HttpResponse {
    let session = match require_session(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(resp) = guard_page(&session, PAGE) {
        return resp;
    }

    let (draft, edit_id) = draft_from_pairs(&form.into_inner());

    if let Err(err) = draft.validate() {
        return rerender_with_modal(&state, &req, &session, draft, edit_id, err.to_string())
            .await;
    }

    let payload = draft.to_payload();
    let result = if edit_id.is_empty() {
        state.api.post_json("/api/footer/create", &payload).await
    } else {
        state
            .api
            .put_json(&format!("/api/footer/update/{edit_id}"), &payload)
            .await
    };

    match result {
        Ok(_) => {
            let message = if edit_id.is_empty() {
                "Footer created successfully"
            } else {
                "Footer updated successfully"
            };
            see_other(&notice_url("/footer", message))
        }
        Err(err) => {
            log::error!("Error saving footer: {err}");
            rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                "Something went wrong".to_string(),
            )
            .await
        }
    }
}

#[post("/footer/delete/{id}")]
pub async fn footer_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let session = match require_session(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(resp) = guard_page(&session, PAGE) {
        return resp;
    }

    let id = path.into_inner();
    match state.api.delete(&format!("/api/footer/delete/{id}")).await {
        Ok(()) => see_other(&notice_url("/footer", "Footer deleted successfully")),
        Err(err) => {
            log::error!("Error deleting footer: {err}");
            see_other(&error_url("/footer", "Delete failed"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(footer_page)
        .service(footer_save)
        .service(footer_delete);
}
