use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use atelier_admin::models::{AboutDraft, AboutSection};

use crate::web::forms::PageQuery;
use crate::web::helpers::{
    alert_from_query, chrome_for, error_url, guard_page, notice_url, render,
    require_session, see_other,
};
use crate::web::state::AppState;
use crate::web::templates::{AboutModal, AboutTemplate, Alert};
use crate::web::uploads;

const PAGE: &str = "about";
const LIST_PATH: &str = "/api/about/getAll";

async fn fetch_sections(state: &AppState) -> Vec<AboutSection> {
    // This view logs fetch failures and renders an empty list.
    match state.api.get_list::<AboutSection>(LIST_PATH).await {
        Ok(sections) => sections,
        Err(err) => {
            log::error!("Error fetching sections: {err}");
            Vec::new()
        }
    }
}

fn modal_from_query(
    query: &PageQuery,
    sections: &[AboutSection],
) -> Option<AboutModal> {
    if let Some(id) = &query.edit {
        let record = sections.iter().find(|s| &s.id == id)?;
        return Some(AboutModal {
            action: "/about/save",
            heading: "Edit Section",
            submit: "Update",
            edit_id: record.id.clone(),
            error: None,
            preview: record.image.clone(),
            draft: AboutDraft::from_record(record),
        });
    }
    query.new.as_ref().map(|_| AboutModal {
        action: "/about/save",
        heading: "Add Section",
        submit: "Save",
        edit_id: String::new(),
        error: None,
        preview: None,
        draft: AboutDraft::default(),
    })
}

#[get("/about")]
pub async fn about_page(
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

    let sections = fetch_sections(&state).await;
    let modal = modal_from_query(&query, &sections);
    let alert = alert_from_query(&query.notice, &query.error);

    render(AboutTemplate {
        chrome: chrome_for(&req, &session, "about", "About Sections"),
        sections,
        modal,
        alert,
    })
}

/// Re-renders the page with the modal open and the draft intact after
/// a failed submit.
async fn rerender_with_modal(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    session: &atelier_admin::models::Session,
    draft: AboutDraft,
    edit_id: String,
    error: String,
) -> HttpResponse {
    let sections = fetch_sections(state).await;
    let preview = sections
        .iter()
        .find(|s| s.id == edit_id)
        .and_then(|s| s.image.clone());
    let editing = !edit_id.is_empty();

    render(AboutTemplate {
        chrome: chrome_for(req, session, "about", "About Sections"),
        sections,
        modal: Some(AboutModal {
            action: "/about/save",
            heading: if editing { "Edit Section" } else { "Add Section" },
            submit: if editing { "Update" } else { "Save" },
            edit_id,
            error: Some(error),
            preview,
            draft,
        }),
        alert: None::<Alert>,
    })
}

#[post("/about/save")]
pub async fn about_save(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> HttpResponse {
    let session = match require_session(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(resp) = guard_page(&session, PAGE) {
        return resp;
    }

    let form = match uploads::collect(payload).await {
        Ok(form) => form,
        Err(err) => {
            log::error!("Error reading section form: {err}");
            return see_other(&error_url("/about", "Invalid form submission"));
        }
    };

    let edit_id = form.value("id").trim().to_string();
    let draft = AboutDraft {
        title: form.value("title").trim().to_string(),
        kind: form.value("type").trim().to_string(),
        image: form.file("image").cloned(),
    };

    if let Err(err) = draft.validate() {
        return rerender_with_modal(&state, &req, &session, draft, edit_id, err.to_string())
            .await;
    }

    let body = match draft.to_form() {
        Ok(body) => body,
        Err(err) => {
            log::error!("Error building section payload: {err}");
            return rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                "Something went wrong".to_string(),
            )
            .await;
        }
    };

    let result = if edit_id.is_empty() {
        state.api.post_multipart("/api/about/create", body).await
    } else {
        state
            .api
            .put_multipart(&format!("/api/about/update/{edit_id}"), body)
            .await
    };

    match result {
        Ok(_) => {
            let message = if edit_id.is_empty() {
                "Section created successfully"
            } else {
                "Section updated successfully"
            };
            see_other(&notice_url("/about", message))
        }
        Err(err) => {
            log::error!("Error saving section: {err}");
            rerender_with_modal(&state, &req, &session, draft, edit_id, err.user_message())
                .await
        }
    }
}

#[post("/about/delete/{id}")]
pub async fn about_delete(
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
    match state.api.delete(&format!("/api/about/delete/{id}")).await {
        Ok(()) => see_other(&notice_url("/about", "Section deleted successfully")),
        Err(err) => {
            log::error!("Error deleting section: {err}");
            see_other(&error_url("/about", "Delete failed"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(about_page)
        .service(about_save)
        .service(about_delete);
}
