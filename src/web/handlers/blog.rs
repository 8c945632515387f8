use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse};

use atelier_admin::models::{Blog, BlogDraft, BlogItem, Session};

use crate::web::forms::PageQuery;
use crate::web::helpers::{
    alert_from_query, chrome_for, error_url, guard_page, notice_url, render,
    require_session, see_other,
};
use crate::web::state::AppState;
use crate::web::templates::{Alert, BlogModal, BlogTemplate};
use crate::web::uploads::{self, FormPayload};

const PAGE: &str = "blog";
const LIST_PATH: &str = "/api/blog/get";

/// Fetches the collection; a failure becomes a banner on the page
/// rather than a silent empty list.
async fn fetch_blogs(state: &AppState) -> Result<Vec<Blog>, Alert> {
    state.api.get_list::<Blog>(LIST_PATH).await.map_err(|err| {
        log::error!("Error fetching blogs: {err}");
        Alert {
            tone: "danger",
            message: "Failed to fetch blogs".to_string(),
        }
    })
}

fn modal_from_query(query: &PageQuery, blogs: &[Blog]) -> Option<BlogModal> {
    if let Some(id) = &query.edit {
        let record = blogs.iter().find(|b| &b.id == id)?;
        return Some(BlogModal {
            action: "/blog/save",
            heading: "Edit Blog",
            submit: "Update Blog",
            edit_id: record.id.clone(),
            error: None,
            preview_image: record.image.clone(),
            preview_heading_image: record.heading_image.clone(),
            draft: BlogDraft::from_record(record),
        });
    }
    query.new.as_ref().map(|_| BlogModal {
        action: "/blog/save",
        heading: "Create Blog",
        submit: "Save Blog",
        edit_id: String::new(),
        error: None,
        preview_image: None,
        preview_heading_image: None,
        draft: BlogDraft::default(),
    })
}

#[get("/blog")]
pub async fn blog_page(
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

    let (blogs, fetch_alert) = match fetch_blogs(&state).await {
        Ok(blogs) => (blogs, None),
        Err(alert) => (Vec::new(), Some(alert)),
    };
    let modal = modal_from_query(&query, &blogs);
    let alert = fetch_alert.or_else(|| alert_from_query(&query.notice, &query.error));

    render(BlogTemplate {
        chrome: chrome_for(&req, &session, "blog", "Blog"),
        blogs,
        modal,
        alert,
    })
}

/// Rebuilds the draft from the submitted multipart fields. The heading
/// and item inputs repeat by name and arrive in on-screen order, so
/// positional indices are preserved.
fn draft_from_payload(form: &FormPayload) -> BlogDraft {
    let items = form
        .values("item_title")
        .into_iter()
        .zip(form.values("item_description"))
        .map(|(title, description)| BlogItem { title, description })
        .collect();

    BlogDraft {
        title: form.value("title").trim().to_string(),
        description: form.value("description").trim().to_string(),
        headings: form.values("headings"),
        items,
        image: form.file("image").cloned(),
        heading_image: form.file("headingImage").cloned(),
    }
}

async fn rerender_with_modal(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    session: &Session,
    draft: BlogDraft,
    edit_id: String,
    error: String,
) -> HttpResponse {
    let blogs = fetch_blogs(state).await.unwrap_or_default();
    let record = blogs.iter().find(|b| b.id == edit_id);
    let editing = !edit_id.is_empty();

    render(BlogTemplate {
        chrome: chrome_for(req, session, "blog", "Blog"),
        modal: Some(BlogModal {
            action: "/blog/save",
            heading: if editing { "Edit Blog" } else { "Create Blog" },
            submit: if editing { "Update Blog" } else { "Save Blog" },
            edit_id,
            error: Some(error),
            preview_image: record.and_then(|b| b.image.clone()),
            preview_heading_image: record.and_then(|b| b.heading_image.clone()),
            draft,
        }),
        blogs,
        alert: None,
    })
}

#[post("/blog/save")]
pub async fn blog_save(
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
            log::error!("Error reading blog form: {err}");
            return see_other(&error_url("/blog", "Invalid form submission"));
        }
    };

    let edit_id = form.value("id").trim().to_string();
    let draft = draft_from_payload(&form);

    if let Err(err) = draft.validate() {
        return rerender_with_modal(&state, &req, &session, draft, edit_id, err.to_string())
            .await;
    }

    let body = match draft.to_form() {
        Ok(body) => body,
        Err(err) => {
            log::error!("Error building blog payload: {err}");
            return rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                "Failed to save blog".to_string(),
            )
            .await;
        }
    };

    let result = if edit_id.is_empty() {
        state.api.post_multipart("/api/blog/create", body).await
    } else {
        state
            .api
            .put_multipart(&format!("/api/blog/update/{edit_id}"), body)
            .await
    };

    match result {
        Ok(_) => {
            let message = if edit_id.is_empty() {
                "Blog created successfully!"
            } else {
                "Blog updated successfully!"
            };
            see_other(&notice_url("/blog", message))
        }
        Err(err) => {
            log::error!("Error saving blog: {err}");
            rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                "Failed to save blog".to_string(),
            )
            .await
        }
    }
}

#[post("/blog/delete/{id}")]
pub async fn blog_delete(
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
    match state.api.delete(&format!("/api/blog/delete/{id}")).await {
        Ok(()) => see_other(&notice_url("/blog", "Blog deleted successfully!")),
        Err(err) => {
            log::error!("Error deleting blog: {err}");
            see_other(&error_url("/blog", "Delete failed"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(blog_page)
        .service(blog_save)
        .service(blog_delete);
}
