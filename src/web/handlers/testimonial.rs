use actix_web::{get, post, web, HttpRequest, HttpResponse};

use atelier_admin::models::{Session, Testimonial, TestimonialDraft};

use crate::web::forms::{PageQuery, TestimonialForm};
use crate::web::helpers::{
    alert_from_query, chrome_for, error_url, guard_page, notice_url, render,
    require_session, see_other,
};
use crate::web::state::AppState;
use crate::web::templates::{Alert, TestimonialModal, TestimonialTemplate};

const PAGE: &str = "testimonial";
const LIST_PATH: &str = "/api/testimonial/get";

/// This view surfaces fetch failures as a blocking banner instead of
/// quietly showing nothing.
async fn fetch_testimonials(state: &AppState) -> Result<Vec<Testimonial>, Alert> {
    state
        .api
        .get_list::<Testimonial>(LIST_PATH)
        .await
        .map_err(|err| {
            log::error!("Error fetching testimonials: {err}");
            Alert {
                tone: "danger",
                message: "Failed to fetch testimonials".to_string(),
            }
        })
}

fn build_modal(
    draft: TestimonialDraft,
    edit_id: String,
    error: Option<String>,
) -> TestimonialModal {
    let editing = !edit_id.is_empty();
    TestimonialModal {
        action: "/testimonial/save",
        heading: if editing {
            "Edit Testimonial"
        } else {
            "Add Testimonial"
        },
        submit: if editing { "Update" } else { "Save" },
        edit_id,
        error,
        draft,
    }
}

fn modal_from_query(
    query: &PageQuery,
    testimonials: &[Testimonial],
) -> Option<TestimonialModal> {
    if let Some(id) = &query.edit {
        let record = testimonials.iter().find(|t| &t.id == id)?;
        return Some(build_modal(
            TestimonialDraft::from_record(record),
            record.id.clone(),
            None,
        ));
    }
    query
        .new
        .as_ref()
        .map(|_| build_modal(TestimonialDraft::default(), String::new(), None))
}

#[get("/testimonial")]
pub async fn testimonial_page(
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

    let (testimonials, fetch_alert) = match fetch_testimonials(&state).await {
        Ok(list) => (list, None),
        Err(alert) => (Vec::new(), Some(alert)),
    };
    let modal = modal_from_query(&query, &testimonials);
    let alert = fetch_alert.or_else(|| alert_from_query(&query.notice, &query.error));

    render(TestimonialTemplate {
        chrome: chrome_for(&req, &session, "testimonial", "Testimonials"),
        testimonials,
        modal,
        alert,
    })
}

async fn rerender_with_modal(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    session: &Session,
    draft: TestimonialDraft,
    edit_id: String,
    error: String,
) -> HttpResponse {
    let testimonials = fetch_testimonials(state).await.unwrap_or_default();
    render(TestimonialTemplate {
        chrome: chrome_for(req, session, "testimonial", "Testimonials"),
        testimonials,
        modal: Some(build_modal(draft, edit_id, Some(error))),
        alert: None,
    })
}

#[post("/testimonial/save")]
pub async fn testimonial_save(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TestimonialForm>,
) -> HttpResponse {
    let session = match require_session(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(resp) = guard_page(&session, PAGE) {
        return resp;
    }

    let form = form.into_inner();
    let edit_id = form.id.trim().to_string();
    let draft = TestimonialDraft {
        title: form.title.trim().to_string(),
        name: form.name.trim().to_string(),
        description: form.description.trim().to_string(),
        rating: form.rating.trim().to_string(),
    };

    let payload = match draft.to_payload() {
        Ok(payload) => payload,
        Err(err) => {
            return rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                err.to_string(),
            )
            .await;
        }
    };

    let result = if edit_id.is_empty() {
        state
            .api
            .post_json("/api/testimonial/create", &payload)
            .await
    } else {
        state
            .api
            .put_json(&format!("/api/testimonial/update/{edit_id}"), &payload)
            .await
    };

    match result {
        Ok(_) => {
            let message = if edit_id.is_empty() {
                "Testimonial created successfully"
            } else {
                "Testimonial updated successfully"
            };
            see_other(&notice_url("/testimonial", message))
        }
        Err(err) => {
            log::error!("Error saving testimonial: {err}");
            rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                "Failed to save testimonial".to_string(),
            )
            .await
        }
    }
}

#[post("/testimonial/delete/{id}")]
pub async fn testimonial_delete(
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
    match state
        .api
        .delete(&format!("/api/testimonial/delete/{id}"))
        .await
    {
        Ok(()) => see_other(&notice_url("/testimonial", "Testimonial deleted successfully")),
        Err(err) => {
            log::error!("Error deleting testimonial: {err}");
            see_other(&error_url("/testimonial", "Failed to delete testimonial"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(testimonial_page)
        .service(testimonial_save)
        .service(testimonial_delete);
}
