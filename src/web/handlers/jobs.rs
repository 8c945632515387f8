use actix_web::{get, post, web, HttpRequest, HttpResponse};

use atelier_admin::models::{Job, JobDraft, Session};

use crate::web::forms::{JobForm, PageQuery};
use crate::web::helpers::{
    alert_from_query, chrome_for, error_url, guard_page, notice_url, render,
    require_session, see_other,
};
use crate::web::state::AppState;
use crate::web::templates::{JobModal, JobTemplate};

const PAGE: &str = "jobs";
const LIST_PATH: &str = "/api/jobs/getAll";

async fn fetch_jobs(state: &AppState) -> Vec<Job> {
    match state.api.get_list::<Job>(LIST_PATH).await {
        Ok(jobs) => jobs,
        Err(err) => {
            log::error!("Error fetching jobs: {err}");
            Vec::new()
        }
    }
}

fn build_modal(draft: JobDraft, edit_id: String, error: Option<String>) -> JobModal {
    let editing = !edit_id.is_empty();
    JobModal {
        action: "/jobs/save",
        heading: if editing { "Edit Job Posting" } else { "Create Job Posting" },
        submit: if editing { "Update" } else { "Save" },
        edit_id,
        error,
        draft,
    }
}

fn modal_from_query(query: &PageQuery, jobs: &[Job]) -> Option<JobModal> {
    if let Some(id) = &query.edit {
        let record = jobs.iter().find(|j| &j.id == id)?;
        return Some(build_modal(
            JobDraft::from_record(record),
            record.id.clone(),
            None,
        ));
    }
    query
        .new
        .as_ref()
        .map(|_| build_modal(JobDraft::default(), String::new(), None))
}

#[get("/jobs")]
pub async fn jobs_page(
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

    let jobs = fetch_jobs(&state).await;
    let modal = modal_from_query(&query, &jobs);
    let alert = alert_from_query(&query.notice, &query.error);

    render(JobTemplate {
        chrome: chrome_for(&req, &session, "jobs", "Posted Jobs"),
        jobs,
        modal,
        alert,
    })
}

async fn rerender_with_modal(
    state: &web::Data<AppState>,
    req: &HttpRequest,
    session: &Session,
    draft: JobDraft,
    edit_id: String,
    error: String,
) -> HttpResponse {
    let jobs = fetch_jobs(state).await;
    render(JobTemplate {
        chrome: chrome_for(req, session, "jobs", "Posted Jobs"),
        jobs,
        modal: Some(build_modal(draft, edit_id, Some(error))),
        alert: None,
    })
}

#[post("/jobs/save")]
pub async fn jobs_save(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<JobForm>,
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
    let draft = JobDraft {
        title: form.title.trim().to_string(),
        department: form.department.trim().to_string(),
        location: form.location.trim().to_string(),
        kind: form.kind.trim().to_string(),
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
        state.api.post_json("/api/jobs/create", &payload).await
    } else {
        state
            .api
            .put_json(&format!("/api/jobs/update/{edit_id}"), &payload)
            .await
    };

    match result {
        Ok(_) => {
            let message = if edit_id.is_empty() {
                "Job posted successfully"
            } else {
                "Job updated successfully"
            };
            see_other(&notice_url("/jobs", message))
        }
        Err(err) => {
            log::error!("Error saving job: {err}");
            rerender_with_modal(
                &state,
                &req,
                &session,
                draft,
                edit_id,
                "Failed to save job".to_string(),
            )
            .await
        }
    }
}

#[post("/jobs/delete/{id}")]
pub async fn jobs_delete(
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
    match state.api.delete(&format!("/api/jobs/delete/{id}")).await {
        Ok(()) => see_other(&notice_url("/jobs", "Job deleted successfully")),
        Err(err) => {
            log::error!("Error deleting job: {err}");
            see_other(&error_url("/jobs", "Delete failed"))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(jobs_page).service(jobs_save).service(jobs_delete);
}
