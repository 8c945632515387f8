use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::Value;

use atelier_admin::api::reports::{cell, report_for};

use crate::web::forms::PageQuery;
use crate::web::helpers::{
    alert_from_query, chrome_for, guard_page, render, require_session,
};
use crate::web::state::AppState;
use crate::web::templates::{ReportRow, ReportTemplate};

/// One handler serves every descriptor-driven list page.
#[get("/{slug:applied-candidates|revenue|orders|crm|quotation}")]
pub async fn report_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let slug = path.into_inner();
    let spec = match report_for(&slug) {
        Some(spec) => spec,
        None => return HttpResponse::NotFound().body("Unknown page"),
    };

    let session = match require_session(&req) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(resp) = guard_page(&session, spec.slug) {
        return resp;
    }

    let records = match state.api.get_list::<Value>(&spec.list_path()).await {
        Ok(records) => records,
        Err(err) => {
            log::error!("Error fetching {}: {err}", spec.resource);
            Vec::new()
        }
    };

    let rows = records
        .iter()
        .map(|record| ReportRow {
            cells: spec
                .columns
                .iter()
                .map(|column| cell(record, column.key))
                .collect(),
        })
        .collect();

    render(ReportTemplate {
        chrome: chrome_for(&req, &session, spec.slug, spec.title),
        columns: spec.columns,
        rows,
        alert: alert_from_query(&query.notice, &query.error),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(report_page);
}
