//! Descriptor-driven list views.
//!
//! The reporting pages (applied candidates, revenue, orders, CRM
//! contacts, quotations) all follow the same shape: fetch a collection
//! and show a handful of columns, read-only. Instead of one
//! hand-written view per resource, a static descriptor table drives a
//! single generic page.

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportSpec {
    /// Page slug, also the route segment.
    pub slug: &'static str,
    pub title: &'static str,
    /// Backend resource name: `GET /api/<resource>/getAll`.
    pub resource: &'static str,
    pub columns: &'static [Column],
}

impl ReportSpec {
    pub fn list_path(&self) -> String {
        format!("/api/{}/getAll", self.resource)
    }
}

pub const REPORTS: &[ReportSpec] = &[
    ReportSpec {
        slug: "applied-candidates",
        title: "Applied Candidates",
        resource: "applied",
        columns: &[
            Column { key: "name", label: "Name" },
            Column { key: "email", label: "Email" },
            Column { key: "phone", label: "Phone" },
            Column { key: "jobTitle", label: "Applied For" },
        ],
    },
    ReportSpec {
        slug: "revenue",
        title: "Revenue",
        resource: "revenue",
        columns: &[
            Column { key: "product", label: "Product" },
            Column { key: "customer", label: "Customer" },
            Column { key: "amount", label: "Amount" },
            Column { key: "date", label: "Date" },
        ],
    },
    ReportSpec {
        slug: "orders",
        title: "Orders",
        resource: "orders",
        columns: &[
            Column { key: "customer", label: "Customer" },
            Column { key: "service", label: "Service" },
            Column { key: "amount", label: "Amount" },
            Column { key: "status", label: "Status" },
        ],
    },
    ReportSpec {
        slug: "crm",
        title: "CRM",
        resource: "crm",
        columns: &[
            Column { key: "name", label: "Name" },
            Column { key: "email", label: "Email" },
            Column { key: "phone", label: "Phone" },
            Column { key: "company", label: "Company" },
        ],
    },
    ReportSpec {
        slug: "quotation",
        title: "Quotations",
        resource: "quotation",
        columns: &[
            Column { key: "name", label: "Name" },
            Column { key: "email", label: "Email" },
            Column { key: "service", label: "Service" },
            Column { key: "budget", label: "Budget" },
        ],
    },
];

pub fn report_for(slug: &str) -> Option<&'static ReportSpec> {
    REPORTS.iter().find(|r| r.slug == slug)
}

/// Renders one cell of a backend record. Strings come through bare,
/// everything else as compact JSON, missing/null as empty.
pub fn cell(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
