use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

/// A posted job opening, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// JSON body for job create/update.
#[derive(Debug, Clone, Serialize)]
pub struct JobPayload {
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Uncommitted form state for a job posting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub kind: String,
}

impl JobDraft {
    pub fn from_record(record: &Job) -> Self {
        Self {
            title: record.title.clone(),
            department: record.department.clone(),
            location: record.location.clone(),
            kind: record.kind.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if self.department.trim().is_empty() {
            return Err(ValidationError::MissingField("Department"));
        }
        if self.location.trim().is_empty() {
            return Err(ValidationError::MissingField("Location"));
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::MissingField("Type"));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<JobPayload, ValidationError> {
        self.validate()?;
        Ok(JobPayload {
            title: self.title.clone(),
            department: self.department.clone(),
            location: self.location.clone(),
            kind: self.kind.clone(),
        })
    }
}
