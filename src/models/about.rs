use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Upload;
use crate::common::{ApiError, ValidationError};

/// One section of the public "About" page, as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AboutSection {
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Uncommitted form state for creating or editing a section.
/// In edit mode the image stays empty until the user re-selects one;
/// the previous image is only shown as a preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutDraft {
    pub title: String,
    pub kind: String,
    pub image: Option<Upload>,
}

impl AboutDraft {
    pub fn from_record(record: &AboutSection) -> Self {
        Self {
            title: record.title.clone(),
            kind: record.kind.clone(),
            image: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::MissingField("Type"));
        }
        Ok(())
    }

    /// Multipart body for create/update. The image part is only
    /// appended when a file was actually selected.
    pub fn to_form(&self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title.clone())
            .text("type", self.kind.clone());
        if let Some(upload) = self.image.clone() {
            form = form.part("image", upload.into_part()?);
        }
        Ok(form)
    }
}
