use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Upload;
use crate::common::{ApiError, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub heading_image: Option<String>,
    #[serde(default)]
    pub headings: Vec<String>,
    #[serde(default)]
    pub items: Vec<BlogItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Blog {
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Uncommitted form state for a blog post. Headings and items are
/// client-ordered lists edited by positional index; removing an entry
/// shifts every subsequent index down by one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
    pub headings: Vec<String>,
    pub items: Vec<BlogItem>,
    pub image: Option<Upload>,
    pub heading_image: Option<Upload>,
}

impl BlogDraft {
    /// Edit-mode draft: scalar fields copied from the record, file
    /// fields left empty until the user re-selects one.
    pub fn from_record(record: &Blog) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            headings: record.headings.clone(),
            items: record.items.clone(),
            image: None,
            heading_image: None,
        }
    }

    pub fn add_heading(&mut self) {
        self.headings.push(String::new());
    }

    pub fn update_heading(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.headings.get_mut(index) {
            *slot = value.to_string();
        }
    }

    pub fn remove_heading(&mut self, index: usize) {
        if index < self.headings.len() {
            self.headings.remove(index);
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(BlogItem::default());
    }

    pub fn update_item_title(&mut self, index: usize, value: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.title = value.to_string();
        }
    }

    pub fn update_item_description(&mut self, index: usize, value: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = value.to_string();
        }
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("Description"));
        }
        Ok(())
    }

    pub fn headings_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.headings)
    }

    pub fn items_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Multipart body for create/update. The nested lists travel as
    /// JSON strings inside the form, the way the backend expects them.
    pub fn to_form(&self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title.clone())
            .text("description", self.description.clone())
            .text("headings", self.headings_json()?)
            .text("items", self.items_json()?);
        if let Some(upload) = self.image.clone() {
            form = form.part("image", upload.into_part()?);
        }
        if let Some(upload) = self.heading_image.clone() {
            form = form.part("headingImage", upload.into_part()?);
        }
        Ok(form)
    }
}
