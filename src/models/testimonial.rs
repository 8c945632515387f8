use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// JSON body for testimonial create/update.
#[derive(Debug, Clone, Serialize)]
pub struct TestimonialPayload {
    pub title: String,
    pub name: String,
    pub description: String,
    pub rating: f64,
}

/// Uncommitted form state. The rating is kept as the raw input string;
/// the 0–5 range in 0.1 steps is a UI affordance on the number input,
/// not something enforced before submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialDraft {
    pub title: String,
    pub name: String,
    pub description: String,
    pub rating: String,
}

impl TestimonialDraft {
    pub fn from_record(record: &Testimonial) -> Self {
        Self {
            title: record.title.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            rating: record.rating.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Name"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("Description"));
        }
        if self.rating.trim().is_empty() {
            return Err(ValidationError::MissingField("Rating"));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<TestimonialPayload, ValidationError> {
        self.validate()?;
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber("Rating"))?;

        Ok(TestimonialPayload {
            title: self.title.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            rating,
        })
    }
}
