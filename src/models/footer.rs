use serde::{Deserialize, Serialize};

use crate::common::ValidationError;

/// The fixed set of platforms a social link may point at.
pub const PLATFORMS: &[&str] =
    &["facebook", "instagram", "linkedin", "twitter", "whatsapp"];

/// Site footer configuration. The backend holds at most one of these;
/// the admin view treats it as a singleton card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
}

/// JSON body for footer create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterPayload {
    pub contact_info: ContactInfo,
    pub social_links: Vec<SocialLink>,
}

/// Uncommitted form state for the footer. Social links are edited by
/// positional index; removing one shifts the rest down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooterDraft {
    pub phone: String,
    pub hours: String,
    pub address: String,
    pub social_links: Vec<SocialLink>,
}

impl FooterDraft {
    pub fn from_record(record: &Footer) -> Self {
        Self {
            phone: record.contact_info.phone.clone(),
            hours: record.contact_info.hours.clone(),
            address: record.contact_info.address.clone(),
            social_links: record.social_links.clone(),
        }
    }

    pub fn add_link(&mut self) {
        self.social_links.push(SocialLink::default());
    }

    pub fn update_link_platform(&mut self, index: usize, value: &str) {
        if let Some(link) = self.social_links.get_mut(index) {
            link.platform = value.to_string();
        }
    }

    pub fn update_link_url(&mut self, index: usize, value: &str) {
        if let Some(link) = self.social_links.get_mut(index) {
            link.url = value.to_string();
        }
    }

    pub fn remove_link(&mut self, index: usize) {
        if index < self.social_links.len() {
            self.social_links.remove(index);
        }
    }

    /// Applies one submitted form field. Link fields arrive as repeated
    /// `platform`/`url` pairs in row order; a row is opened by whichever
    /// of the two arrives first, so a lone `url` is never dropped.
    pub fn apply_field(&mut self, name: &str, value: &str) {
        match name {
            "phone" => self.phone = value.trim().to_string(),
            "hours" => self.hours = value.trim().to_string(),
            "address" => self.address = value.trim().to_string(),
            "platform" => {
                self.add_link();
                let last = self.social_links.len() - 1;
                self.update_link_platform(last, value);
            }
            "url" => {
                if self.social_links.is_empty() {
                    self.add_link();
                }
                let last = self.social_links.len() - 1;
                self.update_link_url(last, value.trim());
            }
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("Phone"));
        }
        for link in &self.social_links {
            if !link.platform.is_empty()
                && !PLATFORMS.contains(&link.platform.as_str())
            {
                return Err(ValidationError::MissingField("Platform"));
            }
        }
        Ok(())
    }

    pub fn to_payload(&self) -> FooterPayload {
        FooterPayload {
            contact_info: ContactInfo {
                phone: self.phone.clone(),
                hours: self.hours.clone(),
                address: self.address.clone(),
            },
            social_links: self.social_links.clone(),
        }
    }
}
