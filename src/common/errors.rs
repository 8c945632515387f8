use thiserror::Error;

/// Errors from the remote REST backend or the transport underneath it.
///
/// Every call site converts these into a locally displayed message;
/// nothing propagates further and nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {status}")]
    Backend {
        status: u16,
        /// Message extracted from the response body's `error`/`message`
        /// field, when the backend bothered to send one.
        message: Option<String>,
    },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Human-readable message for banners. Prefers whatever the backend
    /// put in its error body.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend {
                message: Some(m), ..
            } => m.clone(),
            _ => "Something went wrong".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please enter both User ID and Password")]
    MissingCredentials,

    #[error("{0}")]
    Rejected(String),
}

/// Client-side required-field checks. A failed validation blocks the
/// submit entirely; no request is issued.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),
}
