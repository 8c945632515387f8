use serde_json::json;

use crate::common::{ApiError, AuthError};

use super::ApiClient;

const GENERIC_LOGIN_ERROR: &str = "An unexpected error occurred";

/// Sends the credential POST and returns the role string the backend
/// assigned to this user.
///
/// Both fields must be non-empty; otherwise no request is issued at
/// all and the caller gets `AuthError::MissingCredentials`.
pub async fn login(
    auth: &ApiClient,
    user_id: &str,
    password: &str,
) -> Result<String, AuthError> {
    if user_id.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let path = format!("/api/users/getUser/{}", user_id.trim());
    let body = json!({ "password": password });

    match auth.post_json(&path, &body).await {
        Ok(value) => value
            .get("role")
            .and_then(|r| r.as_str())
            .map(str::to_string)
            .ok_or_else(|| AuthError::Rejected(GENERIC_LOGIN_ERROR.to_string())),
        Err(ApiError::Backend {
            message: Some(message),
            ..
        }) => Err(AuthError::Rejected(message)),
        Err(err) => {
            log::error!("Login request failed: {err}");
            Err(AuthError::Rejected(GENERIC_LOGIN_ERROR.to_string()))
        }
    }
}
