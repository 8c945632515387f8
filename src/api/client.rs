use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::common::ApiError;

/// Thin adapter around the remote REST backend. Wraps a shared
/// `reqwest::Client` plus a base URL and converts non-2xx responses
/// into `ApiError::Backend` with whatever message the body carried.
///
/// Deliberately no timeout, retry, or in-flight de-duplication: a
/// mutation is always followed by a fresh list fetch, and the fetched
/// list is the only consistency mechanism.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base)
    }

    pub fn with_http(http: reqwest::Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { http, base }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET a collection.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let body = Self::read_ok(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a record that may not exist. The backend answers with a
    /// single object, a one-element list, or null/empty.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let body = Self::read_ok(resp).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(&body)?;
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => match items.into_iter().next() {
                Some(first) => Ok(Some(serde_json::from_value(first)?)),
                None => Ok(None),
            },
            other => Ok(Some(serde_json::from_value(other)?)),
        }
    }

    pub async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::read_json(resp).await
    }

    pub async fn put_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        Self::read_json(resp).await
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub async fn put_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let resp = self
            .http
            .put(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(path)).send().await?;
        Self::read_ok(resp).await?;
        Ok(())
    }

    async fn read_ok(resp: reqwest::Response) -> Result<String, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::Backend {
                status: status.as_u16(),
                message: extract_message(&body),
            })
        }
    }

    async fn read_json(resp: reqwest::Response) -> Result<Value, ApiError> {
        let body = Self::read_ok(resp).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Best-effort extraction of an error message from a backend body:
/// `{"error": "..."}` first, then `{"message": "..."}`.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
