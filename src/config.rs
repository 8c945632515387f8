use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set (e.g. https://backend.example.com)")]
    Missing(&'static str),
}

/// Runtime configuration, read from the environment (`.env` supported).
///
/// Every resource goes through `API_BASE_URL`; the user/auth service
/// can be pointed elsewhere with a single optional override.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub auth_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = std::env::var("API_BASE_URL")
            .map_err(|_| ConfigError::Missing("API_BASE_URL"))?;
        let auth_base_url = std::env::var("AUTH_API_BASE_URL")
            .unwrap_or_else(|_| api_base_url.clone());
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            bind_addr,
            api_base_url,
            auth_base_url,
        })
    }
}
