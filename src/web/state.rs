use atelier_admin::api::ApiClient;

#[derive(Clone)]
pub struct AppState {
    /// Client for the resource backend.
    pub api: ApiClient,
    /// Client for the user/auth service. Usually the same host; kept
    /// separate because the deployment allows overriding it.
    pub auth: ApiClient,
}
