mod web;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use atelier_admin::api::ApiClient;
use atelier_admin::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()
        .expect("Invalid configuration: set API_BASE_URL (and optionally AUTH_API_BASE_URL, BIND_ADDR)");

    let http = reqwest::Client::new();
    let state = Data::new(web::state::AppState {
        api: ApiClient::with_http(http.clone(), &config.api_base_url),
        auth: ApiClient::with_http(http, &config.auth_base_url),
    });

    log::info!(
        "Starting admin console on {} (backend: {})",
        config.bind_addr,
        config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(actix_web::web::route().to(web::handlers::fallback))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
