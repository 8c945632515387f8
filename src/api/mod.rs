pub mod auth;
pub mod client;
pub mod reports;

pub use client::ApiClient;
