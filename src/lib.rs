pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod routing;
