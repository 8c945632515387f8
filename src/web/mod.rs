pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod state;
pub mod templates;
pub mod uploads;

pub use state::AppState;
