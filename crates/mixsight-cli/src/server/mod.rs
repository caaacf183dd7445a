//! HTTP surface for the analysis pipeline.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::run_server;
pub use state::AppState;
