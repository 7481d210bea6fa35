pub mod app;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod logger;
pub mod models;
pub mod sheets;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
