use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/log", post(handlers::log_form))
        .route("/api/moods", get(handlers::get_moods))
        .route("/api/entries", get(handlers::get_entries).post(handlers::create_entry))
        .route("/api/daily", get(handlers::get_daily))
        .with_state(state)
}
