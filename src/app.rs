use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tap/:key", post(handlers::tap_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/counts", get(handlers::get_counts))
        .route("/api/increment", post(handlers::increment))
        .route("/api/shortcut/:key", post(handlers::shortcut))
        .route("/api/reset", post(handlers::reset))
        .route("/api/share", get(handlers::get_share))
        .with_state(state)
}
