use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/click/add", post(handlers::click_add))
        .route("/click/sub", post(handlers::click_sub))
        .route("/api/state", get(handlers::get_state))
        .route("/api/click", post(handlers::click))
        .route("/api/target", post(handlers::update_target))
        .with_state(state)
}
