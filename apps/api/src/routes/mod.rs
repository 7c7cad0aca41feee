pub mod health;
pub mod quote;

use axum::{
    routing::get,
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/imagequote",
            get(quote::handle_get_quote).post(quote::handle_post_quote),
        )
        .with_state(state)
}
