pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quiz::handlers as quiz;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browser page
        .route("/", get(ui::handle_index))
        .route("/questionario", post(ui::handle_quiz_page))
        // JSON API
        .route("/api/questionario", post(quiz::handle_generate_quiz))
        .with_state(state)
}
