//! Axum route handlers for the browser-facing quiz page.

use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::quiz::handlers::require_topic;
use crate::quiz::prompts::QUESTION_COUNT;
use crate::state::AppState;
use crate::ui::render::render_page;
use crate::ui::state::PageState;

#[derive(Debug, Deserialize)]
pub struct TopicForm {
    #[serde(default)]
    pub assunto: String,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageState::default()))
}

/// POST /questionario
///
/// Generates and parses a quiz for the submitted topic and renders it.
/// Failures re-render the topic form with the error message.
pub async fn handle_quiz_page(
    State(state): State<AppState>,
    Form(form): Form<TopicForm>,
) -> (StatusCode, Html<String>) {
    let mut page = PageState::with_topic(form.assunto);

    let checked = require_topic(Some(page.topic.as_str())).map(str::to_string);
    let topic = match checked {
        Ok(topic) => topic,
        Err(e) => return error_page(page, e),
    };

    page.begin_generation();
    match state.generator.generate_questions(&topic).await {
        Ok(text) => page.finish_with_text(&text),
        Err(e) => return error_page(page, AppError::from(e)),
    }

    info!(
        "Rendered {} of {QUESTION_COUNT} requested questions for '{topic}' ({} discarded)",
        page.questions.as_ref().map_or(0, Vec::len),
        page.discarded
    );

    (StatusCode::OK, Html(render_page(&page)))
}

fn error_page(mut page: PageState, error: AppError) -> (StatusCode, Html<String>) {
    let (status, message) = error.parts();
    page.finish_with_error(message);
    (status, Html(render_page(&page)))
}
