//! Axum route handler for the quiz JSON API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

pub const TOPIC_REQUIRED: &str = "O assunto é obrigatório.";

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub assunto: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub perguntas: String,
}

/// Returns the trimmed topic, or the validation error for a missing one.
pub fn require_topic(topic: Option<&str>) -> Result<&str, AppError> {
    match topic.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(AppError::Validation(TOPIC_REQUIRED.to_string())),
    }
}

/// POST /api/questionario
///
/// Generates quiz text for `assunto` and returns it unparsed.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let topic = require_topic(request.assunto.as_deref())?;

    let perguntas = state.generator.generate_questions(topic).await?;

    Ok(Json(QuizResponse { perguntas }))
}
