//! Quiz generation — turns a topic into the model's raw quiz text.
//!
//! Flow: build_quiz_prompt → CompletionService::complete → raw text.
//! The text is returned untouched; parsing belongs to the presentation side.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::CompletionService;
use crate::quiz::prompts::build_quiz_prompt;

/// User-facing message for every generation failure.
pub const GENERATION_FAILED: &str =
    "Não foi possível gerar as perguntas. Tente novamente mais tarde.";

/// The single failure the generator reports. The underlying cause is logged
/// and never leaves this module.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GenerationError {
    pub message: String,
}

impl GenerationError {
    fn generic() -> Self {
        GenerationError {
            message: GENERATION_FAILED.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct QuizGenerator {
    llm: Arc<dyn CompletionService>,
}

impl QuizGenerator {
    pub fn new(llm: Arc<dyn CompletionService>) -> Self {
        Self { llm }
    }

    /// Asks the model for ten questions about `topic` and returns its raw text.
    /// The caller is responsible for rejecting an empty topic.
    pub async fn generate_questions(&self, topic: &str) -> Result<String, GenerationError> {
        let prompt = build_quiz_prompt(topic);

        match self.llm.complete(&prompt).await {
            Ok(text) => {
                info!("Generated quiz text for topic '{topic}' ({} bytes)", text.len());
                Ok(text)
            }
            Err(e) => {
                error!("Quiz generation failed for topic '{topic}': {e}");
                Err(GenerationError::generic())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubCompletion;
    use super::*;

    #[tokio::test]
    async fn test_returns_raw_text_verbatim() {
        let raw = "1. Q?\n  A) a\nlixo\n";
        let stub = Arc::new(StubCompletion::replying(raw));
        let generator = QuizGenerator::new(stub.clone());

        let text = generator.generate_questions("Química").await.unwrap();

        assert_eq!(text, raw);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_sends_topic_in_prompt() {
        let stub = Arc::new(StubCompletion::replying("ok"));
        let generator = QuizGenerator::new(stub.clone());

        generator.generate_questions("Física Quântica").await.unwrap();

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_quiz_prompt("Física Quântica"));
    }

    #[tokio::test]
    async fn test_failure_is_reduced_to_generic_message() {
        let stub = Arc::new(StubCompletion::failing());
        let generator = QuizGenerator::new(stub.clone());

        let err = generator.generate_questions("Química").await.unwrap_err();

        assert_eq!(err.to_string(), GENERATION_FAILED);
        assert!(!err.message.contains("quota"));
        assert_eq!(stub.calls(), 1);
    }
}
