use crate::quiz::generator::QuizGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data; each request works on its own values.
#[derive(Clone)]
pub struct AppState {
    pub generator: QuizGenerator,
}
