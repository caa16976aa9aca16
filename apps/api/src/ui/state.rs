use crate::quiz::models::Question;
use crate::quiz::parser::parse_with_report;

/// Session-local page state: one topic, at most one generation in flight.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub topic: String,
    /// `None` until a generation finishes successfully.
    pub questions: Option<Vec<Question>>,
    /// Mirrors the browser's in-flight flag for the length of one handler
    /// call; the visible "Gerando..." state is driven by the page script.
    pub loading: bool,
    pub error: Option<String>,
    /// Blocks dropped by the parser in the last successful generation.
    pub discarded: usize,
}

impl PageState {
    pub fn with_topic(topic: String) -> Self {
        PageState {
            topic,
            ..Default::default()
        }
    }

    /// The generate button is only enabled for a non-blank topic while idle.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.topic.trim().is_empty()
    }

    pub fn begin_generation(&mut self) {
        self.loading = true;
        self.error = None;
        self.questions = None;
        self.discarded = 0;
    }

    pub fn finish_with_text(&mut self, text: &str) {
        let report = parse_with_report(text);
        self.discarded = report.discarded.len();
        self.questions = Some(report.questions);
        self.loading = false;
    }

    pub fn finish_with_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// True once at least one question is ready to render.
    pub fn has_quiz(&self) -> bool {
        self.questions.as_ref().is_some_and(|q| !q.is_empty())
    }

    /// True when the model answered but nothing survived parsing.
    pub fn came_back_empty(&self) -> bool {
        self.questions.as_ref().is_some_and(|q| q.is_empty())
    }
}
