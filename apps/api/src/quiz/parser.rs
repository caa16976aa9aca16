//! Quiz text parser — recovers `Question`s from the model's numbered-list output.
//!
//! Expected block layout (leading indentation is ignored):
//!
//! ```text
//! 1. What color is the sky?
//!    A) Red
//!    B) Blue
//!    C) Green
//!    D) Yellow
//!    Resposta Correta: B
//! ```
//!
//! The parser is a three-state machine (`Idle`, `Accumulating`, `Complete`).
//! A question is emitted at exactly one point: the `Resposta Correta:` line,
//! and only when the block passes the completeness check. Blocks still
//! accumulating at the next question line or at end of input are discarded.
//! Unrecognized lines are skipped; nothing here returns an error.

use std::fmt;

use tracing::warn;

use crate::quiz::models::{OptionLabel, Options, Question};

const ANSWER_MARKER: &str = "Resposta Correta:";

/// Why a question block was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    EmptyPrompt,
    MissingOptions(Vec<OptionLabel>),
    MissingAnswer,
    InvalidAnswer(String),
    AnswerBeforeOptions,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::EmptyPrompt => f.write_str("empty question text"),
            Defect::MissingOptions(labels) => {
                let labels: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
                write!(f, "missing options {}", labels.join(", "))
            }
            Defect::MissingAnswer => f.write_str("missing correct answer"),
            Defect::InvalidAnswer(value) => write!(f, "invalid correct answer '{value}'"),
            Defect::AnswerBeforeOptions => f.write_str("correct answer given before all options"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedBlock {
    pub id: u32,
    pub defect: Defect,
}

/// Parse result with visibility into what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub questions: Vec<Question>,
    pub discarded: Vec<DiscardedBlock>,
}

/// A classified input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Question(&'a str),
    Option(OptionLabel, &'a str),
    Answer(&'a str),
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(prompt) = strip_question_number(line) {
        return Line::Question(prompt);
    }
    if let Some((label, text)) = split_option(line) {
        return Line::Option(label, text);
    }
    if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
        if rest.starts_with(char::is_whitespace) {
            return Line::Answer(rest.trim());
        }
    }
    Line::Other
}

/// `"12. text"` → `Some("text")`. Digits, a period, then whitespace or the
/// end of the line. A bare `"2."` still opens a (promptless) block so the
/// options that follow cannot leak into the previous question.
fn strip_question_number(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    let rest = rest.strip_prefix('.')?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// `"B) text"` → `Some((B, "text"))`. Labels outside `A`..`D` are rejected.
fn split_option(line: &str) -> Option<(OptionLabel, &str)> {
    let mut chars = line.chars();
    let label = OptionLabel::from_char(chars.next()?)?;
    let rest = chars.as_str().strip_prefix(')')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((label, rest.trim()))
}

/// A question block under construction.
#[derive(Debug)]
struct Draft {
    id: u32,
    prompt: String,
    options: Options,
    answer: Option<String>,
}

impl Draft {
    fn open(id: u32, prompt: &str) -> Self {
        Draft {
            id,
            prompt: prompt.to_string(),
            options: Options::default(),
            answer: None,
        }
    }

    /// The completeness check: prompt, four options, and a valid label.
    fn check(&self) -> Result<OptionLabel, Defect> {
        if self.prompt.is_empty() {
            return Err(Defect::EmptyPrompt);
        }
        let missing = self.options.missing();
        if !missing.is_empty() {
            return Err(Defect::MissingOptions(missing));
        }
        let answer = self.answer.as_deref().ok_or(Defect::MissingAnswer)?;
        OptionLabel::parse(answer).ok_or_else(|| Defect::InvalidAnswer(answer.to_string()))
    }

    fn into_question(self, correct: OptionLabel) -> Question {
        Question {
            id: self.id,
            prompt: self.prompt,
            options: self.options,
            correct,
        }
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Accumulating(Draft),
    Complete,
}

struct Parser {
    state: State,
    next_id: u32,
    report: ParseReport,
}

impl Parser {
    fn new() -> Self {
        Parser {
            state: State::Idle,
            next_id: 1,
            report: ParseReport::default(),
        }
    }

    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Question(prompt) => {
                self.close_block();
                let id = self.next_id;
                self.next_id += 1;
                self.state = State::Accumulating(Draft::open(id, prompt));
            }
            Line::Option(label, text) => {
                if let State::Accumulating(draft) = &mut self.state {
                    draft.options.set(label, text.to_string());
                }
            }
            Line::Answer(value) => {
                let State::Accumulating(draft) = &mut self.state else {
                    return;
                };
                draft.answer = Some(value.to_string());
                if let Ok(correct) = draft.check() {
                    if let State::Accumulating(draft) =
                        std::mem::replace(&mut self.state, State::Complete)
                    {
                        self.report.questions.push(draft.into_question(correct));
                    }
                }
            }
            Line::Other => {}
        }
    }

    /// Drops a block that never reached `Complete`.
    fn close_block(&mut self) {
        if let State::Accumulating(draft) = std::mem::replace(&mut self.state, State::Idle) {
            let defect = match draft.check() {
                Err(defect) => defect,
                // Complete now, but the answer line arrived while options were missing.
                Ok(_) => Defect::AnswerBeforeOptions,
            };
            self.report.discarded.push(DiscardedBlock {
                id: draft.id,
                defect,
            });
        }
    }

    fn finish(mut self) -> ParseReport {
        self.close_block();
        self.report
    }
}

/// Parses model output into the ordered sequence of well-formed questions,
/// also reporting the blocks that were discarded.
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut parser = Parser::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        parser.feed(classify(line));
    }
    let report = parser.finish();

    for block in &report.discarded {
        warn!("Discarded malformed question {}: {}", block.id, block.defect);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<Question> {
        parse_with_report(text).questions
    }

    const SKY: &str =
        "1. What color is the sky?\nA) Red\nB) Blue\nC) Green\nD) Yellow\nResposta Correta: B";

    fn block(n: u32, prompt: &str, answer: &str) -> String {
        format!(
            "{n}. {prompt}\nA) opt a\nB) opt b\nC) opt c\nD) opt d\nResposta Correta: {answer}\n\n"
        )
    }

    #[test]
    fn test_single_well_formed_block() {
        let questions = parse(SKY);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.id, 1);
        assert_eq!(q.prompt, "What color is the sky?");
        assert_eq!(q.options, Options::new("Red", "Blue", "Green", "Yellow"));
        assert_eq!(q.correct, OptionLabel::B);
    }

    #[test]
    fn test_missing_answer_line_yields_nothing() {
        let text = SKY.replace("\nResposta Correta: B", "");
        assert!(parse(&text).is_empty());
        let report = parse_with_report(&text);
        assert_eq!(
            report.discarded,
            vec![DiscardedBlock {
                id: 1,
                defect: Defect::MissingAnswer
            }]
        );
    }

    #[test]
    fn test_missing_option_is_omitted() {
        let text = SKY.replace("C) Green\n", "");
        let report = parse_with_report(&text);
        assert!(report.questions.is_empty());
        assert_eq!(
            report.discarded[0].defect,
            Defect::MissingOptions(vec![OptionLabel::C])
        );
    }

    #[test]
    fn test_out_of_range_answer_is_omitted() {
        let text = SKY.replace("Resposta Correta: B", "Resposta Correta: E");
        let report = parse_with_report(&text);
        assert!(report.questions.is_empty());
        assert_eq!(
            report.discarded[0].defect,
            Defect::InvalidAnswer("E".to_string())
        );
    }

    #[test]
    fn test_answer_with_trailing_text_is_invalid() {
        let text = SKY.replace("Resposta Correta: B", "Resposta Correta: B) Blue");
        assert!(parse(&text).is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = format!("{}{}{}", block(1, "One", "A"), block(2, "Two", "E"), block(3, "Three", "D"));
        assert_eq!(parse_with_report(&text), parse_with_report(&text));
    }

    #[test]
    fn test_ids_keep_gaps_for_discarded_blocks() {
        let text = format!("{}{}{}", block(1, "One", "A"), block(2, "Two", "X"), block(3, "Three", "D"));
        let ids: Vec<u32> = parse(&text).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_ids_follow_encounter_order_not_printed_numbers() {
        let text = format!("{}{}", block(7, "Seven", "A"), block(3, "Three", "B"));
        let questions = parse(&text);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].prompt, "Seven");
        assert_eq!(questions[1].id, 2);
    }

    #[test]
    fn test_ten_questions_parse_in_order() {
        let text: String = (1..=10).map(|n| block(n, &format!("Q{n}"), "C")).collect();
        let questions = parse(&text);
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[9].prompt, "Q10");
        assert!(questions.iter().all(|q| q.correct == OptionLabel::C));
    }

    #[test]
    fn test_repeated_answer_line_does_not_duplicate() {
        let text = format!("{SKY}\nResposta Correta: B\nResposta Correta: C");
        let questions = parse(&text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct, OptionLabel::B);
    }

    #[test]
    fn test_option_lines_after_completion_are_ignored() {
        let text = format!("{SKY}\nA) Purple");
        assert_eq!(parse(&text)[0].options.get(OptionLabel::A), "Red");
    }

    #[test]
    fn test_indented_lines_and_crlf() {
        let text = "1. Capital do Brasil?\r\n   A) Rio\r\n   B) Brasília\r\n   C) Recife\r\n   D) Salvador\r\n   Resposta Correta: B\r\n";
        let questions = parse(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.get(OptionLabel::B), "Brasília");
    }

    #[test]
    fn test_option_text_is_after_first_paren() {
        let text = SKY.replace("D) Yellow", "D) Yellow (pale)");
        assert_eq!(parse(&text)[0].options.get(OptionLabel::D), "Yellow (pale)");
    }

    #[test]
    fn test_unknown_letters_and_orphan_options_are_ignored() {
        let text = format!("A) orphan\nResposta Correta: A\n{}\nE) extra\nb) lower", SKY);
        let report = parse_with_report(&text);
        assert_eq!(report.questions.len(), 1);
        assert!(report.discarded.is_empty());
    }

    #[test]
    fn test_late_option_after_answer_cannot_complete_block() {
        let text = "1. Q?\nA) a\nB) b\nC) c\nResposta Correta: A\nD) d";
        let report = parse_with_report(text);
        assert!(report.questions.is_empty());
        assert_eq!(report.discarded[0].defect, Defect::AnswerBeforeOptions);
    }

    #[test]
    fn test_second_answer_line_can_complete_block() {
        let text = "1. Q?\nA) a\nB) b\nC) c\nResposta Correta: A\nD) d\nResposta Correta: D";
        let questions = parse(text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct, OptionLabel::D);
    }

    #[test]
    fn test_bare_number_line_opens_empty_block() {
        let text = "1. First?\nA) a1\nB) b1\n2. \nA) x\nB) y\nC) z\nD) w\nResposta Correta: A";
        let report = parse_with_report(text);
        assert!(report.questions.is_empty());
        assert_eq!(
            report.discarded,
            vec![
                DiscardedBlock {
                    id: 1,
                    defect: Defect::MissingOptions(vec![OptionLabel::C, OptionLabel::D])
                },
                DiscardedBlock {
                    id: 2,
                    defect: Defect::EmptyPrompt
                },
            ]
        );
    }

    #[test]
    fn test_bare_number_line_consumes_an_id() {
        let text = format!("2.\n{SKY}");
        let questions = parse(&text);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 2);
    }

    #[test]
    fn test_line_classification() {
        assert_eq!(classify("12. Hello"), Line::Question("Hello"));
        assert_eq!(classify("12.Hello"), Line::Other);
        assert_eq!(classify("12."), Line::Question(""));
        assert_eq!(classify("1.5 kg"), Line::Other);
        assert_eq!(classify(". Hello"), Line::Other);
        assert_eq!(classify("C) x"), Line::Option(OptionLabel::C, "x"));
        assert_eq!(classify("C)x"), Line::Other);
        assert_eq!(classify("Resposta Correta: A"), Line::Answer("A"));
        assert_eq!(classify("Resposta Correta:A"), Line::Other);
        assert_eq!(classify("Resposta: A"), Line::Other);
    }

    #[test]
    fn test_unparseable_text_is_empty() {
        let report = parse_with_report("Desculpe, não posso ajudar com isso.");
        assert!(report.questions.is_empty());
        assert!(report.discarded.is_empty());
    }

    #[test]
    fn test_defect_display() {
        let defect = Defect::MissingOptions(vec![OptionLabel::B, OptionLabel::D]);
        assert_eq!(defect.to_string(), "missing options B, D");
    }
}
