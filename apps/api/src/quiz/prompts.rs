// Prompt template for quiz generation. The layout shown to the model is the
// one `quiz::parser` understands; change both together.

/// Number of questions the model is asked for.
pub const QUESTION_COUNT: usize = 10;

/// Quiz prompt template. Replace `{assunto}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Crie um questionário com 10 perguntas sobre "{assunto}".
Cada pergunta deve ter 4 alternativas (A, B, C, D) e indicar a resposta correta.
Formato esperado:
1. Pergunta 1
   A) Alternativa A
   B) Alternativa B
   C) Alternativa C
   D) Alternativa D
   Resposta Correta: B

2. Pergunta 2
   A) Alternativa A
   B) Alternativa B
   C) Alternativa C
   D) Alternativa D
   Resposta Correta: A

...e assim por diante para todas as 10 perguntas."#;

pub fn build_quiz_prompt(topic: &str) -> String {
    QUIZ_PROMPT_TEMPLATE.replace("{assunto}", topic)
}
