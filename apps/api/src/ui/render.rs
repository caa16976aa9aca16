//! Server-side HTML for the quiz page.

use std::fmt::Write;

use crate::quiz::models::Question;
use crate::ui::state::PageState;

const EMPTY_RESULT: &str =
    "Nenhuma pergunta válida foi encontrada na resposta do modelo. Tente novamente.";

const STYLE: &str = r#"
body { font-family: sans-serif; background: #f3f4f6; color: #111827; display: flex; justify-content: center; padding: 24px; }
main { background: #fff; padding: 32px; border-radius: 8px; box-shadow: 0 10px 25px rgba(0,0,0,.1); width: 100%; max-width: 28rem; }
h1, h2 { color: #4338ca; }
input[type=text] { width: 100%; padding: 12px; box-sizing: border-box; }
button { margin-top: 16px; width: 100%; padding: 12px; color: #fff; background: #4f46e5; border: 0; border-radius: 6px; }
button:disabled { opacity: .5; cursor: not-allowed; }
.question { margin-bottom: 24px; padding: 16px; border: 1px solid #e5e7eb; border-radius: 6px; background: #f9fafb; }
.question ul { list-style: none; padding: 0; }
.error { color: #ef4444; }
.notice { color: #b45309; }
.submit-answers { background: #16a34a; }
"#;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &PageState) -> String {
    let body = if page.has_quiz() {
        render_quiz(page)
    } else {
        render_topic_form(page)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Gerador de Questionário Interativo</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<h1>Gerador de Questionário</h1>
<p>Informe um assunto para gerar 10 questões com 4 alternativas!</p>
{body}
</main>
</body>
</html>"#
    )
}

/// The in-flight label and disabling are applied by the inline `onsubmit`
/// script; the server only renders idle pages.
fn render_topic_form(page: &PageState) -> String {
    let disabled_button = if page.can_submit() { "" } else { " disabled" };

    let mut html = format!(
        r#"<form method="post" action="/questionario" onsubmit="this.gerar.disabled = true; this.gerar.textContent = 'Gerando...';">
<input type="text" name="assunto" placeholder="Ex: História do Brasil, Física Quântica..." value="{topic}" oninput="this.form.gerar.disabled = this.value.trim() === '';">
<button type="submit" name="gerar"{disabled_button}>Gerar Questionário</button>
</form>
"#,
        topic = escape_html(&page.topic),
    );

    if let Some(error) = &page.error {
        let _ = writeln!(html, r#"<p class="error">{}</p>"#, escape_html(error));
    } else if page.came_back_empty() {
        let _ = writeln!(html, r#"<p class="notice">{EMPTY_RESULT}</p>"#);
    }

    html
}

fn render_quiz(page: &PageState) -> String {
    let mut html = String::from("<section>\n<h2>Seu Questionário</h2>\n");

    if page.discarded > 0 {
        let _ = writeln!(
            html,
            r#"<p class="notice">{} pergunta(s) descartada(s) por formato inválido.</p>"#,
            page.discarded
        );
    }

    for (index, question) in page.questions.iter().flatten().enumerate() {
        render_question(&mut html, index + 1, question);
    }

    html.push_str(
        r#"<button type="button" class="submit-answers">Enviar Respostas</button>
<p><a href="/">Novo questionário</a></p>
</section>
"#,
    );
    html
}

fn render_question(html: &mut String, position: usize, question: &Question) {
    let id = question.id;
    let _ = writeln!(
        html,
        r#"<div class="question">
<p><strong>{position}. {}</strong></p>
<ul>"#,
        escape_html(&question.prompt)
    );
    for (label, text) in question.options.iter() {
        let _ = writeln!(
            html,
            r#"<li><input type="radio" id="pergunta-{id}-alternativa-{label}" name="pergunta-{id}" value="{label}"> <label for="pergunta-{id}-alternativa-{label}">{label} {}</label></li>"#,
            escape_html(text)
        );
    }
    html.push_str("</ul>\n</div>\n");
}
