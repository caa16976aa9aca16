// Browser-facing quiz page: topic form, in-flight and error state, quiz form.
// Rendered on the server; selected answers are not submitted or scored.

pub mod handlers;
pub mod render;
pub mod state;
