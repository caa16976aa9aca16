// Quiz generation: prompt, completion call, JSON endpoint and text parser.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
