// Screening pipeline: prompt construction, model-output parsing, the
// bounded batch evaluator, and ranking/email selection.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod evaluator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod ranking;
