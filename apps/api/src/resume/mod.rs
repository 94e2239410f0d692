// Resume skill extraction: PDF text → keyword scan → optional model refinement.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod parser;
pub mod pdf;
pub mod prompts;
