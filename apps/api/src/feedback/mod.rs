// Interview answer feedback: emotion-aware prompt building and feedback normalization.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod emotion;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
