// Interview question generation from a candidate's skill list.

pub mod generator;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod parser;
pub mod prompts;
