use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no provider key is configured; every service then answers
    /// with its deterministic fallback.
    pub llm: Option<Arc<dyn LanguageModel>>,
    pub config: Config,
}

impl AppState {
    pub fn llm(&self) -> Option<&dyn LanguageModel> {
        self.llm.as_deref()
    }
}
