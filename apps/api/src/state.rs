use std::sync::Arc;

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::llm_client::LanguageModel;
use crate::notify::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; handlers then serve their fallbacks.
    pub llm: Option<Arc<dyn LanguageModel>>,
    pub mailer: Arc<dyn Mailer>,
    pub jobs: JobStore,
    pub config: Config,
}
