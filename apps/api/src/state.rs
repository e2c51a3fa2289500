use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeExtractor;
use crate::generation::fit_scoring::FitScorer;
use crate::llm_client::LlmClient;
use crate::storage::RecordStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub extractor: ResumeExtractor,
    pub store: RecordStore,
    /// Pluggable fit scorer. Default: KeywordFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    #[allow(dead_code)]
    pub config: Config,
}
