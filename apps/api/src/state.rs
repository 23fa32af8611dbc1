use std::sync::Arc;

use crate::config::Config;
use crate::scoring::analyzer::ResumeAnalyzer;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResumeStore>,
    /// Pluggable analyzer. Default: RuleBasedAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub config: Config,
}
