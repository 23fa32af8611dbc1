//! Résumé analyzer: pluggable, trait-based wrapper around the suggestion engine.
//!
//! Default: `RuleBasedAnalyzer` (deterministic rule tables, no network).
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>` so another backend can be
//! swapped in at startup without touching handlers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeDraft;
use crate::scoring::suggestions::{analyze_resume, SuggestionBundle};

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, draft: &ResumeDraft) -> Result<SuggestionBundle, AppError>;
}

/// Runs the rule-based suggestion engine.
///
/// `delay` is optional latency the caller asks for (the form UI expects the
/// analysis to feel like a remote call); the engine itself never waits.
pub struct RuleBasedAnalyzer {
    pub delay: Duration,
}

impl RuleBasedAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for RuleBasedAnalyzer {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl ResumeAnalyzer for RuleBasedAnalyzer {
    async fn analyze(&self, draft: &ResumeDraft) -> Result<SuggestionBundle, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let bundle = analyze_resume(draft);
        debug!(
            "Analyzed draft: {} keyword gaps, {} format suggestions, score {}",
            bundle.keyword_suggestions.len(),
            bundle.format_suggestions.len(),
            bundle.ats_score
        );
        Ok(bundle)
    }
}
