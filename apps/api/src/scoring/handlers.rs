//! Axum route handlers for the ATS scoring and assistant APIs.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeDraft;
use crate::scoring::assistant::{
    chat_reply, topic_suggestion, ChatReply, SuggestionTopic, SUGGESTION_TOPICS,
};
use crate::scoring::ats::{compute_ats_score, compute_preliminary_score, ScoreTier};
use crate::scoring::suggestions::SuggestionBundle;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub ats_score: u8,
    pub tier: ScoreTier,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TopicSuggestion {
    pub topic: String,
    pub suggestion: &'static str,
}

impl ScoreResponse {
    fn new(ats_score: u8) -> Self {
        Self {
            ats_score,
            tier: ScoreTier::from_score(ats_score),
        }
    }
}

/// POST /api/v1/ats/score
///
/// The score a draft would be saved with.
pub async fn handle_score(Json(draft): Json<ResumeDraft>) -> Json<ScoreResponse> {
    Json(ScoreResponse::new(compute_ats_score(&draft)))
}

/// POST /api/v1/ats/preliminary-score
///
/// Advisory score shown while the draft is being edited.
pub async fn handle_preliminary_score(Json(draft): Json<ResumeDraft>) -> Json<ScoreResponse> {
    Json(ScoreResponse::new(compute_preliminary_score(&draft)))
}

/// POST /api/v1/ats/analyze
///
/// Keyword gaps, format suggestions, tips, and an optional rewritten summary.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(draft): Json<ResumeDraft>,
) -> Result<Json<SuggestionBundle>, AppError> {
    let bundle = state.analyzer.analyze(&draft).await?;
    Ok(Json(bundle))
}

/// POST /api/v1/assistant/chat
pub async fn handle_chat(Json(req): Json<ChatRequest>) -> Result<Json<ChatReply>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }
    Ok(Json(chat_reply(&req.message)))
}

/// GET /api/v1/assistant/suggestions
pub async fn handle_list_topics() -> Json<&'static [SuggestionTopic]> {
    Json(SUGGESTION_TOPICS)
}

/// GET /api/v1/assistant/suggestions/:topic
pub async fn handle_topic_suggestion(Path(topic): Path<String>) -> Json<TopicSuggestion> {
    let suggestion = topic_suggestion(&topic);
    Json(TopicSuggestion { topic, suggestion })
}
