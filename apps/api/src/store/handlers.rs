//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeDraft, ResumeRecord};
use crate::state::AppState;
use crate::store::feed::{build_feed, FeedQuery};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct FeedParams {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub query: FeedQuery,
}

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub draft: ResumeDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveToggle {
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub success: bool,
    pub likes: u32,
    pub is_liked: bool,
}

/// Name, job title, and email must be present to save a résumé.
fn validate_new_resume(draft: &ResumeDraft) -> Result<(), AppError> {
    let required = [
        ("fullName", draft.full_name()),
        ("jobTitle", draft.job_title()),
        ("email", draft.email()),
    ];
    for (field, value) in required {
        if value.map_or(true, |v| v.trim().is_empty()) {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Scores the draft and saves it. The user's first résumé becomes active.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    validate_new_resume(&request.draft)?;

    let record = ResumeRecord::new(request.id.unwrap_or_default(), request.draft);
    let record = state.store.save(params.user_id, record).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/resumes
///
/// The user's résumés, newest first, narrowed by search / filter / tab.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    let records = state.store.list(params.user_id).await?;
    Ok(Json(build_feed(records, &params.query)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .get(params.user_id, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(record))
}

/// PUT /api/v1/resumes/:id
///
/// Replaces the content and re-scores. Likes and the active flag are kept.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(draft): Json<ResumeDraft>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state.store.update_draft(params.user_id, &id, draft).await?;
    Ok(Json(record))
}

/// POST /api/v1/resumes/:id/like
pub async fn handle_toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<LikeResponse>, AppError> {
    if !state.store.toggle_like(params.user_id, &id).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }

    let record = state
        .store
        .get(params.user_id, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    Ok(Json(LikeResponse {
        success: true,
        likes: record.likes,
        is_liked: record.is_liked,
    }))
}

/// PATCH /api/v1/resumes/:id/active
///
/// Activating one résumé deactivates the user's others.
pub async fn handle_set_active(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<ActiveToggle>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .set_active(params.user_id, &id, req.is_active)
        .await?;
    Ok(Json(record))
}

/// DELETE /api/v1/resumes
///
/// Drops every résumé the user has.
pub async fn handle_clear_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.store.clear(params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
