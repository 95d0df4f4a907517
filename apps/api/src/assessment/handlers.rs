//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::pipeline::generate_recommendations;
use crate::assessment::profile::UserProfile;
use crate::assessment::recommendation::CareerRecommendation;
use crate::assessment::session::AssessmentSession;
use crate::errors::{AppError, FAILURE_MESSAGE};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a session at the `Form` phase with an empty profile.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<AssessmentSession>, AppError> {
    let session = AssessmentSession::new();
    info!("Created assessment session {}", session.id);

    let mut sessions = state.sessions.write().await;
    sessions.insert(session.id, session.clone());

    Ok(Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AssessmentSession>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    Ok(Json(session.clone()))
}

/// POST /api/v1/sessions/:id/submit
///
/// The submit operation: presence-validate the profile, move the session to
/// `Pending`, run the pipeline, then settle to `Results` on success or back
/// to `Form` with the fixed failure message. The store lock is never held
/// across the model call.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<AssessmentSession>, AppError> {
    // Reject bad input before the session leaves Form.
    request.profile.validate()?;

    {
        let mut sessions = state.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
        session.begin(request.profile.clone())?;
    }

    let outcome = generate_recommendations(state.model.as_ref(), &request.profile).await;

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    match outcome {
        Ok(recommendations) => {
            info!(
                "Session {} settled with {} recommendations",
                session_id,
                recommendations.len()
            );
            session.complete(recommendations);
            Ok(Json(session.clone()))
        }
        Err(err) => {
            session.fail(FAILURE_MESSAGE);
            Err(err)
        }
    }
}

/// POST /api/v1/sessions/:id/reset
///
/// Clears the session back to the initial `Form` state. Refused while a
/// request is in flight.
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AssessmentSession>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    session.reset()?;
    info!("Session {session_id} reset");

    Ok(Json(session.clone()))
}

/// POST /api/v1/recommendations
///
/// Stateless pipeline invocation for callers that do not need session
/// tracking.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let recommendations = generate_recommendations(state.model.as_ref(), &request.profile).await?;
    Ok(Json(RecommendResponse { recommendations }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
