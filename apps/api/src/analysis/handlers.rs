//! Axum route handlers for the analysis lifecycle.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::models::{AnalysisStatus, UserInput};
use crate::analysis::orchestrator::run_analysis;
use crate::analysis::view::{compose, AnalysisView};
use crate::errors::AppError;
use crate::quotes::{random_quote, Quote};
use crate::speech::player::{toggle_playback, PlaybackStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub status: AnalysisStatus,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub experience: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    pub status: AnalysisStatus,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub status: AnalysisStatus,
    pub view: AnalysisView,
    pub notice: Option<String>,
    pub playback: PlaybackStatus,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a fresh idle session.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            status: AnalysisStatus::Idle,
        }),
    )
}

/// POST /api/v1/sessions/:id/analyze
///
/// Submits both text blobs and starts the lifecycle on a background task.
/// Refused while a run is already in flight; refused without issuing any
/// network call if either field is empty.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    let input = UserInput {
        experience: request.experience,
        job_description: request.job_description,
    };

    state
        .sessions
        .update(session_id, |s| s.submit(input))
        .await
        .and_then(|inner| inner)?;

    let sessions = state.sessions.clone();
    let intel = state.intel.clone();
    tokio::spawn(async move {
        run_analysis(&sessions, session_id, intel.as_ref()).await;
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(AnalyzeResponse {
            session_id,
            status: AnalysisStatus::Thinking,
        }),
    ))
}

/// GET /api/v1/sessions/:id
///
/// Returns the lifecycle status plus the fully-defaulted display structure.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let response = state
        .sessions
        .with(session_id, |s| SessionResponse {
            session_id: s.id,
            status: s.status,
            view: compose(s.result.as_ref(), &s.trends),
            notice: s.notice.clone(),
            playback: s.playback.status(),
        })
        .await?;

    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/speech/toggle
///
/// Starts the audio brief, or stops it synchronously if already playing.
pub async fn handle_toggle_speech(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PlaybackStatus>, AppError> {
    let status = toggle_playback(&state.sessions, session_id, state.intel.as_ref()).await?;
    Ok(Json(status))
}

/// GET /api/v1/sessions/:id/speech.wav
///
/// Serves the active clip as a WAV stream.
pub async fn handle_speech_wav(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let clip = state
        .sessions
        .with(session_id, |s| s.playback.clip().cloned())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} has no audio clip")))?;

    Ok(([(header::CONTENT_TYPE, "audio/wav")], clip.to_wav()))
}

/// GET /api/v1/quote
///
/// One random motivational quote.
pub async fn handle_quote() -> Json<Quote> {
    Json(random_quote())
}
