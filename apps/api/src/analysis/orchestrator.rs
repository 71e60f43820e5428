//! Analysis Orchestrator — drives the linear lifecycle
//! `IDLE → THINKING → SEARCHING → COMPLETE`, with `ERROR` reachable from
//! either in-flight phase.
//!
//! The orchestrator is the single boundary that converts provider failures
//! into the `ERROR` status; rendering (`analysis::view`) never raises. The
//! two network calls are strictly sequential — the trend lookup begins only
//! after the fit analysis has completed.

use chrono::{DateTime, Utc};
use tracing::{error, warn};
use uuid::Uuid;

use crate::analysis::intel::CareerIntel;
use crate::analysis::models::{AnalysisResult, AnalysisStatus, MarketTrend, UserInput};
use crate::errors::AppError;
use crate::sessions::SessionStore;
use crate::speech::player::PlaybackState;

/// Role hint passed to the grounded trend lookup.
pub const ROLE_HINT: &str = "Target Role from Job Description";

/// User-facing notice set when either lifecycle call hard-fails.
pub const ANALYSIS_FAILED_NOTICE: &str =
    "An error occurred during analysis. Please check your API Key and try again.";

/// One analysis session — the whole mutable state bag for one lifecycle.
/// Mutated exclusively through the orchestrator; read by the renderer.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub input: UserInput,
    pub status: AnalysisStatus,
    pub result: Option<AnalysisResult>,
    pub trends: Vec<MarketTrend>,
    /// User-visible failure notice; set at most once per run.
    pub notice: Option<String>,
    pub playback: PlaybackState,
    pub created_at: DateTime<Utc>,
    trace: Vec<AnalysisStatus>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            input: UserInput::default(),
            status: AnalysisStatus::Idle,
            result: None,
            trends: Vec::new(),
            notice: None,
            playback: PlaybackState::default(),
            created_at: Utc::now(),
            trace: vec![AnalysisStatus::Idle],
        }
    }

    /// Every status this session has held, in order, starting at `Idle`.
    pub fn trace(&self) -> &[AnalysisStatus] {
        &self.trace
    }

    /// Moves to `next` if the edge exists in the lifecycle graph.
    pub fn transition(&mut self, next: AnalysisStatus) -> Result<(), AppError> {
        if !legal_transition(self.status, next) {
            return Err(AppError::Conflict(format!(
                "illegal status transition {:?} -> {next:?}",
                self.status
            )));
        }
        self.status = next;
        self.trace.push(next);
        Ok(())
    }

    /// Accepts new input and enters `Thinking`.
    ///
    /// Refused while a run is in flight (the HTTP analog of the disabled
    /// submit control) and when either field is empty — in both cases no
    /// network call is issued. A fresh submit clears the previous result,
    /// trends, notice, and any leftover playback.
    pub fn submit(&mut self, input: UserInput) -> Result<(), AppError> {
        if self.status.is_loading() {
            return Err(AppError::Conflict(
                "analysis already in progress".to_string(),
            ));
        }
        if input.experience.trim().is_empty() || input.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "experience and job_description must both be non-empty".to_string(),
            ));
        }

        self.result = None;
        self.trends.clear();
        self.notice = None;
        self.playback.reset();
        self.input = input;
        self.transition(AnalysisStatus::Thinking)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn legal_transition(from: AnalysisStatus, to: AnalysisStatus) -> bool {
    use AnalysisStatus::*;
    matches!(
        (from, to),
        (Idle | Complete | Error, Thinking)
            | (Thinking, Searching)
            | (Searching, Complete)
            | (Thinking | Searching, Error)
    )
}

/// Runs one submitted session to completion: fit analysis, then the grounded
/// trend lookup. Call only after `Session::submit` has moved the session to
/// `Thinking`; must not run concurrently with itself for the same session.
pub async fn run_analysis(store: &SessionStore, id: Uuid, intel: &dyn CareerIntel) {
    let input = match store.with(id, |s| s.input.clone()).await {
        Ok(input) => input,
        Err(_) => {
            warn!("session {id} vanished before analysis started");
            return;
        }
    };

    let result = match intel
        .analyze_fit(&input.experience, &input.job_description)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            fail(store, id, &format!("fit analysis failed: {e}")).await;
            return;
        }
    };

    if apply(store, id, |s| {
        s.result = Some(result);
        s.transition(AnalysisStatus::Searching)
    })
    .await
    .is_err()
    {
        return;
    }

    match intel.market_trends(ROLE_HINT).await {
        Ok(outcome) => {
            if outcome.is_fallback() {
                warn!("session {id}: trend response unparseable, substituting sentinel entry");
            }
            let _ = apply(store, id, |s| {
                s.trends = outcome.into_trends();
                s.transition(AnalysisStatus::Complete)
            })
            .await;
        }
        Err(e) => fail(store, id, &format!("trend lookup failed: {e}")).await,
    }
}

async fn apply(
    store: &SessionStore,
    id: Uuid,
    f: impl FnOnce(&mut Session) -> Result<(), AppError> + Send,
) -> Result<(), AppError> {
    let applied = store.update(id, f).await.and_then(|inner| inner);
    if let Err(e) = &applied {
        error!("session {id}: failed to advance lifecycle: {e}");
    }
    applied
}

async fn fail(store: &SessionStore, id: Uuid, detail: &str) {
    error!("session {id}: {detail}");
    let _ = store
        .update(id, |s| {
            if let Err(e) = s.transition(AnalysisStatus::Error) {
                error!("session {id}: could not enter error state: {e}");
            }
            s.notice = Some(ANALYSIS_FAILED_NOTICE.to_string());
        })
        .await;
}
