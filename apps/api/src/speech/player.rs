//! Audio Advice Playback — per-session playback bookkeeping.
//!
//! One playback source is tracked at a time. Installing a new clip first
//! releases the previous one (scoped acquisition), and pressing the control
//! while playing stops synchronously without issuing a new synthesis
//! request. Synthesis or decode failure leaves playback at "not playing"
//! and never touches the overall lifecycle status.

use serde::Serialize;
use uuid::Uuid;

use crate::analysis::intel::CareerIntel;
use crate::analysis::view::{compose, AnalysisView};
use crate::errors::AppError;
use crate::sessions::SessionStore;
use crate::speech::narration;
use crate::speech::pcm::AudioClip;

/// Playback bookkeeping for one session.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// True while the synthesis request is in flight.
    pub is_generating: bool,
    clip: Option<AudioClip>,
}

/// Snapshot returned to clients after a toggle or session read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackStatus {
    pub is_playing: bool,
    pub is_generating: bool,
    pub has_audio: bool,
}

impl PlaybackState {
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            is_playing: self.is_playing,
            is_generating: self.is_generating,
            has_audio: self.clip.is_some(),
        }
    }

    pub fn clip(&self) -> Option<&AudioClip> {
        self.clip.as_ref()
    }

    /// Stops playback synchronously and releases the active source.
    pub fn stop(&mut self) {
        self.clip = None;
        self.is_playing = false;
    }

    pub fn begin_generating(&mut self) {
        self.is_generating = true;
    }

    /// Installs a freshly decoded clip, releasing any prior source first.
    pub fn install(&mut self, clip: AudioClip) {
        self.stop();
        self.clip = Some(clip);
        self.is_playing = true;
        self.is_generating = false;
    }

    /// Clears the in-flight flag after a failed synthesis; playback stays
    /// at "not playing" and any prior clip is left untouched.
    pub fn fail_generation(&mut self) {
        self.is_generating = false;
    }

    /// Drops everything — used when a new analysis run replaces the result
    /// the narration was built from.
    pub fn reset(&mut self) {
        self.stop();
        self.is_generating = false;
    }
}

/// Toggles the audio brief for a session.
///
/// Playing → synchronous stop, no synthesis request. Otherwise composes the
/// narration from the current result, synthesizes, decodes, and starts the
/// new clip.
pub async fn toggle_playback(
    store: &SessionStore,
    id: Uuid,
    intel: &dyn CareerIntel,
) -> Result<PlaybackStatus, AppError> {
    enum Step {
        Stopped(PlaybackStatus),
        Generate(String),
    }

    let step = store
        .update(id, |s| {
            if s.playback.is_playing {
                s.playback.stop();
                return Ok(Step::Stopped(s.playback.status()));
            }
            if s.playback.is_generating {
                return Err(AppError::Conflict(
                    "audio synthesis already in progress".to_string(),
                ));
            }
            match compose(s.result.as_ref(), &s.trends) {
                AnalysisView::Ready(view) => {
                    s.playback.begin_generating();
                    Ok(Step::Generate(narration(&view)))
                }
                AnalysisView::Empty => Err(AppError::Validation(
                    "no analysis result to narrate".to_string(),
                )),
            }
        })
        .await??;

    let text = match step {
        Step::Stopped(status) => return Ok(status),
        Step::Generate(text) => text,
    };

    let decoded = match intel.synthesize_advice(&text).await {
        Ok(payload) => {
            AudioClip::from_base64_pcm(&payload).map_err(|e| AppError::Speech(e.to_string()))
        }
        Err(e) => Err(AppError::Speech(e.to_string())),
    };

    match decoded {
        Ok(clip) => {
            store
                .update(id, |s| {
                    s.playback.install(clip);
                    s.playback.status()
                })
                .await
        }
        Err(e) => {
            let _ = store.update(id, |s| s.playback.fail_generation()).await;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

    use crate::analysis::models::{AnalysisResult, AnalysisStatus, Suggestions};
    use crate::analysis::trends::TrendsOutcome;
    use crate::llm_client::LlmError;

    struct MockVoice {
        payload: Result<String, ()>,
        calls: AtomicUsize,
    }

    impl MockVoice {
        fn returning(payload: impl Into<String>) -> Self {
            Self {
                payload: Ok(payload.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                payload: Err(()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CareerIntel for MockVoice {
        async fn analyze_fit(
            &self,
            _experience: &str,
            _job_description: &str,
        ) -> Result<AnalysisResult, LlmError> {
            unreachable!("playback never analyzes")
        }

        async fn market_trends(&self, _role_hint: &str) -> Result<TrendsOutcome, LlmError> {
            unreachable!("playback never fetches trends")
        }

        async fn synthesize_advice(&self, _narration: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.payload {
                Ok(p) => Ok(p.clone()),
                Err(()) => Err(LlmError::MissingAudio),
            }
        }
    }

    fn two_sample_payload() -> String {
        BASE64.encode([0x01, 0x00, 0x02, 0x00])
    }

    async fn session_with_result(store: &SessionStore) -> Uuid {
        let id = store.create().await;
        store
            .update(id, |s| {
                s.result = Some(AnalysisResult {
                    suggestions: Some(Suggestions {
                        positioning: Some("lead with depth".to_string()),
                        improvements: vec!["add metrics".to_string()],
                    }),
                    ..AnalysisResult::default()
                });
            })
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_toggle_generates_and_starts_playback() {
        let store = SessionStore::new();
        let id = session_with_result(&store).await;
        let voice = MockVoice::returning(two_sample_payload());

        let status = toggle_playback(&store, id, &voice).await.unwrap();

        assert!(status.is_playing);
        assert!(!status.is_generating);
        assert!(status.has_audio);
        assert_eq!(voice.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_toggle_while_playing_stops_without_synthesis() {
        let store = SessionStore::new();
        let id = session_with_result(&store).await;
        store
            .update(id, |s| {
                s.playback
                    .install(AudioClip::from_base64_pcm(&two_sample_payload()).unwrap());
            })
            .await
            .unwrap();
        let voice = MockVoice::returning("AAAA");

        let status = toggle_playback(&store, id, &voice).await.unwrap();

        assert!(!status.is_playing);
        assert!(!status.has_audio);
        assert_eq!(voice.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_synthesis_failure_leaves_not_playing_and_status_intact() {
        let store = SessionStore::new();
        let id = session_with_result(&store).await;
        store
            .update(id, |s| {
                s.transition(AnalysisStatus::Thinking).unwrap();
                s.transition(AnalysisStatus::Searching).unwrap();
                s.transition(AnalysisStatus::Complete).unwrap();
            })
            .await
            .unwrap();
        let voice = MockVoice::failing();

        let err = toggle_playback(&store, id, &voice).await.unwrap_err();
        assert!(matches!(err, AppError::Speech(_)));

        store
            .with(id, |s| {
                let playback = s.playback.status();
                assert!(!playback.is_playing);
                assert!(!playback.is_generating);
                // A speech failure never touches the lifecycle
                assert_eq!(s.status, AnalysisStatus::Complete);
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_decode_failure_is_a_speech_error() {
        let store = SessionStore::new();
        let id = session_with_result(&store).await;
        let voice = MockVoice::returning("@@not-base64@@");

        let err = toggle_playback(&store, id, &voice).await.unwrap_err();
        assert!(matches!(err, AppError::Speech(_)));

        let playing = store.with(id, |s| s.playback.is_playing).await.unwrap();
        assert!(!playing);
    }

    #[tokio::test]
    async fn test_toggle_without_result_is_rejected() {
        let store = SessionStore::new();
        let id = store.create().await;
        let voice = MockVoice::returning("AAAA");

        let err = toggle_playback(&store, id, &voice).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(voice.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_install_releases_prior_source() {
        let mut playback = PlaybackState::default();
        let first = AudioClip::from_base64_pcm(&BASE64.encode([0u8; 4])).unwrap();
        let second = AudioClip::from_base64_pcm(&BASE64.encode([0u8; 8])).unwrap();

        playback.install(first);
        assert_eq!(playback.clip().unwrap().sample_count(), 2);

        playback.install(second);
        assert!(playback.is_playing);
        assert_eq!(playback.clip().unwrap().sample_count(), 4);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut playback = PlaybackState::default();
        playback.install(AudioClip::from_base64_pcm(&BASE64.encode([0u8; 4])).unwrap());
        playback.begin_generating();

        playback.reset();

        let status = playback.status();
        assert!(!status.is_playing);
        assert!(!status.is_generating);
        assert!(!status.has_audio);
    }
}
