//! Audio advice — narration composition, PCM decoding, and per-session
//! playback bookkeeping.

pub mod pcm;
pub mod player;

use crate::analysis::view::ReadyView;

/// Composes the short narration read aloud by the audio brief: the
/// positioning statement followed by the improvement steps.
pub fn narration(view: &ReadyView) -> String {
    format!(
        "Here is my analysis. {}. To improve, consider these steps: {}",
        view.positioning,
        view.improvements.join(". ")
    )
}
