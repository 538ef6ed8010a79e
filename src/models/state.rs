//! Playback state machine states

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Where a pacer session is in its lifecycle
///
/// `Completed` and `Failed` are terminal: a session only leaves them by
/// being rebuilt. `Failed` means the host selection API refused a directive.
#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Completed,
    Failed,
}

impl PlaybackState {
    /// Whether `start()` may move this state to `Running`
    pub fn can_start(self) -> bool {
        matches!(self, PlaybackState::Idle | PlaybackState::Paused)
    }

    /// Whether speed changes still apply
    pub fn accepts_speed_change(self) -> bool {
        self != PlaybackState::Failed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Running => "running",
            PlaybackState::Paused => "paused",
            PlaybackState::Completed => "completed",
            PlaybackState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
