//! Audio player state. The shell owns the actual audio element; the core
//! mirrors its progress and decides every position change, clamped to the
//! known duration.

use serde::{Deserialize, Serialize};

pub const SKIP_STEP_SECS: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub playing: bool,
    pub position_secs: f64,
    pub duration_secs: f64,
}

impl PlayerState {
    /// Optimistic play/pause flip; returns the new playing state so the
    /// caller can tell the shell which way to go.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Clamp a requested position into `[0, duration]` and adopt it.
    pub fn seek_to(&mut self, seconds: f64) -> f64 {
        let clamped = if seconds.is_finite() {
            seconds.clamp(0.0, self.duration_secs)
        } else {
            0.0
        };
        self.position_secs = clamped;
        clamped
    }

    pub fn skip_forward(&mut self) -> f64 {
        self.seek_to(self.position_secs + SKIP_STEP_SECS)
    }

    pub fn skip_backward(&mut self) -> f64 {
        self.seek_to(self.position_secs - SKIP_STEP_SECS)
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.duration_secs = if seconds.is_finite() && seconds > 0.0 {
            seconds
        } else {
            0.0
        };
    }

    pub fn set_position(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.position_secs = seconds.max(0.0);
        }
    }

    pub fn ended(&mut self) {
        self.playing = false;
        self.position_secs = 0.0;
    }
}

/// `M:SS` display formatting; anything non-finite renders as `0:00`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins}:{secs:02}")
}
