//! Departure countdown. Pure time arithmetic; the 1-second tick loop that
//! drives it lives in the app update logic.

use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Remaining time until departure, broken down for display.
///
/// Once the target instant has passed the breakdown freezes at zero and
/// `departed` is set, rather than holding the last computed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub departed: bool,
}

impl Countdown {
    #[must_use]
    pub fn remaining(target_ms: u64, now_ms: u64) -> Self {
        if now_ms >= target_ms {
            return Self { departed: true, ..Self::default() };
        }
        let distance = target_ms - now_ms;
        Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
            departed: false,
        }
    }
}
