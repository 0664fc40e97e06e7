// SPDX-License-Identifier: MPL-2.0
//! Page-load fade-in.
//!
//! Each section fades in over [`ENTRANCE_FADE_MS`] once its own delay has
//! passed. The alpha is computed from the clock on every frame, so nothing
//! needs to be stored per element.

use crate::config::{ENTRANCE_FADE_MS, ENTRANCE_MAX_DELAY_MS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    started_at: Instant,
}

impl Entrance {
    #[must_use]
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    /// Opacity in `[0, 1]` of an element that starts fading `delay_ms`
    /// after the page appeared.
    #[must_use]
    pub fn alpha(&self, delay_ms: u64, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let delay = Duration::from_millis(delay_ms);
        let Some(progress) = elapsed.checked_sub(delay) else {
            return 0.0;
        };

        let t = (progress.as_secs_f32() / fade_duration().as_secs_f32()).min(1.0);
        ease_out(t)
    }

    /// Whether any element is still fading in.
    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < total_duration()
    }
}

fn fade_duration() -> Duration {
    Duration::from_millis(ENTRANCE_FADE_MS)
}

fn total_duration() -> Duration {
    Duration::from_millis(ENTRANCE_MAX_DELAY_MS + ENTRANCE_FADE_MS)
}

// Cubic ease-out
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
