// SPDX-License-Identifier: MPL-2.0
//! Simulated send latency value object.
//!
//! This module provides a type-safe wrapper for the delay between an accepted
//! submission and its completion, in milliseconds.

use crate::config::{DEFAULT_SEND_DELAY_MS, MAX_SEND_DELAY_MS, MIN_SEND_DELAY_MS};
use std::time::Duration;

/// Simulated send latency in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (100–10000 ms).
///
/// # Example
///
/// ```
/// use contact_page::ui::state::SendDelay;
///
/// let delay = SendDelay::new(800);
/// assert_eq!(delay.value(), 800);
///
/// // Values outside range are clamped
/// let too_high = SendDelay::new(60_000);
/// assert_eq!(too_high.value(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendDelay(u64);

impl SendDelay {
    /// Creates a new delay value, clamping to valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_SEND_DELAY_MS, MAX_SEND_DELAY_MS))
    }

    /// Builds the delay from an optional config value.
    #[must_use]
    pub fn from_config(value: Option<u64>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SendDelay {
    fn default() -> Self {
        Self(DEFAULT_SEND_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(SendDelay::new(0).value(), MIN_SEND_DELAY_MS);
        assert_eq!(SendDelay::new(u64::MAX).value(), MAX_SEND_DELAY_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(SendDelay::new(100).value(), 100);
        assert_eq!(SendDelay::new(1500).value(), 1500);
        assert_eq!(SendDelay::new(10_000).value(), 10_000);
    }

    #[test]
    fn from_config_falls_back_to_default() {
        assert_eq!(SendDelay::from_config(None), SendDelay::default());
        assert_eq!(SendDelay::from_config(Some(50)).value(), MIN_SEND_DELAY_MS);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            SendDelay::default().as_duration(),
            Duration::from_millis(1500)
        );
    }
}
