// SPDX-License-Identifier: MPL-2.0
//! Success popup display duration.

use crate::config::{
    DEFAULT_SUCCESS_DISPLAY_MS, MAX_SUCCESS_DISPLAY_MS, MIN_SUCCESS_DISPLAY_MS,
};
use std::time::Duration;

/// How long the success popup stays visible, in milliseconds (1000–30000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessDisplay(u64);

impl SuccessDisplay {
    /// Creates a new duration, clamping to valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_SUCCESS_DISPLAY_MS, MAX_SUCCESS_DISPLAY_MS))
    }

    #[must_use]
    pub fn from_config(value: Option<u64>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SuccessDisplay {
    fn default() -> Self {
        Self(DEFAULT_SUCCESS_DISPLAY_MS)
    }
}
