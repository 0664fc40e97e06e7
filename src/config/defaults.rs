// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.
//!
//! # Categories
//!
//! - **Submission**: Simulated send latency and success popup duration
//! - **Entrance**: Page-load fade-in timing

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Default simulated network latency of a submission (in milliseconds).
pub const DEFAULT_SEND_DELAY_MS: u64 = 1500;

/// Minimum simulated latency (in milliseconds).
pub const MIN_SEND_DELAY_MS: u64 = 100;

/// Maximum simulated latency (in milliseconds).
pub const MAX_SEND_DELAY_MS: u64 = 10_000;

/// Default time the success popup stays visible (in milliseconds).
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 5000;

/// Minimum success popup duration (in milliseconds).
pub const MIN_SUCCESS_DISPLAY_MS: u64 = 1000;

/// Maximum success popup duration (in milliseconds).
pub const MAX_SUCCESS_DISPLAY_MS: u64 = 30_000;

// ==========================================================================
// Entrance Animation Defaults
// ==========================================================================

/// Duration of a single element's fade-in (in milliseconds).
pub const ENTRANCE_FADE_MS: u64 = 600;

/// Stagger between consecutive contact cards (in milliseconds).
pub const ENTRANCE_STAGGER_MS: u64 = 100;

/// Delay of the last staggered element (in milliseconds).
pub const ENTRANCE_MAX_DELAY_MS: u64 = 400;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SEND_DELAY_MS > 0);
    assert!(MAX_SEND_DELAY_MS >= MIN_SEND_DELAY_MS);
    assert!(DEFAULT_SEND_DELAY_MS >= MIN_SEND_DELAY_MS);
    assert!(DEFAULT_SEND_DELAY_MS <= MAX_SEND_DELAY_MS);

    assert!(MIN_SUCCESS_DISPLAY_MS > 0);
    assert!(MAX_SUCCESS_DISPLAY_MS >= MIN_SUCCESS_DISPLAY_MS);
    assert!(DEFAULT_SUCCESS_DISPLAY_MS >= MIN_SUCCESS_DISPLAY_MS);
    assert!(DEFAULT_SUCCESS_DISPLAY_MS <= MAX_SUCCESS_DISPLAY_MS);

    assert!(ENTRANCE_FADE_MS > 0);
    assert!(ENTRANCE_MAX_DELAY_MS >= ENTRANCE_STAGGER_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_defaults_are_valid() {
        assert_eq!(DEFAULT_SEND_DELAY_MS, 1500);
        assert_eq!(DEFAULT_SUCCESS_DISPLAY_MS, 5000);
        assert!(DEFAULT_SEND_DELAY_MS < DEFAULT_SUCCESS_DISPLAY_MS);
    }

    #[test]
    fn entrance_stagger_fits_four_steps() {
        assert_eq!(ENTRANCE_MAX_DELAY_MS, ENTRANCE_STAGGER_MS * 4);
    }
}
