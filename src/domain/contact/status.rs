// SPDX-License-Identifier: MPL-2.0
//! Submission lifecycle status.

/// Where the form is in its submit cycle.
///
/// `Idle` → `Submitting` on a valid submit, → `SucceededDisplay` once the
/// send completes, → `Idle` when the success popup hides. A failed send goes
/// straight from `Submitting` back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    SucceededDisplay,
}

impl SubmissionStatus {
    /// Whether a new submission may start.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        self == SubmissionStatus::Idle
    }

    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    /// Whether the success popup is visible.
    #[must_use]
    pub fn shows_success(self) -> bool {
        self == SubmissionStatus::SucceededDisplay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn only_idle_accepts_submit() {
        assert!(SubmissionStatus::Idle.accepts_submit());
        assert!(!SubmissionStatus::Submitting.accepts_submit());
        assert!(!SubmissionStatus::SucceededDisplay.accepts_submit());
    }

    #[test]
    fn success_popup_visible_only_in_display_state() {
        assert!(SubmissionStatus::SucceededDisplay.shows_success());
        assert!(!SubmissionStatus::Idle.shows_success());
        assert!(!SubmissionStatus::Submitting.shows_success());
    }
}
