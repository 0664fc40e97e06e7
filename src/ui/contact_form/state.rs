// SPDX-License-Identifier: MPL-2.0
//! Contact form controller.
//!
//! Owns the field values, the validation errors, the submission status and
//! the focused field. It never schedules anything itself: [`FormController::submit`]
//! hands back a [`SendTicket`] and the component turns it into a timed task.
//! Every ticket carries the controller's generation at the time it was issued;
//! completions from an older generation are reported as stale and ignored.

use crate::application::port::SendError;
use crate::domain::contact::{validate, ErrorState, Field, FormState, Purpose, SubmissionStatus};

/// Permission to run one simulated send for a snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    pub generation: u64,
    pub snapshot: FormState,
}

/// Result of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid; a send should be scheduled.
    Accepted(SendTicket),
    /// Validation failed; the errors are now on the controller.
    Invalid,
    /// A submission is already in flight or the popup is showing.
    Busy,
}

/// Result of feeding a send completion back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The form was reset and the popup is showing; schedule the hide timer.
    Delivered { generation: u64 },
    /// The send failed; the form is unchanged and the status is idle again.
    Failed(SendError),
    /// The completion belongs to a submission that no longer exists.
    Stale,
}

/// State behind the contact form.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: FormState,
    errors: ErrorState,
    status: SubmissionStatus,
    focused: Option<Field>,
    generation: u64,
}

impl FormController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stores a new value for `field` and drops its error, if any.
    ///
    /// The field is not re-validated. Returns true if an error was cleared.
    pub fn on_field_change(&mut self, field: Field, value: String) -> bool {
        self.form.set(field, value);
        self.errors.clear(field)
    }

    /// Stores the picked purpose and drops the purpose error, if any.
    pub fn select_purpose(&mut self, purpose: Purpose) -> bool {
        self.form.purpose = Some(purpose);
        self.errors.clear(Field::Purpose)
    }

    pub fn on_focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn on_blur(&mut self) {
        self.focused = None;
    }

    /// Whether `field` should be drawn with the focus highlight.
    #[must_use]
    pub fn is_highlighted(&self, field: Field) -> bool {
        self.focused == Some(field)
    }

    /// Validates the form and, if it is valid, starts a submission.
    ///
    /// Ignored unless the status is idle. On failure the errors replace the
    /// current ones and nothing else changes.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.status.accepts_submit() {
            return SubmitOutcome::Busy;
        }

        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid;
        }

        self.generation = self.generation.wrapping_add(1);
        self.status = SubmissionStatus::Submitting;

        SubmitOutcome::Accepted(SendTicket {
            generation: self.generation,
            snapshot: self.form.clone(),
        })
    }

    /// Applies the result of the send issued with `generation`.
    pub fn complete_send(
        &mut self,
        generation: u64,
        result: Result<(), SendError>,
    ) -> SendOutcome {
        if generation != self.generation || !self.status.is_submitting() {
            return SendOutcome::Stale;
        }

        match result {
            Ok(()) => {
                self.form.reset();
                self.errors.clear_all();
                self.status = SubmissionStatus::SucceededDisplay;
                SendOutcome::Delivered { generation }
            }
            Err(err) => {
                self.status = SubmissionStatus::Idle;
                SendOutcome::Failed(err)
            }
        }
    }

    /// Hides the success popup shown for `generation`.
    ///
    /// Returns false when the request is stale.
    pub fn hide_success(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.status.shows_success() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Invalidates every outstanding ticket.
    ///
    /// Called when the page goes away; completions that still arrive are
    /// reported as stale.
    pub fn teardown(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.status = SubmissionStatus::Idle;
        self.focused = None;
    }
}
