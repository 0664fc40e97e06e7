// SPDX-License-Identifier: MPL-2.0
//! Contact message delivery port.

use crate::domain::contact::FormState;
use thiserror::Error;

/// Errors a sender can report for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The destination refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),

    /// The destination could not be reached.
    #[error("sender unavailable: {0}")]
    Unavailable(String),
}

/// Delivers a validated contact form somewhere.
///
/// Implementations receive a snapshot of the form taken when the submission
/// was accepted; later edits to the live form do not affect it.
pub trait MessageSender: Send + Sync {
    /// Delivers the submission.
    ///
    /// # Errors
    ///
    /// Returns a [`SendError`] when the message could not be delivered.
    fn send(&self, submission: &FormState) -> Result<(), SendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_error_display_includes_reason() {
        let err = SendError::Unavailable("offline".into());
        assert_eq!(err.to_string(), "sender unavailable: offline");

        let err = SendError::Rejected("spam".into());
        assert_eq!(err.to_string(), "message rejected: spam");
    }
}
