// SPDX-License-Identifier: MPL-2.0
//! Simulated message delivery.
//!
//! There is no backend behind the contact page. [`SimulatedSender`] accepts
//! every message, and [`deliver_after`] adds the artificial latency that makes
//! the submit button show its loading state.

use crate::application::port::{MessageSender, SendError};
use crate::domain::contact::FormState;
use std::sync::Arc;
use std::time::Duration;

/// Sender that accepts every submission without contacting anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSender;

impl MessageSender for SimulatedSender {
    fn send(&self, _submission: &FormState) -> Result<(), SendError> {
        Ok(())
    }
}

/// Waits for `delay`, then hands the snapshot to `sender`.
///
/// # Errors
///
/// Returns whatever error the sender reports.
pub async fn deliver_after(
    sender: Arc<dyn MessageSender>,
    submission: FormState,
    delay: Duration,
) -> Result<(), SendError> {
    tokio::time::sleep(delay).await;
    sender.send(&submission)
}
