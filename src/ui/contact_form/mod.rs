// SPDX-License-Identifier: MPL-2.0
//! Contact form component.
//!
//! [`state::FormController`] holds the form logic and knows nothing about
//! Iced. [`component::State`] wraps it with the widget state (the message
//! editor buffer), schedules the send and hide timers as abortable tasks, and
//! logs what happens. [`view`] renders the fields.

pub mod component;
pub mod state;
pub mod view;

pub use component::{State, Timing};
pub use state::{FormController, SendOutcome, SendTicket, SubmitOutcome};

use crate::application::port::SendError;
use crate::domain::contact::{Field, Purpose};
use iced::widget::text_editor;

/// Messages emitted by the contact form widgets and its timers.
#[derive(Debug, Clone)]
pub enum Message {
    /// A single-line input changed.
    FieldChanged(Field, String),
    /// The message editor received an action (typing, cursor movement, ...).
    MessageEdited(text_editor::Action),
    PurposeSelected(Purpose),
    PickerOpened,
    PickerClosed,
    /// Move focus to the next single-line input.
    FocusNext,
    /// Move focus to the previous single-line input.
    FocusPrevious,
    /// Drop the focus highlight.
    Blur,
    Submit,
    /// The simulated send finished.
    SendCompleted {
        generation: u64,
        result: Result<(), SendError>,
    },
    /// The success popup's display time elapsed.
    HideSuccess { generation: u64 },
}
