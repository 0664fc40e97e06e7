// SPDX-License-Identifier: MPL-2.0
//! Contact form component encapsulating state and update logic.

use super::state::{FormController, SendOutcome, SubmitOutcome};
use super::{view, Message};
use crate::application::port::MessageSender;
use crate::domain::contact::{Field, SubmissionStatus};
use crate::infrastructure::deliver_after;
use crate::ui::state::{SendDelay, SuccessDisplay};
use iced::task;
use iced::widget::{operation, text_editor};
use iced::Task;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Delays used by the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub send_delay: SendDelay,
    pub success_display: SuccessDisplay,
}

/// Contact form state owned by the application.
pub struct State {
    controller: FormController,
    message_editor: text_editor::Content,
    sender: Arc<dyn MessageSender>,
    timing: Timing,
    send_task: Option<task::Handle>,
    hide_task: Option<task::Handle>,
    submitting_since: Option<Instant>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("controller", &self.controller)
            .field("timing", &self.timing)
            .field("send_pending", &self.send_task.is_some())
            .field("hide_pending", &self.hide_task.is_some())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(sender: Arc<dyn MessageSender>, timing: Timing) -> Self {
        Self {
            controller: FormController::new(),
            message_editor: text_editor::Content::new(),
            sender,
            timing,
            send_task: None,
            hide_task: None,
            submitting_since: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    #[must_use]
    pub fn message_editor(&self) -> &text_editor::Content {
        &self.message_editor
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.controller.status()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.controller.status().is_submitting()
    }

    #[must_use]
    pub fn shows_success(&self) -> bool {
        self.controller.status().shows_success()
    }

    /// Time spent in the current submission, for the spinner angle.
    #[must_use]
    pub fn submitting_elapsed(&self, now: Instant) -> Duration {
        self.submitting_since
            .map_or(Duration::ZERO, |since| now.saturating_duration_since(since))
    }

    /// Whether a timer task is still scheduled.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.send_task.is_some() || self.hide_task.is_some()
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.controller.on_focus(field);
                self.controller.on_field_change(field, value);
                Task::none()
            }
            Message::MessageEdited(action) => {
                let is_edit = action.is_edit();
                self.message_editor.perform(action);
                self.controller.on_focus(Field::Message);
                if is_edit {
                    self.controller
                        .on_field_change(Field::Message, self.message_editor.text());
                }
                Task::none()
            }
            Message::PurposeSelected(purpose) => {
                self.controller.select_purpose(purpose);
                Task::none()
            }
            Message::PickerOpened => {
                self.controller.on_focus(Field::Purpose);
                Task::none()
            }
            Message::PickerClosed => {
                if self.controller.focused() == Some(Field::Purpose) {
                    self.controller.on_blur();
                }
                Task::none()
            }
            Message::FocusNext => self.focus(next_input(self.controller.focused())),
            Message::FocusPrevious => self.focus(previous_input(self.controller.focused())),
            Message::Blur => {
                self.controller.on_blur();
                Task::none()
            }
            Message::Submit => self.submit(),
            Message::SendCompleted { generation, result } => {
                self.handle_send_completed(generation, result)
            }
            Message::HideSuccess { generation } => {
                if self.controller.hide_success(generation) {
                    self.hide_task = None;
                    tracing::debug!(generation, "success popup hidden");
                } else {
                    tracing::debug!(generation, "dropping stale hide timer");
                }
                Task::none()
            }
        }
    }

    fn focus(&mut self, field: Field) -> Task<Message> {
        self.controller.on_focus(field);
        match view::input_id(field) {
            Some(id) => operation::focus(id),
            None => Task::none(),
        }
    }

    fn submit(&mut self) -> Task<Message> {
        match self.controller.submit() {
            SubmitOutcome::Accepted(ticket) => {
                tracing::info!(
                    generation = ticket.generation,
                    purpose = ticket.snapshot.purpose.map_or("", |p| p.as_str()),
                    "submission accepted"
                );
                self.submitting_since = Some(Instant::now());

                let generation = ticket.generation;
                let (task, handle) = Task::perform(
                    deliver_after(
                        Arc::clone(&self.sender),
                        ticket.snapshot,
                        self.timing.send_delay.as_duration(),
                    ),
                    move |result| Message::SendCompleted { generation, result },
                )
                .abortable();
                self.send_task = Some(handle);
                task
            }
            SubmitOutcome::Invalid => {
                let fields: Vec<&str> = self
                    .controller
                    .errors()
                    .fields()
                    .into_iter()
                    .map(Field::key)
                    .collect();
                tracing::debug!(?fields, "submission rejected by validation");
                Task::none()
            }
            SubmitOutcome::Busy => {
                tracing::debug!(status = ?self.controller.status(), "submit ignored while busy");
                Task::none()
            }
        }
    }

    fn handle_send_completed(
        &mut self,
        generation: u64,
        result: Result<(), crate::application::port::SendError>,
    ) -> Task<Message> {
        match self.controller.complete_send(generation, result) {
            SendOutcome::Delivered { generation } => {
                self.send_task = None;
                self.submitting_since = None;
                self.message_editor = text_editor::Content::new();
                tracing::info!(generation, "message sent");

                let (task, handle) = Task::perform(
                    tokio::time::sleep(self.timing.success_display.as_duration()),
                    move |()| Message::HideSuccess { generation },
                )
                .abortable();
                self.hide_task = Some(handle);
                task
            }
            SendOutcome::Failed(err) => {
                self.send_task = None;
                self.submitting_since = None;
                tracing::error!(generation, error = %err, "form submission failed");
                Task::none()
            }
            SendOutcome::Stale => {
                tracing::debug!(generation, "dropping stale send completion");
                Task::none()
            }
        }
    }

    /// Aborts pending timers and invalidates any completion still in flight.
    pub fn teardown(&mut self) {
        for handle in [self.send_task.take(), self.hide_task.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
        self.submitting_since = None;
        self.controller.teardown();
    }
}

impl Drop for State {
    fn drop(&mut self) {
        if self.has_pending_timers() {
            self.teardown();
        }
    }
}

/// Single-line input that precedes `current` in display order.
fn previous_input(current: Option<Field>) -> Field {
    let mut field = current.map_or(Field::Name, Field::previous);
    while view::input_id(field).is_none() {
        field = field.previous();
    }
    field
}

/// Single-line input that follows `current` in display order.
fn next_input(current: Option<Field>) -> Field {
    let mut field = current.map_or(Field::Name, Field::next);
    while view::input_id(field).is_none() {
        field = field.next();
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SendError;
    use crate::domain::contact::{FormState, Purpose};
    use crate::infrastructure::SimulatedSender;
    use iced::widget::text_editor::{Action, Edit};

    fn state() -> State {
        State::new(Arc::new(SimulatedSender), Timing::default())
    }

    fn fill(state: &mut State) {
        let _ = state.handle_message(Message::FieldChanged(Field::Name, "Jane".into()));
        let _ = state.handle_message(Message::FieldChanged(Field::Email, "jane@x.com".into()));
        let _ = state.handle_message(Message::PurposeSelected(Purpose::Business));
        for c in "Hi".chars() {
            let _ = state.handle_message(Message::MessageEdited(Action::Edit(Edit::Insert(c))));
        }
    }

    #[test]
    fn typing_in_the_editor_updates_the_message_field() {
        let mut state = state();
        fill(&mut state);

        assert_eq!(state.controller().form().message.trim(), "Hi");
        assert_eq!(state.controller().focused(), Some(Field::Message));
    }

    #[test]
    fn submit_schedules_the_send() {
        let mut state = state();
        fill(&mut state);

        let _ = state.handle_message(Message::Submit);

        assert!(state.is_submitting());
        assert!(state.has_pending_timers());
    }

    #[test]
    fn invalid_submit_schedules_nothing() {
        let mut state = state();
        let _ = state.handle_message(Message::Submit);

        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(!state.has_pending_timers());
        assert_eq!(state.controller().errors().len(), 4);
    }

    #[tokio::test]
    async fn completion_resets_editor_and_shows_popup() {
        let mut state = state();
        fill(&mut state);
        let _ = state.handle_message(Message::Submit);
        let generation = state.controller().generation();

        let _ = state.handle_message(Message::SendCompleted {
            generation,
            result: Ok(()),
        });

        assert!(state.shows_success());
        assert_eq!(state.controller().form(), &FormState::default());
        assert!(state.message_editor().text().trim().is_empty());

        let _ = state.handle_message(Message::HideSuccess { generation });
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(!state.has_pending_timers());
    }

    #[test]
    fn failed_send_keeps_the_form() {
        let mut state = state();
        fill(&mut state);
        let _ = state.handle_message(Message::Submit);
        let generation = state.controller().generation();

        let _ = state.handle_message(Message::SendCompleted {
            generation,
            result: Err(SendError::Unavailable("offline".into())),
        });

        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.controller().form().name, "Jane");
        assert!(!state.has_pending_timers());
    }

    #[test]
    fn teardown_drops_pending_timers() {
        let mut state = state();
        fill(&mut state);
        let _ = state.handle_message(Message::Submit);
        let generation = state.controller().generation();

        state.teardown();
        assert!(!state.has_pending_timers());

        let _ = state.handle_message(Message::SendCompleted {
            generation,
            result: Ok(()),
        });
        assert!(!state.shows_success());
        assert_eq!(state.controller().form().name, "Jane");
    }

    #[test]
    fn picker_close_only_clears_its_own_focus() {
        let mut state = state();
        let _ = state.handle_message(Message::PickerOpened);
        assert_eq!(state.controller().focused(), Some(Field::Purpose));

        let _ = state.handle_message(Message::PickerClosed);
        assert_eq!(state.controller().focused(), None);

        let _ = state.handle_message(Message::FieldChanged(Field::Email, "a".into()));
        let _ = state.handle_message(Message::PickerClosed);
        assert_eq!(state.controller().focused(), Some(Field::Email));
    }

    #[test]
    fn next_input_skips_non_text_fields() {
        assert_eq!(next_input(None), Field::Name);
        assert_eq!(next_input(Some(Field::Name)), Field::Email);
        assert_eq!(next_input(Some(Field::Email)), Field::Phone);
        assert_eq!(next_input(Some(Field::Phone)), Field::Name);
        assert_eq!(next_input(Some(Field::Purpose)), Field::Name);
        assert_eq!(next_input(Some(Field::Message)), Field::Name);
    }

    #[test]
    fn focus_next_moves_the_highlight() {
        let mut state = state();
        let _ = state.handle_message(Message::FocusNext);
        assert_eq!(state.controller().focused(), Some(Field::Name));

        let _ = state.handle_message(Message::FocusNext);
        assert_eq!(state.controller().focused(), Some(Field::Email));

        let _ = state.handle_message(Message::Blur);
        assert_eq!(state.controller().focused(), None);
    }

    #[test]
    fn previous_input_skips_non_text_fields() {
        assert_eq!(previous_input(None), Field::Phone);
        assert_eq!(previous_input(Some(Field::Name)), Field::Phone);
        assert_eq!(previous_input(Some(Field::Email)), Field::Name);
        assert_eq!(previous_input(Some(Field::Phone)), Field::Email);
        assert_eq!(previous_input(Some(Field::Purpose)), Field::Phone);
        assert_eq!(previous_input(Some(Field::Message)), Field::Phone);
    }

    #[test]
    fn focus_previous_moves_the_highlight_backwards() {
        let mut state = state();
        let _ = state.handle_message(Message::FocusPrevious);
        assert_eq!(state.controller().focused(), Some(Field::Phone));

        let _ = state.handle_message(Message::FocusPrevious);
        assert_eq!(state.controller().focused(), Some(Field::Email));

        let _ = state.handle_message(Message::FocusNext);
        assert_eq!(state.controller().focused(), Some(Field::Phone));
    }
}
