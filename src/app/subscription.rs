// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are translated into form messages here: `Tab` moves to the
//! next input and `Shift+Tab` to the previous one. `Escape` and clicks on
//! empty space drop the focus highlight.

use super::Message;
use crate::ui::contact_form;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval of the animation tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window, keyboard and mouse events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match (&event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Tab),
                    modifiers,
                    ..
                }),
                _,
            ) => Some(Message::Form(tab_message(*modifiers))),
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }),
                _,
            ) => Some(Message::Form(contact_form::Message::Blur)),
            (
                event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                event::Status::Ignored,
            ) => Some(Message::Form(contact_form::Message::Blur)),
            _ => None,
        }
    })
}

/// Focus direction for a Tab press.
fn tab_message(modifiers: keyboard::Modifiers) -> contact_form::Message {
    if modifiers.shift() {
        contact_form::Message::FocusPrevious
    } else {
        contact_form::Message::FocusNext
    }
}

/// Creates the periodic tick while something on screen is animating.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_tab_moves_backwards() {
        assert!(matches!(
            tab_message(keyboard::Modifiers::SHIFT),
            contact_form::Message::FocusPrevious
        ));
        assert!(matches!(
            tab_message(keyboard::Modifiers::SHIFT | keyboard::Modifiers::CTRL),
            contact_form::Message::FocusPrevious
        ));
    }

    #[test]
    fn plain_tab_moves_forwards() {
        assert!(matches!(
            tab_message(keyboard::Modifiers::empty()),
            contact_form::Message::FocusNext
        ));
    }
}
