// SPDX-License-Identifier: MPL-2.0
//! Contact form rendering.

use super::{Message, State};
use crate::domain::contact::{Field, Purpose};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, input::FieldLook};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, pick_list, text, text_editor, text_input, Column, Id, Row};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Widget id of a single-line input, `None` for the picker and the editor.
#[must_use]
pub fn input_id(field: Field) -> Option<Id> {
    match field {
        Field::Name => Some(Id::new("contact-name")),
        Field::Email => Some(Id::new("contact-email")),
        Field::Phone => Some(Id::new("contact-phone")),
        Field::Purpose | Field::Message => None,
    }
}

/// Label shown above a field; required fields carry an asterisk.
#[must_use]
pub fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name *",
        Field::Email => "Email *",
        Field::Phone => "Phone / WhatsApp (Optional)",
        Field::Purpose => "Purpose *",
        Field::Message => "Message *",
    }
}

#[must_use]
pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "your.email@example.com",
        Field::Phone => "+880 13 0665 4467",
        Field::Purpose => "Select a purpose",
        Field::Message => "Your message here...",
    }
}

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

/// Renders the form fields and the submit button.
pub fn view(state: &State, now: Instant) -> Element<'_, Message> {
    let controller = state.controller();
    let form = controller.form();

    let name = labeled(state, Field::Name, single_line(state, Field::Name, &form.name));
    let email = labeled(
        state,
        Field::Email,
        single_line(state, Field::Email, &form.email),
    );
    let phone = labeled(
        state,
        Field::Phone,
        single_line(state, Field::Phone, &form.phone),
    );

    let purpose_picker = pick_list(Purpose::ALL, form.purpose, Message::PurposeSelected)
        .placeholder(placeholder(Field::Purpose))
        .on_open(Message::PickerOpened)
        .on_close(Message::PickerClosed)
        .width(Length::Fill)
        .padding(spacing::SM)
        .text_size(typography::BODY)
        .style(styles::input::purpose_picker(look(state, Field::Purpose)));
    let purpose = labeled(state, Field::Purpose, purpose_picker.into());

    let editor = text_editor(state.message_editor())
        .placeholder(placeholder(Field::Message))
        .on_action(Message::MessageEdited)
        .height(Length::Fixed(sizing::MESSAGE_HEIGHT))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::input::message_editor(look(state, Field::Message)));
    let message = labeled(state, Field::Message, editor.into());

    // Name and email share a row; so do phone and purpose.
    let first_row = Row::new()
        .spacing(spacing::MD)
        .push(name)
        .push(email);
    let second_row = Row::new()
        .spacing(spacing::MD)
        .push(phone)
        .push(purpose);

    Column::new()
        .spacing(spacing::MD)
        .push(first_row)
        .push(second_row)
        .push(message)
        .push(submit_button(state, now))
        .into()
}

fn look(state: &State, field: Field) -> FieldLook {
    let controller = state.controller();
    FieldLook {
        highlighted: controller.is_highlighted(field),
        has_error: controller.errors().contains(field),
    }
}

fn single_line<'a>(state: &State, field: Field, value: &'a str) -> Element<'a, Message> {
    let mut input = text_input(placeholder(field), value)
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::input::text_field(look(state, field)));

    if let Some(id) = input_id(field) {
        input = input.id(id);
    }

    input.into()
}

/// Wraps a control with its label and, if present, its error message.
fn labeled<'a>(
    state: &'a State,
    field: Field,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            text(label(field))
                .size(typography::BODY)
                .style(styles::text_color(|colors| colors.text_secondary, 1.0)),
        )
        .push(control);

    if let Some(error) = state.controller().errors().get(field) {
        column = column.push(
            text(error)
                .size(typography::CAPTION)
                .style(styles::text_color(|colors| colors.error, 1.0)),
        );
    }

    column.into()
}

fn submit_button(state: &State, now: Instant) -> Element<'_, Message> {
    let submitting = state.is_submitting();

    let content: Element<'_, Message> = if submitting {
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                AnimatedSpinner::new(iced::Color::WHITE, sizing::ICON_SM)
                    .with_elapsed(state.submitting_elapsed(now))
                    .into_element(),
            )
            .push(text(SUBMITTING_LABEL).size(typography::BODY_LG))
            .into()
    } else {
        text(SUBMIT_LABEL).size(typography::BODY_LG).into()
    };

    button(
        iced::widget::container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press_maybe((!submitting).then_some(Message::Submit))
    .style(styles::button::submit)
    .into()
}
