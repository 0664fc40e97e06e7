// SPDX-License-Identifier: MPL-2.0
//! Form control styles.
//!
//! Every control shares the same border rule: the error color when the field
//! has a validation error, the accent color when it is highlighted, and the
//! card border otherwise.

use super::scheme;
use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::{pick_list, text_editor, text_input};
use iced::{Background, Border, Theme};

/// Visual state of a form control as decided by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldLook {
    pub highlighted: bool,
    pub has_error: bool,
}

impl FieldLook {
    fn border(self, colors: &ColorScheme, natively_focused: bool) -> Border {
        let (color, width) = if self.has_error {
            (colors.error, border::WIDTH_SM)
        } else if self.highlighted || natively_focused {
            (colors.accent, border::WIDTH_MD)
        } else {
            (colors.card_border, border::WIDTH_SM)
        };

        Border {
            color,
            width,
            radius: radius::MD.into(),
        }
    }
}

/// Single-line text input.
pub fn text_field(look: FieldLook) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let colors = scheme(theme);
        let mut style = text_input::default(theme, status);

        style.background = Background::Color(colors.input_background);
        style.border = look.border(
            &colors,
            matches!(status, text_input::Status::Focused { .. }),
        );
        style.value = colors.text_primary;
        style.placeholder = colors.text_tertiary;
        style
    }
}

/// Multi-line message editor.
pub fn message_editor(
    look: FieldLook,
) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |theme: &Theme, status: text_editor::Status| {
        let colors = scheme(theme);
        let mut style = text_editor::default(theme, status);

        style.background = Background::Color(colors.input_background);
        style.border = look.border(
            &colors,
            matches!(status, text_editor::Status::Focused { .. }),
        );
        style.value = colors.text_primary;
        style.placeholder = colors.text_tertiary;
        style
    }
}

/// Purpose drop-down.
pub fn purpose_picker(look: FieldLook) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    move |theme: &Theme, status: pick_list::Status| {
        let colors = scheme(theme);
        let mut style = pick_list::default(theme, status);

        style.background = Background::Color(colors.input_background);
        style.border = look.border(&colors, matches!(status, pick_list::Status::Opened { .. }));
        style.text_color = colors.text_primary;
        style.placeholder_color = colors.text_tertiary;
        style.handle_color = colors.accent;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_border_wins_over_highlight() {
        let colors = ColorScheme::dark();
        let look = FieldLook {
            highlighted: true,
            has_error: true,
        };
        assert_eq!(look.border(&colors, true).color, colors.error);
    }

    #[test]
    fn highlight_uses_accent() {
        let colors = ColorScheme::dark();
        let look = FieldLook {
            highlighted: true,
            has_error: false,
        };
        let edge = look.border(&colors, false);
        assert_eq!(edge.color, colors.accent);
        assert_eq!(edge.width, border::WIDTH_MD);
    }

    #[test]
    fn idle_field_uses_card_border() {
        let colors = ColorScheme::light();
        let edge = FieldLook::default().border(&colors, false);
        assert_eq!(edge.color, colors.card_border);
    }

    #[test]
    fn text_field_style_applies_scheme() {
        let look = FieldLook::default();
        let style = text_field(look)(&Theme::Dark, text_input::Status::Active);
        assert_eq!(style.value, ColorScheme::dark().text_primary);
    }
}
