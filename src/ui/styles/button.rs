// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::{fade, scheme};
use crate::ui::design_tokens::{border, opacity, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the "Send Message" button.
///
/// The disabled state is used while a submission is in flight.
pub fn submit(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.accent_strong)),
            text_color: WHITE,
            border: Border {
                color: colors.accent,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.accent)),
            text_color: WHITE,
            border: Border {
                color: colors.accent_strong,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::GLOW,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(fade(
                colors.accent_strong,
                opacity::OVERLAY_MEDIUM,
            ))),
            text_color: fade(WHITE, opacity::OVERLAY_STRONG),
            border: Border {
                color: colors.card_border,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for a social link tile; `hover_color` tints the glyph on hover.
pub fn social(hover_color: Color, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        button::Style {
            background: Some(Background::Color(fade(colors.card_background, alpha))),
            text_color: fade(
                if hovered {
                    hover_color
                } else {
                    colors.text_secondary
                },
                alpha,
            ),
            border: Border {
                color: fade(
                    if hovered {
                        colors.accent
                    } else {
                        colors.card_border
                    },
                    alpha,
                ),
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: if hovered { shadow::GLOW } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Borderless button used for toast dismissal.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let background = match status {
        button::Status::Hovered => Some(Background::Color(fade(
            colors.text_tertiary,
            opacity::OVERLAY_SUBTLE,
        ))),
        button::Status::Pressed => Some(Background::Color(fade(
            colors.text_tertiary,
            opacity::OVERLAY_MEDIUM,
        ))),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
