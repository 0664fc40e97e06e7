// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::{fade, scheme};
use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);

    container::Style {
        background: Some(Background::Color(colors.page_background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Translucent "glass" card, faded by `alpha` during the entrance animation.
pub fn glass_card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);

        container::Style {
            background: Some(Background::Color(fade(colors.card_background, alpha))),
            border: Border {
                color: fade(colors.card_border, alpha),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            text_color: Some(fade(colors.text_primary, alpha)),
            ..Default::default()
        }
    }
}

/// Glass card with an accent border and glow.
pub fn highlight_card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);

        container::Style {
            background: Some(Background::Color(fade(colors.card_background, alpha))),
            border: Border {
                color: fade(colors.accent, alpha),
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: if alpha >= 1.0 {
                shadow::GLOW
            } else {
                shadow::NONE
            },
            text_color: Some(fade(colors.text_primary, alpha)),
            ..Default::default()
        }
    }
}

/// Dimmed layer behind the success popup.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).backdrop)),
        ..Default::default()
    }
}

/// The success popup card.
pub fn popup(theme: &Theme) -> container::Style {
    let colors = scheme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: 1.0,
            ..colors.card_background
        })),
        border: Border {
            color: colors.accent,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::GLOW,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// One-pixel horizontal separator.
pub fn divider(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).card_border)),
        ..Default::default()
    }
}

/// Toast card with a severity-colored border.
pub fn toast(accent_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);

        container::Style {
            background: Some(Background::Color(Color {
                a: 1.0,
                ..colors.card_background
            })),
            border: Border {
                color: accent_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn glass_card_fades_with_alpha() {
        let hidden = glass_card(0.0)(&Theme::Dark);
        let shown = glass_card(1.0)(&Theme::Dark);

        assert_eq!(hidden.border.color.a, 0.0);
        assert!(shown.border.color.a > 0.0);
    }

    #[test]
    fn highlight_card_glows_only_when_fully_visible() {
        assert_eq!(highlight_card(0.5)(&Theme::Dark).shadow, shadow::NONE);
        assert_eq!(highlight_card(1.0)(&Theme::Dark).shadow, shadow::GLOW);
    }

    #[test]
    fn toast_uses_accent_border() {
        let style = toast(palette::WARNING_500)(&Theme::Dark);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }
}
