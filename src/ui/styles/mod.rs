// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page widgets.
//!
//! Style functions resolve the page [`ColorScheme`] from the active Iced
//! `Theme`, so the same function serves light and dark modes.

pub mod button;
pub mod container;
pub mod input;

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{Color, Theme};

/// Returns the page color scheme matching the active Iced theme.
#[must_use]
pub fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}

/// Multiplies a color's alpha by `alpha` (entrance fade).
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Text style drawing with a scheme color, faded by `alpha`.
pub fn text_color(
    pick: fn(&ColorScheme) -> Color,
    alpha: f32,
) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(fade(pick(&scheme(theme)), alpha)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_theme_brightness() {
        assert!(scheme(&Theme::Light).page_background.r > 0.9);
        assert!(scheme(&Theme::Dark).page_background.r < 0.1);
    }

    #[test]
    fn fade_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.8);
        let faded = fade(color, 0.5);
        assert_eq!(faded.r, color.r);
        assert!((faded.a - 0.4).abs() < f32::EPSILON);
        assert_eq!(fade(color, 3.0).a, color.a);
    }

    #[test]
    fn text_color_uses_scheme_color() {
        let style = text_color(|colors| colors.error, 1.0)(&Theme::Dark);
        assert_eq!(style.color, Some(ColorScheme::dark().error));

        let hidden = text_color(|colors| colors.text_primary, 0.0)(&Theme::Light);
        assert_eq!(hidden.color.map(|c| c.a), Some(0.0));
    }
}
