// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the page color scheme.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color palette for the page.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub page_background: Color,
    pub card_background: Color,
    pub card_border: Color,
    pub input_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub accent: Color,
    pub accent_strong: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    pub backdrop: Color,
}

impl ColorScheme {
    /// Neon blue on deep navy.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::NAVY_950,
            card_background: Color {
                a: opacity::GLASS,
                ..palette::NAVY_800
            },
            card_border: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            input_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::NAVY_900
            },

            text_primary: palette::WHITE,
            text_secondary: Color {
                a: opacity::MUTED_TEXT,
                ..palette::PRIMARY_200
            },
            text_tertiary: Color {
                a: opacity::FAINT_TEXT,
                ..palette::PRIMARY_200
            },

            accent: palette::PRIMARY_400,
            accent_strong: palette::PRIMARY_500,

            error: palette::ERROR_400,
            success: palette::SUCCESS_400,

            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Same layout on a pale surface.
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::SLATE_100,
            card_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
            card_border: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_600
            },
            input_background: palette::WHITE,

            text_primary: palette::NAVY_900,
            text_secondary: palette::SLATE_700,
            text_tertiary: palette::SLATE_500,

            accent: palette::PRIMARY_600,
            accent_strong: palette::PRIMARY_700,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme name is not one of `light`, `dark`, `system`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme mode '{}' (expected light, dark or system)",
            self.0
        )
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_background() {
        let scheme = ColorScheme::light();
        assert!(scheme.page_background.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_background() {
        let scheme = ColorScheme::dark();
        assert!(scheme.page_background.r < 0.1);
    }

    #[test]
    fn both_themes_use_a_blue_accent() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(light.accent.b > light.accent.r);
        assert!(dark.accent.b > dark.accent.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("SYSTEM".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn theme_mode_display_round_trips() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
    }
}
