// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the contact page, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (navy surfaces, neon blue accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Glow and drop shadow definitions

## Examples

```
use contact_page::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent card color
let card_bg = Color {
    a: opacity::GLASS,
    ..palette::NAVY_800
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_700: Color = Color::from_rgb(0.2, 0.255, 0.333);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);

    // Page surfaces (deep navy scale)
    pub const NAVY_950: Color = Color::from_rgb(0.008, 0.024, 0.09);
    pub const NAVY_900: Color = Color::from_rgb(0.03, 0.07, 0.2);
    pub const NAVY_800: Color = Color::from_rgb(0.06, 0.12, 0.3);

    // Brand colors (neon blue scale, 500 is #0099FF)
    pub const PRIMARY_200: Color = Color::from_rgb(0.749, 0.859, 0.996);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.6, 1.0);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Social hover accents
    pub const PINK_400: Color = Color::from_rgb(0.957, 0.447, 0.714);
    pub const CYAN_400: Color = Color::from_rgb(0.133, 0.827, 0.933);
    pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443);

    // Semantic colors
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_400: Color = Color::from_rgb(0.29, 0.871, 0.502);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Glass card fill over the page background.
    pub const GLASS: f32 = 0.45;

    /// Secondary text on glass (blue-200 at 70%).
    pub const MUTED_TEXT: f32 = 0.7;

    /// Tertiary text on glass (blue-200 at 60%).
    pub const FAINT_TEXT: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const MESSAGE_HEIGHT: f32 = 140.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const POPUP_MAX_WIDTH: f32 = 448.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const SOCIAL_BUTTON: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the page hierarchy.

    /// Page headline.
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headers, popup title
    pub const TITLE_LG: f32 = 24.0;

    /// Medium title - Card titles
    pub const TITLE_MD: f32 = 18.0;

    /// Large body - Subtitle, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Labels, card details
    pub const BODY: f32 = 14.0;

    /// Caption - Inline errors, footnotes
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Glass cards, idle inputs
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focused inputs, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Neon glow around highlighted cards and the popup.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.45,
            ..palette::PRIMARY_500
        },
        offset: Vector::ZERO,
        blur_radius: 20.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS > 0.0 && opacity::GLASS < 1.0);
    assert!(opacity::FAINT_TEXT < opacity::MUTED_TEXT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_is_neon_blue() {
        assert_eq!(palette::PRIMARY_500.r, 0.0);
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.g);
    }
}
