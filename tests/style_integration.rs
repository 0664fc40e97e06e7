// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use contact_page::ui::design_tokens::{opacity, palette, sizing, spacing};
    use contact_page::ui::styles::{self, button, container, input};
    use iced::Theme;

    #[test]
    fn all_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::submit(&theme, iced::widget::button::Status::Active);
            let _ = button::ghost(&theme, iced::widget::button::Status::Hovered);
            let _ = button::social(palette::PINK_400, 0.5)(&theme, iced::widget::button::Status::Active);

            let _ = container::page(&theme);
            let _ = container::glass_card(1.0)(&theme);
            let _ = container::highlight_card(0.3)(&theme);
            let _ = container::popup(&theme);
            let _ = container::toast(palette::WARNING_500)(&theme);

            let _ = input::text_field(input::FieldLook::default())(
                &theme,
                iced::widget::text_input::Status::Active,
            );
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::NAVY_950;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::GLASS;

        // Sizing
        let _ = sizing::POPUP_MAX_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = styles::scheme(&Theme::Light);
        let dark = styles::scheme(&Theme::Dark);

        // Page backgrounds should be visually opposite between light and dark
        assert!(light.page_background.r > dark.page_background.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn errored_field_border_uses_error_color() {
        let theme = Theme::Dark;
        let look = input::FieldLook {
            highlighted: false,
            has_error: true,
        };
        let style = input::text_field(look)(&theme, iced::widget::text_input::Status::Active);
        assert_eq!(style.border.color, styles::scheme(&Theme::Dark).error);
    }
}
