// SPDX-License-Identifier: MPL-2.0
//! "Follow Us" row of social link buttons.

use crate::content::{self, Network, SocialLink};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, tooltip, Column, Container, Row};
use iced::{Color, Element, Length};

/// Glyph tint applied on hover, one per network.
#[must_use]
pub fn hover_color(network: Network) -> Color {
    match network {
        Network::Facebook => palette::PRIMARY_500,
        Network::Instagram => palette::PINK_400,
        Network::Telegram => palette::CYAN_400,
        Network::LinkedIn => palette::PRIMARY_400,
        Network::YouTube => palette::RED_400,
        Network::GitHub => palette::SLATE_300,
    }
}

/// Renders the section; `on_press` maps a link to the message it emits.
pub fn view<'a, Message: Clone + 'a>(
    alpha: f32,
    on_press: impl Fn(SocialLink) -> Message,
) -> Element<'a, Message> {
    let buttons = content::SOCIAL_LINKS.iter().fold(
        Row::new().spacing(spacing::SM),
        |row, link| {
            let tile = button(
                Container::new(text(link.network.glyph()).size(typography::BODY_LG))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .width(Length::Fixed(sizing::SOCIAL_BUTTON))
            .height(Length::Fixed(sizing::SOCIAL_BUTTON))
            .on_press(on_press(*link))
            .style(styles::button::social(hover_color(link.network), alpha));

            row.push(tooltip(
                tile,
                Container::new(text(link.name).size(typography::CAPTION))
                    .padding(spacing::XXS)
                    .style(styles::container::popup),
                tooltip::Position::Bottom,
            ))
        },
    );

    Column::new()
        .spacing(spacing::SM)
        .push(
            text(content::SOCIAL_SECTION)
                .size(typography::TITLE_LG)
                .style(styles::text_color(|colors| colors.text_primary, alpha)),
        )
        .push(buttons)
        .into()
}

/// Toast text shown after a link is copied.
#[must_use]
pub fn copied_message(link: &SocialLink) -> String {
    format!("Link copied: {}", link.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_has_a_distinct_hover_color() {
        let colors: Vec<Color> = content::SOCIAL_LINKS
            .iter()
            .map(|link| hover_color(link.network))
            .collect();

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn copied_message_contains_url() {
        let link = content::SOCIAL_LINKS[5];
        assert_eq!(
            copied_message(&link),
            "Link copied: https://github.com/codewithrafsun"
        );
    }
}
