// SPDX-License-Identifier: MPL-2.0
//! Contact-info cards shown beside the form.

use crate::content::{self, ContactCard};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Renders one card at the given entrance opacity.
pub fn view<'a, Message: 'a>(card: &ContactCard, alpha: f32) -> Element<'a, Message> {
    let glyph = text(card.channel.glyph())
        .size(sizing::ICON_MD)
        .style(styles::text_color(|colors| colors.accent, alpha));

    let mut details = Column::new().spacing(spacing::XXS).push(
        text(card.title)
            .size(typography::TITLE_MD)
            .style(styles::text_color(|colors| colors.text_primary, alpha)),
    );

    // The first detail is the address or number; the rest are notes.
    for (index, line) in card.details.iter().enumerate() {
        let line = if index == 0 {
            text(*line)
                .size(typography::BODY)
                .style(styles::text_color(|colors| colors.accent, alpha))
        } else {
            text(*line)
                .size(typography::CAPTION)
                .style(styles::text_color(|colors| colors.text_secondary, alpha))
        };
        details = details.push(line);
    }

    let body = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Top)
        .push(glyph)
        .push(details);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::glass_card(alpha))
        .into()
}

/// Renders the direct-message highlight card.
pub fn direct_message<'a, Message: 'a>(alpha: f32) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            text(content::DIRECT_MESSAGE_TITLE)
                .size(typography::TITLE_MD)
                .style(styles::text_color(|colors| colors.text_primary, alpha)),
        )
        .push(
            text(content::DIRECT_MESSAGE_EMAIL)
                .size(typography::BODY_LG)
                .style(styles::text_color(|colors| colors.accent, alpha)),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::highlight_card(alpha))
        .into()
}

/// Renders a titled group of cards, each fading in after its own delay.
pub fn section<'a, Message: 'a>(
    title: &'static str,
    cards: &[ContactCard],
    alpha_for: impl Fn(u64) -> f32,
) -> Element<'a, Message> {
    let heading_alpha = cards.first().map_or(1.0, |card| alpha_for(card.delay_ms));

    let mut column = Column::new().spacing(spacing::SM).push(
        text(title)
            .size(typography::TITLE_LG)
            .style(styles::text_color(|colors| colors.text_primary, heading_alpha)),
    );

    for card in cards {
        column = column.push(view(card, alpha_for(card.delay_ms)));
    }

    column.into()
}
