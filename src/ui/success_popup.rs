// SPDX-License-Identifier: MPL-2.0
//! Thank-you popup displayed after a successful submission.
//!
//! The popup has no close control; it disappears when the hide timer fires.

use crate::content;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{opaque, text, Column, Container};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            text(content::POPUP_GREETING)
                .size(typography::TITLE_LG)
                .style(styles::text_color(|colors| colors.accent, 1.0)),
        );

    for line in content::POPUP_LINES {
        body = body.push(
            text(line)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center),
        );
    }

    for note in content::POPUP_NOTES {
        body = body.push(
            text(note)
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center)
                .style(styles::text_color(|colors| colors.text_secondary, 1.0)),
        );
    }

    body = body
        .push(
            Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fixed(border::WIDTH_SM))
                .style(styles::container::divider),
        )
        .push(
            text(content::POPUP_SIGNATURE)
                .size(typography::TITLE_MD)
                .style(styles::text_color(|colors| colors.accent_strong, 1.0)),
        )
        .push(
            text(content::powered_by())
                .size(typography::CAPTION)
                .style(styles::text_color(|colors| colors.text_tertiary, 1.0)),
        );

    let card = Container::new(body)
        .max_width(sizing::POPUP_MAX_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::popup);

    // The page underneath stays inert while the popup shows.
    opaque(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::backdrop),
    )
}
