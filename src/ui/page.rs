// SPDX-License-Identifier: MPL-2.0
//! Static page chrome: header and footer.

use crate::content;
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};

pub fn header<'a, Message: 'a>(alpha: f32) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(
            text(content::HEADER_TITLE)
                .size(typography::DISPLAY)
                .style(styles::text_color(|colors| colors.accent, alpha)),
        )
        .push(
            text(content::HEADER_SUBTITLE)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center)
                .style(styles::text_color(|colors| colors.text_secondary, alpha)),
        )
        .into()
}

/// Footer with the brand, the owner and the copyright for `year`.
pub fn footer<'a, Message: 'a>(year: i32, alpha: f32) -> Element<'a, Message> {
    let rule = Container::new(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(border::WIDTH_SM))
        .style(styles::container::divider);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(rule)
        .push(
            text(content::BRAND)
                .size(typography::TITLE_MD)
                .style(styles::text_color(|colors| colors.accent, alpha)),
        )
        .push(
            text(content::powered_by())
                .size(typography::BODY)
                .style(styles::text_color(|colors| colors.text_secondary, alpha)),
        )
        .push(
            text(content::copyright(year))
                .size(typography::CAPTION)
                .style(styles::text_color(|colors| colors.text_tertiary, alpha)),
        )
        .into()
}

/// Calendar year shown in the footer, from the local clock.
#[must_use]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
