// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the page (header, form and contact info side by side, footer)
//! inside a scrollable, then stacks the success popup and the toasts on top.

use super::Message;
use crate::content;
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::entrance::Entrance;
use crate::ui::notifications::{self, Toast};
use crate::ui::{contact_card, page, social_links, styles, success_popup};
use iced::widget::{scrollable, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub form: &'a contact_form::State,
    pub notifications: &'a notifications::Manager,
    pub entrance: Entrance,
    pub now: Instant,
    pub footer_year: i32,
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let entrance = ctx.entrance;
    let now = ctx.now;
    let alpha = |delay_ms: u64| entrance.alpha(delay_ms, now);

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(
            Container::new(form_card(ctx.form, now, alpha(0)))
                .width(Length::FillPortion(1)),
        )
        .push(Container::new(info_column(alpha)).width(Length::FillPortion(1)));

    let content = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(page::header(alpha(0)))
        .push(columns)
        .push(page::footer(
            ctx.footer_year,
            alpha(crate::config::ENTRANCE_MAX_DELAY_MS),
        ));

    let page = Container::new(
        scrollable(Container::new(content).center_x(Length::Fill)).height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.form.shows_success() {
        layers = layers.push(success_popup::view());
    }

    layers
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}

fn form_card(form: &contact_form::State, now: Instant, alpha: f32) -> Element<'_, Message> {
    let body = Column::new()
        .spacing(spacing::LG)
        .push(
            text(content::FORM_TITLE)
                .size(typography::TITLE_LG)
                .style(styles::text_color(|colors| colors.text_primary, alpha)),
        )
        .push(contact_form::view::view(form, now).map(Message::Form));

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::glass_card(alpha))
        .into()
}

fn info_column<'a>(alpha: impl Fn(u64) -> f32) -> Element<'a, Message> {
    let direct_alpha = alpha(content::DIRECT_MESSAGE_DELAY_MS);

    Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Left)
        .push(contact_card::section(
            content::BUSINESS_SECTION,
            &content::BUSINESS_CARDS,
            &alpha,
        ))
        .push(contact_card::section(
            content::PERSONAL_SECTION,
            &content::PERSONAL_CARDS,
            &alpha,
        ))
        .push(contact_card::direct_message(direct_alpha))
        .push(social_links::view(direct_alpha, Message::SocialLinkPressed))
        .into()
}
