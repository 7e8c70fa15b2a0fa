// SPDX-License-Identifier: MPL-2.0
//! Demo layout: a control panel with the toast overlay stacked on top.

use super::{variant_label, App, Message};
use crate::toast::Variant;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{Element, Length};

const VARIANTS: [Variant; 5] = [
    Variant::Default,
    Variant::Info,
    Variant::Success,
    Variant::Warning,
    Variant::Error,
];

fn action<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let variants = VARIANTS.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &variant| row.push(action(variant_label(variant), Message::Show(variant))),
    );

    let controls = Row::new()
        .spacing(spacing::XS)
        .push(action("Persistent", Message::ShowPersistent))
        .push(action("Update latest", Message::UpdateLatest))
        .push(action("Dismiss latest", Message::DismissLatest))
        .push(action("Dismiss all", Message::DismissAll))
        .push(action("Without toaster", Message::ShowDetached));

    let stats = text(format!(
        "{} queued (limit {}) · {} shown · {} closed · {} diagnostic events, {} warnings",
        app.toaster.len(),
        app.toaster.config().limit.value(),
        app.shown,
        app.closed.get(),
        app.diagnostics.len(),
        app.diagnostics.warning_count(),
    ))
    .size(typography::CAPTION);

    let panel = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text("Toast notifications").size(typography::TITLE_MD))
        .push(variants)
        .push(controls)
        .push(stats);

    let content = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::LG);

    Stack::new()
        .push(content)
        .push(app.toaster.view().map(Message::Toast))
        .into()
}
