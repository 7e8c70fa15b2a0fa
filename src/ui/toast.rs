// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering.
//!
//! Toasts appear as small cards with variant-colored accents, an optional
//! dismiss button and a countdown bar. Cards are stacked in the configured
//! corner of the window and report hover and clicks back as
//! [`Message`](crate::toast::Message)s.

use crate::config::{Gap, Position};
use crate::toast::{Message, ToastSnapshot, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, progress_bar, text, Column, Container, Row};
use iced::{Color, Element, Length, Theme};

/// Renders every toast of a toaster, oldest first.
pub fn view_overlay<'a>(
    toasts: Vec<ToastSnapshot>,
    position: Position,
    gap: Gap,
) -> Element<'a, Message> {
    if toasts.is_empty() {
        // Empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let (align_x, align_y) = alignment(position);
    let cards: Vec<Element<'a, Message>> = toasts.into_iter().map(view_toast).collect();
    let stack = Column::with_children(cards)
        .spacing(gap_spacing(gap))
        .align_x(align_x);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::MD)
        .into()
}

/// Renders a single toast card.
pub fn view_toast<'a>(toast: ToastSnapshot) -> Element<'a, Message> {
    let accent = accent_color(toast.variant);

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = toast.title {
        body = body.push(text(title).size(typography::BODY_LG));
    }
    body = body.push(text(toast.message).size(typography::BODY));

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Top)
        .push(body);
    if toast.dismissible {
        header = header.push(
            button(text("✕").size(typography::CAPTION))
                .on_press(Message::Dismiss(toast.id.clone()))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    let mut content = Column::new().spacing(spacing::XS).push(header);
    if toast.show_progress {
        content = content.push(
            progress_bar(0.0..=1.0, toast.progress)
                .girth(sizing::PROGRESS_HEIGHT)
                .style(move |theme: &Theme| progress_style(theme, accent)),
        );
    }

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent));

    mouse_area(card)
        .on_press(Message::Clicked(toast.id.clone()))
        .on_enter(Message::PointerEntered(toast.id.clone()))
        .on_exit(Message::PointerLeft(toast.id))
        .into()
}

fn alignment(position: Position) -> (Horizontal, Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => Horizontal::Center,
        Position::TopRight | Position::BottomRight => Horizontal::Right,
    };
    let vertical = if position.is_top() {
        Vertical::Top
    } else {
        Vertical::Bottom
    };
    (horizontal, vertical)
}

fn gap_spacing(gap: Gap) -> f32 {
    match gap {
        Gap::Sm => spacing::XXS,
        Gap::Md => spacing::XS,
        Gap::Lg => spacing::SM,
    }
}

/// Accent for a variant; `None` keeps the theme's neutral outline.
fn accent_color(variant: Variant) -> Option<Color> {
    match variant {
        Variant::Default => None,
        Variant::Info => Some(palette::INFO_500),
        Variant::Success => Some(palette::SUCCESS_500),
        Variant::Warning => Some(palette::WARNING_500),
        Variant::Error => Some(palette::ERROR_500),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent: Option<Color>) -> container::Style {
    let base = theme.extended_palette().background.base;

    let border = match accent {
        Some(color) => iced::Border {
            color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        None => iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..base.color
        })),
        border,
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

fn progress_style(theme: &Theme, accent: Option<Color>) -> progress_bar::Style {
    let extended = theme.extended_palette();
    progress_bar::Style {
        background: iced::Background::Color(extended.background.weak.color),
        bar: iced::Background::Color(accent.unwrap_or(extended.primary.base.color)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
    }
    .map(|alpha| {
        iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })
    });

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{LifecycleState, ToastId};

    fn snapshot(variant: Variant) -> ToastSnapshot {
        ToastSnapshot {
            id: ToastId::generate(),
            title: Some("Title".into()),
            message: "Body".into(),
            variant,
            class_name: None,
            dismissible: true,
            show_progress: true,
            progress: 0.5,
            state: LifecycleState::Active,
        }
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let style = toast_container_style(&theme, Some(palette::SUCCESS_500));

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
        assert!(style.background.is_some());
    }

    #[test]
    fn default_variant_has_no_accent() {
        assert!(accent_color(Variant::Default).is_none());
        assert_eq!(accent_color(Variant::Error), Some(palette::ERROR_500));
    }

    #[test]
    fn positions_map_to_corners() {
        assert_eq!(
            alignment(Position::TopRight),
            (Horizontal::Right, Vertical::Top)
        );
        assert_eq!(
            alignment(Position::BottomCenter),
            (Horizontal::Center, Vertical::Bottom)
        );
    }

    #[test]
    fn gaps_grow() {
        assert!(gap_spacing(Gap::Sm) < gap_spacing(Gap::Md));
        assert!(gap_spacing(Gap::Md) < gap_spacing(Gap::Lg));
    }

    #[test]
    fn overlay_builds_for_every_variant() {
        let toasts = [
            Variant::Default,
            Variant::Info,
            Variant::Success,
            Variant::Warning,
            Variant::Error,
        ]
        .into_iter()
        .map(snapshot)
        .collect();

        let _ = view_overlay(toasts, Position::BottomLeft, Gap::Lg);
        let _ = view_overlay(Vec::new(), Position::TopRight, Gap::Md);
    }
}
