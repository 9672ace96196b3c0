// SPDX-License-Identifier: MPL-2.0
//! Shelf widget for rendering the active toasts.
//!
//! Each toast is a small card with a category-colored accent, its message,
//! and a dismiss button bound to that toast's id.

use crate::notifications::{Category, Manager, ShelfEntry, ToastMessage};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accent color for a toast category.
#[must_use]
pub fn accent_color(category: Category) -> Color {
    match category {
        Category::Notice => palette::NOTICE_500,
        Category::Warning => palette::WARNING_500,
        Category::Success => palette::SUCCESS_500,
        Category::Error => palette::ERROR_500,
    }
}

/// Renders a single toast.
pub fn view_entry<'a>(entry: ShelfEntry<'_>) -> Element<'a, ToastMessage> {
    let accent = accent_color(entry.category);

    let badge = Text::new(entry.category.as_str())
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message = Text::new(entry.message.to_string())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY))
        .on_press(ToastMessage::Dismiss(entry.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [badge / message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Column::new().spacing(spacing::XXS).push(badge).push(message))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Renders the shelf, oldest toast at the top, anchored bottom-right.
pub fn view_overlay<'a>(manager: &Manager) -> Element<'a, ToastMessage> {
    let toasts: Vec<Element<'a, ToastMessage>> =
        manager.with_shelf(|entries| entries.map(view_entry).collect());

    if toasts.is_empty() {
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: overlay(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: overlay(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
