// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The playground fills the window and the shelf floats above it.

use super::Message;
use crate::notifications::Manager;
use crate::ui::playground;
use crate::ui::shelf;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub playground: &'a playground::State,
    pub manager: &'a Manager,
}

/// Renders the playground with the toast shelf layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Container::new(ctx.playground.view().map(Message::Playground))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = shelf::view_overlay(ctx.manager).map(Message::Toast);

    Stack::new()
        .push(base)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
