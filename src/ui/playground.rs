// SPDX-License-Identifier: MPL-2.0
//! The "Pop Toast!" form.
//!
//! Collects a message and a category and hands them to the caller as a
//! [`Submission`]. The form resets itself after every submission.

use crate::notifications::Category;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, text_input, Button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    MessageChanged(String),
    CategorySelected(Category),
    Pop,
}

/// A toast the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: String,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct State {
    message: String,
    category: Category,
    default_category: Category,
}

impl State {
    #[must_use]
    pub fn new(default_category: Category) -> Self {
        Self {
            message: String::new(),
            category: default_category,
            default_category,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Applies a form message. Returns the submission when the user pops a toast.
    pub fn update(&mut self, message: Message) -> Option<Submission> {
        match message {
            Message::MessageChanged(text) => {
                self.message = text;
                None
            }
            Message::CategorySelected(category) => {
                self.category = category;
                None
            }
            Message::Pop => {
                let submission = Submission {
                    message: std::mem::take(&mut self.message),
                    category: self.category,
                };
                self.category = self.default_category;
                Some(submission)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new("Toast Playground").size(typography::TITLE_LG);

        let message_input = text_input("Message", &self.message)
            .on_input(Message::MessageChanged)
            .on_submit(Message::Pop)
            .padding(spacing::XS)
            .size(typography::BODY_LG);

        let mut categories = Row::new().spacing(spacing::XS);
        for category in Category::ALL {
            let mut choice = Button::new(Text::new(category.as_str()).size(typography::BODY))
                .on_press(Message::CategorySelected(category));
            if category == self.category {
                choice = choice.style(button::primary); // Highlight current category
            } else {
                choice = choice.style(button::secondary);
            }
            categories = categories.push(choice);
        }

        let pop_button =
            button(Text::new("Pop Toast!").size(typography::BODY)).on_press(Message::Pop);

        let form = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(labeled_row("Message", message_input.into()))
            .push(labeled_row("Category", categories.into()))
            .push(labeled_row("", pop_button.into()))
            .width(Length::Fixed(sizing::FORM_WIDTH));

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

fn labeled_row<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::LABEL_WIDTH)),
        )
        .push(control)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_starts_with_default_category() {
        let state = State::new(Category::Warning);
        assert_eq!(state.category(), Category::Warning);
        assert!(state.message().is_empty());
    }

    #[test]
    fn pop_submits_and_resets() {
        let mut state = State::default();
        assert_eq!(state.update(Message::MessageChanged("hello".into())), None);
        assert_eq!(state.update(Message::CategorySelected(Category::Error)), None);

        let submission = state.update(Message::Pop);
        assert_eq!(
            submission,
            Some(Submission {
                message: "hello".into(),
                category: Category::Error,
            })
        );
        assert!(state.message().is_empty());
        assert_eq!(state.category(), Category::Notice);
    }

    #[test]
    fn empty_message_is_still_submitted() {
        let mut state = State::default();
        let submission = state.update(Message::Pop);
        assert_eq!(submission.map(|s| s.message), Some(String::new()));
    }

    #[test]
    fn view_builds() {
        let state = State::default();
        let _ = state.view();
    }
}
