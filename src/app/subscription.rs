// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Key presses are forwarded to the key source only while the shelf holds
//! toasts. Focus does not matter: a key typed into the message field still
//! counts.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the key press subscription, or nothing when the shelf is empty.
pub fn create_key_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_name(&key).map(Message::KeyPressed)
            }
            _ => None,
        })
    } else {
        Subscription::none()
    }
}

/// Names a key the way a browser's `KeyboardEvent.key` would.
///
/// Named keys use their variant name (`"Escape"`, `"ArrowLeft"`), characters
/// are passed through, and unidentified keys have no name.
#[must_use]
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(Named::Space) => Some(" ".to_string()),
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Character(c) => Some(c.to_string()),
        Key::Unidentified => None,
    }
}
