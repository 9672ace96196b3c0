// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the playground form and
//! the toast shelf.
//!
//! The `App` struct owns the notification [`Manager`] and the key source it
//! listens on, and translates iced messages into store operations.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::key_name;

use crate::keys::KeyEvents;
use crate::notifications::{Category, Manager};
use crate::ui::playground;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const APP_TITLE: &str = "Toast Shelf";

/// Root Iced application state.
pub struct App {
    playground: playground::State,
    /// Toast store plus the dismiss-all shortcut.
    manager: Manager,
    /// Key source fed by the window's keyboard events.
    keys: KeyEvents,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.manager.snapshot().len())
            .field("listening", &self.manager.is_listening())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&config::Config::default(), KeyEvents::global())
    }
}

impl App {
    /// Builds the application from loaded settings, listening on `keys`.
    pub fn with_config(config: &config::Config, keys: KeyEvents) -> Self {
        let manager = Manager::new(keys.clone(), config.shelf.effective_dismiss_keys());
        Self {
            playground: playground::State::new(config.shelf.default_category),
            manager,
            keys,
            theme_mode: config.general.theme_mode,
        }
    }

    /// Initializes application state from CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));

        let mut app = Self::with_config(&config, KeyEvents::global());
        if let Some(theme_mode) = flags.theme {
            app.theme_mode = theme_mode;
        }

        log::info!(
            "dismiss-all keys: {}",
            app.manager.dismiss_keys().join(", ")
        );

        if let Some(warning) = config_warning {
            app.push_toast(warning, Category::Warning);
        }

        (app, Task::none())
    }

    /// Read-only access to the notification manager.
    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    fn push_toast(&self, message: String, category: Category) {
        if let Err(err) = self.manager.push(message, category) {
            log::error!("failed to create toast: {err}");
        }
    }

    fn title(&self) -> String {
        let count = self.manager.snapshot().len();
        if count == 0 {
            APP_TITLE.to_string()
        } else {
            format!("({count}) {APP_TITLE}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_key_subscription(self.manager.has_toasts())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Playground(message) => {
                if let Some(submission) = self.playground.update(message) {
                    self.push_toast(submission.message, submission.category);
                }
            }
            Message::Toast(message) => self.manager.handle_message(&message),
            Message::KeyPressed(key) => {
                self.keys.dispatch(&key);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            playground: &self.playground,
            manager: &self.manager,
        })
    }
}
