// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::notifications::ToastMessage;
use crate::ui::playground;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Playground(playground::Message),
    Toast(ToastMessage),
    /// A key was pressed anywhere in the window, named the DOM way
    /// (`"Escape"`, `"a"`).
    KeyPressed(String),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOAST_SHELF_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override; wins over `[general] theme_mode`.
    pub theme: Option<ThemeMode>,
}
