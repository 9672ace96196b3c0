// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration.

use crate::notifications::Category;

/// Category preselected in the playground form.
pub const DEFAULT_CATEGORY: Category = Category::Notice;

/// Keys that dismiss every toast.
pub use crate::keys::DEFAULT_DISMISS_KEYS;

/// Default window size.
pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Minimum window size.
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
