// SPDX-License-Identifier: MPL-2.0
//! Global keyboard shortcuts.
//!
//! - [`source`] - the per-thread keyboard event stream
//! - [`listener`] - `KeyTrigger`, a toggleable key-to-callback bridge

mod listener;
mod source;

pub use listener::KeyTrigger;
pub use source::KeyEvents;

/// Keys that dismiss every toast when no other keys are configured.
pub const DEFAULT_DISMISS_KEYS: &[&str] = &["Escape"];
