// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are short messages shown on a shelf until the user dismisses them,
//! one at a time or all at once with a keyboard shortcut.
//!
//! # Components
//!
//! - [`toast`] - `Toast`, `ToastId` and the closed `Category` set
//! - [`store`] - `Store`, the sole owner of the ordered toast collection
//! - [`shelf`] - projection of the collection into render descriptors
//! - [`manager`] - `Manager`, a store plus its dismiss-all shortcut
//!
//! # Usage
//!
//! ```
//! use toast_shelf::keys::KeyEvents;
//! use toast_shelf::notifications::{Category, Manager};
//!
//! let keys = KeyEvents::new();
//! let manager = Manager::new(keys.clone(), ["Escape"]);
//!
//! manager.push("Saved", Category::Success).unwrap();
//! manager.push("Disk almost full", Category::Warning).unwrap();
//! assert!(manager.is_listening());
//!
//! keys.dispatch("Escape");
//! assert!(!manager.has_toasts());
//! assert!(!manager.is_listening());
//! ```

mod manager;
pub mod shelf;
mod store;
mod toast;

pub use manager::{Manager, Message as ToastMessage};
pub use shelf::{project, Entries, Projector, ShelfEntry};
pub use store::{Snapshot, Store, WeakStore};
pub use toast::{Category, DismissAction, Toast, ToastId};
