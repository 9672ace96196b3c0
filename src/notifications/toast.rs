// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] entity, its [`ToastId`] and the closed
//! [`Category`] set, plus the [`DismissAction`] every toast carries.

use super::store::WeakStore;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a toast. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

impl ToastId {
    /// Allocates a fresh id.
    ///
    /// Fails with [`Error::IdExhausted`] once the id space is used up; ids are
    /// never wrapped around.
    pub fn next() -> Result<Self> {
        allocate(&NEXT_ID)
    }

    /// Raw numeric value, mainly for logging.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

fn allocate(counter: &AtomicU64) -> Result<ToastId> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        .map(ToastId)
        .map_err(|_| Error::IdExhausted)
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Presentation intent of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Notice,
    Warning,
    Success,
    Error,
}

impl Category {
    /// Every category, in definition order.
    pub const ALL: [Category; 4] = [
        Category::Notice,
        Category::Warning,
        Category::Success,
        Category::Error,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Notice => "notice",
            Category::Warning => "warning",
            Category::Success => "success",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// Removes one specific toast from the store it was created in.
///
/// The target id is fixed when the toast is created. Invoking the action
/// after the toast is gone, or after the store is dropped, does nothing.
#[derive(Clone)]
pub struct DismissAction {
    id: ToastId,
    store: WeakStore,
}

impl DismissAction {
    pub(crate) fn new(id: ToastId, store: WeakStore) -> Self {
        Self { id, store }
    }

    /// The id this action removes.
    #[must_use]
    pub fn target(&self) -> ToastId {
        self.id
    }

    /// Removes the target toast. Returns `true` if it was still present.
    pub fn invoke(&self) -> bool {
        match self.store.upgrade() {
            Some(store) => store.dismiss(self.id),
            None => false,
        }
    }
}

impl fmt::Debug for DismissAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DismissAction").field(&self.id).finish()
    }
}

/// A single active notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    category: Category,
    message: String,
    dismiss: DismissAction,
}

impl Toast {
    pub(crate) fn new(id: ToastId, message: String, category: Category, store: WeakStore) -> Self {
        Self {
            id,
            category,
            message,
            dismiss: DismissAction::new(id, store),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The action bound to this toast at creation.
    #[must_use]
    pub fn dismiss_action(&self) -> &DismissAction {
        &self.dismiss
    }

    /// Removes this toast from its store.
    pub fn dismiss(&self) -> bool {
        self.dismiss.invoke()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastId::next().unwrap();
        let b = ToastId::next().unwrap();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn exhausted_counter_reports_error_and_does_not_wrap() {
        let counter = AtomicU64::new(u64::MAX - 1);
        assert_eq!(allocate(&counter).unwrap().get(), u64::MAX - 1);
        assert_eq!(allocate(&counter), Err(Error::IdExhausted));
        assert_eq!(allocate(&counter), Err(Error::IdExhausted));
        assert_eq!(counter.load(Ordering::Relaxed), u64::MAX);
    }

    #[test]
    fn default_category_is_first_defined() {
        assert_eq!(Category::default(), Category::ALL[0]);
        assert_eq!(Category::default(), Category::Notice);
    }

    #[test]
    fn category_parses_known_names() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("  Warning ".parse::<Category>(), Ok(Category::Warning));
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_eq!(
            "urgent".parse::<Category>(),
            Err(Error::InvalidCategory("urgent".into()))
        );
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_lowercase_name() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            category: Category,
        }

        let text = toml::to_string(&Wrapper {
            category: Category::Success,
        })
        .unwrap();
        assert_eq!(text.trim(), r#"category = "success""#);

        let parsed: Wrapper = toml::from_str(r#"category = "error""#).unwrap();
        assert_eq!(parsed.category, Category::Error);
        assert!(toml::from_str::<Wrapper>(r#"category = "info""#).is_err());
    }

    #[test]
    fn dismiss_action_on_dropped_store_is_noop() {
        let action = DismissAction::new(ToastId::next().unwrap(), WeakStore::default());
        assert!(!action.invoke());
    }
}
