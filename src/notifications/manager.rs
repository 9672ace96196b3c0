// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns a [`Store`] and the dismiss-all [`KeyTrigger`], and
//! keeps the trigger attached exactly while the store holds toasts.

use super::shelf::{self, Entries};
use super::store::{Snapshot, Store};
use super::toast::{Category, ToastId};
use crate::error::Result;
use crate::keys::{KeyEvents, KeyTrigger, DEFAULT_DISMISS_KEYS};
use crate::observer::Subscription;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Dismiss every toast.
    DismissAll,
}

/// Owns the toast store and its keyboard shortcut.
pub struct Manager {
    store: Store,
    trigger: Rc<RefCell<KeyTrigger>>,
    _policy: Subscription,
}

impl Manager {
    /// Creates an empty manager whose dismiss-all shortcut listens on `source`.
    pub fn new<I, K>(source: KeyEvents, dismiss_keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let store = Store::new();

        let dismiss_all = {
            let store = store.downgrade();
            move || {
                if let Some(store) = store.upgrade() {
                    store.dismiss_all();
                }
            }
        };
        // Starts detached: there is nothing to dismiss yet.
        let trigger = Rc::new(RefCell::new(KeyTrigger::new(
            source,
            dismiss_keys,
            dismiss_all,
            false,
        )));

        let policy = {
            let trigger = Rc::downgrade(&trigger);
            store.subscribe(move |toasts| {
                if let Some(trigger) = trigger.upgrade() {
                    trigger.borrow_mut().set_enabled(!toasts.is_empty());
                }
            })
        };

        Self {
            store,
            trigger,
            _policy: policy,
        }
    }

    /// Manager on this thread's global key source, dismissing on the default keys.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(KeyEvents::global(), DEFAULT_DISMISS_KEYS.iter().copied())
    }

    /// Pushes a new toast onto the end of the shelf.
    pub fn push(&self, message: impl Into<String>, category: Category) -> Result<ToastId> {
        self.store.create(message, category)
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.store.dismiss(id)
    }

    /// Clears all toasts.
    pub fn dismiss_all(&self) -> usize {
        self.store.dismiss_all()
    }

    /// Handles a toast message.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissAll => {
                self.dismiss_all();
            }
        }
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Calls `f` with the current shelf projection.
    pub fn with_shelf<R>(&self, f: impl FnOnce(Entries<'_>) -> R) -> R {
        let snapshot = self.store.snapshot();
        f(shelf::project(&snapshot))
    }

    /// Returns whether there are any toasts.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.is_empty()
    }

    /// Whether the dismiss-all shortcut is currently attached to its key source.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.trigger.borrow().is_active()
    }

    /// Keys that dismiss every toast.
    #[must_use]
    pub fn dismiss_keys(&self) -> Vec<String> {
        self.trigger.borrow().keys().to_vec()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("store", &self.store)
            .field("trigger", &self.trigger.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (KeyEvents, Manager) {
        let source = KeyEvents::new();
        let manager = Manager::new(source.clone(), ["Escape"]);
        (source, manager)
    }

    #[test]
    fn new_manager_is_empty_and_not_listening() {
        let (source, manager) = manager();
        assert!(!manager.has_toasts());
        assert!(!manager.is_listening());
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn push_attaches_the_shortcut() {
        let (source, manager) = manager();
        manager.push("hello", Category::Notice).unwrap();

        assert!(manager.is_listening());
        assert_eq!(source.subscriber_count(), 1);

        manager.push("again", Category::Error).unwrap();
        assert_eq!(source.subscriber_count(), 1);
    }

    #[test]
    fn escape_dismisses_everything_and_detaches() {
        let (source, manager) = manager();
        for category in Category::ALL {
            manager.push(category.as_str(), category).unwrap();
        }

        assert_eq!(source.dispatch("Escape"), 1);
        assert!(!manager.has_toasts());
        assert!(!manager.is_listening());

        // Nobody is listening any more.
        assert_eq!(source.dispatch("Escape"), 0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn other_keys_are_ignored() {
        let (source, manager) = manager();
        manager.push("hello", Category::Notice).unwrap();

        source.dispatch("Enter");
        source.dispatch("escape");
        assert_eq!(manager.snapshot().len(), 1);
    }

    #[test]
    fn dismissing_the_last_toast_detaches() {
        let (source, manager) = manager();
        let id = manager.push("only", Category::Success).unwrap();

        assert!(manager.dismiss(id));
        assert!(!manager.is_listening());
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn repeated_cycles_rearm_identically() {
        let (source, manager) = manager();
        for round in 0..3 {
            manager.push(format!("round {round}"), Category::Warning).unwrap();
            assert!(manager.is_listening());
            assert_eq!(source.subscriber_count(), 1);

            source.dispatch("Escape");
            assert!(!manager.has_toasts());
            assert_eq!(source.subscriber_count(), 0);
        }
    }

    #[test]
    fn handle_message_dismiss() {
        let (_source, manager) = manager();
        let keep = manager.push("keep", Category::Notice).unwrap();
        let gone = manager.push("gone", Category::Notice).unwrap();

        manager.handle_message(&Message::Dismiss(gone));
        assert_eq!(
            manager.snapshot().iter().map(|t| t.id()).collect::<Vec<_>>(),
            vec![keep]
        );

        manager.handle_message(&Message::DismissAll);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn with_shelf_projects_current_state() {
        let (_source, manager) = manager();
        manager.push("a", Category::Notice).unwrap();
        manager.push("b", Category::Error).unwrap();

        let messages: Vec<String> =
            manager.with_shelf(|entries| entries.map(|e| e.message.to_string()).collect());
        assert_eq!(messages, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn dropping_manager_releases_key_subscription() {
        let (source, manager) = manager();
        manager.push("a", Category::Notice).unwrap();
        assert_eq!(source.subscriber_count(), 1);

        drop(manager);
        assert_eq!(source.subscriber_count(), 0);
    }
}
