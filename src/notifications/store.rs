// SPDX-License-Identifier: MPL-2.0
//! Toast collection ownership and change notification.
//!
//! The [`Store`] is the only place the toast collection is mutated. Readers
//! get an immutable snapshot; every mutation goes through [`Store::create`],
//! [`Store::dismiss`] or [`Store::dismiss_all`], each of which derives the
//! next collection from the live one and then notifies subscribers.

use super::toast::{Category, Toast, ToastId};
use crate::error::Result;
use crate::observer::{Observers, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Immutable, ordered view of the active toasts (oldest first).
pub type Snapshot = Rc<[Toast]>;

struct Inner {
    toasts: RefCell<Snapshot>,
    observers: Observers<[Toast]>,
}

/// Owns the ordered collection of active toasts.
///
/// Cloning a `Store` yields another handle to the same collection.
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

impl Store {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                toasts: RefCell::new(Rc::from(Vec::new())),
                observers: Observers::new(),
            }),
        }
    }

    /// Appends a new toast and notifies subscribers.
    ///
    /// Any message is accepted, including an empty one. Fails only when no
    /// fresh id can be allocated, in which case nothing is created.
    pub fn create(&self, message: impl Into<String>, category: Category) -> Result<ToastId> {
        let id = ToastId::next()?;
        let toast = Toast::new(id, message.into(), category, self.downgrade());

        self.replace(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(current);
            next.push(toast);
            Some(next)
        });

        log::debug!("created {id} ({category}), {} active", self.len());
        Ok(id)
    }

    /// Like [`Store::create`], but takes the category by name and rejects
    /// names outside the fixed set.
    pub fn create_named(&self, message: impl Into<String>, category: &str) -> Result<ToastId> {
        let category = category.parse::<Category>()?;
        self.create(message, category)
    }

    /// Removes the toast with `id`, if present.
    ///
    /// Returns `true` if a toast was removed. Unknown ids are a silent no-op.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let removed = self.replace(|current| {
            current.iter().any(|toast| toast.id() == id).then(|| {
                current
                    .iter()
                    .filter(|toast| toast.id() != id)
                    .cloned()
                    .collect()
            })
        });

        if removed {
            log::debug!("dismissed {id}, {} active", self.len());
        }
        removed
    }

    /// Removes every toast. Returns how many were removed.
    pub fn dismiss_all(&self) -> usize {
        let count = self.len();
        if count > 0 {
            self.replace(|_| Some(Vec::new()));
            log::debug!("dismissed all {count} toasts");
        }
        count
    }

    /// Returns the current collection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner.toasts.borrow().clone()
    }

    /// Looks up an active toast by id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast> {
        self.inner
            .toasts
            .borrow()
            .iter()
            .find(|toast| toast.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers `handler` to be called after every change to the collection.
    ///
    /// The handler receives the collection as it is at the moment of the call.
    pub fn subscribe(&self, handler: impl Fn(&[Toast]) + 'static) -> Subscription {
        self.inner.observers.subscribe(handler)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Returns a non-owning handle to this store.
    #[must_use]
    pub fn downgrade(&self) -> WeakStore {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Runs a read-modify-write step against the live collection.
    ///
    /// `step` returns `None` to leave the collection untouched. Subscribers are
    /// notified only after the new collection is in place and the borrow is
    /// released.
    fn replace(&self, step: impl FnOnce(&[Toast]) -> Option<Vec<Toast>>) -> bool {
        let current = self.snapshot();
        let next = step(&current[..]);

        let Some(next) = next else {
            return false;
        };
        *self.inner.toasts.borrow_mut() = Rc::from(next);

        self.inner.observers.notify_with(|handler| {
            let snapshot = self.snapshot();
            handler(snapshot.as_ref());
        });
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("toasts", &self.inner.toasts.borrow())
            .field("subscribers", &self.inner.observers.len())
            .finish()
    }
}

/// Non-owning handle to a [`Store`].
#[derive(Clone, Default)]
pub struct WeakStore {
    inner: Weak<Inner>,
}

impl WeakStore {
    /// Returns the store if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Store> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl fmt::Debug for WeakStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
