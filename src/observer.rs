// SPDX-License-Identifier: MPL-2.0
//! Single-threaded publish/subscribe registry.
//!
//! [`Observers`] keeps handlers in registration order and hands out
//! [`Subscription`] guards that unregister on drop. The toast store and the
//! key-event source are both built on it.
//!
//! No internal borrow is held while a handler runs, so handlers are free to
//! subscribe, unsubscribe, or mutate whatever owns the registry.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<T> = Rc<dyn Fn(&T)>;

struct Registry<T: ?Sized> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Handler<T>)>>,
}

trait Unsubscribe {
    fn unsubscribe(&self, id: u64);
}

impl<T: ?Sized> Unsubscribe for Registry<T> {
    fn unsubscribe(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
    }
}

impl<T: ?Sized> Registry<T> {
    fn contains(&self, id: u64) -> bool {
        self.entries.borrow().iter().any(|(entry, _)| *entry == id)
    }
}

/// A list of handlers interested in values of type `T`.
pub struct Observers<T: ?Sized> {
    registry: Rc<Registry<T>>,
}

impl<T: ?Sized + 'static> Observers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers `handler`. It stays registered until the returned guard is dropped.
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        let handler: Handler<T> = Rc::new(handler);
        self.registry.entries.borrow_mut().push((id, handler));

        let registry: Rc<dyn Unsubscribe> = self.registry.clone();
        Subscription {
            registry: Rc::downgrade(&registry),
            id,
        }
    }

    /// Calls every handler with `value` and returns how many were called.
    pub fn notify(&self, value: &T) -> usize {
        self.notify_with(|handler| handler(value))
    }

    /// Calls `invoke` once per live handler, in registration order.
    ///
    /// The handler list is captured up front; a handler unsubscribed by an
    /// earlier one in the same cycle is skipped.
    pub(crate) fn notify_with(&self, mut invoke: impl FnMut(&dyn Fn(&T))) -> usize {
        let pending: Vec<(u64, Handler<T>)> = self.registry.entries.borrow().clone();

        let mut called = 0;
        for (id, handler) in pending {
            if self.registry.contains(id) {
                invoke(handler.as_ref());
                called += 1;
            }
        }
        called
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ?Sized + 'static> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.registry.entries.borrow().len())
            .finish()
    }
}

/// Guard returned by [`Observers::subscribe`]. Dropping it unregisters the handler.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    registry: Weak<dyn Unsubscribe>,
    id: u64,
}

impl Subscription {
    /// Returns whether the registry this subscription belongs to is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}
