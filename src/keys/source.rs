// SPDX-License-Identifier: MPL-2.0
//! The ambient keyboard-event stream.
//!
//! Front ends feed key presses into [`KeyEvents::dispatch`]; listeners
//! subscribe to it. Each UI thread has one global source, available through
//! [`KeyEvents::global`]. Independent sources can be created for tests.

use crate::observer::{Observers, Subscription};
use std::fmt;
use std::rc::Rc;

thread_local! {
    static GLOBAL: KeyEvents = KeyEvents::new();
}

/// Broadcasts key identifiers (`"Escape"`, `"Enter"`, `"a"`, ...) to subscribers.
///
/// Cloning yields another handle to the same stream.
#[derive(Clone)]
pub struct KeyEvents {
    observers: Rc<Observers<str>>,
}

impl KeyEvents {
    /// Creates an isolated event source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Rc::new(Observers::new()),
        }
    }

    /// Returns this thread's global event source.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.with(Clone::clone)
    }

    /// Registers `handler` for every key event until the guard is dropped.
    pub fn subscribe(&self, handler: impl Fn(&str) + 'static) -> Subscription {
        let subscription = self.observers.subscribe(handler);
        log::trace!("key listener attached ({} active)", self.observers.len());
        subscription
    }

    /// Delivers a key event to all current subscribers.
    ///
    /// Returns how many subscribers were called.
    pub fn dispatch(&self, key: &str) -> usize {
        self.observers.notify(key)
    }

    /// Number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for KeyEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEvents")
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
