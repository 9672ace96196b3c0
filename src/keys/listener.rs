// SPDX-License-Identifier: MPL-2.0
//! Bridge from the key-event stream to a callback.
//!
//! A [`KeyTrigger`] holds at most one subscription on a [`KeyEvents`] source.
//! Every change to its inputs drops the old subscription before a new one is
//! installed, and dropping the trigger removes it.

use super::source::KeyEvents;
use crate::observer::Subscription;
use std::fmt;
use std::rc::Rc;

/// Calls a callback whenever one of a set of keys is pressed, while enabled.
pub struct KeyTrigger {
    source: KeyEvents,
    keys: Rc<[String]>,
    callback: Rc<dyn Fn()>,
    enabled: bool,
    subscription: Option<Subscription>,
}

impl KeyTrigger {
    /// Creates a trigger listening on `source` for any of `keys`.
    ///
    /// Subscribes immediately when `enabled` is `true`.
    pub fn new<I, K>(
        source: KeyEvents,
        keys: I,
        callback: impl Fn() + 'static,
        enabled: bool,
    ) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut trigger = Self {
            source,
            keys: collect_keys(keys),
            callback: Rc::new(callback),
            enabled,
            subscription: None,
        };
        trigger.resubscribe();
        trigger
    }

    /// Turns the trigger on or off. A no-op if the state does not change.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.resubscribe();
        }
    }

    /// Replaces the trigger keys.
    pub fn set_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = collect_keys(keys);
        self.resubscribe();
    }

    /// Replaces the callback.
    pub fn set_callback(&mut self, callback: impl Fn() + 'static) {
        self.callback = Rc::new(callback);
        self.resubscribe();
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a subscription is currently installed on the source.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn resubscribe(&mut self) {
        // Old subscription goes first so there is never more than one.
        self.subscription = None;

        if !self.enabled {
            log::trace!("key trigger {:?} detached", self.keys);
            return;
        }

        let keys = Rc::clone(&self.keys);
        let callback = Rc::clone(&self.callback);
        self.subscription = Some(self.source.subscribe(move |key| {
            if keys.iter().any(|k| k == key) {
                callback();
            }
        }));
    }
}

fn collect_keys<I, K>(keys: I) -> Rc<[String]>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    keys.into_iter().map(Into::into).collect()
}

impl fmt::Debug for KeyTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyTrigger")
            .field("keys", &self.keys)
            .field("enabled", &self.enabled)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inc = {
            let hits = hits.clone();
            move || hits.set(hits.get() + 1)
        };
        (hits, inc)
    }

    #[test]
    fn fires_once_per_matching_event() {
        let source = KeyEvents::new();
        let (hits, inc) = counter();
        let _trigger = KeyTrigger::new(source.clone(), ["Escape"], inc, true);

        source.dispatch("Escape");
        source.dispatch("Enter");
        source.dispatch("Escape");
        // Key repeat is not debounced.
        source.dispatch("Escape");

        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn any_key_in_the_set_triggers() {
        let source = KeyEvents::new();
        let (hits, inc) = counter();
        let _trigger = KeyTrigger::new(source.clone(), ["Escape", "q"], inc, true);

        source.dispatch("q");
        source.dispatch("Escape");
        source.dispatch("Q");

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn disabled_trigger_never_fires_or_subscribes() {
        let source = KeyEvents::new();
        let (hits, inc) = counter();
        let trigger = KeyTrigger::new(source.clone(), ["Escape"], inc, false);

        assert!(!trigger.is_active());
        assert_eq!(source.subscriber_count(), 0);
        source.dispatch("Escape");
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn toggling_keeps_at_most_one_subscription() {
        let source = KeyEvents::new();
        let (hits, inc) = counter();
        let mut trigger = KeyTrigger::new(source.clone(), ["Escape"], inc, true);

        for _ in 0..5 {
            trigger.set_enabled(false);
            assert_eq!(source.subscriber_count(), 0);
            source.dispatch("Escape");

            trigger.set_enabled(true);
            trigger.set_enabled(true);
            assert_eq!(source.subscriber_count(), 1);
        }

        source.dispatch("Escape");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn changing_keys_replaces_subscription() {
        let source = KeyEvents::new();
        let (hits, inc) = counter();
        let mut trigger = KeyTrigger::new(source.clone(), ["Escape"], inc, true);

        trigger.set_keys(["x"]);
        assert_eq!(source.subscriber_count(), 1);
        assert_eq!(trigger.keys(), ["x".to_string()]);

        source.dispatch("Escape");
        source.dispatch("x");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn changing_callback_replaces_subscription() {
        let source = KeyEvents::new();
        let (old_hits, old) = counter();
        let (new_hits, new) = counter();
        let mut trigger = KeyTrigger::new(source.clone(), ["Escape"], old, true);

        trigger.set_callback(new);
        source.dispatch("Escape");

        assert_eq!(source.subscriber_count(), 1);
        assert_eq!(old_hits.get(), 0);
        assert_eq!(new_hits.get(), 1);
    }

    #[test]
    fn drop_removes_subscription() {
        let source = KeyEvents::new();
        let trigger = KeyTrigger::new(source.clone(), ["Escape"], || {}, true);
        assert_eq!(source.subscriber_count(), 1);

        drop(trigger);
        assert_eq!(source.subscriber_count(), 0);
    }
}
