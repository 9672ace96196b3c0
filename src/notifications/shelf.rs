// SPDX-License-Identifier: MPL-2.0
//! Render-ready projection of the toast collection.
//!
//! [`project`] turns a snapshot into an ordered sequence of [`ShelfEntry`]
//! descriptors, lazily and without copying. [`Projector`] re-runs a render
//! function on every store change and at no other time.

use super::store::Store;
use super::toast::{Category, DismissAction, Toast, ToastId};
use crate::observer::Subscription;
use std::iter::FusedIterator;
use std::slice;

/// One toast as the shelf presents it.
#[derive(Debug, Clone, Copy)]
pub struct ShelfEntry<'a> {
    pub category: Category,
    pub message: &'a str,
    pub dismiss: &'a DismissAction,
}

impl ShelfEntry<'_> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.dismiss.target()
    }

    /// Removes exactly this entry's toast from the store.
    pub fn dismiss(&self) -> bool {
        self.dismiss.invoke()
    }
}

/// Projects `toasts` into shelf entries, preserving order.
#[must_use]
pub fn project(toasts: &[Toast]) -> Entries<'_> {
    Entries {
        inner: toasts.iter(),
    }
}

/// Iterator returned by [`project`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, Toast>,
}

fn entry(toast: &Toast) -> ShelfEntry<'_> {
    ShelfEntry {
        category: toast.category(),
        message: toast.message(),
        dismiss: toast.dismiss_action(),
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = ShelfEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(entry)
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

/// Keeps a render function in sync with a store.
///
/// The render function is called with a fresh projection after every store
/// change. Dropping the projector detaches it.
#[derive(Debug)]
pub struct Projector {
    _subscription: Subscription,
}

impl Projector {
    pub fn attach(store: &Store, render: impl Fn(Entries<'_>) + 'static) -> Self {
        Self {
            _subscription: store.subscribe(move |toasts| render(project(toasts))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn rendered(store: &Store) -> Vec<(Category, String)> {
        project(&store.snapshot())
            .map(|e| (e.category, e.message.to_string()))
            .collect()
    }

    #[test]
    fn projection_preserves_order_and_fields() {
        let store = Store::new();
        store.create("a", Category::Notice).unwrap();
        store.create("b", Category::Warning).unwrap();

        assert_eq!(
            rendered(&store),
            vec![
                (Category::Notice, "a".to_string()),
                (Category::Warning, "b".to_string())
            ]
        );
    }

    #[test]
    fn projection_is_pure() {
        let store = Store::new();
        store.create("a", Category::Error).unwrap();
        let snapshot = store.snapshot();

        let first: Vec<_> = project(&snapshot).map(|e| e.id()).collect();
        let second: Vec<_> = project(&snapshot).map(|e| e.id()).collect();
        assert_eq!(first, second);
        assert_eq!(project(&snapshot).len(), 1);
    }

    #[test]
    fn entry_dismiss_removes_only_its_toast() {
        let store = Store::new();
        for (i, category) in Category::ALL.into_iter().enumerate() {
            store.create(format!("t{i}"), category).unwrap();
        }
        let snapshot = store.snapshot();

        // Several dismissals from one stale projection, as in a single batch.
        let entries: Vec<_> = project(&snapshot).collect();
        assert!(entries[3].dismiss());
        assert!(entries[1].dismiss());
        assert!(entries[0].dismiss());

        assert_eq!(rendered(&store), vec![(Category::Success, "t2".to_string())]);
    }

    #[test]
    fn reverse_order_dismissal_shrinks_one_at_a_time() {
        let store = Store::new();
        for category in Category::ALL {
            store.create(category.as_str(), category).unwrap();
        }
        let snapshot = store.snapshot();

        for (remaining, entry) in project(&snapshot).enumerate().rev() {
            entry.dismiss();
            assert_eq!(store.len(), remaining);
        }
    }

    #[test]
    fn projector_renders_on_every_change_only() {
        let store = Store::new();
        let frames = Rc::new(RefCell::new(Vec::<Vec<String>>::new()));
        let projector = {
            let frames = frames.clone();
            Projector::attach(&store, move |entries| {
                frames
                    .borrow_mut()
                    .push(entries.map(|e| e.message.to_string()).collect());
            })
        };
        assert!(frames.borrow().is_empty());

        let a = store.create("a", Category::Notice).unwrap();
        store.create("b", Category::Success).unwrap();
        store.dismiss(a);
        store.dismiss(a);
        store.dismiss_all();

        assert_eq!(
            *frames.borrow(),
            vec![
                vec!["a".to_string()],
                vec!["a".to_string(), "b".to_string()],
                vec!["b".to_string()],
                vec![],
            ]
        );

        drop(projector);
        store.create("c", Category::Notice).unwrap();
        assert_eq!(frames.borrow().len(), 4);
    }

    #[test]
    fn rendered_entry_can_dismiss_during_render() {
        let store = Store::new();
        // Renderer that immediately dismisses any error toast it is shown.
        let _projector = Projector::attach(&store, |entries| {
            for entry in entries {
                if entry.category == Category::Error {
                    entry.dismiss();
                }
            }
        });

        store.create("keep", Category::Notice).unwrap();
        store.create("drop", Category::Error).unwrap();

        assert_eq!(rendered(&store), vec![(Category::Notice, "keep".to_string())]);
    }
}
