#![forbid(unsafe_code)]

//! A small observable cell for `Copy` values.
//!
//! [`Observable<T>`] is the storage behind every language scope. Handles are
//! cheap clones of one `Rc<RefCell<..>>` cell. A write that changes the value
//! bumps the version and then calls each live watcher, oldest first.
//!
//! # Invariants
//!
//! 1. The version grows by exactly one per value-changing write.
//! 2. Writing the current value is a no-op: no version bump, no callbacks.
//! 3. Watchers run in registration order, after the cell borrow is released,
//!    so a watcher may write the cell again.
//!
//! Watchers are held weakly. Their [`Subscription`] owns the callback, and
//! entries whose guard is gone are swept on the next write.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace_span;

type Watcher<T> = Rc<dyn Fn(T)>;

struct Cell<T> {
    value: T,
    version: u64,
    watchers: Vec<Weak<dyn Fn(T)>>,
}

/// Shared, versioned value with change callbacks.
pub struct Observable<T> {
    cell: Rc<RefCell<Cell<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.cell.borrow();
        f.debug_struct("Observable")
            .field("value", &cell.value)
            .field("version", &cell.version)
            .field("watchers", &cell.watchers.len())
            .finish()
    }
}

impl<T: Copy + PartialEq + 'static> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Cell {
                value,
                version: 0,
                watchers: Vec::new(),
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> T {
        self.cell.borrow().value
    }

    /// Returns whether the value changed (and watchers ran).
    pub fn set(&self, value: T) -> bool {
        let live = {
            let mut cell = self.cell.borrow_mut();
            if cell.value == value {
                return false;
            }
            cell.value = value;
            cell.version += 1;
            cell.watchers.retain(|weak| weak.strong_count() > 0);
            cell.watchers
                .iter()
                .filter_map(Weak::upgrade)
                .collect::<Vec<Watcher<T>>>()
        };

        if !live.is_empty() {
            let _span = trace_span!("observable.notify", watchers = live.len()).entered();
            for watcher in &live {
                watcher(value);
            }
        }
        true
    }

    /// Call `watcher` after every change until the guard is dropped.
    pub fn subscribe(&self, watcher: impl Fn(T) + 'static) -> Subscription {
        let owned: Watcher<T> = Rc::new(watcher);
        self.cell.borrow_mut().watchers.push(Rc::downgrade(&owned));
        Subscription {
            _owned: Box::new(owned),
        }
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.cell.borrow().version
    }

    /// Registered watchers, counting dropped ones not yet swept.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.cell.borrow().watchers.len()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

/// Keeps one watcher registered.
pub struct Subscription {
    _owned: Box<dyn std::any::Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingotype_i18n::LanguageCode;
    use std::cell::Cell as StdCell;

    #[test]
    fn write_bumps_version_once() {
        let obs = Observable::new(LanguageCode::En);
        assert!(obs.set(LanguageCode::Ja));
        assert_eq!(obs.get(), LanguageCode::Ja);
        assert_eq!(obs.version(), 1);
    }

    #[test]
    fn equal_write_is_ignored() {
        let obs = Observable::new(LanguageCode::Ja);
        let hits = Rc::new(StdCell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = obs.subscribe(move |_| counter.set(counter.get() + 1));

        assert!(!obs.set(LanguageCode::Ja));
        assert_eq!(obs.version(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn watchers_run_oldest_first() {
        let obs = Observable::new(LanguageCode::En);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&seen);
        let second = Rc::clone(&seen);
        let _a = obs.subscribe(move |code| first.borrow_mut().push((1, code)));
        let _b = obs.subscribe(move |code| second.borrow_mut().push((2, code)));

        obs.set(LanguageCode::ZhTw);
        assert_eq!(
            *seen.borrow(),
            vec![(1, LanguageCode::ZhTw), (2, LanguageCode::ZhTw)]
        );
    }

    #[test]
    fn dropped_guard_stops_callbacks_and_is_swept() {
        let obs = Observable::new(LanguageCode::En);
        let hits = Rc::new(StdCell::new(0));
        let counter = Rc::clone(&hits);
        let sub = obs.subscribe(move |_| counter.set(counter.get() + 1));
        let _keep = obs.subscribe(|_| {});

        obs.set(LanguageCode::Ja);
        drop(sub);
        assert_eq!(obs.watcher_count(), 2);
        obs.set(LanguageCode::En);
        assert_eq!(hits.get(), 1);
        assert_eq!(obs.watcher_count(), 1);
    }

    #[test]
    fn handles_share_one_cell() {
        let a = Observable::new(LanguageCode::En);
        let b = a.clone();
        b.set(LanguageCode::Ja);
        assert_eq!(a.get(), LanguageCode::Ja);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Observable::new(LanguageCode::Ja)));
    }

    #[test]
    fn watcher_may_write_again() {
        let obs = Observable::new(LanguageCode::En);
        let handle = obs.clone();
        let _redirect = obs.subscribe(move |code| {
            if code == LanguageCode::Ja {
                handle.set(LanguageCode::ZhTw);
            }
        });
        obs.set(LanguageCode::Ja);
        assert_eq!(obs.get(), LanguageCode::ZhTw);
        assert_eq!(obs.version(), 2);
    }
}
