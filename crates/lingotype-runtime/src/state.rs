#![forbid(unsafe_code)]

//! The language state owned by one scope.
//!
//! A [`LanguageState`] is a cheap shared handle: clones see the same value,
//! the same subscribers and the same change callback. The scope that created
//! it is its only owner in the ownership sense; consumers receive clones
//! through the context and write back through [`LanguageState::set_current`].
//!
//! When the owning scope unmounts it calls [`LanguageState::unmount`]. From
//! then on every clone is inert: writes are logged and dropped, and the
//! change callback (with everything it captured) is released.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use lingotype_i18n::LanguageCode;
use tracing::{debug, error, info_span, trace, warn};

use crate::error::{CallbackError, ValidationError};
use crate::reactive::{Observable, Subscription};

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

type ChangeCallback = Rc<dyn Fn(LanguageCode) -> Result<(), String>>;

/// Identity of a scope's state, stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    fn next() -> Self {
        Self(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// Current language plus its update path.
#[derive(Clone)]
pub struct LanguageState {
    id: ScopeId,
    current: Observable<LanguageCode>,
    on_change: Rc<RefCell<Option<ChangeCallback>>>,
    mounted: Rc<Cell<bool>>,
}

impl fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageState")
            .field("id", &self.id)
            .field("current", &self.current())
            .field("version", &self.version())
            .field("has_on_change", &self.on_change.borrow().is_some())
            .field("mounted", &self.mounted.get())
            .finish()
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(LanguageCode::PRIMARY)
    }
}

impl LanguageState {
    #[must_use]
    pub fn new(initial: LanguageCode) -> Self {
        let id = ScopeId::next();
        debug!(scope = id.get(), lang = %initial, "language state created");
        Self {
            id,
            current: Observable::new(initial),
            on_change: Rc::new(RefCell::new(None)),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    #[must_use]
    pub fn id(&self) -> ScopeId {
        self.id
    }

    #[must_use]
    pub fn current(&self) -> LanguageCode {
        self.current.get()
    }

    /// Increments once per actual language change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.version()
    }

    /// Install an infallible change callback, replacing any previous one.
    pub fn set_on_change(&self, callback: impl Fn(LanguageCode) + 'static) {
        self.set_on_change_fallible(move |code| {
            callback(code);
            Ok::<(), std::convert::Infallible>(())
        });
    }

    /// Install a change callback whose errors are logged and discarded.
    pub fn set_on_change_fallible<E: fmt::Display>(
        &self,
        callback: impl Fn(LanguageCode) -> Result<(), E> + 'static,
    ) {
        let wrapped: ChangeCallback = Rc::new(move |code| callback(code).map_err(|e| e.to_string()));
        *self.on_change.borrow_mut() = Some(wrapped);
    }

    pub fn clear_on_change(&self) {
        *self.on_change.borrow_mut() = None;
    }

    /// End this state's lifetime. Called by the owning scope on unmount.
    pub fn unmount(&self) {
        if self.mounted.replace(false) {
            self.clear_on_change();
            debug!(scope = self.id.get(), "language state unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Switch to `code`.
    ///
    /// Returns `false` without notifying anyone when `code` is already
    /// current. Otherwise subscribers are notified, then the change callback
    /// runs; a failing callback is logged and the new language is kept.
    /// After [`unmount`](Self::unmount) this logs a warning and returns `false`.
    pub fn set_current(&self, code: LanguageCode) -> bool {
        let _span = info_span!("lang.propagate", scope = self.id.get(), to = %code).entered();
        if !self.mounted.get() {
            warn!(
                lang = %code,
                "set_lang called after its LanguageProvider unmounted; ignoring language change"
            );
            return false;
        }
        if !self.current.set(code) {
            trace!("language unchanged; change callback suppressed");
            return false;
        }
        if let Err(err) = self.run_on_change(code) {
            error!(scope = self.id.get(), lang = %code, error = %err, "language change kept after callback failure");
        }
        true
    }

    /// Validate untyped input, then [`set_current`](Self::set_current).
    ///
    /// On failure nothing changes.
    pub fn set_current_str(&self, raw: &str) -> Result<LanguageCode, ValidationError> {
        let code = raw.parse::<LanguageCode>()?;
        self.set_current(code);
        Ok(code)
    }

    /// Observe language changes. Dropping the guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(LanguageCode) + 'static) -> Subscription {
        self.current.subscribe(callback)
    }

    /// Whether both handles refer to the same scope state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.current.ptr_eq(&other.current)
    }

    fn run_on_change(&self, code: LanguageCode) -> Result<(), CallbackError> {
        // Clone out so the callback may replace itself or write the state.
        let Some(callback) = self.on_change.borrow().clone() else {
            return Ok(());
        };
        match panic::catch_unwind(AssertUnwindSafe(|| callback(code))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(message)) => Err(CallbackError::Failed { code, message }),
            Err(payload) => Err(CallbackError::Panicked {
                code,
                message: panic_message(&*payload),
            }),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
