#![forbid(unsafe_code)]

//! Language context: the slot consumers resolve their scope from.
//!
//! A [`LanguageContext`] is a stack of frames, one per scope currently
//! rendering. [`LanguageContext::provide`] pushes a frame and returns a
//! [`ScopeHandle`]; dropping the handle pops it. [`LanguageContext::read`]
//! returns the innermost frame, so nested scopes shadow outer ones for their
//! descendants and outer consumers see the outer frame again once the inner
//! handle is gone.
//!
//! # Invariants
//!
//! 1. Frames are LIFO; handles should drop in reverse push order. A handle
//!    dropped out of order removes its own frame, not the top one, and logs
//!    an error.
//! 2. A frame snapshots the language when pushed. Every read of that frame
//!    returns the snapshot, even if a consumer writes the state mid-pass, so
//!    one render pass never observes two values for one scope.
//! 3. Having no frame at all reads as [`ContextSlot::Empty`], never as a
//!    defaulted frame.

use std::cell::RefCell;
use std::rc::Rc;

use lingotype_i18n::LanguageCode;
use tracing::{debug, error, trace};

use crate::state::{LanguageState, ScopeId};

/// One installed scope.
#[derive(Debug, Clone)]
pub struct Frame {
    state: LanguageState,
    snapshot: LanguageCode,
    depth: usize,
}

impl Frame {
    /// The language this frame was installed with.
    #[must_use]
    pub fn lang(&self) -> LanguageCode {
        self.snapshot
    }

    #[must_use]
    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    /// Nesting depth, 1 for the outermost scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Result of [`LanguageContext::read`].
#[derive(Debug, Clone)]
pub enum ContextSlot {
    /// No scope encloses the reader.
    Empty,
    /// The innermost enclosing scope.
    Provided(Frame),
}

impl ContextSlot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Empty => None,
            Self::Provided(frame) => Some(frame),
        }
    }
}

/// Per-tree stack of language scopes.
///
/// Cloning yields another handle to the same stack.
#[derive(Debug, Clone, Default)]
pub struct LanguageContext {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl LanguageContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `state` for everything rendered until the handle drops.
    #[must_use = "dropping this handle immediately uninstalls the scope"]
    pub fn provide(&self, state: &LanguageState) -> ScopeHandle {
        let mut frames = self.frames.borrow_mut();
        let depth = frames.len() + 1;
        let snapshot = state.current();
        trace!(scope = state.id().get(), lang = %snapshot, depth, "scope installed");
        frames.push(Frame {
            state: state.clone(),
            snapshot,
            depth,
        });
        ScopeHandle {
            frames: Rc::clone(&self.frames),
            scope: state.id(),
            snapshot,
        }
    }

    /// The innermost installed scope, or [`ContextSlot::Empty`].
    #[must_use]
    pub fn read(&self) -> ContextSlot {
        match self.frames.borrow().last() {
            Some(frame) => ContextSlot::Provided(frame.clone()),
            None => ContextSlot::Empty,
        }
    }

    /// Number of installed scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.borrow().len()
    }
}

/// RAII guard for an installed scope.
#[must_use = "dropping this handle immediately uninstalls the scope"]
#[derive(Debug)]
pub struct ScopeHandle {
    frames: Rc<RefCell<Vec<Frame>>>,
    scope: ScopeId,
    snapshot: LanguageCode,
}

impl ScopeHandle {
    #[must_use]
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// The language the installed frame serves for this pass.
    #[must_use]
    pub fn lang(&self) -> LanguageCode {
        self.snapshot
    }
}

impl Drop for ScopeHandle {
    fn drop(&mut self) {
        let mut frames = self.frames.borrow_mut();
        let Some(position) = frames.iter().rposition(|frame| frame.state.id() == self.scope) else {
            debug!(scope = self.scope.get(), "scope handle dropped with no matching frame");
            return;
        };
        if position + 1 != frames.len() {
            error!(
                scope = self.scope.get(),
                depth = position + 1,
                installed = frames.len(),
                "scope handles dropped out of order; removing this scope's own frame"
            );
        }
        frames.remove(position);
        trace!(scope = self.scope.get(), "scope uninstalled");
    }
}
