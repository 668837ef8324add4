#![forbid(unsafe_code)]

//! Entry points for the two execution paths.
//!
//! [`render_to_string`] is the ahead-of-time path: one pass, no
//! subscriptions. [`LiveRoot`] is the client path: it renders on mount,
//! watches every scope state the pass installed, and re-renders lazily the
//! next time markup is requested after any of them changed.
//!
//! Both paths run the same `View::render` against a fresh
//! [`LanguageContext`], so for the same tree and state they produce the same
//! bytes.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use lingotype_runtime::{BuildMode, LanguageContext, LanguageState, Subscription};
use tracing::debug_span;

use crate::markup::Markup;
use crate::view::{RenderCx, RenderError, RenderTarget, View};

struct Pass {
    html: String,
    observed: Vec<LanguageState>,
    outdated: bool,
}

fn render_pass(view: &dyn View, mode: BuildMode, target: RenderTarget) -> Result<Pass, RenderError> {
    let _span = debug_span!("lingotype.render", %target, %mode).entered();
    let mut cx = RenderCx::new(LanguageContext::new(), mode, target);
    let mut out = Markup::new();
    view.render(&mut cx, &mut out)?;
    debug_assert_eq!(cx.context().depth(), 0, "scope left installed after render");
    let outdated = cx.changed_during_pass();
    Ok(Pass {
        html: out.into_string(),
        observed: cx.into_observed(),
        outdated,
    })
}

/// Render `view` once for ahead-of-time output.
pub fn render_to_string(view: &dyn View, mode: BuildMode) -> Result<String, RenderError> {
    render_pass(view, mode, RenderTarget::Server).map(|pass| pass.html)
}

/// A mounted, live view tree.
pub struct LiveRoot<V> {
    view: V,
    mode: BuildMode,
    html: String,
    stale: Rc<Cell<bool>>,
    watched: Vec<(LanguageState, Subscription)>,
    render_count: u64,
}

impl<V> fmt::Debug for LiveRoot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveRoot")
            .field("mode", &self.mode)
            .field("stale", &self.stale.get())
            .field("watched", &self.watched.len())
            .field("render_count", &self.render_count)
            .finish_non_exhaustive()
    }
}

impl<V: View> LiveRoot<V> {
    /// Mount `view`, running the first pass immediately.
    pub fn mount(view: V, mode: BuildMode) -> Result<Self, RenderError> {
        let mut root = Self {
            view,
            mode,
            html: String::new(),
            stale: Rc::new(Cell::new(true)),
            watched: Vec::new(),
            render_count: 0,
        };
        root.rerender()?;
        Ok(root)
    }

    /// Current markup, re-rendering first if a watched scope changed.
    pub fn html(&mut self) -> Result<&str, RenderError> {
        if self.stale.get() {
            self.rerender()?;
        }
        Ok(&self.html)
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Completed passes, including the mount pass.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Scope states the last successful pass installed.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        self.stale.set(true);
        &mut self.view
    }

    fn rerender(&mut self) -> Result<(), RenderError> {
        self.stale.set(false);
        let pass = match render_pass(&self.view, self.mode, RenderTarget::Client) {
            Ok(pass) => pass,
            Err(err) => {
                self.stale.set(true);
                return Err(err);
            }
        };
        self.html = pass.html;
        self.render_count += 1;
        // Writes to scopes first seen in this pass predate their subscription.
        if pass.outdated {
            self.stale.set(true);
        }

        // Watch exactly this pass's scopes; states no longer rendered are
        // released along with their subscriptions.
        let mut previous = std::mem::take(&mut self.watched);
        for state in pass.observed {
            let entry = match previous.iter().position(|(seen, _)| seen.ptr_eq(&state)) {
                Some(index) => previous.swap_remove(index),
                None => {
                    let stale = Rc::clone(&self.stale);
                    let subscription = state.subscribe(move |_| stale.set(true));
                    (state, subscription)
                }
            };
            self.watched.push(entry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::LanguageProvider;
    use crate::view::Consumer;
    use lingotype_runtime::LanguageCode;
    use pretty_assertions::assert_eq;

    fn app(code: LanguageCode) -> LanguageProvider {
        LanguageProvider::builder()
            .default_lang(code)
            .child(Consumer::new("label", |access, out| {
                out.text(access.lang.display_name());
            }))
            .build()
    }

    #[test]
    fn mount_renders_once() {
        let mut root = LiveRoot::mount(app(LanguageCode::Ja), BuildMode::Development).unwrap();
        assert_eq!(root.render_count(), 1);
        assert!(!root.is_stale());
        assert!(root.html().unwrap().contains("data-lang=\"ja\""));
        assert_eq!(root.render_count(), 1);
    }

    #[test]
    fn change_marks_stale_and_rerenders_lazily() {
        let mut root = LiveRoot::mount(app(LanguageCode::Ja), BuildMode::Development).unwrap();
        assert!(root.view().set_lang(LanguageCode::ZhTw));
        assert!(root.is_stale());
        assert_eq!(root.render_count(), 1);

        let html = root.html().unwrap().to_owned();
        assert!(html.contains("data-lang=\"zh-tw\""));
        assert!(html.contains("Traditional Chinese"));
        assert_eq!(root.render_count(), 2);
    }

    #[test]
    fn same_value_write_does_not_invalidate() {
        let root = LiveRoot::mount(app(LanguageCode::En), BuildMode::Development).unwrap();
        assert!(!root.view().set_lang(LanguageCode::En));
        assert!(!root.is_stale());
    }

    #[test]
    fn server_and_client_agree() {
        for code in LanguageCode::ALL {
            let server = render_to_string(&app(code), BuildMode::Development).unwrap();
            let mut client = LiveRoot::mount(app(code), BuildMode::Development).unwrap();
            assert_eq!(server, client.html().unwrap());
        }
    }

    #[test]
    fn failed_mount_reports_configuration_error() {
        let orphan = Consumer::new("Orphan", |_, out| out.text("x"));
        let err = LiveRoot::mount(orphan, BuildMode::Development).unwrap_err();
        assert!(err.to_string().contains("Orphan"));
    }

    #[test]
    fn replaced_view_releases_old_scopes() {
        let captured = Rc::new(());
        let inside = Rc::clone(&captured);
        let first = LanguageProvider::builder()
            .default_lang(LanguageCode::Ja)
            .on_change(move |_| drop(Rc::clone(&inside)))
            .build();
        let first_state = first.state().clone();

        let mut root: LiveRoot<Box<dyn View>> =
            LiveRoot::mount(Box::new(first) as Box<dyn View>, BuildMode::Development).unwrap();
        assert_eq!(root.watched_count(), 1);

        for code in LanguageCode::ALL {
            *root.view_mut() = Box::new(app(code));
            root.html().unwrap();
        }
        assert_eq!(root.watched_count(), 1);
        assert_eq!(root.render_count(), 4);
        assert_eq!(Rc::strong_count(&captured), 1);

        first_state.set_current(LanguageCode::En);
        assert!(!root.is_stale());
    }

    #[test]
    fn nested_scopes_are_each_watched_once() {
        let outer = LanguageProvider::builder()
            .default_lang(LanguageCode::Ja)
            .child(app(LanguageCode::En))
            .build();
        let mut root = LiveRoot::mount(outer, BuildMode::Development).unwrap();
        assert_eq!(root.watched_count(), 2);

        root.view().set_lang(LanguageCode::ZhTw);
        root.html().unwrap();
        assert_eq!(root.watched_count(), 2);
    }

    #[test]
    fn view_mut_forces_rerender() {
        let mut root = LiveRoot::mount(app(LanguageCode::En), BuildMode::Production).unwrap();
        root.view_mut()
            .push_child(Consumer::new("extra", |_, out| out.text("extra")));
        assert!(root.html().unwrap().contains("extra"));
        assert_eq!(root.render_count(), 2);
    }
}
