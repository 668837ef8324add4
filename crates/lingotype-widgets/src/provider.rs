#![forbid(unsafe_code)]

//! The language provider: one scope of language state plus its markup.
//!
//! A [`LanguageProvider`] is mounted by [`LanguageProviderBuilder::build`],
//! which creates its [`LanguageState`]; the state lives exactly as long as the
//! provider. Rendering installs the state for the children and wraps them in
//!
//! ```html
//! <div class="lt-language-scope" data-lang="ja" lang="ja">
//!   ...children...
//!   <div class="lt-visually-hidden" role="status" aria-live="polite" aria-atomic="true">Japanese</div>
//! </div>
//! ```
//!
//! Both attributes and the announcement text are computed from the state
//! inside `render`, so the very first pass already carries them and server
//! and client passes agree byte for byte.

use std::fmt;
use std::rc::Rc;

use lingotype_i18n::LanguageCode;
use lingotype_runtime::{I18nConfig, LanguageState, ValidationError};
use lingotype_style::{LANG_ATTRIBUTE, SCOPE_CLASS, VISUALLY_HIDDEN_CLASS};
use tracing::debug;

use crate::markup::Markup;
use crate::view::{RenderCx, RenderError, View, render_children};

type ChangeHook = Rc<dyn Fn(LanguageCode) -> Result<(), String>>;

/// Props for a [`LanguageProvider`].
#[derive(Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct LanguageProviderBuilder {
    default_lang: Option<LanguageCode>,
    on_change: Option<ChangeHook>,
    children: Vec<Box<dyn View>>,
}

impl LanguageProviderBuilder {
    /// Initial language. Defaults to [`LanguageCode::PRIMARY`].
    pub fn default_lang(mut self, code: LanguageCode) -> Self {
        self.default_lang = Some(code);
        self
    }

    /// Take the initial language from application config.
    pub fn config(self, config: &I18nConfig) -> Self {
        self.default_lang(config.default_lang)
    }

    /// Called after every actual language change. Fire and forget.
    pub fn on_change(self, callback: impl Fn(LanguageCode) + 'static) -> Self {
        self.on_change_fallible(move |code| {
            callback(code);
            Ok::<(), std::convert::Infallible>(())
        })
    }

    /// Like [`on_change`](Self::on_change); errors are logged, never returned.
    pub fn on_change_fallible<E: fmt::Display>(
        mut self,
        callback: impl Fn(LanguageCode) -> Result<(), E> + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(move |code| {
            callback(code).map_err(|err| err.to_string())
        }));
        self
    }

    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.children.push(Box::new(view));
        self
    }

    pub fn children(mut self, views: impl IntoIterator<Item = Box<dyn View>>) -> Self {
        self.children.extend(views);
        self
    }

    /// Mount the provider, creating its state.
    #[must_use]
    pub fn build(self) -> LanguageProvider {
        let state = LanguageState::new(self.default_lang.unwrap_or(LanguageCode::PRIMARY));
        if let Some(hook) = self.on_change {
            state.set_on_change_fallible(move |code| hook(code));
        }
        debug!(
            scope = state.id().get(),
            lang = %state.current(),
            children = self.children.len(),
            "language provider mounted"
        );
        LanguageProvider {
            state,
            children: self.children,
        }
    }
}

/// A mounted language scope.
pub struct LanguageProvider {
    state: LanguageState,
    children: Vec<Box<dyn View>>,
}

impl fmt::Debug for LanguageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProvider")
            .field("state", &self.state)
            .field("children", &self.children.len())
            .finish()
    }
}

impl LanguageProvider {
    pub fn builder() -> LanguageProviderBuilder {
        LanguageProviderBuilder::default()
    }

    #[must_use]
    pub fn lang(&self) -> LanguageCode {
        self.state.current()
    }

    /// Handle to this scope's state, e.g. for wiring host events.
    #[must_use]
    pub fn state(&self) -> &LanguageState {
        &self.state
    }

    /// Switch language. Same-value calls are no-ops and skip `on_change`.
    pub fn set_lang(&self, code: LanguageCode) -> bool {
        self.state.set_current(code)
    }

    /// Validate untyped input and switch. On error nothing changes.
    pub fn set_lang_str(&self, raw: &str) -> Result<LanguageCode, ValidationError> {
        self.state.set_current_str(raw)
    }

    pub fn push_child(&mut self, view: impl View + 'static) {
        self.children.push(Box::new(view));
    }
}

impl View for LanguageProvider {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        let scope = cx.enter_scope(&self.state);
        let code = scope.lang();

        out.open(
            "div",
            &[
                ("class", SCOPE_CLASS),
                (LANG_ATTRIBUTE, code.as_str()),
                ("lang", code.bcp47_tag()),
            ],
        );
        render_children(&self.children, cx, out)?;
        out.element(
            "div",
            &[
                ("class", VISUALLY_HIDDEN_CLASS),
                ("role", "status"),
                ("aria-live", "polite"),
                ("aria-atomic", "true"),
            ],
            code.display_name(),
        );
        out.close("div");
        drop(scope);
        Ok(())
    }
}

impl Drop for LanguageProvider {
    fn drop(&mut self) {
        self.state.unmount();
        debug!(scope = self.state.id().get(), "language provider unmounted");
    }
}
