#![forbid(unsafe_code)]

//! The render-pass vocabulary: [`View`], [`RenderCx`], [`Consumer`].

use std::fmt;
use std::rc::Rc;

use lingotype_runtime::{
    BuildMode, ConfigurationError, LanguageAccess, LanguageContext, LanguageState, ScopeHandle,
    access_as,
};
use thiserror::Error;

use crate::markup::Markup;

/// Failure of a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Which execution path produced a pass.
///
/// Recorded for diagnostics only; it never changes the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// Ahead-of-time rendering (server, static export).
    Server,
    /// Live rendering in the client.
    Client,
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Server => "server",
            Self::Client => "client",
        })
    }
}

/// Something that writes markup.
pub trait View {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError>;
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        (**self).render(cx, out)
    }
}

impl<V: View + ?Sized> View for Rc<V> {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        (**self).render(cx, out)
    }
}

/// Per-pass render state handed down the tree.
#[derive(Debug)]
pub struct RenderCx {
    context: LanguageContext,
    mode: BuildMode,
    target: RenderTarget,
    observed: Vec<(LanguageState, u64)>,
}

impl RenderCx {
    #[must_use]
    pub fn new(context: LanguageContext, mode: BuildMode, target: RenderTarget) -> Self {
        Self {
            context,
            mode,
            target,
            observed: Vec::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    #[must_use]
    pub fn target(&self) -> RenderTarget {
        self.target
    }

    #[must_use]
    pub fn context(&self) -> &LanguageContext {
        &self.context
    }

    /// The accessor, for consumers rendering in this pass.
    pub fn language(&self) -> Result<LanguageAccess, ConfigurationError> {
        self.language_for("language consumer")
    }

    /// [`language`](Self::language), naming the consumer in errors.
    pub fn language_for(&self, consumer: &'static str) -> Result<LanguageAccess, ConfigurationError> {
        access_as(&self.context, self.mode, consumer)
    }

    /// Install `state` for the views rendered until the handle drops, and
    /// remember it so live roots can watch it.
    #[must_use = "dropping this handle immediately uninstalls the scope"]
    pub fn enter_scope(&mut self, state: &LanguageState) -> ScopeHandle {
        if !self.observed.iter().any(|(seen, _)| seen.ptr_eq(state)) {
            self.observed.push((state.clone(), state.version()));
        }
        self.context.provide(state)
    }

    /// Scope states installed during this pass, in first-seen order.
    pub fn observed(&self) -> impl Iterator<Item = &LanguageState> {
        self.observed.iter().map(|(state, _)| state)
    }

    /// Whether any installed state was written after it was first entered,
    /// i.e. the markup of this pass is already out of date.
    #[must_use]
    pub fn changed_during_pass(&self) -> bool {
        self.observed
            .iter()
            .any(|(state, entered_at)| state.version() != *entered_at)
    }

    #[must_use]
    pub fn into_observed(self) -> Vec<LanguageState> {
        self.observed.into_iter().map(|(state, _)| state).collect()
    }
}

/// A view built from a closure that reads the active language.
pub struct Consumer<F> {
    name: &'static str,
    render: F,
}

impl<F> Consumer<F>
where
    F: Fn(&LanguageAccess, &mut Markup),
{
    /// `name` identifies the consumer in configuration errors.
    pub fn new(name: &'static str, render: F) -> Self {
        Self { name, render }
    }
}

impl<F> fmt::Debug for Consumer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<F> View for Consumer<F>
where
    F: Fn(&LanguageAccess, &mut Markup),
{
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        let access = cx.language_for(self.name)?;
        (self.render)(&access, out);
        Ok(())
    }
}

/// Sibling views rendered in order, with no wrapper element.
#[derive(Default)]
pub struct Fragment {
    children: Vec<Box<dyn View>>,
}

impl Fragment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.children.push(Box::new(view));
        self
    }
}

impl View for Fragment {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        render_children(&self.children, cx, out)
    }
}

pub(crate) fn render_children(
    children: &[Box<dyn View>],
    cx: &mut RenderCx,
    out: &mut Markup,
) -> Result<(), RenderError> {
    for child in children {
        child.render(cx, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingotype_runtime::LanguageCode;

    fn cx(mode: BuildMode) -> RenderCx {
        RenderCx::new(LanguageContext::new(), mode, RenderTarget::Server)
    }

    #[test]
    fn consumer_without_scope_fails_in_development() {
        let consumer = Consumer::new("Greeting", |access, out| out.text(access.lang.as_str()));
        let mut out = Markup::new();
        let err = consumer
            .render(&mut cx(BuildMode::Development), &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("Greeting"));
        assert!(out.is_empty());
    }

    #[test]
    fn consumer_without_scope_uses_primary_in_production() {
        let consumer = Consumer::new("Greeting", |access, out| out.text(access.lang.as_str()));
        let mut out = Markup::new();
        consumer
            .render(&mut cx(BuildMode::Production), &mut out)
            .unwrap();
        assert_eq!(out.as_str(), "en");
    }

    #[test]
    fn enter_scope_records_each_state_once() {
        let mut cx = cx(BuildMode::Development);
        let state = LanguageState::new(LanguageCode::Ja);
        drop(cx.enter_scope(&state));
        drop(cx.enter_scope(&state));
        assert_eq!(cx.observed().count(), 1);
        assert_eq!(cx.context().depth(), 0);
        assert!(!cx.changed_during_pass());

        state.set_current(LanguageCode::En);
        assert!(cx.changed_during_pass());
    }

    #[test]
    fn fragment_renders_children_in_order() {
        let fragment = Fragment::new()
            .child(Consumer::new("a", |_, out| out.text("a")))
            .child(Consumer::new("b", |_, out| out.text("b")));
        let mut out = Markup::new();
        fragment
            .render(&mut cx(BuildMode::Production), &mut out)
            .unwrap();
        assert_eq!(out.as_str(), "ab");
    }

    #[test]
    fn target_display() {
        assert_eq!(RenderTarget::Server.to_string(), "server");
        assert_eq!(RenderTarget::Client.to_string(), "client");
    }
}
