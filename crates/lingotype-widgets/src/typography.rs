#![forbid(unsafe_code)]

//! Typography components.
//!
//! These never read the language themselves. Font stack, leading and
//! tracking come from the `--lt-*` properties the stylesheet attaches to
//! the enclosing `[data-lang]` scope, so the same markup restyles itself
//! when the scope's language changes.
//!
//! ```
//! use lingotype_widgets::{Heading, HeadingLevel, Paragraph, Text, TextElement};
//!
//! let title = Heading::new(HeadingLevel::H1, "Welcome");
//! let body = Paragraph::new("Switch the language above.")
//!     .child(Text::new("Saved.").element(TextElement::Strong));
//! # let _ = (title, body);
//! ```

use std::fmt;

use lingotype_style::{HEADING_CLASS, PARAGRAPH_CLASS, TEXT_CLASS};

use crate::markup::Markup;
use crate::view::{RenderCx, RenderError, View, render_children};

/// `<h1>` through `<h6>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Level-specific modifier class, e.g. `lt-heading--h1`.
    #[must_use]
    pub const fn modifier_class(self) -> &'static str {
        match self {
            Self::H1 => "lt-heading--h1",
            Self::H2 => "lt-heading--h2",
            Self::H3 => "lt-heading--h3",
            Self::H4 => "lt-heading--h4",
            Self::H5 => "lt-heading--h5",
            Self::H6 => "lt-heading--h6",
        }
    }
}

/// Out-of-range heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be 1 through 6, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Ok(match level {
            1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            6 => Self::H6,
            other => return Err(InvalidHeadingLevel(other)),
        })
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A heading styled by the scope's heading variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: HeadingLevel,
    text: String,
}

impl Heading {
    #[must_use]
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn level(&self) -> HeadingLevel {
        self.level
    }
}

impl View for Heading {
    fn render(&self, _cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        let class = format!("{HEADING_CLASS} {}", self.level.modifier_class());
        out.element(self.level.tag(), &[("class", &class)], &self.text);
        Ok(())
    }
}

/// Inline element used by [`Text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextElement {
    #[default]
    Span,
    Strong,
    Em,
    Small,
    Code,
}

impl TextElement {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Span => "span",
            Self::Strong => "strong",
            Self::Em => "em",
            Self::Small => "small",
            Self::Code => "code",
        }
    }
}

/// Inline body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    element: TextElement,
    text: String,
}

impl Text {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            element: TextElement::default(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn element(mut self, element: TextElement) -> Self {
        self.element = element;
        self
    }
}

impl View for Text {
    fn render(&self, _cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        out.element(self.element.tag(), &[("class", TEXT_CLASS)], &self.text);
        Ok(())
    }
}

/// A paragraph: leading text followed by inline child views.
#[derive(Default)]
pub struct Paragraph {
    text: String,
    children: Vec<Box<dyn View>>,
}

impl fmt::Debug for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paragraph")
            .field("text", &self.text)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Paragraph {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn child(mut self, view: impl View + 'static) -> Self {
        self.children.push(Box::new(view));
        self
    }
}

impl View for Paragraph {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        out.open("p", &[("class", PARAGRAPH_CLASS)]);
        out.text(&self.text);
        render_children(&self.children, cx, out)?;
        out.close("p");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RenderTarget;
    use lingotype_runtime::{BuildMode, LanguageContext};
    use pretty_assertions::assert_eq;

    fn render(view: &dyn View) -> String {
        // Development mode: any accessor call outside a scope would fail.
        let mut cx = RenderCx::new(
            LanguageContext::new(),
            BuildMode::Development,
            RenderTarget::Server,
        );
        let mut out = Markup::new();
        view.render(&mut cx, &mut out).unwrap();
        out.into_string()
    }

    #[test]
    fn heading_classes() {
        assert_eq!(
            render(&Heading::new(HeadingLevel::H1, "Title")),
            "<h1 class=\"lt-heading lt-heading--h1\">Title</h1>"
        );
    }

    #[test]
    fn heading_level_bounds() {
        assert_eq!(HeadingLevel::try_from(3), Ok(HeadingLevel::H3));
        assert_eq!(HeadingLevel::try_from(0), Err(InvalidHeadingLevel(0)));
        assert_eq!(HeadingLevel::try_from(7), Err(InvalidHeadingLevel(7)));
    }

    #[test]
    fn text_elements() {
        assert_eq!(render(&Text::new("hi")), "<span class=\"lt-text\">hi</span>");
        assert_eq!(
            render(&Text::new("x < y").element(TextElement::Code)),
            "<code class=\"lt-text\">x &lt; y</code>"
        );
    }

    #[test]
    fn paragraph_with_inline_children() {
        let paragraph = Paragraph::new("Hello, ").child(Text::new("world").element(TextElement::Em));
        assert_eq!(
            render(&paragraph),
            "<p class=\"lt-paragraph\">Hello, <em class=\"lt-text\">world</em></p>"
        );
    }

    #[test]
    fn typography_renders_without_a_scope() {
        let html = render(&Heading::new(HeadingLevel::default(), "Unscoped"));
        assert!(html.starts_with("<h2"));
    }
}
