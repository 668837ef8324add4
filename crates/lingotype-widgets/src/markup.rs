#![forbid(unsafe_code)]

//! Minimal HTML writer.
//!
//! Tag and attribute names are `&'static str` and written verbatim; text and
//! attribute values are always escaped. The writer keeps no state beyond the
//! output buffer, so two writers fed the same calls produce the same bytes.

use std::fmt::{self, Write as _};

use v_htmlescape::escape;

/// Accumulated markup for one render pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Markup {
    buf: String,
}

impl Markup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `<tag a="v" ...>`.
    pub fn open(&mut self, tag: &'static str, attrs: &[(&'static str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            let _ = write!(self.buf, " {name}=\"{}\"", escape(value));
        }
        self.buf.push('>');
    }

    /// Write `</tag>`.
    pub fn close(&mut self, tag: &'static str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// Write escaped text content.
    pub fn text(&mut self, text: &str) {
        let _ = write!(self.buf, "{}", escape(text));
    }

    /// `open`, `text`, `close` in one call.
    pub fn element(&mut self, tag: &'static str, attrs: &[(&'static str, &str)], text: &str) {
        self.open(tag, attrs);
        self.text(text);
        self.close(tag);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn element_with_attributes() {
        let mut out = Markup::new();
        out.element("span", &[("class", "lt-text"), ("lang", "ja")], "日本語");
        assert_eq!(out.as_str(), "<span class=\"lt-text\" lang=\"ja\">日本語</span>");
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut out = Markup::new();
        out.element("p", &[("title", "\"quoted\" & <b>")], "<script>");
        let html = out.into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; &lt;b&gt;"));
    }

    #[test]
    fn empty_until_written() {
        let mut out = Markup::new();
        assert!(out.is_empty());
        out.open("div", &[]);
        out.close("div");
        assert_eq!(out.to_string(), "<div></div>");
    }
}
