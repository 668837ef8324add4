#![forbid(unsafe_code)]

//! Typography styling for Lingotype.
//!
//! # Role in Lingotype
//! Scopes render a `data-lang` attribute; this crate turns each possible
//! value of that attribute into a set of CSS custom properties (font stacks,
//! leading, tracking) and emits the rules that typography components read
//! them through. It depends only on the registry, never on runtime state:
//! switching fonts is purely a function of the attribute.
//!
//! # This crate provides
//! - [`TypographyVars`] for the per-language variable set.
//! - [`language_stylesheet`] for the full, deterministic CSS.
//! - Shared class and attribute names used by the widgets crate.

pub mod stylesheet;
pub mod typography;

pub use stylesheet::{
    HEADING_CLASS, LANG_ATTRIBUTE, PARAGRAPH_CLASS, SCOPE_CLASS, TEXT_CLASS,
    VISUALLY_HIDDEN_CLASS, component_rules, language_rule, language_selector, language_stylesheet,
    visually_hidden_rule,
};
pub use typography::{
    TypographyVars, VAR_FONT_FAMILY_BODY, VAR_FONT_FAMILY_HEADING, VAR_LETTER_SPACING,
    VAR_LINE_HEIGHT_BODY, VAR_LINE_HEIGHT_HEADING,
};
