#![forbid(unsafe_code)]

//! Language registry for Lingotype.
//!
//! Defines the closed set of supported languages ([`LanguageCode`]), their
//! display metadata ([`LanguageDescriptor`], [`LANGUAGES`]), and the
//! validation applied to untyped input ([`ValidationError`]).
//!
//! # Role in Lingotype
//! Every other crate speaks in [`LanguageCode`]. The runtime stores it, the
//! widgets render it into the `data-lang` attribute, and the style crate
//! matches on it exhaustively. Keeping the registry in its own crate means
//! the stylesheet can enumerate languages without depending on the runtime.

pub mod error;
pub mod language;
pub mod registry;

pub use error::ValidationError;
pub use language::LanguageCode;
pub use registry::{
    LANGUAGES, LanguageDescriptor, codes, display_name, display_name_of, is_supported, languages,
    lookup,
};
