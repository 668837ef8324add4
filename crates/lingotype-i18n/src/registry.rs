#![forbid(unsafe_code)]

//! Static registry of supported languages.
//!
//! [`LANGUAGES`] is the single source of truth: its order is the canonical
//! display order (switchers list languages in this order), and every
//! [`LanguageCode`] has exactly one entry, at [`LanguageCode::index`].

use crate::error::ValidationError;
use crate::language::LanguageCode;

/// Human-readable metadata for one supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageDescriptor {
    /// The code this entry describes.
    pub code: LanguageCode,
    /// English name, announced to assistive technology on language changes.
    pub display_name: &'static str,
    /// Name in the language itself (e.g. `日本語`).
    pub native_name: &'static str,
}

/// Every supported language, in display order.
pub static LANGUAGES: [LanguageDescriptor; 3] = [
    LanguageDescriptor {
        code: LanguageCode::En,
        display_name: "English",
        native_name: "English",
    },
    LanguageDescriptor {
        code: LanguageCode::Ja,
        display_name: "Japanese",
        native_name: "\u{65e5}\u{672c}\u{8a9e}",
    },
    LanguageDescriptor {
        code: LanguageCode::ZhTw,
        display_name: "Traditional Chinese",
        native_name: "\u{7e41}\u{9ad4}\u{4e2d}\u{6587}",
    },
];

/// The registry as a slice.
#[must_use]
pub fn languages() -> &'static [LanguageDescriptor] {
    &LANGUAGES
}

/// Iterate the valid codes in display order.
pub fn codes() -> impl Iterator<Item = LanguageCode> {
    LANGUAGES.iter().map(|entry| entry.code)
}

/// Display name for a typed code. Total over [`LanguageCode`].
#[must_use]
pub fn display_name(code: LanguageCode) -> &'static str {
    code.display_name()
}

/// Look up a registry entry from untyped input (query strings, deserialized
/// payloads, form values).
pub fn lookup(raw: &str) -> Result<&'static LanguageDescriptor, ValidationError> {
    raw.parse::<LanguageCode>().map(LanguageCode::descriptor)
}

/// Display name for untyped input.
pub fn display_name_of(raw: &str) -> Result<&'static str, ValidationError> {
    lookup(raw).map(|entry| entry.display_name)
}

/// Whether `raw` names a supported language.
#[must_use]
pub fn is_supported(raw: &str) -> bool {
    lookup(raw).is_ok()
}
