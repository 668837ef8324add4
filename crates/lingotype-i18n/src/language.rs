#![forbid(unsafe_code)]

//! The closed set of supported language codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::registry::{LANGUAGES, LanguageDescriptor};

/// A supported language.
///
/// The set is closed: there is no way to construct a `LanguageCode` for a
/// language the registry does not list. Untyped input goes through
/// [`FromStr`] / [`TryFrom`], which reject anything else with a
/// [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum LanguageCode {
    /// English (`en`), the primary language.
    #[default]
    En,
    /// Japanese (`ja`).
    Ja,
    /// Traditional Chinese (`zh-tw`).
    ZhTw,
}

impl LanguageCode {
    /// Every code, in registry display order.
    pub const ALL: [Self; 3] = [Self::En, Self::Ja, Self::ZhTw];

    /// The language scopes fall back to when no other value is supplied.
    pub const PRIMARY: Self = Self::En;

    /// Canonical wire form, used for the `data-lang` styling hook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::ZhTw => "zh-tw",
        }
    }

    /// BCP 47 tag suitable for an HTML `lang` attribute.
    #[must_use]
    pub const fn bcp47_tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::ZhTw => "zh-TW",
        }
    }

    /// Position of this code in [`LANGUAGES`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Ja => 1,
            Self::ZhTw => 2,
        }
    }

    /// Registry entry for this code.
    #[must_use]
    pub fn descriptor(self) -> &'static LanguageDescriptor {
        &LANGUAGES[self.index()]
    }

    /// English display name, used for screen reader announcements.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        self.descriptor().native_name
    }

    /// Whether this is [`LanguageCode::PRIMARY`].
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::En)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_code(raw);
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| ValidationError::new(raw))
    }
}

impl TryFrom<&str> for LanguageCode {
    type Error = ValidationError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<LanguageCode> for &'static str {
    fn from(code: LanguageCode) -> Self {
        code.as_str()
    }
}

/// Trim, unify `_` to `-`, and lowercase. Does not decide validity.
fn normalize_code(raw: &str) -> String {
    raw.trim().replace('_', "-").to_ascii_lowercase()
}
