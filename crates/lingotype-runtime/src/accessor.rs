#![forbid(unsafe_code)]

//! The accessor: the sanctioned way consumers read and write the language.
//!
//! # Failure Modes
//!
//! | Scenario                          | Development              | Production                          |
//! |-----------------------------------|--------------------------|-------------------------------------|
//! | Enclosing scope present           | `{lang, Scoped setter}`  | `{lang, Scoped setter}`             |
//! | No enclosing scope                | `ConfigurationError`     | `{PRIMARY, Detached setter}`        |
//! | Setter given an unknown code      | `ValidationError`        | `ValidationError`                   |
//! | Detached setter given a valid code| n/a                      | warning logged, nothing changes     |
//! | Scoped setter after scope unmount | warning logged, nothing changes | warning logged, nothing changes |

use lingotype_i18n::LanguageCode;
use tracing::{debug, warn};

use crate::context::{ContextSlot, LanguageContext};
use crate::error::{ConfigurationError, ValidationError};
use crate::mode::BuildMode;
use crate::state::LanguageState;

const DEFAULT_CONSUMER: &str = "language accessor";

/// What a consumer gets back from [`access`].
#[derive(Debug, Clone)]
pub struct LanguageAccess {
    pub lang: LanguageCode,
    pub set_lang: LanguageSetter,
}

impl LanguageAccess {
    /// Whether this access fell back because no scope was present.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.set_lang.is_detached()
    }
}

/// Write path handed to consumers.
#[derive(Debug, Clone)]
pub enum LanguageSetter {
    /// Writes go to the enclosing scope's state while it is mounted.
    Scoped(LanguageState),
    /// Production fallback: writes are logged and dropped.
    Detached,
}

impl LanguageSetter {
    pub fn set(&self, code: LanguageCode) {
        match self {
            Self::Scoped(state) => {
                state.set_current(code);
            }
            Self::Detached => warn!(
                lang = %code,
                "set_lang called without a LanguageProvider; ignoring language change"
            ),
        }
    }

    /// Validate untyped input, then [`set`](Self::set).
    pub fn set_str(&self, raw: &str) -> Result<LanguageCode, ValidationError> {
        let code = raw.parse::<LanguageCode>()?;
        self.set(code);
        Ok(code)
    }

    /// Whether writes are dropped: no scope, or the scope has unmounted.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        match self {
            Self::Scoped(state) => !state.is_mounted(),
            Self::Detached => true,
        }
    }
}

/// Resolve the active language for a consumer.
pub fn access(cx: &LanguageContext, mode: BuildMode) -> Result<LanguageAccess, ConfigurationError> {
    access_as(cx, mode, DEFAULT_CONSUMER)
}

/// [`access`], naming the consumer in any [`ConfigurationError`].
pub fn access_as(
    cx: &LanguageContext,
    mode: BuildMode,
    consumer: &'static str,
) -> Result<LanguageAccess, ConfigurationError> {
    match cx.read() {
        ContextSlot::Provided(frame) => Ok(LanguageAccess {
            lang: frame.lang(),
            set_lang: LanguageSetter::Scoped(frame.state().clone()),
        }),
        ContextSlot::Empty => match mode {
            BuildMode::Development => Err(ConfigurationError::MissingScope { consumer }),
            BuildMode::Production => {
                debug!(consumer, "no LanguageProvider in scope; using primary language");
                Ok(LanguageAccess {
                    lang: LanguageCode::PRIMARY,
                    set_lang: LanguageSetter::Detached,
                })
            }
        },
    }
}
