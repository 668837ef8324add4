use lingotype_i18n::LanguageCode;
use thiserror::Error;

pub use lingotype_i18n::ValidationError;

/// The accessor ran without an enclosing language scope in development mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "{consumer} read the active language outside of a LanguageProvider; \
         wrap the component tree in `LanguageProvider` so consumers can resolve it"
    )]
    MissingScope { consumer: &'static str },
}

/// A consumer-supplied change callback failed.
///
/// Never returned to callers: the scope logs it and keeps the new language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    #[error("on_change callback for `{code}` returned an error: {message}")]
    Failed { code: LanguageCode, message: String },

    #[error("on_change callback for `{code}` panicked: {message}")]
    Panicked { code: LanguageCode, message: String },
}

impl CallbackError {
    #[must_use]
    pub fn code(&self) -> LanguageCode {
        match self {
            Self::Failed { code, .. } | Self::Panicked { code, .. } => *code,
        }
    }
}

/// Anything a language write from untyped input can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
