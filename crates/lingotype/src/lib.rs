#![forbid(unsafe_code)]

//! Lingotype public facade crate.
//!
//! Re-exports the registry, runtime, styling and widget crates behind one
//! dependency, with a prelude for application code.
//!
//! ```
//! use lingotype::prelude::*;
//!
//! let app = LanguageProvider::builder()
//!     .default_lang(LanguageCode::ZhTw)
//!     .child(Heading::new(HeadingLevel::H1, "標題"))
//!     .build();
//!
//! let html = render_to_string(&app, BuildMode::Production)?;
//! assert!(html.contains("lang=\"zh-TW\""));
//! assert!(lingotype::stylesheet().contains("[data-lang=\"zh-tw\"]"));
//! # Ok::<(), lingotype::Error>(())
//! ```

use thiserror::Error as ThisError;

// --- Registry re-exports --------------------------------------------------

pub use lingotype_i18n::{
    LANGUAGES, LanguageCode, LanguageDescriptor, ValidationError, display_name, is_supported,
    languages, lookup,
};

// --- Runtime re-exports ---------------------------------------------------

pub use lingotype_runtime::{
    BuildMode, CallbackError, ConfigError, ConfigurationError, I18nConfig, LanguageAccess,
    LanguageContext, LanguageError, LanguageSetter, LanguageState, access,
};

// --- Widget re-exports ----------------------------------------------------

pub use lingotype_widgets::{
    Consumer, Fragment, Heading, HeadingLevel, LanguageProvider, LanguageSwitcher, LiveRoot,
    Markup, Paragraph, RenderCx, RenderError, Text, TextElement, View, render_to_string,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Lingotype apps.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<LanguageError> for Error {
    fn from(err: LanguageError) -> Self {
        match err {
            LanguageError::Validation(err) => Self::Validation(err),
            LanguageError::Configuration(err) => Self::Configuration(err),
        }
    }
}

/// Standard result type for Lingotype APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// The stylesheet keyed on the `data-lang` attribute scopes render.
#[must_use]
pub fn stylesheet() -> String {
    lingotype_style::language_stylesheet()
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BuildMode, Consumer, Error, Heading, HeadingLevel, I18nConfig, LanguageCode,
        LanguageProvider, LanguageSwitcher, LiveRoot, Paragraph, Result, Text, TextElement, View,
        render_to_string,
    };

    pub use crate::{i18n, runtime, style, widgets};
}

pub use lingotype_i18n as i18n;
pub use lingotype_runtime as runtime;
pub use lingotype_style as style;
pub use lingotype_widgets as widgets;
