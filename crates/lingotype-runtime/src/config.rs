#![forbid(unsafe_code)]

//! Startup configuration for language scopes.
//!
//! ```toml
//! # lingotype.toml
//! mode = "production"
//! default_lang = "ja"
//! ```
//!
//! ```rust,ignore
//! let config = I18nConfig::from_toml_file("lingotype.toml")?;
//! let config = I18nConfig::from_env()?;
//! ```
//!
//! Every field has a default, so an empty file or environment produces
//! [`I18nConfig::default`].

#[cfg(feature = "config")]
use std::path::Path;
use std::path::PathBuf;

use lingotype_i18n::LanguageCode;
use thiserror::Error;

use crate::error::ValidationError;
use crate::mode::BuildMode;

/// Environment variable selecting [`BuildMode`].
pub const MODE_ENV: &str = "LINGOTYPE_MODE";
/// Environment variable selecting the initial language of new scopes.
pub const DEFAULT_LANG_ENV: &str = "LINGOTYPE_DEFAULT_LANG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid build mode `{value}`; expected `development` or `production`")]
    InvalidMode { value: String },

    #[error("invalid default language: {0}")]
    InvalidLanguage(#[from] ValidationError),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    Parse { message: String },
}

/// Mode and default language shared by every scope in an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct I18nConfig {
    pub mode: BuildMode,
    pub default_lang: LanguageCode,
}

impl I18nConfig {
    #[must_use]
    pub fn new(mode: BuildMode, default_lang: LanguageCode) -> Self {
        Self { mode, default_lang }
    }

    /// Read [`MODE_ENV`] and [`DEFAULT_LANG_ENV`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    /// Unset and empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(mode) = read(MODE_ENV) {
            config.mode = mode.parse()?;
        }
        if let Some(lang) = read(DEFAULT_LANG_ENV) {
            config.default_lang = lang.parse()?;
        }
        Ok(config)
    }

    #[cfg(feature = "config")]
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })
    }

    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
