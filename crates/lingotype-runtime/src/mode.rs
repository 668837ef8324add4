#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Selects the accessor's policy when no scope is present.
///
/// Always passed explicitly; the accessor never inspects the build itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BuildMode {
    /// Missing scopes are hard errors.
    #[cfg_attr(feature = "config", serde(alias = "dev"))]
    Development,
    /// Missing scopes degrade to the primary language with a no-op setter.
    #[cfg_attr(feature = "config", serde(alias = "prod"))]
    Production,
}

impl BuildMode {
    /// `Development` in debug builds, `Production` otherwise.
    #[must_use]
    pub const fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::from_debug_assertions()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidMode {
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_names() {
        let parse = |raw: &str| raw.parse::<BuildMode>().ok();
        assert_eq!(parse("development"), Some(BuildMode::Development));
        assert_eq!(parse("DEV"), Some(BuildMode::Development));
        assert_eq!(parse(" production "), Some(BuildMode::Production));
        assert_eq!(parse("prod"), Some(BuildMode::Production));
    }

    #[test]
    fn rejects_unknown_modes() {
        let err = "staging".parse::<BuildMode>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn default_follows_debug_assertions() {
        assert_eq!(BuildMode::default().is_development(), cfg!(debug_assertions));
    }
}
