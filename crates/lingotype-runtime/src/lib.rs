#![forbid(unsafe_code)]

//! Lingotype runtime: scoped language state.
//!
//! # Key Components
//!
//! - [`LanguageState`] - the current language of one scope plus its update path
//! - [`LanguageContext`] - the frame stack consumers resolve their scope from
//! - [`access`] - the accessor, with its development/production fallback policy
//! - [`BuildMode`] and [`I18nConfig`] - explicit policy inputs
//!
//! # Role in Lingotype
//! `lingotype-runtime` owns all mutable state. The widgets crate creates one
//! [`LanguageState`] per provider, installs it into the render pass's
//! [`LanguageContext`], and hands consumers the accessor. Nothing here knows
//! about markup.
//!
//! Everything is single-threaded (`Rc`-based); state types are `!Send`.

pub mod accessor;
pub mod config;
pub mod context;
pub mod error;
pub mod mode;
pub mod reactive;
pub mod state;

pub use accessor::{LanguageAccess, LanguageSetter, access, access_as};
pub use config::{ConfigError, DEFAULT_LANG_ENV, I18nConfig, MODE_ENV};
pub use context::{ContextSlot, Frame, LanguageContext, ScopeHandle};
pub use error::{CallbackError, ConfigurationError, LanguageError, ValidationError};
pub use lingotype_i18n::LanguageCode;
pub use mode::BuildMode;
pub use reactive::{Observable, Subscription};
pub use state::{LanguageState, ScopeId};
