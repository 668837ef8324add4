#![forbid(unsafe_code)]

//! Views for Lingotype: the language provider, typography components, and
//! the markup renderer they share.
//!
//! # Role in Lingotype
//! This is the presentation layer. [`LanguageProvider`] owns a
//! [`LanguageState`](lingotype_runtime::LanguageState) and installs it for
//! its children during each pass; consumers resolve it through
//! [`RenderCx::language`]. Typography components only emit class names, and
//! the style crate's stylesheet keys their fonts off the provider's
//! `data-lang` attribute.
//!
//! # Example
//!
//! ```
//! use lingotype_widgets::{
//!     Consumer, Heading, HeadingLevel, LanguageProvider, LiveRoot, render_to_string,
//! };
//! use lingotype_runtime::{BuildMode, LanguageCode};
//!
//! let app = LanguageProvider::builder()
//!     .default_lang(LanguageCode::Ja)
//!     .child(Heading::new(HeadingLevel::H1, "Lingotype"))
//!     .child(Consumer::new("Greeting", |access, out| {
//!         out.text(access.lang.native_name());
//!     }))
//!     .build();
//!
//! let html = render_to_string(&app, BuildMode::Development).unwrap();
//! assert!(html.contains("data-lang=\"ja\""));
//! assert!(html.contains("日本語"));
//!
//! let mut live = LiveRoot::mount(app, BuildMode::Development).unwrap();
//! assert_eq!(live.html().unwrap(), html);
//! ```

pub mod markup;
pub mod provider;
pub mod root;
pub mod switcher;
pub mod typography;
pub mod view;

pub use markup::Markup;
pub use provider::{LanguageProvider, LanguageProviderBuilder};
pub use root::{LiveRoot, render_to_string};
pub use switcher::{LanguageSwitcher, OPTION_ATTRIBUTE, SWITCHER_CLASS};
pub use typography::{
    Heading, HeadingLevel, InvalidHeadingLevel, Paragraph, Text, TextElement,
};
pub use view::{Consumer, Fragment, RenderCx, RenderError, RenderTarget, View};
