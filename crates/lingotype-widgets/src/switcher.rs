#![forbid(unsafe_code)]

//! A language picker bound to the enclosing scope.
//!
//! The switcher reads the accessor while rendering and keeps the setter it
//! was given, so host event handlers can later call [`LanguageSwitcher::select`]
//! with the `data-lang-option` value of the clicked button. Share it with the
//! host through an `Rc`:
//!
//! ```
//! use std::rc::Rc;
//! use lingotype_widgets::{LanguageProvider, LanguageSwitcher, render_to_string};
//! use lingotype_runtime::{BuildMode, LanguageCode};
//!
//! let switcher = Rc::new(LanguageSwitcher::new());
//! let app = LanguageProvider::builder().child(Rc::clone(&switcher)).build();
//!
//! render_to_string(&app, BuildMode::Development).unwrap();
//! switcher.select("ja").unwrap();
//! assert_eq!(app.lang(), LanguageCode::Ja);
//! ```

use std::cell::RefCell;

use lingotype_i18n::{LanguageCode, languages};
use lingotype_runtime::{ConfigurationError, LanguageError, LanguageSetter};

use crate::markup::Markup;
use crate::view::{RenderCx, RenderError, View};

const CONSUMER: &str = "LanguageSwitcher";

pub const SWITCHER_CLASS: &str = "lt-language-switcher";
pub const OPTION_ATTRIBUTE: &str = "data-lang-option";

/// Buttons for every registered language, labelled in their own script.
#[derive(Debug)]
pub struct LanguageSwitcher {
    label: String,
    setter: RefCell<Option<LanguageSetter>>,
}

impl Default for LanguageSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSwitcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: "Language".to_owned(),
            setter: RefCell::new(None),
        }
    }

    /// Accessible name of the `<nav>`.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether a render pass has bound this switcher to a scope.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.setter.borrow().is_some()
    }

    /// Switch to `code` through the setter captured on the last render.
    pub fn select_code(&self, code: LanguageCode) -> Result<(), LanguageError> {
        // Cloned out: the write may re-render this switcher.
        let setter = self
            .setter
            .borrow()
            .clone()
            .ok_or(ConfigurationError::MissingScope { consumer: CONSUMER })?;
        setter.set(code);
        Ok(())
    }

    /// Validate an option value from the host, then switch.
    pub fn select(&self, raw: &str) -> Result<LanguageCode, LanguageError> {
        let code = raw.parse::<LanguageCode>()?;
        self.select_code(code)?;
        Ok(code)
    }
}

impl View for LanguageSwitcher {
    fn render(&self, cx: &mut RenderCx, out: &mut Markup) -> Result<(), RenderError> {
        let access = cx.language_for(CONSUMER)?;

        out.open("nav", &[("class", SWITCHER_CLASS), ("aria-label", &self.label)]);
        for entry in languages() {
            let pressed = if entry.code == access.lang { "true" } else { "false" };
            out.element(
                "button",
                &[
                    ("type", "button"),
                    (OPTION_ATTRIBUTE, entry.code.as_str()),
                    ("lang", entry.code.bcp47_tag()),
                    ("aria-pressed", pressed),
                ],
                entry.native_name,
            );
        }
        out.close("nav");

        self.setter.replace(Some(access.set_lang));
        Ok(())
    }
}
