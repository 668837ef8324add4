#![forbid(unsafe_code)]

//! CSS generation for language-driven typography.
//!
//! The generated sheet has three parts:
//!
//! 1. One `[data-lang="<code>"]` rule per registry entry, in registry order,
//!    defining the `--lt-*` custom properties. The primary language's rule
//!    also targets `:root` so unscoped markup still has fonts.
//! 2. Class rules for the typography components, reading those properties.
//! 3. The visually-hidden utility used by the announcement region.
//!
//! Output is deterministic: same registry, same bytes.

use lingotype_i18n::{LanguageCode, languages};

use crate::typography::{
    TypographyVars, VAR_FONT_FAMILY_BODY, VAR_FONT_FAMILY_HEADING, VAR_LETTER_SPACING,
    VAR_LINE_HEIGHT_BODY, VAR_LINE_HEIGHT_HEADING,
};

/// Structural attribute carrying the canonical language code.
pub const LANG_ATTRIBUTE: &str = "data-lang";
/// Class on the element wrapping a language scope.
pub const SCOPE_CLASS: &str = "lt-language-scope";
/// Class hiding content visually while keeping it in the accessibility tree.
pub const VISUALLY_HIDDEN_CLASS: &str = "lt-visually-hidden";
/// Base class for headings.
pub const HEADING_CLASS: &str = "lt-heading";
/// Class for inline text.
pub const TEXT_CLASS: &str = "lt-text";
/// Class for paragraphs.
pub const PARAGRAPH_CLASS: &str = "lt-paragraph";

/// Selector matching a scope of `code`.
#[must_use]
pub fn language_selector(code: LanguageCode) -> String {
    format!("[{LANG_ATTRIBUTE}=\"{}\"]", code.as_str())
}

/// The variable rule for one language.
#[must_use]
pub fn language_rule(code: LanguageCode) -> String {
    let selector = if code.is_primary() {
        format!(":root,\n{}", language_selector(code))
    } else {
        language_selector(code)
    };
    let mut rule = format!("{selector} {{\n");
    for (name, value) in TypographyVars::for_language(code).declarations() {
        rule.push_str(&format!("  {name}: {value};\n"));
    }
    rule.push_str("}\n");
    rule
}

/// Component rules consuming the custom properties.
#[must_use]
pub fn component_rules() -> String {
    format!(
        ".{HEADING_CLASS} {{\n  font-family: var({VAR_FONT_FAMILY_HEADING});\n  line-height: var({VAR_LINE_HEIGHT_HEADING});\n  letter-spacing: var({VAR_LETTER_SPACING});\n}}\n\
         .{TEXT_CLASS},\n.{PARAGRAPH_CLASS} {{\n  font-family: var({VAR_FONT_FAMILY_BODY});\n  line-height: var({VAR_LINE_HEIGHT_BODY});\n  letter-spacing: var({VAR_LETTER_SPACING});\n}}\n"
    )
}

/// The visually-hidden utility rule.
#[must_use]
pub fn visually_hidden_rule() -> String {
    format!(
        ".{VISUALLY_HIDDEN_CLASS} {{\n  position: absolute;\n  width: 1px;\n  height: 1px;\n  padding: 0;\n  margin: -1px;\n  overflow: hidden;\n  clip: rect(0, 0, 0, 0);\n  white-space: nowrap;\n  border: 0;\n}}\n"
    )
}

/// The complete stylesheet.
#[must_use]
pub fn language_stylesheet() -> String {
    let mut sheet = String::new();
    for entry in languages() {
        sheet.push_str(&format!("/* {} */\n", entry.display_name));
        sheet.push_str(&language_rule(entry.code));
        sheet.push('\n');
    }
    sheet.push_str(&component_rules());
    sheet.push('\n');
    sheet.push_str(&visually_hidden_rule());
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_rule_per_language() {
        let sheet = language_stylesheet();
        for code in LanguageCode::ALL {
            let selector = language_selector(code);
            assert_eq!(sheet.matches(&selector).count(), 1, "{selector}");
        }
        assert_eq!(sheet.matches("[data-lang=").count(), LanguageCode::ALL.len());
    }

    #[test]
    fn rules_follow_registry_order() {
        let sheet = language_stylesheet();
        let positions: Vec<_> = LanguageCode::ALL
            .iter()
            .map(|code| sheet.find(&language_selector(*code)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_primary_targets_root() {
        assert!(language_rule(LanguageCode::En).starts_with(":root,"));
        assert!(!language_rule(LanguageCode::Ja).contains(":root"));
        assert_eq!(language_stylesheet().matches(":root").count(), 1);
    }

    #[test]
    fn japanese_rule_text() {
        assert_eq!(
            language_rule(LanguageCode::Ja),
            "[data-lang=\"ja\"] {\n  \
             --lt-font-family-heading: \"Noto Sans JP\", \"Hiragino Kaku Gothic ProN\", \"Yu Gothic\", Meiryo, sans-serif;\n  \
             --lt-font-family-body: \"Noto Sans JP\", \"Hiragino Sans\", \"Yu Gothic\", Meiryo, sans-serif;\n  \
             --lt-line-height-heading: 1.4;\n  \
             --lt-line-height-body: 1.8;\n  \
             --lt-letter-spacing: 0.04em;\n\
             }\n"
        );
    }

    #[test]
    fn components_read_variables() {
        let rules = component_rules();
        assert!(rules.contains(".lt-heading {"));
        assert!(rules.contains("font-family: var(--lt-font-family-body);"));
        assert!(rules.contains(".lt-paragraph {"));
    }

    #[test]
    fn stylesheet_is_deterministic() {
        assert_eq!(language_stylesheet(), language_stylesheet());
    }
}
