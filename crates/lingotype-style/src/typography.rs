#![forbid(unsafe_code)]

//! Per-language typography variables.
//!
//! CJK text needs its own font stacks and looser leading; Latin text keeps
//! tighter defaults. Each language resolves to a full [`TypographyVars`] set,
//! and the match in [`TypographyVars::for_language`] has no fallback arm, so
//! adding a language to the registry fails to compile until it has fonts.

use lingotype_i18n::LanguageCode;

/// Custom property for the heading font stack.
pub const VAR_FONT_FAMILY_HEADING: &str = "--lt-font-family-heading";
/// Custom property for the body font stack.
pub const VAR_FONT_FAMILY_BODY: &str = "--lt-font-family-body";
/// Custom property for heading line height.
pub const VAR_LINE_HEIGHT_HEADING: &str = "--lt-line-height-heading";
/// Custom property for body line height.
pub const VAR_LINE_HEIGHT_BODY: &str = "--lt-line-height-body";
/// Custom property for letter spacing.
pub const VAR_LETTER_SPACING: &str = "--lt-letter-spacing";

/// The variable set one language scope exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypographyVars {
    pub font_family_heading: &'static str,
    pub font_family_body: &'static str,
    pub line_height_heading: &'static str,
    pub line_height_body: &'static str,
    pub letter_spacing: &'static str,
}

impl TypographyVars {
    #[must_use]
    pub const fn for_language(code: LanguageCode) -> Self {
        match code {
            LanguageCode::En => Self {
                font_family_heading: "\"Inter\", \"Helvetica Neue\", Arial, sans-serif",
                font_family_body: "\"Inter\", \"Helvetica Neue\", Arial, sans-serif",
                line_height_heading: "1.25",
                line_height_body: "1.5",
                letter_spacing: "0",
            },
            LanguageCode::Ja => Self {
                font_family_heading: "\"Noto Sans JP\", \"Hiragino Kaku Gothic ProN\", \"Yu Gothic\", Meiryo, sans-serif",
                font_family_body: "\"Noto Sans JP\", \"Hiragino Sans\", \"Yu Gothic\", Meiryo, sans-serif",
                line_height_heading: "1.4",
                line_height_body: "1.8",
                letter_spacing: "0.04em",
            },
            LanguageCode::ZhTw => Self {
                font_family_heading: "\"Noto Sans TC\", \"PingFang TC\", \"Microsoft JhengHei\", sans-serif",
                font_family_body: "\"Noto Sans TC\", \"PingFang TC\", \"Microsoft JhengHei\", sans-serif",
                line_height_heading: "1.4",
                line_height_body: "1.75",
                letter_spacing: "0.05em",
            },
        }
    }

    /// `(custom property, value)` pairs in a fixed order.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, &'static str); 5] {
        [
            (VAR_FONT_FAMILY_HEADING, self.font_family_heading),
            (VAR_FONT_FAMILY_BODY, self.font_family_body),
            (VAR_LINE_HEIGHT_HEADING, self.line_height_heading),
            (VAR_LINE_HEIGHT_BODY, self.line_height_body),
            (VAR_LETTER_SPACING, self.letter_spacing),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_languages_get_cjk_fonts() {
        assert!(TypographyVars::for_language(LanguageCode::Ja)
            .font_family_body
            .contains("Noto Sans JP"));
        assert!(TypographyVars::for_language(LanguageCode::ZhTw)
            .font_family_body
            .contains("Noto Sans TC"));
        assert!(!TypographyVars::for_language(LanguageCode::En)
            .font_family_body
            .contains("Noto"));
    }

    #[test]
    fn cjk_body_leading_is_looser_than_latin() {
        let latin: f32 = TypographyVars::for_language(LanguageCode::En)
            .line_height_body
            .parse()
            .unwrap();
        for code in [LanguageCode::Ja, LanguageCode::ZhTw] {
            let cjk: f32 = TypographyVars::for_language(code)
                .line_height_body
                .parse()
                .unwrap();
            assert!(cjk > latin, "{code} leading {cjk} <= {latin}");
        }
    }

    #[test]
    fn declarations_cover_every_variable() {
        let vars = TypographyVars::for_language(LanguageCode::Ja);
        let names: Vec<_> = vars.declarations().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                VAR_FONT_FAMILY_HEADING,
                VAR_FONT_FAMILY_BODY,
                VAR_LINE_HEIGHT_HEADING,
                VAR_LINE_HEIGHT_BODY,
                VAR_LETTER_SPACING,
            ]
        );
        assert!(vars.declarations().iter().all(|(_, value)| !value.is_empty()));
    }
}
