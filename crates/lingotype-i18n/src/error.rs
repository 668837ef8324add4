use thiserror::Error;

/// An unrecognized language code reached a validating boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code `{value}`; expected one of: en, ja, zh-tw")]
pub struct ValidationError {
    value: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input, verbatim.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
