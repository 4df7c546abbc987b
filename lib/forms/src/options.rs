//! Declarative validation options for one field.

use serde::{Deserialize, Serialize};

/// Which checks a field opts into. Everything is off by default; bounds are
/// `None` when not set, so a genuine bound of `0` stays expressible.
///
/// `phone` and `pattern` are mutually exclusive by contract; when both are
/// supplied, `phone` wins and the generic pattern is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOptions {
    pub required: bool,
    pub phone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub email: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_words: Option<usize>,
    pub validate_password: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn phone(mut self) -> Self {
        self.phone = true;
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn min_words(mut self, n: usize) -> Self {
        self.min_words = Some(n);
        self
    }

    pub fn validate_password(mut self) -> Self {
        self.validate_password = true;
        self
    }

    pub fn confirm_password(mut self, other: &str) -> Self {
        self.confirm_password = Some(other.to_string());
        self
    }
}
