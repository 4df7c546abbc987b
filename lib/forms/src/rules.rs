//! Validation rule composition and evaluation.
//!
//! [`RuleSet::compose`] turns a [`FieldOptions`] into the active rule list in
//! a fixed order; [`RuleSet::first_violation`] reports the first failing rule
//! for a value. The order decides which error surfaces when several rules
//! fail at once:
//!
//! required → phone (or pattern) → email → minWords → min → max → maxLength
//! → minLength → password strength → confirmation match.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::options::FieldOptions;

/// Vietnamese mobile numbers: leading `0` or `+84`, a valid carrier digit,
/// then eight more digits.
pub const PHONE_PATTERN: &str = r"^(0|\+84)[35789]\d{8}$";
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
pub const PASS_MIN_LEN: usize = 8;
pub const PASS_MAX_LEN: usize = 18;

/// Identity of one rule, also the key callers override messages by.
/// Serializes to the camelCase names the portal shows in its bridge JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKey {
    Required,
    Phone,
    Pattern,
    Email,
    MinWords,
    Min,
    Max,
    MaxLength,
    MinLength,
    PassTooShort,
    PassTooLong,
    MissingLowercase,
    MissingUppercase,
    MissingNumber,
    MissingSpecialChar,
    PassNotMatch,
}

impl RuleKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKey::Required => "required",
            RuleKey::Phone => "phone",
            RuleKey::Pattern => "pattern",
            RuleKey::Email => "email",
            RuleKey::MinWords => "minWords",
            RuleKey::Min => "min",
            RuleKey::Max => "max",
            RuleKey::MaxLength => "maxLength",
            RuleKey::MinLength => "minLength",
            RuleKey::PassTooShort => "passTooShort",
            RuleKey::PassTooLong => "passTooLong",
            RuleKey::MissingLowercase => "missingLowercase",
            RuleKey::MissingUppercase => "missingUppercase",
            RuleKey::MissingNumber => "missingNumber",
            RuleKey::MissingSpecialChar => "missingSpecialChar",
            RuleKey::PassNotMatch => "passNotMatch",
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed rule: its key plus the configured bound for message
/// interpolation (`min`, `max`, length, and word-count rules only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub key: RuleKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<String>,
}

impl Violation {
    fn of(key: RuleKey) -> Self {
        Self { key, bound: None }
    }

    fn bounded(key: RuleKey, bound: impl fmt::Display) -> Self {
        Self {
            key,
            bound: Some(bound.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("invalid validation pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
enum Rule {
    Required,
    Phone(Regex),
    Pattern(Regex),
    Email(Regex),
    MinWords(usize),
    Min(f64),
    Max(f64),
    MaxLength(usize),
    MinLength(usize),
    PasswordStrength,
    ConfirmMatch(String),
}

impl Rule {
    fn check(&self, value: &str) -> Option<Violation> {
        match self {
            Rule::Required => value.is_empty().then(|| Violation::of(RuleKey::Required)),
            // Shape rules pass on the empty value; required owns emptiness.
            Rule::Phone(re) => {
                (!value.is_empty() && !re.is_match(value)).then(|| Violation::of(RuleKey::Phone))
            }
            Rule::Pattern(re) => {
                (!value.is_empty() && !re.is_match(value)).then(|| Violation::of(RuleKey::Pattern))
            }
            Rule::Email(re) => {
                (!value.is_empty() && !re.is_match(value)).then(|| Violation::of(RuleKey::Email))
            }
            // The empty value has zero words, so a word minimum fails on it.
            Rule::MinWords(n) => (value.split_whitespace().count() < *n)
                .then(|| Violation::bounded(RuleKey::MinWords, n)),
            // Unparseable values pass; format is the pattern rules' concern.
            Rule::Min(min) => match value.trim().parse::<f64>() {
                Ok(v) if v < *min => Some(Violation::bounded(RuleKey::Min, min)),
                _ => None,
            },
            Rule::Max(max) => match value.trim().parse::<f64>() {
                Ok(v) if v > *max => Some(Violation::bounded(RuleKey::Max, max)),
                _ => None,
            },
            Rule::MaxLength(n) => (value.chars().count() > *n)
                .then(|| Violation::bounded(RuleKey::MaxLength, n)),
            Rule::MinLength(n) => (!value.is_empty() && value.chars().count() < *n)
                .then(|| Violation::bounded(RuleKey::MinLength, n)),
            Rule::PasswordStrength => password_violation(value),
            Rule::ConfirmMatch(other) => {
                (value != other).then(|| Violation::of(RuleKey::PassNotMatch))
            }
        }
    }
}

/// All-of strength check; reports only the first unmet condition, checked in
/// a fixed order: length floor, length ceiling, lowercase, uppercase, digit,
/// special character.
fn password_violation(value: &str) -> Option<Violation> {
    let len = value.chars().count();
    if len < PASS_MIN_LEN {
        return Some(Violation::of(RuleKey::PassTooShort));
    }
    if len > PASS_MAX_LEN {
        return Some(Violation::of(RuleKey::PassTooLong));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(Violation::of(RuleKey::MissingLowercase));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(Violation::of(RuleKey::MissingUppercase));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some(Violation::of(RuleKey::MissingNumber));
    }
    if !value.chars().any(|c| c.is_ascii_punctuation()) {
        return Some(Violation::of(RuleKey::MissingSpecialChar));
    }
    None
}

/// The composed, ready-to-evaluate rule list for one field.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the active rule list from the options, in the fixed order.
    ///
    /// Fails only when a caller-supplied `pattern` does not compile.
    pub fn compose(options: &FieldOptions) -> Result<Self, ComposeError> {
        let mut rules = Vec::new();
        if options.required {
            rules.push(Rule::Required);
        }
        if options.phone {
            rules.push(Rule::Phone(compile(PHONE_PATTERN)?));
        } else if let Some(pattern) = &options.pattern {
            rules.push(Rule::Pattern(compile_full_match(pattern)?));
        }
        if options.email {
            rules.push(Rule::Email(compile(EMAIL_PATTERN)?));
        }
        if let Some(n) = options.min_words {
            rules.push(Rule::MinWords(n));
        }
        if let Some(min) = options.min {
            rules.push(Rule::Min(min));
        }
        if let Some(max) = options.max {
            rules.push(Rule::Max(max));
        }
        if let Some(n) = options.max_length {
            rules.push(Rule::MaxLength(n));
        }
        if let Some(n) = options.min_length {
            rules.push(Rule::MinLength(n));
        }
        if options.validate_password {
            rules.push(Rule::PasswordStrength);
        }
        if let Some(other) = &options.confirm_password {
            rules.push(Rule::ConfirmMatch(other.clone()));
        }
        Ok(Self { rules })
    }

    /// First failing rule for `value`, or `None` when everything passes.
    pub fn first_violation(&self, value: &str) -> Option<Violation> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn compile(pattern: &str) -> Result<Regex, ComposeError> {
    Regex::new(pattern).map_err(|source| ComposeError::BadPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Caller patterns validate the whole value, not a substring.
fn compile_full_match(pattern: &str) -> Result<Regex, ComposeError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| ComposeError::BadPattern {
        pattern: pattern.to_string(),
        source,
    })
}
