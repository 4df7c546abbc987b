//! Settings page states.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

/// A per-field validation message surfaced to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Profile form submission, stored at `pages/settings`.
#[state("pages/settings")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    pub busy: bool,
    pub issues: Vec<FieldIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SettingsState {
    pub fn idle() -> Self {
        Self {
            busy: false,
            issues: Vec::new(),
            error: None,
        }
    }
}

/// Change-password form submission, stored at `pages/settings/password`.
#[state("pages/settings/password")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordState {
    pub busy: bool,
    pub changed: bool,
    pub issues: Vec<FieldIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PasswordState {
    pub fn idle() -> Self {
        Self {
            busy: false,
            changed: false,
            issues: Vec::new(),
            error: None,
        }
    }
}
