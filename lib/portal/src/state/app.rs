//! App-level state: locale, theme, toasts.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

/// Active locale code, stored at `app/locale`. Mirrors
/// `I18nStore::locale` so the snapshot carries it.
#[state("app/locale")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleState {
    pub locale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Chrome theme, stored at `app/theme`.
#[state("app/theme")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Last transient notification, stored at `app/toast`.
/// Only the most recent one is kept.
#[state("app/toast")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastState {
    pub kind: ToastKind,
    pub message: String,
}
