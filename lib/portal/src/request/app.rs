//! App-level requests.

use eduva_derive::request;
use serde::{Deserialize, Serialize};

/// Seed baseline state and run the first metadata pass for `/`.
#[request("app/initialize")]
#[derive(Serialize, Deserialize)]
pub struct InitializeReq;

/// Switch the active locale.
#[request("app/set-locale")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLocaleReq {
    pub locale: String,
}

/// Flip light/dark.
#[request("app/toggle-theme")]
#[derive(Serialize, Deserialize)]
pub struct ToggleThemeReq;
