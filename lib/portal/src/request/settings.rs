//! Settings requests. Both are validated before any backend call.

use eduva_derive::request;
use serde::{Deserialize, Serialize};

/// Save the profile form.
#[request("settings/save-profile")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileReq {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Change the account password.
#[request("settings/change-password")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordReq {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
