//! Auth requests.

use eduva_derive::request;
use serde::{Deserialize, Serialize};

/// Login with email + password.
#[request("auth/login")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

/// Logout: clear the session and every page state behind it.
#[request("auth/logout")]
#[derive(Serialize, Deserialize)]
pub struct LogoutReq;
