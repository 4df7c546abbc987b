//! Session state, stored at `auth/session`.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::StaffProfile;

/// Authentication state. The UI reads this to decide what to show.
#[state("auth/session")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub phase: AuthPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<StaffProfile>,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionState {
    /// Signed-out baseline.
    pub fn anonymous() -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            profile: None,
            busy: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthPhase {
    Unauthenticated,
    Authenticated,
}
