//! Dashboard page state, stored at `pages/dashboard`.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::DashboardStats;

#[state("pages/dashboard")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
