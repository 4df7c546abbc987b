//! School page states.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::School;

/// School list page, stored at `pages/schools/list`.
#[state("pages/schools/list")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolList {
    pub rows: Vec<School>,
    pub count: i64,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// School detail page, stored at `pages/schools/detail`.
#[state("pages/schools/detail")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<School>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create-school form submission, stored at `pages/schools/form`.
#[state("pages/schools/form")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolForm {
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
