//! Teacher page states.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::Teacher;

/// Teacher list page, stored at `pages/teachers/list`.
#[state("pages/teachers/list")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherList {
    pub rows: Vec<Teacher>,
    pub count: i64,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Teacher detail page, stored at `pages/teachers/detail`.
#[state("pages/teachers/detail")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Teacher>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
