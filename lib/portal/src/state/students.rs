//! Student page states.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::Student;

/// Student list page, stored at `pages/students/list`.
#[state("pages/students/list")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentList {
    pub rows: Vec<Student>,
    pub count: i64,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Student detail page, stored at `pages/students/detail`.
#[state("pages/students/detail")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
