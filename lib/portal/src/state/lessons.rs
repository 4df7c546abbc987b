//! Lesson page states.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::Lesson;

/// Lesson list page, stored at `pages/lessons/list`.
#[state("pages/lessons/list")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonList {
    pub rows: Vec<Lesson>,
    pub count: i64,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One lesson-generation run, stored at `pages/lessons/job`.
/// The UI animates while `phase` is `Generating`.
#[state("pages/lessons/job")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationJob {
    pub phase: JobPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<Lesson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationJob {
    pub fn idle() -> Self {
        Self {
            phase: JobPhase::Idle,
            lesson: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobPhase {
    Idle,
    Generating,
    Done,
    Failed,
}
