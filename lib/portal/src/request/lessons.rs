//! Lesson generation requests.

use eduva_derive::request;
use serde::{Deserialize, Serialize};

/// Kick off one generation run. The job state at `pages/lessons/job`
/// tracks progress; the finished lesson is prepended to the list.
#[request("pages/lessons/generate")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLessonReq {
    pub title: String,
    pub subject: String,
    pub grade: u8,
}
