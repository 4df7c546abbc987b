//! Lesson generation handling.

use std::time::Duration;

use eduva_forms::FieldOptions;
use eduva_signals::{I18nStore, StateStore};

use crate::handlers::helpers;
use crate::model::LessonDraft;
use crate::request::GenerateLessonReq;
use crate::services::PortalApi;
use crate::state::{GenerationJob, JobPhase, LessonList};

/// The generation model streams no progress, so the phase would flip
/// instantly; this pause keeps the animation visible.
const GENERATION_PAUSE: Duration = Duration::from_millis(1200);

/// Handle `pages/lessons/generate`.
pub async fn handle_generate(
    req: &GenerateLessonReq,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    let mut issues = Vec::new();
    helpers::check_field(
        &mut issues,
        "title",
        &req.title,
        &FieldOptions::new().required().min_words(2),
    );
    helpers::check_field(
        &mut issues,
        "subject",
        &req.subject,
        &FieldOptions::new().required(),
    );
    if let Some(first) = issues.first() {
        store.set(
            GenerationJob::PATH,
            GenerationJob {
                phase: JobPhase::Failed,
                lesson: None,
                error: Some(first.message.clone()),
            },
        );
        return;
    }

    store.set(
        GenerationJob::PATH,
        GenerationJob {
            phase: JobPhase::Generating,
            lesson: None,
            error: None,
        },
    );
    tokio::time::sleep(GENERATION_PAUSE).await;

    let draft = LessonDraft {
        title: req.title.trim().to_string(),
        subject: req.subject.trim().to_string(),
        grade: req.grade,
    };
    match api.generate_lesson(&draft).await {
        Ok(lesson) => {
            tracing::info!(lesson = %lesson.id, "lesson generated");
            store.set(
                GenerationJob::PATH,
                GenerationJob {
                    phase: JobPhase::Done,
                    lesson: Some(lesson.clone()),
                    error: None,
                },
            );
            let mut list = store
                .get_cloned::<LessonList>(LessonList::PATH)
                .unwrap_or(LessonList {
                    rows: Vec::new(),
                    count: 0,
                    loading: false,
                    error: None,
                });
            list.rows.insert(0, lesson);
            list.count += 1;
            store.set(LessonList::PATH, list);
            helpers::toast_success(store, "Đã tạo xong bài giảng");
        }
        Err(err) => {
            let message = helpers::describe(&err, i18n);
            store.set(
                GenerationJob::PATH,
                GenerationJob {
                    phase: JobPhase::Failed,
                    lesson: None,
                    error: Some(message.clone()),
                },
            );
            helpers::toast_error(store, message);
        }
    }
}
