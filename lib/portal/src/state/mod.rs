//! State definitions.
//!
//! Each file defines the state types stored at well-known paths.
//! `#[state("path")]` generates the `PATH` const; everything also
//! derives serde so the JSON bridge can snapshot the tree.

pub mod app;
pub mod auth;
pub mod dashboard;
pub mod invoices;
pub mod lessons;
pub mod nav;
pub mod schools;
pub mod settings;
pub mod students;
pub mod teachers;

pub use app::{LocaleState, Theme, ThemeState, ToastKind, ToastState};
pub use auth::{AuthPhase, SessionState};
pub use dashboard::DashboardState;
pub use invoices::InvoiceList;
pub use lessons::{GenerationJob, JobPhase, LessonList};
pub use nav::RouteState;
pub use schools::{SchoolDetail, SchoolForm, SchoolList};
pub use settings::{FieldIssue, PasswordState, SettingsState};
pub use students::{StudentDetail, StudentList};
pub use teachers::{TeacherDetail, TeacherList};
