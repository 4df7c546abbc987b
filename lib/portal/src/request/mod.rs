//! Request definitions.
//!
//! Each struct is a typed intent payload with a `PATH` const. They all
//! derive serde so the JSON bridge can decode them off the wire.

pub mod app;
pub mod auth;
pub mod lessons;
pub mod nav;
pub mod pages;
pub mod settings;

pub use app::{InitializeReq, SetLocaleReq, ToggleThemeReq};
pub use auth::{LoginReq, LogoutReq};
pub use lessons::GenerateLessonReq;
pub use nav::NavigateReq;
pub use pages::{
    CreateSchoolReq, LoadDashboardReq, LoadInvoicesReq, LoadLessonsReq, LoadSchoolDetailReq,
    LoadSchoolsReq, LoadStudentDetailReq, LoadStudentsReq, LoadTeacherDetailReq, LoadTeachersReq,
};
pub use settings::{ChangePasswordReq, SaveProfileReq};
