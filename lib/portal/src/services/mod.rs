//! Backend access behind one async trait.
//!
//! Handlers never talk to HTTP directly; they hold an
//! `Arc<dyn PortalApi>` so tests and offline mode can swap in
//! [`MemoryApi`] without touching handler code.

pub mod http;
pub mod memory;

pub use http::HttpApi;
pub use memory::MemoryApi;

use async_trait::async_trait;
use eduva_client::{ApiError, Paged};

use crate::model::{
    DashboardStats, Invoice, Lesson, LessonDraft, LoginData, ProfileDraft, School, SchoolDraft,
    StaffProfile, Student, Teacher,
};

/// Everything the portal needs from the backend.
#[async_trait]
pub trait PortalApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError>;

    async fn dashboard(&self) -> Result<DashboardStats, ApiError>;

    async fn schools(&self) -> Result<Paged<School>, ApiError>;
    async fn school(&self, id: &str) -> Result<School, ApiError>;
    async fn create_school(&self, draft: &SchoolDraft) -> Result<School, ApiError>;

    async fn teachers(&self) -> Result<Paged<Teacher>, ApiError>;
    async fn teacher(&self, id: &str) -> Result<Teacher, ApiError>;

    async fn students(&self) -> Result<Paged<Student>, ApiError>;
    async fn student(&self, id: &str) -> Result<Student, ApiError>;

    async fn lessons(&self) -> Result<Paged<Lesson>, ApiError>;
    async fn generate_lesson(&self, draft: &LessonDraft) -> Result<Lesson, ApiError>;

    async fn invoices(&self) -> Result<Paged<Invoice>, ApiError>;

    async fn save_profile(&self, draft: &ProfileDraft) -> Result<StaffProfile, ApiError>;
    async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError>;
}
