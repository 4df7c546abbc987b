//! [`PortalApi`] over the real EDUVA backend.

use async_trait::async_trait;
use eduva_client::{ApiClient, ApiError, Paged};
use serde::Serialize;

use crate::model::{
    DashboardStats, Invoice, Lesson, LessonDraft, LoginData, ProfileDraft, School, SchoolDraft,
    StaffProfile, Student, Teacher,
};
use crate::services::PortalApi;

pub struct HttpApi {
    client: ApiClient,
}

impl HttpApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[async_trait]
impl PortalApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        self.client
            .post_json("v1/auth/login", &LoginBody { email, password })
            .await
    }

    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.client.get_json("v1/dashboard").await
    }

    async fn schools(&self) -> Result<Paged<School>, ApiError> {
        self.client.get_json("v1/schools").await
    }

    async fn school(&self, id: &str) -> Result<School, ApiError> {
        self.client.get_json(&format!("v1/schools/{id}")).await
    }

    async fn create_school(&self, draft: &SchoolDraft) -> Result<School, ApiError> {
        self.client.post_json("v1/schools", draft).await
    }

    async fn teachers(&self) -> Result<Paged<Teacher>, ApiError> {
        self.client.get_json("v1/teachers").await
    }

    async fn teacher(&self, id: &str) -> Result<Teacher, ApiError> {
        self.client.get_json(&format!("v1/teachers/{id}")).await
    }

    async fn students(&self) -> Result<Paged<Student>, ApiError> {
        self.client.get_json("v1/students").await
    }

    async fn student(&self, id: &str) -> Result<Student, ApiError> {
        self.client.get_json(&format!("v1/students/{id}")).await
    }

    async fn lessons(&self) -> Result<Paged<Lesson>, ApiError> {
        self.client.get_json("v1/lessons").await
    }

    async fn generate_lesson(&self, draft: &LessonDraft) -> Result<Lesson, ApiError> {
        self.client.post_json("v1/lessons/generate", draft).await
    }

    async fn invoices(&self) -> Result<Paged<Invoice>, ApiError> {
        self.client.get_json("v1/invoices").await
    }

    async fn save_profile(&self, draft: &ProfileDraft) -> Result<StaffProfile, ApiError> {
        self.client.put_json("v1/staff/profile", draft).await
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        self.client
            .post_ok(
                "v1/staff/password",
                &PasswordBody {
                    current_password: current,
                    new_password: new,
                },
            )
            .await
    }
}
