//! Domain models shared by page state, service calls, and the JSON bridge.
//!
//! Everything here serializes camelCase to line up with the backend API
//! payloads (see `eduva_client::Envelope`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A school registered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    pub teacher_count: u32,
    pub student_count: u32,
}

/// Fields the create-school form submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolDraft {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// A teacher account, scoped to one school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub school_id: String,
    pub school_name: String,
    pub lesson_count: u32,
}

/// A student account, scoped to one school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub school_id: String,
    pub school_name: String,
    pub grade: u8,
}

/// Lifecycle of an AI-generated lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LessonStatus {
    Draft,
    Published,
    Archived,
}

/// A generated lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub grade: u8,
    pub status: LessonStatus,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// Fields the lesson-generation form submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDraft {
    pub title: String,
    pub subject: String,
    pub grade: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

/// A billing invoice issued to a school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub school_id: String,
    pub school_name: String,
    /// VND, whole đồng.
    pub amount: i64,
    pub status: InvoiceStatus,
    pub issued_at: DateTime<Utc>,
}

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub school_count: u32,
    pub teacher_count: u32,
    pub student_count: u32,
    pub lesson_count: u32,
    /// VND collected this month.
    pub revenue: i64,
}

/// Logged-in staff member's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
}

/// Editable subset of [`StaffProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// What a successful login returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub profile: StaffProfile,
}
