//! Page data-loading requests.

use eduva_derive::request;
use serde::{Deserialize, Serialize};

use crate::model::SchoolDraft;

#[request("pages/dashboard/load")]
#[derive(Serialize, Deserialize)]
pub struct LoadDashboardReq;

#[request("pages/schools/load")]
#[derive(Serialize, Deserialize)]
pub struct LoadSchoolsReq;

#[request("pages/schools/load-detail")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSchoolDetailReq {
    pub id: String,
}

/// Submit the create-school form.
#[request("pages/schools/create")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchoolReq {
    pub draft: SchoolDraft,
}

#[request("pages/teachers/load")]
#[derive(Serialize, Deserialize)]
pub struct LoadTeachersReq;

#[request("pages/teachers/load-detail")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTeacherDetailReq {
    pub id: String,
}

#[request("pages/students/load")]
#[derive(Serialize, Deserialize)]
pub struct LoadStudentsReq;

#[request("pages/students/load-detail")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadStudentDetailReq {
    pub id: String,
}

#[request("pages/lessons/load")]
#[derive(Serialize, Deserialize)]
pub struct LoadLessonsReq;

#[request("pages/invoices/load")]
#[derive(Serialize, Deserialize)]
pub struct LoadInvoicesReq;
