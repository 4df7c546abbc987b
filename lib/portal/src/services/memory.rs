//! Seeded in-memory [`PortalApi`].
//!
//! Backs `--offline` mode and the integration tests. Mutations go
//! through one `RwLock`; guards are never held across an await.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use eduva_client::{ApiError, Paged};

use crate::model::{
    DashboardStats, Invoice, InvoiceStatus, Lesson, LessonDraft, LessonStatus, LoginData,
    ProfileDraft, School, SchoolDraft, StaffProfile, Student, Teacher,
};
use crate::services::PortalApi;

/// Credentials the seed accepts.
pub const SEED_EMAIL: &str = "admin@eduva.vn";
pub const SEED_PASSWORD: &str = "Admin123!";

const CODE_BAD_CREDENTIALS: i64 = 4010;
const CODE_WRONG_PASSWORD: i64 = 4011;
const CODE_NOT_FOUND: i64 = 4040;

pub struct MemoryApi {
    inner: RwLock<Inner>,
}

struct Inner {
    password: String,
    profile: StaffProfile,
    schools: Vec<School>,
    teachers: Vec<Teacher>,
    students: Vec<Student>,
    lessons: Vec<Lesson>,
    invoices: Vec<Invoice>,
    next_id: u32,
}

fn not_found(what: &str) -> ApiError {
    ApiError::Backend {
        code: CODE_NOT_FOUND,
        message: format!("Không tìm thấy {what}"),
    }
}

fn paged<T: Clone>(rows: &[T]) -> Paged<T> {
    Paged {
        data: rows.to_vec(),
        count: rows.len() as i64,
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        let now = Utc::now();
        let schools = vec![
            School {
                id: "sch-1".into(),
                name: "THPT Chu Văn An".into(),
                address: "10 Thụy Khuê, Tây Hồ, Hà Nội".into(),
                contact_email: Some("vanphong@cva.edu.vn".into()),
                contact_phone: Some("0243823456".into()),
                teacher_count: 2,
                student_count: 1,
            },
            School {
                id: "sch-2".into(),
                name: "THCS Nguyễn Du".into(),
                address: "255 Trưng Nữ Vương, Hải Châu, Đà Nẵng".into(),
                contact_email: None,
                contact_phone: Some("0236357889".into()),
                teacher_count: 1,
                student_count: 1,
            },
            School {
                id: "sch-3".into(),
                name: "Tiểu học Lê Quý Đôn".into(),
                address: "8 Nguyễn Thị Minh Khai, Quận 3, TP. Hồ Chí Minh".into(),
                contact_email: Some("lienhe@lqd.edu.vn".into()),
                contact_phone: None,
                teacher_count: 0,
                student_count: 1,
            },
        ];
        let teachers = vec![
            Teacher {
                id: "gv-1".into(),
                full_name: "Nguyễn Thị Hoa".into(),
                email: "hoa.nguyen@cva.edu.vn".into(),
                phone: Some("0912345678".into()),
                school_id: "sch-1".into(),
                school_name: "THPT Chu Văn An".into(),
                lesson_count: 1,
            },
            Teacher {
                id: "gv-2".into(),
                full_name: "Trần Văn Nam".into(),
                email: "nam.tran@cva.edu.vn".into(),
                phone: None,
                school_id: "sch-1".into(),
                school_name: "THPT Chu Văn An".into(),
                lesson_count: 1,
            },
            Teacher {
                id: "gv-3".into(),
                full_name: "Phạm Thu Trang".into(),
                email: "trang.pham@nd.edu.vn".into(),
                phone: Some("0987654321".into()),
                school_id: "sch-2".into(),
                school_name: "THCS Nguyễn Du".into(),
                lesson_count: 0,
            },
        ];
        let students = vec![
            Student {
                id: "hs-1".into(),
                full_name: "Lê Minh Đức".into(),
                email: "duc.le@hs.cva.edu.vn".into(),
                school_id: "sch-1".into(),
                school_name: "THPT Chu Văn An".into(),
                grade: 10,
            },
            Student {
                id: "hs-2".into(),
                full_name: "Võ Thị Mai".into(),
                email: "mai.vo@hs.nd.edu.vn".into(),
                school_id: "sch-2".into(),
                school_name: "THCS Nguyễn Du".into(),
                grade: 7,
            },
            Student {
                id: "hs-3".into(),
                full_name: "Đặng Quang Huy".into(),
                email: "huy.dang@hs.lqd.edu.vn".into(),
                school_id: "sch-3".into(),
                school_name: "Tiểu học Lê Quý Đôn".into(),
                grade: 4,
            },
        ];
        let lessons = vec![
            Lesson {
                id: "les-1".into(),
                title: "Phương trình bậc hai một ẩn".into(),
                subject: "Toán".into(),
                grade: 10,
                status: LessonStatus::Published,
                author_name: "Nguyễn Thị Hoa".into(),
                created_at: now - Duration::days(12),
            },
            Lesson {
                id: "les-2".into(),
                title: "Truyện Kiều: đoạn trích Trao duyên".into(),
                subject: "Ngữ văn".into(),
                grade: 10,
                status: LessonStatus::Draft,
                author_name: "Trần Văn Nam".into(),
                created_at: now - Duration::days(3),
            },
        ];
        let invoices = vec![
            Invoice {
                id: "inv-1".into(),
                school_id: "sch-1".into(),
                school_name: "THPT Chu Văn An".into(),
                amount: 12_500_000,
                status: InvoiceStatus::Paid,
                issued_at: now - Duration::days(30),
            },
            Invoice {
                id: "inv-2".into(),
                school_id: "sch-2".into(),
                school_name: "THCS Nguyễn Du".into(),
                amount: 8_000_000,
                status: InvoiceStatus::Pending,
                issued_at: now - Duration::days(7),
            },
        ];
        Self {
            inner: RwLock::new(Inner {
                password: SEED_PASSWORD.to_string(),
                profile: StaffProfile {
                    id: "u-1".into(),
                    full_name: "Phạm Quang Dũng".into(),
                    email: SEED_EMAIL.into(),
                    phone: Some("0909123456".into()),
                    role: "admin".into(),
                },
                schools,
                teachers,
                students,
                lessons,
                invoices,
                next_id: 100,
            }),
        }
    }
}

impl Default for MemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortalApi for MemoryApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        let inner = self.inner.read().unwrap();
        if email != inner.profile.email || password != inner.password {
            return Err(ApiError::Backend {
                code: CODE_BAD_CREDENTIALS,
                message: "Email hoặc mật khẩu không đúng".into(),
            });
        }
        Ok(LoginData {
            access_token: format!("mem-{}", inner.profile.id),
            profile: inner.profile.clone(),
        })
    }

    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        let inner = self.inner.read().unwrap();
        let revenue = inner
            .invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .map(|i| i.amount)
            .sum();
        Ok(DashboardStats {
            school_count: inner.schools.len() as u32,
            teacher_count: inner.teachers.len() as u32,
            student_count: inner.students.len() as u32,
            lesson_count: inner.lessons.len() as u32,
            revenue,
        })
    }

    async fn schools(&self) -> Result<Paged<School>, ApiError> {
        Ok(paged(&self.inner.read().unwrap().schools))
    }

    async fn school(&self, id: &str) -> Result<School, ApiError> {
        self.inner
            .read()
            .unwrap()
            .schools
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("trường học"))
    }

    async fn create_school(&self, draft: &SchoolDraft) -> Result<School, ApiError> {
        let mut inner = self.inner.write().unwrap();
        let id = format!("sch-{}", inner.next_id);
        inner.next_id += 1;
        let school = School {
            id,
            name: draft.name.clone(),
            address: draft.address.clone(),
            contact_email: draft.contact_email.clone(),
            contact_phone: draft.contact_phone.clone(),
            teacher_count: 0,
            student_count: 0,
        };
        inner.schools.insert(0, school.clone());
        Ok(school)
    }

    async fn teachers(&self) -> Result<Paged<Teacher>, ApiError> {
        Ok(paged(&self.inner.read().unwrap().teachers))
    }

    async fn teacher(&self, id: &str) -> Result<Teacher, ApiError> {
        self.inner
            .read()
            .unwrap()
            .teachers
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| not_found("giáo viên"))
    }

    async fn students(&self) -> Result<Paged<Student>, ApiError> {
        Ok(paged(&self.inner.read().unwrap().students))
    }

    async fn student(&self, id: &str) -> Result<Student, ApiError> {
        self.inner
            .read()
            .unwrap()
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("học sinh"))
    }

    async fn lessons(&self) -> Result<Paged<Lesson>, ApiError> {
        Ok(paged(&self.inner.read().unwrap().lessons))
    }

    async fn generate_lesson(&self, draft: &LessonDraft) -> Result<Lesson, ApiError> {
        let mut inner = self.inner.write().unwrap();
        let id = format!("les-{}", inner.next_id);
        inner.next_id += 1;
        let lesson = Lesson {
            id,
            title: draft.title.clone(),
            subject: draft.subject.clone(),
            grade: draft.grade,
            status: LessonStatus::Draft,
            author_name: inner.profile.full_name.clone(),
            created_at: Utc::now(),
        };
        inner.lessons.insert(0, lesson.clone());
        Ok(lesson)
    }

    async fn invoices(&self) -> Result<Paged<Invoice>, ApiError> {
        Ok(paged(&self.inner.read().unwrap().invoices))
    }

    async fn save_profile(&self, draft: &ProfileDraft) -> Result<StaffProfile, ApiError> {
        let mut inner = self.inner.write().unwrap();
        inner.profile.full_name = draft.full_name.clone();
        inner.profile.email = draft.email.clone();
        inner.profile.phone = draft.phone.clone();
        Ok(inner.profile.clone())
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.write().unwrap();
        if current != inner.password {
            return Err(ApiError::Backend {
                code: CODE_WRONG_PASSWORD,
                message: "Mật khẩu hiện tại không đúng".into(),
            });
        }
        inner.password = new.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====================================================================
    // Seed behavior
    // ====================================================================

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let api = MemoryApi::new();
        let err = api.login(SEED_EMAIL, "sai-mat-khau").await.unwrap_err();
        match err {
            ApiError::Backend { code, .. } => assert_eq!(code, CODE_BAD_CREDENTIALS),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn login_returns_profile_and_token() {
        let api = MemoryApi::new();
        let data = api.login(SEED_EMAIL, SEED_PASSWORD).await.unwrap();
        assert_eq!(data.profile.full_name, "Phạm Quang Dũng");
        assert!(data.access_token.starts_with("mem-"));
    }

    #[tokio::test]
    async fn change_password_rotates_the_secret() {
        let api = MemoryApi::new();
        api.change_password(SEED_PASSWORD, "MatKhau@2024").await.unwrap();
        assert!(api.login(SEED_EMAIL, SEED_PASSWORD).await.is_err());
        assert!(api.login(SEED_EMAIL, "MatKhau@2024").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_current_password_is_rejected() {
        let api = MemoryApi::new();
        let err = api.change_password("sai", "MatKhau@2024").await.unwrap_err();
        match err {
            ApiError::Backend { code, .. } => assert_eq!(code, CODE_WRONG_PASSWORD),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn generated_lesson_lands_first_and_counts() {
        let api = MemoryApi::new();
        let before = api.dashboard().await.unwrap().lesson_count;
        let draft = LessonDraft {
            title: "Định luật Ôm".into(),
            subject: "Vật lý".into(),
            grade: 9,
        };
        let lesson = api.generate_lesson(&draft).await.unwrap();
        assert_eq!(lesson.status, LessonStatus::Draft);
        let page = api.lessons().await.unwrap();
        assert_eq!(page.data[0].id, lesson.id);
        assert_eq!(api.dashboard().await.unwrap().lesson_count, before + 1);
    }

    #[tokio::test]
    async fn unknown_school_is_a_not_found_error() {
        let api = MemoryApi::new();
        let err = api.school("sch-999").await.unwrap_err();
        match err {
            ApiError::Backend { code, .. } => assert_eq!(code, CODE_NOT_FOUND),
            other => panic!("unexpected error: {other}"),
        }
    }
}
