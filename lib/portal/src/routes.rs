//! The portal's route tree.
//!
//! Section nodes double as their list page; `create` children sit
//! before `:id` so literals win recognition. Display strings live here
//! and nowhere else.

use eduva_router::{RouteDef, RouteTable};

/// Page identifiers published to `nav/route`.
pub mod pages {
    pub const DASHBOARD: &str = "dashboard";
    pub const LOGIN: &str = "login";
    pub const SCHOOL_LIST: &str = "schools/list";
    pub const SCHOOL_CREATE: &str = "schools/create";
    pub const SCHOOL_DETAIL: &str = "schools/detail";
    pub const TEACHER_LIST: &str = "teachers/list";
    pub const TEACHER_DETAIL: &str = "teachers/detail";
    pub const STUDENT_LIST: &str = "students/list";
    pub const STUDENT_DETAIL: &str = "students/detail";
    pub const LESSON_LIST: &str = "lessons/list";
    pub const LESSON_GENERATE: &str = "lessons/generate";
    pub const INVOICE_LIST: &str = "invoices/list";
    pub const SETTINGS: &str = "settings";
    pub const SETTINGS_PROFILE: &str = "settings/profile";
    pub const SETTINGS_PASSWORD: &str = "settings/password";
    pub const NOT_FOUND: &str = "not-found";
}

pub fn route_table() -> RouteTable {
    RouteTable::new(vec![
        // The dashboard repeats the home label on purpose: its crumb
        // collapses into the home entry and the header keeps the date.
        RouteDef::new("", pages::DASHBOARD)
            .heading("Bảng thống kê")
            .breadcrumb("Bảng thống kê")
            .title("Bảng thống kê"),
        RouteDef::new("login", pages::LOGIN)
            .heading("Đăng nhập vào EDUVA")
            .title("Đăng nhập"),
        RouteDef::new("schools", pages::SCHOOL_LIST)
            .heading("Danh sách trường học")
            .breadcrumb("Trường học")
            .title("Trường học")
            .child(
                RouteDef::new("create", pages::SCHOOL_CREATE)
                    .heading("Thêm trường học")
                    .breadcrumb("Thêm mới")
                    .title("Thêm trường học"),
            )
            .child(
                RouteDef::new(":id", pages::SCHOOL_DETAIL)
                    .heading("Thông tin trường học")
                    .breadcrumb("Chi tiết"),
            ),
        RouteDef::new("teachers", pages::TEACHER_LIST)
            .heading("Danh sách giáo viên")
            .breadcrumb("Giáo viên")
            .title("Giáo viên")
            .child(
                RouteDef::new(":id", pages::TEACHER_DETAIL)
                    .heading("Thông tin giáo viên")
                    .breadcrumb("Chi tiết"),
            ),
        RouteDef::new("students", pages::STUDENT_LIST)
            .heading("Danh sách học sinh")
            .breadcrumb("Học sinh")
            .title("Học sinh")
            .child(
                RouteDef::new(":id", pages::STUDENT_DETAIL)
                    .heading("Thông tin học sinh")
                    .breadcrumb("Chi tiết"),
            ),
        RouteDef::new("lessons", pages::LESSON_LIST)
            .heading("Kho bài giảng")
            .breadcrumb("Bài giảng")
            .title("Bài giảng")
            .child(
                RouteDef::new("generate", pages::LESSON_GENERATE)
                    .heading("Tạo bài giảng với AI")
                    .breadcrumb("Tạo mới")
                    .title("Tạo bài giảng"),
            ),
        RouteDef::new("invoices", pages::INVOICE_LIST)
            .heading("Danh sách hóa đơn")
            .breadcrumb("Hóa đơn")
            .title("Hóa đơn"),
        RouteDef::new("settings", pages::SETTINGS)
            .heading("Cài đặt tài khoản")
            .breadcrumb("Cài đặt")
            .title("Cài đặt")
            .child(
                RouteDef::new("profile", pages::SETTINGS_PROFILE)
                    .heading("Thông tin cá nhân")
                    .breadcrumb("Thông tin cá nhân")
                    .title("Thông tin cá nhân"),
            )
            .child(
                RouteDef::new("password", pages::SETTINGS_PASSWORD)
                    .heading("Đổi mật khẩu")
                    .breadcrumb("Đổi mật khẩu")
                    .title("Đổi mật khẩu"),
            ),
        RouteDef::new("**", pages::NOT_FOUND)
            .heading("Không tìm thấy trang")
            .title("404"),
    ])
}
