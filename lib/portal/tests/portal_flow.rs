//! End-to-end flows through the public facade: every intent goes in via
//! `emit`, every assertion reads state paths or layout signals, exactly
//! like a rendering shell would.

use std::sync::{Arc, Mutex};

use eduva_portal::model::SchoolDraft;
use eduva_portal::request::*;
use eduva_portal::routes::pages;
use eduva_portal::state::*;
use eduva_portal::{bridge, Portal};
use eduva_router::DEFAULT_TITLE;

async fn initialized() -> Portal {
    let portal = Portal::offline();
    portal.initialize().await;
    portal
}

async fn signed_in() -> Portal {
    let portal = initialized().await;
    portal
        .engine()
        .emit(
            LoginReq::PATH,
            LoginReq {
                email: "admin@eduva.vn".into(),
                password: "Admin123!".into(),
            },
        )
        .await;
    portal
}

// ========================================================================
// Startup
// ========================================================================

#[tokio::test]
async fn initialize_seeds_the_baseline() {
    let portal = initialized().await;
    let engine = portal.engine();

    let session: SessionState = engine.get_cloned(SessionState::PATH).unwrap();
    assert_eq!(session.phase, AuthPhase::Unauthenticated);
    assert!(session.profile.is_none());

    let locale: LocaleState = engine.get_cloned(LocaleState::PATH).unwrap();
    assert_eq!(locale.locale, "vi");

    let theme: ThemeState = engine.get_cloned(ThemeState::PATH).unwrap();
    assert_eq!(theme.theme, Theme::Light);

    let job: GenerationJob = engine.get_cloned(GenerationJob::PATH).unwrap();
    assert_eq!(job.phase, JobPhase::Idle);

    let route: RouteState = engine.get_cloned(RouteState::PATH).unwrap();
    assert_eq!(route.url, "/");
    assert_eq!(route.page, pages::DASHBOARD);

    assert_eq!(portal.layout().heading.get(), "Bảng thống kê");
    assert_eq!(portal.layout().title.get(), "Bảng thống kê | by EDUVA");
    assert!(portal.layout().show_date());
}

// ========================================================================
// Navigation
// ========================================================================

#[tokio::test]
async fn navigation_updates_route_and_chrome() {
    let portal = initialized().await;
    portal
        .engine()
        .emit(NavigateReq::PATH, NavigateReq { url: "/schools/sch-1".into() })
        .await;

    let route: RouteState = portal.engine().get_cloned(RouteState::PATH).unwrap();
    assert_eq!(route.page, pages::SCHOOL_DETAIL);
    assert_eq!(route.params.get("id").map(String::as_str), Some("sch-1"));

    assert_eq!(portal.layout().heading.get(), "Thông tin trường học");
    assert_eq!(portal.layout().title.get(), DEFAULT_TITLE);
    assert!(!portal.layout().show_date());
}

#[tokio::test]
async fn chrome_is_published_before_the_route_state() {
    let portal = initialized().await;
    let seen = Arc::new(Mutex::new(Vec::new()));
    {
        let seen = seen.clone();
        let heading = portal.layout().heading.clone();
        portal.engine().subscribe(RouteState::PATH, move |_, value| {
            let page = value
                .downcast_ref::<RouteState>()
                .map(|r| r.page.clone())
                .unwrap_or_default();
            seen.lock().unwrap().push((page, heading.get()));
        });
    }

    portal
        .engine()
        .emit(NavigateReq::PATH, NavigateReq { url: "/lessons".into() })
        .await;

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        [(pages::LESSON_LIST.to_string(), "Kho bài giảng".to_string())]
    );
}

#[tokio::test]
async fn unknown_url_lands_on_the_not_found_page() {
    let portal = initialized().await;
    portal
        .engine()
        .emit(NavigateReq::PATH, NavigateReq { url: "/khong/ton/tai".into() })
        .await;

    let route: RouteState = portal.engine().get_cloned(RouteState::PATH).unwrap();
    assert_eq!(route.page, pages::NOT_FOUND);
    assert_eq!(portal.layout().heading.get(), "Không tìm thấy trang");
}

// ========================================================================
// Auth
// ========================================================================

#[tokio::test]
async fn rejected_login_reports_the_backend_message() {
    let portal = initialized().await;
    portal
        .engine()
        .emit(
            LoginReq::PATH,
            LoginReq {
                email: "admin@eduva.vn".into(),
                password: "sai-mat-khau".into(),
            },
        )
        .await;

    let session: SessionState = portal.engine().get_cloned(SessionState::PATH).unwrap();
    assert_eq!(session.phase, AuthPhase::Unauthenticated);
    assert!(!session.busy);
    assert_eq!(
        session.error.as_deref(),
        Some("Email hoặc mật khẩu không đúng")
    );
    assert!(!portal.token().is_set());
}

#[tokio::test]
async fn login_sets_the_token_and_lands_home() {
    let portal = signed_in().await;

    let session: SessionState = portal.engine().get_cloned(SessionState::PATH).unwrap();
    assert_eq!(session.phase, AuthPhase::Authenticated);
    assert_eq!(
        session.profile.as_ref().map(|p| p.full_name.as_str()),
        Some("Phạm Quang Dũng")
    );
    assert!(portal.token().is_set());

    let route: RouteState = portal.engine().get_cloned(RouteState::PATH).unwrap();
    assert_eq!(route.url, "/");
}

#[tokio::test]
async fn logout_clears_pages_and_lands_on_login() {
    let portal = signed_in().await;
    portal.engine().emit(LoadSchoolsReq::PATH, LoadSchoolsReq).await;
    assert!(portal.engine().contains(SchoolList::PATH));

    portal.engine().emit(LogoutReq::PATH, LogoutReq).await;

    assert!(!portal.token().is_set());
    assert!(!portal.engine().contains(SchoolList::PATH));
    let session: SessionState = portal.engine().get_cloned(SessionState::PATH).unwrap();
    assert_eq!(session.phase, AuthPhase::Unauthenticated);
    let job: GenerationJob = portal.engine().get_cloned(GenerationJob::PATH).unwrap();
    assert_eq!(job.phase, JobPhase::Idle);
    let route: RouteState = portal.engine().get_cloned(RouteState::PATH).unwrap();
    assert_eq!(route.page, pages::LOGIN);
}

// ========================================================================
// Page loads
// ========================================================================

#[tokio::test]
async fn school_list_loads_the_seeded_rows() {
    let portal = signed_in().await;
    portal.engine().emit(LoadSchoolsReq::PATH, LoadSchoolsReq).await;

    let list: SchoolList = portal.engine().get_cloned(SchoolList::PATH).unwrap();
    assert!(!list.loading);
    assert_eq!(list.count, 3);
    assert_eq!(list.rows[0].name, "THPT Chu Văn An");
    assert!(list.error.is_none());
}

#[tokio::test]
async fn dashboard_aggregates_the_seed() {
    let portal = signed_in().await;
    portal.engine().emit(LoadDashboardReq::PATH, LoadDashboardReq).await;

    let dash: DashboardState = portal.engine().get_cloned(DashboardState::PATH).unwrap();
    let stats = dash.stats.unwrap();
    assert_eq!(stats.school_count, 3);
    assert_eq!(stats.teacher_count, 3);
    assert_eq!(stats.revenue, 12_500_000);
}

#[tokio::test]
async fn missing_detail_surfaces_a_described_error() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            LoadSchoolDetailReq::PATH,
            LoadSchoolDetailReq { id: "sch-999".into() },
        )
        .await;

    let detail: SchoolDetail = portal.engine().get_cloned(SchoolDetail::PATH).unwrap();
    assert!(detail.school.is_none());
    assert_eq!(detail.error.as_deref(), Some("Không tìm thấy trường học"));
}

// ========================================================================
// Create school
// ========================================================================

#[tokio::test]
async fn create_school_rejects_an_empty_name_before_the_backend() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            CreateSchoolReq::PATH,
            CreateSchoolReq {
                draft: SchoolDraft {
                    name: "".into(),
                    address: "1 Lý Thường Kiệt".into(),
                    contact_email: None,
                    contact_phone: None,
                },
            },
        )
        .await;

    let form: SchoolForm = portal.engine().get_cloned(SchoolForm::PATH).unwrap();
    assert_eq!(form.error.as_deref(), Some("Trường này không được để trống"));
    // Nothing was created, so the list was never touched.
    assert!(!portal.engine().contains(SchoolList::PATH));
}

#[tokio::test]
async fn create_school_rejects_a_bad_contact_email() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            CreateSchoolReq::PATH,
            CreateSchoolReq {
                draft: SchoolDraft {
                    name: "THPT Trần Phú".into(),
                    address: "5 Lê Lợi, Hải Phòng".into(),
                    contact_email: Some("khong-phai-email".into()),
                    contact_phone: None,
                },
            },
        )
        .await;

    let form: SchoolForm = portal.engine().get_cloned(SchoolForm::PATH).unwrap();
    assert_eq!(form.error.as_deref(), Some("Email không hợp lệ"));
}

#[tokio::test]
async fn created_school_is_prepended_and_toasted() {
    let portal = signed_in().await;
    portal.engine().emit(LoadSchoolsReq::PATH, LoadSchoolsReq).await;
    portal
        .engine()
        .emit(
            CreateSchoolReq::PATH,
            CreateSchoolReq {
                draft: SchoolDraft {
                    name: "THPT Trần Phú".into(),
                    address: "5 Lê Lợi, Hải Phòng".into(),
                    contact_email: Some("vp@tranphu.edu.vn".into()),
                    contact_phone: Some("0225382344".into()),
                },
            },
        )
        .await;

    let list: SchoolList = portal.engine().get_cloned(SchoolList::PATH).unwrap();
    assert_eq!(list.count, 4);
    assert_eq!(list.rows[0].name, "THPT Trần Phú");

    let toast: ToastState = portal.engine().get_cloned(ToastState::PATH).unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Đã thêm trường học mới");
}

// ========================================================================
// Lesson generation
// ========================================================================

#[tokio::test]
async fn one_word_title_fails_generation_up_front() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            GenerateLessonReq::PATH,
            GenerateLessonReq {
                title: "Toán".into(),
                subject: "Toán".into(),
                grade: 6,
            },
        )
        .await;

    let job: GenerationJob = portal.engine().get_cloned(GenerationJob::PATH).unwrap();
    assert_eq!(job.phase, JobPhase::Failed);
    assert_eq!(job.error.as_deref(), Some("Vui lòng nhập ít nhất 2 từ"));
    assert!(job.lesson.is_none());
}

#[tokio::test(start_paused = true)]
async fn generation_passes_through_the_generating_phase() {
    let portal = signed_in().await;
    portal.engine().emit(LoadLessonsReq::PATH, LoadLessonsReq).await;

    let phases = Arc::new(Mutex::new(Vec::new()));
    {
        let phases = phases.clone();
        portal.engine().subscribe(GenerationJob::PATH, move |_, value| {
            if let Some(job) = value.downcast_ref::<GenerationJob>() {
                phases.lock().unwrap().push(job.phase);
            }
        });
    }

    portal
        .engine()
        .emit(
            GenerateLessonReq::PATH,
            GenerateLessonReq {
                title: "Định luật Ôm".into(),
                subject: "Vật lý".into(),
                grade: 9,
            },
        )
        .await;

    assert_eq!(
        phases.lock().unwrap().as_slice(),
        [JobPhase::Generating, JobPhase::Done]
    );

    let job: GenerationJob = portal.engine().get_cloned(GenerationJob::PATH).unwrap();
    let lesson = job.lesson.unwrap();
    assert_eq!(lesson.title, "Định luật Ôm");

    let list: LessonList = portal.engine().get_cloned(LessonList::PATH).unwrap();
    assert_eq!(list.count, 3);
    assert_eq!(list.rows[0].id, lesson.id);

    let toast: ToastState = portal.engine().get_cloned(ToastState::PATH).unwrap();
    assert_eq!(toast.message, "Đã tạo xong bài giảng");
}

// ========================================================================
// Settings
// ========================================================================

#[tokio::test]
async fn weak_new_password_is_rejected_per_field() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            ChangePasswordReq::PATH,
            ChangePasswordReq {
                current_password: "Admin123!".into(),
                new_password: "ngan".into(),
                confirm_password: "ngan".into(),
            },
        )
        .await;

    let state: PasswordState = portal.engine().get_cloned(PasswordState::PATH).unwrap();
    assert!(!state.changed);
    assert_eq!(state.issues.len(), 1);
    assert_eq!(state.issues[0].field, "newPassword");
    assert_eq!(state.issues[0].message, "Mật khẩu phải có ít nhất 8 ký tự");
}

#[tokio::test]
async fn mismatched_confirmation_is_rejected() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            ChangePasswordReq::PATH,
            ChangePasswordReq {
                current_password: "Admin123!".into(),
                new_password: "MatKhau@2026".into(),
                confirm_password: "MatKhau@2027".into(),
            },
        )
        .await;

    let state: PasswordState = portal.engine().get_cloned(PasswordState::PATH).unwrap();
    assert_eq!(state.issues.len(), 1);
    assert_eq!(state.issues[0].field, "confirmPassword");
    assert_eq!(state.issues[0].message, "Mật khẩu nhập lại không khớp");
}

#[tokio::test]
async fn wrong_current_password_comes_back_from_the_backend() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            ChangePasswordReq::PATH,
            ChangePasswordReq {
                current_password: "sai-mat-khau".into(),
                new_password: "MatKhau@2026".into(),
                confirm_password: "MatKhau@2026".into(),
            },
        )
        .await;

    let state: PasswordState = portal.engine().get_cloned(PasswordState::PATH).unwrap();
    assert!(!state.changed);
    assert!(state.issues.is_empty());
    assert_eq!(state.error.as_deref(), Some("Mật khẩu hiện tại không đúng"));
}

#[tokio::test]
async fn password_change_round_trips() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            ChangePasswordReq::PATH,
            ChangePasswordReq {
                current_password: "Admin123!".into(),
                new_password: "MatKhau@2026".into(),
                confirm_password: "MatKhau@2026".into(),
            },
        )
        .await;

    let state: PasswordState = portal.engine().get_cloned(PasswordState::PATH).unwrap();
    assert!(state.changed);
    assert!(state.error.is_none());

    let toast: ToastState = portal.engine().get_cloned(ToastState::PATH).unwrap();
    assert_eq!(toast.message, "Đã đổi mật khẩu");
}

#[tokio::test]
async fn saved_profile_refreshes_the_session_copy() {
    let portal = signed_in().await;
    portal
        .engine()
        .emit(
            SaveProfileReq::PATH,
            SaveProfileReq {
                full_name: "Phạm Dũng Sĩ".into(),
                email: "admin@eduva.vn".into(),
                phone: Some("0909123456".into()),
            },
        )
        .await;

    let session: SessionState = portal.engine().get_cloned(SessionState::PATH).unwrap();
    assert_eq!(
        session.profile.as_ref().map(|p| p.full_name.as_str()),
        Some("Phạm Dũng Sĩ")
    );
}

// ========================================================================
// Locale and theme
// ========================================================================

#[tokio::test]
async fn set_locale_switches_the_i18n_store() {
    let portal = initialized().await;
    assert_eq!(portal.i18n().get("ui/nav/schools"), "Trường học");

    portal
        .engine()
        .emit(SetLocaleReq::PATH, SetLocaleReq { locale: "en".into() })
        .await;

    assert_eq!(portal.i18n().get("ui/nav/schools"), "Schools");
    let locale: LocaleState = portal.engine().get_cloned(LocaleState::PATH).unwrap();
    assert_eq!(locale.locale, "en");
}

#[tokio::test]
async fn theme_toggle_reaches_signal_and_tree() {
    let portal = initialized().await;
    portal.engine().emit(ToggleThemeReq::PATH, ToggleThemeReq).await;

    assert_eq!(portal.layout().theme.get(), Theme::Dark);
    let theme: ThemeState = portal.engine().get_cloned(ThemeState::PATH).unwrap();
    assert_eq!(theme.theme, Theme::Dark);
}

// ========================================================================
// JSON boundary
// ========================================================================

#[tokio::test]
async fn snapshot_covers_the_live_portal() {
    let portal = signed_in().await;
    portal.engine().emit(LoadSchoolsReq::PATH, LoadSchoolsReq).await;

    let snap = portal.snapshot_json();
    assert_eq!(snap["auth/session"]["phase"], "authenticated");
    assert_eq!(snap["pages/schools/list"]["count"], 3);
    assert_eq!(snap["nav/route"]["url"], "/");
    assert_eq!(snap["layout/heading"], "Bảng thống kê");
    assert_eq!(snap["layout/show-date"], true);
}

#[tokio::test]
async fn wire_decoded_intents_drive_the_engine() {
    let portal = initialized().await;
    let payload = bridge::deserialize_request(NavigateReq::PATH, r#"{"url":"/teachers"}"#).unwrap();
    portal.engine().emit_shared(NavigateReq::PATH, payload).await;

    let route: RouteState = portal.engine().get_cloned(RouteState::PATH).unwrap();
    assert_eq!(route.page, pages::TEACHER_LIST);
    assert_eq!(portal.layout().heading.get(), "Danh sách giáo viên");
}
