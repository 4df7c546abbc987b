//! JSON boundary for rendering hosts.
//!
//! Shells talk to the portal in JSON: state flows out through
//! [`serialize_state`] / [`snapshot_json`], intents come back in through
//! [`deserialize_request`]. The switches below are hand-written, one
//! branch per `#[state]` / `#[request]` type; the `PATH` consts keep the
//! strings here and in the engine wiring from drifting apart.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use eduva_signals::{Engine, IntentPayload, StateValue};

use crate::layout::LayoutStores;
use crate::request::*;
use crate::state::*;

fn downcast_json<T: Serialize + 'static>(value: &StateValue) -> Option<Value> {
    value
        .downcast_ref::<T>()
        .and_then(|v| serde_json::to_value(v).ok())
}

/// JSON form of the state slot at `path`, or `None` when the path is
/// unknown or the slot holds a different type than the path promises.
pub fn state_json(path: &str, value: &StateValue) -> Option<Value> {
    if path == LocaleState::PATH {
        return downcast_json::<LocaleState>(value);
    }
    if path == ThemeState::PATH {
        return downcast_json::<ThemeState>(value);
    }
    if path == ToastState::PATH {
        return downcast_json::<ToastState>(value);
    }
    if path == SessionState::PATH {
        return downcast_json::<SessionState>(value);
    }
    if path == RouteState::PATH {
        return downcast_json::<RouteState>(value);
    }
    if path == DashboardState::PATH {
        return downcast_json::<DashboardState>(value);
    }
    if path == SchoolList::PATH {
        return downcast_json::<SchoolList>(value);
    }
    if path == SchoolDetail::PATH {
        return downcast_json::<SchoolDetail>(value);
    }
    if path == SchoolForm::PATH {
        return downcast_json::<SchoolForm>(value);
    }
    if path == TeacherList::PATH {
        return downcast_json::<TeacherList>(value);
    }
    if path == TeacherDetail::PATH {
        return downcast_json::<TeacherDetail>(value);
    }
    if path == StudentList::PATH {
        return downcast_json::<StudentList>(value);
    }
    if path == StudentDetail::PATH {
        return downcast_json::<StudentDetail>(value);
    }
    if path == LessonList::PATH {
        return downcast_json::<LessonList>(value);
    }
    if path == GenerationJob::PATH {
        return downcast_json::<GenerationJob>(value);
    }
    if path == InvoiceList::PATH {
        return downcast_json::<InvoiceList>(value);
    }
    if path == SettingsState::PATH {
        return downcast_json::<SettingsState>(value);
    }
    if path == PasswordState::PATH {
        return downcast_json::<PasswordState>(value);
    }
    None
}

/// Serialize the state slot at `path` to JSON bytes.
pub fn serialize_state(path: &str, value: &StateValue) -> Option<Vec<u8>> {
    state_json(path, value).and_then(|v| serde_json::to_vec(&v).ok())
}

fn parse<T>(json: &str) -> Option<IntentPayload>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    serde_json::from_str::<T>(json)
        .ok()
        .map(|req| Arc::new(req) as IntentPayload)
}

/// Decode a JSON intent body into the typed payload for `path`.
///
/// Unit requests ignore the body entirely, so an empty POST works.
/// Payload requests that fail to parse return `None`; the host surfaces
/// that as a bad request instead of emitting garbage.
pub fn deserialize_request(path: &str, json: &str) -> Option<IntentPayload> {
    match path {
        InitializeReq::PATH => Some(Arc::new(InitializeReq)),
        SetLocaleReq::PATH => parse::<SetLocaleReq>(json),
        ToggleThemeReq::PATH => Some(Arc::new(ToggleThemeReq)),
        LoginReq::PATH => parse::<LoginReq>(json),
        LogoutReq::PATH => Some(Arc::new(LogoutReq)),
        NavigateReq::PATH => parse::<NavigateReq>(json),
        LoadDashboardReq::PATH => Some(Arc::new(LoadDashboardReq)),
        LoadSchoolsReq::PATH => Some(Arc::new(LoadSchoolsReq)),
        LoadSchoolDetailReq::PATH => parse::<LoadSchoolDetailReq>(json),
        CreateSchoolReq::PATH => parse::<CreateSchoolReq>(json),
        LoadTeachersReq::PATH => Some(Arc::new(LoadTeachersReq)),
        LoadTeacherDetailReq::PATH => parse::<LoadTeacherDetailReq>(json),
        LoadStudentsReq::PATH => Some(Arc::new(LoadStudentsReq)),
        LoadStudentDetailReq::PATH => parse::<LoadStudentDetailReq>(json),
        LoadLessonsReq::PATH => Some(Arc::new(LoadLessonsReq)),
        GenerateLessonReq::PATH => parse::<GenerateLessonReq>(json),
        LoadInvoicesReq::PATH => Some(Arc::new(LoadInvoicesReq)),
        SaveProfileReq::PATH => parse::<SaveProfileReq>(json),
        ChangePasswordReq::PATH => parse::<ChangePasswordReq>(json),
        _ => None,
    }
}

/// One JSON object for the whole portal: every serializable state-tree
/// entry plus the layout signals under `layout/`.
///
/// Slots whose path the switch does not know are skipped rather than
/// failing the snapshot.
pub fn snapshot_json(engine: &Engine, layout: &LayoutStores) -> Value {
    let mut map = Map::new();
    for (path, value) in engine.snapshot() {
        if let Some(json) = state_json(&path, &value) {
            map.insert(path, json);
        }
    }

    map.insert("layout/heading".into(), Value::String(layout.heading.get()));
    if let Ok(trail) = serde_json::to_value(layout.breadcrumbs.get()) {
        map.insert("layout/breadcrumbs".into(), trail);
    }
    map.insert("layout/title".into(), Value::String(layout.title.get()));
    if let Ok(theme) = serde_json::to_value(layout.theme.get()) {
        map.insert("layout/theme".into(), theme);
    }
    map.insert("layout/year".into(), layout.year.get().into());
    map.insert("layout/show-date".into(), layout.show_date().into());

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====================================================================
    // State serialization
    // ====================================================================

    #[test]
    fn session_serializes_camel_case() {
        let value = StateValue::new(SessionState::anonymous());
        let json: Value =
            serde_json::from_slice(&serialize_state(SessionState::PATH, &value).unwrap()).unwrap();
        assert_eq!(json["phase"], "unauthenticated");
        assert_eq!(json["busy"], false);
        assert!(json.get("profile").is_none());
    }

    #[test]
    fn job_state_serializes_with_phase() {
        let value = StateValue::new(GenerationJob::idle());
        let json = state_json(GenerationJob::PATH, &value).unwrap();
        assert_eq!(json["phase"], "idle");
    }

    #[test]
    fn unknown_path_serializes_to_none() {
        let value = StateValue::new(SessionState::anonymous());
        assert!(serialize_state("no/such/state", &value).is_none());
    }

    #[test]
    fn type_mismatch_serializes_to_none() {
        // A slot holding the wrong type for its path is not serialized.
        let value = StateValue::new(GenerationJob::idle());
        assert!(state_json(SessionState::PATH, &value).is_none());
    }

    // ====================================================================
    // Request decoding
    // ====================================================================

    #[test]
    fn unit_requests_accept_an_empty_body() {
        for path in [
            InitializeReq::PATH,
            ToggleThemeReq::PATH,
            LogoutReq::PATH,
            LoadDashboardReq::PATH,
            LoadSchoolsReq::PATH,
            LoadTeachersReq::PATH,
            LoadStudentsReq::PATH,
            LoadLessonsReq::PATH,
            LoadInvoicesReq::PATH,
        ] {
            assert!(deserialize_request(path, "").is_some(), "path {path}");
        }
    }

    #[test]
    fn login_request_decodes_camel_case() {
        let payload = deserialize_request(
            LoginReq::PATH,
            r#"{"email":"admin@eduva.vn","password":"Admin123!"}"#,
        )
        .unwrap();
        let req = payload.downcast_ref::<LoginReq>().unwrap();
        assert_eq!(req.email, "admin@eduva.vn");
        assert_eq!(req.password, "Admin123!");
    }

    #[test]
    fn generate_request_decodes_numeric_grade() {
        let payload = deserialize_request(
            GenerateLessonReq::PATH,
            r#"{"title":"Phân số","subject":"Toán","grade":4}"#,
        )
        .unwrap();
        let req = payload.downcast_ref::<GenerateLessonReq>().unwrap();
        assert_eq!(req.grade, 4);
    }

    #[test]
    fn change_password_request_needs_all_three_fields() {
        let decoded = deserialize_request(
            ChangePasswordReq::PATH,
            r#"{"currentPassword":"a","newPassword":"b"}"#,
        );
        assert!(decoded.is_none());
    }

    #[test]
    fn malformed_body_decodes_to_none() {
        assert!(deserialize_request(LoginReq::PATH, "{not json").is_none());
        assert!(deserialize_request(NavigateReq::PATH, "{}").is_none());
    }

    #[test]
    fn unknown_request_path_decodes_to_none() {
        assert!(deserialize_request("no/such/intent", "{}").is_none());
    }

    // ====================================================================
    // Snapshot
    // ====================================================================

    #[test]
    fn snapshot_merges_tree_and_layout() {
        let engine = Engine::new();
        let layout = LayoutStores::new();
        engine.store().set(SessionState::PATH, SessionState::anonymous());
        engine.store().set(GenerationJob::PATH, GenerationJob::idle());
        // Slots the switch does not know are skipped.
        engine.store().set("internal/scratch", 7u32);

        let snap = snapshot_json(&engine, &layout);
        assert_eq!(snap["auth/session"]["phase"], "unauthenticated");
        assert_eq!(snap["pages/lessons/job"]["phase"], "idle");
        assert!(snap.get("internal/scratch").is_none());
        assert_eq!(snap["layout/theme"], "light");
        assert_eq!(snap["layout/show-date"], true);
        assert_eq!(snap["layout/breadcrumbs"][0]["label"], "Bảng thống kê");
    }

    #[test]
    fn every_state_path_has_a_serializer_branch() {
        let cases: Vec<(&str, StateValue)> = vec![
            (LocaleState::PATH, StateValue::new(LocaleState { locale: "vi".into() })),
            (ThemeState::PATH, StateValue::new(ThemeState { theme: Theme::Light })),
            (
                ToastState::PATH,
                StateValue::new(ToastState {
                    kind: ToastKind::Success,
                    message: "ok".into(),
                }),
            ),
            (SessionState::PATH, StateValue::new(SessionState::anonymous())),
            (
                RouteState::PATH,
                StateValue::new(RouteState {
                    url: "/".into(),
                    page: "dashboard".into(),
                    params: Default::default(),
                }),
            ),
            (
                DashboardState::PATH,
                StateValue::new(DashboardState {
                    stats: None,
                    loading: false,
                    error: None,
                }),
            ),
            (
                SchoolList::PATH,
                StateValue::new(SchoolList {
                    rows: vec![],
                    count: 0,
                    loading: false,
                    error: None,
                }),
            ),
            (
                SchoolDetail::PATH,
                StateValue::new(SchoolDetail {
                    school: None,
                    loading: false,
                    error: None,
                }),
            ),
            (
                SchoolForm::PATH,
                StateValue::new(SchoolForm {
                    busy: false,
                    error: None,
                }),
            ),
            (
                TeacherList::PATH,
                StateValue::new(TeacherList {
                    rows: vec![],
                    count: 0,
                    loading: false,
                    error: None,
                }),
            ),
            (
                TeacherDetail::PATH,
                StateValue::new(TeacherDetail {
                    teacher: None,
                    loading: false,
                    error: None,
                }),
            ),
            (
                StudentList::PATH,
                StateValue::new(StudentList {
                    rows: vec![],
                    count: 0,
                    loading: false,
                    error: None,
                }),
            ),
            (
                StudentDetail::PATH,
                StateValue::new(StudentDetail {
                    student: None,
                    loading: false,
                    error: None,
                }),
            ),
            (
                LessonList::PATH,
                StateValue::new(LessonList {
                    rows: vec![],
                    count: 0,
                    loading: false,
                    error: None,
                }),
            ),
            (GenerationJob::PATH, StateValue::new(GenerationJob::idle())),
            (
                InvoiceList::PATH,
                StateValue::new(InvoiceList {
                    rows: vec![],
                    count: 0,
                    loading: false,
                    error: None,
                }),
            ),
            (SettingsState::PATH, StateValue::new(SettingsState::idle())),
            (PasswordState::PATH, StateValue::new(PasswordState::idle())),
        ];
        for (path, value) in &cases {
            assert!(state_json(path, value).is_some(), "path {path}");
        }
    }
}
