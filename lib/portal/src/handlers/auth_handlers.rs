//! Auth handler implementations.

use eduva_signals::StateStore;

use crate::handlers::{helpers, nav_handlers, PortalContext};
use crate::request::LoginReq;
use crate::state::{
    AuthPhase, DashboardState, GenerationJob, InvoiceList, LessonList, PasswordState,
    SchoolDetail, SchoolForm, SchoolList, SessionState, SettingsState, StudentDetail, StudentList,
    TeacherDetail, TeacherList,
};

/// Handle `auth/login`.
pub async fn handle_login(req: &LoginReq, store: &StateStore, ctx: &PortalContext) {
    store.set(
        SessionState::PATH,
        SessionState {
            phase: AuthPhase::Unauthenticated,
            profile: None,
            busy: true,
            error: None,
        },
    );

    match ctx.api.login(&req.email, &req.password).await {
        Ok(data) => {
            ctx.token.set(&data.access_token);
            tracing::info!(staff = %data.profile.id, "login ok");
            store.set(
                SessionState::PATH,
                SessionState {
                    phase: AuthPhase::Authenticated,
                    profile: Some(data.profile),
                    busy: false,
                    error: None,
                },
            );
            nav_handlers::apply_navigation("/", store, ctx);
        }
        Err(err) => {
            tracing::debug!(%err, "login refused");
            store.set(
                SessionState::PATH,
                SessionState {
                    phase: AuthPhase::Unauthenticated,
                    profile: None,
                    busy: false,
                    error: Some(helpers::describe(&err, &ctx.i18n)),
                },
            );
        }
    }
}

/// Handle `auth/logout`. Drops the token, resets the session, removes
/// every per-page state, and lands on the login page.
pub async fn handle_logout(store: &StateStore, ctx: &PortalContext) {
    ctx.token.clear();
    store.set(SessionState::PATH, SessionState::anonymous());
    for path in [
        DashboardState::PATH,
        SchoolList::PATH,
        SchoolDetail::PATH,
        SchoolForm::PATH,
        TeacherList::PATH,
        TeacherDetail::PATH,
        StudentList::PATH,
        StudentDetail::PATH,
        LessonList::PATH,
        InvoiceList::PATH,
        SettingsState::PATH,
        PasswordState::PATH,
    ] {
        store.remove(path);
    }
    store.set(GenerationJob::PATH, GenerationJob::idle());
    nav_handlers::apply_navigation("/login", store, ctx);
}
