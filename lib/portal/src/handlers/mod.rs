//! Handler implementations and engine wiring.
//!
//! `register_handlers` binds each typed request path to its handler,
//! wiring the payload downcast and store access per registration.

pub mod app_handlers;
pub mod auth_handlers;
pub mod helpers;
pub mod lesson_handlers;
pub mod nav_handlers;
pub mod page_handlers;
pub mod settings_handlers;

use std::sync::Arc;

use eduva_client::SharedToken;
use eduva_router::RouteTable;
use eduva_signals::{Engine, I18nStore, StateStore};

use crate::layout::LayoutStores;
use crate::request::*;
use crate::services::PortalApi;

/// Shared context every handler works against.
pub struct PortalContext {
    pub api: Arc<dyn PortalApi>,
    pub routes: RouteTable,
    pub layout: Arc<LayoutStores>,
    pub i18n: Arc<I18nStore>,
    pub token: Arc<SharedToken>,
}

/// Register all handlers with an engine.
pub fn register_handlers(engine: &Engine, ctx: Arc<PortalContext>) {
    // app/initialize
    {
        let ctx = ctx.clone();
        engine.on(InitializeReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_initialize(&store, &ctx).await;
            }
        });
    }

    // app/set-locale
    {
        let ctx = ctx.clone();
        engine.on(SetLocaleReq::PATH, move |_, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<SetLocaleReq>().unwrap();
                app_handlers::handle_set_locale(req, &store, &ctx).await;
            }
        });
    }

    // app/toggle-theme
    {
        let ctx = ctx.clone();
        engine.on(ToggleThemeReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_toggle_theme(&store, &ctx).await;
            }
        });
    }

    // nav/goto
    {
        let ctx = ctx.clone();
        engine.on(NavigateReq::PATH, move |_, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<NavigateReq>().unwrap();
                nav_handlers::handle_navigate(req, &store, &ctx).await;
            }
        });
    }

    // auth/login
    {
        let ctx = ctx.clone();
        engine.on(LoginReq::PATH, move |_, payload, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<LoginReq>().unwrap();
                auth_handlers::handle_login(req, &store, &ctx).await;
            }
        });
    }

    // auth/logout
    {
        let ctx = ctx.clone();
        engine.on(LogoutReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                auth_handlers::handle_logout(&store, &ctx).await;
            }
        });
    }

    // pages/dashboard/load
    {
        let ctx = ctx.clone();
        engine.on(LoadDashboardReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                page_handlers::handle_load_dashboard(&store, ctx.api.as_ref(), &ctx.i18n).await;
            }
        });
    }

    // pages/schools/load
    {
        let ctx = ctx.clone();
        engine.on(LoadSchoolsReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                page_handlers::handle_load_schools(&store, ctx.api.as_ref(), &ctx.i18n).await;
            }
        });
    }

    // pages/schools/load-detail
    {
        let ctx = ctx.clone();
        engine.on(
            LoadSchoolDetailReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<LoadSchoolDetailReq>().unwrap();
                    page_handlers::handle_load_school_detail(
                        &req.id,
                        &store,
                        ctx.api.as_ref(),
                        &ctx.i18n,
                    )
                    .await;
                }
            },
        );
    }

    // pages/schools/create
    {
        let ctx = ctx.clone();
        engine.on(
            CreateSchoolReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<CreateSchoolReq>().unwrap();
                    page_handlers::handle_create_school(req, &store, ctx.api.as_ref(), &ctx.i18n)
                        .await;
                }
            },
        );
    }

    // pages/teachers/load
    {
        let ctx = ctx.clone();
        engine.on(LoadTeachersReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                page_handlers::handle_load_teachers(&store, ctx.api.as_ref(), &ctx.i18n).await;
            }
        });
    }

    // pages/teachers/load-detail
    {
        let ctx = ctx.clone();
        engine.on(
            LoadTeacherDetailReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<LoadTeacherDetailReq>().unwrap();
                    page_handlers::handle_load_teacher_detail(
                        &req.id,
                        &store,
                        ctx.api.as_ref(),
                        &ctx.i18n,
                    )
                    .await;
                }
            },
        );
    }

    // pages/students/load
    {
        let ctx = ctx.clone();
        engine.on(LoadStudentsReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                page_handlers::handle_load_students(&store, ctx.api.as_ref(), &ctx.i18n).await;
            }
        });
    }

    // pages/students/load-detail
    {
        let ctx = ctx.clone();
        engine.on(
            LoadStudentDetailReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<LoadStudentDetailReq>().unwrap();
                    page_handlers::handle_load_student_detail(
                        &req.id,
                        &store,
                        ctx.api.as_ref(),
                        &ctx.i18n,
                    )
                    .await;
                }
            },
        );
    }

    // pages/lessons/load
    {
        let ctx = ctx.clone();
        engine.on(LoadLessonsReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                page_handlers::handle_load_lessons(&store, ctx.api.as_ref(), &ctx.i18n).await;
            }
        });
    }

    // pages/lessons/generate
    {
        let ctx = ctx.clone();
        engine.on(
            GenerateLessonReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<GenerateLessonReq>().unwrap();
                    lesson_handlers::handle_generate(req, &store, ctx.api.as_ref(), &ctx.i18n)
                        .await;
                }
            },
        );
    }

    // pages/invoices/load
    {
        let ctx = ctx.clone();
        engine.on(LoadInvoicesReq::PATH, move |_, _, store: Arc<StateStore>| {
            let ctx = ctx.clone();
            async move {
                page_handlers::handle_load_invoices(&store, ctx.api.as_ref(), &ctx.i18n).await;
            }
        });
    }

    // settings/save-profile
    {
        let ctx = ctx.clone();
        engine.on(
            SaveProfileReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<SaveProfileReq>().unwrap();
                    settings_handlers::handle_save_profile(req, &store, ctx.api.as_ref(), &ctx.i18n)
                        .await;
                }
            },
        );
    }

    // settings/change-password
    {
        let ctx = ctx.clone();
        engine.on(
            ChangePasswordReq::PATH,
            move |_, payload, store: Arc<StateStore>| {
                let ctx = ctx.clone();
                async move {
                    let req = payload.downcast_ref::<ChangePasswordReq>().unwrap();
                    settings_handlers::handle_change_password(
                        req,
                        &store,
                        ctx.api.as_ref(),
                        &ctx.i18n,
                    )
                    .await;
                }
            },
        );
    }
}
