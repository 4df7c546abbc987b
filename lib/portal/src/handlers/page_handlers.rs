//! Data-loading handlers for the list and detail pages.
//!
//! All of them follow the same shape: mark the page loading, call the
//! backend, publish either rows or a described error.

use eduva_forms::FieldOptions;
use eduva_signals::{I18nStore, StateStore};

use crate::handlers::helpers;
use crate::request::CreateSchoolReq;
use crate::services::PortalApi;
use crate::state::{
    DashboardState, InvoiceList, LessonList, SchoolDetail, SchoolForm, SchoolList, StudentDetail,
    StudentList, TeacherDetail, TeacherList,
};

/// Handle `pages/dashboard/load`.
pub async fn handle_load_dashboard(store: &StateStore, api: &dyn PortalApi, i18n: &I18nStore) {
    store.set(
        DashboardState::PATH,
        DashboardState {
            stats: None,
            loading: true,
            error: None,
        },
    );
    match api.dashboard().await {
        Ok(stats) => store.set(
            DashboardState::PATH,
            DashboardState {
                stats: Some(stats),
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            DashboardState::PATH,
            DashboardState {
                stats: None,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/schools/load`.
pub async fn handle_load_schools(store: &StateStore, api: &dyn PortalApi, i18n: &I18nStore) {
    store.set(
        SchoolList::PATH,
        SchoolList {
            rows: Vec::new(),
            count: 0,
            loading: true,
            error: None,
        },
    );
    match api.schools().await {
        Ok(page) => store.set(
            SchoolList::PATH,
            SchoolList {
                rows: page.data,
                count: page.count,
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            SchoolList::PATH,
            SchoolList {
                rows: Vec::new(),
                count: 0,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/schools/load-detail`.
pub async fn handle_load_school_detail(
    id: &str,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    store.set(
        SchoolDetail::PATH,
        SchoolDetail {
            school: None,
            loading: true,
            error: None,
        },
    );
    match api.school(id).await {
        Ok(school) => store.set(
            SchoolDetail::PATH,
            SchoolDetail {
                school: Some(school),
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            SchoolDetail::PATH,
            SchoolDetail {
                school: None,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/schools/create`. Validates the draft, then creates
/// and prepends the new school so the list shows it without a reload.
pub async fn handle_create_school(
    req: &CreateSchoolReq,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    let draft = &req.draft;
    let mut issues = Vec::new();
    helpers::check_field(&mut issues, "name", &draft.name, &FieldOptions::new().required());
    helpers::check_field(
        &mut issues,
        "address",
        &draft.address,
        &FieldOptions::new().required(),
    );
    // Optional contacts: the rules pass on an absent or empty value.
    helpers::check_field(
        &mut issues,
        "contactEmail",
        draft.contact_email.as_deref().unwrap_or(""),
        &FieldOptions::new().email(),
    );
    helpers::check_field(
        &mut issues,
        "contactPhone",
        draft.contact_phone.as_deref().unwrap_or(""),
        &FieldOptions::new().phone(),
    );
    if let Some(first) = issues.first() {
        store.set(
            SchoolForm::PATH,
            SchoolForm {
                busy: false,
                error: Some(first.message.clone()),
            },
        );
        return;
    }

    store.set(
        SchoolForm::PATH,
        SchoolForm {
            busy: true,
            error: None,
        },
    );
    match api.create_school(draft).await {
        Ok(school) => {
            store.set(
                SchoolForm::PATH,
                SchoolForm {
                    busy: false,
                    error: None,
                },
            );
            let mut list = store
                .get_cloned::<SchoolList>(SchoolList::PATH)
                .unwrap_or(SchoolList {
                    rows: Vec::new(),
                    count: 0,
                    loading: false,
                    error: None,
                });
            list.rows.insert(0, school);
            list.count += 1;
            store.set(SchoolList::PATH, list);
            helpers::toast_success(store, "Đã thêm trường học mới");
        }
        Err(err) => {
            let message = helpers::describe(&err, i18n);
            store.set(
                SchoolForm::PATH,
                SchoolForm {
                    busy: false,
                    error: Some(message.clone()),
                },
            );
            helpers::toast_error(store, message);
        }
    }
}

/// Handle `pages/teachers/load`.
pub async fn handle_load_teachers(store: &StateStore, api: &dyn PortalApi, i18n: &I18nStore) {
    store.set(
        TeacherList::PATH,
        TeacherList {
            rows: Vec::new(),
            count: 0,
            loading: true,
            error: None,
        },
    );
    match api.teachers().await {
        Ok(page) => store.set(
            TeacherList::PATH,
            TeacherList {
                rows: page.data,
                count: page.count,
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            TeacherList::PATH,
            TeacherList {
                rows: Vec::new(),
                count: 0,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/teachers/load-detail`.
pub async fn handle_load_teacher_detail(
    id: &str,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    store.set(
        TeacherDetail::PATH,
        TeacherDetail {
            teacher: None,
            loading: true,
            error: None,
        },
    );
    match api.teacher(id).await {
        Ok(teacher) => store.set(
            TeacherDetail::PATH,
            TeacherDetail {
                teacher: Some(teacher),
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            TeacherDetail::PATH,
            TeacherDetail {
                teacher: None,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/students/load`.
pub async fn handle_load_students(store: &StateStore, api: &dyn PortalApi, i18n: &I18nStore) {
    store.set(
        StudentList::PATH,
        StudentList {
            rows: Vec::new(),
            count: 0,
            loading: true,
            error: None,
        },
    );
    match api.students().await {
        Ok(page) => store.set(
            StudentList::PATH,
            StudentList {
                rows: page.data,
                count: page.count,
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            StudentList::PATH,
            StudentList {
                rows: Vec::new(),
                count: 0,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/students/load-detail`.
pub async fn handle_load_student_detail(
    id: &str,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    store.set(
        StudentDetail::PATH,
        StudentDetail {
            student: None,
            loading: true,
            error: None,
        },
    );
    match api.student(id).await {
        Ok(student) => store.set(
            StudentDetail::PATH,
            StudentDetail {
                student: Some(student),
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            StudentDetail::PATH,
            StudentDetail {
                student: None,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/lessons/load`.
pub async fn handle_load_lessons(store: &StateStore, api: &dyn PortalApi, i18n: &I18nStore) {
    store.set(
        LessonList::PATH,
        LessonList {
            rows: Vec::new(),
            count: 0,
            loading: true,
            error: None,
        },
    );
    match api.lessons().await {
        Ok(page) => store.set(
            LessonList::PATH,
            LessonList {
                rows: page.data,
                count: page.count,
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            LessonList::PATH,
            LessonList {
                rows: Vec::new(),
                count: 0,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}

/// Handle `pages/invoices/load`.
pub async fn handle_load_invoices(store: &StateStore, api: &dyn PortalApi, i18n: &I18nStore) {
    store.set(
        InvoiceList::PATH,
        InvoiceList {
            rows: Vec::new(),
            count: 0,
            loading: true,
            error: None,
        },
    );
    match api.invoices().await {
        Ok(page) => store.set(
            InvoiceList::PATH,
            InvoiceList {
                rows: page.data,
                count: page.count,
                loading: false,
                error: None,
            },
        ),
        Err(err) => store.set(
            InvoiceList::PATH,
            InvoiceList {
                rows: Vec::new(),
                count: 0,
                loading: false,
                error: Some(helpers::describe(&err, i18n)),
            },
        ),
    }
}
