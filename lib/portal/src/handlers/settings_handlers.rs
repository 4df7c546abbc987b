//! Settings handler implementations.
//!
//! Both forms validate with the composed rule sets before any backend
//! call; the backend never sees a submission the UI would reject.

use eduva_forms::FieldOptions;
use eduva_signals::{I18nStore, StateStore};

use crate::handlers::helpers;
use crate::model::ProfileDraft;
use crate::request::{ChangePasswordReq, SaveProfileReq};
use crate::services::PortalApi;
use crate::state::{PasswordState, SessionState, SettingsState};

/// Handle `settings/save-profile`.
pub async fn handle_save_profile(
    req: &SaveProfileReq,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    let mut issues = Vec::new();
    helpers::check_field(
        &mut issues,
        "fullName",
        &req.full_name,
        &FieldOptions::new().required().min_words(2),
    );
    helpers::check_field(
        &mut issues,
        "email",
        &req.email,
        &FieldOptions::new().required().email(),
    );
    helpers::check_field(
        &mut issues,
        "phone",
        req.phone.as_deref().unwrap_or(""),
        &FieldOptions::new().phone(),
    );
    if !issues.is_empty() {
        store.set(
            SettingsState::PATH,
            SettingsState {
                busy: false,
                issues,
                error: None,
            },
        );
        return;
    }

    store.set(
        SettingsState::PATH,
        SettingsState {
            busy: true,
            issues: Vec::new(),
            error: None,
        },
    );
    let draft = ProfileDraft {
        full_name: req.full_name.trim().to_string(),
        email: req.email.clone(),
        phone: req.phone.clone(),
    };
    match api.save_profile(&draft).await {
        Ok(profile) => {
            store.set(SettingsState::PATH, SettingsState::idle());
            // The header greets by name; refresh the session copy.
            if let Some(mut session) = store.get_cloned::<SessionState>(SessionState::PATH) {
                session.profile = Some(profile);
                store.set(SessionState::PATH, session);
            }
            helpers::toast_success(store, "Đã lưu thông tin cá nhân");
        }
        Err(err) => {
            let message = helpers::describe(&err, i18n);
            store.set(
                SettingsState::PATH,
                SettingsState {
                    busy: false,
                    issues: Vec::new(),
                    error: Some(message.clone()),
                },
            );
            helpers::toast_error(store, message);
        }
    }
}

/// Handle `settings/change-password`.
pub async fn handle_change_password(
    req: &ChangePasswordReq,
    store: &StateStore,
    api: &dyn PortalApi,
    i18n: &I18nStore,
) {
    let mut issues = Vec::new();
    helpers::check_field(
        &mut issues,
        "currentPassword",
        &req.current_password,
        &FieldOptions::new().required(),
    );
    helpers::check_field(
        &mut issues,
        "newPassword",
        &req.new_password,
        &FieldOptions::new().required().validate_password(),
    );
    helpers::check_field(
        &mut issues,
        "confirmPassword",
        &req.confirm_password,
        &FieldOptions::new()
            .required()
            .confirm_password(&req.new_password),
    );
    if !issues.is_empty() {
        store.set(
            PasswordState::PATH,
            PasswordState {
                busy: false,
                changed: false,
                issues,
                error: None,
            },
        );
        return;
    }

    store.set(
        PasswordState::PATH,
        PasswordState {
            busy: true,
            changed: false,
            issues: Vec::new(),
            error: None,
        },
    );
    match api.change_password(&req.current_password, &req.new_password).await {
        Ok(()) => {
            tracing::info!("password changed");
            store.set(
                PasswordState::PATH,
                PasswordState {
                    busy: false,
                    changed: true,
                    issues: Vec::new(),
                    error: None,
                },
            );
            helpers::toast_success(store, "Đã đổi mật khẩu");
        }
        Err(err) => {
            let message = helpers::describe(&err, i18n);
            store.set(
                PasswordState::PATH,
                PasswordState {
                    busy: false,
                    changed: false,
                    issues: Vec::new(),
                    error: Some(message.clone()),
                },
            );
            helpers::toast_error(store, message);
        }
    }
}
