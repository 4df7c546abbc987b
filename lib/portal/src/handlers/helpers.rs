//! Small shared pieces for handler implementations.

use eduva_client::ApiError;
use eduva_forms::{render, FieldOptions, MessageOverrides, RuleSet};
use eduva_signals::{I18nStore, StateStore};

use crate::state::{FieldIssue, ToastKind, ToastState};

/// User-facing text for a backend failure. Backend messages pass
/// through untouched; transport problems map to translated strings.
pub fn describe(err: &ApiError, i18n: &I18nStore) -> String {
    match err {
        ApiError::Backend { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Backend { code, .. } => format!("Lỗi máy chủ ({code})"),
        ApiError::Http { status } if *status == 401 => i18n.get("error/auth/session_expired"),
        ApiError::Network(_) | ApiError::Http { .. } => i18n.get("error/network"),
        ApiError::Decode(_) | ApiError::MissingData => i18n.get("error/not_found"),
    }
}

/// Run one composed rule set over a submitted value; a violation pushes
/// a rendered issue under `field`.
pub fn check_field(
    issues: &mut Vec<FieldIssue>,
    field: &str,
    value: &str,
    options: &FieldOptions,
) {
    match RuleSet::compose(options) {
        Ok(rules) => {
            if let Some(violation) = rules.first_violation(value) {
                issues.push(FieldIssue::new(
                    field,
                    render(&violation, &MessageOverrides::new()),
                ));
            }
        }
        Err(err) => {
            // Only reachable with a malformed custom pattern.
            tracing::error!(field, %err, "rule composition failed");
            issues.push(FieldIssue::new(field, err.to_string()));
        }
    }
}

pub fn toast_success(store: &StateStore, message: impl Into<String>) {
    store.set(
        ToastState::PATH,
        ToastState {
            kind: ToastKind::Success,
            message: message.into(),
        },
    );
}

pub fn toast_error(store: &StateStore, message: impl Into<String>) {
    store.set(
        ToastState::PATH,
        ToastState {
            kind: ToastKind::Error,
            message: message.into(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====================================================================
    // Error surfacing
    // ====================================================================

    #[test]
    fn backend_message_passes_through() {
        let i18n = I18nStore::new("vi");
        crate::i18n::register_all(&i18n);
        let err = ApiError::Backend {
            code: 4010,
            message: "Email hoặc mật khẩu không đúng".into(),
        };
        assert_eq!(describe(&err, &i18n), "Email hoặc mật khẩu không đúng");
    }

    #[test]
    fn http_failure_maps_to_translated_text() {
        let i18n = I18nStore::new("vi");
        crate::i18n::register_all(&i18n);
        let err = ApiError::Http { status: 502 };
        assert_eq!(describe(&err, &i18n), "Không thể kết nối máy chủ");
        let expired = ApiError::Http { status: 401 };
        assert_eq!(describe(&expired, &i18n), "Phiên đăng nhập đã hết hạn");
    }

    #[test]
    fn check_field_collects_first_violation_only() {
        let mut issues = Vec::new();
        check_field(
            &mut issues,
            "email",
            "",
            &FieldOptions::new().required().email(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "email");
        assert_eq!(issues[0].message, "Trường này không được để trống");
    }

    #[test]
    fn check_field_passes_clean_values() {
        let mut issues = Vec::new();
        check_field(
            &mut issues,
            "email",
            "hoa.nguyen@cva.edu.vn",
            &FieldOptions::new().required().email(),
        );
        assert!(issues.is_empty());
    }
}
