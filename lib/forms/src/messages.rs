//! User-facing error messages.
//!
//! One message per violation: the caller's override for that rule key when
//! provided, else the built-in Vietnamese default. Messages carry a `{n}`
//! placeholder where the configured bound is interpolated.

use std::collections::HashMap;

use crate::rules::{RuleKey, Violation};

/// Built-in default message for a rule key.
pub fn default_message(key: RuleKey) -> &'static str {
    match key {
        RuleKey::Required => "Trường này không được để trống",
        RuleKey::Phone => "Số điện thoại không hợp lệ",
        RuleKey::Pattern => "Giá trị không đúng định dạng",
        RuleKey::Email => "Email không hợp lệ",
        RuleKey::MinWords => "Vui lòng nhập ít nhất {n} từ",
        RuleKey::Min => "Giá trị phải lớn hơn hoặc bằng {n}",
        RuleKey::Max => "Giá trị phải nhỏ hơn hoặc bằng {n}",
        RuleKey::MaxLength => "Không được vượt quá {n} ký tự",
        RuleKey::MinLength => "Phải có ít nhất {n} ký tự",
        RuleKey::PassTooShort => "Mật khẩu phải có ít nhất 8 ký tự",
        RuleKey::PassTooLong => "Mật khẩu không được vượt quá 18 ký tự",
        RuleKey::MissingLowercase => "Mật khẩu phải chứa ít nhất một chữ cái thường",
        RuleKey::MissingUppercase => "Mật khẩu phải chứa ít nhất một chữ cái hoa",
        RuleKey::MissingNumber => "Mật khẩu phải chứa ít nhất một chữ số",
        RuleKey::MissingSpecialChar => "Mật khẩu phải chứa ít nhất một ký tự đặc biệt",
        RuleKey::PassNotMatch => "Mật khẩu nhập lại không khớp",
    }
}

/// Caller-supplied overrides, keyed by the rule they replace the message of.
pub type MessageOverrides = HashMap<RuleKey, String>;

/// Render the message for a violation. Overrides are interpolated the same
/// way the defaults are.
pub fn render(violation: &Violation, overrides: &MessageOverrides) -> String {
    let template = overrides
        .get(&violation.key)
        .map(String::as_str)
        .unwrap_or_else(|| default_message(violation.key));
    match &violation.bound {
        Some(bound) => template.replace("{n}", bound),
        None => template.to_string(),
    }
}
