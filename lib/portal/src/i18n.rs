//! Portal translations, Vietnamese first with an English fallback.
//!
//! Registers all UI text with the [`I18nStore`]. Route display strings
//! (headings, breadcrumbs, titles) stay in `routes.rs`; these tables
//! cover everything else the shell renders.

use std::collections::HashMap;
use std::sync::Arc;

use eduva_signals::{I18nHandler, I18nStore, QueryParams};

/// Locale the portal boots in.
pub const DEFAULT_LOCALE: &str = "vi";

/// Register all portal translations.
pub fn register_all(i18n: &I18nStore) {
    i18n.register("ui/#", Arc::new(UiStrings::new()));
    i18n.register("error/#", Arc::new(ErrorStrings::new()));
    i18n.register("format/#", Arc::new(FormatStrings));
}

const VI: usize = 0;
const EN: usize = 1;

fn locale_index(locale: &str) -> usize {
    match locale {
        "en" | "en-US" => EN,
        _ => VI,
    }
}

// ── UI strings ──

struct UiStrings {
    data: HashMap<&'static str, [&'static str; 2]>, // [vi, en]
}

impl UiStrings {
    fn new() -> Self {
        let mut m = HashMap::new();

        // Sidebar
        m.insert("ui/nav/dashboard", ["Bảng thống kê", "Dashboard"]);
        m.insert("ui/nav/schools", ["Trường học", "Schools"]);
        m.insert("ui/nav/teachers", ["Giáo viên", "Teachers"]);
        m.insert("ui/nav/students", ["Học sinh", "Students"]);
        m.insert("ui/nav/lessons", ["Bài giảng", "Lessons"]);
        m.insert("ui/nav/invoices", ["Hóa đơn", "Invoices"]);
        m.insert("ui/nav/settings", ["Cài đặt", "Settings"]);

        // Login
        m.insert("ui/login/title", ["Đăng nhập vào EDUVA", "Sign in to EDUVA"]);
        m.insert("ui/login/email", ["Email", "Email"]);
        m.insert("ui/login/password", ["Mật khẩu", "Password"]);
        m.insert("ui/login/button", ["Đăng nhập", "Sign in"]);
        m.insert("ui/login/forgot", ["Quên mật khẩu?", "Forgot password?"]);

        // Lessons
        m.insert("ui/lessons/generate", ["Tạo bài giảng với AI", "Generate with AI"]);
        m.insert("ui/lessons/generating", ["AI đang soạn bài giảng...", "AI is drafting the lesson..."]);
        m.insert("ui/lessons/done", ["Đã tạo xong bài giảng", "Lesson generated"]);

        // Settings
        m.insert("ui/settings/profile", ["Thông tin cá nhân", "Profile"]);
        m.insert("ui/settings/password", ["Đổi mật khẩu", "Change password"]);
        m.insert("ui/settings/sign_out", ["Đăng xuất", "Sign out"]);

        // Common
        m.insert("ui/common/loading", ["Đang tải...", "Loading..."]);
        m.insert("ui/common/retry", ["Thử lại", "Retry"]);
        m.insert("ui/common/save", ["Lưu thay đổi", "Save changes"]);
        m.insert("ui/common/cancel", ["Hủy", "Cancel"]);
        m.insert("ui/common/search", ["Tìm kiếm", "Search"]);

        Self { data: m }
    }
}

impl I18nHandler for UiStrings {
    fn resolve(&self, path: &str, _args: &QueryParams, locale: &str) -> String {
        let idx = locale_index(locale);
        self.data
            .get(path)
            .map(|t| t[idx].to_string())
            .unwrap_or_else(|| path.to_string())
    }
}

// ── Error strings ──

struct ErrorStrings {
    data: HashMap<&'static str, [&'static str; 2]>,
}

impl ErrorStrings {
    fn new() -> Self {
        let mut m = HashMap::new();

        m.insert("error/auth/bad_credentials", [
            "Email hoặc mật khẩu không đúng",
            "Wrong email or password",
        ]);
        m.insert("error/auth/session_expired", [
            "Phiên đăng nhập đã hết hạn",
            "Your session has expired",
        ]);
        m.insert("error/network", [
            "Không thể kết nối máy chủ",
            "Cannot reach the server",
        ]);
        m.insert("error/not_found", [
            "Không tìm thấy dữ liệu",
            "Data not found",
        ]);
        m.insert("error/password/wrong_current", [
            "Mật khẩu hiện tại không đúng",
            "Current password is incorrect",
        ]);

        Self { data: m }
    }
}

impl I18nHandler for ErrorStrings {
    fn resolve(&self, path: &str, _args: &QueryParams, locale: &str) -> String {
        let idx = locale_index(locale);
        self.data
            .get(path)
            .map(|t| t[idx].to_string())
            .unwrap_or_else(|| path.to_string())
    }
}

// ── Format strings (dynamic content with params) ──

struct FormatStrings;

impl I18nHandler for FormatStrings {
    fn resolve(&self, path: &str, args: &QueryParams, locale: &str) -> String {
        let idx = locale_index(locale);
        match path {
            "format/lesson_count" => {
                let n = args.get("n").unwrap_or("0");
                match idx {
                    EN => format!("{n} lessons"),
                    _ => format!("{n} bài giảng"),
                }
            }
            "format/student_count" => {
                let n = args.get("n").unwrap_or("0");
                match idx {
                    EN => format!("{n} students"),
                    _ => format!("{n} học sinh"),
                }
            }
            "format/currency" => {
                let amount = args.get("amount").unwrap_or("0");
                let sep = if idx == EN { ',' } else { '.' };
                format!("{} ₫", group_digits(amount, sep))
            }
            "format/greeting" => {
                let name = args.get("name").unwrap_or("");
                match idx {
                    EN => format!("Hello, {name}"),
                    _ => format!("Xin chào, {name}"),
                }
            }
            _ => path.to_string(),
        }
    }
}

/// Thousands grouping over a plain digit string. A leading minus sign
/// survives; anything else is grouped as-is.
fn group_digits(raw: &str, sep: char) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::from(sign);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> I18nStore {
        let i18n = I18nStore::new(DEFAULT_LOCALE);
        register_all(&i18n);
        i18n
    }

    #[test]
    fn vietnamese_default() {
        let i18n = setup();
        assert_eq!(i18n.get("ui/login/button"), "Đăng nhập");
        assert_eq!(i18n.get("ui/nav/schools"), "Trường học");
        assert_eq!(
            i18n.get("error/auth/bad_credentials"),
            "Email hoặc mật khẩu không đúng"
        );
    }

    #[test]
    fn english_switch() {
        let i18n = setup();
        i18n.set_locale("en");
        assert_eq!(i18n.get("ui/login/button"), "Sign in");
        assert_eq!(i18n.get("ui/nav/schools"), "Schools");
        assert_eq!(i18n.get("error/network"), "Cannot reach the server");
    }

    #[test]
    fn unknown_locale_falls_back_to_vietnamese() {
        let i18n = setup();
        i18n.set_locale("fr");
        assert_eq!(i18n.get("ui/common/loading"), "Đang tải...");
    }

    #[test]
    fn format_counts_with_params() {
        let i18n = setup();
        assert_eq!(i18n.get("format/lesson_count?n=12"), "12 bài giảng");
        i18n.set_locale("en");
        assert_eq!(i18n.get("format/lesson_count?n=12"), "12 lessons");
    }

    #[test]
    fn currency_groups_by_locale() {
        let i18n = setup();
        assert_eq!(i18n.get("format/currency?amount=12500000"), "12.500.000 ₫");
        i18n.set_locale("en");
        assert_eq!(i18n.get("format/currency?amount=12500000"), "12,500,000 ₫");
    }

    #[test]
    fn greeting_interpolates_name() {
        let i18n = setup();
        assert_eq!(i18n.get("format/greeting?name=Dũng"), "Xin chào, Dũng");
    }

    #[test]
    fn unknown_key_returns_path() {
        let i18n = setup();
        assert_eq!(i18n.get("ui/nonexistent/key"), "ui/nonexistent/key");
    }

    #[test]
    fn group_digits_handles_edges() {
        assert_eq!(group_digits("0", '.'), "0");
        assert_eq!(group_digits("999", '.'), "999");
        assert_eq!(group_digits("1000", '.'), "1.000");
        assert_eq!(group_digits("-8000000", '.'), "-8.000.000");
    }
}
