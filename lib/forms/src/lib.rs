//! Eduva forms — declarative validation and the reusable field control.
//!
//! A form declares what a field must satisfy as [`FieldOptions`];
//! [`RuleSet::compose`] turns that into an ordered rule list and
//! [`FieldControl`] wraps one input value with the touched/dirty/submitted
//! lifecycle, surfacing at most one message at a time.
//!
//! ```ignore
//! use eduva_forms::{FieldControl, FieldOptions};
//!
//! let mut email = FieldControl::new(FieldOptions::new().required().email())?;
//! email.input("giaovien@eduva.vn");
//! email.blur();
//! assert_eq!(email.error(), None);
//! ```
//!
//! Rule order is fixed: required → phone/pattern → email → minWords → min →
//! max → maxLength → minLength → password strength → confirmation match.
//! The first failing rule decides the message; callers may override the
//! message per rule key.

pub mod field;
pub mod messages;
pub mod options;
pub mod rules;
pub mod select;

pub use field::{FieldControl, InputMode};
pub use messages::{default_message, render, MessageOverrides};
pub use options::FieldOptions;
pub use rules::{ComposeError, RuleKey, RuleSet, Violation};
pub use select::{OptionItem, SelectControl, SEARCH_THRESHOLD};
