//! The reusable field control.
//!
//! Owns one input value plus its `touched`/`dirty`/`submitted` flags; the
//! active error is derived on read, never stored. The binding contract is
//! bidirectional: user keystrokes ([`FieldControl::input`]) propagate out
//! through the value-changed callbacks on every edit, while external writes
//! ([`FieldControl::write`]) propagate in only while the user has not edited
//! the field yet.

use std::fmt;

use crate::messages::{render, MessageOverrides};
use crate::options::FieldOptions;
use crate::rules::{ComposeError, RuleKey, RuleSet, Violation};

/// Effective input mode of the rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Password,
}

type ChangeCallback = Box<dyn Fn(&str) + Send + Sync>;
type BlurCallback = Box<dyn Fn() + Send + Sync>;

pub struct FieldControl {
    options: FieldOptions,
    rules: RuleSet,
    overrides: MessageOverrides,
    value: String,
    dirty: bool,
    touched: bool,
    submitted: bool,
    password: bool,
    masked: bool,
    on_change: Vec<ChangeCallback>,
    on_blur: Vec<BlurCallback>,
}

impl FieldControl {
    /// A plain text field. Fails only when the options carry a pattern that
    /// does not compile.
    pub fn new(options: FieldOptions) -> Result<Self, ComposeError> {
        let rules = RuleSet::compose(&options)?;
        Ok(Self {
            options,
            rules,
            overrides: MessageOverrides::new(),
            value: String::new(),
            dirty: false,
            touched: false,
            submitted: false,
            password: false,
            masked: false,
            on_change: Vec::new(),
            on_blur: Vec::new(),
        })
    }

    /// A password field; starts masked.
    pub fn password(options: FieldOptions) -> Result<Self, ComposeError> {
        let mut control = Self::new(options)?;
        control.password = true;
        control.masked = true;
        Ok(control)
    }

    /// Replace the default message for one rule key.
    pub fn override_message(mut self, key: RuleKey, message: &str) -> Self {
        self.overrides.insert(key, message.to_string());
        self
    }

    pub fn on_value_changed(&mut self, f: impl Fn(&str) + Send + Sync + 'static) {
        self.on_change.push(Box::new(f));
    }

    pub fn on_blur(&mut self, f: impl Fn() + Send + Sync + 'static) {
        self.on_blur.push(Box::new(f));
    }

    /// Re-compose the rule set, e.g. when the confirmation target changed.
    /// Value and flags are untouched.
    pub fn set_options(&mut self, options: FieldOptions) -> Result<(), ComposeError> {
        self.rules = RuleSet::compose(&options)?;
        self.options = options;
        Ok(())
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// A user keystroke: store the value, mark dirty, notify listeners.
    pub fn input(&mut self, value: &str) {
        self.value = value.to_string();
        self.dirty = true;
        for callback in &self.on_change {
            callback(&self.value);
        }
    }

    /// An external binding write; applied only while the field is clean.
    /// Never notifies.
    pub fn write(&mut self, value: &str) {
        if self.dirty {
            return;
        }
        self.value = value.to_string();
    }

    pub fn blur(&mut self) {
        self.touched = true;
        for callback in &self.on_blur {
            callback();
        }
    }

    /// Clear value, dirty, and touched. Emits nothing.
    pub fn reset(&mut self) {
        self.value.clear();
        self.dirty = false;
        self.touched = false;
    }

    /// The enclosing form was submitted; errors may surface from now on.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    /// First failing rule for the current value, shown or not.
    pub fn violation(&self) -> Option<Violation> {
        self.rules.first_violation(&self.value)
    }

    /// The surfaced error message. `None` until the field was touched or the
    /// form submitted, and `None` while every rule passes.
    pub fn error(&self) -> Option<String> {
        if !(self.touched || self.submitted) {
            return None;
        }
        self.violation().map(|v| render(&v, &self.overrides))
    }

    /// Flip masking; the stored value is left as it is.
    pub fn toggle_mask(&mut self) {
        self.masked = !self.masked;
    }

    pub fn input_mode(&self) -> InputMode {
        if self.password && self.masked {
            InputMode::Password
        } else {
            InputMode::Text
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }
}

impl fmt::Debug for FieldControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldControl")
            .field("value", &self.value)
            .field("dirty", &self.dirty)
            .field("touched", &self.touched)
            .field("submitted", &self.submitted)
            .field("mode", &self.input_mode())
            .finish_non_exhaustive()
    }
}
