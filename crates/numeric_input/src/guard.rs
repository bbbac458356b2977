//! The numeric entry guard.
//!
//! A guard sees four events and answers each with a [`Verdict`]: whether the
//! host should let the native effect happen, and what text edit to apply.
//! It never touches the field itself; see [`NumericField`](crate::NumericField)
//! for the binding that does.

use crate::config::NumericInputConfig;
use crate::keys::{KeyClass, KeyPress, classify};
use crate::number::{parse_float, to_fixed, to_number};
use crate::paste::paste_text;

const LOG_TARGET: &str = "numeric_input";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Cancel the native effect of the event.
    Suppress,
}

/// A text change the host should apply to the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Replace the whole content.
    ReplaceAll(String),
    /// Replace the selection (or insert at the caret).
    ReplaceSelection(String),
}

/// What the host does in response to one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub edit: Option<Edit>,
}

impl Verdict {
    pub const fn allow() -> Self {
        Self {
            decision: Decision::Allow,
            edit: None,
        }
    }

    pub const fn suppress() -> Self {
        Self {
            decision: Decision::Suppress,
            edit: None,
        }
    }

    pub fn with_edit(mut self, edit: Edit) -> Self {
        self.edit = Some(edit);
        self
    }

    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.decision == Decision::Suppress
    }
}

/// How a field's text currently stands against the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    /// Nothing but whitespace.
    Empty,
    Valid,
    OutOfRange,
    /// Text without a numeric prefix, e.g. a lone `-`.
    NotANumber,
}

/// State carried from a key-press to the matching key-release.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeystrokeState {
    /// Field content just before the latest key-press was applied.
    pub last_good_text: String,
}

/// Keeps a text field numeric, bounded and normalized.
#[derive(Clone, Debug, Default)]
pub struct NumericGuard {
    config: NumericInputConfig,
    keystroke: KeystrokeState,
}

impl NumericGuard {
    pub fn new(config: NumericInputConfig) -> Self {
        Self {
            config,
            keystroke: KeystrokeState::default(),
        }
    }

    pub fn config(&self) -> &NumericInputConfig {
        &self.config
    }

    /// Change bounds or precision; the next event uses the new values.
    pub fn config_mut(&mut self) -> &mut NumericInputConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: NumericInputConfig) {
        self.config = config;
    }

    pub fn keystroke(&self) -> &KeystrokeState {
        &self.keystroke
    }

    /// Decide whether a key-press may reach a field holding `current`.
    ///
    /// Always records `current` as the last known good text first.
    pub fn key_press(&mut self, current: &str, press: &KeyPress) -> Verdict {
        self.keystroke.last_good_text.clear();
        self.keystroke.last_good_text.push_str(current);

        let verdict = match classify(press) {
            KeyClass::Control => Verdict::allow(),
            KeyClass::DecimalPoint if current.contains('.') => Verdict::suppress(),
            KeyClass::DecimalPoint | KeyClass::Digit => Verdict::allow(),
            KeyClass::Denied | KeyClass::Other => Verdict::suppress(),
        };

        if verdict.is_suppressed() {
            log::trace!(target: LOG_TARGET, "suppressed key {press:?} on {current:?}");
        }
        verdict
    }

    /// Check the field after a keystroke landed and revert it when out of range.
    pub fn key_release(&self, current: &str) -> Verdict {
        let value = parse_float(current);
        let revert = if value.is_nan() {
            self.config.revert_unparseable && !current.trim().is_empty()
        } else {
            self.config.is_out_of_range(value)
        };

        if !revert || current == self.keystroke.last_good_text {
            return Verdict::allow();
        }

        log::debug!(
            target: LOG_TARGET,
            "reverting {current:?} to {:?}",
            self.keystroke.last_good_text
        );
        Verdict::suppress().with_edit(Edit::ReplaceAll(self.keystroke.last_good_text.clone()))
    }

    /// Normalize the field to the configured scale when it loses focus.
    pub fn focus_lost(&self, current: &str) -> Verdict {
        let normalized = self.normalize(current);
        if normalized == current {
            return Verdict::allow();
        }
        log::debug!(target: LOG_TARGET, "normalized {current:?} to {normalized:?}");
        Verdict::allow().with_edit(Edit::ReplaceAll(normalized))
    }

    /// Replace a native paste with the cleaned, scaled clipboard text.
    pub fn paste(&self, clipboard: &str) -> Verdict {
        let text = paste_text(clipboard, self.config.fraction_digits());
        log::trace!(target: LOG_TARGET, "paste {clipboard:?} becomes {text:?}");
        Verdict::suppress().with_edit(Edit::ReplaceSelection(text))
    }

    /// The text `current` becomes on focus loss.
    pub fn normalize(&self, current: &str) -> String {
        to_fixed(to_number(current), self.config.fraction_digits())
    }

    pub fn validity(&self, current: &str) -> Validity {
        if current.trim().is_empty() {
            return Validity::Empty;
        }
        let value = parse_float(current);
        if value.is_nan() {
            Validity::NotANumber
        } else if self.config.is_out_of_range(value) {
            Validity::OutOfRange
        } else {
            Validity::Valid
        }
    }
}
