//! Binding of a [`NumericGuard`] to a host [`TextField`].

use crate::config::NumericInputConfig;
use crate::guard::{Decision, Edit, NumericGuard, Validity, Verdict};
use crate::keys::KeyPress;
use input_core::TextField;
use std::fmt;

type ValidityListener = Box<dyn FnMut(Validity)>;

/// A guard plus the glue that applies its verdicts to a field.
///
/// Handlers return the [`Decision`] so the host can cancel the native event.
/// After every handled event the field's [`Validity`] is recomputed and the
/// listener, if any, hears about changes.
pub struct NumericField {
    guard: NumericGuard,
    validity: Option<Validity>,
    listener: Option<ValidityListener>,
}

impl NumericField {
    pub fn new(config: NumericInputConfig) -> Self {
        Self {
            guard: NumericGuard::new(config),
            validity: None,
            listener: None,
        }
    }

    pub fn guard(&self) -> &NumericGuard {
        &self.guard
    }

    pub fn guard_mut(&mut self) -> &mut NumericGuard {
        &mut self.guard
    }

    /// Validity after the last handled event; `None` before the first one.
    pub fn validity(&self) -> Option<Validity> {
        self.validity
    }

    /// Register a callback for validity changes, replacing any previous one.
    pub fn set_validity_listener(&mut self, listener: impl FnMut(Validity) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_validity_listener(&mut self) {
        self.listener = None;
    }

    pub fn on_key_press(&mut self, field: &mut dyn TextField, press: &KeyPress) -> Decision {
        let verdict = self.guard.key_press(field.text(), press);
        self.apply(field, verdict)
    }

    pub fn on_key_release(&mut self, field: &mut dyn TextField) -> Decision {
        let verdict = self.guard.key_release(field.text());
        self.apply(field, verdict)
    }

    pub fn on_focus_lost(&mut self, field: &mut dyn TextField) {
        let verdict = self.guard.focus_lost(field.text());
        self.apply(field, verdict);
    }

    pub fn on_paste(&mut self, field: &mut dyn TextField, clipboard: &str) -> Decision {
        let verdict = self.guard.paste(clipboard);
        self.apply(field, verdict)
    }

    fn apply(&mut self, field: &mut dyn TextField, verdict: Verdict) -> Decision {
        match verdict.edit {
            Some(Edit::ReplaceAll(text)) => field.set_text(&text),
            Some(Edit::ReplaceSelection(text)) => field.replace_selection(&text),
            None => {}
        }
        self.refresh_validity(field.text());
        verdict.decision
    }

    fn refresh_validity(&mut self, text: &str) {
        let validity = self.guard.validity(text);
        if self.validity == Some(validity) {
            return;
        }
        log::debug!(target: "numeric_input", "validity {:?} -> {validity:?}", self.validity);
        self.validity = Some(validity);
        if let Some(listener) = self.listener.as_mut() {
            listener(validity);
        }
    }
}

impl fmt::Debug for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericField")
            .field("guard", &self.guard)
            .field("validity", &self.validity)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for NumericField {
    fn default() -> Self {
        Self::new(NumericInputConfig::default())
    }
}
