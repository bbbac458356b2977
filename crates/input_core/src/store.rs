//! Central store for field text, caret positions and selections.
//!
//! The store does no layout or measuring. Hosts translate pointer and key
//! input into byte offsets and editing calls on this store.

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::state::FieldState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
use std::collections::HashMap;

/// Text, caret and selection for every field a host has registered.
///
/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "4".to_string());
/// store.focus(id);
/// store.insert_text(id, "2");
///
/// assert_eq!(store.get(id), Some("42"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    fields: HashMap<InputId, FieldState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: InputId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Returns the stored text for this field, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.fields.get(&id).map(|s| s.text.as_str())
    }

    /// Returns the caret byte index for this field, if any.
    pub fn caret(&self, id: InputId) -> Option<usize> {
        self.fields.get(&id).map(|s| s.caret)
    }

    /// Returns the non-empty selection for this field, if any.
    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        self.fields
            .get(&id)
            .and_then(|s| selection_range(&s.text, s.anchor, s.caret))
    }

    /// Returns `(text, caret, selection)` if the field exists.
    pub fn get_state(&self, id: InputId) -> Option<(&str, usize, Option<SelectionRange>)> {
        self.fields.get(&id).map(|s| {
            let sel = selection_range(&s.text, s.anchor, s.caret);
            (s.text.as_str(), s.caret, sel)
        })
    }

    /// Monotonic revision counter for the field's text.
    pub fn revision(&self, id: InputId) -> u64 {
        self.fields.get(&id).map_or(0, |s| s.revision)
    }

    /// Overwrite the text of this field.
    ///
    /// The caret moves to the end and any selection is cleared. Setting the
    /// same text again still counts as a revision.
    pub fn set(&mut self, id: InputId, text: String) {
        let st = self.fields.entry(id).or_default();
        st.caret = text.len();
        st.text = text;
        st.anchor = None;
        mark_text_dirty(st);
    }

    /// Ensure an entry exists; if missing, inserts `initial` with the caret at its end.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.fields.entry(id).or_insert_with(|| FieldState {
            caret: initial.len(),
            text: initial,
            ..FieldState::default()
        });
    }

    /// Drop the entry for a field that was detached by its host.
    pub fn remove(&mut self, id: InputId) -> Option<String> {
        self.fields.remove(&id).map(|s| s.text)
    }

    /// Clear every stored field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Called when a field gains focus. Clamps the caret and clears selection.
    pub fn focus(&mut self, id: InputId) {
        if let Some(st) = self.fields.get_mut(&id) {
            clamp_state(st);
            st.anchor = None;
        }
    }

    /// Called when a field loses focus. Clamps the caret and clears selection.
    pub fn blur(&mut self, id: InputId) {
        if let Some(st) = self.fields.get_mut(&id) {
            clamp_state(st);
            st.anchor = None;
        }
    }

    /// Insert typed text at the caret, replacing any selection.
    ///
    /// Newlines are stripped; inserting nothing leaves the field untouched.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }
        self.replace_selection(id, &s);
    }

    /// Replace the selection (or insert at the caret) with `s`.
    ///
    /// Unlike [`insert_text`](Self::insert_text), an empty `s` deletes the
    /// selection. The caret ends up after the inserted text.
    pub fn replace_selection(&mut self, id: InputId, s: &str) {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);
        let s = filter_single_line(s);

        delete_selection_if_any(st);
        if s.is_empty() {
            return;
        }

        let caret = st.caret;
        st.text.insert_str(caret, &s);
        st.caret = clamp_to_char_boundary(&st.text, caret + s.len());
        mark_text_dirty(st);
    }

    /// Delete the character before the caret, or the selection if there is one.
    pub fn backspace(&mut self, id: InputId) {
        let Some(st) = self.fields.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.text, st.caret);
        st.text.drain(prev..st.caret);
        st.caret = prev;
        mark_text_dirty(st);
    }

    /// Delete the character after the caret, or the selection if there is one.
    pub fn delete(&mut self, id: InputId) {
        let Some(st) = self.fields.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) || st.caret >= st.text.len() {
            return;
        }

        let next = next_cursor_boundary(&st.text, st.caret);
        st.text.drain(st.caret..next);
        mark_text_dirty(st);
    }

    /// Move the caret one character left; `selecting` extends the selection.
    pub fn move_caret_left(&mut self, id: InputId, selecting: bool) {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);

        let target = match selection_range(&st.text, st.anchor, st.caret) {
            Some(sel) if !selecting => sel.start,
            _ => prev_cursor_boundary(&st.text, st.caret),
        };
        set_caret_in_state(st, target, selecting);
    }

    /// Move the caret one character right; `selecting` extends the selection.
    pub fn move_caret_right(&mut self, id: InputId, selecting: bool) {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);

        let target = match selection_range(&st.text, st.anchor, st.caret) {
            Some(sel) if !selecting => sel.end,
            _ => next_cursor_boundary(&st.text, st.caret),
        };
        set_caret_in_state(st, target, selecting);
    }

    /// Move the caret to the start of the text.
    pub fn move_caret_to_start(&mut self, id: InputId, selecting: bool) {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);
        set_caret_in_state(st, 0, selecting);
    }

    /// Move the caret to the end of the text.
    pub fn move_caret_to_end(&mut self, id: InputId, selecting: bool) {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);
        let end = st.text.len();
        set_caret_in_state(st, end, selecting);
    }

    /// Select the whole text.
    pub fn select_all(&mut self, id: InputId) {
        let st = self.fields.entry(id).or_default();
        st.anchor = Some(0);
        st.caret = st.text.len();
        normalize_anchor(st);
    }

    /// Place the caret at a byte position; `selecting` extends the selection.
    pub fn set_caret(&mut self, id: InputId, caret: usize, selecting: bool) {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);
        set_caret_in_state(st, caret, selecting);
    }
}

// --- Internal helper functions ---

fn selection_range(text: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = clamp_to_char_boundary(text, anchor?);
    let caret = clamp_to_char_boundary(text, caret);
    (anchor != caret).then(|| SelectionRange::new(anchor, caret))
}

fn set_caret_in_state(st: &mut FieldState, caret: usize, selecting: bool) {
    let caret = clamp_to_char_boundary(&st.text, caret);
    if selecting {
        st.anchor.get_or_insert(st.caret);
        st.caret = caret;
        normalize_anchor(st);
    } else {
        st.caret = caret;
        st.anchor = None;
    }
}

fn normalize_anchor(st: &mut FieldState) {
    if let Some(anchor) = st.anchor {
        let anchor = clamp_to_char_boundary(&st.text, anchor);
        // A collapsed selection must not stick around as an anchor.
        st.anchor = (anchor != st.caret).then_some(anchor);
    }
}

fn delete_selection_if_any(st: &mut FieldState) -> bool {
    let Some(sel) = selection_range(&st.text, st.anchor, st.caret) else {
        st.anchor = None;
        return false;
    };

    st.text.drain(sel.start..sel.end);
    st.caret = sel.start;
    st.anchor = None;
    mark_text_dirty(st);
    true
}

fn clamp_state(st: &mut FieldState) {
    st.caret = clamp_to_char_boundary(&st.text, st.caret);
    if let Some(a) = st.anchor {
        st.anchor = Some(clamp_to_char_boundary(&st.text, a));
    }
}

fn mark_text_dirty(st: &mut FieldState) {
    st.revision = st.revision.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(text: &str) -> (InputValueStore, InputId) {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(1);
        store.set(id, text.to_string());
        store.focus(id);
        (store, id)
    }

    #[test]
    fn insert_text_strips_newlines_and_keeps_caret_on_boundary() {
        let (mut store, id) = store_with("1");
        store.insert_text(id, "2\n€");

        let v = store.get(id).unwrap();
        assert_eq!(v, "12€");
        assert_eq!(store.caret(id), Some(v.len()));
    }

    #[test]
    fn invalid_caret_is_clamped_before_insert() {
        let (mut store, id) = store_with("€");
        store.fields.get_mut(&id).unwrap().caret = 1;

        store.insert_text(id, "5");
        assert_eq!(store.get(id), Some("5€"));
        assert_eq!(store.caret(id), Some(1));
    }

    #[test]
    fn shift_arrow_selects_and_typing_replaces_the_selection() {
        let (mut store, id) = store_with("12.50");
        store.move_caret_left(id, true);
        store.move_caret_left(id, true);
        assert_eq!(store.selection(id), Some(SelectionRange::new(3, 5)));

        store.insert_text(id, "7");
        assert_eq!(store.get(id), Some("12.7"));
        assert_eq!(store.caret(id), Some(4));
        assert_eq!(store.selection(id), None);
    }

    #[test]
    fn arrow_without_shift_collapses_selection_to_its_edge() {
        let (mut store, id) = store_with("1234");
        store.select_all(id);
        store.move_caret_left(id, false);
        assert_eq!(store.caret(id), Some(0));
        assert_eq!(store.selection(id), None);

        store.select_all(id);
        store.move_caret_right(id, false);
        assert_eq!(store.caret(id), Some(4));
    }

    #[test]
    fn backspace_and_delete_remove_one_character_or_the_selection() {
        let (mut store, id) = store_with("123");
        store.move_caret_left(id, false);
        store.backspace(id);
        assert_eq!(store.get(id), Some("13"));
        assert_eq!(store.caret(id), Some(1));

        store.delete(id);
        assert_eq!(store.get(id), Some("1"));

        store.select_all(id);
        store.delete(id);
        assert_eq!(store.get(id), Some(""));

        // Nothing left to remove.
        let rev = store.revision(id);
        store.backspace(id);
        store.delete(id);
        assert_eq!(store.revision(id), rev);
    }

    #[test]
    fn replace_selection_with_empty_text_deletes_the_selection() {
        let (mut store, id) = store_with("9.99");
        store.set_caret(id, 1, false);
        store.set_caret(id, 4, true);
        store.replace_selection(id, "");
        assert_eq!(store.get(id), Some("9"));
    }

    #[test]
    fn set_bumps_revision_and_moves_caret_to_end() {
        let (mut store, id) = store_with("1");
        let rev = store.revision(id);
        store.set_caret(id, 0, false);
        store.set(id, "100.00".to_string());

        assert_eq!(store.revision(id), rev + 1);
        assert_eq!(store.get_state(id), Some(("100.00", 6, None)));
    }

    #[test]
    fn ensure_initial_does_not_clobber_existing_text() {
        let (mut store, id) = store_with("5");
        store.ensure_initial(id, "0".to_string());
        assert_eq!(store.get(id), Some("5"));

        assert_eq!(store.remove(id), Some("5".to_string()));
        assert!(!store.has(id));
    }
}
