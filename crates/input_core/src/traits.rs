//! Store and host-field abstractions.
//!
//! [`InputStore`] is the editing surface a toolkit integration drives from
//! raw key and pointer input. [`TextField`] is the narrower capability a
//! guard needs: read the text, rewrite it, and replace the selection.

use crate::id::InputId;
use crate::selection::SelectionRange;

/// Editing operations a host integration performs on stored fields.
///
/// Integration layers convert their own widget ids to [`InputId`] at the
/// call boundary:
///
/// ```ignore
/// fn on_focus(widget: egui::Id, store: &mut impl InputStore) {
///     store.focus(InputId::from_raw(widget.value()));
/// }
/// ```
pub trait InputStore {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Ensure an entry exists; if missing, inserts `initial`.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    /// Called when a field gains focus.
    fn focus(&mut self, id: InputId);

    /// Called when a field loses focus.
    fn blur(&mut self, id: InputId);

    // =========================================================================
    // Editing
    // =========================================================================

    /// Overwrite the whole text; the caret moves to the end.
    fn set(&mut self, id: InputId, text: String);

    /// Insert typed text at the caret, replacing any selection.
    fn insert_text(&mut self, id: InputId, s: &str);

    /// Replace the selection (or insert at the caret); empty `s` deletes it.
    fn replace_selection(&mut self, id: InputId, s: &str);

    fn backspace(&mut self, id: InputId);

    fn delete(&mut self, id: InputId);

    // =========================================================================
    // Caret & Selection
    // =========================================================================

    fn move_caret_left(&mut self, id: InputId, selecting: bool);

    fn move_caret_right(&mut self, id: InputId, selecting: bool);

    fn move_caret_to_start(&mut self, id: InputId, selecting: bool);

    fn move_caret_to_end(&mut self, id: InputId, selecting: bool);

    fn select_all(&mut self, id: InputId);

    fn set_caret(&mut self, id: InputId, caret: usize, selecting: bool);

    // =========================================================================
    // Read-Only Getters
    // =========================================================================

    fn get(&self, id: InputId) -> Option<&str>;

    /// Returns `(text, caret, selection)` if the field exists.
    fn get_state(&self, id: InputId) -> Option<(&str, usize, Option<SelectionRange>)>;

    /// Monotonic revision counter for the field's text.
    fn revision(&self, id: InputId) -> u64;
}

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn focus(&mut self, id: InputId) {
        crate::store::InputValueStore::focus(self, id)
    }

    #[inline]
    fn blur(&mut self, id: InputId) {
        crate::store::InputValueStore::blur(self, id)
    }

    #[inline]
    fn set(&mut self, id: InputId, text: String) {
        crate::store::InputValueStore::set(self, id, text)
    }

    #[inline]
    fn insert_text(&mut self, id: InputId, s: &str) {
        crate::store::InputValueStore::insert_text(self, id, s)
    }

    #[inline]
    fn replace_selection(&mut self, id: InputId, s: &str) {
        crate::store::InputValueStore::replace_selection(self, id, s)
    }

    #[inline]
    fn backspace(&mut self, id: InputId) {
        crate::store::InputValueStore::backspace(self, id)
    }

    #[inline]
    fn delete(&mut self, id: InputId) {
        crate::store::InputValueStore::delete(self, id)
    }

    #[inline]
    fn move_caret_left(&mut self, id: InputId, selecting: bool) {
        crate::store::InputValueStore::move_caret_left(self, id, selecting)
    }

    #[inline]
    fn move_caret_right(&mut self, id: InputId, selecting: bool) {
        crate::store::InputValueStore::move_caret_right(self, id, selecting)
    }

    #[inline]
    fn move_caret_to_start(&mut self, id: InputId, selecting: bool) {
        crate::store::InputValueStore::move_caret_to_start(self, id, selecting)
    }

    #[inline]
    fn move_caret_to_end(&mut self, id: InputId, selecting: bool) {
        crate::store::InputValueStore::move_caret_to_end(self, id, selecting)
    }

    #[inline]
    fn select_all(&mut self, id: InputId) {
        crate::store::InputValueStore::select_all(self, id)
    }

    #[inline]
    fn set_caret(&mut self, id: InputId, caret: usize, selecting: bool) {
        crate::store::InputValueStore::set_caret(self, id, caret, selecting)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn get_state(&self, id: InputId) -> Option<(&str, usize, Option<SelectionRange>)> {
        crate::store::InputValueStore::get_state(self, id)
    }

    #[inline]
    fn revision(&self, id: InputId) -> u64 {
        crate::store::InputValueStore::revision(self, id)
    }
}

/// The host-field capability a guard is given.
///
/// Any toolkit's text field can implement this; the guard never sees the
/// toolkit itself.
pub trait TextField {
    /// Current text content.
    fn text(&self) -> &str;

    /// Replace the whole content.
    fn set_text(&mut self, text: &str);

    /// Current selection; collapsed at the caret when nothing is selected.
    fn selection(&self) -> SelectionRange;

    /// Replace the selection with `text`, leaving the caret after it.
    ///
    /// This is the programmatic-insertion primitive used for paste.
    fn replace_selection(&mut self, text: &str);
}

/// A [`TextField`] view of one entry in an [`InputStore`].
pub struct FieldRef<'a, S: InputStore + ?Sized> {
    store: &'a mut S,
    id: InputId,
}

impl<'a, S: InputStore + ?Sized> FieldRef<'a, S> {
    pub fn new(store: &'a mut S, id: InputId) -> Self {
        Self { store, id }
    }

    pub fn id(&self) -> InputId {
        self.id
    }
}

impl<S: InputStore + ?Sized> TextField for FieldRef<'_, S> {
    fn text(&self) -> &str {
        self.store.get(self.id).unwrap_or("")
    }

    fn set_text(&mut self, text: &str) {
        self.store.set(self.id, text.to_string());
    }

    fn selection(&self) -> SelectionRange {
        match self.store.get_state(self.id) {
            Some((_, _, Some(sel))) => sel,
            Some((_, caret, None)) => SelectionRange::collapsed(caret),
            None => SelectionRange::collapsed(0),
        }
    }

    fn replace_selection(&mut self, text: &str) {
        self.store.replace_selection(self.id, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputValueStore;

    #[test]
    fn field_ref_reads_missing_fields_as_empty() {
        let mut store = InputValueStore::new();
        let field = FieldRef::new(&mut store, InputId::from_raw(9));
        assert_eq!(field.text(), "");
        assert_eq!(field.selection(), SelectionRange::collapsed(0));
    }

    #[test]
    fn field_ref_replaces_selection_through_the_trait_object() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(2);
        store.set(id, "10.00".to_string());
        store.set_caret(id, 0, false);
        store.set_caret(id, 2, true);

        {
            let store: &mut dyn InputStore = &mut store;
            let mut field = FieldRef::new(store, id);
            assert_eq!(field.selection(), SelectionRange::new(0, 2));
            field.replace_selection("25");
            assert_eq!(field.text(), "25.00");
            assert_eq!(field.selection(), SelectionRange::collapsed(2));

            field.set_text("3");
        }
        assert_eq!(store.get_state(id), Some(("3", 1, None)));
    }
}
