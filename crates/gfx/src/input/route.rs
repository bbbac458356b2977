use crate::input::keymap::{map_key, map_modifiers};
use egui::{Event, Key};
use input_core::{FieldRef, InputId, InputStore};
use numeric_input::{Decision, KeyPress, LogicalKey, Modifiers, NumericField};

/// What routing one frame's events did to the field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteOutcome {
    pub text_changed: bool,
    pub caret_changed: bool,
    /// Text the host should put on the clipboard after a copy or cut.
    pub copied: Option<String>,
}

/// Feed one frame of egui events for the focused field through the guard.
///
/// egui reports a printable key as `Key { pressed: true }` followed by
/// `Text`; the pair is judged as one key-press and the text is only inserted
/// when the guard allows it. `Text` with no key-down in front of it (IME
/// commits, synthetic input) is judged one character at a time.
///
/// Clipboard shortcuts arrive as `Copy`/`Cut`/`Paste` instead of key
/// events, so a Ctrl+C/X/V press is synthesized ahead of them to keep the
/// last-known-good text current for the release that follows.
pub fn route_numeric_events<S: InputStore + ?Sized>(
    events: &[Event],
    store: &mut S,
    id: InputId,
    numeric: &mut NumericField,
) -> RouteOutcome {
    let start_revision = store.revision(id);
    let mut outcome = RouteOutcome::default();

    let mut i = 0;
    while i < events.len() {
        match &events[i] {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                let typed = match events.get(i + 1) {
                    Some(Event::Text(t)) if produces_text(*key, *modifiers) => single_char(t),
                    _ => None,
                };
                let mut press = KeyPress::new(map_key(*key)).with_modifiers(map_modifiers(*modifiers));
                if let Some(ch) = typed {
                    press = press.with_text(ch);
                }

                let decision = numeric.on_key_press(&mut FieldRef::new(store, id), &press);
                if decision == Decision::Suppress {
                    log::trace!(target: "gfx.numeric", "dropped key {key:?} for {id:?}");
                } else if let Some(ch) = typed {
                    let mut buf = [0u8; 4];
                    store.insert_text(id, ch.encode_utf8(&mut buf));
                } else {
                    outcome.caret_changed |= apply_editing_key(store, id, *key, *modifiers);
                }

                if typed.is_some() {
                    i += 1;
                }
            }
            Event::Key { pressed: false, .. } => {
                numeric.on_key_release(&mut FieldRef::new(store, id));
            }
            Event::Text(t) => {
                for ch in t.chars() {
                    type_char(store, id, numeric, ch);
                }
            }
            Event::Paste(clipboard) => {
                let mut field = FieldRef::new(store, id);
                numeric.on_key_press(&mut field, &shortcut('V'));
                numeric.on_paste(&mut field, clipboard);
            }
            Event::Copy => {
                numeric.on_key_press(&mut FieldRef::new(store, id), &shortcut('C'));
                outcome.copied = Some(selected_text(store, id));
            }
            Event::Cut => {
                numeric.on_key_press(&mut FieldRef::new(store, id), &shortcut('X'));
                let text = selected_text(store, id);
                if !text.is_empty() {
                    store.replace_selection(id, "");
                }
                outcome.copied = Some(text);
            }
            _ => {}
        }
        i += 1;
    }

    outcome.text_changed = store.revision(id) != start_revision;
    outcome
}

/// Normalize the field the way focus loss does.
pub fn blur_numeric_field<S: InputStore + ?Sized>(
    store: &mut S,
    id: InputId,
    numeric: &mut NumericField,
) -> bool {
    let before = store.revision(id);
    numeric.on_focus_lost(&mut FieldRef::new(store, id));
    store.revision(id) != before
}

fn type_char<S: InputStore + ?Sized>(
    store: &mut S,
    id: InputId,
    numeric: &mut NumericField,
    ch: char,
) {
    let press = KeyPress::from_char(ch);
    let mut field = FieldRef::new(store, id);
    if numeric.on_key_press(&mut field, &press) == Decision::Suppress {
        log::trace!(target: "gfx.numeric", "dropped text {ch:?} for {id:?}");
        return;
    }
    let mut buf = [0u8; 4];
    store.insert_text(id, ch.encode_utf8(&mut buf));
    numeric.on_key_release(&mut FieldRef::new(store, id));
}

fn apply_editing_key<S: InputStore + ?Sized>(
    store: &mut S,
    id: InputId,
    key: Key,
    modifiers: egui::Modifiers,
) -> bool {
    match key {
        Key::Backspace => store.backspace(id),
        Key::Delete => store.delete(id),
        Key::ArrowLeft => store.move_caret_left(id, modifiers.shift),
        Key::ArrowRight => store.move_caret_right(id, modifiers.shift),
        Key::Home => store.move_caret_to_start(id, modifiers.shift),
        Key::End => store.move_caret_to_end(id, modifiers.shift),
        Key::A if modifiers.command || modifiers.ctrl => store.select_all(id),
        _ => return false,
    }
    // Backspace/Delete are reported through the revision.
    !matches!(key, Key::Backspace | Key::Delete)
}

/// Keys whose press is followed by a `Text` event egui emits for it.
fn produces_text(key: Key, modifiers: egui::Modifiers) -> bool {
    if modifiers.ctrl || modifiers.command || modifiers.mac_cmd {
        return false;
    }
    !matches!(
        map_key(key),
        LogicalKey::Backspace
            | LogicalKey::Delete
            | LogicalKey::Tab
            | LogicalKey::Escape
            | LogicalKey::Enter
            | LogicalKey::ArrowLeft
            | LogicalKey::ArrowRight
            | LogicalKey::ArrowUp
            | LogicalKey::ArrowDown
            | LogicalKey::Home
            | LogicalKey::End
    )
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn shortcut(letter: char) -> KeyPress {
    KeyPress::new(LogicalKey::Letter(letter)).with_modifiers(Modifiers::CTRL)
}

fn selected_text<S: InputStore + ?Sized>(store: &S, id: InputId) -> String {
    store
        .get_state(id)
        .and_then(|(text, _, selection)| selection.map(|sel| sel.slice(text).to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_core::InputValueStore;
    use numeric_input::NumericInputConfig;

    const FIELD: InputId = InputId::from_raw(7);

    fn key_event(key: Key, pressed: bool, modifiers: egui::Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers,
        }
    }

    /// The events egui emits for one printable keystroke.
    fn keystroke(key: Key, text: &str, modifiers: egui::Modifiers) -> Vec<Event> {
        vec![
            key_event(key, true, modifiers),
            Event::Text(text.to_string()),
            key_event(key, false, modifiers),
        ]
    }

    fn setup(initial: &str, config: NumericInputConfig) -> (InputValueStore, NumericField) {
        let mut store = InputValueStore::new();
        store.ensure_initial(FIELD, initial.to_string());
        store.focus(FIELD);
        (store, NumericField::new(config))
    }

    #[test]
    fn allowed_digit_is_inserted() {
        let (mut store, mut numeric) = setup("1", NumericInputConfig::new());
        let events = keystroke(Key::Num2, "2", egui::Modifiers::NONE);

        let outcome = route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert!(outcome.text_changed);
        assert_eq!(store.get(FIELD), Some("12"));
    }

    #[test]
    fn shifted_digit_symbol_is_dropped() {
        let (mut store, mut numeric) = setup("1", NumericInputConfig::new());
        let mut events = keystroke(Key::Num7, "&", egui::Modifiers::SHIFT);
        events.extend(keystroke(Key::Num5, "%", egui::Modifiers::SHIFT));
        events.extend(keystroke(Key::Minus, "_", egui::Modifiers::SHIFT));

        let outcome = route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert!(!outcome.text_changed);
        assert_eq!(store.get(FIELD), Some("1"));
    }

    #[test]
    fn second_decimal_point_is_dropped() {
        let (mut store, mut numeric) = setup("", NumericInputConfig::new());
        let mut events = keystroke(Key::Num3, "3", egui::Modifiers::NONE);
        events.extend(keystroke(Key::Period, ".", egui::Modifiers::NONE));
        events.extend(keystroke(Key::Num1, "1", egui::Modifiers::NONE));
        events.extend(keystroke(Key::Period, ".", egui::Modifiers::NONE));

        route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert_eq!(store.get(FIELD), Some("3.1"));
    }

    #[test]
    fn release_reverts_out_of_range_keystroke() {
        let (mut store, mut numeric) =
            setup("100", NumericInputConfig::new().with_range(0.0, 100.0));
        let events = keystroke(Key::Num0, "0", egui::Modifiers::NONE);

        let outcome = route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert!(outcome.text_changed);
        assert_eq!(store.get(FIELD), Some("100"));
    }

    #[test]
    fn editing_keys_reach_the_store() {
        let (mut store, mut numeric) = setup("123", NumericInputConfig::new());
        let events = vec![
            key_event(Key::ArrowLeft, true, egui::Modifiers::NONE),
            key_event(Key::ArrowLeft, false, egui::Modifiers::NONE),
            key_event(Key::Backspace, true, egui::Modifiers::NONE),
            key_event(Key::Backspace, false, egui::Modifiers::NONE),
        ];

        let outcome = route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert!(outcome.caret_changed);
        assert!(outcome.text_changed);
        assert_eq!(store.get(FIELD), Some("13"));
    }

    #[test]
    fn backspace_below_min_is_reverted() {
        let (mut store, mut numeric) = setup("15", NumericInputConfig::new().with_min(10.0));
        let events = vec![
            key_event(Key::Backspace, true, egui::Modifiers::NONE),
            key_event(Key::Backspace, false, egui::Modifiers::NONE),
        ];

        route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert_eq!(store.get(FIELD), Some("15"));
    }

    #[test]
    fn select_all_then_digit_replaces_text() {
        let (mut store, mut numeric) = setup("987", NumericInputConfig::new());
        let mut events = vec![
            key_event(Key::A, true, egui::Modifiers::COMMAND),
            key_event(Key::A, false, egui::Modifiers::COMMAND),
        ];
        events.extend(keystroke(Key::Num4, "4", egui::Modifiers::NONE));

        route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert_eq!(store.get(FIELD), Some("4"));
    }

    #[test]
    fn bare_text_is_judged_per_character() {
        let (mut store, mut numeric) = setup("", NumericInputConfig::new());
        let events = vec![Event::Text("4a.5.!6".to_string())];

        route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert_eq!(store.get(FIELD), Some("4.56"));
    }

    #[test]
    fn paste_is_cleaned_and_scaled() {
        let (mut store, mut numeric) = setup("", NumericInputConfig::new().with_scale(2));
        let events = vec![
            Event::Paste("12.345.6".to_string()),
            key_event(Key::V, false, egui::Modifiers::COMMAND),
        ];

        let outcome = route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert!(outcome.text_changed);
        assert_eq!(store.get(FIELD), Some("12.34"));
    }

    #[test]
    fn out_of_range_paste_is_reverted_on_release() {
        let (mut store, mut numeric) =
            setup("5", NumericInputConfig::new().with_range(0.0, 10.0));
        store.select_all(FIELD);
        let events = vec![
            Event::Paste("250".to_string()),
            key_event(Key::V, false, egui::Modifiers::COMMAND),
        ];

        route_numeric_events(&events, &mut store, FIELD, &mut numeric);

        assert_eq!(store.get(FIELD), Some("5"));
    }

    #[test]
    fn copy_and_cut_report_the_selection() {
        let (mut store, mut numeric) = setup("42", NumericInputConfig::new());
        store.select_all(FIELD);

        let outcome = route_numeric_events(&[Event::Copy], &mut store, FIELD, &mut numeric);
        assert_eq!(outcome.copied.as_deref(), Some("42"));
        assert!(!outcome.text_changed);

        let outcome = route_numeric_events(&[Event::Cut], &mut store, FIELD, &mut numeric);
        assert_eq!(outcome.copied.as_deref(), Some("42"));
        assert!(outcome.text_changed);
        assert_eq!(store.get(FIELD), Some(""));
    }

    #[test]
    fn blur_normalizes_to_scale() {
        let (mut store, mut numeric) = setup("3.14159", NumericInputConfig::new().with_scale(2));

        assert!(blur_numeric_field(&mut store, FIELD, &mut numeric));
        assert_eq!(store.get(FIELD), Some("3.14"));
        assert!(!blur_numeric_field(&mut store, FIELD, &mut numeric));
    }
}
