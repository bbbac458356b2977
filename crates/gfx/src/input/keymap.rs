use egui::Key;
use numeric_input::{LogicalKey, Modifiers};

/// Name an egui key by meaning.
///
/// egui folds keypad keys into the main-row variants, so keypad digits and
/// the keypad decimal arrive here as `Num*` and `Period`.
pub fn map_key(key: Key) -> LogicalKey {
    match key {
        Key::Backspace => LogicalKey::Backspace,
        Key::Delete => LogicalKey::Delete,
        Key::Tab => LogicalKey::Tab,
        Key::Escape => LogicalKey::Escape,
        Key::Enter => LogicalKey::Enter,
        Key::Minus => LogicalKey::Minus,
        Key::ArrowLeft => LogicalKey::ArrowLeft,
        Key::ArrowRight => LogicalKey::ArrowRight,
        Key::ArrowUp => LogicalKey::ArrowUp,
        Key::ArrowDown => LogicalKey::ArrowDown,
        Key::Home => LogicalKey::Home,
        Key::End => LogicalKey::End,
        Key::Period => LogicalKey::Period,
        Key::Num0 => LogicalKey::Digit(0),
        Key::Num1 => LogicalKey::Digit(1),
        Key::Num2 => LogicalKey::Digit(2),
        Key::Num3 => LogicalKey::Digit(3),
        Key::Num4 => LogicalKey::Digit(4),
        Key::Num5 => LogicalKey::Digit(5),
        Key::Num6 => LogicalKey::Digit(6),
        Key::Num7 => LogicalKey::Digit(7),
        Key::Num8 => LogicalKey::Digit(8),
        Key::Num9 => LogicalKey::Digit(9),
        other => letter_key(other),
    }
}

fn letter_key(key: Key) -> LogicalKey {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => {
            LogicalKey::Letter(ch.to_ascii_uppercase())
        }
        _ => LogicalKey::Other,
    }
}

/// `command` without `mac_cmd` is Ctrl on non-Mac platforms.
pub fn map_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl || (modifiers.command && !modifiers.mac_cmd),
        alt: modifiers.alt,
        meta: modifiers.mac_cmd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_punctuation_map_by_meaning() {
        assert_eq!(map_key(Key::Num0), LogicalKey::Digit(0));
        assert_eq!(map_key(Key::Num7), LogicalKey::Digit(7));
        assert_eq!(map_key(Key::Period), LogicalKey::Period);
        assert_eq!(map_key(Key::Minus), LogicalKey::Minus);
        assert_eq!(map_key(Key::Home), LogicalKey::Home);
    }

    #[test]
    fn letters_map_uppercase_and_the_rest_is_other() {
        assert_eq!(map_key(Key::A), LogicalKey::Letter('A'));
        assert_eq!(map_key(Key::V), LogicalKey::Letter('V'));
        assert_eq!(map_key(Key::F1), LogicalKey::Other);
        assert_eq!(map_key(Key::Space), LogicalKey::Other);
        assert_eq!(map_key(Key::Comma), LogicalKey::Other);
    }

    #[test]
    fn mac_command_becomes_meta() {
        let mapped = map_modifiers(egui::Modifiers {
            mac_cmd: true,
            command: true,
            ..egui::Modifiers::NONE
        });
        assert!(mapped.meta);
        assert!(!mapped.ctrl);

        let mapped = map_modifiers(egui::Modifiers::CTRL);
        assert!(mapped.ctrl);
        assert!(!mapped.meta);
        assert!(mapped.shortcut());

        assert!(map_modifiers(egui::Modifiers::COMMAND).ctrl);
    }
}
