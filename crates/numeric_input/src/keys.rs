//! Semantic key model and the allow/deny tables the guard consults.
//!
//! Keys are named by what they mean, not by platform key codes. Hosts map
//! their native events onto [`LogicalKey`] once, at the binding layer.

/// A key identified by meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Backspace,
    Delete,
    Tab,
    Escape,
    Enter,
    Minus,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// Main-row `.` key.
    Period,
    /// Keypad decimal key.
    NumpadDecimal,
    /// Main-row digit, `0..=9`.
    Digit(u8),
    /// Keypad digit, `0..=9`.
    NumpadDigit(u8),
    /// ASCII letter key, stored uppercase.
    Letter(char),
    Other,
}

impl LogicalKey {
    /// The key that would type `ch` on a plain US layout without modifiers.
    ///
    /// Used when a host only reports produced text, not the key behind it.
    pub fn for_char(ch: char) -> Self {
        match ch {
            '0'..='9' => LogicalKey::Digit(ch as u8 - b'0'),
            '.' => LogicalKey::Period,
            '-' => LogicalKey::Minus,
            'a'..='z' | 'A'..='Z' => LogicalKey::Letter(ch.to_ascii_uppercase()),
            '\t' => LogicalKey::Tab,
            '\n' | '\r' => LogicalKey::Enter,
            _ => LogicalKey::Other,
        }
    }
}

/// Modifier state at the moment of a key-press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, the Windows/Super key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Either clipboard/select-all convention: Ctrl, or Cmd on macOS.
    #[inline]
    pub fn shortcut(self) -> bool {
        self.ctrl || self.meta
    }
}

/// One key-press as the guard sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: LogicalKey,
    /// The character the press produces, when the host knows it.
    pub text: Option<char>,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: LogicalKey) -> Self {
        Self {
            key,
            text: None,
            modifiers: Modifiers::NONE,
        }
    }

    /// A press reconstructed from the character it typed.
    pub fn from_char(ch: char) -> Self {
        Self {
            key: LogicalKey::for_char(ch),
            text: Some(ch),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_text(mut self, ch: char) -> Self {
        self.text = Some(ch);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// How the guard treats a key-press before looking at the field's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyClass {
    /// Produces a symbol some layouts emit for shifted digit keys.
    Denied,
    /// Editing, navigation or clipboard key; always passes.
    Control,
    /// Passes only while the field has no decimal point yet.
    DecimalPoint,
    Digit,
    Other,
}

/// Characters that are never allowed through, whatever key produced them.
pub const DENIED_CHARS: [char; 9] = ['&', '*', '(', ')', '$', '_', '^', '>', '!'];

/// Letters that pass as shortcuts with Ctrl or Cmd: select-all, copy, paste, cut.
pub const SHORTCUT_LETTERS: [char; 4] = ['A', 'C', 'V', 'X'];

/// Classify a key-press. Earlier rules win.
pub fn classify(press: &KeyPress) -> KeyClass {
    if press.text.is_some_and(|ch| DENIED_CHARS.contains(&ch)) {
        return KeyClass::Denied;
    }

    match press.key {
        LogicalKey::Backspace
        | LogicalKey::Delete
        | LogicalKey::Tab
        | LogicalKey::Escape
        | LogicalKey::Enter
        | LogicalKey::Minus
        | LogicalKey::ArrowLeft
        | LogicalKey::ArrowRight
        | LogicalKey::ArrowUp
        | LogicalKey::ArrowDown
        | LogicalKey::Home
        | LogicalKey::End => KeyClass::Control,
        LogicalKey::Letter(ch)
            if press.modifiers.shortcut() && SHORTCUT_LETTERS.contains(&ch.to_ascii_uppercase()) =>
        {
            KeyClass::Control
        }
        LogicalKey::Period | LogicalKey::NumpadDecimal => KeyClass::DecimalPoint,
        // Shifted main-row digits type symbols on most layouts.
        LogicalKey::Digit(_) if !press.modifiers.shift => KeyClass::Digit,
        LogicalKey::NumpadDigit(_) => KeyClass::Digit,
        _ => KeyClass::Other,
    }
}
