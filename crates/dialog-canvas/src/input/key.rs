//! Key codes understood by the text edit model

use serde::Serialize;

/// A key delivered to the focused widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Printable character
    Char(char),
    /// Anything else, passed through untouched
    Other(u32),
}

impl Key {
    /// Map a DOM-style key code.
    ///
    /// Editing keys use their `keyCode` values; every other code is read
    /// as a character code. Hosts that can tell characters from editing
    /// keys should build `Key::Char` directly instead.
    pub fn from_code(code: u32) -> Self {
        match code {
            8 => Key::Backspace,
            46 => Key::Delete,
            37 => Key::Left,
            39 => Key::Right,
            36 => Key::Home,
            35 => Key::End,
            _ => match char::from_u32(code) {
                Some(c) if !c.is_control() => Key::Char(c),
                _ => Key::Other(code),
            },
        }
    }

    /// Check if the key moves the cursor without editing
    #[inline]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Home | Key::End)
    }
}
