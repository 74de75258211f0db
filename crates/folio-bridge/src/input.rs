/// A raw key identifier, named after the host's key values.
///
/// Letter keys keep their case: `Character('b')` and `Character('B')` are
/// different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Backspace,
    Character(char),
    /// Any other named key, kept verbatim.
    Other(String),
}

impl Key {
    /// Parses a host key value such as `ArrowUp`, `Escape` or `b`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" => Key::Escape,
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Character(ch),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::ArrowUp => formatter.write_str("ArrowUp"),
            Key::ArrowDown => formatter.write_str("ArrowDown"),
            Key::ArrowLeft => formatter.write_str("ArrowLeft"),
            Key::ArrowRight => formatter.write_str("ArrowRight"),
            Key::Escape => formatter.write_str("Escape"),
            Key::Enter => formatter.write_str("Enter"),
            Key::Backspace => formatter.write_str("Backspace"),
            Key::Character(ch) => write!(formatter, "{ch}"),
            Key::Other(name) => formatter.write_str(name),
        }
    }
}

/// Modifier keys held during a key-down event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Keyboard events coming from the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Any key going down, including non-printable ones.
    Down { key: Key, modifiers: Modifiers },
    /// A printable character produced by a key press.
    Press(char),
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        KeyEvent::Down {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_character_keys() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("b"), Key::Character('b'));
        assert_eq!(Key::from_name("B"), Key::Character('B'));
        assert_eq!(Key::from_name("F5"), Key::Other("F5".to_string()));
    }
}
