use std::time::Instant;

use folio_bridge::input::{Key, KeyEvent};

use crate::Watcher;

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K / Cmd+K.
    ToggleCommandPalette,
    /// Escape closes whatever overlay is on top.
    Dismiss,
}

/// Recognizes single-chord shortcuts. Holds no buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutWatcher;

impl Watcher for ShortcutWatcher {
    type Output = Shortcut;

    fn observe(&mut self, event: &KeyEvent, _now: Instant) -> Option<Shortcut> {
        let KeyEvent::Down { key, modifiers } = event else {
            return None;
        };

        match key {
            Key::Character('k' | 'K') if modifiers.command() => {
                Some(Shortcut::ToggleCommandPalette)
            }
            Key::Escape => Some(Shortcut::Dismiss),
            _ => None,
        }
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use folio_bridge::input::Modifiers;

    use super::*;

    fn observe(event: KeyEvent) -> Option<Shortcut> {
        ShortcutWatcher.observe(&event, Instant::now())
    }

    #[test]
    fn command_k_toggles_the_palette() {
        let ctrl_k = KeyEvent::Down {
            key: Key::Character('k'),
            modifiers: Modifiers::CTRL,
        };
        let meta_k = KeyEvent::Down {
            key: Key::Character('k'),
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::NONE
            },
        };
        assert_eq!(observe(ctrl_k), Some(Shortcut::ToggleCommandPalette));
        assert_eq!(observe(meta_k), Some(Shortcut::ToggleCommandPalette));
    }

    #[test]
    fn plain_k_is_just_typing() {
        assert_eq!(observe(KeyEvent::down(Key::Character('k'))), None);
        assert_eq!(observe(KeyEvent::Press('k')), None);
    }

    #[test]
    fn escape_dismisses() {
        assert_eq!(observe(KeyEvent::down(Key::Escape)), Some(Shortcut::Dismiss));
    }
}
