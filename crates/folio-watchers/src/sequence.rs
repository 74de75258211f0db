use std::collections::VecDeque;
use std::time::Instant;

use folio_bridge::input::{Key, KeyEvent};

use crate::Watcher;

/// Up, up, down, down, left, right, left, right, b, a.
pub const KONAMI_SEQUENCE: [Key; 10] = [
    Key::ArrowUp,
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Character('b'),
    Key::Character('a'),
];

/// Marker reported when the full sequence was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMatched;

/// Matches a fixed key sequence against the most recent key-down events.
///
/// The window is bounded to the sequence length and drops the oldest key on
/// overflow, so a sequence typed after any amount of unrelated input still
/// matches. Comparison is exact and order-sensitive.
#[derive(Debug, Clone)]
pub struct SequenceWatcher {
    target: Vec<Key>,
    window: VecDeque<Key>,
}

impl SequenceWatcher {
    pub fn new(target: impl Into<Vec<Key>>) -> Self {
        let target = target.into();
        Self {
            window: VecDeque::with_capacity(target.len()),
            target,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI_SEQUENCE)
    }

    /// Pushes one key and reports whether the window now equals the target.
    pub fn push(&mut self, key: Key) -> bool {
        if self.target.is_empty() {
            return false;
        }

        self.window.push_back(key);
        if self.window.len() > self.target.len() {
            self.window.pop_front();
        }

        if self.window.iter().eq(self.target.iter()) {
            self.window.clear();
            return true;
        }
        false
    }
}

impl Watcher for SequenceWatcher {
    type Output = SequenceMatched;

    fn observe(&mut self, event: &KeyEvent, _now: Instant) -> Option<SequenceMatched> {
        match event {
            KeyEvent::Down { key, .. } => self.push(key.clone()).then_some(SequenceMatched),
            KeyEvent::Press(_) => None,
        }
    }

    fn reset(&mut self) {
        self.window.clear();
    }
}
