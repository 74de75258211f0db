//! Streaming recognizers for raw input events.
//!
//! Each watcher is installed once per session and incrementally matches a
//! pattern against the events it observes, keeping at most a small rolling
//! buffer between calls. Watchers never touch the store themselves; they
//! report what they recognized and the runtime applies the transition.
//!
//! Time is always passed in by the caller, which keeps idle timeouts
//! deterministic and independent of any particular timer implementation.

use std::time::Instant;

use folio_bridge::input::KeyEvent;

pub mod scroll;
pub mod sequence;
pub mod shortcut;
pub mod trigger;

/// Trait for incremental pattern recognizers over keyboard input.
///
/// Implementations are expected to:
/// - Ignore event kinds they are not interested in.
/// - Update their rolling buffer and report a recognition at most once per
///   event.
/// - Reset their buffer after a recognition so a pattern is never reported
///   twice for the same keystrokes.
pub trait Watcher {
    /// What the watcher reports when its pattern is recognized.
    type Output;

    /// Feeds one event observed at `now`.
    fn observe(&mut self, event: &KeyEvent, now: Instant) -> Option<Self::Output>;

    /// Drops any partially matched input.
    fn reset(&mut self);
}
