use std::time::{Duration, Instant};

use folio_bridge::input::KeyEvent;

use crate::Watcher;

/// Default idle time after which a partially typed trigger is forgotten.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Marker reported when the trigger word appeared in the typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerTyped;

/// Detects a trigger word typed anywhere, e.g. inside "xterminalx".
///
/// Characters accumulate until either the buffer contains the trigger or the
/// typist stays idle for the timeout. A keystroke arriving after the timeout
/// first applies the pending clear and only then is checked, so stale
/// fragments never complete a trigger.
#[derive(Debug, Clone)]
pub struct TriggerWatcher {
    trigger: String,
    idle_timeout: Duration,
    buffer: String,
    last_keystroke: Option<Instant>,
}

impl TriggerWatcher {
    pub fn new(trigger: impl Into<String>, idle_timeout: Duration) -> Self {
        Self {
            trigger: trigger.into(),
            idle_timeout,
            buffer: String::new(),
            last_keystroke: None,
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Text typed since the last reset.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    fn is_idle(&self, now: Instant) -> bool {
        self.last_keystroke
            .is_some_and(|last| now.saturating_duration_since(last) >= self.idle_timeout)
    }

    /// Appends one typed character and reports whether the trigger appeared.
    pub fn push(&mut self, ch: char, now: Instant) -> bool {
        if self.trigger.is_empty() {
            return false;
        }

        if self.is_idle(now) {
            self.buffer.clear();
        }
        self.last_keystroke = Some(now);
        self.buffer.push(ch);

        if self.buffer.contains(self.trigger.as_str()) {
            self.reset();
            return true;
        }

        // Any future match has to end at a future keystroke, so only the last
        // `trigger.len() - 1` characters can still take part in it.
        let keep = self.trigger.chars().count() - 1;
        let excess = self.buffer.chars().count().saturating_sub(keep);
        if excess > 0 {
            let cut = self
                .buffer
                .char_indices()
                .nth(excess)
                .map_or(self.buffer.len(), |(index, _)| index);
            self.buffer.drain(..cut);
        }
        false
    }

    /// Timer-driven clear. Empties the buffer if the typist has been idle
    /// for the full timeout at `now`; returns whether anything was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if !self.is_idle(now) || self.buffer.is_empty() {
            return false;
        }
        self.buffer.clear();
        true
    }
}

impl Watcher for TriggerWatcher {
    type Output = TriggerTyped;

    fn observe(&mut self, event: &KeyEvent, now: Instant) -> Option<TriggerTyped> {
        match event {
            KeyEvent::Press(ch) => self.push(*ch, now).then_some(TriggerTyped),
            KeyEvent::Down { .. } => None,
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.last_keystroke = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    /// Types `text` one character per `STEP` starting at `start` and returns
    /// the number of matches together with the time of the last keystroke.
    fn type_text(watcher: &mut TriggerWatcher, text: &str, start: Instant) -> (usize, Instant) {
        let mut now = start;
        let mut matches = 0;
        for ch in text.chars() {
            if watcher.push(ch, now) {
                matches += 1;
            }
            now += STEP;
        }
        (matches, now - STEP)
    }

    fn terminal_watcher() -> TriggerWatcher {
        TriggerWatcher::new("terminal", DEFAULT_IDLE_TIMEOUT)
    }

    #[test]
    fn embedded_trigger_matches_once() {
        let mut watcher = terminal_watcher();
        let (matches, _) = type_text(&mut watcher, "xterminalx", Instant::now());
        assert_eq!(matches, 1);
        assert_eq!(watcher.pending(), "x");
    }

    #[test]
    fn one_character_short_never_matches() {
        let mut watcher = terminal_watcher();
        let (matches, _) = type_text(&mut watcher, "termina", Instant::now());
        assert_eq!(matches, 0);
        assert_eq!(watcher.pending(), "termina");
    }

    #[test]
    fn idle_gap_forces_retyping() {
        let mut watcher = terminal_watcher();
        let start = Instant::now();
        let (_, last) = type_text(&mut watcher, "term", start);

        let resumed = last + DEFAULT_IDLE_TIMEOUT + STEP;
        let (matches, last) = type_text(&mut watcher, "inal", resumed);
        assert_eq!(matches, 0);

        let (matches, _) = type_text(&mut watcher, "terminal", last + STEP);
        assert_eq!(matches, 1);
    }

    #[test]
    fn short_pauses_keep_the_buffer() {
        let mut watcher = terminal_watcher();
        let start = Instant::now();
        let (_, last) = type_text(&mut watcher, "term", start);
        let (matches, _) = type_text(&mut watcher, "inal", last + Duration::from_millis(1900));
        assert_eq!(matches, 1);
    }

    #[test]
    fn expire_only_clears_after_the_full_timeout() {
        let mut watcher = terminal_watcher();
        let start = Instant::now();
        let (_, last) = type_text(&mut watcher, "term", start);

        assert!(!watcher.expire(last + Duration::from_millis(1999)));
        assert_eq!(watcher.pending(), "term");
        assert!(watcher.expire(last + DEFAULT_IDLE_TIMEOUT));
        assert_eq!(watcher.pending(), "");
    }

    #[test]
    fn buffer_stays_bounded() {
        let mut watcher = terminal_watcher();
        let filler = "abcdefghij".repeat(50);
        let (matches, _) = type_text(&mut watcher, &filler, Instant::now());
        assert_eq!(matches, 0);
        assert!(watcher.pending().chars().count() < "terminal".len());
    }

    #[test]
    fn only_key_press_events_are_watched() {
        let mut watcher = terminal_watcher();
        let now = Instant::now();
        for ch in "termina".chars() {
            assert_eq!(watcher.observe(&KeyEvent::Press(ch), now), None);
        }
        let key_down = KeyEvent::down(folio_bridge::input::Key::Character('l'));
        assert_eq!(watcher.observe(&key_down, now), None);
        assert_eq!(watcher.observe(&KeyEvent::Press('l'), now), Some(TriggerTyped));
    }
}
