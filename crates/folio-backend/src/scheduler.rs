//! Keyed, cancellable deferred callbacks.
//!
//! Timers never touch state directly: when one elapses it only posts a
//! [`RuntimeEvent::TimerFired`] back into the dispatch loop, which then runs
//! the callback like any other event.

use std::collections::HashMap;
use std::time::Duration;

use folio_bridge::notification::ToastId;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::app::RuntimeEvent;

/// Identifies a deferred callback. At most one timer per key is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Initial load completion.
    LoadingComplete,
    /// Welcome achievement after the hero section has been on screen.
    FirstImpression,
    /// Idle clear of the terminal trigger buffer.
    TriggerIdle,
    /// End of a toast's visible lifetime.
    ToastExpiry(ToastId),
}

#[derive(Debug)]
struct PendingTimer {
    generation: u64,
    handle: AbortHandle,
}

#[derive(Debug)]
pub struct Scheduler {
    events: UnboundedSender<RuntimeEvent>,
    pending: HashMap<TimerKey, PendingTimer>,
    next_generation: u64,
}

impl Scheduler {
    pub fn new(events: UnboundedSender<RuntimeEvent>) -> Self {
        Self {
            events,
            pending: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Schedules `key` to fire after `delay`, replacing any pending timer
    /// with the same key. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, key: TimerKey, delay: Duration) {
        self.cancel(key);

        let generation = self.next_generation;
        self.next_generation += 1;

        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The loop is gone during teardown; nothing left to notify.
            let _ = events.send(RuntimeEvent::TimerFired { key, generation });
        });

        self.pending.insert(
            key,
            PendingTimer {
                generation,
                handle: handle.abort_handle(),
            },
        );
    }

    /// Marks a fired timer as done. Returns `false` for a stale firing whose
    /// timer was replaced or cancelled after its event had been posted.
    pub fn complete(&mut self, key: TimerKey, generation: u64) -> bool {
        match self.pending.get(&key) {
            Some(timer) if timer.generation == generation => {
                self.pending.remove(&key);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self, key: TimerKey) -> bool {
        match self.pending.remove(&key) {
            Some(timer) => {
                timer.handle.abort();
                true
            }
            None => false,
        }
    }

    /// Aborts every pending timer. Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        for (_, timer) in self.pending.drain() {
            timer.handle.abort();
        }
        count
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.pending.contains_key(&key)
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use super::*;

    fn scheduler() -> (Scheduler, UnboundedReceiver<RuntimeEvent>) {
        let (tx, rx) = unbounded_channel();
        (Scheduler::new(tx), rx)
    }

    async fn next_firing(rx: &mut UnboundedReceiver<RuntimeEvent>) -> (TimerKey, u64) {
        match rx.recv().await {
            Some(RuntimeEvent::TimerFired { key, generation }) => (key, generation),
            other => panic!("expected a timer firing, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_delay() {
        let (mut scheduler, mut rx) = scheduler();
        let start = tokio::time::Instant::now();
        scheduler.schedule(TimerKey::LoadingComplete, Duration::from_secs(3));

        let (key, generation) = next_firing(&mut rx).await;
        assert_eq!(key, TimerKey::LoadingComplete);
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert!(scheduler.complete(key, generation));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_replaces_the_pending_timer() {
        let (mut scheduler, mut rx) = scheduler();
        let start = tokio::time::Instant::now();
        scheduler.schedule(TimerKey::TriggerIdle, Duration::from_secs(2));
        tokio::time::sleep(Duration::from_secs(1)).await;
        scheduler.schedule(TimerKey::TriggerIdle, Duration::from_secs(2));

        let (key, generation) = next_firing(&mut rx).await;
        assert_eq!(key, TimerKey::TriggerIdle);
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert!(scheduler.complete(key, generation));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_firings_are_rejected() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.schedule(TimerKey::TriggerIdle, Duration::from_secs(1));
        let (key, stale) = next_firing(&mut rx).await;

        // Replaced after the first event was already posted.
        scheduler.schedule(TimerKey::TriggerIdle, Duration::from_secs(1));
        assert!(!scheduler.complete(key, stale));
        assert!(scheduler.is_pending(TimerKey::TriggerIdle));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_stops_every_timer() {
        let (mut scheduler, mut rx) = scheduler();
        scheduler.schedule(TimerKey::LoadingComplete, Duration::from_secs(3));
        scheduler.schedule(TimerKey::ToastExpiry(ToastId(0)), Duration::from_secs(5));
        assert_eq!(scheduler.cancel_all(), 2);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
