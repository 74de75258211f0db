use std::time::{Duration, Instant};

use folio_bridge::achievement::Achievement;
use folio_bridge::notification::{Toast, ToastId};

/// Default visible lifetime of a toast.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
struct ActiveToast {
    toast: Toast,
    expires_at: Instant,
}

/// Transient list of visible achievement toasts.
///
/// Each toast has its own lifetime starting when it was pushed; several may
/// be visible at once, stacked in push order.
#[derive(Debug, Clone)]
pub struct NotificationTray {
    lifetime: Duration,
    active: Vec<ActiveToast>,
    next_id: u64,
}

impl Default for NotificationTray {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl NotificationTray {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            active: Vec::new(),
            next_id: 0,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Shows a toast for `achievement_id`. Ids without catalog metadata
    /// render nothing and return `None`.
    pub fn push(&mut self, achievement_id: &str, now: Instant) -> Option<Toast> {
        let Some(achievement) = Achievement::from_id(achievement_id) else {
            log::debug!("No toast metadata for achievement {achievement_id}, skipping");
            return None;
        };

        let toast = Toast {
            id: ToastId(self.next_id),
            achievement,
        };
        self.next_id += 1;
        self.active.push(ActiveToast {
            toast: toast.clone(),
            expires_at: now + self.lifetime,
        });
        Some(toast)
    }

    /// Removes a toast ahead of its lifetime. Returns `false` if it was not
    /// visible anymore.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.active.len();
        self.active.retain(|active| active.toast.id != id);
        self.active.len() != before
    }

    /// Removes every toast whose lifetime ended at or before `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<ToastId> {
        let mut expired = Vec::new();
        self.active.retain(|active| {
            if active.expires_at <= now {
                expired.push(active.toast.id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|active| &active.toast)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_impression_toast_lives_five_seconds() {
        let start = Instant::now();
        let mut tray = NotificationTray::default();

        let toast = tray.push("first_impression", start).unwrap();
        assert_eq!(toast.title(), "First Impression");
        assert_eq!(tray.visible().count(), 1);

        assert!(tray.expire(start + Duration::from_millis(4999)).is_empty());
        assert_eq!(tray.expire(start + Duration::from_secs(5)), vec![toast.id]);
        assert!(tray.is_empty());
    }

    #[test]
    fn unknown_achievements_render_nothing() {
        let mut tray = NotificationTray::default();
        assert_eq!(tray.push("game_master", Instant::now()), None);
        assert!(tray.is_empty());
    }

    #[test]
    fn toasts_stack_with_independent_lifetimes() {
        let start = Instant::now();
        let mut tray = NotificationTray::default();
        let first = tray.push("skill_explorer", start).unwrap();
        let second = tray
            .push("konami_master", start + Duration::from_secs(2))
            .unwrap();
        assert_ne!(first.id, second.id);

        let titles: Vec<_> = tray.visible().map(Toast::title).collect();
        assert_eq!(titles, ["Skill Explorer", "Konami Master"]);

        assert_eq!(tray.expire(start + Duration::from_secs(5)), vec![first.id]);
        assert_eq!(tray.visible().count(), 1);
        assert_eq!(tray.expire(start + Duration::from_secs(7)), vec![second.id]);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut tray = NotificationTray::new(Duration::from_secs(1));
        let toast = tray.push("terminal_hacker", Instant::now()).unwrap();
        assert!(tray.dismiss(toast.id));
        assert!(!tray.dismiss(toast.id));
    }
}
