use folio_bridge::MessageFromBackend;
use folio_bridge::achievement::Achievement;
use folio_bridge::notification::ToastId;
use folio_bridge::section::Section;
use folio_bridge::state::{Flag, StateChange, StoreAction};

use crate::app::RuntimeEvent;
use crate::scheduler::TimerKey;

fn unlock(achievement: Achievement) -> RuntimeEvent {
    RuntimeEvent::FollowUp(StoreAction::UnlockAchievement(
        achievement.id().to_string(),
    ))
}

/// Maps a store change to the events it implies.
///
/// Entering a section marks it visited and may reward an achievement,
/// opening the terminal rewards its own, and only the first unlock of an
/// achievement produces a toast.
pub fn follow_up_events(change: &StateChange) -> Vec<RuntimeEvent> {
    match change {
        StateChange::CurrentSection(id) => {
            let mut events = vec![RuntimeEvent::FollowUp(StoreAction::AddVisitedSection(
                id.clone(),
            ))];
            match Section::from_id(id) {
                Some(Section::Skills) => events.push(unlock(Achievement::SkillExplorer)),
                Some(Section::Projects) => events.push(unlock(Achievement::ProjectViewer)),
                _ => {}
            }
            events
        }
        StateChange::FlagToggled {
            flag: Flag::Terminal,
            value: true,
        } => vec![unlock(Achievement::TerminalHacker)],
        StateChange::AchievementUnlocked {
            id,
            newly_unlocked: true,
        } => vec![RuntimeEvent::ShowToast(id.clone())],
        _ => Vec::new(),
    }
}

/// Shows a toast for a newly unlocked achievement and schedules its
/// dismissal. Achievements without display metadata are skipped.
pub async fn handle_show_toast(context: &super::AppContextHandle, achievement_id: &str) {
    let toast = {
        let mut guard = context.state.lock().await;
        let state = &mut *guard;
        let Some(toast) = state.tray.push(achievement_id, super::now()) else {
            return;
        };
        let lifetime = state.tray.lifetime();
        state
            .scheduler
            .schedule(TimerKey::ToastExpiry(toast.id), lifetime);
        toast
    };

    log::info!("Showing toast {} for {achievement_id}", toast.id);
    context.send(MessageFromBackend::ToastShown(toast)).await;
}

/// Timer callback removing every toast whose lifetime has ended.
pub async fn handle_toast_expiry(context: &super::AppContextHandle) {
    let expired = {
        let mut guard = context.state.lock().await;
        let state = &mut *guard;
        let expired = state.tray.expire(super::now());
        for id in &expired {
            state.scheduler.cancel(TimerKey::ToastExpiry(*id));
        }
        expired
    };

    for id in expired {
        context.send(MessageFromBackend::ToastDismissed(id)).await;
    }
}

/// Handles an early dismissal requested by the frontend (see
/// [`folio_bridge::MessageToBackend::DismissToast`]).
pub async fn handle_dismiss_toast(context: &super::AppContextHandle, id: ToastId) {
    let dismissed = {
        let mut guard = context.state.lock().await;
        let state = &mut *guard;
        let dismissed = state.tray.dismiss(id);
        if dismissed {
            state.scheduler.cancel(TimerKey::ToastExpiry(id));
        }
        dismissed
    };

    if dismissed {
        context.send(MessageFromBackend::ToastDismissed(id)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follow_up_actions(change: StateChange) -> Vec<StoreAction> {
        follow_up_events(&change)
            .into_iter()
            .map(|event| match event {
                RuntimeEvent::FollowUp(action) => action,
                other => panic!("expected a follow-up action, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn entering_projects_marks_visited_and_rewards() {
        assert_eq!(
            follow_up_actions(StateChange::CurrentSection("projects".to_string())),
            vec![
                StoreAction::AddVisitedSection("projects".to_string()),
                StoreAction::UnlockAchievement("project_viewer".to_string()),
            ]
        );
        assert_eq!(
            follow_up_actions(StateChange::CurrentSection("contact".to_string())),
            vec![StoreAction::AddVisitedSection("contact".to_string())]
        );
    }

    #[test]
    fn only_opening_the_terminal_rewards() {
        let opened = StateChange::FlagToggled {
            flag: Flag::Terminal,
            value: true,
        };
        let closed = StateChange::FlagToggled {
            flag: Flag::Terminal,
            value: false,
        };
        assert_eq!(
            follow_up_actions(opened),
            vec![StoreAction::UnlockAchievement("terminal_hacker".to_string())]
        );
        assert!(follow_up_events(&closed).is_empty());
    }

    #[test]
    fn repeat_unlocks_do_not_toast() {
        let first = StateChange::AchievementUnlocked {
            id: "konami_master".to_string(),
            newly_unlocked: true,
        };
        let repeat = StateChange::AchievementUnlocked {
            id: "konami_master".to_string(),
            newly_unlocked: false,
        };
        assert!(matches!(
            follow_up_events(&first).as_slice(),
            [RuntimeEvent::ShowToast(id)] if id == "konami_master"
        ));
        assert!(follow_up_events(&repeat).is_empty());
    }
}
