use folio_bridge::achievement::Achievement;
use folio_bridge::input::KeyEvent;
use folio_bridge::notification::NotificationType;
use folio_bridge::state::StateChange;
use folio_watchers::Watcher;
use folio_watchers::shortcut::Shortcut;

use crate::scheduler::TimerKey;

/// Handles a raw keyboard event (see [`folio_bridge::MessageToBackend::Key`]).
///
/// The event runs through every installed watcher in turn. For typed
/// characters the trigger check always happens before the idle clear is
/// rescheduled, so a keystroke is never matched against a buffer that its
/// own timer already emptied.
pub async fn handle_key_event(context: &super::AppContextHandle, event: KeyEvent) {
    let now = super::now();

    let retro_mode_entered = {
        let mut guard = context.state.lock().await;
        let state = &mut *guard;

        match state.shortcuts.observe(&event, now) {
            Some(Shortcut::ToggleCommandPalette) => {
                state.store.toggle_command_palette();
            }
            Some(Shortcut::Dismiss) => {
                if state.store.get().command_palette_open {
                    state.store.toggle_command_palette();
                }
            }
            None => {}
        }

        let mut retro_mode_entered = false;
        if let Some(konami) = state.konami.as_mut() {
            if konami.observe(&event, now).is_some() {
                log::info!("Konami sequence entered");
                retro_mode_entered = matches!(
                    state.store.activate_konami(),
                    StateChange::KonamiActivated {
                        newly_activated: true
                    }
                );
                state.store.unlock_achievement(Achievement::KonamiMaster.id());
            }
        }

        if let KeyEvent::Press(_) = event {
            if state.terminal_trigger.observe(&event, now).is_some() {
                log::info!("Terminal trigger typed");
                state.store.toggle_terminal();
            }
            let idle_timeout = state.terminal_trigger.idle_timeout();
            state.scheduler.schedule(TimerKey::TriggerIdle, idle_timeout);
        }

        retro_mode_entered
    };

    if retro_mode_entered {
        context
            .send_notification(NotificationType::Success, "Retro mode activated!")
            .await;
    }
}

/// Timer callback clearing a stale partial trigger.
pub async fn handle_trigger_idle(context: &super::AppContextHandle) {
    let mut state = context.state.lock().await;
    if state.terminal_trigger.expire(super::now()) {
        log::debug!("Cleared idle terminal trigger buffer");
    }
}
