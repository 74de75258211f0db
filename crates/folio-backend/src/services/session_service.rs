use folio_bridge::achievement::Achievement;

use crate::scheduler::TimerKey;

/// Schedules the deferred callbacks every session starts with.
pub async fn start_session(context: &super::AppContextHandle) {
    let mut state = context.state.lock().await;
    let loading_delay = state.config.timings.loading_delay();
    let first_impression_delay = state.config.timings.first_impression_delay();
    state
        .scheduler
        .schedule(TimerKey::LoadingComplete, loading_delay);
    state
        .scheduler
        .schedule(TimerKey::FirstImpression, first_impression_delay);
    log::info!("Session started, loading for {loading_delay:?}");
}

/// Cancels everything still pending so no callback outlives the session.
pub async fn end_session(context: &super::AppContextHandle) {
    let mut state = context.state.lock().await;
    let cancelled = state.scheduler.cancel_all();
    log::info!("Session ended, cancelled {cancelled} pending timer(-s)");
}

/// Runs the callback of an elapsed timer.
pub async fn handle_timer(context: &super::AppContextHandle, key: TimerKey) {
    match key {
        TimerKey::LoadingComplete => {
            let mut state = context.state.lock().await;
            state.store.set_loading(false);
        }
        TimerKey::FirstImpression => {
            let mut state = context.state.lock().await;
            state
                .store
                .unlock_achievement(Achievement::FirstImpression.id());
        }
        TimerKey::TriggerIdle => super::input_service::handle_trigger_idle(context).await,
        TimerKey::ToastExpiry(_) => super::achievement_service::handle_toast_expiry(context).await,
    }
}
