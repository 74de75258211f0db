//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge. All store
//! mutations happen inside [`AppContext::run_event_loop`], one message or
//! runtime event at a time.

use std::ops::ControlFlow;
use std::sync::Arc;

use folio_bridge::config::Config;
use folio_bridge::state::{AppState, StateChange, StoreAction};
use folio_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, Receiver, Sender, UnboundedReceiver, UnboundedSender};

use crate::scheduler::{Scheduler, TimerKey};
use crate::services;
use crate::state::{SharedState, State};

/// Events produced inside the backend and handled by the dispatch loop.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// A scheduled timer elapsed.
    TimerFired { key: TimerKey, generation: u64 },
    /// A mutation requested by a store listener. Listeners cannot mutate the
    /// store while it is notifying them, so they enqueue the action instead.
    FollowUp(StoreAction),
    /// Show a toast for a newly unlocked achievement.
    ShowToast(String),
    /// A store change to forward to the frontend.
    StateChanged { state: AppState, change: StateChange },
}

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime state, owned by the dispatch loop.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Builds the context and installs the store listeners. Returns the
    /// receiving end of the runtime event queue, to be handed to
    /// [`AppContext::run_event_loop`].
    pub fn new(
        config: Config,
        tx: Sender<MessageFromBackend>,
    ) -> (Arc<Self>, UnboundedReceiver<RuntimeEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut state = State::new(config, Scheduler::new(events_tx.clone()));
        install_listeners(&mut state, events_tx);

        let context = Arc::new(Self {
            state: Arc::new(Mutex::new(state)),
            tx,
        });
        (context, events_rx)
    }

    /// Read and dispatch frontend messages and runtime events until the
    /// bridge closes or a shutdown is requested, then tear the session down.
    pub async fn run_event_loop(
        self: &Arc<Self>,
        mut rx: Receiver<MessageToBackend>,
        mut events: UnboundedReceiver<RuntimeEvent>,
    ) {
        services::session_service::start_session(self).await;

        loop {
            // Internal events drain first, so the frontend sees every change
            // caused by one message before the reply to the next.
            tokio::select! {
                biased;

                Some(event) = events.recv() => {
                    log::trace!("Handling runtime event: {event:?}");
                    self.handle_runtime_event(event).await;
                }
                message = rx.recv() => {
                    let Some(message) = message else { break };
                    log::debug!("Got a frontend message: {message:?}");
                    if self.dispatch_message(message).await.is_break() {
                        break;
                    }
                }
            }
        }

        services::session_service::end_session(self).await;
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers. Breaks when the session should end.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) -> ControlFlow<()> {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::query_service::handle_config_request(self).await;
            }
            MessageToBackend::StateRequest => {
                services::query_service::handle_state_request(self).await;
            }
            MessageToBackend::Key(event) => {
                services::input_service::handle_key_event(self, event).await;
            }
            MessageToBackend::Scroll {
                offset,
                viewport_height,
            } => {
                services::navigation_service::handle_scroll(self, offset, viewport_height).await;
            }
            MessageToBackend::SectionLayout(layout) => {
                services::navigation_service::handle_section_layout(self, layout).await;
            }
            MessageToBackend::Dispatch(action) => {
                self.state.lock().await.store.apply(action);
            }
            MessageToBackend::DismissToast(id) => {
                services::achievement_service::handle_dismiss_toast(self, id).await;
            }
            MessageToBackend::Shutdown => {
                log::info!("Shutdown requested by the frontend");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    async fn handle_runtime_event(self: &Arc<Self>, event: RuntimeEvent) {
        match event {
            RuntimeEvent::TimerFired { key, generation } => {
                let current = self.state.lock().await.scheduler.complete(key, generation);
                if current {
                    services::session_service::handle_timer(self, key).await;
                } else {
                    log::debug!("Ignoring stale timer {key:?}");
                }
            }
            RuntimeEvent::FollowUp(action) => {
                self.state.lock().await.store.apply(action);
            }
            RuntimeEvent::ShowToast(id) => {
                services::achievement_service::handle_show_toast(self, &id).await;
            }
            RuntimeEvent::StateChanged { state, change } => {
                self.send(MessageFromBackend::StateChanged { state, change })
                    .await;
            }
        }
    }

    /// Send a message to the frontend bridge. A closed bridge only means the
    /// frontend is going away, so the message is dropped with a warning.
    pub async fn send(&self, message: MessageFromBackend) {
        if let Err(error) = self.tx.send(message).await {
            log::warn!("Dropping message for closed frontend: {:?}", error.0);
        }
    }

    /// Send a plain notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        notification_type: folio_bridge::notification::NotificationType,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            folio_bridge::notification::NotificationMessage {
                notification_type,
                message: content.into(),
            },
        ))
        .await;
    }
}

/// Registers the runtime's store listeners: one queueing every change for
/// the frontend, one turning changes into follow-up runtime events.
///
/// Both only enqueue. The dispatch loop forwards changes with an awaited
/// send, so a full bridge applies backpressure instead of losing changes.
fn install_listeners(state: &mut State, events: UnboundedSender<RuntimeEvent>) {
    let forward = events.clone();
    state.store.subscribe(move |state, change| {
        // Only fails once the loop has shut down.
        let _ = forward.send(RuntimeEvent::StateChanged {
            state: state.clone(),
            change: change.clone(),
        });
    });

    state.store.subscribe(move |_, change| {
        for event in services::achievement_service::follow_up_events(change) {
            // Only fails once the loop has shut down.
            let _ = events.send(event);
        }
    });
}
