//! Communication bridge between the folio frontend and backend.
//!
//! This crate defines the vocabulary shared by every other crate: the
//! application state snapshot, the mutator actions surfaces may issue, raw
//! keyboard input, the section and achievement catalogs, and the messages
//! exchanged between the console frontend and the backend runtime.
//!
//! The flow is unidirectional on each side:
//! - The frontend forwards raw input and mutator calls (e.g. a key press,
//!   a scroll offset, "toggle sound").
//! - The backend pushes state changes and toast notifications back.
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`].

pub mod achievement;
pub mod config;
pub mod input;
pub mod notification;
pub mod section;
pub mod state;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for plain notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Response to an explicit state request.
    StateSnapshot(state::AppState),
    /// Sent after every mutator call with the resulting state.
    StateChanged {
        state: state::AppState,
        change: state::StateChange,
    },
    /// A newly unlocked achievement should be displayed.
    ToastShown(notification::Toast),
    /// A toast reached the end of its lifetime or was dismissed.
    ToastDismissed(notification::ToastId),
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the current state snapshot.
    StateRequest,
    /// A raw keyboard event to run through the input watchers.
    Key(input::KeyEvent),
    /// The page was scrolled.
    Scroll { offset: f64, viewport_height: f64 },
    /// The rendered section layout changed.
    SectionLayout(Vec<section::SectionBounds>),
    /// A mutator call issued by a surface.
    Dispatch(state::StoreAction),
    /// The user closed a toast before its lifetime ended.
    DismissToast(notification::ToastId),
    /// Tear the session down, cancelling all pending timers.
    Shutdown,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
