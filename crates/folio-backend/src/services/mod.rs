//! Backend service handlers for frontend messages and runtime events.
//!
//! This module groups the handlers that operate on the shared `AppContext`:
//! they run input through the watchers, apply the resulting store
//! transitions, schedule deferred callbacks and push toasts or responses
//! back to the frontend.

pub mod achievement_service;
pub mod input_service;
pub mod navigation_service;
pub mod query_service;
pub mod session_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;

/// Current time on the runtime's clock, as used by the watchers and the tray.
pub(crate) fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}
