//! Application state store and achievement notifications.
//!
//! [`Store`] owns the single [`AppState`](folio_bridge::state::AppState) of a
//! session and exposes one mutator per transition. Every mutator call is
//! total, applies exactly one change and synchronously notifies all
//! subscribers before returning.
//!
//! [`NotificationTray`] holds the transient toast list. It is kept
//! separate from the store: dismissing a toast never affects the persisted
//! set of unlocked achievements.

pub mod store;
pub mod tray;

pub use crate::store::{Store, SubscriptionId};
pub use crate::tray::NotificationTray;
