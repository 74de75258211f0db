//! Backend runtime entry point and public API surface.
//!
//! This crate owns the session lifecycle: it holds the state store, the
//! input watchers and the toast tray, routes bridge messages to services,
//! and drives the fixed-delay timers through a cancellable scheduler.

mod app;
mod config;
mod runtime;
mod scheduler;
mod services;
mod state;

pub use crate::runtime::run;
