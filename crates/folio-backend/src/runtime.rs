//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, and the dispatch
//! loop that listens to frontend bridge requests.

use std::thread;

use folio_bridge::config::Config;
use folio_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::app::AppContext;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = match crate::config::load_config().await {
        Ok(config) => config,
        Err(error) => {
            log::warn!("Falling back to default configuration: {error}");
            Config::default()
        }
    };

    let (context, events) = AppContext::new(config, tx);
    context.run_event_loop(rx, events).await;
}

/// Spawn the backend runtime and begin processing bridge messages. The
/// returned handle finishes once the session has been torn down.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    })
}
