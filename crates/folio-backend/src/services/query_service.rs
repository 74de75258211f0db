use folio_bridge::MessageFromBackend;

/// Handles an incoming configuration request (see
/// [`folio_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: &super::AppContextHandle) {
    let config = {
        let state = context.state.lock().await;
        state.config.clone()
    };
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}

/// Handles an incoming state request (see
/// [`folio_bridge::MessageToBackend::StateRequest`]).
pub async fn handle_state_request(context: &super::AppContextHandle) {
    let snapshot = {
        let state = context.state.lock().await;
        state.store.get().clone()
    };
    context
        .send(MessageFromBackend::StateSnapshot(snapshot))
        .await;
}
