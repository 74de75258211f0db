use anyhow::anyhow;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let channels = folio_bridge::BridgeChannels::default();
    let backend = folio_backend::run(channels.backend_rx, channels.backend_tx);
    folio_frontend::run(channels.frontend_rx, channels.frontend_tx)?;

    backend
        .join()
        .map_err(|_| anyhow!("backend thread panicked"))?;
    log::info!("Bye");
    Ok(())
}
