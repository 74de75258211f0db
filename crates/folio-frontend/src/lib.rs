use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Context;
use folio_bridge::section::uniform_layout;
use folio_bridge::{MessageFromBackend, MessageToBackend};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::views::{FrontendUi, Reaction};

pub mod formatting;
pub mod script;
pub mod views;

/// Height reported for every section of the console page layout.
const SECTION_HEIGHT: f64 = 1000.0;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    pub async fn send(&self, message: MessageToBackend) -> anyhow::Result<()> {
        self.to_backend
            .send(message)
            .await
            .ok()
            .context("backend channel closed")
    }
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Runs the console frontend until stdin ends, `:quit` is entered or the
/// backend goes away. Always asks the backend to shut down on the way out.
pub fn run(
    rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build the frontend runtime")?;

    let mut console = Console::new(rx, BackendBridge { to_backend: tx });
    let result = runtime.block_on(console.run());

    if runtime
        .block_on(console.send(MessageToBackend::Shutdown))
        .is_err()
    {
        log::warn!("Backend was already gone at shutdown");
    }
    result
}

/// The console session: the UI mirror plus both ends of the bridge.
///
/// Backend messages are applied whenever the console waits, including while
/// it waits for room on the bridge, so the two sides never block on each
/// other's full channel.
struct Console {
    ui: FrontendUi,
    rx: mpsc::Receiver<MessageFromBackend>,
    bridge: BackendBridge,
    backend_open: bool,
}

impl Console {
    fn new(rx: mpsc::Receiver<MessageFromBackend>, bridge: BackendBridge) -> Self {
        Self {
            ui: FrontendUi::default(),
            rx,
            bridge,
            backend_open: true,
        }
    }

    /// Applies one received message. `None` marks the bridge as closed.
    fn receive(&mut self, message: Option<MessageFromBackend>) {
        match message {
            Some(message) => print_lines(self.ui.apply_message(message)),
            None => {
                log::warn!("Backend closed the bridge");
                self.backend_open = false;
            }
        }
    }

    /// Sends a message to the backend, applying backend output until it has
    /// been accepted.
    async fn send(&mut self, message: MessageToBackend) -> anyhow::Result<()> {
        let bridge = self.bridge.clone();
        let send = bridge.send(message);
        tokio::pin!(send);

        loop {
            tokio::select! {
                result = &mut send => return result,
                message = self.rx.recv(), if self.backend_open => self.receive(message),
            }
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        self.send(MessageToBackend::ConfigurationRequest).await?;
        self.send(MessageToBackend::SectionLayout(uniform_layout(SECTION_HEIGHT)))
            .await?;
        self.send(MessageToBackend::StateRequest).await?;
        println!("Type :help for the list of commands.");

        let mut input = BufReader::new(tokio::io::stdin()).lines();
        while self.backend_open {
            tokio::select! {
                message = self.rx.recv() => self.receive(message),
                line = input.next_line() => {
                    let Some(line) = line.context("failed to read stdin")? else {
                        log::info!("Input ended");
                        return Ok(());
                    };

                    let reaction = match script::parse_line(&line) {
                        Ok(parsed) => self.ui.handle_input(parsed),
                        Err(error) => {
                            println!("error: {error}");
                            continue;
                        }
                    };
                    if self.react(reaction).await?.is_break() {
                        return Ok(());
                    }
                }
            }
        }
        Ok(())
    }

    /// Carries out the reaction to one input line. Breaks on `:quit`.
    async fn react(&mut self, reaction: Reaction) -> anyhow::Result<ControlFlow<()>> {
        print_lines(reaction.lines);
        for message in reaction.outgoing {
            self.send(message).await?;
        }
        if reaction.quit {
            return Ok(ControlFlow::Break(()));
        }
        if let Some(duration) = reaction.wait {
            self.drain_for(duration).await;
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Applies backend output for `duration` without reading input.
    async fn drain_for(&mut self, duration: Duration) {
        let deadline = tokio::time::sleep(duration);
        tokio::pin!(deadline);

        while self.backend_open {
            tokio::select! {
                _ = &mut deadline => return,
                message = self.rx.recv() => self.receive(message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_bridge::BridgeChannels;
    use folio_bridge::input::KeyEvent;
    use folio_bridge::state::{AppState, Flag, StateChange};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sending_keeps_applying_backend_output() {
        let BridgeChannels {
            frontend_rx,
            frontend_tx,
            mut backend_rx,
            backend_tx,
        } = BridgeChannels::new(4);

        // Fills the frontend channel before reading anything.
        let backend = tokio::spawn(async move {
            let mut state = AppState::default();
            for _ in 0..9 {
                let value = state.toggle_flag(Flag::Sound);
                let change = StateChange::FlagToggled {
                    flag: Flag::Sound,
                    value,
                };
                backend_tx
                    .send(MessageFromBackend::StateChanged {
                        state: state.clone(),
                        change,
                    })
                    .await
                    .unwrap();
            }

            let mut received = 0;
            while backend_rx.recv().await.is_some() {
                received += 1;
            }
            received
        });

        let mut console = Console::new(
            frontend_rx,
            BackendBridge {
                to_backend: frontend_tx,
            },
        );
        let typed = tokio::time::timeout(Duration::from_secs(30), async {
            for _ in 0..10 {
                console.send(MessageToBackend::Key(KeyEvent::Press('a'))).await?;
            }
            anyhow::Ok(())
        })
        .await;
        assert!(matches!(typed, Ok(Ok(()))));

        while let Ok(message) = console.rx.try_recv() {
            console.receive(Some(message));
        }
        assert!(console.ui.state().sound_enabled);

        drop(console);
        assert_eq!(backend.await.unwrap(), 10);
    }
}
