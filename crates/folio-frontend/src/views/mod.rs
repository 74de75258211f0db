pub mod game_view;
pub mod palette_view;
pub mod terminal_view;

use std::time::Duration;

use folio_bridge::config::Config;
use folio_bridge::input::KeyEvent;
use folio_bridge::notification::Toast;
use folio_bridge::state::{AppState, Flag, StateChange, StoreAction};
use folio_bridge::{MessageFromBackend, MessageToBackend};

use crate::formatting;
use crate::script::{self, GameAction, ScriptInput};
use crate::views::{game_view::GameView, palette_view::PaletteView, terminal_view::TerminalView};

/// What the console loop has to do after handling one line of input.
#[derive(Debug, Default)]
pub struct Reaction {
    pub outgoing: Vec<MessageToBackend>,
    pub lines: Vec<String>,
    /// Keep draining backend messages for this long before reading input.
    pub wait: Option<Duration>,
    pub quit: bool,
}

impl Reaction {
    fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    fn dispatch(&mut self, action: StoreAction) {
        self.outgoing.push(MessageToBackend::Dispatch(action));
    }
}

/// Frontend mirror of the backend state plus the interactive surfaces.
///
/// The mirror is only ever replaced by snapshots the backend sends; the
/// surfaces read it to decide whether they are open.
#[derive(Debug, Default)]
pub struct FrontendUi {
    config: Config,
    state: AppState,
    terminal: TerminalView,
    palette: PaletteView,
    game: GameView,
    toasts: Vec<Toast>,
}

impl FrontendUi {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Applies a backend message and returns the lines to print.
    pub fn apply_message(&mut self, message: MessageFromBackend) -> Vec<String> {
        match message {
            MessageFromBackend::NotificationMessage(notification) => {
                vec![formatting::format_notification(&notification)]
            }
            MessageFromBackend::ConfigurationResponse(config) => {
                log::debug!("Received configuration: {config:?}");
                self.config = config;
                Vec::new()
            }
            MessageFromBackend::StateSnapshot(state) => {
                self.state = state;
                vec![formatting::format_state(&self.state)]
            }
            MessageFromBackend::StateChanged { state, change } => {
                self.state = state;
                self.sync_surfaces(&change);
                formatting::describe_change(&change).into_iter().collect()
            }
            MessageFromBackend::ToastShown(toast) => {
                let line = formatting::format_toast(&toast);
                self.toasts.push(toast);
                vec![line]
            }
            MessageFromBackend::ToastDismissed(id) => {
                self.toasts.retain(|toast| toast.id != id);
                log::debug!("Toast {id} dismissed");
                Vec::new()
            }
        }
    }

    fn sync_surfaces(&mut self, change: &StateChange) {
        match change {
            StateChange::FlagToggled {
                flag: Flag::CommandPalette,
                value: false,
            } => self.palette.set_query(""),
            // Every opening of the game starts from a fresh, idle field.
            StateChange::FlagToggled {
                flag: Flag::Game, ..
            } => self.game = GameView::default(),
            _ => {}
        }
    }

    pub fn handle_input(&mut self, input: ScriptInput) -> Reaction {
        match input {
            ScriptInput::Keys(events) => self.handle_keys(events),
            ScriptInput::Scroll {
                offset,
                viewport_height,
            } => Reaction {
                outgoing: vec![MessageToBackend::Scroll {
                    offset,
                    viewport_height,
                }],
                ..Reaction::default()
            },
            ScriptInput::Terminal(command) => self.run_terminal(&command),
            ScriptInput::Palette(query) => self.filter_palette(query),
            ScriptInput::Run(position) => self.run_palette(position),
            ScriptInput::Game(action) => self.game_action(action),
            ScriptInput::Category(selection) => {
                let mut reaction = Reaction::default();
                reaction.dispatch(StoreAction::SetSelectedSkillCategory(selection));
                reaction
            }
            ScriptInput::Dismiss(id) => Reaction {
                outgoing: vec![MessageToBackend::DismissToast(id)],
                ..Reaction::default()
            },
            ScriptInput::Wait(duration) => Reaction {
                wait: Some(duration),
                ..Reaction::default()
            },
            ScriptInput::State => Reaction::line(formatting::format_state(&self.state)),
            ScriptInput::Help => Reaction::line(script::HELP),
            ScriptInput::Quit => Reaction {
                quit: true,
                ..Reaction::default()
            },
        }
    }

    /// Forwards typed keys to the backend. A running game also moves with
    /// them, like the page-wide key listener does in a browser.
    fn handle_keys(&mut self, events: Vec<KeyEvent>) -> Reaction {
        let mut reaction = Reaction::default();
        for event in events {
            if self.state.game_active {
                if let KeyEvent::Down { key, .. } = &event {
                    if let Some(unlock) = self.game.handle_key(key) {
                        reaction.lines.push(format!(
                            "All skills collected! Final score: {}",
                            self.game.score()
                        ));
                        reaction.dispatch(unlock);
                    }
                }
            }
            reaction.outgoing.push(MessageToBackend::Key(event));
        }
        reaction
    }

    fn run_terminal(&mut self, command: &str) -> Reaction {
        if !self.state.terminal_open {
            return Reaction::line(format!(
                "The terminal is closed. Type \"{}\" to open it.",
                self.config.easter_eggs.terminal_trigger
            ));
        }

        let shown = self.terminal.history().len();
        let action = self.terminal.submit(command);
        let mut reaction = Reaction {
            lines: self.terminal.history()[shown.min(self.terminal.history().len())..].to_vec(),
            ..Reaction::default()
        };
        if let Some(action) = action {
            reaction.dispatch(action);
        }
        reaction
    }

    fn palette_closed() -> Reaction {
        Reaction::line("The command palette is closed. Press <ctrl-k> to open it.")
    }

    fn filter_palette(&mut self, query: String) -> Reaction {
        if !self.state.command_palette_open {
            return Self::palette_closed();
        }

        self.palette.set_query(query);
        let commands = self.palette.filtered();
        if commands.is_empty() {
            return Reaction::line("No commands found");
        }

        let lines = commands
            .iter()
            .enumerate()
            .map(|(index, command)| format!("{}. {} {}", index + 1, command.icon(), command.label()))
            .collect();
        Reaction {
            lines,
            ..Reaction::default()
        }
    }

    fn run_palette(&mut self, position: usize) -> Reaction {
        if !self.state.command_palette_open {
            return Self::palette_closed();
        }

        let missing = || Reaction::line(format!("No palette command #{position}"));
        let Some(index) = position.checked_sub(1) else {
            return missing();
        };
        let Some(command) = self.palette.filtered().get(index).copied() else {
            return missing();
        };

        let mut reaction = Reaction::line(format!("> {}", command.label()));
        for action in self.palette.execute(index).unwrap_or_default() {
            reaction.dispatch(action);
        }
        reaction
    }

    fn game_action(&mut self, action: GameAction) -> Reaction {
        if !self.state.game_active {
            return Reaction::line("No game is open. Start one from the command palette.");
        }

        match action {
            GameAction::Start => {
                self.game.start();
                Reaction::line("Collect the skills! Move with WASD or the arrow keys.")
            }
            GameAction::Quit => {
                let mut reaction = Reaction::default();
                reaction.dispatch(StoreAction::Toggle(Flag::Game));
                reaction
            }
        }
    }
}
