use folio_bridge::config::Config;
use folio_bridge::section::{SectionBounds, uniform_layout};
use folio_bridge::state::AppState;
use folio_store::{NotificationTray, Store};
use folio_watchers::{
    scroll::SectionTracker, sequence::SequenceWatcher, shortcut::ShortcutWatcher,
    trigger::TriggerWatcher,
};

use crate::scheduler::Scheduler;

/// Height assumed for every section until the frontend reports its layout.
const DEFAULT_SECTION_HEIGHT: f64 = 1000.0;

/// The core runtime state: the store plus everything that feeds it.
///
/// Only the dispatch loop mutates this, one message or event at a time, so
/// the store keeps a single writer even though timers run as separate tasks.
#[derive(Debug)]
pub struct State {
    /// The loaded application configuration.
    pub config: Config,
    /// The session's application state store.
    pub store: Store,
    /// Transient achievement toasts.
    pub tray: NotificationTray,
    /// Konami sequence watcher, absent when disabled in config.
    pub konami: Option<SequenceWatcher>,
    /// Watcher for the typed terminal trigger word.
    pub terminal_trigger: TriggerWatcher,
    pub shortcuts: ShortcutWatcher,
    pub sections: SectionTracker,
    /// Pending deferred callbacks.
    pub scheduler: Scheduler,
}

impl State {
    pub fn new(config: Config, scheduler: Scheduler) -> Self {
        let store = Store::with_state(AppState::from_config(&config));
        let tray = NotificationTray::new(config.timings.toast_lifetime());
        let konami = config
            .easter_eggs
            .konami_enabled
            .then(SequenceWatcher::konami);
        let terminal_trigger = TriggerWatcher::new(
            config.easter_eggs.terminal_trigger.clone(),
            config.timings.trigger_idle(),
        );

        Self {
            config,
            store,
            tray,
            konami,
            terminal_trigger,
            shortcuts: ShortcutWatcher,
            sections: SectionTracker::new(default_layout()),
            scheduler,
        }
    }
}

fn default_layout() -> Vec<SectionBounds> {
    uniform_layout(DEFAULT_SECTION_HEIGHT)
}

/// Shared reference to the runtime [`State`].
///
/// Store listeners are `Send` but not `Sync`, so the state sits behind a
/// mutex rather than a read-write lock.
pub type SharedState = std::sync::Arc<tokio::sync::Mutex<State>>;
