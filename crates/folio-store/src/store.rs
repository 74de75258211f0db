use folio_bridge::state::{AppState, Flag, StateChange, StoreAction};

/// Handle returned by [`Store::subscribe`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState, &StateChange) + Send>;

/// Owner of the application state for one session.
///
/// The store is an explicit object handed to whoever needs it; there is no
/// process-wide instance. Listeners run synchronously, in subscription
/// order, after the state has been updated and before the mutator returns.
/// No-op calls (e.g. unlocking an owned achievement) still notify, and the
/// [`StateChange`] tells whether anything was actually inserted.
pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_state(AppState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    pub fn get(&self) -> &AppState {
        &self.state
    }

    /// Registers a listener called after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AppState, &StateChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: StateChange) -> StateChange {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state, &change);
        }
        change
    }

    /// Runs the mutator named by `action` and returns the applied change.
    pub fn apply(&mut self, action: StoreAction) -> StateChange {
        log::debug!("Applying store action: {action:?}");
        match action {
            StoreAction::SetCurrentSection(id) => self.set_current_section(id),
            StoreAction::SetLoading(loading) => self.set_loading(loading),
            StoreAction::Toggle(flag) => self.toggle(flag),
            StoreAction::ActivateKonami => self.activate_konami(),
            StoreAction::SetSelectedSkillCategory(category) => {
                self.set_selected_skill_category(category)
            }
            StoreAction::AddVisitedSection(id) => self.add_visited_section(id),
            StoreAction::UnlockAchievement(id) => self.unlock_achievement(id),
        }
    }

    pub fn set_current_section(&mut self, id: impl Into<String>) -> StateChange {
        let id = id.into();
        self.state.current_section = id.clone();
        self.notify(StateChange::CurrentSection(id))
    }

    pub fn set_loading(&mut self, loading: bool) -> StateChange {
        self.state.is_loading = loading;
        self.notify(StateChange::Loading(loading))
    }

    pub fn toggle(&mut self, flag: Flag) -> StateChange {
        let value = self.state.toggle_flag(flag);
        self.notify(StateChange::FlagToggled { flag, value })
    }

    pub fn toggle_dark_mode(&mut self) -> StateChange {
        self.toggle(Flag::DarkMode)
    }

    pub fn toggle_command_palette(&mut self) -> StateChange {
        self.toggle(Flag::CommandPalette)
    }

    pub fn toggle_terminal(&mut self) -> StateChange {
        self.toggle(Flag::Terminal)
    }

    pub fn toggle_sound(&mut self) -> StateChange {
        self.toggle(Flag::Sound)
    }

    pub fn toggle_game(&mut self) -> StateChange {
        self.toggle(Flag::Game)
    }

    /// Latches `konami_activated`. Later calls leave it set.
    pub fn activate_konami(&mut self) -> StateChange {
        let newly_activated = !self.state.konami_activated;
        self.state.konami_activated = true;
        self.notify(StateChange::KonamiActivated { newly_activated })
    }

    pub fn set_selected_skill_category(&mut self, category: Option<String>) -> StateChange {
        self.state.selected_skill_category = category.clone();
        self.notify(StateChange::SelectedSkillCategory(category))
    }

    pub fn add_visited_section(&mut self, id: impl Into<String>) -> StateChange {
        let id = id.into();
        let newly_visited = self.state.visited_sections.insert(id.clone());
        self.notify(StateChange::VisitedSection { id, newly_visited })
    }

    /// Records an achievement. Only the first unlock of an id reports
    /// `newly_unlocked`, which is what gates its toast.
    pub fn unlock_achievement(&mut self, id: impl Into<String>) -> StateChange {
        let id = id.into();
        let newly_unlocked = self.state.achievements.insert(id.clone());
        if newly_unlocked {
            log::info!("Achievement unlocked: {id}");
        }
        self.notify(StateChange::AchievementUnlocked { id, newly_unlocked })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recording_store() -> (Store, Arc<Mutex<Vec<StateChange>>>) {
        let mut store = Store::default();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();
        store.subscribe(move |_, change| sink.lock().unwrap().push(change.clone()));
        (store, changes)
    }

    #[test]
    fn achievements_hold_exactly_the_distinct_ids() {
        let ids = ["b", "a", "b", "c", "a", "a"];
        let mut store = Store::default();
        for id in ids {
            store.unlock_achievement(id);
        }

        let expected: BTreeSet<String> = ["a", "b", "c"].iter().map(|id| id.to_string()).collect();
        assert_eq!(store.get().achievements, expected);

        let mut reversed = Store::default();
        for id in ids.iter().rev() {
            reversed.unlock_achievement(*id);
        }
        assert_eq!(reversed.get().achievements, expected);
    }

    #[test]
    fn repeated_unlock_notifies_but_is_not_new() {
        let (mut store, changes) = recording_store();
        store.unlock_achievement("first_impression");
        store.unlock_achievement("first_impression");

        assert_eq!(
            *changes.lock().unwrap(),
            vec![
                StateChange::AchievementUnlocked {
                    id: "first_impression".to_string(),
                    newly_unlocked: true,
                },
                StateChange::AchievementUnlocked {
                    id: "first_impression".to_string(),
                    newly_unlocked: false,
                },
            ]
        );
        assert_eq!(store.get().achievements.len(), 1);
        assert!(!store.get().konami_activated);
    }

    #[test]
    fn konami_is_a_latch() {
        let mut store = Store::default();
        assert_eq!(
            store.activate_konami(),
            StateChange::KonamiActivated {
                newly_activated: true
            }
        );
        assert_eq!(
            store.activate_konami(),
            StateChange::KonamiActivated {
                newly_activated: false
            }
        );
        assert!(store.get().konami_activated);
    }

    #[test]
    fn listeners_see_the_updated_state() {
        let mut store = Store::default();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        store.subscribe(move |state, _| *sink.lock().unwrap() = Some(state.terminal_open));

        store.toggle_terminal();
        assert_eq!(*seen.lock().unwrap(), Some(true));
        store.toggle_terminal();
        assert_eq!(*seen.lock().unwrap(), Some(false));
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let (mut store, changes) = recording_store();
        let other = store.subscribe(|_, _| panic!("removed listener was called"));
        assert!(store.unsubscribe(other));
        assert!(!store.unsubscribe(other));

        store.set_loading(false);
        assert_eq!(*changes.lock().unwrap(), vec![StateChange::Loading(false)]);
    }

    #[test]
    fn visibility_flags_are_independent() {
        let mut store = Store::default();
        store.toggle_command_palette();
        store.toggle_game();
        assert!(store.get().command_palette_open);
        assert!(!store.get().terminal_open);
        assert!(store.get().game_active);

        store.toggle_game();
        assert!(store.get().command_palette_open);
        assert!(!store.get().game_active);
    }

    #[test]
    fn apply_routes_actions_to_mutators() {
        let mut store = Store::default();
        store.apply(StoreAction::SetCurrentSection("skills".to_string()));
        store.apply(StoreAction::AddVisitedSection("skills".to_string()));
        store.apply(StoreAction::AddVisitedSection("skills".to_string()));
        store.apply(StoreAction::SetSelectedSkillCategory(Some("Backend".to_string())));
        store.apply(StoreAction::Toggle(Flag::Sound));

        let state = store.get();
        assert_eq!(state.current_section, "skills");
        assert_eq!(state.visited_sections.len(), 1);
        assert_eq!(state.selected_skill_category.as_deref(), Some("Backend"));
        assert!(state.sound_enabled);

        store.apply(StoreAction::SetSelectedSkillCategory(None));
        assert_eq!(store.get().selected_skill_category, None);
    }
}
