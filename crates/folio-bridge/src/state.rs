use std::collections::BTreeSet;

use crate::config::Config;
use crate::section::Section;

/// Snapshot of the application state for one session.
///
/// Sets only ever grow within a session, and `konami_activated` is a latch.
/// Nothing here is persisted; a new session always starts from defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Last section scrolled into view.
    pub current_section: String,
    /// True until the initial load completes.
    pub is_loading: bool,
    pub is_dark_mode: bool,
    pub command_palette_open: bool,
    pub terminal_open: bool,
    pub game_active: bool,
    pub sound_enabled: bool,
    pub konami_activated: bool,
    /// Active skill filter, `None` meaning all categories.
    pub selected_skill_category: Option<String>,
    pub visited_sections: BTreeSet<String>,
    pub achievements: BTreeSet<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_section: Section::Hero.id().to_string(),
            is_loading: true,
            is_dark_mode: true,
            command_palette_open: false,
            terminal_open: false,
            game_active: false,
            sound_enabled: false,
            konami_activated: false,
            selected_skill_category: None,
            visited_sections: BTreeSet::new(),
            achievements: BTreeSet::new(),
        }
    }
}

impl AppState {
    /// Initial state with the cosmetic toggles taken from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            is_dark_mode: config.appearance.dark_mode,
            sound_enabled: config.appearance.sound_enabled,
            ..Self::default()
        }
    }

    /// Current value of a boolean toggle.
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::DarkMode => self.is_dark_mode,
            Flag::CommandPalette => self.command_palette_open,
            Flag::Terminal => self.terminal_open,
            Flag::Sound => self.sound_enabled,
            Flag::Game => self.game_active,
        }
    }

    pub(crate) fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::DarkMode => &mut self.is_dark_mode,
            Flag::CommandPalette => &mut self.command_palette_open,
            Flag::Terminal => &mut self.terminal_open,
            Flag::Sound => &mut self.sound_enabled,
            Flag::Game => &mut self.game_active,
        }
    }

    /// Flips a boolean toggle and returns its new value.
    pub fn toggle_flag(&mut self, flag: Flag) -> bool {
        let value = self.flag_mut(flag);
        *value = !*value;
        *value
    }
}

/// Boolean toggles that can be flipped independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    DarkMode,
    CommandPalette,
    Terminal,
    Sound,
    Game,
}

/// A single named mutator call, as issued by a surface over the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    SetCurrentSection(String),
    SetLoading(bool),
    Toggle(Flag),
    ActivateKonami,
    SetSelectedSkillCategory(Option<String>),
    AddVisitedSection(String),
    UnlockAchievement(String),
}

/// The transition applied by one mutator call, handed to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    CurrentSection(String),
    Loading(bool),
    FlagToggled { flag: Flag, value: bool },
    KonamiActivated { newly_activated: bool },
    SelectedSkillCategory(Option<String>),
    VisitedSection { id: String, newly_visited: bool },
    AchievementUnlocked { id: String, newly_unlocked: bool },
}
