/// Achievements with known display metadata.
///
/// The store keeps unlocked achievements as opaque identifiers, so ids that
/// are not listed here can still be unlocked; they simply have nothing to
/// display (see [`Achievement::from_id`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstImpression,
    SkillExplorer,
    KonamiMaster,
    ProjectViewer,
    TerminalHacker,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstImpression,
        Achievement::SkillExplorer,
        Achievement::KonamiMaster,
        Achievement::ProjectViewer,
        Achievement::TerminalHacker,
    ];

    /// Resolves an identifier to its catalog entry, or `None` when the
    /// identifier has no display metadata.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|achievement| achievement.id() == id)
    }

    /// Stable identifier stored in the application state.
    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstImpression => "first_impression",
            Achievement::SkillExplorer => "skill_explorer",
            Achievement::KonamiMaster => "konami_master",
            Achievement::ProjectViewer => "project_viewer",
            Achievement::TerminalHacker => "terminal_hacker",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstImpression => "First Impression",
            Achievement::SkillExplorer => "Skill Explorer",
            Achievement::KonamiMaster => "Konami Master",
            Achievement::ProjectViewer => "Project Viewer",
            Achievement::TerminalHacker => "Terminal Hacker",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstImpression => "Welcome to my portfolio!",
            Achievement::SkillExplorer => "Discovered my technical arsenal",
            Achievement::KonamiMaster => "You found the secret code!",
            Achievement::ProjectViewer => "Explored my work",
            Achievement::TerminalHacker => "Accessed the command line",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Achievement::FirstImpression => "🎆",
            Achievement::SkillExplorer => "📡",
            Achievement::KonamiMaster => "🎮",
            Achievement::ProjectViewer => "🚀",
            Achievement::TerminalHacker => "💻",
        }
    }
}

/// Unlocked by finishing the mini game. Deliberately absent from the
/// catalog, so it is recorded without a toast.
pub const GAME_MASTER: &str = "game_master";
