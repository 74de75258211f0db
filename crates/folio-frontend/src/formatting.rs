use folio_bridge::achievement::Achievement;
use folio_bridge::notification::{NotificationMessage, NotificationType, Toast};
use folio_bridge::section::Section;
use folio_bridge::state::{AppState, Flag, StateChange};

fn flag_name(flag: Flag) -> &'static str {
    match flag {
        Flag::DarkMode => "dark mode",
        Flag::CommandPalette => "command palette",
        Flag::Terminal => "terminal",
        Flag::Sound => "sound",
        Flag::Game => "game",
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Navigation label of a section id, falling back to the raw id.
fn section_label(id: &str) -> &str {
    Section::from_id(id).map_or(id, |section| section.label())
}

/// One line describing a state change, or `None` for changes that are not
/// worth printing (repeats and bookkeeping).
pub fn describe_change(change: &StateChange) -> Option<String> {
    let line = match change {
        StateChange::CurrentSection(id) => format!("Now viewing: {}", section_label(id)),
        StateChange::Loading(true) => "Loading...".to_string(),
        StateChange::Loading(false) => "Ready.".to_string(),
        StateChange::FlagToggled { flag, value } => {
            format!("{} {}", flag_name(*flag), on_off(*value))
        }
        StateChange::KonamiActivated {
            newly_activated: true,
        } => "Konami code activated!".to_string(),
        StateChange::SelectedSkillCategory(Some(category)) => {
            format!("Skills filtered by {category}")
        }
        StateChange::SelectedSkillCategory(None) => "Showing all skills".to_string(),
        StateChange::KonamiActivated { .. }
        | StateChange::VisitedSection { .. }
        | StateChange::AchievementUnlocked { .. } => return None,
    };
    Some(line)
}

pub fn format_toast(toast: &Toast) -> String {
    format!(
        "{} Achievement unlocked: {} ({}) [{}]",
        toast.icon(),
        toast.title(),
        toast.description(),
        toast.id
    )
}

pub fn format_notification(notification: &NotificationMessage) -> String {
    let tag = match notification.notification_type {
        NotificationType::Info => "info",
        NotificationType::Success => "success",
        NotificationType::Warning => "warning",
        NotificationType::Error => "error",
    };
    format!("[{tag}] {}", notification.message)
}

/// Multi-line summary printed by `:state`.
pub fn format_state(state: &AppState) -> String {
    let visited: Vec<&str> = state
        .visited_sections
        .iter()
        .map(|id| section_label(id))
        .collect();
    let achievements: Vec<&str> = state
        .achievements
        .iter()
        .map(|id| Achievement::from_id(id).map_or(id.as_str(), |achievement| achievement.title()))
        .collect();
    let known = state
        .achievements
        .iter()
        .filter(|id| Achievement::from_id(id).is_some())
        .count();

    format!(
        "section:      {section}\n\
         loading:      {loading}\n\
         theme:        {theme}\n\
         sound:        {sound}\n\
         open:         palette {palette}, terminal {terminal}, game {game}\n\
         konami:       {konami}\n\
         skills:       {skills}\n\
         visited:      {visited}\n\
         achievements: {known}/{total} {achievements}",
        section = section_label(&state.current_section),
        loading = state.is_loading,
        theme = if state.is_dark_mode { "dark" } else { "light" },
        sound = on_off(state.sound_enabled),
        palette = on_off(state.command_palette_open),
        terminal = on_off(state.terminal_open),
        game = on_off(state.game_active),
        konami = state.konami_activated,
        skills = state.selected_skill_category.as_deref().unwrap_or("All"),
        visited = visited.join(", "),
        total = Achievement::ALL.len(),
        achievements = achievements.join(", "),
    )
}
