use folio_bridge::state::{Flag, StoreAction};

/// Entries of the command palette, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
    DownloadResume,
    ViewSource,
    ToggleTheme,
    ToggleSound,
    OpenTerminal,
    StartGame,
}

impl PaletteCommand {
    pub const ALL: [PaletteCommand; 6] = [
        PaletteCommand::DownloadResume,
        PaletteCommand::ViewSource,
        PaletteCommand::ToggleTheme,
        PaletteCommand::ToggleSound,
        PaletteCommand::OpenTerminal,
        PaletteCommand::StartGame,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaletteCommand::DownloadResume => "Download Resume",
            PaletteCommand::ViewSource => "View Source",
            PaletteCommand::ToggleTheme => "Toggle Theme",
            PaletteCommand::ToggleSound => "Toggle Sound",
            PaletteCommand::OpenTerminal => "Open Terminal",
            PaletteCommand::StartGame => "Start Game",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PaletteCommand::DownloadResume => "📄",
            PaletteCommand::ViewSource => "👨‍💻",
            PaletteCommand::ToggleTheme => "🎨",
            PaletteCommand::ToggleSound => "🔊",
            PaletteCommand::OpenTerminal => "💻",
            PaletteCommand::StartGame => "🎮",
        }
    }

    /// Store mutation issued by the command. Commands that only open
    /// external content have none.
    pub fn action(self) -> Option<StoreAction> {
        match self {
            PaletteCommand::DownloadResume | PaletteCommand::ViewSource => None,
            PaletteCommand::ToggleTheme => Some(StoreAction::Toggle(Flag::DarkMode)),
            PaletteCommand::ToggleSound => Some(StoreAction::Toggle(Flag::Sound)),
            PaletteCommand::OpenTerminal => Some(StoreAction::Toggle(Flag::Terminal)),
            PaletteCommand::StartGame => Some(StoreAction::Toggle(Flag::Game)),
        }
    }
}

/// Search state of the command palette overlay.
#[derive(Debug, Clone, Default)]
pub struct PaletteView {
    query: String,
}

impl PaletteView {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Commands whose label contains the query, ignoring case.
    pub fn filtered(&self) -> Vec<PaletteCommand> {
        let query = self.query.to_lowercase();
        PaletteCommand::ALL
            .into_iter()
            .filter(|command| command.label().to_lowercase().contains(&query))
            .collect()
    }

    /// Executes the `index`-th filtered command. Returns the actions to
    /// dispatch, always ending with closing the palette, or `None` when the
    /// index is out of range.
    pub fn execute(&mut self, index: usize) -> Option<Vec<StoreAction>> {
        let command = *self.filtered().get(index)?;
        log::info!("Running palette command: {}", command.label());

        let mut actions: Vec<StoreAction> = command.action().into_iter().collect();
        actions.push(StoreAction::Toggle(Flag::CommandPalette));
        self.query.clear();
        Some(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_everything() {
        assert_eq!(PaletteView::default().filtered(), PaletteCommand::ALL.to_vec());
    }

    #[test]
    fn filtering_ignores_case() {
        let mut palette = PaletteView::default();
        palette.set_query("TOGGLE");
        assert_eq!(
            palette.filtered(),
            vec![PaletteCommand::ToggleTheme, PaletteCommand::ToggleSound]
        );
        palette.set_query("nothing here");
        assert!(palette.filtered().is_empty());
    }

    #[test]
    fn executing_dispatches_then_closes() {
        let mut palette = PaletteView::default();
        palette.set_query("terminal");
        assert_eq!(
            palette.execute(0),
            Some(vec![
                StoreAction::Toggle(Flag::Terminal),
                StoreAction::Toggle(Flag::CommandPalette),
            ])
        );
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn link_commands_only_close() {
        let mut palette = PaletteView::default();
        assert_eq!(
            palette.execute(1),
            Some(vec![StoreAction::Toggle(Flag::CommandPalette)])
        );
        assert_eq!(palette.execute(42), None);
    }
}
