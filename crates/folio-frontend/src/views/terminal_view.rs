use folio_bridge::state::{Flag, StoreAction};

const WELCOME: &str = "Welcome to the portfolio terminal! Type \"help\" for commands.";

/// Commands understood by the terminal easter egg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    Ls,
    CdProjects,
    CdSkills,
    CatContact,
    About,
    Skills,
    Projects,
    Clear,
    Exit,
}

impl TerminalCommand {
    pub const ALL: [TerminalCommand; 10] = [
        TerminalCommand::Help,
        TerminalCommand::Ls,
        TerminalCommand::CdProjects,
        TerminalCommand::CdSkills,
        TerminalCommand::CatContact,
        TerminalCommand::About,
        TerminalCommand::Skills,
        TerminalCommand::Projects,
        TerminalCommand::Clear,
        TerminalCommand::Exit,
    ];

    /// Exact, case-sensitive lookup of an already trimmed input line.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == input)
    }

    pub fn name(self) -> &'static str {
        match self {
            TerminalCommand::Help => "help",
            TerminalCommand::Ls => "ls",
            TerminalCommand::CdProjects => "cd projects",
            TerminalCommand::CdSkills => "cd skills",
            TerminalCommand::CatContact => "cat contact.txt",
            TerminalCommand::About => "about",
            TerminalCommand::Skills => "skills",
            TerminalCommand::Projects => "projects",
            TerminalCommand::Clear => "clear",
            TerminalCommand::Exit => "exit",
        }
    }

    fn output(self) -> &'static str {
        match self {
            TerminalCommand::Help => {
                "Available commands: ls, cd, cat, about, skills, projects, clear, exit"
            }
            TerminalCommand::Ls => "projects/  skills/  experience/  contact.txt  README.md",
            TerminalCommand::CdProjects => "Entering projects directory...",
            TerminalCommand::CdSkills => "Entering skills directory...",
            TerminalCommand::CatContact => {
                "Email: hello@example.com\nGitHub: github.com/example\nLinkedIn: linkedin.com/in/example"
            }
            TerminalCommand::About => "Full-Stack Developer & AI Enthusiast",
            TerminalCommand::Skills => {
                "React, TypeScript, Three.js, Python, AI/ML, MongoDB, Node.js"
            }
            TerminalCommand::Projects => {
                "1. Aritrova - AI 3D Generation\n2. Grocery Planner AI\n3. This Portfolio"
            }
            TerminalCommand::Clear => "",
            TerminalCommand::Exit => "Goodbye!",
        }
    }
}

/// Scrollback and command handling of the terminal panel.
#[derive(Debug, Clone)]
pub struct TerminalView {
    history: Vec<String>,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            history: vec![WELCOME.to_string()],
        }
    }
}

impl TerminalView {
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Runs one input line. Returns the store action the command issues, if
    /// any; only `exit` issues one (closing the terminal).
    pub fn submit(&mut self, input: &str) -> Option<StoreAction> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let Some(command) = TerminalCommand::parse(input) else {
            self.history.push(format!("$ {input}"));
            self.history.push(format!("Command not found: {input}"));
            return None;
        };

        if command == TerminalCommand::Clear {
            self.history.clear();
            return None;
        }

        self.history.push(format!("$ {input}"));
        self.history.push(command.output().to_string());

        (command == TerminalCommand::Exit).then_some(StoreAction::Toggle(Flag::Terminal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_echo_and_answer() {
        let mut terminal = TerminalView::default();
        assert_eq!(terminal.submit("  ls "), None);
        assert_eq!(
            terminal.history()[1..],
            [
                "$ ls".to_string(),
                "projects/  skills/  experience/  contact.txt  README.md".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_and_blank_input() {
        let mut terminal = TerminalView::default();
        terminal.submit("   ");
        assert_eq!(terminal.history().len(), 1);

        terminal.submit("rm -rf /");
        assert_eq!(
            terminal.history().last().map(String::as_str),
            Some("Command not found: rm -rf /")
        );
        // Lookup is exact.
        terminal.submit("LS");
        assert_eq!(
            terminal.history().last().map(String::as_str),
            Some("Command not found: LS")
        );
    }

    #[test]
    fn clear_empties_the_scrollback() {
        let mut terminal = TerminalView::default();
        terminal.submit("about");
        terminal.submit("clear");
        assert!(terminal.history().is_empty());
    }

    #[test]
    fn exit_closes_the_terminal() {
        let mut terminal = TerminalView::default();
        assert_eq!(
            terminal.submit("exit"),
            Some(StoreAction::Toggle(Flag::Terminal))
        );
        assert_eq!(
            terminal.history().last().map(String::as_str),
            Some("Goodbye!")
        );
    }
}
