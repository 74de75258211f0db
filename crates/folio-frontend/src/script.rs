//! Parsing of console input lines.
//!
//! Plain text is typed key by key: every character produces a key-down
//! followed by a key-press, the way a browser reports it. Tokens in angle
//! brackets name special keys (`<up>`, `<esc>`, `<ctrl-k>`, ...), and `<lt>`
//! types a literal `<`. Lines starting with `:` drive the console surfaces
//! instead.

use std::time::Duration;

use folio_bridge::input::{Key, KeyEvent, Modifiers};
use folio_bridge::notification::ToastId;
use folio_bridge::section::skill_category_selection;
use thiserror::Error;

/// Viewport height assumed by `:scroll` when none is given.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

pub const HELP: &str = "\
Type text to send it as key presses. Special keys: <up> <down> <left> <right>
<esc> <enter> <backspace> <ctrl-k> <cmd-k> <lt>.
Commands:
  :scroll <offset> [viewport]   scroll the page
  :term <command>               run a command in the open terminal
  :palette [query]              filter the open command palette
  :run <n>                      run the n-th listed palette command
  :game start|quit              start or leave the open game
  :category <name>|all          pick a skill category
  :dismiss <n>                  dismiss toast #n
  :wait <ms>                    keep listening before reading more input
  :state                        print the current state
  :help                         print this help
  :quit                         exit";

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("unknown command `:{0}`, try :help")]
    UnknownCommand(String),

    #[error("unknown key `<{0}>`")]
    UnknownKey(String),

    #[error("unterminated key token `<{0}`")]
    UnterminatedKey(String),

    #[error("`:{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),

    #[error("unknown skill category `{0}`")]
    UnknownCategory(String),

    #[error("unknown game action `{0}`, expected start or quit")]
    UnknownGameAction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Quit,
}

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptInput {
    Keys(Vec<KeyEvent>),
    Scroll { offset: f64, viewport_height: f64 },
    Terminal(String),
    Palette(String),
    /// 1-based position in the filtered palette list.
    Run(usize),
    Game(GameAction),
    /// `None` selects every category.
    Category(Option<String>),
    Dismiss(ToastId),
    Wait(Duration),
    State,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ScriptInput, ScriptError> {
    match line.strip_prefix(':') {
        Some(command) => parse_command(command),
        None => parse_keys(line).map(ScriptInput::Keys),
    }
}

fn parse_command(command: &str) -> Result<ScriptInput, ScriptError> {
    let (name, argument) = match command.trim().split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command.trim(), ""),
    };

    let input = match name {
        "scroll" => {
            let mut numbers = argument.split_whitespace();
            let offset = numbers
                .next()
                .ok_or(ScriptError::MissingArgument("scroll"))
                .and_then(parse_number)?;
            let viewport_height = match numbers.next() {
                Some(height) => parse_number(height)?,
                None => DEFAULT_VIEWPORT_HEIGHT,
            };
            ScriptInput::Scroll {
                offset,
                viewport_height,
            }
        }
        "term" => ScriptInput::Terminal(argument.to_string()),
        "palette" => ScriptInput::Palette(argument.to_string()),
        "run" => ScriptInput::Run(parse_index(argument, "run")?),
        "game" => match argument {
            "start" => ScriptInput::Game(GameAction::Start),
            "quit" => ScriptInput::Game(GameAction::Quit),
            "" => return Err(ScriptError::MissingArgument("game")),
            other => return Err(ScriptError::UnknownGameAction(other.to_string())),
        },
        "category" => {
            if argument.is_empty() {
                return Err(ScriptError::MissingArgument("category"));
            }
            let selection = skill_category_selection(argument)
                .ok_or_else(|| ScriptError::UnknownCategory(argument.to_string()))?;
            ScriptInput::Category(selection)
        }
        "dismiss" => ScriptInput::Dismiss(ToastId(parse_index(argument, "dismiss")? as u64)),
        "wait" => ScriptInput::Wait(Duration::from_millis(parse_index(argument, "wait")? as u64)),
        "state" => ScriptInput::State,
        "help" => ScriptInput::Help,
        "quit" | "q" => ScriptInput::Quit,
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(input)
}

fn parse_number(value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber(value.to_string()))
}

fn parse_index(value: &str, command: &'static str) -> Result<usize, ScriptError> {
    if value.is_empty() {
        return Err(ScriptError::MissingArgument(command));
    }
    value
        .parse()
        .map_err(|_| ScriptError::InvalidNumber(value.to_string()))
}

/// Turns typed text into the key events a browser would report for it.
pub fn parse_keys(text: &str) -> Result<Vec<KeyEvent>, ScriptError> {
    let mut events = Vec::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            type_char(&mut events, ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for next in chars.by_ref() {
            if next == '>' {
                closed = true;
                break;
            }
            token.push(next);
        }
        if !closed {
            return Err(ScriptError::UnterminatedKey(token));
        }
        events.extend(special_key(&token)?);
    }

    Ok(events)
}

fn type_char(events: &mut Vec<KeyEvent>, ch: char) {
    events.push(KeyEvent::down(Key::Character(ch)));
    events.push(KeyEvent::Press(ch));
}

fn special_key(token: &str) -> Result<Vec<KeyEvent>, ScriptError> {
    let key = match token.to_ascii_lowercase().as_str() {
        "up" => Key::ArrowUp,
        "down" => Key::ArrowDown,
        "left" => Key::ArrowLeft,
        "right" => Key::ArrowRight,
        "esc" | "escape" => Key::Escape,
        "enter" => Key::Enter,
        "backspace" => Key::Backspace,
        "lt" => {
            let mut events = Vec::with_capacity(2);
            type_char(&mut events, '<');
            return Ok(events);
        }
        "ctrl-k" => {
            return Ok(vec![KeyEvent::Down {
                key: Key::Character('k'),
                modifiers: Modifiers::CTRL,
            }]);
        }
        "cmd-k" | "meta-k" => {
            return Ok(vec![KeyEvent::Down {
                key: Key::Character('k'),
                modifiers: Modifiers {
                    meta: true,
                    ..Modifiers::NONE
                },
            }]);
        }
        _ => return Err(ScriptError::UnknownKey(token.to_string())),
    };
    Ok(vec![KeyEvent::down(key)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_typed_character_by_character() {
        assert_eq!(
            parse_line("ab"),
            Ok(ScriptInput::Keys(vec![
                KeyEvent::down(Key::Character('a')),
                KeyEvent::Press('a'),
                KeyEvent::down(Key::Character('b')),
                KeyEvent::Press('b'),
            ]))
        );
        assert_eq!(parse_line(""), Ok(ScriptInput::Keys(Vec::new())));
    }

    #[test]
    fn special_keys_only_go_down() {
        let events = parse_keys("<up><Down><esc><ctrl-k>").unwrap();
        assert_eq!(
            events,
            vec![
                KeyEvent::down(Key::ArrowUp),
                KeyEvent::down(Key::ArrowDown),
                KeyEvent::down(Key::Escape),
                KeyEvent::Down {
                    key: Key::Character('k'),
                    modifiers: Modifiers::CTRL,
                },
            ]
        );
        assert_eq!(parse_keys("<lt>").unwrap()[1], KeyEvent::Press('<'));
    }

    #[test]
    fn bad_key_tokens() {
        assert_eq!(
            parse_keys("<f5>"),
            Err(ScriptError::UnknownKey("f5".to_string()))
        );
        assert_eq!(
            parse_keys("a<up"),
            Err(ScriptError::UnterminatedKey("up".to_string()))
        );
    }

    #[test]
    fn commands() {
        assert_eq!(
            parse_line(":scroll 1200"),
            Ok(ScriptInput::Scroll {
                offset: 1200.0,
                viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            })
        );
        assert_eq!(
            parse_line(":term   cat contact.txt "),
            Ok(ScriptInput::Terminal("cat contact.txt".to_string()))
        );
        assert_eq!(parse_line(":run 2"), Ok(ScriptInput::Run(2)));
        assert_eq!(parse_line(":game start"), Ok(ScriptInput::Game(GameAction::Start)));
        assert_eq!(parse_line(":category all"), Ok(ScriptInput::Category(None)));
        assert_eq!(
            parse_line(":category Frontend"),
            Ok(ScriptInput::Category(Some("Frontend".to_string())))
        );
        assert_eq!(parse_line(":dismiss 3"), Ok(ScriptInput::Dismiss(ToastId(3))));
        assert_eq!(
            parse_line(":wait 3000"),
            Ok(ScriptInput::Wait(Duration::from_secs(3)))
        );
        assert_eq!(parse_line(":q"), Ok(ScriptInput::Quit));
    }

    #[test]
    fn command_errors() {
        assert_eq!(
            parse_line(":teleport"),
            Err(ScriptError::UnknownCommand("teleport".to_string()))
        );
        assert_eq!(
            parse_line(":scroll"),
            Err(ScriptError::MissingArgument("scroll"))
        );
        assert_eq!(
            parse_line(":scroll down"),
            Err(ScriptError::InvalidNumber("down".to_string()))
        );
        assert_eq!(
            parse_line(":category Cooking"),
            Err(ScriptError::UnknownCategory("Cooking".to_string()))
        );
        assert_eq!(
            parse_line(":game over"),
            Err(ScriptError::UnknownGameAction("over".to_string()))
        );
    }
}
