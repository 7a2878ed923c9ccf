//! Line commands accepted during an interactive session.
//!
//! Each line maps to one engine operation, standing in for the buttons,
//! duration fields and Escape key of a graphical front end.

use crate::types::{parse_minutes, Mode};

/// Help shown by the `help` command.
pub const HELP: &str = "\
Commands:
  s, start                 start the countdown
  p, pause                 pause the countdown
  esc                      pause if running
  r, reset                 pause and restore the full duration
  mode <pomodoro|short|long>
                           switch interval type
  set <pomodoro|short|long> <minutes>
                           change a duration (minimum 1 minute)
  settings                 show configured durations
  h, help                  show this help
  q, quit                  leave";

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Pause,
    /// Pause only if running
    Escape,
    Reset,
    Mode(Mode),
    Set { mode: Mode, minutes: u32 },
    Settings,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one input line.
    ///
    /// Blank lines yield `Ok(None)`. A missing or non-numeric minute value
    /// in `set` falls back to the default duration of that mode.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands or modes.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };

        let parsed = match command.to_ascii_lowercase().as_str() {
            "s" | "start" => Self::Start,
            "p" | "pause" => Self::Pause,
            "esc" | "escape" => Self::Escape,
            "r" | "reset" => Self::Reset,
            "m" | "mode" => {
                let mode = words
                    .next()
                    .ok_or_else(|| "usage: mode <pomodoro|short|long>".to_string())?
                    .parse::<Mode>()?;
                Self::Mode(mode)
            }
            "set" => {
                let mode = words
                    .next()
                    .ok_or_else(|| "usage: set <pomodoro|short|long> <minutes>".to_string())?
                    .parse::<Mode>()?;
                let minutes = parse_minutes(words.next().unwrap_or(""), mode);
                Self::Set { mode, minutes }
            }
            "settings" => Self::Settings,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{}' (type 'help')", other)),
        };

        Ok(Some(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(SessionCommand::parse("").unwrap(), None);
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_simple_commands_and_aliases() {
        assert_eq!(parse("start"), SessionCommand::Start);
        assert_eq!(parse("S"), SessionCommand::Start);
        assert_eq!(parse("p"), SessionCommand::Pause);
        assert_eq!(parse("esc"), SessionCommand::Escape);
        assert_eq!(parse("reset"), SessionCommand::Reset);
        assert_eq!(parse("settings"), SessionCommand::Settings);
        assert_eq!(parse("?"), SessionCommand::Help);
        assert_eq!(parse("quit"), SessionCommand::Quit);
    }

    #[test]
    fn test_mode() {
        assert_eq!(parse("mode short"), SessionCommand::Mode(Mode::ShortBreak));
        assert_eq!(parse("m long"), SessionCommand::Mode(Mode::LongBreak));
        assert!(SessionCommand::parse("mode").is_err());
        assert!(SessionCommand::parse("mode nap").is_err());
    }

    #[test]
    fn test_set() {
        assert_eq!(
            parse("set pomodoro 30"),
            SessionCommand::Set {
                mode: Mode::Pomodoro,
                minutes: 30
            }
        );
    }

    #[test]
    fn test_set_recovers_bad_minutes() {
        assert_eq!(
            parse("set short abc"),
            SessionCommand::Set {
                mode: Mode::ShortBreak,
                minutes: 5
            }
        );
        assert_eq!(
            parse("set long"),
            SessionCommand::Set {
                mode: Mode::LongBreak,
                minutes: 15
            }
        );
        assert_eq!(
            parse("set pomodoro 1.5"),
            SessionCommand::Set {
                mode: Mode::Pomodoro,
                minutes: 1
            }
        );
        assert_eq!(
            parse("set long 0"),
            SessionCommand::Set {
                mode: Mode::LongBreak,
                minutes: 1
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = SessionCommand::parse("fly").unwrap_err();
        assert!(err.contains("fly"));
    }

    #[test]
    fn test_help_mentions_every_command() {
        for word in ["start", "pause", "esc", "reset", "mode", "set", "settings", "quit"] {
            assert!(HELP.contains(word), "help is missing {}", word);
        }
    }
}
