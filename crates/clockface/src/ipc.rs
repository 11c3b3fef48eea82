use crate::time::{TimeError, TimeText, TimeValue};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/clockpick.sock";

/// One line sent to the picker daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the picker (trigger click).
    Show,
    /// Close it (outside click).
    Hide,
    /// Replace the time option.
    Set(TimeText),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0:?}")]
    Unknown(String),
    #[error("Missing time after 'set'")]
    MissingTime,
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match verb {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "set" => {
                let rest = rest.trim();
                if rest.is_empty() {
                    return Err(CommandError::MissingTime);
                }
                let time: TimeValue = rest.parse()?;
                Ok(Self::Set(TimeText::from(time)))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "show"),
            Self::Hide => write!(f, "hide"),
            Self::Set(time) => write!(f, "set {}", time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("show".parse(), Ok(Command::Show));
        assert_eq!("  hide\n".parse(), Ok(Command::Hide));
        assert_eq!(
            "set 7:5".parse(),
            Ok(Command::Set(TimeText::new("07:05")))
        );
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!("set".parse::<Command>(), Err(CommandError::MissingTime));
        assert_eq!(
            "open".parse::<Command>(),
            Err(CommandError::Unknown("open".to_string()))
        );
        assert!(matches!(
            "set noon".parse::<Command>(),
            Err(CommandError::Time(TimeError::Format(_)))
        ));
    }

    #[test]
    fn test_display_is_parseable() {
        let set = Command::Set(TimeText::new("18:45"));
        assert_eq!(set.to_string(), "set 18:45");
        assert_eq!(set.to_string().parse(), Ok(set));
    }
}
