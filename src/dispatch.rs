//! Argument dispatch.
//!
//! One optional positional argument picks the action:
//!
//! | argument        | action                              |
//! |-----------------|-------------------------------------|
//! | none or empty   | build                               |
//! | `clean`         | clean                               |
//! | anything else   | print "Unknown command", do nothing |

use anyhow::Result;

use crate::commands;
use crate::config::Config;

/// Literal that selects the clean action.
pub const CLEAN: &str = "clean";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Build,
    Clean,
    Unknown(String),
}

impl Command {
    /// Matching is exact; `Clean` or ` clean` are unknown commands.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") => Self::Build,
            Some(CLEAN) => Self::Clean,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

pub fn unknown_command_message(arg: &str) -> String {
    format!("Unknown command: {}", arg)
}

/// Print the unknown-command message and a usage line.
pub fn report_unknown(arg: &str) {
    println!("{}", unknown_command_message(arg));
    println!("Usage: texbuild [{}]", CLEAN);
}

/// Run the action selected by `arg`.
///
/// An unknown command is reported and otherwise succeeds without touching
/// the filesystem.
pub fn dispatch(arg: Option<&str>, config: &Config) -> Result<()> {
    match Command::parse(arg) {
        Command::Build => {
            commands::cmd_build(config)?;
        }
        Command::Clean => {
            commands::cmd_clean(config)?;
        }
        Command::Unknown(arg) => report_unknown(&arg),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse(None), Command::Build);
        assert_eq!(Command::parse(Some("")), Command::Build);
        assert_eq!(Command::parse(Some("clean")), Command::Clean);
        assert_eq!(
            Command::parse(Some("Clean")),
            Command::Unknown("Clean".to_string())
        );
        assert_eq!(
            Command::parse(Some("build")),
            Command::Unknown("build".to_string())
        );
    }

    #[test]
    fn test_unknown_message_names_argument() {
        assert!(unknown_command_message("foo").contains("foo"));
    }
}
