//! Console input matching.
//!
//! There is no grammar: the whole trimmed line is lowercased and looked up as-is.
//!
//!   "help" / "?" / " HELP "   -> Command::Help
//!   "/plans" / "/Plans"       -> Command::Plans
//!   "/help"                   -> no match (help has no slash form)
//!   "/status now"             -> no match (no arguments)

use crate::commands::Command;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Extra keys that map onto an existing command.
const ALIASES: &[(&str, Command)] = &[("?", Command::Help)];

static COMMAND_TABLE: Lazy<HashMap<&'static str, Command>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Command> = Command::ALL.iter().map(|c| (c.key(), *c)).collect();
    for (alias, cmd) in ALIASES {
        table.insert(*alias, *cmd);
    }
    table
});

/// Normalized form used for matching. The echoed line keeps the raw input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn parse_command(raw: &str) -> Option<Command> {
    let key = normalize(raw);
    COMMAND_TABLE.get(key.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_help_aliases() {
        assert_eq!(parse_command("help"), Some(Command::Help));
        assert_eq!(parse_command("HELP"), Some(Command::Help));
        assert_eq!(parse_command("Help"), Some(Command::Help));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("  ?  "), Some(Command::Help));
    }

    #[test]
    fn t_help_has_no_slash_form() {
        assert_eq!(parse_command("/help"), None);
    }

    #[test]
    fn t_slash_commands() {
        assert_eq!(parse_command("/status"), Some(Command::Status));
        assert_eq!(parse_command("/PLANS"), Some(Command::Plans));
        assert_eq!(parse_command(" /Uptime "), Some(Command::Uptime));
        assert_eq!(parse_command("/social"), Some(Command::Social));
    }

    #[test]
    fn t_bare_words_need_slash() {
        assert_eq!(parse_command("status"), None);
        assert_eq!(parse_command("plans"), None);
    }

    #[test]
    fn t_no_prefix_or_args() {
        assert_eq!(parse_command("/stat"), None);
        assert_eq!(parse_command("/status now"), None);
        assert_eq!(parse_command("/ status"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn t_every_command_key_resolves() {
        for cmd in Command::ALL {
            assert_eq!(parse_command(cmd.key()), Some(cmd));
        }
    }
}
