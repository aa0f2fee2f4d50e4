use crate::input::parser::parse_command;

mod help;
mod info;
mod plans;

pub use help::AVAILABLE_COMMANDS;

/// The single line answered for anything outside the command table.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type '/help' or '?' to see available commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Status,
    Plans,
    Uptime,
    Specs,
    Support,
    Discord,
    Tutorials,
    Social,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Status,
        Command::Plans,
        Command::Uptime,
        Command::Specs,
        Command::Support,
        Command::Discord,
        Command::Tutorials,
        Command::Social,
    ];

    /// Lowercased lookup key. Help is the only command matched without a slash.
    pub fn key(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Status => "/status",
            Command::Plans => "/plans",
            Command::Uptime => "/uptime",
            Command::Specs => "/specs",
            Command::Support => "/support",
            Command::Discord => "/discord",
            Command::Tutorials => "/tutorials",
            Command::Social => "/social",
        }
    }

    /// Name as shown in the help listing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Help => "/help",
            other => other.key(),
        }
    }

    /// Response lines, in display order. Never empty.
    pub fn respond(&self) -> Vec<String> {
        match self {
            Command::Help => help::help(),
            Command::Plans => plans::plans(),
            Command::Status => info::lines(info::STATUS),
            Command::Uptime => info::lines(info::UPTIME),
            Command::Specs => info::lines(info::SPECS),
            Command::Support => info::lines(info::SUPPORT),
            Command::Discord => info::lines(info::DISCORD),
            Command::Tutorials => info::lines(info::TUTORIALS),
            Command::Social => info::lines(info::SOCIAL),
        }
    }
}

/// Result of dispatching one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Matched command, `None` for the unknown command notice
    pub command: Option<Command>,
    pub lines: Vec<String>,
}

pub fn process_command(raw: &str) -> Reply {
    match parse_command(raw) {
        Some(cmd) => Reply {
            command: Some(cmd),
            lines: cmd.respond(),
        },
        None => Reply {
            command: None,
            lines: vec![UNKNOWN_COMMAND.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_every_command_answers() {
        for cmd in Command::ALL {
            assert!(!cmd.respond().is_empty(), "{cmd:?} has no response");
        }
    }

    #[test]
    fn t_unknown() {
        let reply = process_command("/bogus");
        assert_eq!(reply.command, None);
        assert_eq!(reply.lines, vec![UNKNOWN_COMMAND.to_string()]);
    }

    #[test]
    fn t_help_listing_matches_commands() {
        let names: Vec<&str> = Command::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, AVAILABLE_COMMANDS);
    }

    #[test]
    fn t_status() {
        assert_eq!(
            process_command("/STATUS").lines,
            vec!["All systems operational. Current server load: 42%".to_string()]
        );
    }
}
