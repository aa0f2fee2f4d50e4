use serde::Serialize;
use std::fmt;

/// How a log line should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Scripted boot line
    Boot,
    /// User input, echoed back with a "> " prefix
    Input,
    /// Output of a command (or the unknown command notice)
    Response,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn boot(text: impl Into<String>) -> Self {
        Self { role: Role::Boot, text: text.into() }
    }

    /// Echo entry for a submitted line. The raw input is kept as typed.
    pub fn echo(raw: &str) -> Self {
        Self { role: Role::Input, text: format!("> {raw}") }
    }

    pub fn response(text: impl Into<String>) -> Self {
        Self { role: Role::Response, text: text.into() }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text.fmt(f)
    }
}
