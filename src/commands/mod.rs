//! The contact section's command terminal
//!
//! Input is matched against a fixed [`CommandTable`] after trimming and
//! lowercasing. Every outcome, including an unknown command, is expressed as
//! lines appended to the terminal log; nothing here returns an error.

pub mod dispatcher;
pub mod table;

pub use dispatcher::{CommandDispatcher, PendingOpen};
pub use table::{CommandAction, CommandTable, HELP_LINES, KONAMI_LINES};

use serde::{Deserialize, Serialize};

/// How a log line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    /// The submitted command, prefixed with the prompt
    Echo,
    /// Regular output
    Info,
    /// Unrecognized command
    Error,
    /// Easter eggs
    Special,
}

/// One line of the terminal log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLogEntry {
    pub text: String,
    pub category: LogCategory,
}

impl CommandLogEntry {
    pub fn new(text: impl Into<String>, category: LogCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn echo(text: impl Into<String>) -> Self {
        Self::new(text, LogCategory::Echo)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, LogCategory::Info)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LogCategory::Error)
    }

    pub fn special(text: impl Into<String>) -> Self {
        Self::new(text, LogCategory::Special)
    }
}

/// Canonical lookup form of a command line
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Check if a line asks to leave the terminal session
///
/// Handled by the session loop, not by the command table.
pub fn is_exit_command(input: &str) -> bool {
    matches!(normalize(input).as_str(), "exit" | "logout" | "quit")
}
