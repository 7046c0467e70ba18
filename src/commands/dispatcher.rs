//! Turning submitted lines into log output

use super::{normalize, CommandAction, CommandLogEntry, CommandTable};
use crate::config::ContactConfig;
use std::time::Duration;

/// A link a social command wants opened after its output is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOpen {
    pub uri: String,
    /// Cosmetic pause between rendering and opening
    pub delay: Duration,
}

/// Terminal state: input buffer, log, and queued link opens
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    table: CommandTable,
    prompt: String,
    open_delay: Duration,
    log: Vec<CommandLogEntry>,
    input: String,
    pending: Vec<PendingOpen>,
}

impl CommandDispatcher {
    pub fn new(contact: &ContactConfig) -> Self {
        Self::with_table(
            CommandTable::from_contact(contact),
            contact.prompt.clone(),
            contact.open_delay(),
        )
    }

    pub fn with_table(table: CommandTable, prompt: impl Into<String>, open_delay: Duration) -> Self {
        Self {
            table,
            prompt: prompt.into(),
            open_delay,
            log: Vec::new(),
            input: String::new(),
            pending: Vec::new(),
        }
    }

    /// Run one line and return the entries it appended
    ///
    /// `clear` empties the whole log, including its own echo line, and
    /// therefore returns nothing.
    pub fn dispatch(&mut self, raw: &str) -> Vec<CommandLogEntry> {
        let normalized = normalize(raw);
        let start = self.log.len();
        self.log
            .push(CommandLogEntry::echo(format!("{} {}", self.prompt, raw)));

        match self.table.lookup(&normalized) {
            Some(CommandAction::EmitLines(lines)) => {
                debug!("'{}' emits {} lines", normalized, lines.len());
                self.log.extend(lines.iter().cloned());
            }
            Some(CommandAction::OpenUri { uri, announce }) => {
                debug!("'{}' queues open of {}", normalized, uri);
                self.log
                    .extend(announce.iter().map(|l| CommandLogEntry::info(l.as_str())));
                self.pending.push(PendingOpen {
                    uri: uri.clone(),
                    delay: self.open_delay,
                });
            }
            Some(CommandAction::ClearLog) => {
                debug!("Clearing {} log entries", self.log.len());
                self.log.clear();
                self.input.clear();
                return Vec::new();
            }
            None => {
                info!("Unrecognized command: {}", raw.trim());
                self.log.push(CommandLogEntry::error(format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    raw.trim()
                )));
            }
        }

        self.input.clear();
        self.log[start..].to_vec()
    }

    /// Dispatch whatever is in the input buffer
    pub fn submit(&mut self) -> Vec<CommandLogEntry> {
        let line = std::mem::take(&mut self.input);
        self.dispatch(&line)
    }

    /// Hand over queued opens, oldest first
    pub fn take_pending_opens(&mut self) -> Vec<PendingOpen> {
        std::mem::take(&mut self.pending)
    }

    pub fn log(&self) -> &[CommandLogEntry] {
        &self.log
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(&ContactConfig::default())
    }
}
