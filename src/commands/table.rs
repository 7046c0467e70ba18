//! Static command vocabulary

use super::{normalize, CommandLogEntry};
use crate::config::ContactConfig;
use std::collections::HashMap;

/// Output of `help` (and its `connect --help` alias)
pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  • github    - View open source projects",
    "  • linkedin  - Professional profile",
    "  • email     - Direct message",
    "  • discord   - Community chat",
    "  • clear     - Wipe the terminal",
    "Easter egg: Try typing \"konami\" for a surprise...",
];

/// Output of `konami`
pub const KONAMI_LINES: &[&str] = &[
    "↑ ↑ ↓ ↓ ← → ← → B A",
    "CHEAT CODE ACTIVATED",
    "+30 lives granted. Welcome to the inner circle.",
];

/// What a recognized command does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Print `announce`, then open `uri` once the lines are on screen
    OpenUri { uri: String, announce: Vec<String> },
    /// Print fixed lines
    EmitLines(Vec<CommandLogEntry>),
    /// Empty the log
    ClearLog,
}

/// Normalized command string → action
///
/// Built once at startup and never changed afterwards.
#[derive(Debug, Clone)]
pub struct CommandTable {
    actions: HashMap<String, CommandAction>,
}

impl CommandTable {
    /// Vocabulary with social links taken from `contact`
    pub fn from_contact(contact: &ContactConfig) -> Self {
        let mut actions = HashMap::new();

        let help = CommandAction::EmitLines(
            HELP_LINES.iter().map(|l| CommandLogEntry::info(*l)).collect(),
        );
        actions.insert("help".to_string(), help.clone());
        actions.insert("connect --help".to_string(), help);

        for (name, uri) in contact.social_links() {
            actions.insert(
                name.to_string(),
                CommandAction::OpenUri {
                    uri: uri.to_string(),
                    announce: vec![format!("{} {}", announce_for(name), uri)],
                },
            );
        }

        actions.insert("clear".to_string(), CommandAction::ClearLog);
        actions.insert(
            "konami".to_string(),
            CommandAction::EmitLines(
                KONAMI_LINES
                    .iter()
                    .map(|l| CommandLogEntry::special(*l))
                    .collect(),
            ),
        );

        debug!("Command table ready with {} entries", actions.len());
        Self { actions }
    }

    /// Action for an already-normalized command
    pub fn lookup(&self, normalized: &str) -> Option<&CommandAction> {
        self.actions.get(normalized)
    }

    /// Normalize `input` and look it up
    pub fn resolve(&self, input: &str) -> Option<&CommandAction> {
        self.lookup(&normalize(input))
    }

    /// Every recognized command, sorted
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::from_contact(&ContactConfig::default())
    }
}

fn announce_for(name: &str) -> &'static str {
    match name {
        "github" => "Opening GitHub profile:",
        "linkedin" => "Opening LinkedIn profile:",
        "email" => "Launching mail client:",
        "discord" => "Joining Discord community:",
        _ => "Opening:",
    }
}
