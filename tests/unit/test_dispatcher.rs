//! Unit tests for the contact terminal dispatcher
//!
//! These exercise the public dispatch contract: echo, lookup, fallback,
//! and the clear action.

use cyberport::commands::{CommandDispatcher, LogCategory, HELP_LINES, KONAMI_LINES};
use cyberport::config::ContactConfig;

#[cfg(test)]
mod dispatcher_tests {
    use super::*;

    fn categories(entries: &[cyberport::CommandLogEntry]) -> Vec<LogCategory> {
        entries.iter().map(|e| e.category).collect()
    }

    #[test]
    fn test_case_and_whitespace_normalize_identically() {
        let mut a = CommandDispatcher::default();
        let mut b = CommandDispatcher::default();

        let upper = a.dispatch("GitHub");
        let padded = b.dispatch(" github ");

        assert_eq!(categories(&upper), categories(&padded));
        assert_eq!(upper[1..], padded[1..]);
        assert_eq!(
            a.take_pending_opens(),
            b.take_pending_opens()
        );
    }

    #[test]
    fn test_unknown_command_yields_one_error() {
        let mut dispatcher = CommandDispatcher::default();
        let entries = dispatcher.dispatch("bogus");

        let errors: Vec<_> = entries
            .iter()
            .filter(|e| e.category == LogCategory::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].text.contains("bogus"));
        assert!(errors[0].text.contains("help"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_help_lists_every_line_every_time() {
        let mut dispatcher = CommandDispatcher::default();
        for _ in 0..3 {
            let entries = dispatcher.dispatch("help");
            let lines: Vec<_> = entries[1..].iter().map(|e| e.text.as_str()).collect();
            assert_eq!(lines, HELP_LINES);
            assert!(entries[1..].iter().all(|e| e.category == LogCategory::Info));
        }
    }

    #[test]
    fn test_connect_help_alias() {
        let mut dispatcher = CommandDispatcher::default();
        let alias = dispatcher.dispatch("Connect --Help");
        assert_eq!(alias.len(), 1 + HELP_LINES.len());
    }

    #[test]
    fn test_clear_empties_log() {
        let mut dispatcher = CommandDispatcher::default();
        dispatcher.dispatch("help");
        dispatcher.dispatch("bogus");
        assert!(!dispatcher.log().is_empty());

        let entries = dispatcher.dispatch("clear");
        assert!(entries.is_empty());
        assert!(dispatcher.log().is_empty());

        // Idempotent on an already empty log
        dispatcher.dispatch("CLEAR");
        assert!(dispatcher.log().is_empty());
    }

    #[test]
    fn test_log_is_append_only_between_clears() {
        let mut dispatcher = CommandDispatcher::default();
        let first = dispatcher.dispatch("konami");
        let second = dispatcher.dispatch("linkedin");

        assert_eq!(dispatcher.log().len(), first.len() + second.len());
        assert_eq!(&dispatcher.log()[..first.len()], first.as_slice());
    }

    #[test]
    fn test_konami_is_special() {
        let mut dispatcher = CommandDispatcher::default();
        let entries = dispatcher.dispatch("konami");
        assert_eq!(entries.len(), 1 + KONAMI_LINES.len());
        assert!(entries[1..]
            .iter()
            .all(|e| e.category == LogCategory::Special));
    }

    #[test]
    fn test_social_commands_use_configured_links() {
        let contact = ContactConfig {
            github_uri: "https://github.com/cyber".to_string(),
            linkedin_uri: "https://linkedin.com/in/cyber".to_string(),
            email_uri: "mailto:hi@cyber.dev".to_string(),
            discord_uri: "https://discord.gg/cyber".to_string(),
            ..ContactConfig::default()
        };
        let mut dispatcher = CommandDispatcher::new(&contact);

        for cmd in ["github", "linkedin", "email", "discord"] {
            dispatcher.dispatch(cmd);
        }
        let uris: Vec<_> = dispatcher
            .take_pending_opens()
            .into_iter()
            .map(|p| p.uri)
            .collect();
        assert_eq!(
            uris,
            vec![
                "https://github.com/cyber",
                "https://linkedin.com/in/cyber",
                "mailto:hi@cyber.dev",
                "https://discord.gg/cyber"
            ]
        );
    }

    #[test]
    fn test_echo_uses_configured_prompt() {
        let contact = ContactConfig {
            prompt: "visitor$".to_string(),
            ..ContactConfig::default()
        };
        let mut dispatcher = CommandDispatcher::new(&contact);
        let entries = dispatcher.dispatch("help");
        assert_eq!(entries[0].text, "visitor$ help");
        assert_eq!(entries[0].category, LogCategory::Echo);
    }
}
