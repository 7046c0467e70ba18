//! Property-based tests for the contact terminal dispatcher
//!
//! These tests use proptest to generate random command lines and verify
//! that dispatch is total, deterministic, and insensitive to case and
//! surrounding whitespace.

use cyberport::commands::{normalize, CommandDispatcher, LogCategory};
use proptest::prelude::*;

const KNOWN: &[&str] = &[
    "help",
    "connect --help",
    "github",
    "linkedin",
    "email",
    "discord",
    "konami",
];

fn known_command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(KNOWN)
}

proptest! {
    #[test]
    fn test_dispatch_doesnt_panic(s in "\\PC*") {
        let mut dispatcher = CommandDispatcher::default();
        let _ = dispatcher.dispatch(&s);
        // Should not panic, regardless of input
    }

    #[test]
    fn test_dispatch_is_deterministic(s in "[a-zA-Z -]{0,30}") {
        let mut first = CommandDispatcher::default();
        let mut second = CommandDispatcher::default();
        prop_assert_eq!(first.dispatch(&s), second.dispatch(&s));
        prop_assert_eq!(first.take_pending_opens(), second.take_pending_opens());
    }

    #[test]
    fn test_case_and_padding_invariance(
        cmd in known_command(),
        upper in prop::collection::vec(any::<bool>(), 16),
        lead in "[ \t]{0,4}",
        trail in "[ \t]{0,4}",
    ) {
        let mixed: String = cmd
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let padded = format!("{}{}{}", lead, mixed, trail);

        let mut plain = CommandDispatcher::default();
        let mut noisy = CommandDispatcher::default();
        let expected = plain.dispatch(cmd);
        let actual = noisy.dispatch(&padded);

        // Only the echo reflects the raw line
        prop_assert_eq!(&expected[1..], &actual[1..]);
        prop_assert_eq!(plain.take_pending_opens(), noisy.take_pending_opens());
    }

    #[test]
    fn test_every_line_is_echoed_first(s in "[a-z0-9 ]{0,20}") {
        prop_assume!(normalize(&s) != "clear");
        let mut dispatcher = CommandDispatcher::default();
        let entries = dispatcher.dispatch(&s);

        prop_assert!(!entries.is_empty());
        prop_assert_eq!(entries[0].category, LogCategory::Echo);
        prop_assert!(entries[1..].iter().all(|e| e.category != LogCategory::Echo));
    }

    #[test]
    fn test_unknown_commands_get_one_error(s in "[a-z]{1,12}") {
        prop_assume!(!KNOWN.contains(&s.as_str()) && s != "clear");
        let mut dispatcher = CommandDispatcher::default();
        let entries = dispatcher.dispatch(&s);

        let errors = entries
            .iter()
            .filter(|e| e.category == LogCategory::Error)
            .count();
        prop_assert_eq!(errors, 1);
        prop_assert!(dispatcher.take_pending_opens().is_empty());
    }

    #[test]
    fn test_blank_input_takes_fallback(s in "[ \t]{0,8}") {
        let mut dispatcher = CommandDispatcher::default();
        let entries = dispatcher.dispatch(&s);

        prop_assert_eq!(entries.len(), 2);
        prop_assert_eq!(entries[1].category, LogCategory::Error);
    }

    #[test]
    fn test_log_grows_by_returned_entries(
        lines in prop::collection::vec("[a-z ]{0,10}", 0..20),
    ) {
        let mut dispatcher = CommandDispatcher::default();
        for line in &lines {
            let before = dispatcher.log().len();
            let entries = dispatcher.dispatch(line);
            if normalize(line) == "clear" {
                prop_assert!(dispatcher.log().is_empty());
            } else {
                prop_assert_eq!(dispatcher.log().len(), before + entries.len());
            }
        }
    }
}
