//! Property-based tests for reveal cursors
//!
//! A cursor is the untimed core of every reveal, so its event order and
//! scheduled time are checked over arbitrary chains.

use cyberport::reveal::{RevealCursor, RevealEvent, RevealStep, RevealView};
use cyberport::RevealChain;
use proptest::prelude::*;
use std::time::Duration;

fn arb_chain() -> impl Strategy<Value = RevealChain> {
    prop::collection::vec(("\\PC{0,12}", 1u64..200), 0..6).prop_map(|steps| {
        steps
            .into_iter()
            .map(|(text, ms)| RevealStep::from_millis(text, ms).unwrap())
            .collect()
    })
}

proptest! {
    #[test]
    fn test_one_completion_per_step(chain in arb_chain()) {
        let steps = chain.len();
        let events = RevealCursor::new(chain).drain_events();

        let completions: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::StepComplete { step } => Some(*step),
                _ => None,
            })
            .collect();
        prop_assert_eq!(completions, (0..steps).collect::<Vec<_>>());
        prop_assert_eq!(events.last(), Some(&RevealEvent::ChainComplete));
        prop_assert_eq!(events.iter().filter(|e| e.is_chain_complete()).count(), 1);
    }

    #[test]
    fn test_chars_follow_step_order(chain in arb_chain()) {
        let expected: Vec<(usize, char)> = chain
            .steps()
            .iter()
            .enumerate()
            .flat_map(|(i, s)| s.text().chars().map(move |c| (i, c)))
            .collect();
        let actual: Vec<(usize, char)> = RevealCursor::new(chain)
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                RevealEvent::Char { step, ch } => Some((step, ch)),
                _ => None,
            })
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_char_after_its_step_completes(chain in arb_chain()) {
        let mut completed = 0usize;
        for event in RevealCursor::new(chain).drain_events() {
            match event {
                RevealEvent::Char { step, .. } => prop_assert_eq!(step, completed),
                RevealEvent::StepComplete { step } => {
                    prop_assert_eq!(step, completed);
                    completed += 1;
                }
                RevealEvent::ChainComplete => {}
            }
        }
    }

    #[test]
    fn test_elapsed_matches_total_duration(chain in arb_chain()) {
        let total = chain.total_duration();
        let mut cursor = RevealCursor::new(chain);
        let summed: Duration = cursor.by_ref().map(|tick| tick.delay).sum();

        prop_assert_eq!(summed, total);
        prop_assert_eq!(cursor.elapsed(), total);
        prop_assert!(cursor.is_finished());
    }

    #[test]
    fn test_view_shows_full_text(chain in arb_chain()) {
        let mut view = RevealView::new(&chain);
        let texts: Vec<String> = chain.steps().iter().map(|s| s.text().to_string()).collect();
        for event in RevealCursor::new(chain).drain_events() {
            view.apply(event);
        }

        prop_assert!(view.is_chain_complete());
        for (i, text) in texts.iter().enumerate() {
            prop_assert_eq!(view.displayed(i), text.as_str());
        }
    }
}
