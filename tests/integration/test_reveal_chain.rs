//! Integration tests for timed reveal chains
//!
//! Time is paused so every assertion about elapsed time is exact.

use cyberport::reveal::{Pacing, RevealController, RevealEvent, RevealStep, RevealView};
use cyberport::RevealChain;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{self, Instant};

fn chain(texts: &[&str], interval_ms: u64) -> RevealChain {
    texts
        .iter()
        .map(|t| RevealStep::from_millis(*t, interval_ms).unwrap())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_events_arrive_at_scheduled_offsets() {
    let started = Instant::now();
    let mut handle = RevealController::start(chain(&["ab", "", "c"], 10));
    let mut stamped = Vec::new();

    while let Some(event) = handle.next_event().await {
        let done = event.is_chain_complete();
        stamped.push((event, started.elapsed().as_millis()));
        if done {
            break;
        }
    }

    assert_eq!(
        stamped,
        vec![
            (RevealEvent::Char { step: 0, ch: 'a' }, 10),
            (RevealEvent::Char { step: 0, ch: 'b' }, 20),
            (RevealEvent::StepComplete { step: 0 }, 20),
            (RevealEvent::StepComplete { step: 1 }, 20),
            (RevealEvent::Char { step: 2, ch: 'c' }, 30),
            (RevealEvent::StepComplete { step: 2 }, 30),
            (RevealEvent::ChainComplete, 30),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_mixed_intervals_run_sequentially() {
    let chain: RevealChain = vec![
        RevealStep::from_millis("boot", 80).unwrap(),
        RevealStep::from_millis("title", 100).unwrap(),
    ]
    .into_iter()
    .collect();
    let expected = chain.total_duration();

    let started = Instant::now();
    let events = RevealController::start(chain).run_to_end().await;

    assert_eq!(started.elapsed(), expected);
    assert_eq!(expected, Duration::from_millis(4 * 80 + 5 * 100));
    let completions: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            RevealEvent::StepComplete { step } => Some(*step),
            _ => None,
        })
        .collect();
    assert_eq!(completions, vec![0, 1]);
}

#[tokio::test(start_paused = true)]
async fn test_view_reaches_full_text() {
    let chain = chain(&["System Status: ONLINE", "CYBER"], 5);
    let mut view = RevealView::new(&chain);
    let mut handle = RevealController::start(chain);

    for event in handle.run_to_end().await {
        view.apply(event);
    }

    assert!(view.is_chain_complete());
    assert_eq!(view.displayed(0), "System Status: ONLINE");
    assert_eq!(view.displayed(1), "CYBER");
    assert_eq!(view.completed_steps(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_mid_chain_stops_observer() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut subscription =
        RevealController::observe(chain(&["abcdef"], 10), Pacing::Timed, move |event| {
            sink.lock().unwrap().push(event);
        });

    time::sleep(Duration::from_millis(35)).await;
    subscription.teardown();
    let at_teardown = seen.lock().unwrap().len();
    assert_eq!(at_teardown, 3);

    time::sleep(Duration::from_secs(1)).await;
    assert_eq!(seen.lock().unwrap().len(), at_teardown);
    assert!(!seen
        .lock()
        .unwrap()
        .iter()
        .any(RevealEvent::is_chain_complete));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_subscription_cancels_pending_ticks() {
    let seen = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&seen);
    let subscription =
        RevealController::observe(chain(&["abc"], 50), Pacing::Timed, move |_| {
            *sink.lock().unwrap() += 1;
        });

    drop(subscription);
    time::sleep(Duration::from_secs(1)).await;
    assert_eq!(*seen.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_instant_pacing_matches_timed_order() {
    let timed: Vec<_> = cyberport::reveal::RevealCursor::new(chain(&["hi", "", "!"], 25))
        .map(|tick| tick.event)
        .collect();
    let instant = RevealController::start_with(chain(&["hi", "", "!"], 25), Pacing::Instant)
        .run_to_end()
        .await;

    assert_eq!(instant, timed);
}

#[tokio::test(start_paused = true)]
async fn test_empty_chain_completes_immediately() {
    let started = Instant::now();
    let events = RevealController::start(RevealChain::default())
        .run_to_end()
        .await;

    assert_eq!(events, vec![RevealEvent::ChainComplete]);
    assert_eq!(started.elapsed(), Duration::ZERO);
}
