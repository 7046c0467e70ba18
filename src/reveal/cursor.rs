//! Synchronous reveal state machine

use super::{RevealChain, RevealEvent};
use std::time::Duration;

/// An event together with how long to wait before it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTick {
    /// Delay measured from the previous tick
    pub delay: Duration,
    pub event: RevealEvent,
}

impl RevealTick {
    fn immediate(event: RevealEvent) -> Self {
        Self {
            delay: Duration::ZERO,
            event,
        }
    }
}

/// Walks a chain and yields its ticks in order
///
/// A character tick waits one interval of its step. Completion ticks fire
/// immediately after the last character, so an empty step completes at the
/// same instant its predecessor did.
#[derive(Debug, Clone)]
pub struct RevealCursor {
    chain: RevealChain,
    step: usize,
    chars: Vec<char>,
    emitted: usize,
    elapsed: Duration,
    finished: bool,
}

impl RevealCursor {
    pub fn new(chain: RevealChain) -> Self {
        let chars = Self::chars_of(&chain, 0);
        Self {
            chain,
            step: 0,
            chars,
            emitted: 0,
            elapsed: Duration::ZERO,
            finished: false,
        }
    }

    fn chars_of(chain: &RevealChain, step: usize) -> Vec<char> {
        chain
            .step(step)
            .map(|s| s.text().chars().collect())
            .unwrap_or_default()
    }

    /// Produce the next tick, or `None` once `ChainComplete` has been yielded
    pub fn next_tick(&mut self) -> Option<RevealTick> {
        if self.finished {
            return None;
        }

        let Some(current) = self.chain.step(self.step) else {
            self.finished = true;
            return Some(RevealTick::immediate(RevealEvent::ChainComplete));
        };

        if let Some(&ch) = self.chars.get(self.emitted) {
            self.emitted += 1;
            let delay = current.interval();
            self.elapsed = self.elapsed.saturating_add(delay);
            return Some(RevealTick {
                delay,
                event: RevealEvent::Char {
                    step: self.step,
                    ch,
                },
            });
        }

        let completed = self.step;
        self.step += 1;
        self.emitted = 0;
        self.chars = Self::chars_of(&self.chain, self.step);
        Some(RevealTick::immediate(RevealEvent::StepComplete {
            step: completed,
        }))
    }

    /// Index of the step currently emitting
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Scheduled time consumed by the ticks yielded so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn chain(&self) -> &RevealChain {
        &self.chain
    }

    /// Yield every remaining event without waiting
    pub fn drain_events(&mut self) -> Vec<RevealEvent> {
        self.by_ref().map(|tick| tick.event).collect()
    }
}

impl Iterator for RevealCursor {
    type Item = RevealTick;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_tick()
    }
}
