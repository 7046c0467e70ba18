//! Typed, character-by-character text reveals
//!
//! A [`RevealChain`] is an ordered list of [`RevealStep`]s. Each step emits its
//! text one character per interval, signals completion, and only then lets the
//! next step start. The timing logic lives in the synchronous [`RevealCursor`];
//! [`RevealController`] drives a cursor on a tokio task and hands events to a
//! [`RevealHandle`] owned by whoever is displaying them. Tearing the handle
//! down stops the task, so nothing is delivered to a view that has gone away.

pub mod controller;
pub mod cursor;
pub mod step;
pub mod view;

pub use controller::{Pacing, RevealController, RevealHandle, RevealSubscription};
pub use cursor::{RevealCursor, RevealTick};
pub use step::{RevealChain, RevealStep};
pub use view::RevealView;

/// Something observable happening during a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// One more character of step `step` became visible
    Char { step: usize, ch: char },
    /// Step `step` has shown all of its text
    StepComplete { step: usize },
    /// Every step in the chain has completed
    ChainComplete,
}

impl RevealEvent {
    pub fn is_chain_complete(&self) -> bool {
        matches!(self, RevealEvent::ChainComplete)
    }
}
