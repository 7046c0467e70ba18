//! Accumulated display state of a reveal

use super::{RevealChain, RevealEvent};

/// What a viewer currently sees of each step
#[derive(Debug, Clone, Default)]
pub struct RevealView {
    displayed: Vec<String>,
    completed: Vec<bool>,
    chain_complete: bool,
}

impl RevealView {
    pub fn new(chain: &RevealChain) -> Self {
        Self {
            displayed: vec![String::new(); chain.len()],
            completed: vec![false; chain.len()],
            chain_complete: false,
        }
    }

    /// Fold one event into the view
    pub fn apply(&mut self, event: RevealEvent) {
        match event {
            RevealEvent::Char { step, ch } => {
                if let Some(text) = self.displayed.get_mut(step) {
                    text.push(ch);
                }
            }
            RevealEvent::StepComplete { step } => {
                if let Some(done) = self.completed.get_mut(step) {
                    *done = true;
                }
            }
            RevealEvent::ChainComplete => self.chain_complete = true,
        }
    }

    /// Text shown so far for `step`
    pub fn displayed(&self, step: usize) -> &str {
        self.displayed.get(step).map(String::as_str).unwrap_or("")
    }

    pub fn is_step_complete(&self, step: usize) -> bool {
        self.completed.get(step).copied().unwrap_or(false)
    }

    pub fn completed_steps(&self) -> usize {
        self.completed.iter().filter(|done| **done).count()
    }

    pub fn is_chain_complete(&self) -> bool {
        self.chain_complete
    }
}
