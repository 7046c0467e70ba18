//! Reveal steps and chains

use crate::error::{Error, Result};
use std::time::Duration;

/// One unit of progressively displayed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStep {
    text: String,
    interval: Duration,
}

impl RevealStep {
    /// Create a step; the interval must be non-zero
    pub fn new(text: impl Into<String>, interval: Duration) -> Result<Self> {
        let text = text.into();
        if interval.is_zero() {
            return Err(Error::InvalidRevealInterval { text });
        }
        Ok(Self { text, interval })
    }

    /// Shorthand for an interval given in milliseconds
    pub fn from_millis(text: impl Into<String>, interval_ms: u64) -> Result<Self> {
        Self::new(text, Duration::from_millis(interval_ms))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of characters (not bytes) this step will emit
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Time from the step starting to its completion signal
    ///
    /// Saturates at `Duration::MAX`.
    pub fn duration(&self) -> Duration {
        u32::try_from(self.char_count())
            .map_or(Duration::MAX, |chars| self.interval.saturating_mul(chars))
    }
}

/// Ordered sequence of reveal steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealChain {
    steps: Vec<RevealStep>,
}

impl RevealChain {
    pub fn new(steps: Vec<RevealStep>) -> Self {
        Self { steps }
    }

    pub fn push(&mut self, step: RevealStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&RevealStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total scheduled time until the chain completes
    pub fn total_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(RevealStep::duration)
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

impl FromIterator<RevealStep> for RevealChain {
    fn from_iter<I: IntoIterator<Item = RevealStep>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
