//! Driving a reveal chain on a tokio task

use super::{RevealChain, RevealCursor, RevealEvent};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// How ticks are spaced in wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Honour every step's interval
    #[default]
    Timed,
    /// Emit everything as fast as the consumer takes it
    Instant,
}

/// Spawns reveal tasks
pub struct RevealController;

impl RevealController {
    /// Start revealing `chain`; events arrive on the returned handle
    pub fn start(chain: RevealChain) -> RevealHandle {
        Self::start_with(chain, Pacing::Timed)
    }

    pub fn start_with(chain: RevealChain, pacing: Pacing) -> RevealHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let guard = TeardownGuard::spawn(chain, pacing, move |event| tx.send(event).is_ok());
        RevealHandle { events: rx, guard }
    }

    /// Start revealing `chain`, calling `observer` for every event
    ///
    /// The observer is never invoked once [`RevealSubscription::teardown`]
    /// has returned.
    pub fn observe<F>(chain: RevealChain, pacing: Pacing, observer: F) -> RevealSubscription
    where
        F: FnMut(RevealEvent) + Send + 'static,
    {
        let live = Arc::new(Mutex::new(true));
        let gate = Arc::clone(&live);
        let mut observer = observer;
        let guard = TeardownGuard::spawn(chain, pacing, move |event| {
            let Ok(alive) = gate.lock() else {
                return false;
            };
            if !*alive {
                return false;
            }
            observer(event);
            true
        });
        RevealSubscription {
            live,
            guard: Some(guard),
        }
    }
}

async fn drive<F>(chain: RevealChain, pacing: Pacing, mut emit: F)
where
    F: FnMut(RevealEvent) -> bool,
{
    let steps = chain.len();
    let started = Instant::now();
    let mut cursor = RevealCursor::new(chain);

    while let Some(tick) = cursor.next_tick() {
        if pacing == Pacing::Timed && !tick.delay.is_zero() {
            sleep_until(started + cursor.elapsed()).await;
        }
        if !emit(tick.event) {
            trace!("Reveal consumer went away at step {}", cursor.current_step());
            return;
        }
    }

    debug!(
        "Reveal chain of {} steps finished after {:?}",
        steps,
        cursor.elapsed()
    );
}

/// Owns the spawned task; aborting it cancels every pending emission
struct TeardownGuard {
    task: JoinHandle<()>,
}

impl TeardownGuard {
    fn spawn<F>(chain: RevealChain, pacing: Pacing, emit: F) -> Self
    where
        F: FnMut(RevealEvent) -> bool + Send + 'static,
    {
        Self {
            task: tokio::spawn(drive(chain, pacing, emit)),
        }
    }

    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TeardownGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Pull-side handle for a running reveal
///
/// Dropping the handle tears the reveal down.
pub struct RevealHandle {
    events: mpsc::UnboundedReceiver<RevealEvent>,
    guard: TeardownGuard,
}

impl RevealHandle {
    /// Next event, or `None` after the chain completed and all events were read
    pub async fn next_event(&mut self) -> Option<RevealEvent> {
        self.events.recv().await
    }

    /// Collect events up to and including `ChainComplete`
    pub async fn run_to_end(&mut self) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next_event().await {
            let done = event.is_chain_complete();
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    /// Whether the driving task has stopped (completed or torn down)
    pub fn is_finished(&self) -> bool {
        self.guard.is_finished()
    }

    /// Stop the reveal; undelivered events are discarded
    pub fn teardown(mut self) {
        debug!("Tearing down reveal handle");
        self.events.close();
    }
}

/// Push-side handle for a running reveal
pub struct RevealSubscription {
    live: Arc<Mutex<bool>>,
    guard: Option<TeardownGuard>,
}

impl RevealSubscription {
    pub fn is_finished(&self) -> bool {
        self.guard.as_ref().map_or(true, TeardownGuard::is_finished)
    }

    /// Stop the reveal; the observer will not be called again
    pub fn teardown(&mut self) {
        if let Ok(mut alive) = self.live.lock() {
            *alive = false;
        }
        if self.guard.take().is_some() {
            debug!("Tore down reveal subscription");
        }
    }
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.teardown();
    }
}
