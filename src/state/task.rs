//! Cancellable periodic tasks (boot log replay, hero word cycling).

use parking_lot::Mutex;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Shortest period we hand to tokio; a zero period would panic the interval.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Cloneable cancellation token for a [`PeriodicTask`].
#[derive(Debug, Clone)]
pub struct Canceller {
    alive: Arc<Mutex<bool>>,
}

impl Canceller {
    fn new() -> Self {
        Self {
            alive: Arc::new(Mutex::new(true)),
        }
    }

    /// Once this returns, the task's callback will not run again.
    pub fn cancel(&self) {
        *self.alive.lock() = false;
    }

    pub fn is_cancelled(&self) -> bool {
        !*self.alive.lock()
    }
}

pub struct PeriodicTask {
    name: &'static str,
    canceller: Canceller,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Run `tick` every `period`, starting one period from now, until it returns
    /// `ControlFlow::Break` or the task is cancelled.
    ///
    /// Must be called from within a tokio runtime. `tick` runs with the
    /// cancellation lock held, so it must not cancel its own task.
    pub fn spawn<F>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let canceller = Canceller::new();
        let alive = canceller.alive.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let g = alive.lock();
                if !*g {
                    break;
                }
                if tick().is_break() {
                    break;
                }
            }
            tracing::trace!(task = name, "periodic task stopped");
        });

        Self { name, canceller, handle }
    }

    pub fn canceller(&self) -> Canceller {
        self.canceller.clone()
    }

    pub fn cancel(&self) {
        self.canceller.cancel();
        self.handle.abort();
        tracing::trace!(task = self.name, "periodic task cancelled");
    }

    /// Wait until the task stops by itself (or is cancelled).
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}
