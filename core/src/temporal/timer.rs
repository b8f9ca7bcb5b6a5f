//! Autoplay timer
//!
//! A repeating tokio task that invokes a callback once per period. The first
//! tick fires one full period after start. Dropping or stopping the
//! [`PlaybackTimer`] closes its stop channel and the task exits on its next
//! poll; callers that need exactness must still reject ticks from a timer
//! they already replaced.

use std::ops::ControlFlow;
use std::time::Duration;

use log::trace;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Owned handle to a running autoplay task
#[derive(Debug)]
pub struct PlaybackTimer {
    period: Duration,
    runtime: Handle,
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PlaybackTimer {
    /// Spawn a timer on `runtime` calling `on_tick` every `period`
    ///
    /// The task ends when `on_tick` returns [`ControlFlow::Break`] or the
    /// handle is stopped.
    pub fn start<F>(runtime: Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let first_tick = Instant::now() + period;

        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;

                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            trace!("autoplay timer stopped");
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        if on_tick().is_break() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            period,
            runtime,
            stop_tx,
            task,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Runtime the timer task was spawned on
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal the task to exit
    pub fn stop(self) {
        let _ = self.stop_tx.send(true);
    }
}
