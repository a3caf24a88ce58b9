//! Periodic countdown recomputation.
//!
//! A [`Ticker`] owns at most one background task. The task samples a
//! [`Clock`] on a fixed interval, computes a [`Snapshot`] for the observed
//! event and publishes it on a `watch` channel. Observing another event
//! cancels the running task before the next one starts; stopping or dropping
//! the ticker cancels it too.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use crate::countdown::Snapshot;
use crate::event::{Event, EventId};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Source of wall-clock time for the ticker.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One recomputation of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub event: EventId,
    pub snapshot: Snapshot,
    pub at: DateTime<Utc>,
}

pub struct Ticker<C: Clock = SystemClock> {
    clock: Arc<C>,
    period: Duration,
    tx: Arc<watch::Sender<Option<Tick>>>,
    /// Bumped under the channel lock whenever a task is cancelled, so a task
    /// that is mid-tick when aborted cannot publish afterwards.
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
    observed: Option<EventId>,
}

impl Ticker<SystemClock> {
    pub fn system(period: Duration) -> Self {
        Ticker::new(SystemClock, period)
    }
}

impl<C: Clock> Ticker<C> {
    /// Create an idle ticker. Periods below [`MIN_TICK_INTERVAL`] are raised to it.
    pub fn new(clock: C, period: Duration) -> Self {
        let (tx, _) = watch::channel(None);
        Ticker {
            clock: Arc::new(clock),
            period: period.max(MIN_TICK_INTERVAL),
            tx: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
            observed: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Receiver of the latest tick. `None` until the first tick after
    /// [`observe`](Self::observe), and again after [`stop`](Self::stop).
    pub fn subscribe(&self) -> watch::Receiver<Option<Tick>> {
        self.tx.subscribe()
    }

    pub fn observed(&self) -> Option<EventId> {
        self.observed
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start counting down to `event`, replacing any running task.
    ///
    /// The first snapshot is published immediately, then once per period.
    /// The event's date is captured now; call again after editing it.
    pub fn observe(&mut self, event: &Event) {
        self.stop();

        let id = event.id;
        let target = event.date;
        let clock = Arc::clone(&self.clock);
        let tx = Arc::clone(&self.tx);
        let current = Arc::clone(&self.generation);
        let generation = current.load(Ordering::SeqCst);
        let period = self.period;

        debug!(event = %id, period_ms = period.as_millis() as u64, "ticker started");

        self.task = Some(tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticks.tick().await;

                let now = clock.now();
                let tick = Tick {
                    event: id,
                    snapshot: Snapshot::compute(target, now),
                    at: now,
                };

                let published = tx.send_if_modified(|latest| {
                    if current.load(Ordering::SeqCst) != generation {
                        return false;
                    }
                    *latest = Some(tick);
                    true
                });

                if !published {
                    break;
                }
            }
        }));
        self.observed = Some(id);
    }

    /// Cancel the running task, if any, and clear the latest tick.
    pub fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        task.abort();
        self.tx.send_modify(|latest| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *latest = None;
        });

        if let Some(id) = self.observed.take() {
            debug!(event = %id, "ticker stopped");
        }
    }
}

impl<C: Clock> Drop for Ticker<C> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
