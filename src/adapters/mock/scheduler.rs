//! Manually advanced scheduler for testing.
//!
//! Holds scheduled tasks on a virtual clock that only moves when the
//! test calls [`ManualScheduler::advance`], so timer sequences can be
//! asserted at exact boundaries without real sleeping.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{ScheduledTask, Scheduler};

struct QueuedTask {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

struct Inner {
    now: Duration,
    seq: u64,
    queue: Vec<QueuedTask>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Tasks run in due-time order as the clock is advanced, and a running
/// task may schedule further tasks; those are picked up within the same
/// `advance` call when they fall due inside it. Clones share the clock
/// and queue.
///
/// # Example
///
/// ```ignore
/// use conrelay::adapters::mock::ManualScheduler;
/// use conrelay::traits::Scheduler;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// scheduler.schedule_after(Duration::from_millis(1000), Box::pin(async { /* ... */ }));
///
/// scheduler.advance(Duration::from_millis(999)); // not yet
/// scheduler.advance(Duration::from_millis(1));   // runs here
/// ```
#[derive(Clone)]
pub struct ManualScheduler {
    inner: Arc<Mutex<Inner>>,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero and nothing queued.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                now: Duration::ZERO,
                seq: 0,
                queue: Vec::new(),
            })),
        }
    }

    /// Move the clock forward by `delta`, running every task that falls
    /// due on the way.
    ///
    /// The clock jumps to each task's due time before running it, so a
    /// task that schedules a follow-up measures its delay from its own
    /// due time. Tasks with the same due time run in scheduling order.
    pub fn advance(&self, delta: Duration) {
        let target = {
            let mut inner = self.inner.lock().unwrap();
            let target = inner.now + delta;
            inner.now = target;
            target
        };

        loop {
            let next = {
                let mut inner = self.inner.lock().unwrap();
                let due_index = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                match due_index {
                    Some(i) => {
                        let queued = inner.queue.remove(i);
                        // Step the clock to the task's due point so
                        // follow-ups it schedules are measured from there.
                        inner.now = queued.due;
                        Some(queued.task)
                    }
                    None => {
                        inner.now = target;
                        None
                    }
                }
            };

            match next {
                // Run outside the lock; the task may schedule more work.
                Some(task) => futures::executor::block_on(task),
                None => break,
            }
        }
    }

    /// Run everything already due without moving the clock.
    pub fn run_ready(&self) {
        self.advance(Duration::ZERO);
    }

    /// Number of tasks still waiting for their due time.
    pub fn pending(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.lock().unwrap().now
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.queue.len())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, task: ScheduledTask) {
        let mut inner = self.inner.lock().unwrap();
        let due = inner.now + delay;
        let seq = inner.seq;
        inner.seq += 1;
        inner.queue.push(QueuedTask { due, seq, task });
    }
}
