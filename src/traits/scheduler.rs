//! Scheduler trait abstraction.
//!
//! Provides a trait-based abstraction for deferred task execution so the
//! relay's timing can run against the tokio clock in production and a
//! manually advanced clock in tests.

use std::time::Duration;

use futures::future::BoxFuture;

/// A unit of deferred work.
pub type ScheduledTask = BoxFuture<'static, ()>;

/// Trait for scheduling fire-and-forget tasks.
///
/// Scheduled tasks are never cancelled or awaited by the caller; once
/// handed to the scheduler they run to completion on their own.
pub trait Scheduler: Send + Sync {
    /// Run `task` once `delay` has elapsed.
    fn schedule_after(&self, delay: Duration, task: ScheduledTask);

    /// Run `task` as soon as the scheduler gets control again.
    ///
    /// Equivalent to scheduling with a zero delay. The task does not run
    /// inside this call; it is queued behind already due work.
    fn defer(&self, task: ScheduledTask) {
        self.schedule_after(Duration::ZERO, task);
    }
}
