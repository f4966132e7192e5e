//! Production scheduler backed by the tokio runtime.

use std::time::Duration;

use crate::traits::{ScheduledTask, Scheduler};

/// Schedules tasks on the ambient tokio runtime.
///
/// Each task is spawned detached, so overlapping schedules run
/// independently and nothing tracks or cancels them.
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Create a new tokio-backed scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&self, delay: Duration, task: ScheduledTask) {
        // Scheduling only works inside a runtime; outside of one the
        // task is dropped rather than panicking the caller.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(
                delay_ms = delay.as_millis() as u64,
                "no tokio runtime available, dropping scheduled task"
            );
            return;
        };
        handle.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            task.await;
        });
    }
}
