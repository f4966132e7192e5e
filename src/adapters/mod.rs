//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that implement the
//! traits defined in `crate::traits`. These adapters enable dependency
//! injection and testability while maintaining the same functionality.
//!
//! # Adapters
//!
//! - [`SystemOpener`] - opens URLs with the system browser
//! - [`TokioScheduler`] - schedules tasks on the tokio runtime
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::RecordingOpener`] - records opens instead of performing them
//! - [`mock::ManualScheduler`] - virtual clock advanced by the test

pub mod mock;
pub mod system_opener;
pub mod tokio_scheduler;

pub use mock::{ManualScheduler, RecordingOpener};
pub use system_opener::SystemOpener;
pub use tokio_scheduler::TokioScheduler;
