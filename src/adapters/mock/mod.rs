//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without a browser or real timers.
//!
//! # Available Mocks
//!
//! - [`RecordingOpener`] - window opener that records opens in order
//! - [`ManualScheduler`] - scheduler on a manually advanced clock

pub mod opener;
pub mod scheduler;

pub use opener::{OpenedWindow, RecordingOpener};
pub use scheduler::ManualScheduler;
