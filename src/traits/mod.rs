//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for the relay's side
//! effects, enabling dependency injection, mocking, and better
//! testability.
//!
//! # Traits
//!
//! - [`WindowOpener`] - opening URLs in named browsing contexts
//! - [`Scheduler`] - deferred fire-and-forget task execution

pub mod opener;
pub mod scheduler;

pub use opener::{OpenError, WindowOpener};
pub use scheduler::{ScheduledTask, Scheduler};
