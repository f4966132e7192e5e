//! conrelay - fresh-session relay for AWS Console sign-in links
//!
//! This library exposes modules for use in integration tests.

pub mod accounts;
pub mod adapters;
pub mod cli;
pub mod dom;
pub mod error;
pub mod events;
pub mod logging;
pub mod relay;
pub mod signin;
pub mod traits;
