//! Error types from across the crate, gathered for one-stop imports.

pub use crate::accounts::AccountsError;
pub use crate::dom::SelectorError;
pub use crate::signin::FederationError;
pub use crate::traits::OpenError;
