//! AWS sign-in endpoint integration.
//!
//! Switch-role URL construction, destination validation, and the
//! federation flow that turns temporary credentials into a console
//! session.

mod federation;
mod urls;

pub use federation::{Credentials, FederationClient, FederationError, DEFAULT_ISSUER};
pub use urls::{switch_role_url, validate_destination, CONSOLE_HOME};

/// Base URL of the AWS sign-in endpoint.
pub const SIGNIN_BASE: &str = "https://signin.aws.amazon.com";
