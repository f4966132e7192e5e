//! Command-line interface.
//!
//! This module provides command-line functionality including:
//! - Argument parsing
//! - Version display
//! - Listing the accounts manifest
//! - Launching console sessions through the relay
//!
//! # Usage
//!
//! The dispatcher runs the parsed command to completion:
//!
//! ```ignore
//! use conrelay::cli;
//!
//! let command = cli::parse_args(std::env::args());
//! runtime.block_on(cli::run(command))?;
//! ```

pub mod args;
pub mod launch;
pub mod list;
pub mod version;

use std::path::PathBuf;

use color_eyre::eyre::eyre;
use color_eyre::Result;

pub use args::{parse_args, CliCommand};
pub use launch::{handle_federate_command, handle_launch_command};
pub use list::handle_list_command;
pub use version::{handle_version_command, VERSION};

/// Environment variable naming the accounts manifest file.
pub const ACCOUNTS_ENV: &str = "CONRELAY_ACCOUNTS";

/// Run a parsed CLI command.
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub async fn run(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::List { accounts_path } => handle_list_command(accounts_path.as_deref()),
        CliCommand::Launch {
            number,
            role,
            accounts_path,
        } => handle_launch_command(&number, &role, accounts_path.as_deref()).await,
        CliCommand::Federate { destination } => {
            handle_federate_command(destination.as_deref()).await
        }
        CliCommand::Usage => {
            print_usage();
            Ok(())
        }
    }
}

/// Resolve the accounts manifest path from the flag or the environment.
pub(crate) fn resolve_accounts_path(flag: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(PathBuf::from(path));
    }
    if let Ok(path) = std::env::var(ACCOUNTS_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    Err(eyre!(
        "no accounts manifest; pass --accounts FILE or set {}",
        ACCOUNTS_ENV
    ))
}

fn print_usage() {
    println!("conrelay {}", VERSION);
    println!();
    println!("Usage:");
    println!("  conrelay --list                     List accounts in the manifest");
    println!("  conrelay --launch NUMBER ROLE       Open the console as ROLE in account NUMBER");
    println!("  conrelay --federate [DESTINATION]   Open a console session from AWS_* credentials");
    println!("  conrelay --version                  Show version");
    println!();
    println!("Options:");
    println!("  --accounts FILE   Accounts manifest (default: ${})", ACCOUNTS_ENV);
    println!("  --verbose         Debug logging");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accounts_path_prefers_flag() {
        let path = resolve_accounts_path(Some("/tmp/accounts.json")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/accounts.json"));
    }

    #[test]
    fn test_resolve_accounts_path_without_flag_or_env() {
        // The environment variable may be set by the harness; only
        // assert the error path when it is absent.
        if std::env::var(ACCOUNTS_ENV).is_err() {
            assert!(resolve_accounts_path(None).is_err());
        }
    }
}
