//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// List the accounts in the manifest
    List {
        /// Path from `--accounts`, when given
        accounts_path: Option<String>,
    },
    /// Open the console as a role in an account
    Launch {
        /// The account number to launch into
        number: String,
        /// The role to assume
        role: String,
        /// Path from `--accounts`, when given
        accounts_path: Option<String>,
    },
    /// Open a console session from ambient credentials
    Federate {
        /// Post-signin destination, when given
        destination: Option<String>,
    },
    /// Show usage (default, and fallback for unknown flags)
    Usage,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Returns
///
/// The `CliCommand` to execute based on the arguments.
///
/// # Examples
///
/// ```
/// use conrelay::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["conrelay".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    let mut accounts_path = None;
    let mut list = false;
    let mut launch: Option<(String, String)> = None;
    let mut federate = false;
    let mut destination = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Usage,
            "--list" => list = true,
            "--launch" => {
                let Some(number) = args.get(i + 1) else {
                    return CliCommand::Usage;
                };
                let Some(role) = args.get(i + 2) else {
                    return CliCommand::Usage;
                };
                launch = Some((number.clone(), role.clone()));
                i += 2;
            }
            "--federate" => {
                federate = true;
                // An optional destination follows unless it is a flag.
                if let Some(next) = args.get(i + 1) {
                    if !next.starts_with('-') {
                        destination = Some(next.clone());
                        i += 1;
                    }
                }
            }
            "--accounts" => {
                let Some(path) = args.get(i + 1) else {
                    return CliCommand::Usage;
                };
                accounts_path = Some(path.clone());
                i += 1;
            }
            "--verbose" => {
                // Handled before parsing; accepted here so it is not an error.
            }
            _ => return CliCommand::Usage,
        }
        i += 1;
    }

    if list {
        CliCommand::List { accounts_path }
    } else if let Some((number, role)) = launch {
        CliCommand::Launch {
            number,
            role,
            accounts_path,
        }
    } else if federate {
        CliCommand::Federate { destination }
    } else {
        CliCommand::Usage
    }
}
