//! List command.
//!
//! Prints the grouped accounts manifest in terminal-friendly tables.

use color_eyre::Result;

use crate::accounts::{load_accounts, GroupedAccounts};
use crate::cli::resolve_accounts_path;

/// Handle the --list command.
pub fn handle_list_command(accounts_path: Option<&str>) -> Result<()> {
    let path = resolve_accounts_path(accounts_path)?;
    let accounts = load_accounts(&path)?;
    let grouped = GroupedAccounts::group(accounts);

    println!("Special accounts:");
    for account in [
        &grouped.management,
        &grouped.audit,
        &grouped.deploy,
        &grouped.network,
    ]
    .into_iter()
    .flatten()
    {
        println!(
            "  {:<12} {}",
            account.name.as_deref().unwrap_or(""),
            account.number
        );
    }

    println!();
    println!("Service accounts:");
    for account in &grouped.service {
        println!(
            "  {:<16} {:<14} {:<8} {}",
            account.tags.domain.as_deref().unwrap_or(""),
            account.tags.environment.as_deref().unwrap_or(""),
            account.tags.quality.as_deref().unwrap_or(""),
            account.number
        );
    }

    println!();
    println!("Admin accounts:");
    for account in &grouped.admin {
        println!(
            "  {:<8} {}",
            account.tags.quality.as_deref().unwrap_or(""),
            account.number
        );
    }

    Ok(())
}
