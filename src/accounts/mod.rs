//! Account manifest loading and grouping.
//!
//! The manifest is a JSON array describing every AWS account in the
//! organization. Accounts fall into three groups for presentation:
//! special accounts (management, audit, deploy, network), admin
//! accounts, and service accounts carrying domain/environment/quality
//! tags.

pub mod page;
pub mod roles;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the organization's management account.
pub const MANAGEMENT: &str = "management";
/// Name of the audit account.
pub const AUDIT: &str = "audit";
/// Name of the deploy account.
pub const DEPLOY: &str = "deploy";
/// Name of the network account.
pub const NETWORK: &str = "network";
/// Name shared by admin accounts, distinguished by quality.
pub const ADMIN: &str = "admin";

/// Errors from reading an account manifest.
#[derive(Debug, Error)]
pub enum AccountsError {
    /// The manifest file could not be read.
    #[error("failed to read accounts manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file was not valid JSON.
    #[error("failed to parse accounts manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Classification tags on a service or admin account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTags {
    /// Business domain the account serves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Deployment environment, e.g. "development" or "production"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Quality within the environment, e.g. "alpha" or "beta"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// One AWS account from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The 12-digit account number
    pub number: String,
    /// The account's name, when it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The root email address on the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Classification tags
    #[serde(default)]
    pub tags: AccountTags,
}

impl Account {
    fn name_is(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Accounts sorted into their presentation groups.
///
/// Each special slot takes the first account bearing its name; any
/// later duplicates fall through to the service group so they stay
/// visible rather than silently vanishing.
#[derive(Debug, Default)]
pub struct GroupedAccounts {
    /// Admin accounts, sorted by quality
    pub admin: Vec<Account>,
    /// Service accounts, sorted by domain, environment, quality
    pub service: Vec<Account>,
    /// The audit account, if present
    pub audit: Option<Account>,
    /// The deploy account, if present
    pub deploy: Option<Account>,
    /// The management account, if present
    pub management: Option<Account>,
    /// The network account, if present
    pub network: Option<Account>,
}

impl GroupedAccounts {
    /// Sort a manifest's accounts into groups.
    pub fn group(accounts: Vec<Account>) -> Self {
        let mut grouped = Self::default();

        for account in accounts {
            if account.name_is(MANAGEMENT) && grouped.management.is_none() {
                grouped.management = Some(account);
            } else if account.name_is(AUDIT) && grouped.audit.is_none() {
                grouped.audit = Some(account);
            } else if account.name_is(DEPLOY) && grouped.deploy.is_none() {
                grouped.deploy = Some(account);
            } else if account.name_is(NETWORK) && grouped.network.is_none() {
                grouped.network = Some(account);
            } else if account.name_is(ADMIN) {
                grouped.admin.push(account);
            } else {
                grouped.service.push(account);
            }
        }

        grouped.admin.sort_by(|a, b| {
            let ka = a.tags.quality.as_deref().unwrap_or("");
            let kb = b.tags.quality.as_deref().unwrap_or("");
            ka.cmp(kb)
        });
        grouped.service.sort_by(|a, b| {
            let ka = (
                a.tags.domain.as_deref().unwrap_or(""),
                a.tags.environment.as_deref().unwrap_or(""),
                a.tags.quality.as_deref().unwrap_or(""),
            );
            let kb = (
                b.tags.domain.as_deref().unwrap_or(""),
                b.tags.environment.as_deref().unwrap_or(""),
                b.tags.quality.as_deref().unwrap_or(""),
            );
            ka.cmp(&kb)
        });

        grouped
    }

    /// Total number of accounts across all groups.
    pub fn len(&self) -> usize {
        let specials = [&self.audit, &self.deploy, &self.management, &self.network]
            .iter()
            .filter(|a| a.is_some())
            .count();
        self.admin.len() + self.service.len() + specials
    }

    /// Whether no accounts were grouped at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load an account manifest from a JSON file.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, AccountsError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AccountsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AccountsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
