//! IAM role names used across the organization's accounts.

/// Administrator role in service and admin accounts.
pub const ADMINISTRATOR: &str = "Administrator";
/// Read-only auditor role, present in most accounts.
pub const AUDITOR: &str = "Auditor";
/// Administrator role in the management account.
pub const ORGANIZATION_ADMINISTRATOR: &str = "OrganizationAdministrator";
/// Read-only role in the management account.
pub const ORGANIZATION_READER: &str = "OrganizationReader";
/// Administrator role in the deploy account.
pub const DEPLOY_ADMINISTRATOR: &str = "DeployAdministrator";
/// Administrator role in the network account.
pub const NETWORK_ADMINISTRATOR: &str = "NetworkAdministrator";

/// Build the ARN of a role in an account.
pub fn arn(account_number: &str, role_name: &str) -> String {
    format!("arn:aws:iam::{}:role/{}", account_number, role_name)
}
