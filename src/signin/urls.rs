//! URL construction and destination validation for the sign-in endpoint.

use crate::signin::SIGNIN_BASE;

/// The console home page, used when no destination is requested.
pub const CONSOLE_HOME: &str = "https://console.aws.amazon.com/";

/// Build a switch-role URL for a role in an account.
///
/// The resulting link only assumes the role correctly when the browser
/// already holds a session that is allowed to assume it, which is why
/// clicks on these links go through the logout relay first.
pub fn switch_role_url(account_number: &str, display_name: &str, role_name: &str) -> String {
    format!(
        "{}/switchrole?account={}&displayName={}&roleName={}",
        SIGNIN_BASE,
        account_number,
        urlencoding::encode(display_name),
        urlencoding::encode(role_name),
    )
}

/// Validate a requested post-signin destination.
///
/// Returns the destination only when it is an https URL on the console.
pub fn validate_destination(next: &str) -> Option<String> {
    let url = url::Url::parse(next).ok()?;
    if url.scheme() != "https" {
        return None;
    }
    let host = url.host_str()?;
    // don't be an open redirect
    if host == "console.aws.amazon.com" || host.ends_with(".console.aws.amazon.com") {
        Some(next.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_role_url() {
        assert_eq!(
            switch_role_url("123456789012", "widgets production alpha Administrator", "Administrator"),
            "https://signin.aws.amazon.com/switchrole?account=123456789012\
             &displayName=widgets%20production%20alpha%20Administrator\
             &roleName=Administrator"
        );
    }

    #[test]
    fn test_validate_destination_accepts_console() {
        assert_eq!(
            validate_destination("https://console.aws.amazon.com/"),
            Some("https://console.aws.amazon.com/".to_string())
        );
        assert_eq!(
            validate_destination("https://us-west-2.console.aws.amazon.com/ec2/home"),
            Some("https://us-west-2.console.aws.amazon.com/ec2/home".to_string())
        );
    }

    #[test]
    fn test_validate_destination_rejects_other_hosts() {
        assert_eq!(validate_destination("https://example.com/"), None);
        // A host that merely contains the console domain is not enough.
        assert_eq!(
            validate_destination("https://console.aws.amazon.com.evil.example/"),
            None
        );
        assert_eq!(
            validate_destination("https://notconsole.aws.amazon.com/"),
            None
        );
    }

    #[test]
    fn test_validate_destination_rejects_http_and_garbage() {
        assert_eq!(validate_destination("http://console.aws.amazon.com/"), None);
        assert_eq!(validate_destination("not a url"), None);
        assert_eq!(validate_destination(""), None);
    }
}
