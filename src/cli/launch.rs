//! Launch and federate commands.
//!
//! Both build an element tree, arm the relay over it, and click the
//! relevant console link so the browser ends up signed into the right
//! role with no stale session underneath.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::accounts::{load_accounts, page::build_page, GroupedAccounts};
use crate::adapters::{SystemOpener, TokioScheduler};
use crate::cli::resolve_accounts_path;
use crate::dom::{Document, Element, NodeId, Selector};
use crate::events::EventDispatcher;
use crate::relay::{LogoutRelay, MARKER_SELECTOR, RELAY_DELAY};
use crate::signin::{validate_destination, Credentials, FederationClient, DEFAULT_ISSUER};

/// Grace period past the relay delay before the process exits.
const EXIT_GRACE: Duration = Duration::from_millis(500);

/// Handle the --launch command.
pub async fn handle_launch_command(
    number: &str,
    role: &str,
    accounts_path: Option<&str>,
) -> Result<()> {
    let path = resolve_accounts_path(accounts_path)?;
    let accounts = load_accounts(&path)?;
    let grouped = GroupedAccounts::group(accounts);
    let doc = build_page(&grouped);

    let link = find_console_link(&doc, number, role)
        .ok_or_else(|| eyre!("no console link for role {} in account {}", role, number))?;

    click_through_relay(&doc, link).await
}

/// Handle the --federate command.
///
/// Exchanges ambient AWS credentials for a console session and opens
/// it through the relay, so any live session is signed out first.
pub async fn handle_federate_command(destination: Option<&str>) -> Result<()> {
    let destination = match destination {
        Some(next) => Some(validate_destination(next).ok_or_else(|| {
            eyre!("destination must be an https console URL, got {}", next)
        })?),
        None => None,
    };

    let credentials = Credentials::from_env()?;
    if let Some(expires) = credentials.expires {
        tracing::info!(expires = %expires.to_rfc3339(), "using temporary credentials");
    }

    let client = FederationClient::new();
    let token = client.signin_token(&credentials).await?;
    let login_url = client.console_signin_url(&token, destination.as_deref(), DEFAULT_ISSUER);

    let mut doc = Document::new();
    let link = doc.append(
        doc.root(),
        Element::new("a")
            .with_class("aws-console")
            .with_attr("href", &login_url)
            .with_attr("target", "_blank")
            .with_text("AWS Console"),
    );

    click_through_relay(&doc, link).await
}

async fn click_through_relay(doc: &Document, link: NodeId) -> Result<()> {
    let relay = LogoutRelay::new(Arc::new(SystemOpener::new()), Arc::new(TokioScheduler::new()));
    let mut dispatcher = EventDispatcher::new();
    relay.arm(doc, &mut dispatcher);
    dispatcher.click(doc, link);

    // The open chain runs on detached tasks; hold the process open
    // until the destination open has fired.
    tokio::time::sleep(RELAY_DELAY + EXIT_GRACE).await;
    Ok(())
}

fn find_console_link(doc: &Document, number: &str, role: &str) -> Option<NodeId> {
    let selector = Selector::parse(MARKER_SELECTOR).ok()?;
    doc.query_all(&selector).into_iter().find(|id| {
        let Ok(url) = url::Url::parse(doc.element(*id).href()) else {
            return false;
        };
        let mut account_matches = false;
        let mut role_matches = false;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "account" if value == number => account_matches = true,
                "roleName" if value == role => role_matches = true,
                _ => {}
            }
        }
        account_matches && role_matches
    })
}
