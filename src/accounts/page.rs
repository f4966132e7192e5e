//! Accounts page builder.
//!
//! Renders grouped accounts into the element tree the relay arms: one
//! table per group, with a marked console link for every role a user
//! can launch into. Links open in a fresh `_blank` context and carry
//! the `aws-console` class that routes their clicks through the relay.

use crate::accounts::{roles, GroupedAccounts, ADMIN, AUDIT, DEPLOY, MANAGEMENT, NETWORK};
use crate::dom::{Document, Element, NodeId};
use crate::signin::switch_role_url;

/// Build the accounts page for a grouped manifest.
pub fn build_page(grouped: &GroupedAccounts) -> Document {
    let mut doc = Document::new();
    let body = doc.root();

    doc.append(body, Element::new("h1").with_text("Accounts"));
    doc.append(
        body,
        Element::new("p").with_class("context").with_text(
            "Use these links to assume roles in your organization's accounts. \
             Each link signs the browser out of any live console session first.",
        ),
    );

    special_accounts_table(&mut doc, body, grouped);
    service_accounts_table(&mut doc, body, grouped);
    admin_accounts_table(&mut doc, body, grouped);

    doc
}

fn special_accounts_table(doc: &mut Document, body: NodeId, grouped: &GroupedAccounts) {
    doc.append(body, Element::new("h2").with_text("Special accounts"));
    let table = doc.append(body, Element::new("table"));

    header_row(doc, table, &["Name", "Account Number", "Launch the AWS Console as..."]);

    if let Some(account) = &grouped.management {
        let row = doc.append(table, Element::new("tr"));
        text_cell(doc, row, account.name.as_deref().unwrap_or(MANAGEMENT));
        text_cell(doc, row, &account.number);
        link_cell(
            doc,
            row,
            &account.number,
            roles::ORGANIZATION_ADMINISTRATOR,
            roles::ORGANIZATION_ADMINISTRATOR,
        );
        link_cell(
            doc,
            row,
            &account.number,
            roles::ORGANIZATION_READER,
            roles::ORGANIZATION_READER,
        );
    }

    if let Some(account) = &grouped.audit {
        let name = account.name.as_deref().unwrap_or(AUDIT);
        let row = doc.append(table, Element::new("tr"));
        text_cell(doc, row, name);
        text_cell(doc, row, &account.number);
        // Filler keeps the Auditor link in the same column as below.
        doc.append(row, Element::new("td"));
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[name, roles::AUDITOR]),
            roles::AUDITOR,
        );
    }

    if let Some(account) = &grouped.deploy {
        let name = account.name.as_deref().unwrap_or(DEPLOY);
        let row = doc.append(table, Element::new("tr"));
        text_cell(doc, row, name);
        text_cell(doc, row, &account.number);
        link_cell(
            doc,
            row,
            &account.number,
            roles::DEPLOY_ADMINISTRATOR,
            roles::DEPLOY_ADMINISTRATOR,
        );
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[name, roles::AUDITOR]),
            roles::AUDITOR,
        );
    }

    if let Some(account) = &grouped.network {
        let name = account.name.as_deref().unwrap_or(NETWORK);
        let row = doc.append(table, Element::new("tr"));
        text_cell(doc, row, name);
        text_cell(doc, row, &account.number);
        link_cell(
            doc,
            row,
            &account.number,
            roles::NETWORK_ADMINISTRATOR,
            roles::NETWORK_ADMINISTRATOR,
        );
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[name, roles::AUDITOR]),
            roles::AUDITOR,
        );
    }
}

fn service_accounts_table(doc: &mut Document, body: NodeId, grouped: &GroupedAccounts) {
    doc.append(body, Element::new("h2").with_text("Service accounts"));
    let table = doc.append(body, Element::new("table"));

    header_row(
        doc,
        table,
        &[
            "Domain",
            "Environment",
            "Quality",
            "Account Number",
            "Launch the AWS Console as...",
        ],
    );

    for account in &grouped.service {
        let domain = account.tags.domain.as_deref().unwrap_or("");
        let environment = account.tags.environment.as_deref().unwrap_or("");
        let quality = account.tags.quality.as_deref().unwrap_or("");

        let row = doc.append(table, Element::new("tr"));
        text_cell(doc, row, domain);
        text_cell(doc, row, environment);
        text_cell(doc, row, quality);
        text_cell(doc, row, &account.number);
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[domain, environment, quality, roles::ADMINISTRATOR]),
            roles::ADMINISTRATOR,
        );
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[domain, environment, quality, roles::AUDITOR]),
            roles::AUDITOR,
        );
    }
}

fn admin_accounts_table(doc: &mut Document, body: NodeId, grouped: &GroupedAccounts) {
    doc.append(body, Element::new("h2").with_text("Admin accounts"));
    let table = doc.append(body, Element::new("table"));

    header_row(
        doc,
        table,
        &["Quality", "Account Number", "Launch the AWS Console as..."],
    );

    for account in &grouped.admin {
        let quality = account.tags.quality.as_deref().unwrap_or("");

        let row = doc.append(table, Element::new("tr"));
        text_cell(doc, row, quality);
        text_cell(doc, row, &account.number);
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[ADMIN, quality, roles::ADMINISTRATOR]),
            roles::ADMINISTRATOR,
        );
        link_cell(
            doc,
            row,
            &account.number,
            &display_name(&[ADMIN, quality, roles::AUDITOR]),
            roles::AUDITOR,
        );
    }
}

fn header_row(doc: &mut Document, table: NodeId, headers: &[&str]) {
    let row = doc.append(table, Element::new("tr"));
    for header in headers {
        doc.append(row, Element::new("th").with_text(header));
    }
}

fn text_cell(doc: &mut Document, row: NodeId, text: &str) {
    doc.append(row, Element::new("td").with_text(text));
}

fn link_cell(doc: &mut Document, row: NodeId, number: &str, display: &str, role: &str) {
    let cell = doc.append(row, Element::new("td"));
    doc.append(
        cell,
        Element::new("a")
            .with_class("aws-console")
            .with_attr("href", &switch_role_url(number, display, role))
            .with_attr("target", "_blank")
            .with_text(role),
    );
}

/// Join the non-empty parts of a display name with spaces.
fn display_name(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
