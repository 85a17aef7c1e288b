//! Ledgerly collection content
//!
//! Folder and request order here is the order API clients render in their menus.

use crate::constants::{
    AUTH_TOKEN_VAR, BASE_URL_VAR, COLLECTION_NAME, DEFAULT_AUTH_TOKEN, DEFAULT_BASE_URL,
};
use crate::models::{Collection, Folder, Item, Request};

/// Build the complete Ledgerly API collection
pub fn build_collection() -> Collection {
    Collection::new(COLLECTION_NAME)
        .folder(business())
        .folder(team())
        .folder(payments())
        .folder(settings())
        .variable(BASE_URL_VAR, DEFAULT_BASE_URL)
        .variable(AUTH_TOKEN_VAR, DEFAULT_AUTH_TOKEN)
}

fn business() -> Folder {
    Folder::new(
        "Business",
        vec![
            Item::new("Get Business Profile", Request::get(&["business"])),
            Item::new(
                "Update Invoice Settings",
                Request::put(
                    &["business", "invoice-settings"],
                    r#"{"invoice": {"terms": "Net 21", "dueDays": 21}}"#,
                ),
            ),
            Item::new(
                "Add Payment Method",
                Request::post(
                    &["business", "payment-methods"],
                    r#"{"name": "Stripe", "accountDetails": "Account ID: acct_123"}"#,
                ),
            ),
        ],
    )
}

fn team() -> Folder {
    Folder::new(
        "Team",
        vec![
            Item::new("List Team Members", Request::get(&["team"])),
            Item::new(
                "Invite Team Member",
                Request::post(
                    &["team", "invite"],
                    r#"{"name": "Alex Lee", "email": "alex@ledgerly.com", "role": "sales"}"#,
                ),
            ),
        ],
    )
}

fn payments() -> Folder {
    Folder::new(
        "Payments",
        vec![
            Item::new("List Payments", Request::get(&["payments"])),
            // invoice_id is filled in by the client at send time
            Item::new(
                "Record Payment",
                Request::post(
                    &["payments"],
                    r#"{"invoiceId": "{{invoice_id}}", "amount": 100.00, "paymentMethod": "card"}"#,
                ),
            ),
        ],
    )
}

fn settings() -> Folder {
    Folder::new(
        "Settings",
        vec![
            Item::new("Get Settings", Request::get(&["settings"])),
            Item::new(
                "Update Notifications",
                Request::put(
                    &["settings"],
                    r#"{"notifications": {"lowStock": {"threshold": 5}}}"#,
                ),
            ),
            Item::new(
                "Trigger Backup",
                Request::post(
                    &["settings", "backup", "run"],
                    r#"{"backupLocation": "s3://ledgerly-backups/business-{{business_id}}"}"#,
                ),
            ),
        ],
    )
}
