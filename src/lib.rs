//! # Ledgerly Postman
//!
//! Generates the Postman collection describing the Ledgerly API.
//!
//! ## Contents
//! - Folders: Business, Team, Payments, Settings
//! - Variables: `base_url`, `auth_token`
//!
//! ## Pipeline
//! - Build the document (`builder`)
//! - Check its invariants (`validate`)
//! - Write `postman/ledgerly-api.postman_collection.json` (`storage`)

pub mod builder;
pub mod constants;
pub mod models;
pub mod storage;
pub mod validate;

// Re-export commonly used types
pub use builder::build_collection;
pub use models::{Body, Collection, Folder, Header, HttpMethod, Item, Request, Url, Variable};
pub use storage::{to_json, write_collection, write_default};
pub use validate::{check, Violation};
