//! Invariant checks over a built collection
//!
//! The model constructors already keep most of these true; `check` exists for
//! collections assembled or edited field by field.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::constants::{AUTH_TOKEN_VAR, CONTENT_TYPE_JSON};
use crate::models::{Collection, Url};

/// A broken collection invariant
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{request}: url.raw {raw:?} does not match host/path {expected:?}")]
    UrlMismatch {
        request: String,
        raw: String,
        expected: String,
    },
    #[error("{request}: missing Authorization header referencing {{{{auth_token}}}}")]
    MissingAuthorization { request: String },
    #[error("{request}: body sent without Content-Type: application/json")]
    MissingContentType { request: String },
    #[error("{request}: {method} request carries a body")]
    UnexpectedBody { request: String, method: String },
    #[error("variable {key:?} is defined more than once")]
    DuplicateVariable { key: String },
    #[error("{request}: references undefined variable {name:?}")]
    UndefinedVariable { request: String, name: String },
}

/// Names of `{{name}}` placeholders in `text`, in order of appearance
pub fn placeholders(text: &str) -> Vec<&str> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").unwrap());

    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Check every invariant; an empty result means the collection is valid
pub fn check(collection: &Collection) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen = HashSet::new();
    for var in &collection.variables {
        if !seen.insert(var.key.as_str()) {
            violations.push(Violation::DuplicateVariable {
                key: var.key.clone(),
            });
        }
    }

    for (folder, item) in collection.items() {
        let label = format!("{}/{}", folder, item.name);
        let req = &item.request;

        if !req.url.is_consistent() {
            violations.push(Violation::UrlMismatch {
                request: label.clone(),
                raw: req.url.raw.clone(),
                expected: Url::join(&req.url.host, &req.url.path),
            });
        }

        let authorized = req
            .header("Authorization")
            .map(|h| placeholders(&h.value).contains(&AUTH_TOKEN_VAR))
            .unwrap_or(false);
        if !authorized {
            violations.push(Violation::MissingAuthorization {
                request: label.clone(),
            });
        }

        if req.body.is_some() {
            if !req.method.has_body() {
                violations.push(Violation::UnexpectedBody {
                    request: label.clone(),
                    method: req.method.as_str().to_string(),
                });
            }
            let json = req
                .header("Content-Type")
                .map(|h| h.value == CONTENT_TYPE_JSON)
                .unwrap_or(false);
            if !json {
                violations.push(Violation::MissingContentType {
                    request: label.clone(),
                });
            }
        }

        // Body placeholders are request-time inputs; only URL and headers must resolve.
        let referenced = placeholders(&req.url.raw)
            .into_iter()
            .chain(req.headers.iter().flat_map(|h| placeholders(&h.value)));
        for name in referenced {
            if collection.get_variable(name).is_none() {
                violations.push(Violation::UndefinedVariable {
                    request: label.clone(),
                    name: name.to_string(),
                });
            }
        }
    }

    violations
}
