//! Application constants
//!
//! Centralized location for the collection's fixed literals and output layout.

/// Postman collection format identifier (v2.1.0)
pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Collection display name
pub const COLLECTION_NAME: &str = "Ledgerly API";

/// Collection document version
pub const COLLECTION_VERSION: &str = "1.0";

/// Directory (relative to the working directory) holding generated collections
pub const OUTPUT_DIR: &str = "postman";

/// Suffix appended to the collection slug to form the file name
pub const FILE_SUFFIX: &str = ".postman_collection.json";

/// Variable holding the API base URL
pub const BASE_URL_VAR: &str = "base_url";

/// Variable holding the Authorization header value
pub const AUTH_TOKEN_VAR: &str = "auth_token";

/// Default value of `base_url`
pub const DEFAULT_BASE_URL: &str = "http://localhost:7000/api/v1";

/// Default value of `auth_token`
pub const DEFAULT_AUTH_TOKEN: &str = "Bearer <token>";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Wraps a variable name in `{{ }}` interpolation braces
pub fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}
