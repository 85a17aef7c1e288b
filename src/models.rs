//! Postman collection (v2.1) document model
//!
//! Struct field order is the serialized key order.

use serde::{Deserialize, Serialize};

use crate::constants::{
    placeholder, AUTH_TOKEN_VAR, BASE_URL_VAR, COLLECTION_VERSION, CONTENT_TYPE_JSON, SCHEMA_URL,
};

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

/// Header value kind. Postman also knows `secret`, which this collection never uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderType {
    #[default]
    Text,
}

/// HTTP Header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: HeaderType,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
            kind: HeaderType::Text,
        }
    }

    /// `Authorization: {{auth_token}}`
    pub fn authorization() -> Self {
        Header::new("Authorization", placeholder(AUTH_TOKEN_VAR))
    }

    pub fn json_content_type() -> Self {
        Header::new("Content-Type", CONTENT_TYPE_JSON)
    }

    pub fn is(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    #[default]
    Raw,
}

/// Request payload, kept as unparsed text
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mode: BodyMode,
    pub raw: String,
}

impl Body {
    pub fn raw(text: impl Into<String>) -> Self {
        Body {
            mode: BodyMode::Raw,
            raw: text.into(),
        }
    }
}

/// Structured URL: the raw template plus its decomposed segments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    /// Builds a URL whose `raw` form is derived from `host` and `path`
    pub fn new(host: impl Into<String>, path: &[&str]) -> Self {
        let host = vec![host.into()];
        let path: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        let raw = Url::join(&host, &path);
        Url { raw, host, path }
    }

    /// URL under `{{base_url}}`
    pub fn from_base(path: &[&str]) -> Self {
        Url::new(placeholder(BASE_URL_VAR), path)
    }

    /// Host segments joined with path segments, i.e. what `raw` should be
    pub fn join(host: &[String], path: &[String]) -> String {
        host.iter()
            .chain(path.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn is_consistent(&self) -> bool {
        self.raw == Url::join(&self.host, &self.path)
    }
}

/// A single HTTP request description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: HttpMethod,
    #[serde(rename = "header")]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
}

impl Request {
    /// Authorized request without a body
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Request {
            method,
            headers: vec![Header::authorization()],
            body: None,
            url,
        }
    }

    pub fn get(path: &[&str]) -> Self {
        Request::new(HttpMethod::GET, Url::from_base(path))
    }

    pub fn delete(path: &[&str]) -> Self {
        Request::new(HttpMethod::DELETE, Url::from_base(path))
    }

    pub fn post(path: &[&str], body: &str) -> Self {
        Request::new(HttpMethod::POST, Url::from_base(path)).with_json_body(body)
    }

    pub fn put(path: &[&str], body: &str) -> Self {
        Request::new(HttpMethod::PUT, Url::from_base(path)).with_json_body(body)
    }

    pub fn patch(path: &[&str], body: &str) -> Self {
        Request::new(HttpMethod::PATCH, Url::from_base(path)).with_json_body(body)
    }

    /// Attaches a raw JSON body along with its Content-Type header.
    /// Ignored for methods that carry no body.
    pub fn with_json_body(mut self, raw: impl Into<String>) -> Self {
        if !self.method.has_body() {
            return self;
        }
        if !self.has_header("Content-Type") {
            self.headers.push(Header::json_content_type());
        }
        self.body = Some(Body::raw(raw));
        self
    }

    pub fn header(&self, key: &str) -> Option<&Header> {
        self.headers.iter().find(|h| h.is(key))
    }

    pub fn has_header(&self, key: &str) -> bool {
        self.header(key).is_some()
    }
}

/// A named request inside a folder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
}

impl Item {
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        Item {
            name: name.into(),
            request,
        }
    }
}

/// A named group of requests
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(rename = "item")]
    pub items: Vec<Item>,
}

impl Folder {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Folder {
            name: name.into(),
            items,
        }
    }
}

/// Collection-level substitution variable
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Variable {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub name: String,
    pub schema: String,
    pub version: String,
}

/// Top-level Postman document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    #[serde(rename = "item")]
    pub folders: Vec<Folder>,
    #[serde(rename = "variable")]
    pub variables: Vec<Variable>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Collection {
            info: Info {
                name: name.into(),
                schema: SCHEMA_URL.to_string(),
                version: COLLECTION_VERSION.to_string(),
            },
            folders: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn folder(mut self, folder: Folder) -> Self {
        self.folders.push(folder);
        self
    }

    pub fn variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push(Variable::new(key, value));
        self
    }

    pub fn get_variable(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Every item paired with the name of its folder, in authored order
    pub fn items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.folders
            .iter()
            .flat_map(|f| f.items.iter().map(move |i| (f.name.as_str(), i)))
    }
}
