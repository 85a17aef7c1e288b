use crate::constants::{FILE_SUFFIX, OUTPUT_DIR};
use crate::models::Collection;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the collection as 2-space indented JSON, without a trailing newline
pub fn to_json(collection: &Collection) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    collection
        .serialize(&mut serializer)
        .context("serializing collection")?;
    Ok(String::from_utf8(buf)?)
}

/// File name for a collection, e.g. `Ledgerly API` -> `ledgerly-api.postman_collection.json`
pub fn file_name(collection_name: &str) -> String {
    let mut slug = String::with_capacity(collection_name.len());
    for c in collection_name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    format!("{}{}", slug, FILE_SUFFIX)
}

/// `<root>/postman/<file name>`
pub fn output_path(root: &Path, collection: &Collection) -> PathBuf {
    root.join(OUTPUT_DIR).join(file_name(collection.name()))
}

/// Ensure the parent directory of `path` exists
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Serialize the collection and write it to `path`, replacing any existing file
pub fn write_collection(collection: &Collection, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let content = to_json(collection)?;
    fs::write(path, &content).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Collection written");
    Ok(())
}

/// Write the collection to its standard location under `root`
pub fn write_default(root: &Path, collection: &Collection) -> Result<PathBuf> {
    let path = output_path(root, collection);
    write_collection(collection, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_collection;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("Ledgerly API"), "ledgerly-api.postman_collection.json");
        assert_eq!(file_name("  My  Cool_API! "), "my-cool-api.postman_collection.json");
    }

    #[test]
    fn test_write_into_empty_dir() {
        let dir = tempdir().unwrap();
        let path = write_default(dir.path(), &build_collection()).unwrap();
        assert_eq!(
            path,
            dir.path().join("postman").join("ledgerly-api.postman_collection.json")
        );

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["item"][0]["name"], "Business");
        let raw = doc["item"][0]["item"][1]["request"]["body"]["raw"]
            .as_str()
            .unwrap();
        let body: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(body, json!({"invoice": {"terms": "Net 21", "dueDays": 21}}));
    }

    #[test]
    fn test_document_layout() {
        let doc: Value = serde_json::from_str(&to_json(&build_collection()).unwrap()).unwrap();
        assert_eq!(
            doc["info"],
            json!({
                "name": "Ledgerly API",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json",
                "version": "1.0"
            })
        );
        assert_eq!(
            doc["variable"],
            json!([
                {"key": "base_url", "value": "http://localhost:7000/api/v1"},
                {"key": "auth_token", "value": "Bearer <token>"}
            ])
        );
        let folders: Vec<_> = doc["item"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(folders, vec!["Business", "Team", "Payments", "Settings"]);
    }

    #[test]
    fn test_json_text_format() {
        let json = to_json(&build_collection()).unwrap();
        assert!(json.starts_with("{\n  \"info\": {\n    \"name\": \"Ledgerly API\","));
        assert!(json.ends_with("\n}"));
        let info = json.find("\"info\"").unwrap();
        let item = json.find("\"item\"").unwrap();
        let variable = json.find("\"variable\"").unwrap();
        assert!(info < item && item < variable);
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = tempdir().unwrap();
        let path = write_default(dir.path(), &build_collection()).unwrap();
        let first = fs::read(&path).unwrap();
        write_default(dir.path(), &build_collection()).unwrap();
        assert_eq!(first, fs::read(&path).unwrap());
    }

    #[test]
    fn test_other_files_untouched() {
        let dir = tempdir().unwrap();
        let postman = dir.path().join("postman");
        fs::create_dir(&postman).unwrap();
        let other = postman.join("other.postman_collection.json");
        fs::write(&other, "keep me").unwrap();
        let target = postman.join("ledgerly-api.postman_collection.json");
        fs::write(&target, "stale").unwrap();

        write_default(dir.path(), &build_collection()).unwrap();

        assert_eq!(fs::read_to_string(&other).unwrap(), "keep me");
        assert_ne!(fs::read_to_string(&target).unwrap(), "stale");
        assert_eq!(fs::read_dir(&postman).unwrap().count(), 2);
    }

    #[test]
    fn test_unwritable_parent_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("postman");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_default(dir.path(), &build_collection()).unwrap_err();
        assert!(err.to_string().contains("writing"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }
}
