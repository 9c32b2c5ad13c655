//! Flat JSON document storage.
//!
//! Every persisted document is a small UTF-8 JSON file, read in full at
//! the start of an action and overwritten in full after a mutation.
//! There are two load flavors with deliberately different failure
//! policies:
//!
//! - [`load_or_default`] substitutes the default value for a missing or
//!   malformed file (user data, portfolio)
//! - [`load`] surfaces both failures (challenge catalog, restore)

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::error::{Result, StoreError};

/// Load a document, substituting `T::default()` when the file is
/// missing or does not parse.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Load a document, surfacing read and parse failures.
///
/// # Errors
///
/// Returns [`StoreError::ReadFailed`] if the file cannot be read and
/// [`StoreError::MalformedDocument`] if it does not parse.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_str(&content).map_err(|source| StoreError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(doc)
}

/// Serialize a document pretty-printed and overwrite the file.
///
/// Single-writer only: no locking, no partial-write protection. A
/// failed save fails the surrounding action but never panics.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be
/// written.
pub fn save<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content).map_err(|source| StoreError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        count: u32,
        name: String,
    }

    #[test]
    fn load_or_default_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let doc: Doc = load_or_default(&dir.path().join("absent.json"));
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn load_or_default_malformed_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let doc: Doc = load_or_default(&path);
        assert_eq!(doc, Doc::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let doc = Doc {
            count: 7,
            name: "seven".into(),
        };
        save(&path, &doc).unwrap();
        let loaded: Doc = load(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn load_surfaces_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Doc> = load(&dir.path().join("absent.json"));
        assert!(matches!(
            result,
            Err(crate::CoreError::Store(StoreError::ReadFailed { .. }))
        ));
    }

    #[test]
    fn load_surfaces_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "][").unwrap();
        let result: Result<Doc> = load(&path);
        assert!(matches!(
            result,
            Err(crate::CoreError::Store(StoreError::MalformedDocument { .. }))
        ));
    }

    #[test]
    fn save_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        save(
            &path,
            &Doc {
                count: 1,
                name: "x".into(),
            },
        )
        .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n"), "expected pretty output: {content}");
    }
}
