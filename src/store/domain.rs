// src/store/domain.rs
// =============================================================================
// Persists page records into one JSON file per host.
//
// Layout:
//   <destination>/<host with dots replaced by underscores>.json
//   {
//       "home":     { "Headings": [...], ... },
//       "docs_api": { "Headings": [...], ... }
//   }
//
// Every save re-reads the whole file, merges the new page into it and writes
// the whole file back. Pages already in the file are never dropped, with one
// exception: a file that does not parse as a JSON object is replaced outright.
// =============================================================================

use crate::error::StoreError;
use crate::scrape::PageRecord;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use url::Url;

type DomainMap = Map<String, Value>;

/// What a successful save did to the domain file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The domain file did not exist and was created
    Created,
    /// The page key was new to an existing file
    Added,
    /// The page key was already present and its record was replaced
    Updated,
    /// The existing file was unreadable JSON and was overwritten
    Recovered,
}

/// Writes page records into per-host JSON files.
///
/// Each file's read-merge-write runs under a lock for that file path, so two
/// callers sharing a store can never lose each other's pages.
#[derive(Debug, Default)]
pub struct DomainStore {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `record` as the page of `url` in its domain file under `destination`.
    pub fn save(
        &self,
        record: &PageRecord,
        url: &Url,
        destination: &Path,
    ) -> Result<SaveOutcome, StoreError> {
        fs::create_dir_all(destination).map_err(|e| StoreError::io(destination, e))?;

        let path = destination.join(domain_file_name(url)?);
        let key = page_key(url);
        let value = serde_json::to_value(record).map_err(|source| StoreError::Serialize {
            path: path.clone(),
            source,
        })?;

        log::info!("Saving data for {} to {}", url, path.display());

        let file_lock = self.lock_for(&path);
        let _guard = file_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let (mut pages, existed) = match read_domain_file(&path)? {
            ReadResult::Missing => (DomainMap::new(), false),
            ReadResult::Pages(pages) => (pages, true),
            ReadResult::Corrupt(reason) => {
                log::warn!(
                    "Error loading existing data from {}: {}. Overwriting file with new data",
                    path.display(),
                    reason
                );
                let mut pages = DomainMap::new();
                pages.insert(key, value);
                write_domain_file(&path, &pages)?;
                return Ok(SaveOutcome::Recovered);
            }
        };

        // Known oddity: a page key that is already stored gets its whole record
        // replaced. Fields from an earlier scrape of the same page are not merged
        // with the new ones.
        let outcome = if !existed {
            SaveOutcome::Created
        } else if pages.contains_key(&key) {
            log::info!("Data for {} already exists. Updating existing data", key);
            SaveOutcome::Updated
        } else {
            log::info!("Adding new data for {}", key);
            SaveOutcome::Added
        };
        pages.insert(key, value);

        write_domain_file(&path, &pages)?;
        Ok(outcome)
    }

    // Returns the lock guarding one domain file, creating it on first use
    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(path.to_path_buf()).or_default().clone()
    }
}

// File name for a URL's host: "my.site.example" -> "my_site_example.json"
pub fn domain_file_name(url: &Url) -> Result<String, StoreError> {
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(format!("{}.json", host.replace('.', "_"))),
        _ => Err(StoreError::MissingHost(url.to_string())),
    }
}

// Key of a page inside its domain file.
//
// "/path/sub/" -> "path_sub", "/" or "" -> "home", "/caf%C3%A9" -> "café"
//
// The path is percent-decoded first, so an encoded "%2F" ends up as "_" too.
pub fn page_key(url: &Url) -> String {
    let path = percent_decode_str(url.path()).decode_utf8_lossy();
    let key = path.trim_matches('/').replace('/', "_");
    if key.is_empty() {
        "home".to_string()
    } else {
        key
    }
}

enum ReadResult {
    Missing,
    Pages(DomainMap),
    Corrupt(String),
}

fn read_domain_file(path: &Path) -> Result<ReadResult, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ReadResult::Missing),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    Ok(match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(pages)) => ReadResult::Pages(pages),
        Ok(other) => ReadResult::Corrupt(format!("expected a JSON object, found {}", kind(&other))),
        Err(e) => ReadResult::Corrupt(e.to_string()),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Writes the whole domain file, pretty-printed with four-space indentation
fn write_domain_file(path: &Path, pages: &DomainMap) -> Result<(), StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    pages
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, buf).map_err(|e| StoreError::io(path, e))?;
    log::info!("Data successfully written to {}", path.display());
    Ok(())
}
