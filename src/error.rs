// src/error.rs
// =============================================================================
// Typed errors for the two places a crawl talks to the outside world:
// the network (FetchError) and the filesystem (StoreError).
//
// Neither of these ever ends a crawl. The pipeline logs them and moves on,
// so they only need enough detail to make a useful log line.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Connection, DNS, TLS, timeout or body decoding failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Why a page record could not be persisted.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The URL has no host, so there is no domain file to write to
    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize domain file {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
