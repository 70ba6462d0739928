// src/config.rs
// =============================================================================
// Crawl configuration.
//
// A CrawlConfig can come from a JSON file (--config), from the command line,
// or both; command-line flags win. Every field has a default, so a config
// file only needs the fields it wants to change:
//
//   {
//       "seeds": ["https://site.example/"],
//       "destination": "out",
//       "seed_destinations": { "https://other.example/": "out/other" },
//       "max_depth": 2
//   }
// =============================================================================

use crate::crawl::Seed;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Settings for one crawl run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Seed URLs; each entry may itself be a comma-separated list
    pub seeds: Vec<String>,

    /// Folder for seeds without their own destination
    pub destination: PathBuf,

    /// Per-seed destination folders, keyed by the seed as written
    pub seed_destinations: HashMap<String, PathBuf>,

    /// Deepest link depth still crawled (the seed is depth 0)
    pub max_depth: usize,

    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            seed_destinations: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

pub const DEFAULT_DESTINATION: &str = "scraped";
pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl CrawlConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // Splits, parses and pairs every seed with its destination folder.
    //
    // A seed that is not an absolute URL is logged and skipped. Fails only
    // when no usable seed is left.
    pub fn resolve_seeds(&self) -> Result<Vec<Seed>> {
        let mut seeds = Vec::new();

        for raw in self
            .seeds
            .iter()
            .flat_map(|entry| entry.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let url = match Url::parse(raw) {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("Skipping invalid URL '{}': {}", raw, e);
                    continue;
                }
            };
            let destination = self
                .seed_destinations
                .get(raw)
                .cloned()
                .unwrap_or_else(|| self.destination.clone());

            seeds.push(Seed { url, destination });
        }

        if seeds.is_empty() {
            bail!("Please enter at least one URL");
        }

        Ok(seeds)
    }
}
