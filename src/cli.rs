// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below *is* the CLI, and clap generates
// the parsing, --help and --version from it.
//
// Flags given here override the same settings from a --config file.
// =============================================================================

use crate::config::CrawlConfig;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site-scraper",
    version,
    about = "Crawl websites and save their content as per-domain JSON files",
    long_about = "site-scraper follows links from one or more seed URLs up to a maximum depth, \
                  extracts headings, paragraphs, list items, links and images from every page, \
                  and merges them into one JSON file per domain."
)]
pub struct Cli {
    /// Seed URLs to start from (each argument may be a comma-separated list)
    ///
    /// Example: site-scraper https://example.com,https://example.org
    pub seeds: Vec<String>,

    /// Folder for the domain JSON files (default: ./scraped)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Destination for one seed, as URL=DIR (repeatable)
    ///
    /// Example: --seed-dest https://example.org/=out/org
    #[arg(long = "seed-dest", value_name = "URL=DIR", value_parser = parse_seed_dest)]
    pub seed_dest: Vec<(String, PathBuf)>,

    /// Maximum crawl depth; the seed page is depth 0 (default: 3)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Load settings from a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON instead of a table
    #[arg(long)]
    pub summary_json: bool,
}

impl Cli {
    // Builds the effective configuration: config file first, then flags on top
    pub fn to_config(&self) -> Result<CrawlConfig> {
        let mut config = match &self.config {
            Some(path) => CrawlConfig::from_file(path)?,
            None => CrawlConfig::default(),
        };

        config.seeds.extend(self.seeds.iter().cloned());
        config
            .seed_destinations
            .extend(self.seed_dest.iter().cloned());

        if let Some(dest) = &self.dest {
            config.destination = dest.clone();
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }

        Ok(config)
    }
}

// Parses "URL=DIR". The split is on the last '=' since URLs may contain
// '=' in their query string.
fn parse_seed_dest(value: &str) -> Result<(String, PathBuf), String> {
    match value.rsplit_once('=') {
        Some((url, dir)) if !url.trim().is_empty() && !dir.trim().is_empty() => {
            Ok((url.trim().to_string(), PathBuf::from(dir.trim())))
        }
        _ => Err(format!("expected URL=DIR, got '{value}'")),
    }
}
