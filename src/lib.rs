// src/lib.rs
// =============================================================================
// site-scraper: crawl websites and keep their content as per-domain JSON.
//
// Modules:
// - crawl:  link resolution, the visited set and the depth-first scheduler
// - scrape: fetching, content extraction and the per-page pipeline
// - store:  merge-on-write domain files
// - config / cli: run settings and the command-line front end
// =============================================================================

pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod scrape;
pub mod store;

pub use config::CrawlConfig;
pub use crawl::{crawl_seeds, CrawlSummary, Seed, VisitedSet};
pub use scrape::{HttpFetcher, PagePipeline, PageRecord};
pub use store::DomainStore;
