// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling from one or more seed URLs
// - Configurable depth limit (inclusive)
// - Each URL handled at most once per run, across all seeds
// - Any link with a host is followed, on any domain
//
// Submodules:
// - links:     resolving hrefs and deciding which ones to follow
// - visited:   the per-run set of handled URLs
// - scheduler: the worklist that ties it together
// =============================================================================

mod links;
mod scheduler;
mod visited;

pub use links::{follow_link, is_crawlable, resolve};
pub use scheduler::{crawl, crawl_seeds, CrawlSummary, Seed};
pub use visited::VisitedSet;
