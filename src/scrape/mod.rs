// src/scrape/mod.rs
// =============================================================================
// Everything that happens to a single page:
// - fetch:    download the body (reqwest)
// - extract:  turn parsed HTML into a PageRecord (scraper)
// - pipeline: fetch -> extract -> store, returning the page's links
// =============================================================================

mod extract;
mod fetch;
mod pipeline;

pub use extract::{extract_content, ContentExtractor, PageRecord, TagExtractor};
pub use fetch::{HttpFetcher, PageFetcher};
pub use pipeline::{PageOutcome, PagePipeline};
