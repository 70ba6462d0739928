// src/scrape/pipeline.rs
// =============================================================================
// Handles one page from start to finish:
//
// 1. Claim the URL in the visited set (skip it if it was already claimed)
// 2. Fetch the body
// 3. Parse it and extract a PageRecord
// 4. Save the record into the domain store
// 5. Hand the page's raw hrefs back to the scheduler
//
// Nothing here is fatal. A failed fetch or a failed save is logged and the
// crawl keeps going with whatever is left.
// =============================================================================

use crate::crawl::VisitedSet;
use crate::scrape::extract::{ContentExtractor, TagExtractor};
use crate::scrape::fetch::PageFetcher;
use crate::store::DomainStore;
use scraper::Html;
use std::path::Path;
use url::Url;

/// Result of processing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The URL was already claimed earlier in this run
    AlreadyVisited,
    /// The fetch failed; the page was neither saved nor expanded
    FetchFailed,
    /// The page was saved; these are its raw hrefs
    Saved(Vec<String>),
    /// The page was fetched but could not be written; its links are still followed
    StoreFailed(Vec<String>),
}

impl PageOutcome {
    /// The raw hrefs the scheduler should expand (empty unless the page was fetched)
    pub fn into_links(self) -> Vec<String> {
        match self {
            PageOutcome::Saved(links) | PageOutcome::StoreFailed(links) => links,
            PageOutcome::AlreadyVisited | PageOutcome::FetchFailed => Vec::new(),
        }
    }
}

/// Fetches, extracts and stores single pages.
pub struct PagePipeline<F, E = TagExtractor> {
    fetcher: F,
    extractor: E,
    store: DomainStore,
}

impl<F: PageFetcher> PagePipeline<F, TagExtractor> {
    pub fn new(fetcher: F) -> Self {
        Self::with_extractor(fetcher, TagExtractor)
    }
}

impl<F: PageFetcher, E: ContentExtractor> PagePipeline<F, E> {
    pub fn with_extractor(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher,
            extractor,
            store: DomainStore::new(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Processes `url` once per run, saving its content under `destination`.
    pub async fn process_page(
        &self,
        url: &Url,
        destination: &Path,
        visited: &mut VisitedSet,
    ) -> PageOutcome {
        if !visited.test_and_mark(url.as_str()) {
            log::debug!("Already visited {}", url);
            return PageOutcome::AlreadyVisited;
        }

        log::info!("Scraping {}...", url);

        let body = match self.fetcher.fetch(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Error fetching {}: {}", url, e);
                return PageOutcome::FetchFailed;
            }
        };

        let record = {
            let document = Html::parse_document(&body);
            self.extractor.extract(&document)
        };

        match self.store.save(&record, url, destination) {
            Ok(outcome) => {
                log::debug!("Stored {} ({:?})", url, outcome);
                PageOutcome::Saved(record.links)
            }
            Err(e) => {
                log::error!("Error writing data for {}: {}", url, e);
                PageOutcome::StoreFailed(record.links)
            }
        }
    }
}
