// src/crawl/scheduler.rs
// =============================================================================
// This module drives a crawl with a depth-first worklist.
//
// How it works:
// 1. Push the seed URL on a stack at depth 0
// 2. Pop a task; drop it if its depth is past max_depth
// 3. Hand the URL to the page pipeline, which returns the page's raw hrefs
// 4. Resolve each href against the page URL, keep the ones with a host,
//    and push them at depth + 1 (in reverse, so the first link is popped first)
// 5. Repeat until the stack is empty
//
// Dedup happens in the pipeline through the shared VisitedSet, at the moment
// a task is processed. A URL pushed twice is simply skipped the second time.
//
// Rust concepts:
// - Vec as a stack: push()/pop() give depth-first order without recursion
// - Generic functions: the scheduler works with any PageFetcher
// =============================================================================

use crate::crawl::links::follow_link;
use crate::crawl::visited::VisitedSet;
use crate::scrape::{ContentExtractor, PageFetcher, PageOutcome, PagePipeline};
use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

// One unit of work: a URL and how many link hops it is from its seed
#[derive(Debug, Clone)]
struct CrawlTask {
    url: Url,
    depth: usize,
}

/// A starting URL and the folder its pages are saved into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub url: Url,
    pub destination: PathBuf,
}

/// Counters for one crawl run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    /// Pages fetched and written to a domain file
    pub pages_saved: usize,
    /// Pages whose fetch failed (network error or non-2xx status)
    pub fetch_failures: usize,
    /// Pages fetched but not written
    pub store_failures: usize,
    /// Tasks skipped because their URL had already been handled
    pub already_visited: usize,
    /// Tasks dropped because they were deeper than max_depth
    pub beyond_max_depth: usize,
}

impl CrawlSummary {
    fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::AlreadyVisited => self.already_visited += 1,
            PageOutcome::FetchFailed => self.fetch_failures += 1,
            PageOutcome::Saved(_) => self.pages_saved += 1,
            PageOutcome::StoreFailed(_) => self.store_failures += 1,
        }
    }
}

// Crawls everything reachable from `seed` within `max_depth` link hops.
//
// Parameters:
//   pipeline:    fetches, extracts and stores each page
//   seed:        where the crawl starts (depth 0)
//   destination: folder for the domain files
//   visited:     URLs already handled in this run (shared across seeds)
//   max_depth:   deepest depth still processed (inclusive)
//   summary:     counters updated as pages are processed
pub async fn crawl<F, E>(
    pipeline: &PagePipeline<F, E>,
    seed: &Url,
    destination: &Path,
    visited: &mut VisitedSet,
    max_depth: usize,
    summary: &mut CrawlSummary,
) where
    F: PageFetcher,
    E: ContentExtractor,
{
    let mut stack = vec![CrawlTask {
        url: seed.clone(),
        depth: 0,
    }];

    while let Some(task) = stack.pop() {
        if task.depth > max_depth {
            summary.beyond_max_depth += 1;
            continue;
        }

        log::info!("Scraping depth {}: {}", task.depth, task.url);

        let outcome = pipeline.process_page(&task.url, destination, visited).await;
        summary.record(&outcome);

        let children: Vec<CrawlTask> = outcome
            .into_links()
            .iter()
            .filter_map(|href| follow_link(&task.url, href))
            .map(|url| CrawlTask {
                url,
                depth: task.depth + 1,
            })
            .collect();

        // Reversed so the first link on the page is the next one popped
        stack.extend(children.into_iter().rev());
    }
}

// Crawls every seed in order with one shared visited set.
//
// A page reached from an earlier seed is not crawled again for a later one,
// even if the later seed saves into a different folder.
pub async fn crawl_seeds<F, E>(
    pipeline: &PagePipeline<F, E>,
    seeds: &[Seed],
    max_depth: usize,
) -> CrawlSummary
where
    F: PageFetcher,
    E: ContentExtractor,
{
    let mut visited = VisitedSet::new();
    let mut summary = CrawlSummary::default();

    for seed in seeds {
        log::info!(
            "Starting crawl of {} into {}",
            seed.url,
            seed.destination.display()
        );
        crawl(
            pipeline,
            &seed.url,
            &seed.destination,
            &mut visited,
            max_depth,
            &mut summary,
        )
        .await;
    }

    log::info!("Crawl finished: {} unique URL(s) visited", visited.len());
    summary
}
