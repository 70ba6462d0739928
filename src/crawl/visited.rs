// src/crawl/visited.rs
// =============================================================================
// The set of URLs already handled in one crawl run.
//
// A VisitedSet is created empty when a run starts, shared by every seed of
// that run, and dropped when the run ends. It is never written to disk and
// URLs are never removed from it.
// =============================================================================

use std::collections::HashSet;

/// URLs already claimed by the current crawl run.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url` for processing.
    ///
    /// Returns true if the URL was not in the set (the caller should process
    /// it) and false if it was already claimed. This is the only membership
    /// test the crawler uses; `&mut self` makes check and insert one step.
    pub fn test_and_mark(&mut self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
