// src/crawl/links.rs
// =============================================================================
// Turns the raw href values found on a page into absolute URLs and decides
// which of them the scheduler should follow.
//
// How it works:
// 1. Resolve the href against the URL of the page it was found on
//    ("/about" on https://site.example/x -> https://site.example/about)
// 2. Keep the result only if it has a non-empty host
//
// Anything that fails either step is dropped without an error. The raw href
// is still stored in the page's Links field, this only decides recursion.
//
// Rust concepts:
// - Option chaining: ok() and filter() instead of nested matches
// - Url::join: browser-style relative resolution (., .., query, fragment)
// =============================================================================

use url::Url;

// Resolves a possibly-relative href against the page it was found on.
//
// Returns None only when the href cannot be parsed at all.
//
// Examples (base = "https://site.example/docs/page"):
//   "/about"            -> https://site.example/about
//   "../other"          -> https://site.example/other
//   "sub?q=1#x"         -> https://site.example/docs/sub?q=1#x
//   "mailto:x@y.com"    -> mailto:x@y.com (no host, see is_crawlable)
pub fn resolve(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}

// True if the URL carries a non-empty host.
//
// The scheme is not checked: ftp:// or any other URL with a host is followed.
pub fn is_crawlable(url: &Url) -> bool {
    url.host_str().map_or(false, |host| !host.is_empty())
}

// Resolves an href and returns it only if the scheduler should follow it.
//
// A bare fragment ("#top") points back into the page it was found on, so it
// never produces a new page to crawl.
pub fn follow_link(base: &Url, href: &str) -> Option<Url> {
    if href.trim_start().starts_with('#') {
        return None;
    }

    resolve(base, href).filter(is_crawlable)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why return Url instead of String?
//    - The scheduler needs the resolved URL as the base for the next page
//    - Keeping it parsed avoids parsing the same string twice
//
// 2. What counts as "the same page"?
//    - Two URLs are the same only if their strings are identical
//    - https://a.example/x and https://a.example/x/ are different pages
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://site.example/").unwrap()
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = Url::parse("https://site.example/docs/page").unwrap();
        let url = resolve(&base, "../other").unwrap();
        assert_eq!(url.as_str(), "https://site.example/other");
    }

    #[test]
    fn test_resolve_keeps_query_and_fragment() {
        let base = Url::parse("https://site.example/docs/page").unwrap();
        let url = resolve(&base, "sub?q=1#x").unwrap();
        assert_eq!(url.as_str(), "https://site.example/docs/sub?q=1#x");
    }

    #[test]
    fn test_mailto_is_not_crawlable() {
        let url = resolve(&base(), "mailto:x@y.com").unwrap();
        assert!(!is_crawlable(&url));
    }

    #[test]
    fn test_other_host_is_crawlable() {
        let url = resolve(&base(), "https://other.example/z").unwrap();
        assert!(is_crawlable(&url));
    }

    #[test]
    fn test_scheme_is_not_checked() {
        let url = resolve(&base(), "ftp://files.example/pub").unwrap();
        assert!(is_crawlable(&url));
    }

    #[test]
    fn test_follow_link_filters_mixed_hrefs() {
        let hrefs = ["/about", "#top", "mailto:x@y.com", "https://other.example/z"];
        let followed: Vec<String> = hrefs
            .iter()
            .filter_map(|href| follow_link(&base(), href))
            .map(|url| url.to_string())
            .collect();

        assert_eq!(
            followed,
            vec!["https://site.example/about", "https://other.example/z"]
        );
    }

    #[test]
    fn test_follow_link_skips_unparseable_href() {
        assert!(follow_link(&base(), "http://[broken").is_none());
    }
}
