// src/scrape/extract.rs
// =============================================================================
// This module pulls the structured content out of a parsed HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (html5ever under the hood)
// - Lets us find elements with CSS selectors
//
// Every field is optional on a real page. A page without <img> tags simply
// gets an empty Images list, never an error.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// Content extracted from one page.
///
/// Serialized with the capitalized field names used in the domain files:
/// `{"Headings": [...], "Paragraphs": [...], "Lists": [...], "Links": [...], "Images": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageRecord {
    /// Trimmed text of every h1-h6, in document order
    pub headings: Vec<String>,
    /// Trimmed text of every <p>
    pub paragraphs: Vec<String>,
    /// Trimmed text of every <li> under every <ul>, flattened
    pub lists: Vec<String>,
    /// Raw href values of <a> tags, exactly as written in the page
    pub links: Vec<String>,
    /// Raw src values of <img> tags
    pub images: Vec<String>,
}

// Anything that can turn a parsed document into a PageRecord.
//
// The pipeline is generic over this so tests (or a future site-specific
// extractor) can replace the default tag-based one.
pub trait ContentExtractor {
    fn extract(&self, document: &Html) -> PageRecord;
}

/// The default extractor: headings, paragraphs, list items, links and images.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagExtractor;

impl ContentExtractor for TagExtractor {
    fn extract(&self, document: &Html) -> PageRecord {
        extract_content(document)
    }
}

// Extracts all five fields from a parsed document
pub fn extract_content(document: &Html) -> PageRecord {
    PageRecord {
        headings: extract_headings(document),
        paragraphs: extract_paragraphs(document),
        lists: extract_lists(document),
        links: extract_links(document),
        images: extract_images(document),
    }
}

// Builds a selector from a constant CSS string.
// The selectors in this file are fixed and known to be valid, so a parse
// failure is a programmer error.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn extract_headings(document: &Html) -> Vec<String> {
    let headings = selector("h1, h2, h3, h4, h5, h6");
    document.select(&headings).map(element_text).collect()
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    let paragraphs = selector("p");
    document.select(&paragraphs).map(element_text).collect()
}

// Every <li> below every <ul>. A nested <ul> is visited on its own as well,
// so items of nested lists show up once per enclosing <ul>.
fn extract_lists(document: &Html) -> Vec<String> {
    let lists = selector("ul");
    let items = selector("li");

    document
        .select(&lists)
        .flat_map(|list| list.select(&items).map(element_text).collect::<Vec<_>>())
        .collect()
}

fn extract_links(document: &Html) -> Vec<String> {
    attribute_values(document, "a", "href")
}

fn extract_images(document: &Html) -> Vec<String> {
    attribute_values(document, "img", "src")
}

// Collects a non-empty attribute from every matching element, unmodified
fn attribute_values(document: &Html, tag: &str, attr: &str) -> Vec<String> {
    let tags = selector(tag);

    document
        .select(&tags)
        .filter_map(|element| element.value().attr(attr))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
