//! End-to-end crawl against a wiremock site
//!
//! Runs the real HTTP fetcher, extractor and store together and checks the
//! domain file that comes out.

use serde_json::Value;
use site_scraper::{crawl_seeds, HttpFetcher, PagePipeline, PageRecord, Seed};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, html: &str, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn load(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

fn pipeline() -> PagePipeline<HttpFetcher> {
    PagePipeline::new(HttpFetcher::new(Duration::from_secs(5), "site-scraper-test").unwrap())
}

/// Test a two-level crawl writes every reached page into one domain file
#[tokio::test]
async fn test_crawl_writes_domain_file() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r##"<h1>Home</h1>
            <p>Welcome</p>
            <a href="/about">About</a>
            <a href="#top">Top</a>
            <a href="mailto:x@y.com">Mail</a>
            <a href="/missing">Missing</a>
            <img src="/logo.png">"##,
        1,
    )
    .await;
    mount_page(
        &server,
        "/about",
        r#"<h2>About</h2><ul><li>one</li><li>two</li></ul>
           <a href="/">Home</a><a href="/team/deep">Deep</a>"#,
        1,
    )
    .await;
    // Depth 2 with max_depth 1: must never be requested
    mount_page(&server, "/team/deep", "<p>too deep</p>", 0).await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let seeds = vec![Seed {
        url: Url::parse(&format!("{}/", server.uri())).unwrap(),
        destination: dir.path().join("out"),
    }];

    let summary = crawl_seeds(&pipeline(), &seeds, 1).await;
    assert_eq!(summary.pages_saved, 2);
    assert_eq!(summary.fetch_failures, 1);

    let stored = load(&dir.path().join("out").join("127_0_0_1.json"));
    let pages = stored.as_object().unwrap();
    assert_eq!(pages.len(), 2);

    let home: PageRecord = serde_json::from_value(pages["home"].clone()).unwrap();
    assert_eq!(home.headings, vec!["Home"]);
    assert_eq!(home.paragraphs, vec!["Welcome"]);
    assert_eq!(
        home.links,
        vec!["/about", "#top", "mailto:x@y.com", "/missing"]
    );
    assert_eq!(home.images, vec!["/logo.png"]);

    let about: PageRecord = serde_json::from_value(pages["about"].clone()).unwrap();
    assert_eq!(about.lists, vec!["one", "two"]);
}

/// Test a second run merges into the file left by the first
#[tokio::test]
async fn test_second_run_merges_into_existing_file() {
    let server = MockServer::start().await;
    mount_page(&server, "/a", "<h1>A</h1>", 1).await;
    mount_page(&server, "/b", "<h1>B</h1>", 1).await;

    let dir = TempDir::new().unwrap();
    let seed = |route: &str| Seed {
        url: Url::parse(&format!("{}{}", server.uri(), route)).unwrap(),
        destination: dir.path().to_path_buf(),
    };

    // Separate runs, so separate visited sets
    crawl_seeds(&pipeline(), &[seed("/a")], 0).await;
    crawl_seeds(&pipeline(), &[seed("/b")], 0).await;

    let stored = load(&dir.path().join("127_0_0_1.json"));
    let keys: Vec<&String> = stored.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}
