// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG controls the level, "info" by default)
// 2. Parse command-line arguments and build the crawl configuration
// 3. Crawl every seed with one shared visited set
// 4. Print a summary and exit (0 = crawl completed, 2 = error)
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use site_scraper::cli::Cli;
use site_scraper::{crawl_seeds, CrawlSummary, HttpFetcher, PagePipeline};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = cli.to_config()?;
    let seeds = config.resolve_seeds()?;

    println!("🕸  Crawling {} seed(s), max depth {}", seeds.len(), config.max_depth);

    let fetcher = HttpFetcher::new(config.timeout(), &config.user_agent)
        .context("could not create HTTP client")?;
    let pipeline = PagePipeline::new(fetcher);

    let summary = crawl_seeds(&pipeline, &seeds, config.max_depth).await;

    print_summary(&summary, cli.summary_json)?;
    Ok(0)
}

fn print_summary(summary: &CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!();
    println!("📊 Scraping complete:");
    println!("   ✅ Pages saved:       {}", summary.pages_saved);
    println!("   ❌ Fetch failures:    {}", summary.fetch_failures);
    println!("   💾 Store failures:    {}", summary.store_failures);
    println!("   🔁 Already visited:   {}", summary.already_visited);
    println!("   ⛔ Beyond max depth:  {}", summary.beyond_max_depth);
    Ok(())
}
