// src/extract/mod.rs
// =============================================================================
// The heart of the tool: select elements, resolve their hrefs, de-duplicate,
// write every new url as a line.
//
// Submodules:
// - resolve: relative -> absolute url, fragment stripping
// - collector: duplicate detection and counting
// - stats: the counters reported at the end of a run
//
// The selector dialect is whatever the `scraper` crate supports (CSS
// selectors such as "a", ".main-column a", "nav > ul a[href]").
// =============================================================================

mod collector;
mod resolve;
mod stats;

pub use collector::{Classification, HrefCollector};
pub use stats::Stats;

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::fetch;
use reqwest::Client;
use scraper::{Html, Selector};
use std::io::Write;
use url::Url;

// Parses a CSS selector, turning a parse failure into a configuration error
//
// scraper's error borrows the input, so we keep only its message.
pub fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

// Runs the selector over an already parsed document
//
// Each accepted url is written to `writer` as soon as it is accepted,
// followed by a newline. Elements are visited in document order.
pub fn write_hrefs<W: Write>(
    document: &Html,
    selector: &Selector,
    base: &Url,
    writer: &mut W,
) -> Result<Stats, ExtractError> {
    let mut collector = HrefCollector::new(base.clone());

    for element in document.select(selector) {
        let href = element.value().attr("href");
        if let Classification::Accepted(url) = collector.observe(href) {
            writeln!(writer, "{}", url)?;
        }
    }

    Ok(collector.stats())
}

// Fetches the configured page and writes its de-duplicated absolute urls
//
// The selector was parsed when the config was built; the url is parsed
// here, before the request is sent.
pub async fn fetch_and_write_hrefs<W: Write>(
    client: &Client,
    config: &ExtractConfig,
    writer: &mut W,
) -> Result<Stats, ExtractError> {
    let base = fetch::parse_source_url(&config.source_url)?;

    let document = fetch::fetch_document(client, &base).await?;

    write_hrefs(&document, &config.selector, &base, writer)
}
