// src/fetch/mod.rs
// =============================================================================
// This module fetches the single HTML document we extract links from.
//
// Submodules:
// - document: HTTP GET + HTML parsing
//
// There is no crawling here: one url in, one parsed document out.
// =============================================================================

mod document;

pub use document::{build_client, fetch_document, parse_source_url};
