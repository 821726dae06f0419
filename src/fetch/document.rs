// src/fetch/document.rs
// =============================================================================
// Fetches a web page and parses it into a queryable HTML document.
//
// Behaviour worth knowing:
// - The body is parsed whatever the HTTP status code is. A 404 page still
//   has links on it, so a non-2xx status is only logged as a warning.
// - Transport failures (DNS, refused connection, timeout) are fetch errors.
// - A body that cannot be read as text is a parse error.
// - No retries.
//
// Rust concepts:
// - async/await: reqwest is an async client
// - map_err: Attach the url to the library error
// =============================================================================

use crate::config::FetchSettings;
use crate::error::ExtractError;
use reqwest::Client;
use scraper::Html;
use tracing::{info, warn};
use url::Url;

// Creates the HTTP client used for the fetch
//
// We keep the client's default redirect policy (follow up to 10)
pub fn build_client(settings: &FetchSettings) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .build()
}

// Parses the source url given on the command line
//
// It must be absolute: it is both the page we fetch and the base every
// relative href is resolved against.
pub fn parse_source_url(source_url: &str) -> Result<Url, ExtractError> {
    Url::parse(source_url).map_err(|source| ExtractError::InvalidUrl {
        url: source_url.to_string(),
        source,
    })
}

// Performs a GET on the url and returns the parsed HTML document
pub async fn fetch_document(client: &Client, url: &Url) -> Result<Html, ExtractError> {
    info!(%url, "fetching document");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ExtractError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "non-success status, parsing body anyway");
    }

    let body = response.text().await.map_err(|source| ExtractError::Parse {
        url: url.to_string(),
        source,
    })?;

    info!(%url, bytes = body.len(), "document fetched");

    // html5ever recovers from any malformed markup, so parsing itself
    // cannot fail once we have the text
    Ok(Html::parse_document(&body))
}
