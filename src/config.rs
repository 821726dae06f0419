// src/config.rs
// =============================================================================
// Turns the parsed command line into the configuration of a single run.
//
// Validation happens here, before any file is created or any request is
// sent: a run without a url fails with a configuration error and touches
// neither the network nor the filesystem.
// =============================================================================

use crate::cli::Cli;
use crate::error::ExtractError;
use crate::extract::parse_selector;
use scraper::Selector;
use std::path::PathBuf;
use std::time::Duration;

/// Default CSS selector: every anchor element.
pub const DEFAULT_SELECTOR: &str = "a";

/// Everything one extraction run needs to know.
///
/// The selector is stored already parsed, so a config that exists always
/// carries a usable selector.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Url of the page to fetch, also the base for relative hrefs
    pub source_url: String,
    /// CSS selector picking the elements to read href from
    pub selector: Selector,
    /// Output file; None means standard error
    pub output: Option<PathBuf>,
}

impl ExtractConfig {
    // Fails with ExtractError::InvalidSelector if the selector does not parse
    pub fn new(source_url: impl Into<String>, selector: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            source_url: source_url.into(),
            selector: parse_selector(selector)?,
            output: None,
        })
    }

    /// Builds the run configuration from the command line
    ///
    /// Fails with ExtractError::MissingUrl if -u was omitted (or empty) and
    /// with ExtractError::InvalidSelector if the selector does not parse.
    /// An empty selector falls back to the default one.
    pub fn from_cli(cli: &Cli) -> Result<Self, ExtractError> {
        let source_url = match cli.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return Err(ExtractError::MissingUrl),
        };

        let selector = match cli.selector.trim() {
            "" => DEFAULT_SELECTOR,
            _ => cli.selector.as_str(),
        };

        Ok(Self {
            output: cli.output.clone(),
            ..Self::new(source_url, selector)?
        })
    }
}

/// HTTP client settings for the document fetcher
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("extract-href/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use scraper::Html;

    #[test]
    fn test_missing_url_is_configuration_error() {
        let cli = Cli::try_parse_from(["extract-href", "-o", "out.txt"]).unwrap();
        let err = ExtractConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ExtractError::MissingUrl));
    }

    #[test]
    fn test_blank_url_is_missing() {
        let cli = Cli::try_parse_from(["extract-href", "-u", "  "]).unwrap();
        assert!(matches!(
            ExtractConfig::from_cli(&cli),
            Err(ExtractError::MissingUrl)
        ));
    }

    // Number of elements the configured selector matches in `html`
    fn match_count(config: &ExtractConfig, html: &str) -> usize {
        Html::parse_document(html).select(&config.selector).count()
    }

    #[test]
    fn test_from_cli_keeps_all_flags() {
        let cli = Cli::try_parse_from([
            "extract-href",
            "-u",
            "http://host/1",
            "-s",
            "nav a",
            "-o",
            "links.txt",
        ])
        .unwrap();
        let config = ExtractConfig::from_cli(&cli).unwrap();

        assert_eq!(config.source_url, "http://host/1");
        assert_eq!(config.output, Some(PathBuf::from("links.txt")));
        assert_eq!(
            match_count(&config, r#"<nav><a href="/x">x</a></nav><a href="/y">y</a>"#),
            1
        );
    }

    #[test]
    fn test_invalid_selector_rejected_early() {
        let cli = Cli::try_parse_from(["extract-href", "-u", "http://host/1", "-s", "a[href"]).unwrap();
        let err = ExtractConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn test_new_rejects_invalid_selector() {
        let err = ExtractConfig::new("http://host/1", "a[").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_selector_falls_back_to_default() {
        let cli = Cli::try_parse_from(["extract-href", "-u", "http://host/1", "-s", ""]).unwrap();
        let config = ExtractConfig::from_cli(&cli).unwrap();
        assert_eq!(match_count(&config, "<p><a>one</a><a>two</a></p>"), 2);
    }
}
