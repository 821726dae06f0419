// src/error.rs
// =============================================================================
// Error types for extract-href.
//
// Every failure that aborts a run ends up as one of the variants below.
// Messages do not repeat the underlying cause; it is reachable through
// Error::source() and printed by main with anyhow's "{:#}" format.
// A malformed href on a single element is NOT an error: it is skipped and
// counted in Stats::unresolved instead (see extract/collector.rs).
//
// Rust concepts:
// - thiserror: derive Display and Error for an enum
// - #[from]: automatic conversion so the ? operator works
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The `-u` flag was not given.
    #[error("url is required")]
    MissingUrl,

    /// The selector could not be parsed by the selector engine.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The source URL is not an absolute URL.
    #[error("invalid url '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP request itself failed (DNS, connection refused, timeout...).
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read as HTML text.
    #[error("failed to parse response body of {url} as HTML")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Creating or writing the output failed.
    #[error("failed to write output")]
    Output(#[from] std::io::Error),

    /// Flushing and closing the output file failed.
    #[error("failed to close output file {}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad category of an error, matching how the run reacts to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Fetch,
    Parse,
    Output,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::MissingUrl | ExtractError::InvalidSelector { .. } => {
                ErrorKind::Configuration
            }
            ExtractError::InvalidUrl { .. } | ExtractError::Fetch { .. } => ErrorKind::Fetch,
            ExtractError::Parse { .. } => ErrorKind::Parse,
            ExtractError::Output(_) | ExtractError::Close { .. } => ErrorKind::Output,
        }
    }
}
