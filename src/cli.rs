// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The flags mirror the classic single-letter interface of the tool:
//   -u <url>       (required) url of the HTML document
//   -o <path>      path to the output file (default: standard error)
//   -s <selector>  CSS selector scoping the href search (default: "a")
//
// Running the binary with no arguments at all prints the help text,
// exactly like -h does.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: A flag that may or may not have been passed
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// arg_required_else_help = true prints the help when no argument is given
#[derive(Parser, Debug)]
#[command(
    name = "extract-href",
    version,
    about = "Extract a de-duplicated list of absolute urls from a HTML web page",
    long_about = "extract-href is a command line tool for extracting urls from a HTML web page, \
                  writing each url on a new line.\n\
                  Each matched url is:\n \
                  * absolute (resolved against the source url)\n \
                  * unique (no duplicates are added to the list)\n \
                  * a separate resource (no url fragments)\n\n\
                  It uses a CSS selector to search the HTML document for elements that have an \
                  href attribute to construct a de-duplicated list of href attributes.\n\n\
                  Example: extract-href -u https://example.com/docs -s '.main-column a' -o urls.txt",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Url to fetch links from
    ///
    /// Kept as an Option so that a missing url is reported by us as a
    /// configuration error rather than by clap's usage error
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Path to write the urls to (default: standard error)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// CSS selector to scope the url search to
    #[arg(short = 's', long = "selector", value_name = "SELECTOR", default_value = "a")]
    pub selector: String,

    /// Print the statistics as JSON instead of plain text
    ///
    /// Only has an effect together with -o, like the plain text summary
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on standard error (RUST_LOG takes precedence)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "extract-href",
            "-u",
            "https://example.com",
            "-o",
            "urls.txt",
            "-s",
            ".main a",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.output, Some(PathBuf::from("urls.txt")));
        assert_eq!(cli.selector, ".main a");
        assert!(!cli.json);
    }

    #[test]
    fn test_selector_defaults_to_anchor() {
        let cli = Cli::try_parse_from(["extract-href", "-u", "https://example.com"]).unwrap();
        assert_eq!(cli.selector, "a");
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_url_is_optional_for_clap() {
        // Missing -u must reach our own config validation
        let cli = Cli::try_parse_from(["extract-href", "-s", "a"]).unwrap();
        assert_eq!(cli.url, None);
    }

    #[test]
    fn test_no_arguments_prints_help() {
        let err = Cli::try_parse_from(["extract-href"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_short_help_flag() {
        let err = Cli::try_parse_from(["extract-href", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
