// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (or print the help)
// 2. Validate them into an ExtractConfig
// 3. Open the output (file or stderr) and run the extraction
// 4. Print the statistics when the urls went to a file
// 5. Close the output and exit (0 = success, 2 = error)
//
// Example:
//   extract-href -u https://example.com/docs -s '.main-column a' -o urls.txt
//
// Rust concepts used:
// - async/await: reqwest is async, tokio drives the single request
// - Result<T, E>: For error handling (T = success type, E = error type)
// - ?: Early return on error, converting the error type on the way
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - validated run configuration
mod error;     // src/error.rs - error taxonomy
mod extract;   // src/extract/ - selector, resolution, de-duplication
mod fetch;     // src/fetch/ - HTTP GET + HTML parsing
mod logging;   // src/logging.rs - tracing subscriber setup
mod output;    // src/output/ - file or stderr destination

use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use cli::Cli;
use config::{ExtractConfig, FetchSettings};
use extract::Stats;
use output::OutputSink;
use std::io::Write;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// One HTTP request does not need a thread pool: the current-thread
// runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Errors go to stdout: stderr may be carrying the url list
            // {:#} prints the whole cause chain on one line
            println!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Parses the command line and runs the extraction
// Returns:
//   Ok(0) = urls extracted (or help / version printed)
//   Err   = any configuration, fetch, parse or output error
async fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Ok(handle_clap_error(e)),
    };

    logging::init(cli.verbose);

    execute(&cli, &mut std::io::stdout()).await
}

// Runs one extraction for already parsed arguments
//
// `stdout` receives the statistics summary; urls go to the OutputSink
async fn execute<W: Write>(cli: &Cli, stdout: &mut W) -> Result<i32> {
    // Validate first: a missing url must not create the output file
    let config = ExtractConfig::from_cli(cli)?;

    let client = fetch::build_client(&FetchSettings::default())
        .context("failed to build HTTP client")?;

    let mut sink = OutputSink::new(config.output.as_deref())?;

    let stats = extract::fetch_and_write_hrefs(&client, &config, &mut sink).await?;

    tracing::info!(
        elements = stats.elements,
        valid = stats.valid_url,
        duplicates = stats.duplicates,
        "extraction finished"
    );

    // When the urls went to stderr the summary is not printed
    if sink.is_file() {
        print_stats(stdout, &stats, cli.json)?;
    }

    sink.close()?;

    Ok(0)
}

// Prints the statistics either as the plain text summary or JSON
fn print_stats<W: Write>(out: &mut W, stats: &Stats, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(stats)?;
        writeln!(out, "{}", json_output)?;
    } else {
        writeln!(out, "{}", stats)?;
    }
    Ok(())
}

// Help and version requests are not failures: print them on stdout and
// exit 0. With no argument at all clap asks for the help as well.
// Everything else is a usage error that clap reports and exits on.
fn handle_clap_error(e: clap::Error) -> i32 {
    match e.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            if let Err(io_err) = Cli::command().print_long_help() {
                println!("Error: {}", io_err);
                return 2;
            }
            0
        }
        ClapErrorKind::DisplayVersion => {
            print!("{}", e);
            0
        }
        _ => e.exit(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why are errors printed with println! and not eprintln!?
//    - Without -o, the url list itself is written to stderr
//    - Printing errors there would mix them into the list
//
// 2. Why is the config validated before the sink is created?
//    - OutputSink::new truncates the file at -o
//    - A run that fails on a missing url should leave that file alone
//
// 3. What is {:#}?
//    - anyhow's alternate format: "outer error: inner cause: root cause"
//
// 4. Why does e.exit() work as a return value of type i32?
//    - exit() returns `!` (the never type), which fits any type
// -----------------------------------------------------------------------------
