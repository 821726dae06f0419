// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// Log events go to stderr through tracing-subscriber. Since stderr is also
// where the urls are written when no -o is given, the default level is
// "warn" so a normal run prints nothing but urls there.
//
// Level selection, first match wins:
//   1. RUST_LOG (e.g. RUST_LOG=extract_href=debug)
//   2. -v / --verbose  -> debug
//   3. otherwise       -> warn
// =============================================================================

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "extract_href=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // try_init: a second initialisation (tests) is not an error for us
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "extract_href=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
