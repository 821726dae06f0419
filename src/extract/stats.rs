// src/extract/stats.rs
// =============================================================================
// Counters describing one extraction run.
//
// Every element carrying an href ends up in exactly one of:
//   valid_url   - accepted and written
//   duplicates  - same as the source url or an already accepted url
//   unresolved  - the href could not be resolved to a url
// so with_href == valid_url + duplicates + unresolved always holds.
// =============================================================================

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Elements matched by the selector
    pub elements: usize,
    /// Elements that have an "href" attribute
    pub with_href: usize,
    /// Elements whose absolute url was a duplicate
    pub duplicates: usize,
    /// Elements with a valid, newly accepted url
    pub valid_url: usize,
    /// Elements whose href could not be resolved
    pub unresolved: usize,
}

// The four-line summary printed after writing to a file.
// `unresolved` is left out of it on purpose; it only shows up in --json.
impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} matched HTML elements", self.elements)?;
        writeln!(f, "{} had a href attribute.", self.with_href)?;
        writeln!(f, "{} were duplicates", self.duplicates)?;
        write!(f, "{} were valid", self.valid_url)
    }
}
