// src/extract/collector.rs
// =============================================================================
// Classifies hrefs one element at a time and keeps the set of accepted urls.
//
// The collector is fed the href of each matched element in document order
// and decides, for each one, whether the url is new (accept it), already
// seen or pointing at the page itself (duplicate), or unusable (unresolved).
// First occurrence wins, so the accepted order is the document order.
//
// Rust concepts:
// - HashSet: O(1) "have we seen this url" checks
// - Enums with data: Accepted carries the url to write
// =============================================================================

use super::resolve::{resolve_href, self_reference};
use super::stats::Stats;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// What happened to one matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No href attribute at all
    NoHref,
    /// href present but not resolvable
    Unresolved,
    /// Resolved to the source page or to an already accepted url
    Duplicate,
    /// New url, to be written
    Accepted(String),
}

pub struct HrefCollector {
    base: Url,
    own_url: String,
    accepted: HashSet<String>,
    stats: Stats,
}

impl HrefCollector {
    pub fn new(base: Url) -> Self {
        let own_url = self_reference(&base);
        Self {
            base,
            own_url,
            accepted: HashSet::new(),
            stats: Stats::default(),
        }
    }

    // Records one matched element, given the value of its href attribute
    pub fn observe(&mut self, href: Option<&str>) -> Classification {
        self.stats.elements += 1;

        let Some(href) = href else {
            return Classification::NoHref;
        };
        self.stats.with_href += 1;

        let Some(absolute) = resolve_href(&self.base, href) else {
            debug!(href, "skipping href that does not resolve to a url");
            self.stats.unresolved += 1;
            return Classification::Unresolved;
        };

        let absolute = String::from(absolute);
        if absolute == self.own_url || self.accepted.contains(&absolute) {
            self.stats.duplicates += 1;
            return Classification::Duplicate;
        }

        self.accepted.insert(absolute.clone());
        self.stats.valid_url += 1;
        Classification::Accepted(absolute)
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}
