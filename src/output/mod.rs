// src/output/mod.rs
// =============================================================================
// Where the extracted urls go: a file (-o) or standard error.
// =============================================================================

mod sink;

pub use sink::OutputSink;
