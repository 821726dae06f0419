// src/output/sink.rs
// =============================================================================
// The destination for extracted urls.
//
// Two kinds of destination, decided once when the sink is created:
// - File: created (or truncated) at the -o path; must be closed at the end
//   so buffered lines are flushed and the handle is released.
// - Stream: standard error. Standard error is used rather than standard
//   output so that stdout stays free for messages.
//
// Rust concepts:
// - Enums with data: each variant owns its writer
// - Trait impls: OutputSink implements std::io::Write so the extractor can
//   write to it like to any other writer
// - Consuming methods: close(self) makes using the sink after closing it
//   a compile error
// =============================================================================

use crate::error::ExtractError;
use std::fs::File;
use std::io::{self, BufWriter, Stderr, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum OutputSink {
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
    Stream(Stderr),
}

impl OutputSink {
    // Creates the sink for an optional output path
    //
    // Some(path) -> the file is created, truncating any previous content
    // None       -> standard error
    pub fn new(path: Option<&Path>) -> Result<Self, ExtractError> {
        match path {
            Some(path) => {
                let file = File::create(path)?;
                Ok(OutputSink::File {
                    path: path.to_path_buf(),
                    writer: BufWriter::new(file),
                })
            }
            None => Ok(OutputSink::Stream(io::stderr())),
        }
    }

    /// True when urls go to a file, which is also when stats get printed
    pub fn is_file(&self) -> bool {
        matches!(self, OutputSink::File { .. })
    }

    // Flushes and releases the destination
    //
    // Only the File variant has something to release; for standard error
    // this is just a flush. No fsync: -o may name /dev/null or a FIFO.
    pub fn close(self) -> Result<(), ExtractError> {
        match self {
            OutputSink::File { path, writer } => {
                // into_inner flushes the buffer; the handle drops right after
                writer
                    .into_inner()
                    .map(drop)
                    .map_err(|e| ExtractError::Close {
                        path,
                        source: e.into_error(),
                    })
            }
            OutputSink::Stream(mut stderr) => Ok(stderr.flush()?),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::File { writer, .. } => writer.write(buf),
            OutputSink::Stream(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::File { writer, .. } => writer.flush(),
            OutputSink::Stream(stderr) => stderr.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_sink_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");

        let mut sink = OutputSink::new(Some(path.as_path())).unwrap();
        assert!(sink.is_file());
        writeln!(sink, "http://host/a").unwrap();
        writeln!(sink, "http://host/b").unwrap();
        sink.close().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "http://host/a\nhttp://host/b\n");
    }

    #[test]
    fn test_file_sink_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        std::fs::write(&path, "old content that should disappear\n").unwrap();

        let mut sink = OutputSink::new(Some(path.as_path())).unwrap();
        writeln!(sink, "http://host/new").unwrap();
        sink.close().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "http://host/new\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_close_on_dev_null() {
        // Stats-only runs use -o /dev/null, which cannot be fsynced
        let mut sink = OutputSink::new(Some(Path::new("/dev/null"))).unwrap();
        assert!(sink.is_file());
        writeln!(sink, "http://host/a").unwrap();
        sink.close().unwrap();
    }

    #[test]
    fn test_no_path_means_stderr() {
        let sink = OutputSink::new(None).unwrap();
        assert!(!sink.is_file());
        sink.close().unwrap();
    }

    #[test]
    fn test_unwritable_path_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("urls.txt");

        let err = OutputSink::new(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ExtractError::Output(_)));
    }
}
