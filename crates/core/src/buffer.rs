//! Text buffer access
//!
//! The extractor only ever asks a buffer two questions: how many lines
//! it has and what a given line contains. `TextBuffer` is that seam, so
//! an embedding host can hand in whatever representation it already
//! keeps. `RopeBuffer` is the standalone implementation used by the CLI.

use ropey::Rope;
use std::borrow::Cow;
use std::io;

/// Read-only, line-oriented view of a text buffer.
///
/// Lines are addressed by zero-based row index and returned without
/// their terminating line break. The buffer is treated as an immutable
/// snapshot for the duration of one query.
pub trait TextBuffer {
    /// Number of lines in the buffer.
    fn line_count(&self) -> usize;

    /// Content of the line at `row`, or `None` past the end.
    fn line(&self, row: usize) -> Option<Cow<'_, str>>;
}

/// Rope-backed buffer for standalone use.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    /// Build a buffer from in-memory text.
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Build a buffer by streaming from a reader.
    pub fn from_reader<R: io::Read>(reader: R) -> io::Result<Self> {
        Ok(Self {
            rope: Rope::from_reader(reader)?,
        })
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        let line = self.rope.get_line(row)?;

        // Strip the line break; the rope keeps "\n" or "\r\n" attached.
        let mut end = line.len_chars();
        if end > 0 && line.char(end - 1) == '\n' {
            end -= 1;
        }
        if end > 0 && line.char(end - 1) == '\r' {
            end -= 1;
        }
        let line = line.slice(..end);

        Some(match line.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(line.to_string()),
        })
    }
}

/// Materialized line arrays work as buffers too; handy for hosts that
/// already keep lines split, and for tests.
impl<S: AsRef<str>> TextBuffer for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        self.get(row).map(|s| Cow::Borrowed(s.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rope_buffer_strips_line_breaks() {
        let buf = RopeBuffer::from_str("def f():\n    pass\r\n");
        assert_eq!(buf.line(0).as_deref(), Some("def f():"));
        assert_eq!(buf.line(1).as_deref(), Some("    pass"));
    }

    #[test]
    fn test_rope_buffer_out_of_range() {
        let buf = RopeBuffer::from_str("one\ntwo");
        assert_eq!(buf.line_count(), 2);
        assert!(buf.line(2).is_none());
    }

    #[test]
    fn test_slice_buffer() {
        let lines = ["alpha", "  beta"];
        let buf: &[&str] = &lines;
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(1).as_deref(), Some("  beta"));
        assert!(buf.line(5).is_none());
    }
}
