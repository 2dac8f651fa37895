//! Indentation-aware text buffer for Swift source.
//!
//! Every synthesizer writes into exactly one [`SwiftWriter`]. The writer owns
//! its indentation depth; nested blocks acquire one level on entry and
//! release it on exit, so depth is always restored, whatever the body does.

use std::ops::{Deref, DerefMut};

/// One indentation level.
pub const INDENT: &str = "    ";

/// Accumulating Swift source buffer with a current indentation depth.
#[derive(Debug, Clone, Default)]
pub struct SwiftWriter {
    out: String,
    depth: usize,
}

impl SwiftWriter {
    /// Start an empty top-level buffer at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a top-level buffer with `header` copied verbatim.
    pub fn with_header(header: &str) -> Self {
        Self {
            out: header.to_string(),
            depth: 0,
        }
    }

    /// Current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Emit `text`, one output line per embedded line break, each prefixed
    /// with the current indentation. Empty lines carry no indentation.
    pub fn line(&mut self, text: &str) {
        for part in text.split('\n') {
            if !part.is_empty() {
                for _ in 0..self.depth {
                    self.out.push_str(INDENT);
                }
                self.out.push_str(part);
            }
            self.out.push('\n');
        }
    }

    /// Emit an empty separator line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Emit `header {`, run `body` one level deeper, then emit
    /// `}` followed by `suffix` and a blank separator line.
    pub fn block<R>(&mut self, header: &str, suffix: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        self.line(&format!("{header} {{"));
        let result = {
            let mut inner = self.indent();
            body(&mut *inner)
        };
        self.line(&format!("}}{suffix}"));
        self.blank();
        result
    }

    /// Increase the depth by one level until the returned guard is dropped.
    pub fn indent(&mut self) -> Indented<'_> {
        self.depth += 1;
        Indented { writer: self }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Consume the writer, returning its text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// One acquired indentation level; released on drop.
#[derive(Debug)]
pub struct Indented<'a> {
    writer: &'a mut SwiftWriter,
}

impl Deref for Indented<'_> {
    type Target = SwiftWriter;

    fn deref(&self) -> &SwiftWriter {
        self.writer
    }
}

impl DerefMut for Indented<'_> {
    fn deref_mut(&mut self) -> &mut SwiftWriter {
        self.writer
    }
}

impl Drop for Indented<'_> {
    fn drop(&mut self) {
        self.writer.depth = self.writer.depth.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
