//! Compile diagnostics and their rendering as `file:line:col` messages.

use std::io::{self, Write};

/// A single parse error, located by a half-open byte range `[start, end)`
/// into the original source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub start: usize,
    pub end: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(start: usize, end: usize, message: impl Into<String>) -> Diagnostic {
        Diagnostic { start, end, message: message.into() }
    }

    /// Point diagnostic: `start == end == at`.
    pub fn point(at: usize, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(at, at, message)
    }
}

/// Byte offsets where each source line begins, for `file:line:col` lookup.
struct LineStarts(Vec<usize>);

impl LineStarts {
    fn compute(source: &str) -> LineStarts {
        let mut starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        LineStarts(starts)
    }

    /// 1-based (line, column) for a byte offset, via binary search over
    /// line-start offsets.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let line_index = match self.0.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.0[line_index];
        (line_index + 1, offset - line_start + 1)
    }
}

/// Writes each diagnostic as `<filename>:<line>:<col>: error: <message>` to
/// `out`. Returns `true` if any diagnostics were written.
pub fn print_diagnostics(
    out: &mut dyn Write,
    diagnostics: &[Diagnostic],
    filename: &str,
    source: &str,
) -> io::Result<bool> {
    if diagnostics.is_empty() {
        return Ok(false);
    }
    let lines = LineStarts::compute(source);
    for diag in diagnostics {
        let (line, col) = lines.locate(diag.start);
        writeln!(out, "{}:{}:{}: error: {}", filename, line, col, diag.message)?;
    }
    Ok(true)
}
