//! Byte-cursor scanning primitives shared by every line parser.
//!
//! Mirrors the `detail::` namespace of the reference parser this language
//! was distilled from: a single forward-only cursor into the source bytes,
//! with diagnostics accumulated as data rather than thrown.

use crate::constants::MODULUS;
use crate::diagnostic::Diagnostic;
use crate::stack::Stack;

pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c | b'\r')
}

pub fn is_separator(b: u8) -> bool {
    is_space(b) || b == b'\n'
}

/// A forward-only cursor over the source bytes, with diagnostics collected
/// as it advances.
pub struct Cursor<'a> {
    source: &'a [u8],
    pub pos: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor { source: source.as_bytes(), pos: 0, diagnostics: Vec::new() }
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, start: usize, end: usize, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(start, end, message));
    }

    pub fn skip_space(&mut self) {
        while matches!(self.peek(), Some(b) if is_space(b)) {
            self.pos += 1;
        }
    }

    pub fn skip_separator(&mut self) {
        while matches!(self.peek(), Some(b) if is_separator(b)) {
            self.pos += 1;
        }
    }

    /// Advances past the next `'\n'` (or to EOF if none remains).
    pub fn skip_line(&mut self) {
        while let Some(b) = self.peek() {
            self.pos += 1;
            if b == b'\n' {
                break;
            }
        }
    }

    /// Requires the cursor to be on a separator or at EOF, then consumes
    /// any run of spaces. On failure, records "expected whitespace".
    pub fn expect_space(&mut self) -> bool {
        if let Some(b) = self.peek() {
            if !is_separator(b) {
                self.push(self.pos, self.pos, "expected whitespace");
                return false;
            }
        }
        self.skip_space();
        true
    }

    /// Consumes spaces then exactly one `'\n'`, unless already at EOF.
    pub fn expect_newline(&mut self) -> bool {
        self.skip_space();
        if let Some(b) = self.peek() {
            if b != b'\n' {
                self.push(self.pos, self.pos, "expected newline");
                return false;
            }
            self.pos += 1;
        }
        true
    }

    /// Consumes trailing separators and requires nothing follows.
    pub fn expect_eof(&mut self) -> bool {
        self.skip_separator();
        if !self.at_eof() {
            self.push(self.pos, self.pos, "expected end of file");
            return false;
        }
        true
    }

    fn read_token(&mut self) -> (usize, usize) {
        let begin = self.pos;
        while matches!(self.peek(), Some(b) if !is_separator(b)) {
            self.pos += 1;
        }
        (begin, self.pos)
    }

    pub fn expect_stack(&mut self) -> Option<Stack> {
        let (begin, end) = self.read_token();
        if begin == end {
            self.push(self.pos, self.pos, "expected stack name");
            return None;
        }
        let token = std::str::from_utf8(&self.source[begin..end]).unwrap();
        match Stack::parse(token) {
            Some(s) => Some(s),
            None => {
                self.push(begin, end, "unknown stack name");
                None
            }
        }
    }

    /// Reads a run of ASCII digits as `u64`, accumulating with overflow
    /// detection. Returns `None` (no diagnostic) if no digit is present.
    fn read_digits(&mut self) -> Option<(u64, bool, usize)> {
        let begin = self.pos;
        let mut value: u64 = 0;
        let mut overflowed = false;
        let mut any = false;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            any = true;
            let digit = (b - b'0') as u64;
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => value = v,
                None => overflowed = true,
            }
            self.pos += 1;
        }
        if !any {
            self.pos = begin;
            return None;
        }
        Some((value, overflowed, begin))
    }

    /// Parses a 1-based state reference, validates it against the state
    /// count `n`, and returns the corresponding 0-based index.
    pub fn expect_state(&mut self, n: usize) -> Option<usize> {
        let begin = self.pos;
        let (value, overflowed, _) = match self.read_digits() {
            Some(v) => v,
            None => {
                self.push(begin, begin, "invalid integer");
                return None;
            }
        };
        let end = self.pos;
        if overflowed {
            self.push(begin, end, "invalid state");
            return None;
        }
        if value as usize > n {
            self.push(begin, end, "state out of bounds");
            return None;
        }
        if value == 0 {
            self.push(begin, end, "invalid state; did you mean state 1?");
            return None;
        }
        Some(value as usize - 1)
    }

    /// Parses a push value in `[0, MODULUS)`.
    pub fn expect_value(&mut self) -> Option<u32> {
        let begin = self.pos;
        let (value, overflowed, _) = match self.read_digits() {
            Some(v) => v,
            None => {
                self.push(begin, begin, "invalid integer");
                return None;
            }
        };
        let end = self.pos;
        if overflowed || value >= MODULUS as u64 {
            self.push(begin, end, "value out of bounds");
            return None;
        }
        Some(value as u32)
    }

    /// Parses the header's state count, returning `None` (header already
    /// abandoned; no further line parsing should be attempted) on failure.
    pub fn expect_state_count(&mut self, max_states: u32) -> Option<usize> {
        let begin = self.pos;
        let (value, overflowed, _) = match self.read_digits() {
            Some(v) => v,
            None => {
                self.push(begin, begin, "invalid integer");
                return None;
            }
        };
        let end = self.pos;
        if overflowed || value > max_states as u64 {
            self.push(begin, end, "too many states");
            return None;
        }
        if value == 0 {
            self.push(begin, end, "too few states");
            return None;
        }
        Some(value as usize)
    }

    /// Reads the next mnemonic token, or records "expected state type" if
    /// the cursor is already at a separator/EOF. Returns the token text
    /// plus its byte span, for the "unknown state type" diagnostic.
    pub fn expect_mnemonic(&mut self) -> Option<(&'a str, usize, usize)> {
        let (begin, end) = self.read_token();
        if begin == end {
            self.push(self.pos, self.pos, "expected state type");
            return None;
        }
        let token = std::str::from_utf8(&self.source[begin..end]).unwrap();
        Some((token, begin, end))
    }

    pub fn unknown_mnemonic(&mut self, begin: usize, end: usize) {
        self.push(begin, end, "unknown state type");
    }
}
