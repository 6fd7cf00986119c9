//! Token and line scanner over the records file.
//!
//! Mixes whitespace-delimited tokens with rest-of-line reads, the way the
//! records format is laid out: counts and credits are tokens, names and
//! titles run to the end of the line.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Cursor over the input text.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// 1-based line number of the cursor.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Move the cursor forward by `len` bytes, counting the line breaks passed.
    fn advance(&mut self, len: usize) {
        let end = self.pos + len;
        self.line += count_newlines(&self.input[self.pos..end]);
        self.pos = end;
    }

    /// Skip whitespace, including line breaks, and return the next token.
    pub(crate) fn next_token(&mut self) -> Option<&'a str> {
        let input = self.input;
        let rest = &input[self.pos..];
        let start = rest.len() - rest.trim_start().len();
        let rest = &rest[start..];
        if rest.is_empty() {
            self.advance(start);
            return None;
        }

        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.advance(start + len);
        Some(&rest[..len])
    }

    /// Read the next token and parse it as a number.
    ///
    /// `what` names the expected value in the error message.
    pub(crate) fn next_number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let line = self.line_of_next_token();
        let token = self
            .next_token()
            .ok_or_else(|| Error::parse(line, format!("unexpected end of input, expected {what}")))?;

        token
            .parse()
            .map_err(|_| Error::parse(line, format!("expected {what}, found '{token}'")))
    }

    /// Read the next token, failing at end of input.
    pub(crate) fn expect_token(&mut self, what: &str) -> Result<&'a str> {
        let line = self.line_of_next_token();
        self.next_token()
            .ok_or_else(|| Error::parse(line, format!("unexpected end of input, expected {what}")))
    }

    /// Return the rest of the current line and move past its line break.
    ///
    /// Returns `None` only when the cursor is already at end of input.
    pub(crate) fn next_line(&mut self) -> Option<&'a str> {
        let input = self.input;
        if self.pos >= input.len() {
            return None;
        }

        let rest = &input[self.pos..];
        let (line, advance) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.advance(advance);
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Like [`Scanner::next_line`], but an exhausted input yields an empty line.
    pub(crate) fn rest_of_line(&mut self) -> &'a str {
        self.next_line().unwrap_or("")
    }

    fn line_of_next_token(&self) -> usize {
        let rest = &self.input[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        self.line + count_newlines(&rest[..skipped])
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}
