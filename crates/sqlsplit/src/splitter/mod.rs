//! Statement splitter: one left-to-right pass over a SQL script.
//!
//! Overview
//! - The cursor walks the input once and never moves backwards. At every
//!   position exactly one lexical [`Mode`] is active. `Normal` is the initial
//!   mode and the only one from which the others are entered; every other mode
//!   scans to its closing delimiter and hands control back to `Normal`.
//! - Everything between the first character of a statement and the cursor is
//!   kept verbatim, so the statement under construction is always a contiguous
//!   slice of the input. Statements are returned as borrowed slices and the
//!   splitter never allocates for them.
//! - Parentheses and brackets share one depth counter. A `;` ends a statement
//!   only at depth zero. The counter is not clamped and is never reset between
//!   statements.
//!
//! Scanning
//! - All delimiters are ASCII, so the scan is byte-wise: an ASCII byte can
//!   never be part of a multi-byte UTF-8 sequence. Inside a region the
//!   scanner jumps straight to the next candidate delimiter with a memchr
//!   search. Only the character after a backslash in an escape string and the
//!   whitespace after a statement boundary are decoded.
//!
//! Unterminated regions
//! - A quote, block comment, or dollar-quoted body still open at end of input
//!   swallows the rest of the input. Under [`UnterminatedPolicy::Absorb`] the
//!   result is emitted as the last statement; under
//!   [`UnterminatedPolicy::Reject`] a [`SplitError`] takes its place. A line
//!   comment that reaches end of input is complete either way.

mod location;


use alloc::{string::String, vec::Vec};
use core::iter::FusedIterator;

use bstr::ByteSlice;
use location::Locator;
use tracing::{debug, trace};

use crate::{Region, SplitError, SplitterOptions, Statement, UnterminatedPolicy};

/// Bytes that may start a delimiter in normal mode. Anything else is copied
/// without a second look.
const NORMAL_TRIGGERS: &[u8] = b"'\"-/Ee()[];$";

/// The active lexical mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode<'src> {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    EscapedQuoted,
    LineComment,
    BlockComment,
    /// Holds the full tag, both `$` included.
    DollarQuoted(&'src str),
}

impl Mode<'_> {
    /// The region that is still open if the input ends in this mode.
    fn open_region(self) -> Option<Region> {
        match self {
            Mode::Normal | Mode::LineComment => None,
            Mode::SingleQuoted => Some(Region::SingleQuoted),
            Mode::DoubleQuoted => Some(Region::DoubleQuoted),
            Mode::EscapedQuoted => Some(Region::EscapedQuoted),
            Mode::BlockComment => Some(Region::BlockComment),
            Mode::DollarQuoted(tag) => Some(Region::DollarQuoted(String::from(tag))),
        }
    }
}

/// Outcome of one normal-mode step.
enum Step<'src> {
    Continue,
    Enter(Mode<'src>),
    Boundary,
}

/// Splits a SQL script into statements.
///
/// `Splitter` is an iterator: each call to `next` scans forward to the next
/// statement boundary (or the end of input) and yields the statement it
/// passed over.
///
/// # Examples
///
/// ```rust
/// use sqlsplit::Splitter;
///
/// let script = "CREATE TABLE t (a int);\nINSERT INTO t VALUES (1);";
/// let texts: Vec<&str> = Splitter::new(script)
///     .map(|stmt| stmt.map(|s| s.text))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(texts, ["CREATE TABLE t (a int);", "INSERT INTO t VALUES (1);"]);
/// ```
#[derive(Debug, Clone)]
pub struct Splitter<'src> {
    input: &'src str,
    /// Byte offset of the cursor.
    pos: usize,
    depth: isize,
    locator: Locator,
    options: SplitterOptions,
    finished: bool,
}

impl<'src> Splitter<'src> {
    /// Creates a splitter with default options.
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self::with_options(input, SplitterOptions::default())
    }

    /// Creates a splitter with the given options.
    #[must_use]
    pub fn with_options(input: &'src str, options: SplitterOptions) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            locator: Locator::default(),
            options,
            finished: false,
        }
    }

    /// Splits the whole input at once.
    ///
    /// # Errors
    ///
    /// Returns a [`SplitError`] only under [`UnterminatedPolicy::Reject`],
    /// when the input ends inside a quoted or commented region.
    pub fn split_all(
        input: &'src str,
        options: SplitterOptions,
    ) -> Result<Vec<Statement<'src>>, SplitError> {
        Self::with_options(input, options).collect()
    }

    /// Current parenthesis/bracket nesting depth. Negative after unbalanced
    /// closers.
    #[must_use]
    pub fn depth(&self) -> isize {
        self.depth
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    fn next_statement(&mut self) -> Option<Result<Statement<'src>, SplitError>> {
        let len = self.input.len();
        if self.finished || self.pos >= len {
            self.finished = true;
            return None;
        }

        let start = self.pos;
        let (line, column) = self.locator.advance_to(self.input, start);
        let mut mode = Mode::Normal;
        let mut opened_at = start;
        let mut terminated = false;

        while self.pos < len {
            let closed = match mode {
                Mode::Normal => {
                    let at = self.pos;
                    match self.step_normal() {
                        Step::Continue => {}
                        Step::Enter(next) => {
                            mode = next;
                            opened_at = at;
                        }
                        Step::Boundary => {
                            terminated = true;
                            break;
                        }
                    }
                    continue;
                }
                Mode::SingleQuoted => self.skip_quoted(b'\''),
                Mode::DoubleQuoted => self.skip_quoted(b'"'),
                Mode::EscapedQuoted => self.skip_escaped(),
                Mode::LineComment => self.skip_line_comment(),
                Mode::BlockComment => self.skip_block_comment(),
                Mode::DollarQuoted(tag) => self.skip_dollar_quoted(tag),
            };
            if closed {
                mode = Mode::Normal;
            }
        }

        let end = self.pos;
        let text = &self.input[start..end];

        if terminated {
            self.skip_whitespace();
        } else {
            self.finished = true;
            if let Some(region) = mode.open_region() {
                let (line, column) = self.locator.advance_to(self.input, opened_at);
                debug!(%region, line, column, "input ended inside an open region");
                if self.options.unterminated == UnterminatedPolicy::Reject {
                    return Some(Err(SplitError {
                        region,
                        line,
                        column,
                        offset: opened_at,
                    }));
                }
            }
            if text.trim().is_empty() {
                return None;
            }
        }

        trace!(line, column, start, end, terminated, "statement");
        Some(Ok(Statement {
            text,
            start,
            end,
            line,
            column,
            terminated,
        }))
    }

    /// Dispatches on the bytes at the cursor and advances past them.
    fn step_normal(&mut self) -> Step<'src> {
        let input = self.input;
        let rest = &input.as_bytes()[self.pos..];
        let (advance, step) = match rest {
            [b'\'', ..] => (1, Step::Enter(Mode::SingleQuoted)),
            [b'"', ..] => (1, Step::Enter(Mode::DoubleQuoted)),
            [b'-', b'-', ..] => (2, Step::Enter(Mode::LineComment)),
            [b'/', b'*', ..] => (2, Step::Enter(Mode::BlockComment)),
            [b'E' | b'e', b'\'', ..] => (2, Step::Enter(Mode::EscapedQuoted)),
            [b'(' | b'[', ..] => {
                self.depth += 1;
                (1, Step::Continue)
            }
            [b')' | b']', ..] => {
                self.depth -= 1;
                (1, Step::Continue)
            }
            [b';', ..] if self.depth == 0 => (1, Step::Boundary),
            [b'$', ..] => match self.dollar_tag() {
                Some(tag) => (tag.len(), Step::Enter(Mode::DollarQuoted(tag))),
                None => (1, Step::Continue),
            },
            _ => {
                let skip = rest[1..].find_byteset(NORMAL_TRIGGERS).unwrap_or(rest.len() - 1);
                (1 + skip, Step::Continue)
            }
        };
        self.pos += advance;
        step
    }

    /// Recognizes `$tag$` at the cursor. The tag may be empty but may not
    /// contain `$` or whitespace.
    fn dollar_tag(&self) -> Option<&'src str> {
        let input = self.input;
        for (i, ch) in input[self.pos + 1..].char_indices() {
            if ch == '$' {
                return Some(&input[self.pos..self.pos + i + 2]);
            }
            if ch.is_whitespace() {
                return None;
            }
        }
        None
    }

    /// Scans past the closing quote. A doubled quote is an escaped quote.
    fn skip_quoted(&mut self, quote: u8) -> bool {
        let bytes = self.input.as_bytes();
        while let Some(i) = bytes[self.pos..].find_byte(quote) {
            let at = self.pos + i;
            if bytes.get(at + 1) == Some(&quote) {
                self.pos = at + 2;
                continue;
            }
            self.pos = at + 1;
            return true;
        }
        self.pos = bytes.len();
        false
    }

    /// Like [`skip_quoted`](Self::skip_quoted) for `'`, except a backslash
    /// takes the following character with it, whatever that character is.
    fn skip_escaped(&mut self) -> bool {
        let bytes = self.input.as_bytes();
        while let Some(i) = bytes[self.pos..].find_byteset(b"\\'") {
            let at = self.pos + i;
            if bytes[at] == b'\\' {
                let (_, width) = bstr::decode_utf8(&bytes[at + 1..]);
                self.pos = at + 1 + width;
                continue;
            }
            if bytes.get(at + 1) == Some(&b'\'') {
                self.pos = at + 2;
                continue;
            }
            self.pos = at + 1;
            return true;
        }
        self.pos = bytes.len();
        false
    }

    /// Scans through the end of the line, newline included. `\r\n` needs no
    /// special case: the `\r` is copied like any other byte.
    fn skip_line_comment(&mut self) -> bool {
        let bytes = self.input.as_bytes();
        if let Some(i) = bytes[self.pos..].find_byte(b'\n') {
            self.pos += i + 1;
            true
        } else {
            self.pos = bytes.len();
            false
        }
    }

    /// Scans past the first `*/`. Block comments do not nest.
    fn skip_block_comment(&mut self) -> bool {
        self.skip_past(b"*/")
    }

    fn skip_dollar_quoted(&mut self, tag: &str) -> bool {
        self.skip_past(tag.as_bytes())
    }

    fn skip_past(&mut self, needle: &[u8]) -> bool {
        let bytes = self.input.as_bytes();
        if let Some(i) = bytes[self.pos..].find(needle) {
            self.pos += i + needle.len();
            true
        } else {
            self.pos = bytes.len();
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

impl<'src> Iterator for Splitter<'src> {
    type Item = Result<Statement<'src>, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement()
    }
}

impl FusedIterator for Splitter<'_> {}
