use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Returned when the splitter runs out of input inside a quoted or commented
/// region and [`UnterminatedPolicy::Reject`] is in effect.
///
/// [`UnterminatedPolicy::Reject`]: crate::UnterminatedPolicy::Reject
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unterminated {region} starting at {line}:{column}")]
pub struct SplitError {
    /// The kind of region that was left open.
    pub region: Region,
    /// Line of the opening delimiter (1-based).
    pub line: usize,
    /// Column of the opening delimiter (1-based, in characters).
    pub column: usize,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
}

/// A lexical region that must be closed by a matching delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "tag", rename_all = "snake_case"))]
pub enum Region {
    /// `'...'`
    SingleQuoted,
    /// `"..."`
    DoubleQuoted,
    /// `E'...'`
    EscapedQuoted,
    /// `/* ... */`
    BlockComment,
    /// `$tag$ ... $tag$`, carrying the full opening tag including both `$`.
    DollarQuoted(String),
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::SingleQuoted => f.write_str("quoted string"),
            Region::DoubleQuoted => f.write_str("quoted identifier"),
            Region::EscapedQuoted => f.write_str("escape string"),
            Region::BlockComment => f.write_str("block comment"),
            Region::DollarQuoted(tag) => write!(f, "dollar-quoted string {tag}"),
        }
    }
}
