use core::{fmt, ops::Range};

/// One statement cut from the input, borrowed verbatim.
///
/// `text` always equals `input[start..end]`. Comments, line breaks and the
/// closing `;` are kept exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statement<'src> {
    /// The statement text.
    pub text: &'src str,
    /// Byte offset of the first character in the input.
    pub start: usize,
    /// Byte offset one past the last character in the input.
    pub end: usize,
    /// Line of the first character (1-based).
    pub line: usize,
    /// Column of the first character (1-based, in characters).
    pub column: usize,
    /// `true` if the statement ended at a top-level `;`, `false` if it is
    /// trailing text cut off by the end of input.
    pub terminated: bool,
}

impl<'src> Statement<'src> {
    /// Returns the statement text.
    #[must_use]
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    /// Returns the byte range of the statement within the input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl AsRef<str> for Statement<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
