/// Configuration options for the statement splitter.
///
/// # Examples
///
/// ```rust
/// use sqlsplit::{Splitter, SplitterOptions, UnterminatedPolicy};
///
/// let options = SplitterOptions {
///     unterminated: UnterminatedPolicy::Reject,
/// };
/// let mut splitter = Splitter::with_options("SELECT 'oops;", options);
/// assert!(splitter.next().unwrap().is_err());
/// ```
///
/// # Default
///
/// Unterminated regions are absorbed into the last statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitterOptions {
    /// What to do when the input ends inside a string, quoted identifier,
    /// block comment, or dollar-quoted body.
    ///
    /// A line comment that runs to the end of input is always accepted.
    ///
    /// # Default
    ///
    /// [`UnterminatedPolicy::Absorb`]
    pub unterminated: UnterminatedPolicy,
}

/// Handling of regions left open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnterminatedPolicy {
    /// Consume to end of input and emit whatever was collected as the final
    /// statement. The database reports the syntax error when it runs it.
    #[default]
    Absorb,
    /// Yield a [`SplitError`](crate::SplitError) in place of the final
    /// statement.
    Reject,
}
