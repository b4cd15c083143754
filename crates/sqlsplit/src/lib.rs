//! Splits SQL scripts into individually executable statements.
//!
//! A script pasted from a file usually holds several statements separated by
//! `;`. Splitting on every `;` breaks as soon as one appears in a string, a
//! comment, a dollar-quoted function body, or a nested expression. This crate
//! tracks enough PostgreSQL lexical structure to tell those apart:
//!
//! - `'...'` strings and `"..."` identifiers, with doubled-quote escapes;
//! - `E'...'` escape strings, where a backslash escapes the next character;
//! - `-- ...` line comments and non-nesting `/* ... */` block comments;
//! - `$tag$ ... $tag$` dollar quoting (the tag may be empty);
//! - parentheses and brackets, inside which `;` does not end a statement.
//!
//! It does not validate SQL. Malformed input is split on a best-effort basis
//! and the database reports the error when the statement runs.
//!
//! ```rust
//! let script = r"
//! CREATE FUNCTION f() RETURNS int AS $$
//!   BEGIN RETURN 1; END;
//! $$ LANGUAGE plpgsql;
//! -- call it
//! SELECT f();
//! ";
//! let statements = sqlsplit::split(script);
//! assert_eq!(statements.len(), 2);
//! assert!(statements[0].ends_with("LANGUAGE plpgsql;"));
//! assert_eq!(statements[1], "-- call it\nSELECT f();");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod splitter;
mod statement;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use error::{Region, SplitError};
pub use options::{SplitterOptions, UnterminatedPolicy};
pub use splitter::Splitter;
pub use statement::Statement;

/// Splits `input` into statement texts with the default options.
///
/// Never fails: unterminated strings and comments are absorbed into the last
/// statement. Empty or whitespace-only input yields an empty list.
///
/// ```rust
/// assert_eq!(
///     sqlsplit::split("SELECT ';'; SELECT f(1;2);\n"),
///     ["SELECT ';';", "SELECT f(1;2);"]
/// );
/// assert!(sqlsplit::split(" \n\t").is_empty());
/// ```
#[must_use]
pub fn split(input: &str) -> Vec<&str> {
    Splitter::new(input).flatten().map(|stmt| stmt.text).collect()
}
