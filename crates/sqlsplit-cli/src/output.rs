//! Rendering of split statements.
//!
//! Text output echoes each statement followed by a blank line, the way a
//! profiling session echoes each query before running it. JSON output is one
//! array of records across all inputs.

use std::io::Write;

use serde::Serialize;
use sqlsplit::{Splitter, SplitterOptions, Statement};

use crate::{error::CliError, source::Source};

/// A statement together with the input it came from.
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    pub file: &'a str,
    /// Position of the statement within its file, from 0.
    pub index: usize,
    #[serde(flatten)]
    pub statement: Statement<'a>,
}

/// Writes the statements of `source` as text and returns how many there were.
///
/// Statements before a split error have already been written when the error is
/// returned.
pub fn write_text<W: Write>(
    out: &mut W,
    source: &Source,
    options: SplitterOptions,
    locations: bool,
) -> Result<usize, CliError> {
    let mut count = 0;
    for stmt in Splitter::with_options(&source.text, options) {
        let stmt = stmt.map_err(|err| split_error(source, err))?;
        if locations {
            writeln!(out, "-- {}:{}:{}", source.name, stmt.line, stmt.column)?;
        }
        writeln!(out, "{stmt}")?;
        writeln!(out)?;
        count += 1;
    }
    Ok(count)
}

/// Splits `source` into records. Nothing is returned for a source that fails
/// to split.
pub fn records(source: &Source, options: SplitterOptions) -> Result<Vec<Record<'_>>, CliError> {
    Splitter::with_options(&source.text, options)
        .enumerate()
        .map(|(index, stmt)| {
            Ok(Record {
                file: &source.name,
                index,
                statement: stmt.map_err(|err| split_error(source, err))?,
            })
        })
        .collect()
}

pub fn write_json<W: Write>(out: &mut W, records: &[Record<'_>]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

fn split_error(source: &Source, err: sqlsplit::SplitError) -> CliError {
    CliError::Split {
        path: source.name.clone(),
        source: err,
    }
}
