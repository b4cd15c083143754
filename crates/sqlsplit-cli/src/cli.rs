use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use sqlsplit::{SplitterOptions, UnterminatedPolicy};

use crate::config::{LogConfig, LogFormat};

/// Statement output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Each statement verbatim, followed by a blank line.
    Text,
    /// One JSON array of statement records.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "sqlsplit",
    version,
    about = "Split SQL scripts into individually executable statements"
)]
pub struct Cli {
    /// SQL scripts to split. Standard input is read when none are given or
    /// for `-`.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Precede each statement with a `-- file:line:column` comment (text
    /// format only).
    #[arg(long)]
    pub locations: bool,

    /// Fail on strings, quoted identifiers, block comments, or dollar-quoted
    /// bodies still open at end of input.
    #[arg(long)]
    pub strict: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// The files to read, standard input (`-`) if none were named.
    pub fn inputs(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }

    pub fn splitter_options(&self) -> SplitterOptions {
        SplitterOptions {
            unterminated: if self.strict {
                UnterminatedPolicy::Reject
            } else {
                UnterminatedPolicy::Absorb
            },
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_verbosity(self.verbose, self.log_format)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;
    use tracing::Level;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["sqlsplit"]).unwrap();
        assert_eq!(cli.inputs(), vec![PathBuf::from("-")]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.locations);
        assert_eq!(cli.splitter_options(), SplitterOptions::default());
        assert_eq!(cli.log_config().level, Level::WARN);
        assert_eq!(cli.log_config().format, LogFormat::Compact);
    }

    #[test]
    fn strict_json_with_files() {
        let cli = Cli::try_parse_from([
            "sqlsplit", "--strict", "--format", "json", "a.sql", "-", "b.sql",
        ])
        .unwrap();
        assert_eq!(
            cli.inputs(),
            vec![
                PathBuf::from("a.sql"),
                PathBuf::from("-"),
                PathBuf::from("b.sql")
            ]
        );
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.splitter_options().unterminated,
            UnterminatedPolicy::Reject
        );
    }

    #[rstest]
    #[case(&["sqlsplit"], Level::WARN)]
    #[case(&["sqlsplit", "-v"], Level::INFO)]
    #[case(&["sqlsplit", "-vv"], Level::DEBUG)]
    #[case(&["sqlsplit", "-vvv"], Level::TRACE)]
    #[case(&["sqlsplit", "-v", "-v", "-v", "-v"], Level::TRACE)]
    fn verbosity_maps_to_level(#[case] args: &[&str], #[case] level: Level) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_config().level, level);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["sqlsplit", "--format", "yaml"]).is_err());
    }
}
