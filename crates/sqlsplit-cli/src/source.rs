use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::error::CliError;

const STDIN_NAME: &str = "<stdin>";

/// A script and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    /// Reads `path`, or standard input when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self, CliError> {
        if path == Path::new("-") {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: STDIN_NAME.into(),
                    source,
                })?;
            return Ok(Self {
                name: STDIN_NAME.into(),
                text,
            });
        }

        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: name.clone(),
            source,
        })?;
        Ok(Self { name, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_the_path() {
        let err = Source::read(Path::new("definitely/not/here.sql")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(
            err.to_string().starts_with("cannot read definitely/not/here.sql: "),
            "{err}"
        );
    }

    #[test]
    fn reads_file_contents() {
        let path = std::env::temp_dir().join(format!("sqlsplit-source-{}.sql", std::process::id()));
        fs::write(&path, "SELECT 1;\n").unwrap();
        let source = Source::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(source.text, "SELECT 1;\n");
        assert_eq!(source.name, path.display().to_string());
    }
}
