pub mod config;
pub use config::{Config, DisplayConfig, PlotConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FpkmLensError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("File '{0}' not found. Please check the file name or path.")]
    InputNotFound(String),
    // source left out of the message: `{:#}` chains print it
    #[error("Cannot read '{path}'")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed CSV in '{path}'")]
    InputMalformed {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("'{path}' line {line}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Column '{0}' not found in table")]
    MissingColumn(String),
    #[error("Column '{column}' row {row}: '{value}' is not numeric")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Plot error: {0}")]
    Plot(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FpkmLensError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(e: &(dyn std::error::Error + 'static)) -> Vec<String> {
        let mut out = vec![e.to_string()];
        let mut cur = e.source();
        while let Some(s) = cur {
            out.push(s.to_string());
            cur = s.source();
        }
        out
    }

    #[test]
    fn unreadable_names_path_once_and_cause_once() {
        let e = FpkmLensError::InputUnreadable {
            path: "adir".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "Is a directory"),
        };
        assert_eq!(chain(&e), vec!["Cannot read 'adir'", "Is a directory"]);
    }

    #[test]
    fn io_is_transparent() {
        let e = FpkmLensError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(chain(&e), vec!["disk full"]);
    }
}
