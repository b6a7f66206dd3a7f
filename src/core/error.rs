//! Errors raised at the file boundaries (transcript, catalog, report output)
//!
//! The rules engine itself never fails; these only cover reading and writing files.

use std::path::PathBuf;

/// Failure while loading inputs or writing a report
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// A file could not be read, created or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// An enrollment sheet could not be decoded, or a CSV table could not be written
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: csv::Error,
    },
    /// The catalog file is not valid TOML or does not match the catalog schema
    #[error("Invalid catalog {}: {source}", .path.display())]
    Catalog {
        /// Catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
    /// One of the yearly enrollment sheets is missing from the transcript directory
    #[error("Missing transcript sheet: {}", .0.display())]
    MissingYear(PathBuf),
    /// Report format name not recognised
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}

impl AuditError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a CSV error with the path it happened on
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
