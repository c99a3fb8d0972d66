//! All error types for the transitpack crate.
//!
//! These are returned from all fallible operations (package opening,
//! descriptor parsing, file classification, model building).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open package archive: {0}")]
    ArchiveUnreadable(#[from] zip::result::ZipError),

    #[error("package contains no project descriptor (.PRJ) entry")]
    MissingDescriptor,

    #[error("malformed descriptor line {line}: `{text}`")]
    MalformedLine { line: usize, text: String },

    #[error("unknown language code `{0}`")]
    InvalidLanguageCode(String),

    #[error("malformed file descriptor {path:?}: {message}")]
    MalformedDescriptor { path: PathBuf, message: String },

    #[error("failed to scan extracted files: {0}")]
    ExtractionScanFailed(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
