use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The query split into zero terms. Callers are expected to reject blank queries first.
    #[error("invalid query: no search terms")]
    InvalidQuery,

    #[error("failed to read document {id}: {source}")]
    Read {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("directory \"{}\" does not exist", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory scan failed: {0}")]
    Scan(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
