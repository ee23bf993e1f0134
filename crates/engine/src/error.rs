use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while looking up genres for films
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("Failed to access genre cache {path}: {source}")]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid genre cache: {0}")]
    CacheFormat(#[from] serde_json::Error),

    #[error("Genre lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Genre lookup failed for {title}: {reason}")]
    Lookup { title: String, reason: String },
}
