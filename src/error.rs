//! Error handling for bucket-dl.
//!
//! Every failure in this crate is fatal for the run: nothing is retried and
//! nothing is rolled back. The variants carry enough context (bucket, key or
//! local path) for the binary to print a useful report before exiting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by remote store implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can happen when listing or fetching a bucket.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration, detected before any remote call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A page of the bucket listing could not be retrieved.
    #[error("Failed to list objects in bucket \"{bucket}\"")]
    RemoteList {
        bucket: String,
        #[source]
        source: BoxError,
    },

    /// A local file or directory could not be created or written.
    #[error("Failed to write local file {path:?}")]
    LocalFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The object could not be downloaded.
    #[error("Failed to download object \"{key}\"")]
    RemoteDownload {
        key: String,
        #[source]
        source: BoxError,
    },

    /// The object key cannot be mapped to a path below the output directory.
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    /// Error from an underlying system, such as a worker task that panicked.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Build a [`Error::RemoteList`] for `bucket`.
    pub fn remote_list(bucket: &str, source: impl Into<BoxError>) -> Self {
        Error::RemoteList {
            bucket: bucket.to_string(),
            source: source.into(),
        }
    }

    /// Build a [`Error::RemoteDownload`] for `key`.
    pub fn remote_download(key: &str, source: impl Into<BoxError>) -> Self {
        Error::RemoteDownload {
            key: key.to_string(),
            source: source.into(),
        }
    }

    /// Build a [`Error::LocalFile`] for `path`.
    pub fn local_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::LocalFile {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for bucket-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
