//! Error types for sitepush-core
//!
//! Provides a unified error type shared by the core engine, the S3
//! adapter, and the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sitepush-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sitepush-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Access key missing from the environment config
    #[error("missing access key")]
    MissingAccessKey,

    /// Secret key missing from the environment config
    #[error("missing secret key")]
    MissingSecretKey,

    /// Bucket name missing from the environment config
    #[error("missing bucket name")]
    MissingBucketName,

    /// Source directory missing from the environment config
    #[error("missing from")]
    MissingFrom,

    /// A blank config file was scaffolded for the operator to fill in
    #[error("created config file {}, fill it in and run again", .0.display())]
    ConfigCreated(PathBuf),

    /// Config file exists but is not valid JSON
    #[error("invalid config file {}: {source}", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Ignore pattern failed to compile
    #[error("bad ignore pattern \"{pattern}\": {source}")]
    BadIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single upload was rejected by the store
    #[error("upload failed: {0}")]
    Upload(String),

    /// An upload worker died without reporting back
    #[error("worker failed: {0}")]
    Worker(String),
}
