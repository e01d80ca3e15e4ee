//! ObjectStore trait definition
//!
//! This trait defines the single storage operation the dispatcher needs.
//! It allows the deploy engine to be decoupled from the specific S3 SDK
//! implementation.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

/// A single file queued for upload
#[derive(Debug, Clone)]
pub struct UploadTask {
    /// Local file to read
    pub path: PathBuf,

    /// Full object key at the destination
    pub key: String,

    /// File length in bytes, captured when the task is built
    pub size: u64,

    /// Guessed MIME type, if the extension maps to one
    pub content_type: Option<String>,
}

impl UploadTask {
    /// Build a task for a local file, capturing its length and MIME type
    pub fn for_file(path: PathBuf, key: String) -> Result<Self> {
        let size = std::fs::metadata(&path)?.len();
        let content_type = mime_guess::from_path(&path)
            .first()
            .map(|m| m.essence_str().to_string());

        Ok(Self {
            path,
            key,
            size,
            content_type,
        })
    }
}

/// Trait for the upload destination
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store one file under its computed key
    async fn put_object(&self, task: &UploadTask) -> Result<()>;
}
