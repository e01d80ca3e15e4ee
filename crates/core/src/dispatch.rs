//! Upload dispatcher
//!
//! Walks the source tree and pushes every file that no ignore pattern
//! matches through a bounded pool of upload workers. The walk advances
//! only when a worker slot is free, so huge trees never pile up in
//! memory, and a failed upload is recorded in the summary instead of
//! stopping the run.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ignore::is_ignored;
use crate::key::remote_key;
use crate::traits::{ObjectStore, UploadTask};

/// One upload that did not go through
#[derive(Debug, Clone, Serialize)]
pub struct UploadFailure {
    /// Local path of the file
    pub path: String,

    /// What the store reported
    pub error: String,
}

/// Outcome of one deploy run
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    /// Files uploaded successfully
    pub uploaded: u64,

    /// Files skipped by an ignore pattern
    pub skipped: u64,

    /// Total bytes shipped
    pub bytes: u64,

    /// Failed uploads with their causes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<UploadFailure>,
}

/// Lazy depth-first traversal of a directory tree
///
/// Yields files only. Directories are descended into but never yielded,
/// so they are never ignore-checked and never uploaded.
struct Walker {
    stack: Vec<ReadDir>,
}

impl Walker {
    fn new(root: &Path) -> Result<Self> {
        Ok(Self {
            stack: vec![fs::read_dir(root)?],
        })
    }
}

impl Iterator for Walker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.stack.last_mut()?.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => return Some(Err(e.into())),
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => return Some(Err(e.into())),
            };

            if file_type.is_dir() {
                match fs::read_dir(entry.path()) {
                    Ok(dir) => self.stack.push(dir),
                    Err(e) => return Some(Err(e.into())),
                }
                continue;
            }

            return Some(Ok(entry.path()));
        }
    }
}

/// Upload the configured source tree to the store
///
/// At most `config.concurrency` uploads are in flight at once (a value of
/// 0 is clamped to 1). Walk-phase errors such as an unreadable directory
/// or a malformed ignore pattern abort the run, while a rejected upload
/// only lands in `Summary::failed`. `on_uploaded` fires for each
/// successful upload in completion order.
pub async fn run<F>(
    store: Arc<dyn ObjectStore>,
    config: &Config,
    mut on_uploaded: F,
) -> Result<Summary>
where
    F: FnMut(&UploadTask),
{
    let limit = (config.concurrency as usize).max(1);
    let root = Path::new(&config.from);

    let mut walker = Walker::new(root)?;
    let mut pool: JoinSet<(UploadTask, Result<()>)> = JoinSet::new();
    let mut summary = Summary::default();
    let mut exhausted = false;

    loop {
        while !exhausted && pool.len() < limit {
            match walker.next() {
                Some(Ok(path)) => {
                    if is_ignored(&config.ignores, &path)? {
                        summary.skipped += 1;
                        continue;
                    }

                    let relative = path.strip_prefix(root).unwrap_or(&path);
                    let relative = relative.to_string_lossy().replace('\\', "/");
                    let key = remote_key(&relative, &config.from, &config.to);

                    let task = UploadTask::for_file(path, key)?;
                    tracing::debug!("queued {} as {}", task.path.display(), task.key);

                    let store = Arc::clone(&store);
                    pool.spawn(async move {
                        let outcome = store.put_object(&task).await;
                        (task, outcome)
                    });
                }
                Some(Err(e)) => return Err(e),
                None => exhausted = true,
            }
        }

        match pool.join_next().await {
            Some(Ok((task, Ok(())))) => {
                summary.uploaded += 1;
                summary.bytes += task.size;
                on_uploaded(&task);
            }
            Some(Ok((task, Err(e)))) => {
                tracing::warn!("upload failed for {}: {e}", task.path.display());
                summary.failed.push(UploadFailure {
                    path: task.path.display().to_string(),
                    error: e.to_string(),
                });
            }
            Some(Err(e)) => return Err(Error::Worker(e.to_string())),
            None => break,
        }
    }

    Ok(summary)
}
