//! Environment configuration
//!
//! Each deploy environment is described by a JSON file named
//! `.<environment>.s3.json` in the working directory. A missing file is
//! scaffolded blank on first use so the operator can fill in credentials
//! and run again.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Source directory written into a fresh scaffold
const DEFAULT_FROM: &str = "_site";

/// Upload concurrency when the -n flag is not given
pub const DEFAULT_CONCURRENCY: u32 = 10;

fn default_concurrency() -> u32 {
    DEFAULT_CONCURRENCY
}

/// Deploy settings for one environment
///
/// Absent fields deserialize as empty and are caught by [`Config::validate`];
/// a file is never half-loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Access key for the bucket
    #[serde(default)]
    pub access: String,

    /// Secret key for the bucket
    #[serde(default)]
    pub secret: String,

    /// Destination bucket name
    #[serde(default)]
    pub bucket: String,

    /// Local directory to upload from
    #[serde(default)]
    pub from: String,

    /// Prefix prepended to every remote key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub to: String,

    /// Bucket region; us-east-1 when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Custom endpoint URL for S3-compatible backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Upload workers. Runtime-only: the -n flag always wins, so this
    /// never round-trips through the file.
    #[serde(skip, default = "default_concurrency")]
    pub concurrency: u32,

    /// Glob patterns matched against file names; matches are not uploaded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access: String::new(),
            secret: String::new(),
            bucket: String::new(),
            from: DEFAULT_FROM.to_string(),
            to: String::new(),
            region: None,
            endpoint: None,
            concurrency: DEFAULT_CONCURRENCY,
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Check that every required field is present
    ///
    /// Fields are checked in a fixed order so the first gap is the one
    /// reported: access, secret, bucket, from.
    pub fn validate(&self) -> Result<()> {
        if self.access.is_empty() {
            return Err(Error::MissingAccessKey);
        }
        if self.secret.is_empty() {
            return Err(Error::MissingSecretKey);
        }
        if self.bucket.is_empty() {
            return Err(Error::MissingBucketName);
        }
        if self.from.is_empty() {
            return Err(Error::MissingFrom);
        }
        Ok(())
    }
}

/// Locates and reads the per-environment config file
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Resolve the config file for an environment: `.<environment>.s3.json`
    /// in the working directory
    pub fn for_environment(environment: &str) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self {
            path: cwd.join(format!(".{environment}.s3.json")),
        })
    }

    /// Use an explicit path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the configuration file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the environment's config, scaffolding a blank file on first use
    ///
    /// When the file does not exist yet, a blank config is written and
    /// `Error::ConfigCreated` is returned so the caller stops and tells the
    /// operator to fill it in. A file that exists but does not parse is
    /// `Error::ConfigInvalid` with the parse diagnostic attached.
    pub fn load_or_create(&self) -> Result<Config> {
        if !self.path.try_exists()? {
            self.write_blank()?;
            return Err(Error::ConfigCreated(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| Error::ConfigInvalid {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!("loaded environment config from {}", self.path.display());
        Ok(config)
    }

    fn write_blank(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&Config::default())?;
        std::fs::write(&self.path, content)?;

        // Credentials land in this file; keep it owner-only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, permissions)?;
        }

        Ok(())
    }
}
