//! sitepush-core: Core library for the sitepush deploy tool
//!
//! This crate provides the core functionality for sitepush, including:
//! - Per-environment configuration files
//! - Ignore pattern matching and remote key derivation
//! - The bounded upload dispatcher
//! - ObjectStore trait for the storage backend
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod ignore;
pub mod key;
pub mod traits;

pub use config::{Config, ConfigFile, DEFAULT_CONCURRENCY};
pub use dispatch::{Summary, UploadFailure};
pub use error::{Error, Result};
pub use ignore::is_ignored;
pub use key::remote_key;
pub use traits::{ObjectStore, UploadTask};
