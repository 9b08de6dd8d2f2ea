//! Persistent storage
//!
//! This module handles all data persistence: the key-value backends, the
//! record stores built on top of them, and application settings.

pub mod content;
pub mod kv;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

pub use content::ContentStore;
pub use kv::{open_backend, FileStore, KeyValueStore, MemoryStore};

/// Errors raised by the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Get the application data directory
///
/// Linux: ~/.local/share/folio
/// macOS: ~/Library/Application Support/com.Folio.Folio
/// Windows: %APPDATA%\Folio\Folio\data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "Folio", "Folio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
