//! Storage
//!
//! A small durable key-value store abstraction, the local-storage analogue the cart, order log
//! and menu persist into. Values are opaque strings (JSON in practice).

use std::{io, path::PathBuf};

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used by this store.
    #[error("Invalid storage key `{0}`")]
    InvalidKey(String),

    /// Reading or writing the backing file failed.
    #[error("Storage IO error at {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The store refused the write, e.g. because it is full.
    #[error("Storage quota exceeded writing `{0}`")]
    QuotaExceeded(String),
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Erase `key`. Erasing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the key exists but could not be removed.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
