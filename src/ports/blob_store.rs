//! Blob Store Port - Narrow key-value interface for persisted state.
//!
//! The application persists the respondent's submission as a single blob
//! under a well-known key. The core depends only on this interface, never
//! on a concrete storage mechanism. All operations are synchronous: the
//! application is single-process and single-threaded by design.

use thiserror::Error;

/// Errors that can occur during blob store operations
#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for storing and retrieving string blobs by key.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(None)` from `get` for an absent key, never an error
/// - Overwrite on `set` without complaint
/// - Treat `delete` of an absent key as success
pub trait BlobStore: Send + Sync {
    /// Load the blob stored under `key`, if any.
    ///
    /// # Errors
    /// Returns `BlobStoreError` only for genuine storage failures, never
    /// for a missing key.
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError>;

    /// Store `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    /// Returns `BlobStoreError` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError>;

    /// Remove the blob stored under `key`, if present.
    ///
    /// # Errors
    /// Returns `BlobStoreError` if the removal fails.
    fn delete(&self, key: &str) -> Result<(), BlobStoreError>;
}
