//! File-based Blob Store Adapter
//!
//! Stores each blob as one file under a base directory, named after its
//! key. Survives process restarts, which is what keeps a respondent's
//! submission across sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{BlobStore, BlobStoreError};

/// File-backed blob storage
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    base_path: PathBuf,
}

impl FileBlobStore {
    /// Create a new file store rooted at a base directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        // Keys are well-known slugs; the .json suffix keeps the files
        // recognizable when inspecting the data directory.
        self.base_path.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobStoreError> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobStoreError::Io(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobStoreError> {
        fs::create_dir_all(&self.base_path).map_err(|e| BlobStoreError::Io(e.to_string()))?;
        fs::write(self.blob_path(key), value).map_err(|e| BlobStoreError::Io(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), BlobStoreError> {
        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BlobStoreError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_returns_none_for_absent_key() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path());

        store.set("survey-responses", "[{\"a\":1}]").unwrap();
        assert_eq!(
            store.get("survey-responses").unwrap().as_deref(),
            Some("[{\"a\":1}]")
        );
    }

    #[test]
    fn set_creates_base_directory_lazily() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("blobs");
        let store = FileBlobStore::new(&nested);

        store.set("key", "value").unwrap();
        assert!(nested.join("key.json").exists());
    }

    #[test]
    fn set_overwrites_existing_blob() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path());

        store.set("key", "one").unwrap();
        store.set("key", "two").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn delete_removes_blob_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path());

        store.set("key", "value").unwrap();
        store.delete("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);

        store.delete("key").unwrap();
    }

    #[test]
    fn store_survives_reopening() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileBlobStore::new(dir.path());
            store.set("key", "persisted").unwrap();
        }
        let reopened = FileBlobStore::new(dir.path());
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("persisted"));
    }
}
