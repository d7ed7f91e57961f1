//! Response Store - JSON persistence of the local submission.
//!
//! Serializes the respondent's submitted responses as one JSON blob under
//! a well-known key. Loading tolerates absence and parse failures by
//! falling back to the empty list: a corrupt blob must never block the
//! application from starting.

use std::sync::Arc;

use tracing::warn;

use crate::domain::survey::Response;
use crate::ports::{BlobStore, BlobStoreError};

/// Well-known key the submission blob is stored under.
pub const RESPONSES_KEY: &str = "survey-responses";

/// Persists the respondent's submission through the blob store port.
#[derive(Clone)]
pub struct ResponseStore {
    store: Arc<dyn BlobStore>,
    key: String,
}

impl ResponseStore {
    /// Create a store using the default well-known key
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self::with_key(store, RESPONSES_KEY)
    }

    /// Create a store using a custom key
    pub fn with_key(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the previously persisted submission.
    ///
    /// Absence, storage failure, and malformed JSON all yield the empty
    /// list; the latter two are logged, not surfaced.
    pub fn load(&self) -> Vec<Response> {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read persisted responses");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(responses) => responses,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed persisted responses");
                Vec::new()
            }
        }
    }

    /// Persist a completed submission, replacing any previous one.
    pub fn save(&self, responses: &[Response]) -> Result<(), BlobStoreError> {
        let blob = serde_json::to_string(responses)
            .map_err(|e| BlobStoreError::Io(format!("serialize responses: {}", e)))?;
        self.store.set(&self.key, &blob)
    }

    /// Delete the persisted submission.
    pub fn clear(&self) -> Result<(), BlobStoreError> {
        self.store.delete(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryBlobStore;
    use crate::domain::foundation::{LikertScore, QuestionId, Timestamp};

    fn response(question_id: &str, score: u8) -> Response {
        Response::new(
            QuestionId::new(question_id),
            LikertScore::try_from_u8(score).unwrap(),
            Timestamp::from_unix_secs(1_705_309_200),
        )
    }

    #[test]
    fn load_returns_empty_when_nothing_persisted() {
        let store = ResponseStore::new(Arc::new(InMemoryBlobStore::new()));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = ResponseStore::new(Arc::new(InMemoryBlobStore::new()));
        let responses = vec![response("q1", 4), response("q2", 1)];

        store.save(&responses).unwrap();
        assert_eq!(store.load(), responses);
    }

    #[test]
    fn load_tolerates_malformed_blob() {
        let blobs = Arc::new(InMemoryBlobStore::new());
        blobs.set(RESPONSES_KEY, "not json at all {").unwrap();

        let store = ResponseStore::new(blobs);
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_tolerates_out_of_range_scores() {
        let blobs = Arc::new(InMemoryBlobStore::new());
        let blob = r#"[{"question_id":"q1","score":6,"timestamp":"2024-01-15T09:00:00Z"}]"#;
        blobs.set(RESPONSES_KEY, blob).unwrap();

        let store = ResponseStore::new(blobs);
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_deletes_the_blob() {
        let blobs = Arc::new(InMemoryBlobStore::new());
        let store = ResponseStore::new(blobs.clone());

        store.save(&[response("q1", 5)]).unwrap();
        store.clear().unwrap();
        assert_eq!(blobs.get(RESPONSES_KEY).unwrap(), None);
        assert!(store.load().is_empty());
    }

    #[test]
    fn custom_key_is_respected() {
        let blobs = Arc::new(InMemoryBlobStore::new());
        let store = ResponseStore::with_key(blobs.clone(), "pilot-responses");

        store.save(&[response("q1", 3)]).unwrap();
        assert!(blobs.get("pilot-responses").unwrap().is_some());
        assert_eq!(blobs.get(RESPONSES_KEY).unwrap(), None);
    }
}
