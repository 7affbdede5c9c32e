//! Persistence collaborator for submission records

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::submission::{ContextId, Submission, SubmissionId};

/// The trait that submission storage backends implement.
pub trait SubmissionStore: Send + Sync {
    /// Insert a new record. Assigns and returns its id.
    fn insert(&self, submission: Submission) -> Result<SubmissionId, StoreError>;

    /// Get a record by id.
    fn get(&self, id: SubmissionId) -> Result<Option<Submission>, StoreError>;

    /// Replace a stored record with the given state.
    fn update(&self, submission: &Submission) -> Result<(), StoreError>;

    /// Delete a record by id.
    fn delete(&self, id: SubmissionId) -> Result<(), StoreError>;

    /// Persist a single public identifier without rewriting the whole record.
    fn set_stored_pub_id(
        &self,
        id: SubmissionId,
        pub_id_type: &str,
        pub_id: &str,
    ) -> Result<(), StoreError>;

    /// All records owned by a publishing context, in id order.
    fn by_context(&self, context_id: ContextId) -> Result<Vec<Submission>, StoreError>;
}

/// Errors from the submission store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Submission not found: {0}")]
    NotFound(SubmissionId),

    #[error("Submission already exists: {0}")]
    AlreadyExists(SubmissionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Store backed by an in-process map.
///
/// Ids come from a counter that only moves forward, so a deleted record's id
/// is never handed out again.
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    records: RwLock<BTreeMap<SubmissionId, Submission>>,
    last_id: AtomicI64,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export every record as a JSON array
    pub fn to_json(&self) -> Result<String, StoreError> {
        let records = self.read()?;
        let all: Vec<&Submission> = records.values().collect();
        serde_json::to_string_pretty(&all).map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<SubmissionId, Submission>>, StoreError>
    {
        self.records
            .read()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<SubmissionId, Submission>>, StoreError>
    {
        self.records
            .write()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    fn insert(&self, mut submission: Submission) -> Result<SubmissionId, StoreError> {
        let mut records = self.write()?;
        if submission.id != 0 {
            return Err(StoreError::AlreadyExists(submission.id));
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        submission.id = id;
        records.insert(id, submission);
        tracing::debug!(submission_id = id, "inserted submission");
        Ok(id)
    }

    fn get(&self, id: SubmissionId) -> Result<Option<Submission>, StoreError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn update(&self, submission: &Submission) -> Result<(), StoreError> {
        let mut records = self.write()?;
        match records.get_mut(&submission.id) {
            Some(stored) => {
                *stored = submission.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(submission.id)),
        }
    }

    fn delete(&self, id: SubmissionId) -> Result<(), StoreError> {
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn set_stored_pub_id(
        &self,
        id: SubmissionId,
        pub_id_type: &str,
        pub_id: &str,
    ) -> Result<(), StoreError> {
        let mut records = self.write()?;
        let stored = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        stored.set_stored_pub_id(pub_id_type, pub_id);
        tracing::debug!(submission_id = id, pub_id_type, pub_id, "stored public identifier");
        Ok(())
    }

    fn by_context(&self, context_id: ContextId) -> Result<Vec<Submission>, StoreError> {
        Ok(self
            .read()?
            .values()
            .filter(|s| s.context_id == context_id)
            .cloned()
            .collect())
    }
}
