//! In-memory feedback storage.
//!
//! The store is a cloneable handle over shared state. Every clone sees the
//! same records; separately constructed stores are fully independent.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::feedback::error::FeedbackError;
use crate::feedback::model::{FeedbackPatch, FeedbackRecord, ValidatedInput};
use crate::survey::validate;

/// Thread-safe record collection in insertion order.
#[derive(Clone, Default)]
pub struct FeedbackStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    records: Vec<FeedbackRecord>,
    /// Highest id ever stored. Survives removals so ids are never reused.
    high_water: u64,
}

impl StoreInner {
    fn position(&self, id: u64) -> Result<usize, FeedbackError> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or(FeedbackError::NotFound { id })
    }

    /// Admit `record` only if its id is unused and its ratings are in bounds.
    fn push(&mut self, record: FeedbackRecord) -> Result<FeedbackRecord, FeedbackError> {
        if self.records.iter().any(|stored| stored.id == record.id) {
            return Err(FeedbackError::DuplicateId { id: record.id });
        }
        validate(&FeedbackPatch::default().merged_with(&record))?;
        self.high_water = self.high_water.max(record.id);
        self.records.push(record.clone());
        Ok(record)
    }
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`, keeping their order.
    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        let high_water = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                records,
                high_water,
            })),
        }
    }

    /// Id the next created record should receive.
    pub fn next_id(&self) -> u64 {
        self.inner.lock().high_water + 1
    }

    pub fn append(&self, record: FeedbackRecord) -> Result<FeedbackRecord, FeedbackError> {
        self.inner.lock().push(record)
    }

    /// Allocate the next id and append the record built from it, atomically.
    ///
    /// The allocated id wins over whatever id `build` put in the record.
    pub fn append_with<F>(&self, build: F) -> Result<FeedbackRecord, FeedbackError>
    where
        F: FnOnce(u64) -> FeedbackRecord,
    {
        let mut inner = self.inner.lock();
        let id = inner.high_water + 1;
        let record = FeedbackRecord { id, ..build(id) };
        inner.push(record)
    }

    pub fn find_by_id(&self, id: u64) -> Result<FeedbackRecord, FeedbackError> {
        let inner = self.inner.lock();
        let index = inner.position(id)?;
        Ok(inner.records[index].clone())
    }

    /// Overwrite the ratings of record `id`. Id, timestamp and session stay.
    pub fn replace(&self, id: u64, values: ValidatedInput) -> Result<FeedbackRecord, FeedbackError> {
        let mut inner = self.inner.lock();
        let index = inner.position(id)?;
        let record = &mut inner.records[index];
        record.satisfaction = values.satisfaction();
        record.ease_of_use = values.ease_of_use();
        record.nps = values.nps();
        Ok(record.clone())
    }

    pub fn remove(&self, id: u64) -> Result<FeedbackRecord, FeedbackError> {
        let mut inner = self.inner.lock();
        let index = inner.position(id)?;
        Ok(inner.records.remove(index))
    }

    pub fn all(&self) -> Vec<FeedbackRecord> {
        self.inner.lock().records.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
