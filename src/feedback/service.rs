//! Asynchronous façade over [`FeedbackStore`].
//!
//! Each call waits a fixed latency before touching the store so callers
//! observe real suspension points, the way a remote API would behave.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::config::LatencyConfig;
use crate::feedback::error::FeedbackError;
use crate::feedback::model::{FeedbackPatch, FeedbackRecord, ValidatedInput};
use crate::feedback::store::FeedbackStore;
use crate::survey::validate;

/// Operations the controller needs from a feedback backend.
///
/// [`FeedbackService`] is the in-memory implementation; tests plug in
/// doubles that fail on demand.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Snapshot of every record, in insertion order.
    async fn get_all(&self) -> Result<Vec<FeedbackRecord>, FeedbackError>;

    async fn get_by_id(&self, id: u64) -> Result<FeedbackRecord, FeedbackError>;

    /// Store a new record and return it with id, timestamp and session id set.
    async fn create(&self, input: ValidatedInput) -> Result<FeedbackRecord, FeedbackError>;

    async fn update(&self, id: u64, patch: FeedbackPatch) -> Result<FeedbackRecord, FeedbackError>;

    async fn delete(&self, id: u64) -> Result<FeedbackRecord, FeedbackError>;
}

/// Per-operation artificial delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self::from(&LatencyConfig::default())
    }
}

impl From<&LatencyConfig> for Latency {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            get_all: Duration::from_millis(config.get_all_ms),
            get_by_id: Duration::from_millis(config.get_by_id_ms),
            create: Duration::from_millis(config.create_ms),
            update: Duration::from_millis(config.update_ms),
            delete: Duration::from_millis(config.delete_ms),
        }
    }
}

/// In-memory feedback backend.
#[derive(Clone)]
pub struct FeedbackService {
    store: FeedbackStore,
    latency: Latency,
}

impl FeedbackService {
    pub fn new(store: FeedbackStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }
}

#[async_trait]
impl FeedbackApi for FeedbackService {
    async fn get_all(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        tokio::time::sleep(self.latency.get_all).await;
        let records = self.store.all();
        tracing::debug!(count = records.len(), "Loaded feedback");
        Ok(records)
    }

    async fn get_by_id(&self, id: u64) -> Result<FeedbackRecord, FeedbackError> {
        tokio::time::sleep(self.latency.get_by_id).await;
        self.store.find_by_id(id)
    }

    async fn create(&self, input: ValidatedInput) -> Result<FeedbackRecord, FeedbackError> {
        tokio::time::sleep(self.latency.create).await;
        let record = self.store.append_with(|id| FeedbackRecord {
            id,
            satisfaction: input.satisfaction(),
            ease_of_use: input.ease_of_use(),
            nps: input.nps(),
            timestamp: Utc::now(),
            session_id: new_session_id(),
        })?;
        tracing::info!(
            id = record.id,
            session_id = %record.session_id,
            "Feedback created"
        );
        Ok(record)
    }

    async fn update(&self, id: u64, patch: FeedbackPatch) -> Result<FeedbackRecord, FeedbackError> {
        tokio::time::sleep(self.latency.update).await;
        let current = self.store.find_by_id(id)?;
        let values = validate(&patch.merged_with(&current))?;
        let record = self.store.replace(id, values)?;
        tracing::info!(id, "Feedback updated");
        Ok(record)
    }

    async fn delete(&self, id: u64) -> Result<FeedbackRecord, FeedbackError> {
        tokio::time::sleep(self.latency.delete).await;
        let record = self.store.remove(id)?;
        tracing::info!(id, "Feedback deleted");
        Ok(record)
    }
}

/// `session_<unix millis>_<9 random chars>`.
pub fn new_session_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("session_{millis}_{suffix}")
}
