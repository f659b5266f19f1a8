//! Shared test utilities and backend doubles.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use feedback_survey::feedback::{
    FeedbackApi, FeedbackError, FeedbackInput, FeedbackPatch, FeedbackRecord, FeedbackService,
    FeedbackStore, Latency, ValidatedInput,
};
use feedback_survey::survey::validate;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub fn record(id: u64, satisfaction: u8, ease_of_use: u8, nps: u8) -> FeedbackRecord {
    FeedbackRecord {
        id,
        satisfaction,
        ease_of_use,
        nps,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        session_id: format!("session_test_{id}"),
    }
}

pub fn validated(satisfaction: i64, ease_of_use: i64, nps: i64) -> ValidatedInput {
    validate(&FeedbackInput {
        satisfaction,
        ease_of_use,
        nps,
    })
    .expect("test input should be in bounds")
}

/// Service with the default latencies over `records`.
pub fn service(records: Vec<FeedbackRecord>) -> FeedbackService {
    FeedbackService::new(FeedbackStore::with_records(records), Latency::default())
}

/// Service with 1ms latencies, for tests that run on real time.
pub fn fast_service(records: Vec<FeedbackRecord>) -> FeedbackService {
    let tick = Duration::from_millis(1);
    FeedbackService::new(
        FeedbackStore::with_records(records),
        Latency {
            get_all: tick,
            get_by_id: tick,
            create: tick,
            update: tick,
            delete: tick,
        },
    )
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Backend double whose calls fail while `failing` is set.
///
/// Delegates to an in-memory [`FeedbackService`] otherwise and counts calls.
pub struct FlakyApi {
    inner: FeedbackService,
    failing: Mutex<bool>,
    pub get_all_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl FlakyApi {
    pub fn new(records: Vec<FeedbackRecord>, failing: bool) -> Arc<Self> {
        Arc::new(Self {
            inner: fast_service(records),
            failing: Mutex::new(failing),
            get_all_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
        })
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock() = failing;
    }

    pub fn store(&self) -> &FeedbackStore {
        self.inner.store()
    }

    fn check(&self) -> Result<(), FeedbackError> {
        if *self.failing.lock() {
            Err(FeedbackError::LoadFailed {
                reason: "backend unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FeedbackApi for FlakyApi {
    async fn get_all(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(300)).await;
        self.check()?;
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: u64) -> Result<FeedbackRecord, FeedbackError> {
        self.check()?;
        self.inner.get_by_id(id).await
    }

    async fn create(&self, input: ValidatedInput) -> Result<FeedbackRecord, FeedbackError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(400)).await;
        if *self.failing.lock() {
            return Err(FeedbackError::SubmissionFailed {
                reason: "backend unavailable".to_string(),
            });
        }
        self.inner.create(input).await
    }

    async fn update(&self, id: u64, patch: FeedbackPatch) -> Result<FeedbackRecord, FeedbackError> {
        self.check()?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: u64) -> Result<FeedbackRecord, FeedbackError> {
        self.check()?;
        self.inner.delete(id).await
    }
}
