//! Orchestrates loading and submitting feedback and derives aggregates.
//!
//! The controller owns the observable [`FeedbackState`] the screens render
//! from. Each request is bracketed: `loading` is raised on entry and a
//! scope guard lowers it again on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::feedback::error::FeedbackError;
use crate::feedback::model::{FeedbackRecord, Field, NpsCategory, ValidatedInput};
use crate::feedback::service::FeedbackApi;

/// Snapshot of what the controller knows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackState {
    pub feedback: Vec<FeedbackRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Mean of each rating, rounded half-up to one decimal for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub satisfaction: f64,
    pub ease_of_use: f64,
    pub nps: f64,
}

/// Promoter/passive/detractor breakdown with the resulting score (-100..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NpsSummary {
    pub promoters: usize,
    pub passives: usize,
    pub detractors: usize,
    pub score: i32,
}

/// The operation a retry re-invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedOperation {
    Load,
    Submit(ValidatedInput),
}

pub struct FeedbackController {
    api: Arc<dyn FeedbackApi>,
    state: Mutex<FeedbackState>,
    last_failure: Mutex<Option<FailedOperation>>,
    initialized: AtomicBool,
}

impl FeedbackController {
    pub fn new(api: Arc<dyn FeedbackApi>) -> Self {
        Self {
            api,
            state: Mutex::new(FeedbackState::default()),
            last_failure: Mutex::new(None),
            initialized: AtomicBool::new(false),
        }
    }

    /// Run the initial load. Later calls are no-ops.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }
        self.load_feedback().await;
    }

    pub fn snapshot(&self) -> FeedbackState {
        self.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    pub fn clear_error(&self) {
        self.state.lock().error = None;
    }

    pub fn last_failure(&self) -> Option<FailedOperation> {
        *self.last_failure.lock()
    }

    /// Forget a failed submission, and its error, so `retry` cannot replay it.
    /// A failed load is left alone.
    pub fn discard_failed_submit(&self) {
        let mut last_failure = self.last_failure.lock();
        if matches!(*last_failure, Some(FailedOperation::Submit(_))) {
            *last_failure = None;
            self.state.lock().error = None;
        }
    }

    /// Replace local feedback with the backend's records.
    ///
    /// Failures land in `error`; they are not returned.
    pub async fn load_feedback(&self) {
        self.begin_request();
        let _loading = scopeguard::guard((), |_| self.state.lock().loading = false);

        match self.api.get_all().await {
            Ok(records) => {
                tracing::debug!(count = records.len(), "Feedback loaded");
                self.state.lock().feedback = records;
                self.last_failure.lock().take();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Loading feedback failed");
                self.state.lock().error = Some(err.to_string());
                *self.last_failure.lock() = Some(FailedOperation::Load);
            }
        }
    }

    /// Create a record and append it to local feedback.
    ///
    /// On failure `error` is set and the error is returned to the caller.
    pub async fn submit_feedback(
        &self,
        input: ValidatedInput,
    ) -> Result<FeedbackRecord, FeedbackError> {
        self.begin_request();
        let _loading = scopeguard::guard((), |_| self.state.lock().loading = false);

        match self.api.create(input).await {
            Ok(record) => {
                self.state.lock().feedback.push(record.clone());
                self.last_failure.lock().take();
                Ok(record)
            }
            Err(err) => {
                let err = match err {
                    FeedbackError::SubmissionFailed { .. } => err,
                    other => FeedbackError::SubmissionFailed {
                        reason: other.to_string(),
                    },
                };
                tracing::warn!(error = %err, "Submitting feedback failed");
                self.state.lock().error = Some(err.to_string());
                *self.last_failure.lock() = Some(FailedOperation::Submit(input));
                Err(err)
            }
        }
    }

    /// Re-run the most recent failed operation, if any.
    ///
    /// Returns the created record when a submission was retried successfully.
    pub async fn retry(&self) -> Option<Result<FeedbackRecord, FeedbackError>> {
        let failed = self.last_failure.lock().take()?;
        tracing::info!(operation = ?failed, "Retrying feedback operation");
        match failed {
            FailedOperation::Load => {
                self.load_feedback().await;
                None
            }
            FailedOperation::Submit(input) => Some(self.submit_feedback(input).await),
        }
    }

    pub fn calculate_averages(&self) -> Option<Averages> {
        averages(&self.state.lock().feedback)
    }

    pub fn nps_summary(&self) -> Option<NpsSummary> {
        nps_summary(&self.state.lock().feedback)
    }

    fn begin_request(&self) {
        let mut state = self.state.lock();
        state.loading = true;
        state.error = None;
    }
}

/// Per-field means of `records`, `None` when there are none.
pub fn averages(records: &[FeedbackRecord]) -> Option<Averages> {
    if records.is_empty() {
        return None;
    }
    let count = records.len() as u64;
    let mean = |field: Field| {
        let sum: u64 = records.iter().map(|r| u64::from(r.rating(field))).sum();
        // round(sum * 10 / count) half-up, in integers
        let tenths = (20 * sum + count) / (2 * count);
        tenths as f64 / 10.0
    };
    Some(Averages {
        satisfaction: mean(Field::Satisfaction),
        ease_of_use: mean(Field::EaseOfUse),
        nps: mean(Field::Nps),
    })
}

pub fn nps_summary(records: &[FeedbackRecord]) -> Option<NpsSummary> {
    if records.is_empty() {
        return None;
    }
    let mut summary = NpsSummary {
        promoters: 0,
        passives: 0,
        detractors: 0,
        score: 0,
    };
    for record in records {
        match record.nps_category() {
            NpsCategory::Promoter => summary.promoters += 1,
            NpsCategory::Passive => summary.passives += 1,
            NpsCategory::Detractor => summary.detractors += 1,
        }
    }
    let spread = summary.promoters as f64 - summary.detractors as f64;
    summary.score = (spread * 100.0 / records.len() as f64).round() as i32;
    Some(summary)
}
