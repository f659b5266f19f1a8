//! Feedback records, their in-memory store and the async service over it.

pub mod controller;
pub mod error;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use controller::{Averages, FailedOperation, FeedbackController, FeedbackState, NpsSummary};
pub use error::{FeedbackError, ValidationFailed};
pub use model::{
    rating_label, FeedbackInput, FeedbackPatch, FeedbackRecord, Field, NpsCategory, ValidatedInput,
};
pub use seed::SeedError;
pub use service::{FeedbackApi, FeedbackService, Latency};
pub use store::FeedbackStore;
