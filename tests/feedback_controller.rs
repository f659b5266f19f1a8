mod common;

use common::{record, validated, FlakyApi};
use feedback_survey::feedback::{
    Averages, FailedOperation, FeedbackApi, FeedbackController, FeedbackError, NpsSummary,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn controller(api: &Arc<FlakyApi>) -> Arc<FeedbackController> {
    let api: Arc<dyn FeedbackApi> = api.clone();
    Arc::new(FeedbackController::new(api))
}

#[tokio::test(start_paused = true)]
async fn loading_is_set_for_the_duration_of_a_load() {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], false);
    let controller = controller(&api);

    let task = tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.load_feedback().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(controller.is_loading());

    task.await.unwrap();
    let state = controller.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.feedback.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_load_sets_error_and_clears_loading() {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], true);
    let controller = controller(&api);

    controller.load_feedback().await;

    let state = controller.snapshot();
    assert!(!state.loading);
    assert!(state.feedback.is_empty());
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load feedback: backend unavailable")
    );
    assert_eq!(controller.last_failure(), Some(FailedOperation::Load));
}

#[tokio::test(start_paused = true)]
async fn initialize_loads_only_once() {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], false);
    let controller = controller(&api);

    controller.initialize().await;
    controller.initialize().await;

    assert_eq!(api.get_all_calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.snapshot().feedback.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn successful_submit_appends_locally() {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], false);
    let controller = controller(&api);
    controller.initialize().await;

    let created = controller
        .submit_feedback(validated(5, 5, 10))
        .await
        .unwrap();

    let state = controller.snapshot();
    assert_eq!(state.feedback.len(), 2);
    assert_eq!(state.feedback.last(), Some(&created));
    assert!(!state.loading);
    assert_eq!(api.store().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn failed_submit_sets_error_and_returns_it() {
    let api = FlakyApi::new(vec![], false);
    let controller = controller(&api);
    controller.initialize().await;
    api.set_failing(true);

    let err = controller
        .submit_feedback(validated(2, 2, 2))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedbackError::SubmissionFailed { .. }));
    let state = controller.snapshot();
    assert!(!state.loading);
    assert!(state.feedback.is_empty());
    assert_eq!(state.error, Some(err.to_string()));
}

#[tokio::test(start_paused = true)]
async fn a_new_request_clears_the_previous_error() {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], true);
    let controller = controller(&api);
    controller.load_feedback().await;
    assert!(controller.error().is_some());

    api.set_failing(false);
    controller.load_feedback().await;
    assert_eq!(controller.error(), None);
    assert_eq!(controller.last_failure(), None);
}

#[tokio::test(start_paused = true)]
async fn retry_reruns_the_failed_submission() {
    let api = FlakyApi::new(vec![], true);
    let controller = controller(&api);
    let err = controller.submit_feedback(validated(4, 3, 8)).await;
    assert!(err.is_err());

    api.set_failing(false);
    let retried = controller.retry().await.expect("a failure to retry");
    let created = retried.unwrap();

    assert_eq!((created.satisfaction, created.ease_of_use, created.nps), (4, 3, 8));
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 2);
    assert_eq!(controller.error(), None);
    assert!(controller.retry().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn retry_reruns_a_failed_load() {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], true);
    let controller = controller(&api);
    controller.initialize().await;

    api.set_failing(false);
    assert!(controller.retry().await.is_none());
    assert_eq!(controller.snapshot().feedback.len(), 1);
    assert_eq!(api.get_all_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn clear_error_hides_the_banner() {
    let api = FlakyApi::new(vec![], true);
    let controller = controller(&api);
    controller.load_feedback().await;
    controller.clear_error();
    assert_eq!(controller.error(), None);
    assert_eq!(controller.last_failure(), Some(FailedOperation::Load));
}

#[tokio::test(start_paused = true)]
async fn averages_and_nps_follow_local_feedback() {
    let api = FlakyApi::new(vec![record(1, 3, 4, 8), record(2, 5, 2, 6)], false);
    let controller = controller(&api);
    assert_eq!(controller.calculate_averages(), None);
    assert_eq!(controller.nps_summary(), None);

    controller.initialize().await;
    assert_eq!(
        controller.calculate_averages(),
        Some(Averages {
            satisfaction: 4.0,
            ease_of_use: 3.0,
            nps: 7.0,
        })
    );
    assert_eq!(
        controller.nps_summary(),
        Some(NpsSummary {
            promoters: 0,
            passives: 1,
            detractors: 1,
            score: -50,
        })
    );
}

#[tokio::test(start_paused = true)]
async fn discarding_a_failed_submit_leaves_nothing_to_retry() {
    let api = FlakyApi::new(vec![], true);
    let controller = controller(&api);
    let _ = controller.submit_feedback(validated(4, 3, 8)).await;
    assert!(controller.error().is_some());

    controller.discard_failed_submit();
    assert_eq!(controller.error(), None);
    assert!(controller.retry().await.is_none());
    assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn discarding_keeps_a_failed_load() {
    let api = FlakyApi::new(vec![], true);
    let controller = controller(&api);
    controller.load_feedback().await;

    controller.discard_failed_submit();
    assert!(controller.error().is_some());
    assert_eq!(controller.last_failure(), Some(FailedOperation::Load));
}
