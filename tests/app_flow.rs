mod common;

use common::{record, FlakyApi};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedback_survey::config::SurveyConfig;
use feedback_survey::feedback::{FeedbackApi, FeedbackController, Field};
use feedback_survey::ui::app::{App, SUBMIT_FAILURE, SUBMIT_SUCCESS};
use feedback_survey::ui::events::AppEvent;
use feedback_survey::ui::flow::{Screen, ScreenKind};
use feedback_survey::ui::toast::ToastKind;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

struct Harness {
    app: App,
    rx: Receiver<AppEvent>,
    api: Arc<FlakyApi>,
    controller: Arc<FeedbackController>,
}

fn harness(failing: bool) -> Harness {
    let api = FlakyApi::new(vec![record(1, 4, 5, 9)], failing);
    let dyn_api: Arc<dyn FeedbackApi> = api.clone();
    let controller = Arc::new(FeedbackController::new(dyn_api));
    let (tx, rx) = mpsc::channel();
    let app = App::new(
        Arc::clone(&controller),
        Handle::current(),
        tx,
        SurveyConfig::default(),
    );
    Harness {
        app,
        rx,
        api,
        controller,
    }
}

impl Harness {
    fn press(&mut self, code: KeyCode) {
        self.app
            .handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Let spawned work run for `duration`, then feed every queued event to the app.
    async fn settle(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
        while let Ok(event) = self.rx.try_recv() {
            self.app.handle_event(event);
        }
    }

    fn kind(&self) -> ScreenKind {
        self.app.screen().kind()
    }
}

#[tokio::test(start_paused = true)]
async fn initialize_loads_feedback_in_the_background() {
    let mut h = harness(false);
    h.app.initialize();
    h.settle(Duration::from_millis(10)).await;
    assert!(h.app.is_loading());

    h.settle(Duration::from_millis(400)).await;
    assert!(!h.app.is_loading());
    assert_eq!(h.app.feedback().feedback.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn full_survey_round_trip() {
    let mut h = harness(false);
    h.app.initialize();
    h.settle(Duration::from_millis(400)).await;

    h.press(KeyCode::Enter);
    assert_eq!(h.kind(), ScreenKind::Form);

    h.press(KeyCode::Right);
    h.press(KeyCode::Right);
    h.press(KeyCode::Down);
    h.press(KeyCode::Left);
    h.press(KeyCode::Down);
    h.press(KeyCode::Char('9'));
    h.press(KeyCode::Enter);

    match h.app.screen() {
        Screen::Form(form) => assert!(form.state().submitting),
        other => panic!("expected form, got {other:?}"),
    }

    h.settle(Duration::from_millis(500)).await;
    let Screen::ThankYou(screen) = h.app.screen() else {
        panic!("expected thank-you screen");
    };
    let record = screen.record();
    assert_eq!(record.rating(Field::Satisfaction), 5);
    assert_eq!(record.rating(Field::EaseOfUse), 2);
    assert_eq!(record.rating(Field::Nps), 9);
    assert_eq!(screen.remaining(), 5);
    assert_eq!(h.app.feedback().feedback.len(), 2);

    let toasts: Vec<_> = h.app.toasts().iter().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, SUBMIT_SUCCESS);
}

#[tokio::test(start_paused = true)]
async fn thank_you_counts_down_to_welcome() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.settle(Duration::from_millis(500)).await;
    assert_eq!(h.kind(), ScreenKind::ThankYou);

    // Ticks land one second after the screen opened; sample between them.
    h.settle(Duration::from_millis(100)).await;
    for expected in [4, 3, 2, 1] {
        h.settle(Duration::from_secs(1)).await;
        match h.app.screen() {
            Screen::ThankYou(screen) => assert_eq!(screen.remaining(), expected),
            other => panic!("expected thank-you screen, got {other:?}"),
        }
    }

    h.settle(Duration::from_secs(1)).await;
    assert_eq!(h.kind(), ScreenKind::Welcome);

    h.settle(Duration::from_secs(3)).await;
    assert_eq!(h.kind(), ScreenKind::Welcome);
}

#[tokio::test(start_paused = true)]
async fn leaving_thank_you_early_stops_the_countdown() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.settle(Duration::from_millis(500)).await;
    h.settle(Duration::from_millis(2200)).await;

    h.press(KeyCode::Enter);
    assert_eq!(h.kind(), ScreenKind::Welcome);

    h.press(KeyCode::Enter);
    h.settle(Duration::from_secs(10)).await;
    assert_eq!(h.kind(), ScreenKind::Form);
}

#[tokio::test(start_paused = true)]
async fn invalid_answers_block_submission() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char('0'));
    h.press(KeyCode::Enter);

    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    assert!(!form.state().submitting);
    assert_eq!(
        form.state().error(Field::Satisfaction),
        Some("Please select a value between 1 and 5")
    );

    h.settle(Duration::from_secs(1)).await;
    assert_eq!(h.api.create_calls.load(std::sync::atomic::Ordering::SeqCst), 0);

    h.press(KeyCode::Char('4'));
    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    assert_eq!(form.state().error(Field::Satisfaction), None);
}

#[tokio::test(start_paused = true)]
async fn failed_submission_stays_on_form_and_can_be_retried() {
    let mut h = harness(true);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.settle(Duration::from_millis(500)).await;

    assert_eq!(h.kind(), ScreenKind::Form);
    assert!(h.app.error().is_some());
    let toast = h.app.toasts().iter().last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, SUBMIT_FAILURE);
    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    assert!(!form.state().submitting);

    h.api.set_failing(false);
    h.press(KeyCode::Char('r'));
    h.settle(Duration::from_millis(500)).await;

    assert_eq!(h.kind(), ScreenKind::ThankYou);
    assert_eq!(h.controller.error(), None);
    assert_eq!(h.app.feedback().feedback.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn result_for_an_abandoned_form_is_ignored() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Esc);
    assert_eq!(h.kind(), ScreenKind::Welcome);

    h.press(KeyCode::Enter);
    h.settle(Duration::from_millis(500)).await;
    assert_eq!(h.kind(), ScreenKind::Form);
    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    assert!(!form.state().submitting);
}

#[tokio::test(start_paused = true)]
async fn back_discards_answers() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Right);
    h.press(KeyCode::Esc);
    h.press(KeyCode::Enter);

    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    assert_eq!(form.state().values.satisfaction, 3);
}

#[tokio::test(start_paused = true)]
async fn toasts_expire() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.settle(Duration::from_millis(500)).await;
    assert!(!h.app.toasts().is_empty());

    h.app.on_tick(std::time::Instant::now() + Duration::from_secs(4));
    assert!(h.app.toasts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn ctrl_q_quits_from_any_screen() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.app.handle_event(AppEvent::Key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::CONTROL,
    )));
    assert!(h.app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn failure_of_an_abandoned_form_cannot_be_retried() {
    let mut h = harness(true);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Esc);
    h.settle(Duration::from_millis(500)).await;

    assert_eq!(h.kind(), ScreenKind::Welcome);
    assert_eq!(h.app.error(), None);
    assert_eq!(h.controller.last_failure(), None);
    assert_eq!(h.api.store().len(), 1);

    h.api.set_failing(false);
    h.press(KeyCode::Char('r'));
    h.app.retry();
    h.settle(Duration::from_millis(500)).await;

    assert_eq!(h.kind(), ScreenKind::Welcome);
    assert_eq!(h.api.store().len(), 1);
    assert_eq!(h.api.create_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn leaving_a_failed_form_drops_its_retry() {
    let mut h = harness(true);
    h.press(KeyCode::Enter);
    h.press(KeyCode::Right);
    h.press(KeyCode::Enter);
    h.settle(Duration::from_millis(500)).await;
    assert!(h.app.error().is_some());

    // Dismiss the banner, leave, and start a fresh form.
    h.press(KeyCode::Esc);
    h.press(KeyCode::Esc);
    h.press(KeyCode::Enter);
    assert_eq!(h.controller.last_failure(), None);

    h.api.set_failing(false);
    h.app.retry();
    h.settle(Duration::from_millis(500)).await;

    let Screen::Form(form) = h.app.screen() else {
        panic!("expected the new form to stay open");
    };
    assert!(!form.state().submitting);
    assert_eq!(form.state().values.satisfaction, 3);
    assert_eq!(h.api.store().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn skipped_retry_unfreezes_the_form_without_an_error() {
    let mut h = harness(false);
    h.press(KeyCode::Enter);
    h.app.dispatch_form(feedback_survey::ui::form::FormIntent::SubmitStarted);
    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    let session = form.session();

    h.app.handle_event(AppEvent::RetrySkipped { session });

    let Screen::Form(form) = h.app.screen() else {
        panic!("expected form");
    };
    assert!(!form.state().submitting);
    assert_eq!(h.app.error(), None);
    assert!(h.app.toasts().is_empty());
}
