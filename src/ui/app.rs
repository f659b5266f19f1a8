use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::config::SurveyConfig;
use crate::feedback::{
    Averages, FailedOperation, FeedbackController, FeedbackError, FeedbackRecord, FeedbackState,
    Field,
};
use crate::survey::validate;
use crate::ui::events::AppEvent;
use crate::ui::flow::{CountdownTask, Screen};
use crate::ui::form::FormIntent;
use crate::ui::input::handle_key;
use crate::ui::toast::{ToastKind, Toasts};

pub const SUBMIT_SUCCESS: &str = "Feedback submitted successfully! Thank you for your input.";
pub const SUBMIT_FAILURE: &str = "Failed to submit feedback. Please try again.";

/// Screen flow plus the glue between key presses, the controller and timers.
///
/// Service calls run on the tokio runtime; their results come back as
/// [`AppEvent`]s on the same channel as key presses, so all state changes
/// happen on the UI thread.
pub struct App {
    should_quit: bool,
    screen: Screen,
    controller: Arc<FeedbackController>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    settings: SurveyConfig,
    toasts: Toasts,
    next_generation: u64,
    /// Form session whose submission last failed; only that form may retry it.
    failed_session: Option<u64>,
}

impl App {
    pub fn new(
        controller: Arc<FeedbackController>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
        settings: SurveyConfig,
    ) -> Self {
        let toasts = Toasts::new(Duration::from_secs(settings.toast_seconds));
        Self {
            should_quit: false,
            screen: Screen::default(),
            controller,
            runtime,
            events,
            settings,
            toasts,
            next_generation: 0,
            failed_session: None,
        }
    }

    /// Kick off the controller's one-time initial load.
    pub fn initialize(&self) {
        let controller = Arc::clone(&self.controller);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            controller.initialize().await;
            let _ = events.send(AppEvent::FeedbackLoaded);
        });
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn feedback(&self) -> FeedbackState {
        self.controller.snapshot()
    }

    pub fn averages(&self) -> Option<Averages> {
        self.controller.calculate_averages()
    }

    pub fn error(&self) -> Option<String> {
        self.controller.error()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn focused_field(&self) -> Option<Field> {
        match &self.screen {
            Screen::Form(form) => Some(form.state().focused_field()),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick => self.on_tick(Instant::now()),
            AppEvent::Resize(..) | AppEvent::FeedbackLoaded => {}
            AppEvent::SubmitFinished { session, result } => {
                self.on_submit_finished(session, result)
            }
            AppEvent::RetrySkipped { session } => self.on_retry_skipped(session),
            AppEvent::CountdownTick { generation } => self.on_countdown_tick(generation),
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    /// Welcome → Form.
    pub fn start_survey(&mut self) {
        let session = self.bump_generation();
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::Welcome(welcome) => {
                tracing::debug!(session, "Survey started");
                welcome.start(session).into()
            }
            other => other,
        };
    }

    /// Form → Welcome. The answers go with the form: a failed submission is
    /// forgotten now and one still in flight is ignored when it lands.
    pub fn back_to_welcome(&mut self) {
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::Form(form) => {
                if self.failed_session.take() == Some(form.session()) {
                    self.controller.discard_failed_submit();
                }
                form.back().into()
            }
            other => other,
        };
    }

    /// ThankYou → Welcome.
    pub fn reset(&mut self) {
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::ThankYou(thank_you) => thank_you.reset().into(),
            other => other,
        };
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        if let Screen::Form(form) = &mut self.screen {
            form.dispatch(intent);
        }
    }

    /// Validate the form and, if every answer is in bounds, send it.
    pub fn submit(&mut self) {
        let Screen::Form(form) = &mut self.screen else {
            return;
        };
        if form.state().submitting {
            return;
        }

        let input = match validate(&form.state().values) {
            Ok(input) => input,
            Err(failed) => {
                tracing::debug!(%failed, "Submission blocked by validation");
                form.dispatch(FormIntent::Rejected(failed));
                return;
            }
        };

        form.dispatch(FormIntent::SubmitStarted);
        let session = form.session();
        let controller = Arc::clone(&self.controller);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = controller.submit_feedback(input).await;
            let _ = events.send(AppEvent::SubmitFinished { session, result });
        });
    }

    pub fn on_submit_finished(
        &mut self,
        session: u64,
        result: Result<FeedbackRecord, FeedbackError>,
    ) {
        let now = Instant::now();
        match std::mem::take(&mut self.screen) {
            Screen::Form(mut form) if form.session() == session => match result {
                Ok(record) => {
                    self.failed_session = None;
                    self.toasts.push(ToastKind::Success, SUBMIT_SUCCESS, now);
                    let mut thank_you = form.submitted(record, self.settings.countdown_seconds);
                    thank_you.attach_ticker(self.spawn_countdown());
                    self.screen = thank_you.into();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Submission failed");
                    self.failed_session = Some(session);
                    self.toasts.push(ToastKind::Error, SUBMIT_FAILURE, now);
                    form.dispatch(FormIntent::SubmitFailed);
                    self.screen = form.into();
                }
            },
            other => {
                tracing::debug!(session, "Discarding result for a form that was left");
                if result.is_err() {
                    self.controller.discard_failed_submit();
                }
                self.screen = other;
            }
        }
    }

    fn on_retry_skipped(&mut self, session: u64) {
        if let Screen::Form(form) = &mut self.screen {
            if form.session() == session {
                form.dispatch(FormIntent::SubmitFailed);
            }
        }
    }

    pub fn on_countdown_tick(&mut self, generation: u64) {
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::ThankYou(thank_you) if thank_you.ticker_generation() == Some(generation) => {
                thank_you.tick().into()
            }
            other => other,
        };
    }

    /// Re-run whatever the controller last failed at.
    ///
    /// A failed submission is replayed only from the form that made it.
    pub fn retry(&mut self) {
        let Some(failure) = self.controller.last_failure() else {
            return;
        };
        let session = match (failure, &mut self.screen) {
            (FailedOperation::Load, _) => None,
            (FailedOperation::Submit(_), Screen::Form(form))
                if Some(form.session()) == self.failed_session =>
            {
                if form.state().submitting {
                    return;
                }
                form.dispatch(FormIntent::SubmitStarted);
                Some(form.session())
            }
            (FailedOperation::Submit(_), _) => {
                tracing::debug!("Dropping failed submission from a form that was left");
                self.failed_session = None;
                self.controller.discard_failed_submit();
                return;
            }
        };
        let controller = Arc::clone(&self.controller);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let event = match (controller.retry().await, session) {
                (Some(result), Some(session)) => AppEvent::SubmitFinished { session, result },
                (None, Some(session)) => AppEvent::RetrySkipped { session },
                _ => AppEvent::FeedbackLoaded,
            };
            let _ = events.send(event);
        });
    }

    pub fn dismiss_error(&mut self) {
        self.controller.clear_error();
    }

    fn spawn_countdown(&mut self) -> CountdownTask {
        let generation = self.bump_generation();
        let events = self.events.clone();
        CountdownTask::spawn(
            &self.runtime,
            Duration::from_secs(1),
            generation,
            move |generation| {
                let _ = events.send(AppEvent::CountdownTick { generation });
            },
        )
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}
