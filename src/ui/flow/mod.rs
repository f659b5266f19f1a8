//! Screen flow: Welcome → Form → ThankYou → Welcome.
//!
//! Each screen is its own type and transitions consume the current screen,
//! so a submission can only ever be completed from a [`Form`]. The
//! submitted record lives only inside [`ThankYou`]; leaving that screen
//! drops it together with its countdown ticker.

mod countdown;

pub use countdown::CountdownTask;

use crate::feedback::FeedbackRecord;
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

#[derive(Debug, Default)]
pub struct Welcome;

impl Welcome {
    /// Open a fresh form. `session` identifies this visit to the form so
    /// late results from an earlier visit can be recognised.
    pub fn start(self, session: u64) -> Form {
        Form {
            session,
            state: FormState::default(),
        }
    }
}

#[derive(Debug)]
pub struct Form {
    session: u64,
    state: FormState,
}

impl Form {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        self.state = FormReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Abandon the form. Unsubmitted answers are discarded.
    pub fn back(self) -> Welcome {
        Welcome
    }

    pub fn submitted(self, record: FeedbackRecord, countdown_seconds: u8) -> ThankYou {
        ThankYou {
            record,
            remaining: countdown_seconds.max(1),
            ticker: None,
        }
    }
}

pub struct ThankYou {
    record: FeedbackRecord,
    remaining: u8,
    ticker: Option<CountdownTask>,
}

/// Result of one countdown tick.
pub enum Countdown {
    Running(ThankYou),
    Elapsed(Welcome),
}

impl ThankYou {
    pub fn record(&self) -> &FeedbackRecord {
        &self.record
    }

    /// Seconds left before returning to the welcome screen.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Hand the screen its ticker. The ticker is cancelled when the screen goes away.
    pub fn attach_ticker(&mut self, ticker: CountdownTask) {
        self.ticker = Some(ticker);
    }

    pub fn ticker_generation(&self) -> Option<u64> {
        self.ticker.as_ref().map(CountdownTask::generation)
    }

    pub fn tick(self) -> Countdown {
        if self.remaining <= 1 {
            Countdown::Elapsed(self.reset())
        } else {
            Countdown::Running(ThankYou {
                remaining: self.remaining - 1,
                ..self
            })
        }
    }

    pub fn reset(self) -> Welcome {
        Welcome
    }
}

impl std::fmt::Debug for ThankYou {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThankYou")
            .field("record", &self.record)
            .field("remaining", &self.remaining)
            .field("ticker", &self.ticker_generation())
            .finish()
    }
}

/// The screen currently shown.
#[derive(Debug)]
pub enum Screen {
    Welcome(Welcome),
    Form(Form),
    ThankYou(ThankYou),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome(Welcome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Welcome,
    Form,
    ThankYou,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Welcome(_) => ScreenKind::Welcome,
            Screen::Form(_) => ScreenKind::Form,
            Screen::ThankYou(_) => ScreenKind::ThankYou,
        }
    }
}

impl From<Welcome> for Screen {
    fn from(screen: Welcome) -> Self {
        Screen::Welcome(screen)
    }
}

impl From<Form> for Screen {
    fn from(screen: Form) -> Self {
        Screen::Form(screen)
    }
}

impl From<ThankYou> for Screen {
    fn from(screen: ThankYou) -> Self {
        Screen::ThankYou(screen)
    }
}

impl From<Countdown> for Screen {
    fn from(countdown: Countdown) -> Self {
        match countdown {
            Countdown::Running(screen) => screen.into(),
            Countdown::Elapsed(screen) => screen.into(),
        }
    }
}
