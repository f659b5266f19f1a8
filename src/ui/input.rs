use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::flow::ScreenKind;
use crate::ui::form::FormIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The error banner captures input until retried or dismissed.
    if app.error().is_some() {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                app.dismiss_error();
                app.retry();
            }
            KeyCode::Esc | KeyCode::Enter => app.dismiss_error(),
            _ => {}
        }
        return;
    }

    match app.screen().kind() {
        ScreenKind::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.start_survey(),
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            _ => {}
        },
        ScreenKind::Form => match key.code {
            KeyCode::Esc => app.back_to_welcome(),
            KeyCode::Enter => app.submit(),
            KeyCode::Up | KeyCode::BackTab => app.dispatch_form(FormIntent::FocusPrev),
            KeyCode::Down | KeyCode::Tab => app.dispatch_form(FormIntent::FocusNext),
            KeyCode::Left | KeyCode::Char('-') => app.dispatch_form(FormIntent::Decrement),
            KeyCode::Right | KeyCode::Char('+') => app.dispatch_form(FormIntent::Increment),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if let Some(field) = app.focused_field() {
                    let value = i64::from(ch.to_digit(10).unwrap_or(0));
                    app.dispatch_form(FormIntent::SetValue { field, value });
                }
            }
            _ => {}
        },
        ScreenKind::ThankYou => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => app.reset(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
