use crate::ui::flow::ScreenKind;
use crate::ui::theme::{ACCENT_PURPLE, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

type Hint = (&'static str, &'static str);

const ERROR_HINTS: &[Hint] = &[("R", "Retry"), ("Esc", "Dismiss"), ("Ctrl+Q", "Quit")];
const WELCOME_HINTS: &[Hint] = &[("Enter", "Start"), ("Q", "Quit")];
const FORM_HINTS: &[Hint] = &[
    ("↑/↓", "Question"),
    ("←/→", "Rate"),
    ("0-9", "Set"),
    ("Enter", "Submit"),
    ("Esc", "Back"),
];
const THANK_YOU_HINTS: &[Hint] = &[("Enter", "Provide More Feedback"), ("Ctrl+Q", "Quit")];

/// Key hints for the current screen, version on the right.
pub struct Footer {
    screen: ScreenKind,
    error_shown: bool,
}

impl Footer {
    pub fn new(screen: ScreenKind, error_shown: bool) -> Self {
        Self {
            screen,
            error_shown,
        }
    }

    fn hints(&self) -> &'static [Hint] {
        if self.error_shown {
            return ERROR_HINTS;
        }
        match self.screen {
            ScreenKind::Welcome => WELCOME_HINTS,
            ScreenKind::Form => FORM_HINTS,
            ScreenKind::ThankYou => THANK_YOU_HINTS,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default()
            .fg(ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, action)) in self.hints().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", text_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {action}"), text_style));
        }

        // Right-align the version; width counts chars since hints hold arrows.
        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let inner = area.width.saturating_sub(2) as usize;
        let padding = inner.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
