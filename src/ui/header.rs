use crate::ui::flow::ScreenKind;
use crate::ui::theme::{ACCENT_PURPLE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    screen: ScreenKind,
    responses: usize,
}

impl Header {
    pub fn new(screen: ScreenKind, responses: usize) -> Self {
        Self { screen, responses }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let step = |kind: ScreenKind, label: &'static str| {
            if kind == self.screen {
                Span::styled(
                    label,
                    Style::default()
                        .fg(ACCENT_PURPLE)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(MUTED_TEXT))
            }
        };
        let line = Line::from(vec![
            Span::styled("  Feedback Survey", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            step(ScreenKind::Welcome, "Welcome"),
            Span::styled(" › ", separator_style),
            step(ScreenKind::Form, "Questions"),
            Span::styled(" › ", separator_style),
            step(ScreenKind::ThankYou, "Thank you"),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} responses", self.responses), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
