use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::survey::Question;
use crate::ui::theme::{ACCENT_PURPLE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// One line slider for a rating question: `1 ━━━●──── 5  🙂 3`.
pub struct RatingSlider<'a> {
    question: &'a Question,
    value: i64,
    focused: bool,
}

impl<'a> RatingSlider<'a> {
    pub fn new(question: &'a Question, value: i64) -> Self {
        Self {
            question,
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn line(&self) -> Line<'static> {
        let (min, max) = (self.question.min(), self.question.max());
        let accent = if self.focused { ACCENT_PURPLE } else { HEADER_TEXT };
        let filled = Style::default().fg(accent);
        let empty = Style::default().fg(GLOBAL_BORDER);
        let label = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::styled(format!("{min} "), label)];
        for step in min..=max {
            let span = if step == self.value {
                Span::styled("●", filled.add_modifier(Modifier::BOLD))
            } else if step < self.value {
                Span::styled("━━", filled)
            } else {
                Span::styled("──", empty)
            };
            spans.push(span);
        }
        spans.push(Span::styled(format!(" {max}"), label));

        let face = self.question.face(self.value).unwrap_or(" ");
        spans.push(Span::raw("   "));
        spans.push(Span::raw(face));
        spans.push(Span::styled(
            format!(" {}", self.value),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        Line::from(spans)
    }
}

impl Widget for RatingSlider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
