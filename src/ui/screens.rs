use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::feedback::{rating_label, Averages, Field, NpsCategory};
use crate::survey::QUESTIONS;
use crate::ui::flow::{Form, ThankYou};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::slider::RatingSlider;
use crate::ui::theme::{
    ACCENT_PURPLE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

const CONTENT_WIDTH: u16 = 72;
const QUESTION_HEIGHT: u16 = 5;

fn title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(MUTED_TEXT)))
}

fn button(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[ {key} ] "),
            Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(label, Style::default().fg(HEADER_TEXT)),
    ])
}

pub fn render_welcome(
    frame: &mut Frame<'_>,
    area: Rect,
    responses: usize,
    averages: Option<&Averages>,
) {
    let mut lines = vec![
        title("Thank You! 💜"),
        Line::default(),
        Line::from(
            "We value your opinion and would love to hear about your experience with us. \
             Your feedback helps us improve and serve you better.",
        ),
        Line::default(),
        button("Enter", "Start Feedback Survey"),
        Line::default(),
        muted("Takes less than 2 minutes to complete"),
    ];
    if let Some(averages) = averages {
        lines.push(Line::default());
        lines.push(muted(format!(
            "{responses} responses so far · satisfaction {:.1} · ease of use {:.1} · recommend {:.1}",
            averages.satisfaction, averages.ease_of_use, averages.nps
        )));
    }

    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, CONTENT_WIDTH, height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

pub fn render_form(frame: &mut Frame<'_>, area: Rect, form: &Form) {
    let state = form.state();
    let height = 4 + QUESTION_HEIGHT * QUESTIONS.len() as u16 + 1;
    let rect = centered_rect_by_size(area, CONTENT_WIDTH, height);

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ];
    constraints.extend(QUESTIONS.iter().map(|_| Constraint::Length(QUESTION_HEIGHT)));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(rect);

    frame.render_widget(Paragraph::new(title("Share Your Feedback")), rows[0]);
    let percent = state.completion_percentage();
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT_PURPLE).bg(GLOBAL_BORDER))
            .percent(percent)
            .label(format!("Progress {percent}%")),
        rows[1],
    );

    for (index, question) in QUESTIONS.iter().enumerate() {
        let focused = index == state.focused;
        let [label_row, description_row, slider_row, error_row, _] =
            Layout::vertical([Constraint::Length(1); 5]).areas(rows[4 + index]);

        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT_PURPLE)),
                Span::styled(question.label, label_style),
            ])),
            label_row,
        );
        frame.render_widget(
            Paragraph::new(muted(format!("  {}", question.description))),
            description_row,
        );
        let slider_area = Rect {
            x: slider_row.x + 2,
            width: slider_row.width.saturating_sub(2),
            ..slider_row
        };
        frame.render_widget(
            RatingSlider::new(question, state.values.get(question.field)).focused(focused),
            slider_area,
        );
        if let Some(error) = state.error(question.field) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {error}"),
                    Style::default().fg(STATUS_ERROR),
                )),
                error_row,
            );
        }
    }

    let submit = if state.submitting {
        muted("Submitting Feedback...")
    } else {
        button("Enter", "Submit Feedback")
    };
    let last = rows.len() - 1;
    frame.render_widget(Paragraph::new(submit), rows[last]);
}

fn summary_row(label: &'static str, value: String, note: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<24}"), Style::default().fg(MUTED_TEXT)),
        Span::styled(
            value,
            Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {note}"), Style::default().fg(HEADER_TEXT)),
    ])
}

pub fn render_thank_you(frame: &mut Frame<'_>, area: Rect, screen: &ThankYou) {
    let record = screen.record();
    let category = record.nps_category();
    let category_color = match category {
        NpsCategory::Promoter => STATUS_OK,
        NpsCategory::Passive => STATUS_WARN,
        NpsCategory::Detractor => STATUS_ERROR,
    };
    let satisfaction = record.rating(Field::Satisfaction);
    let ease_of_use = record.rating(Field::EaseOfUse);
    let remaining = screen.remaining();
    let unit = if remaining == 1 { "second" } else { "seconds" };

    let lines = vec![
        title("Thank You! 🎉"),
        Line::default(),
        Line::from(
            "Your feedback has been successfully submitted. \
             We appreciate you taking the time to share your thoughts with us!",
        ),
        Line::default(),
        Line::from(Span::styled(
            "Your Feedback Summary",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        summary_row(
            "Service Satisfaction:",
            format!("{satisfaction}/5"),
            rating_label(satisfaction),
        ),
        summary_row(
            "Ease of Use:",
            format!("{ease_of_use}/5"),
            rating_label(ease_of_use),
        ),
        Line::from(vec![
            Span::styled(format!("{:<24}", "Recommendation:"), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{}/10", record.nps),
                Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", category.label()),
                Style::default().fg(category_color),
            ),
        ]),
        Line::default(),
        button("Enter", "Provide More Feedback"),
        Line::default(),
        muted(format!("Returning to welcome screen in {remaining} {unit}")),
    ];

    let height = lines.len() as u16 + 2;
    let rect = centered_rect_by_size(area, CONTENT_WIDTH, height);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rect);
}
