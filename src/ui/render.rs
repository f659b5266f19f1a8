use crate::ui::app::App;
use crate::ui::flow::Screen;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::screens::{render_form, render_thank_you, render_welcome};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};
use crate::ui::toast::ToastKind;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const TOAST_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let feedback = app.feedback();
    let error = app.error();

    let header_widget = Header::new(app.screen().kind(), feedback.feedback.len());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Welcome(_) => {
            let averages = app.averages();
            render_welcome(frame, body, feedback.feedback.len(), averages.as_ref());
        }
        Screen::Form(form) => render_form(frame, body, form),
        Screen::ThankYou(screen) => render_thank_you(frame, body, screen),
    }
    let footer_widget = Footer::new(app.screen().kind(), error.is_some());
    frame.render_widget(footer_widget.widget(footer), footer);

    // A submission shows its own progress on the form.
    if feedback.loading && !matches!(app.screen(), Screen::Form(_)) {
        draw_popup(
            frame,
            body,
            "Loading",
            vec![Line::from("Loading...")],
            POPUP_BORDER,
        );
    } else if let Some(message) = error {
        draw_popup(
            frame,
            body,
            "Something went wrong",
            vec![
                Line::from(message),
                Line::default(),
                Line::from("Press R to retry or Esc to dismiss"),
            ],
            STATUS_ERROR,
        );
    }

    draw_toasts(frame, body, app);
}

fn draw_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    border: ratatui::style::Color,
) {
    let height = lines.len() as u16 + 2;
    let popup_area = centered_rect_by_size(area, 52, height);
    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(border),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(HEADER_TEXT))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, popup_area);
}

fn draw_toasts(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let width = TOAST_WIDTH.min(body.width);
    let mut y = body.y;
    for toast in app.toasts().iter() {
        if y + 3 > body.y + body.height {
            break;
        }
        let color = match toast.kind {
            ToastKind::Success => STATUS_OK,
            ToastKind::Error => STATUS_ERROR,
        };
        let rect = Rect {
            x: body.x + body.width - width,
            y,
            width,
            height: 3,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.message.clone())
                .style(Style::default().fg(HEADER_TEXT))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            rect,
        );
        y += 3;
    }
}
