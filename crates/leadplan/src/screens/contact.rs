use std::time::Instant;

use crate::components::{Component, EventResult};
use crate::state::{AppState, ContactField, ContactState};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, POSITIVE_COLOR, block_with_help};
use crossterm::event::{KeyCode, KeyEvent};
use jiff::tz::TimeZone;
use leadplan_core::contact::Acknowledgement;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Screen, choice_line, text_line};

pub struct ContactScreen;

impl ContactScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, form: &ContactState) {
        let focused = form.focused();
        let lines = vec![
            Line::from(""),
            text_line("Name", &form.name, focused == ContactField::Name),
            text_line("Email", &form.email, focused == ContactField::Email),
            text_line("Company", &form.company, focused == ContactField::Company),
            choice_line(
                "Industry",
                &form.industry,
                focused == ContactField::Industry,
                |i| i.name(),
            ),
            text_line("Phone", &form.phone, focused == ContactField::Phone),
            text_line("Message", &form.message, focused == ContactField::Message),
        ];

        let help = if form.is_sending() { "" } else { "[Enter] Send" };
        let block = block_with_help(&format!(" {} ", self.title()), help);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, form: &ContactState) {
        let block = Block::default().borders(Borders::ALL).title(" STATUS ");

        let lines = if let Some(remaining) = form.remaining(Instant::now()) {
            vec![Line::from(Span::styled(
                format!("Sending… ({} ms)", remaining.as_millis()),
                Style::default().fg(FOCUS_COLOR),
            ))]
        } else if let Some(ack) = form.acknowledgement() {
            acknowledgement_lines(ack)
        } else {
            vec![Line::from(Span::styled(
                "Fill in the fields marked * and press Enter.",
                Style::default().fg(HELP_COLOR),
            ))]
        };

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            area,
        );
    }
}

fn acknowledgement_lines(ack: &Acknowledgement) -> Vec<Line<'static>> {
    let sent = ack
        .submitted_at
        .to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M")
        .to_string();
    vec![
        Line::from(Span::styled(
            ack.message,
            Style::default()
                .fg(POSITIVE_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Sent {sent} for {}", ack.request.company),
            Style::default().fg(HELP_COLOR),
        )),
    ]
}

impl Screen for ContactScreen {
    fn title(&self) -> &str {
        "Contact"
    }
}

impl Component for ContactScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let form = &mut state.contact;
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                form.cycle_focus(true);
                EventResult::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.cycle_focus(false);
                EventResult::Handled
            }
            KeyCode::Enter => {
                match form.submit(Instant::now()) {
                    Ok(()) => state.clear_error(),
                    Err(e) => state.set_error(e.to_string()),
                }
                EventResult::Handled
            }
            KeyCode::Esc if form.acknowledgement().is_some() => {
                form.dismiss_acknowledgement();
                EventResult::Handled
            }
            // The form is locked until the send completes
            _ if form.is_sending() => EventResult::Handled,
            code => {
                let handled = match form.focused() {
                    ContactField::Industry => form.industry.handle_key(code),
                    text => form
                        .text_field_mut(text)
                        .is_some_and(|input| input.handle_key(code)),
                };
                if handled {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(area);

        self.render_form(frame, chunks[0], &state.contact);
        self.render_status(frame, chunks[1], &state.contact);
    }
}
