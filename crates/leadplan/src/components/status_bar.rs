use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR};
use crossterm::event::KeyEvent;
use leadplan_core::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.active_tab {
            TabId::Allocator => {
                "1-3: tabs | Tab/j/k: field | ←/→: adjust | PgUp/PgDn: jump | Enter: calculate | q: quit"
            }
            TabId::Projector => match state.projector.step() {
                WizardStep::Results => "↑/↓: scroll | r: start over | Ctrl+←/→: tabs | Ctrl+C: quit",
                _ => "Tab: field | ←/→: adjust | Enter: next | Esc: back | Ctrl+←/→: tabs | Ctrl+C: quit",
            },
            TabId::Contact => "Tab: field | ←/→: industry | Enter: send | Ctrl+←/→: tabs | Ctrl+C: quit",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
