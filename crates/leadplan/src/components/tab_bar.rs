use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::FOCUS_COLOR;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Digits belong to the focused text input
        if state.is_editing_text() && key.modifiers.is_empty() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = TabId::from_index(index) {
                    state.switch_tab(tab);
                }
                EventResult::Handled
            }
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.next_tab();
                EventResult::Handled
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.prev_tab();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let content = format!("[{}] {}", idx + 1, tab.name());
                if *tab == state.active_tab {
                    Line::from(Span::styled(
                        content,
                        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM).title(" LeadPlan "))
            .select(state.active_tab.index())
            .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));

        frame.render_widget(tabs, area);
    }
}
