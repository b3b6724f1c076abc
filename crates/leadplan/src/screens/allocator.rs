use crate::components::{Component, EventResult};
use crate::state::{AllocatorField, AppState};
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, block_with_help, category_color, focused_block};
use crossterm::event::{KeyCode, KeyEvent};
use leadplan_core::format::{format_count, format_currency, format_percent, format_ratio_currency};
use leadplan_core::model::BudgetPlan;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::{Screen, choice_line, slider_line};

pub struct AllocatorScreen;

impl AllocatorScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_inputs(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let form = &state.allocator;
        let focused = form.focused();

        let lines = vec![
            Line::from(""),
            choice_line(
                "Industry",
                &form.industry,
                focused == AllocatorField::Industry,
                |i| i.name(),
            ),
            choice_line(
                "Primary Goal",
                &form.goal,
                focused == AllocatorField::Goal,
                |g| g.name(),
            ),
            slider_line(
                "Monthly Budget",
                &form.monthly_budget,
                focused == AllocatorField::MonthlyBudget,
            ),
            slider_line(
                "Customer Value",
                &form.customer_value,
                focused == AllocatorField::CustomerValue,
            ),
        ];

        let block = block_with_help(&format!(" {} ", self.title()), "[Enter] Calculate");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_plan(&self, frame: &mut Frame, area: Rect, plan: &BudgetPlan) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Metrics
                Constraint::Length(9), // Channel breakdown
                Constraint::Min(0),    // Recommendations
            ])
            .split(area);

        let metrics = Line::from(vec![
            Span::styled("Leads/mo ", Style::default().fg(HELP_COLOR)),
            Span::styled(
                format_count(plan.expected_leads as f64),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Cost/lead ", Style::default().fg(HELP_COLOR)),
            Span::raw(format_ratio_currency(plan.cost_per_lead)),
            Span::styled("   Clients/mo ", Style::default().fg(HELP_COLOR)),
            Span::raw(format_count(plan.expected_clients as f64)),
            Span::styled("   ROI ", Style::default().fg(HELP_COLOR)),
            Span::styled(
                format!("{}%", plan.roi_percent),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let revenue = Line::from(format!(
            "Expected monthly revenue {} on {} spend",
            format_currency(plan.expected_revenue),
            format_currency(plan.monthly_budget)
        ));
        frame.render_widget(
            Paragraph::new(vec![metrics, revenue])
                .block(Block::default().borders(Borders::ALL).title(" ESTIMATE ")),
            chunks[0],
        );

        let header = Row::new(["Channel", "Amount", "Share", ""])
            .style(Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD));
        let rows = plan.allocations.iter().map(|a| {
            Row::new([
                Cell::from(a.channel.name()),
                Cell::from(format_currency(a.amount)),
                Cell::from(format_percent(a.percentage)),
                Cell::from(Span::styled(
                    a.channel.description(),
                    Style::default().fg(HELP_COLOR),
                )),
            ])
        });
        let table = Table::new(
            rows,
            [
                Constraint::Length(18),
                Constraint::Length(10),
                Constraint::Length(7),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" BUDGET BREAKDOWN "));
        frame.render_widget(table, chunks[1]);

        let mut lines = Vec::new();
        for rec in &plan.recommendations {
            lines.push(Line::from(Span::styled(
                rec.title.clone(),
                Style::default()
                    .fg(category_color(rec.category))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(rec.body.clone()));
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" RECOMMENDATIONS ")),
            chunks[2],
        );
    }
}

impl Screen for AllocatorScreen {
    fn title(&self) -> &str {
        "Budget Allocator"
    }
}

impl Component for AllocatorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let form = &mut state.allocator;
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                form.cycle_focus(true);
                EventResult::Handled
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                form.cycle_focus(false);
                EventResult::Handled
            }
            KeyCode::Enter => {
                match form.calculate(&state.benchmarks) {
                    Ok(plan) => {
                        tracing::debug!(
                            industry = plan.industry.key(),
                            leads = plan.expected_leads,
                            roi = plan.roi_percent,
                            "Allocated budget"
                        );
                        state.clear_error();
                    }
                    Err(e) => state.set_error(e.to_string()),
                }
                EventResult::Handled
            }
            code => {
                let handled = match form.focused() {
                    AllocatorField::Industry => form.industry.handle_key(code),
                    AllocatorField::Goal => form.goal.handle_key(code),
                    AllocatorField::MonthlyBudget => form.monthly_budget.handle_key(code),
                    AllocatorField::CustomerValue => form.customer_value.handle_key(code),
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
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        self.render_inputs(frame, chunks[0], state);

        match &state.allocator.plan {
            Some(plan) => self.render_plan(frame, chunks[1], plan),
            None => {
                let content = vec![
                    Line::from(""),
                    Line::from("Pick an industry and goal, set your budget, then press Enter."),
                ];
                frame.render_widget(
                    Paragraph::new(content).block(focused_block(" RESULTS ", false)),
                    chunks[1],
                );
            }
        }
    }
}
