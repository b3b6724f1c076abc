use crate::components::{Component, EventResult};
use crate::state::{AppState, ProjectorField, ProjectorState};
use crate::util::styles::{
    FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, POSITIVE_COLOR, block_with_help, change_color,
    value_color,
};
use crossterm::event::{KeyCode, KeyEvent};
use leadplan_core::comparison::{ComparisonMetric, ProjectionReport};
use leadplan_core::format::{format_count, format_currency, format_multiple, format_percent};
use leadplan_core::model::{BreakEven, Tier};
use leadplan_core::wizard::{StepStatus, WizardStep};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::{Screen, choice_line, slider_line, text_line, toggle_line};

pub struct ProjectorScreen;

impl ProjectorScreen {
    pub fn new() -> Self {
        Self
    }

    /// `✓ 1 Your Business ─ ● 2 Current Marketing ─ ○ 3 …`
    fn render_progress(&self, frame: &mut Frame, area: Rect, form: &ProjectorState) {
        let mut spans = Vec::new();
        for (idx, step) in WizardStep::INPUT_STEPS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" ─ ", Style::default().fg(HELP_COLOR)));
            }
            let (marker, style) = match form.wizard.status_of(*step) {
                StepStatus::Completed => ("✓", Style::default().fg(POSITIVE_COLOR)),
                StepStatus::Active => (
                    "●",
                    Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD),
                ),
                StepStatus::Upcoming => ("○", Style::default().fg(HELP_COLOR)),
            };
            spans.push(Span::styled(
                format!("{marker} {} {}", step.number(), step.title()),
                style,
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title()));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_step(&self, frame: &mut Frame, area: Rect, form: &ProjectorState) {
        let focused = form.focused();
        let is = |field: ProjectorField| focused == Some(field);

        let mut lines = vec![Line::from("")];
        for field in form.fields() {
            let line = match field {
                ProjectorField::Industry => {
                    choice_line("Industry", &form.industry, is(*field), |i| i.name())
                }
                ProjectorField::ClientValue => {
                    slider_line("Average Client Value", &form.client_value, is(*field))
                }
                ProjectorField::CloseRate => {
                    choice_line("Close Rate", &form.close_rate, is(*field), |c| c.label())
                }
                ProjectorField::CurrentBudget => {
                    slider_line("Current Budget", &form.current_budget, is(*field))
                }
                ProjectorField::CurrentLeads => {
                    slider_line("Current Leads/mo", &form.current_leads, is(*field))
                }
                ProjectorField::LeadSource => {
                    choice_line("Lead Source", &form.lead_source, is(*field), |s| s.label())
                }
                ProjectorField::ProposedBudget => {
                    slider_line("Proposed Budget", &form.proposed_budget, is(*field))
                }
                ProjectorField::Goal => {
                    choice_line("Primary Goal", &form.goal, is(*field), |g| g.label())
                }
                ProjectorField::Name => text_line("Name", &form.name, is(*field)),
                ProjectorField::Email => text_line("Email", &form.email, is(*field)),
                ProjectorField::Company => text_line("Company", &form.company, is(*field)),
                ProjectorField::Phone => text_line("Phone", &form.phone, is(*field)),
                ProjectorField::EmailOptIn => {
                    toggle_line("Email me insights", form.email_opt_in, is(*field))
                }
            };
            lines.push(line);
        }

        if form.step() == WizardStep::Step3 {
            let tier = Tier::for_budget(form.proposed_budget.value());
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  Package: {}", tier.name()),
                Style::default().fg(HELP_COLOR),
            )));
        }

        let help = match form.step() {
            WizardStep::Step1 => "[Enter] Next",
            WizardStep::Step4 => "[Enter] See my projection  [Esc] Back",
            _ => "[Enter] Next  [Esc] Back",
        };
        let title = format!(" Step {}: {} ", form.step().number(), form.step().title());
        let block = block_with_help(&title, help);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_results(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &ProjectionReport,
        scroll: u16,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // Summary
                Constraint::Length(10), // Quarters + comparison
                Constraint::Min(0),     // Monthly detail + methodology
            ])
            .split(area);

        self.render_summary(frame, chunks[0], report);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        self.render_quarters(frame, middle[0], report);
        self.render_comparison(frame, middle[1], report);

        self.render_detail(frame, chunks[2], report, scroll);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, report: &ProjectionReport) {
        let p = &report.projection;
        let label = |text: &'static str| Span::styled(text, Style::default().fg(HELP_COLOR));
        let bold = |text: String| Span::styled(text, Style::default().add_modifier(Modifier::BOLD));

        let break_even_style = match p.break_even {
            BreakEven::Month(_) => Style::default().fg(POSITIVE_COLOR),
            BreakEven::Never => Style::default().fg(HELP_COLOR),
        };

        let lines = vec![
            Line::from(vec![
                label("Package "),
                bold(p.tier.name().to_string()),
                label("   Leads by month 12 "),
                bold(format_count(p.final_month().leads as f64)),
                label("   Avg leads/mo "),
                bold(format_count(p.average_monthly_leads() as f64)),
            ]),
            Line::from(vec![
                label("12-mo revenue "),
                bold(format_currency(p.total_revenue)),
                label("   Investment "),
                bold(format_currency(p.total_investment)),
                label("   Net "),
                Span::styled(
                    format_currency(p.net_revenue),
                    Style::default().fg(value_color(p.net_revenue)),
                ),
            ]),
            Line::from(vec![
                label("ROI "),
                bold(format_multiple(p.roi_multiple)),
                label("   Break-even "),
                Span::styled(p.break_even.to_string(), break_even_style),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" YOUR 12-MONTH PROJECTION "),
            ),
            area,
        );
    }

    fn render_quarters(&self, frame: &mut Frame, area: Rect, report: &ProjectionReport) {
        let bars: Vec<Bar> = report
            .projection
            .quarters()
            .into_iter()
            .enumerate()
            .map(|(idx, q)| {
                Bar::default()
                    .value(q.average_leads as u64)
                    .label(Line::from(format!("Q{}", idx + 1)))
                    .text_value(format!("{}/mo", q.average_leads))
                    .style(Style::default().fg(HEADER_COLOR))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" AVG LEADS BY QUARTER "),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(7)
            .bar_gap(2)
            .direction(Direction::Vertical);

        frame.render_widget(chart, area);
    }

    fn render_comparison(&self, frame: &mut Frame, area: Rect, report: &ProjectionReport) {
        let header = Row::new(["Metric", "Current", "Projected", "Change"])
            .style(Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD));

        let rows = report.comparison.rows.iter().map(|row| {
            let formatted = row.formatted();
            let lower_is_better = matches!(
                row.metric,
                ComparisonMetric::CostPerLead | ComparisonMetric::MarketingCost
            );
            Row::new([
                Cell::from(formatted.metric),
                Cell::from(formatted.current),
                Cell::from(formatted.projected),
                Cell::from(Span::styled(
                    formatted.change,
                    Style::default().fg(change_color(row.change, lower_is_better)),
                )),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Min(7),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" CURRENT VS. PROJECTED (MONTH 12) "),
        );
        frame.render_widget(table, area);
    }

    fn render_detail(
        &self,
        frame: &mut Frame,
        area: Rect,
        report: &ProjectionReport,
        scroll: u16,
    ) {
        let p = &report.projection;
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "{:<7}{:>7}{:>10}{:>12}{:>12}",
                "Month", "Leads", "Clients", "Revenue", "Spend"
            ),
            Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
        ))];
        for m in &p.months {
            lines.push(Line::from(format!(
                "{:<7}{:>7}{:>10.1}{:>12}{:>12}",
                m.month,
                m.leads,
                m.clients,
                format_currency(m.revenue),
                format_currency(m.investment)
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "How we calculated this",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "Your budget places you in the {} package, which reaches about {} leads a month once campaigns mature.",
            p.tier.name(),
            p.baseline_leads
        )));
        lines.push(Line::from(
            "Months 1-2 run at 30% of that volume, months 3-4 at 60%, months 5-6 at 85%, and month 7 onward at full volume.",
        ));
        lines.push(Line::from(format!(
            "Lead volume is adjusted by {:.2}x for your industry and converted at your {} close rate.",
            p.industry_multiplier,
            format_percent(report.inputs.close_rate)
        )));
        lines.push(Line::from(
            "These figures are estimates based on industry benchmarks, not a guarantee.",
        ));

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(block_with_help(
                    " MONTH BY MONTH ",
                    "[↑/↓] Scroll  [r] Start over",
                )),
            area,
        );
    }

    fn handle_field_key(form: &mut ProjectorState, field: ProjectorField, code: KeyCode) -> bool {
        match field {
            ProjectorField::Industry => form.industry.handle_key(code),
            ProjectorField::ClientValue => form.client_value.handle_key(code),
            ProjectorField::CloseRate => form.close_rate.handle_key(code),
            ProjectorField::CurrentBudget => form.current_budget.handle_key(code),
            ProjectorField::CurrentLeads => form.current_leads.handle_key(code),
            ProjectorField::LeadSource => form.lead_source.handle_key(code),
            ProjectorField::ProposedBudget => form.proposed_budget.handle_key(code),
            ProjectorField::Goal => form.goal.handle_key(code),
            ProjectorField::EmailOptIn => match code {
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    form.email_opt_in = !form.email_opt_in;
                    true
                }
                _ => false,
            },
            text => form
                .text_field_mut(text)
                .is_some_and(|input| input.handle_key(code)),
        }
    }

    fn handle_results_key(form: &mut ProjectorState, code: KeyCode) -> EventResult {
        match code {
            KeyCode::Down | KeyCode::Char('j') => {
                form.results_scroll = form.results_scroll.saturating_add(1);
                EventResult::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                form.results_scroll = form.results_scroll.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                tracing::debug!("Projector restarted");
                form.restart();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }
}

impl Screen for ProjectorScreen {
    fn title(&self) -> &str {
        "ROI Projector"
    }
}

impl Component for ProjectorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let form = &mut state.projector;
        if form.wizard.is_finished() {
            return Self::handle_results_key(form, key.code);
        }

        let editing_text = form.focused().is_some_and(|f| f.is_text());
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                form.cycle_focus(true);
                EventResult::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.cycle_focus(false);
                EventResult::Handled
            }
            KeyCode::Char('j') if !editing_text => {
                form.cycle_focus(true);
                EventResult::Handled
            }
            KeyCode::Char('k') if !editing_text => {
                form.cycle_focus(false);
                EventResult::Handled
            }
            KeyCode::Enter => {
                match form.submit(&state.benchmarks) {
                    Ok(step) => {
                        tracing::debug!(?step, "Projector step committed");
                        if let Some(report) = form.wizard.report() {
                            tracing::info!(
                                industry = report.inputs.industry.key(),
                                tier = report.projection.tier.name(),
                                break_even = %report.projection.break_even,
                                "Projection complete"
                            );
                        }
                        state.clear_error();
                    }
                    Err(e) => state.set_error(e.to_string()),
                }
                EventResult::Handled
            }
            KeyCode::Esc => {
                match form.back() {
                    Ok(_) => state.clear_error(),
                    Err(e) => state.set_error(e.to_string()),
                }
                EventResult::Handled
            }
            code => match form.focused() {
                Some(field) if Self::handle_field_key(form, field, code) => EventResult::Handled,
                _ => EventResult::NotHandled,
            },
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let form = &state.projector;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_progress(frame, chunks[0], form);

        match form.wizard.report() {
            Some(report) if form.wizard.is_finished() => {
                self.render_results(frame, chunks[1], report, form.results_scroll)
            }
            _ => self.render_step(frame, chunks[1], form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadplan_core::model::{Industry, Tier};

    fn press(screen: &mut ProjectorScreen, state: &mut AppState, code: KeyCode) {
        screen.handle_key(KeyEvent::from(code), state);
    }

    fn type_text(screen: &mut ProjectorScreen, state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(screen, state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_missing_radio_shows_error_and_stays() {
        let mut state = AppState::default();
        let mut screen = ProjectorScreen::new();

        press(&mut screen, &mut state, KeyCode::Enter);
        assert_eq!(
            state.error_message.as_deref(),
            Some("please select your industry")
        );
        assert_eq!(state.projector.step(), WizardStep::Step1);
    }

    #[test]
    fn test_keyboard_walkthrough_to_results() {
        let mut state = AppState::default();
        let mut screen = ProjectorScreen::new();

        // Step 1: industry, client value, close rate
        press(&mut screen, &mut state, KeyCode::Right);
        press(&mut screen, &mut state, KeyCode::Tab);
        press(&mut screen, &mut state, KeyCode::Tab);
        press(&mut screen, &mut state, KeyCode::Right);
        press(&mut screen, &mut state, KeyCode::Enter);
        assert_eq!(state.projector.step(), WizardStep::Step2);

        // Step 2: lead source is the third field
        press(&mut screen, &mut state, KeyCode::Char('k'));
        press(&mut screen, &mut state, KeyCode::Right);
        press(&mut screen, &mut state, KeyCode::Enter);
        assert_eq!(state.projector.step(), WizardStep::Step3);

        // Step 3: budget to the top of the range, then pick a goal
        press(&mut screen, &mut state, KeyCode::End);
        press(&mut screen, &mut state, KeyCode::Tab);
        press(&mut screen, &mut state, KeyCode::Right);
        press(&mut screen, &mut state, KeyCode::Enter);
        assert_eq!(state.projector.step(), WizardStep::Step4);

        // Step 4: 'j' and 'k' are typed, not navigation
        type_text(&mut screen, &mut state, "jk");
        press(&mut screen, &mut state, KeyCode::Tab);
        type_text(&mut screen, &mut state, "jk@example.com");
        press(&mut screen, &mut state, KeyCode::Tab);
        type_text(&mut screen, &mut state, "JK Property");
        press(&mut screen, &mut state, KeyCode::Enter);

        assert!(state.error_message.is_none(), "{:?}", state.error_message);
        assert_eq!(state.projector.step(), WizardStep::Results);
        let report = state.projector.wizard.report().unwrap();
        assert_eq!(report.inputs.industry, Industry::PropertyManagement);
        assert_eq!(report.projection.tier, Tier::Domination);
        assert_eq!(state.projector.wizard.contact().unwrap().name, "jk");

        press(&mut screen, &mut state, KeyCode::Char('r'));
        assert_eq!(state.projector.step(), WizardStep::Step1);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut state = AppState::default();
        let mut screen = ProjectorScreen::new();
        state.projector.industry.select(Industry::Logistics);
        state.projector.close_rate.next();
        press(&mut screen, &mut state, KeyCode::Enter);
        assert_eq!(state.projector.step(), WizardStep::Step2);

        press(&mut screen, &mut state, KeyCode::Esc);
        assert_eq!(state.projector.step(), WizardStep::Step1);

        press(&mut screen, &mut state, KeyCode::Esc);
        assert_eq!(
            state.error_message.as_deref(),
            Some("already at the first step")
        );
    }
}
