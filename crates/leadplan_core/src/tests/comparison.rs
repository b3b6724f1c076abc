//! Comparison table tests

use crate::comparison::{ComparisonMetric, FormattedRow, ProjectionReport};
use crate::config::ProjectionBuilder;
use crate::model::{Benchmarks, CloseRate, Industry};
use crate::ratio::Ratio;

fn recruitment_report(current_budget: f64, current_leads: u32) -> ProjectionReport {
    ProjectionBuilder::new()
        .industry(Industry::Recruitment)
        .close_rate(CloseRate::Typical)
        .client_value(2_000.0)
        .proposed_budget(6_000.0)
        .current(current_budget, current_leads)
        .report(Benchmarks::builtin())
        .unwrap()
}

fn row(metric: &str, current: &str, projected: &str, change: &str) -> FormattedRow {
    FormattedRow {
        metric: match metric {
            "leads" => "Monthly Leads",
            "cost" => "Marketing Cost",
            "cpl" => "Cost per Lead",
            _ => "Monthly Revenue",
        },
        current: current.to_string(),
        projected: projected.to_string(),
        change: change.to_string(),
    }
}

#[test]
fn test_rows_in_display_order() {
    let report = recruitment_report(3_000.0, 10);
    let metrics: Vec<ComparisonMetric> = report.comparison.rows.iter().map(|r| r.metric).collect();
    assert_eq!(metrics, ComparisonMetric::ALL.to_vec());
}

#[test]
fn test_formatted_table() {
    let report = recruitment_report(3_000.0, 10);

    assert_eq!(
        report.comparison.formatted(),
        vec![
            row("leads", "10", "40", "+300%"),
            row("cost", "$3,000", "$6,000", "+100%"),
            row("cpl", "$300", "$150", "-50%"),
            row("revenue", "$4,000", "$16,000", "+300%"),
        ]
    );
}

#[test]
fn test_zero_current_budget_reports_na() {
    let report = recruitment_report(0.0, 10);
    let table = &report.comparison;

    let cpl = table.row(ComparisonMetric::CostPerLead).unwrap();
    assert_eq!(cpl.current, Ratio::Undefined);
    assert_eq!(cpl.change, Ratio::Undefined);
    assert_eq!(cpl.projected, Ratio::Defined(150.0));

    let cost = table.row(ComparisonMetric::MarketingCost).unwrap();
    assert_eq!(cost.current, Ratio::Defined(0.0));
    assert_eq!(cost.change, Ratio::Undefined);

    let formatted = cpl.formatted();
    assert_eq!(formatted.current, "N/A");
    assert_eq!(formatted.change, "N/A");
    assert_eq!(cost.formatted().change, "N/A");

    // Leads still have a baseline
    let leads = table.row(ComparisonMetric::MonthlyLeads).unwrap();
    assert_eq!(leads.change, Ratio::Defined(300.0));
}

#[test]
fn test_zero_current_leads_reports_na() {
    let report = recruitment_report(2_000.0, 0);
    let table = &report.comparison;

    assert_eq!(
        table.row(ComparisonMetric::MonthlyLeads).unwrap().change,
        Ratio::Undefined
    );
    assert_eq!(
        table.row(ComparisonMetric::CostPerLead).unwrap().current,
        Ratio::Undefined
    );

    let revenue = table.row(ComparisonMetric::MonthlyRevenue).unwrap();
    assert_eq!(revenue.current, Ratio::Defined(0.0));
    assert_eq!(revenue.change, Ratio::Undefined);
    assert_eq!(revenue.formatted().current, "$0");
}

#[test]
fn test_undefined_never_serializes_as_number() {
    let report = recruitment_report(0.0, 0);
    let json = serde_json::to_value(&report.comparison).unwrap();
    let cpl = &json["rows"][2];

    assert_eq!(cpl["metric"], "cost_per_lead");
    assert_eq!(cpl["current"], "N/A");
    assert_eq!(cpl["change"], "N/A");
    assert_eq!(cpl["projected"], 150.0);
}

#[test]
fn test_report_keeps_inputs() {
    let report = recruitment_report(1_000.0, 4);
    assert_eq!(report.inputs.current_leads, 4);
    assert_eq!(report.inputs.close_rate, 20.0);
    assert_eq!(report.projection.final_month().leads, 40);
}
