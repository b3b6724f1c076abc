//! Current vs. projected comparison table
//!
//! Compares what the business reports today with month 12 of the projection.
//! Any figure or change without a meaningful baseline is [`Ratio::Undefined`]
//! and renders as `N/A`.

use serde::Serialize;

use crate::error::Result;
use crate::format::{format_percent_change, format_ratio_count, format_ratio_currency};
use crate::model::{Benchmarks, Projection, ProjectionInputs};
use crate::projection::project;
use crate::ratio::Ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    MonthlyLeads,
    MarketingCost,
    CostPerLead,
    MonthlyRevenue,
}

impl ComparisonMetric {
    pub const ALL: [ComparisonMetric; 4] = [
        ComparisonMetric::MonthlyLeads,
        ComparisonMetric::MarketingCost,
        ComparisonMetric::CostPerLead,
        ComparisonMetric::MonthlyRevenue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMetric::MonthlyLeads => "Monthly Leads",
            ComparisonMetric::MarketingCost => "Marketing Cost",
            ComparisonMetric::CostPerLead => "Cost per Lead",
            ComparisonMetric::MonthlyRevenue => "Monthly Revenue",
        }
    }

    fn is_currency(&self) -> bool {
        !matches!(self, ComparisonMetric::MonthlyLeads)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: ComparisonMetric,
    pub current: Ratio,
    pub projected: Ratio,
    /// Whole-percent change from current to projected
    pub change: Ratio,
}

impl ComparisonRow {
    fn new(metric: ComparisonMetric, current: Ratio, projected: Ratio) -> Self {
        let change = current
            .and_then(|c| projected.and_then(|p| Ratio::percent_change(c, p)))
            .rounded();
        Self {
            metric,
            current,
            projected,
            change,
        }
    }

    pub fn formatted(&self) -> FormattedRow {
        let cell = |value: Ratio| {
            if self.metric.is_currency() {
                format_ratio_currency(value)
            } else {
                format_ratio_count(value)
            }
        };
        FormattedRow {
            metric: self.metric.label(),
            current: cell(self.current),
            projected: cell(self.projected),
            change: format_percent_change(self.change),
        }
    }
}

/// A comparison row rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRow {
    pub metric: &'static str,
    pub current: String,
    pub projected: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn row(&self, metric: ComparisonMetric) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.metric == metric)
    }

    pub fn formatted(&self) -> Vec<FormattedRow> {
        self.rows.iter().map(ComparisonRow::formatted).collect()
    }
}

/// Build the comparison table for a finished projection.
pub fn compare(inputs: &ProjectionInputs, projection: &Projection) -> ComparisonTable {
    let month12 = projection.final_month();
    let current_leads = inputs.current_leads as f64;

    let current_cpl = if inputs.current_budget > 0.0 && inputs.current_leads > 0 {
        Ratio::of(inputs.current_budget, current_leads)
    } else {
        Ratio::Undefined
    };
    let projected_cpl = Ratio::of(inputs.proposed_budget, month12.leads as f64);
    let current_revenue = current_leads * inputs.close_fraction() * inputs.client_value;

    let rows = vec![
        ComparisonRow::new(
            ComparisonMetric::MonthlyLeads,
            Ratio::Defined(current_leads),
            Ratio::Defined(month12.leads as f64),
        ),
        ComparisonRow::new(
            ComparisonMetric::MarketingCost,
            Ratio::Defined(inputs.current_budget),
            Ratio::Defined(inputs.proposed_budget),
        ),
        ComparisonRow::new(ComparisonMetric::CostPerLead, current_cpl, projected_cpl),
        ComparisonRow::new(
            ComparisonMetric::MonthlyRevenue,
            Ratio::from_value(current_revenue),
            Ratio::from_value(month12.revenue),
        ),
    ];

    ComparisonTable { rows }
}

/// Everything the projector's results page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub inputs: ProjectionInputs,
    pub projection: Projection,
    pub comparison: ComparisonTable,
}

/// Project and compare in one step
pub fn report(inputs: &ProjectionInputs, benchmarks: &Benchmarks) -> Result<ProjectionReport> {
    let projection = project(inputs, benchmarks)?;
    let comparison = compare(inputs, &projection);
    Ok(ProjectionReport {
        inputs: *inputs,
        projection,
        comparison,
    })
}
