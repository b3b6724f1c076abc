//! Calculator outputs handed to the presentation layer

use serde::Serialize;

use super::ids::{AllocationGoal, Channel, Industry, Tier};
use crate::ratio::{Ratio, round_half_up};

/// Dollars and share of budget for one channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelAllocation {
    pub channel: Channel,
    pub amount: f64,
    /// Share of the monthly budget, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub body: String,
}

impl Recommendation {
    pub fn new(
        category: RecommendationCategory,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Result of the budget allocator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlan {
    pub industry: Industry,
    pub goal: AllocationGoal,
    pub monthly_budget: f64,
    pub customer_value: f64,
    /// One entry per channel, in [`Channel::ALL`] order
    pub allocations: Vec<ChannelAllocation>,
    pub expected_leads: u32,
    /// Undefined when the budget buys no whole lead
    pub cost_per_lead: Ratio,
    pub expected_clients: u32,
    pub expected_revenue: f64,
    /// Monthly ROI in percent, floored at 0
    pub roi_percent: i64,
    pub recommendations: Vec<Recommendation>,
}

impl BudgetPlan {
    pub fn allocation(&self, channel: Channel) -> Option<&ChannelAllocation> {
        self.allocations.iter().find(|a| a.channel == channel)
    }
}

/// One month of the ROI projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyProjection {
    /// 1-based month index
    pub month: u8,
    pub leads: u32,
    /// Expected closed clients, fractional
    pub clients: f64,
    pub revenue: f64,
    pub investment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// First month where cumulative revenue covers cumulative investment
    Month(u8),
    /// Not reached within the projection window
    Never,
}

impl BreakEven {
    pub fn month(&self) -> Option<u8> {
        match self {
            BreakEven::Month(m) => Some(*m),
            BreakEven::Never => None,
        }
    }
}

impl std::fmt::Display for BreakEven {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakEven::Month(m) => write!(f, "Month {m}"),
            BreakEven::Never => f.write_str("Not within 12 months"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterSummary {
    pub label: String,
    pub first_month: u8,
    pub last_month: u8,
    /// Rounded average leads per month over the quarter
    pub average_leads: u32,
}

pub const PROJECTION_MONTHS: usize = 12;

/// Result of the ROI projector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub industry: Industry,
    pub tier: Tier,
    pub baseline_leads: u32,
    pub industry_multiplier: f64,
    pub months: [MonthlyProjection; PROJECTION_MONTHS],
    pub total_leads: u64,
    pub total_revenue: f64,
    pub total_investment: f64,
    /// Total revenue as a multiple of total investment
    pub roi_multiple: Ratio,
    pub net_revenue: f64,
    pub break_even: BreakEven,
}

impl Projection {
    /// Look up a month by its 1-based index
    pub fn month(&self, month: u8) -> Option<&MonthlyProjection> {
        (month as usize)
            .checked_sub(1)
            .and_then(|idx| self.months.get(idx))
    }

    pub fn final_month(&self) -> &MonthlyProjection {
        &self.months[PROJECTION_MONTHS - 1]
    }

    pub fn average_monthly_leads(&self) -> u32 {
        round_half_up(self.total_leads as f64 / PROJECTION_MONTHS as f64) as u32
    }

    pub fn quarters(&self) -> Vec<QuarterSummary> {
        self.months
            .chunks(3)
            .enumerate()
            .map(|(q, chunk)| {
                let first_month = chunk[0].month;
                let last_month = chunk[chunk.len() - 1].month;
                let leads: u64 = chunk.iter().map(|m| u64::from(m.leads)).sum();
                QuarterSummary {
                    label: format!("Q{} (Months {}-{})", q + 1, first_month, last_month),
                    first_month,
                    last_month,
                    average_leads: round_half_up(leads as f64 / chunk.len() as f64) as u32,
                }
            })
            .collect()
    }
}
