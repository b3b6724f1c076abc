//! 12-month ROI projection
//!
//! Lead volume ramps toward the tier's steady-state baseline as campaigns
//! mature; revenue follows from the close rate and client value.

use crate::error::Result;
use crate::model::{
    Benchmarks, BreakEven, MonthlyProjection, PROJECTION_MONTHS, Projection, ProjectionInputs,
    Tier,
};
use crate::ratio::{Ratio, round_half_up};

/// Share of the steady-state lead volume reached in a given 1-based month.
pub fn ramp_multiplier(month: u8) -> f64 {
    match month {
        0..=2 => 0.3,
        3..=4 => 0.6,
        5..=6 => 0.85,
        _ => 1.0,
    }
}

/// Leads for one month, rounded to a whole lead
pub fn month_leads(baseline: u32, month: u8, industry_multiplier: f64) -> u32 {
    round_half_up(baseline as f64 * ramp_multiplier(month) * industry_multiplier) as u32
}

/// First 1-based month where cumulative revenue covers cumulative investment.
pub fn break_even_month(months: &[MonthlyProjection]) -> BreakEven {
    let mut cumulative_revenue = 0.0;
    let mut cumulative_investment = 0.0;

    for m in months {
        cumulative_revenue += m.revenue;
        cumulative_investment += m.investment;
        if cumulative_revenue >= cumulative_investment {
            return BreakEven::Month(m.month);
        }
    }
    BreakEven::Never
}

/// Run the ROI projector.
pub fn project(inputs: &ProjectionInputs, benchmarks: &Benchmarks) -> Result<Projection> {
    let tier = Tier::for_budget(inputs.proposed_budget);
    let baseline = benchmarks.tier_range(tier)?.month6;
    let industry_multiplier = benchmarks.industry_multiplier(inputs.industry);

    let months: [MonthlyProjection; PROJECTION_MONTHS] = std::array::from_fn(|idx| {
        let month = idx as u8 + 1;
        let leads = month_leads(baseline, month, industry_multiplier);
        let clients = leads as f64 * inputs.close_fraction();
        MonthlyProjection {
            month,
            leads,
            clients,
            revenue: clients * inputs.client_value,
            investment: inputs.proposed_budget,
        }
    });

    let total_leads = months.iter().map(|m| u64::from(m.leads)).sum();
    let total_revenue: f64 = months.iter().map(|m| m.revenue).sum();
    let total_investment = inputs.proposed_budget * PROJECTION_MONTHS as f64;

    Ok(Projection {
        industry: inputs.industry,
        tier,
        baseline_leads: baseline,
        industry_multiplier,
        break_even: break_even_month(&months),
        months,
        total_leads,
        total_revenue,
        total_investment,
        roi_multiple: Ratio::of(total_revenue, total_investment),
        net_revenue: total_revenue - total_investment,
    })
}
