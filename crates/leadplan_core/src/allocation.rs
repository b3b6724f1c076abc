//! Budget allocator
//!
//! Splits a monthly budget across channels from an industry's recommended
//! split skewed by a goal, then estimates leads, clients and ROI from the
//! industry's cost per lead and conversion rate.

use crate::error::{InputError, Result};
use crate::model::{
    AllocationInputs, Benchmarks, BudgetPlan, ChannelAllocation, ChannelWeights, FormField,
    IndustryProfile,
};
use crate::ratio::{Ratio, round_half_up};
use crate::recommendations::{RecommendationContext, recommend};

/// Apply goal modifiers to a base split and renormalize to 100%.
///
/// Returns one percentage per channel in display order. The caller must
/// ensure the modified weights do not all vanish; [`Benchmarks::validate`]
/// rejects tables where that can happen.
pub fn normalized_split(base: &ChannelWeights, modifiers: &ChannelWeights) -> ChannelWeights {
    let modified = ChannelWeights::new(
        base.seo * modifiers.seo,
        base.paid_ads * modifiers.paid_ads,
        base.content * modifiers.content,
        base.linkedin * modifiers.linkedin,
        base.other * modifiers.other,
    );
    let total = modified.sum();

    ChannelWeights::new(
        modified.seo / total * 100.0,
        modified.paid_ads / total * 100.0,
        modified.content / total * 100.0,
        modified.linkedin / total * 100.0,
        modified.other / total * 100.0,
    )
}

/// Monthly lead/client/ROI estimate for a budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadEstimate {
    pub expected_leads: u32,
    pub cost_per_lead: Ratio,
    pub expected_clients: u32,
    pub expected_revenue: f64,
    pub roi_percent: i64,
}

/// Estimate monthly leads, clients and ROI for a budget.
///
/// Fails with [`InputError::TooLarge`] when the budget or customer value
/// produce counts too large to report.
pub fn estimate_leads(
    profile: &IndustryProfile,
    monthly_budget: f64,
    customer_value: f64,
) -> std::result::Result<LeadEstimate, InputError> {
    let leads = round_half_up(monthly_budget / profile.average_cost_per_lead);
    if leads > u32::MAX as f64 {
        return Err(InputError::TooLarge {
            field: FormField::MonthlyBudget,
            value: monthly_budget,
            max: u32::MAX as f64 * profile.average_cost_per_lead,
        });
    }
    let expected_leads = leads as u32;
    let cost_per_lead = Ratio::of(monthly_budget, expected_leads as f64).rounded();
    let expected_clients = round_half_up(expected_leads as f64 * profile.conversion_rate) as u32;
    let expected_revenue = expected_clients as f64 * customer_value;

    // Spend that is not recovered reports 0% rather than a negative return
    let roi = if expected_revenue <= monthly_budget {
        0.0
    } else {
        round_half_up((expected_revenue - monthly_budget) / monthly_budget * 100.0)
    };
    if !expected_revenue.is_finite() || roi >= i64::MAX as f64 {
        return Err(InputError::TooLarge {
            field: FormField::CustomerValue,
            value: customer_value,
            max: i64::MAX as f64 / 100.0 * monthly_budget / expected_clients.max(1) as f64,
        });
    }

    Ok(LeadEstimate {
        expected_leads,
        cost_per_lead,
        expected_clients,
        expected_revenue,
        roi_percent: roi as i64,
    })
}

/// Run the budget allocator.
pub fn allocate(inputs: &AllocationInputs, benchmarks: &Benchmarks) -> Result<BudgetPlan> {
    let profile = benchmarks.profile(inputs.industry)?;
    let modifiers = benchmarks.goal_modifiers(inputs.goal)?;

    let split = normalized_split(&profile.channel_split, modifiers);
    let allocations = split
        .iter()
        .map(|(channel, percentage)| ChannelAllocation {
            channel,
            amount: inputs.monthly_budget * percentage / 100.0,
            percentage,
        })
        .collect();

    let estimate = estimate_leads(profile, inputs.monthly_budget, inputs.customer_value)?;

    let recommendations = recommend(&RecommendationContext {
        industry: inputs.industry,
        monthly_budget: inputs.monthly_budget,
        roi_percent: estimate.roi_percent,
        expected_clients: estimate.expected_clients,
    });

    Ok(BudgetPlan {
        industry: inputs.industry,
        goal: inputs.goal,
        monthly_budget: inputs.monthly_budget,
        customer_value: inputs.customer_value,
        allocations,
        expected_leads: estimate.expected_leads,
        cost_per_lead: estimate.cost_per_lead,
        expected_clients: estimate.expected_clients,
        expected_revenue: estimate.expected_revenue,
        roi_percent: estimate.roi_percent,
        recommendations,
    })
}
