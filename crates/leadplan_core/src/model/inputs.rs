//! Validated calculator inputs
//!
//! Constructors reject non-finite and out-of-range numbers so that the
//! calculators never see `NaN`.

use serde::{Deserialize, Serialize};

use super::fields::FormField;
use super::ids::{AllocationGoal, Industry};
use crate::error::{InputError, require_non_negative, require_percent, require_positive};

/// Input to the budget allocator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationInputs {
    pub industry: Industry,
    pub goal: AllocationGoal,
    pub monthly_budget: f64,
    pub customer_value: f64,
}

impl AllocationInputs {
    pub fn new(
        industry: Industry,
        goal: AllocationGoal,
        monthly_budget: f64,
        customer_value: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            industry,
            goal,
            monthly_budget: require_positive(FormField::MonthlyBudget, monthly_budget)?,
            customer_value: require_positive(FormField::CustomerValue, customer_value)?,
        })
    }
}

/// Input to the ROI projector and its comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    pub industry: Industry,
    /// Percent of leads that close, e.g. `20.0`, at most 100
    pub close_rate: f64,
    pub client_value: f64,
    pub proposed_budget: f64,
    /// What the business spends today; zero is allowed
    pub current_budget: f64,
    pub current_leads: u32,
}

impl ProjectionInputs {
    pub fn new(
        industry: Industry,
        close_rate: f64,
        client_value: f64,
        proposed_budget: f64,
        current_budget: f64,
        current_leads: u32,
    ) -> Result<Self, InputError> {
        Ok(Self {
            industry,
            close_rate: require_percent(FormField::CloseRate, close_rate)?,
            client_value: require_positive(FormField::ClientValue, client_value)?,
            proposed_budget: require_positive(FormField::ProposedBudget, proposed_budget)?,
            current_budget: require_non_negative(FormField::CurrentBudget, current_budget)?,
            current_leads,
        })
    }

    /// Close rate as a fraction
    pub fn close_fraction(&self) -> f64 {
        self.close_rate / 100.0
    }
}
