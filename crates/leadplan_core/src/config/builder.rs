//! Calculator Builders
//!
//! Fluent builders for the two calculators. Missing values are reported as
//! [`InputError::Missing`] when the builder is finished, and numeric values
//! go through the same validation as the input constructors.
//!
//! # Example
//!
//! ```ignore
//! use leadplan_core::config::{AllocationBuilder, ProjectionBuilder};
//! use leadplan_core::model::{AllocationGoal, Benchmarks, CloseRate, Industry};
//!
//! let plan = AllocationBuilder::new()
//!     .industry(Industry::OtherB2b)
//!     .goal(AllocationGoal::LeadGeneration)
//!     .monthly_budget(4_000.0)
//!     .customer_value(2_500.0)
//!     .allocate(Benchmarks::builtin())?;
//!
//! let report = ProjectionBuilder::new()
//!     .industry(Industry::Logistics)
//!     .close_rate(CloseRate::High)
//!     .client_value(8_000.0)
//!     .proposed_budget(4_500.0)
//!     .current(2_000.0, 6)
//!     .report(Benchmarks::builtin())?;
//! ```

use crate::allocation::allocate;
use crate::comparison::{ProjectionReport, report};
use crate::error::{InputError, Result};
use crate::model::{
    AllocationGoal, AllocationInputs, Benchmarks, BudgetPlan, CloseRate, FormField, Industry,
    Projection, ProjectionInputs,
};
use crate::projection::project;

/// Builder for budget allocator input
#[derive(Debug, Clone, Default)]
pub struct AllocationBuilder {
    industry: Option<Industry>,
    goal: Option<AllocationGoal>,
    monthly_budget: Option<f64>,
    customer_value: Option<f64>,
}

impl AllocationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn goal(mut self, goal: AllocationGoal) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn monthly_budget(mut self, amount: f64) -> Self {
        self.monthly_budget = Some(amount);
        self
    }

    pub fn customer_value(mut self, amount: f64) -> Self {
        self.customer_value = Some(amount);
        self
    }

    pub fn build(self) -> std::result::Result<AllocationInputs, InputError> {
        AllocationInputs::new(
            self.industry.ok_or(InputError::Missing(FormField::Industry))?,
            // Balanced leaves the industry split untouched
            self.goal.unwrap_or(AllocationGoal::Balanced),
            self.monthly_budget
                .ok_or(InputError::Missing(FormField::MonthlyBudget))?,
            self.customer_value
                .ok_or(InputError::Missing(FormField::CustomerValue))?,
        )
    }

    /// Build and run the allocator
    pub fn allocate(self, benchmarks: &Benchmarks) -> Result<BudgetPlan> {
        let inputs = self.build()?;
        allocate(&inputs, benchmarks)
    }
}

/// Builder for ROI projector input
#[derive(Debug, Clone, Default)]
pub struct ProjectionBuilder {
    industry: Option<Industry>,
    close_rate: Option<f64>,
    client_value: Option<f64>,
    proposed_budget: Option<f64>,
    current_budget: f64,
    current_leads: u32,
}

impl ProjectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn close_rate(mut self, rate: CloseRate) -> Self {
        self.close_rate = Some(rate.percent());
        self
    }

    /// Close rate in percent for values outside the radio options
    pub fn close_rate_percent(mut self, percent: f64) -> Self {
        self.close_rate = Some(percent);
        self
    }

    pub fn client_value(mut self, amount: f64) -> Self {
        self.client_value = Some(amount);
        self
    }

    pub fn proposed_budget(mut self, amount: f64) -> Self {
        self.proposed_budget = Some(amount);
        self
    }

    /// Current monthly spend and leads, used by the comparison table
    pub fn current(mut self, budget: f64, leads: u32) -> Self {
        self.current_budget = budget;
        self.current_leads = leads;
        self
    }

    pub fn build(self) -> std::result::Result<ProjectionInputs, InputError> {
        ProjectionInputs::new(
            self.industry.ok_or(InputError::Missing(FormField::Industry))?,
            self.close_rate.ok_or(InputError::Missing(FormField::CloseRate))?,
            self.client_value
                .ok_or(InputError::Missing(FormField::ClientValue))?,
            self.proposed_budget
                .ok_or(InputError::Missing(FormField::ProposedBudget))?,
            self.current_budget,
            self.current_leads,
        )
    }

    pub fn project(self, benchmarks: &Benchmarks) -> Result<Projection> {
        let inputs = self.build()?;
        project(&inputs, benchmarks)
    }

    /// Build, project and compare against current figures
    pub fn report(self, benchmarks: &Benchmarks) -> Result<ProjectionReport> {
        let inputs = self.build()?;
        report(&inputs, benchmarks)
    }
}
