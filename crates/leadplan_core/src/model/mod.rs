mod benchmarks;
mod fields;
mod ids;
mod inputs;
mod results;

pub use benchmarks::{
    Benchmarks, ChannelWeights, IndustryProfile, MAX_INDUSTRY_MULTIPLIER, MAX_TIER_LEADS,
    TierLeadRange,
};
pub use fields::FormField;
pub use ids::{AllocationGoal, Channel, CloseRate, GrowthGoal, Industry, LeadSource, Tier};
pub use inputs::{AllocationInputs, ProjectionInputs};
pub use results::{
    BreakEven, BudgetPlan, ChannelAllocation, MonthlyProjection, PROJECTION_MONTHS, Projection,
    QuarterSummary, Recommendation, RecommendationCategory,
};
