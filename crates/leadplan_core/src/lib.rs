//! Marketing budget planning library
//!
//! This crate provides the computational core behind the lead planning tools.
//! It supports:
//! - Channel-by-channel budget allocation from industry benchmarks and a goal
//! - Monthly lead, client and ROI estimates with rule-based recommendations
//! - A 12-month ROI projection with a ramp-up curve and break-even detection
//! - A current-vs-projected comparison table with explicit `N/A` ratios
//! - The four-step projector wizard as a finite-state machine
//! - Contact-form validation with a simulated submission
//!
//! # Builder DSL
//!
//! ```ignore
//! use leadplan_core::config::{AllocationBuilder, ProjectionBuilder};
//! use leadplan_core::model::{AllocationGoal, Benchmarks, CloseRate, Industry};
//!
//! let plan = AllocationBuilder::new()
//!     .industry(Industry::Healthcare)
//!     .goal(AllocationGoal::Balanced)
//!     .monthly_budget(3_000.0)
//!     .customer_value(1_500.0)
//!     .allocate(Benchmarks::builtin())?;
//!
//! let projection = ProjectionBuilder::new()
//!     .industry(Industry::Recruitment)
//!     .close_rate(CloseRate::Typical)
//!     .client_value(2_000.0)
//!     .proposed_budget(6_000.0)
//!     .project(Benchmarks::builtin())?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod allocation;
pub mod comparison;
pub mod contact;
pub mod error;
pub mod format;
pub mod projection;
pub mod ratio;
pub mod recommendations;
pub mod wizard;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use allocation::allocate;
pub use comparison::compare;
pub use config::{AllocationBuilder, ProjectionBuilder};
pub use error::CalcError;
pub use projection::project;
pub use ratio::Ratio;
