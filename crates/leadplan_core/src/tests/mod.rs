//! Tests for the lead planning calculators
//!
//! Tests are organized by topic:
//! - `allocation` - Channel split normalization and lead/ROI estimates
//! - `recommendations` - Rule ordering and thresholds
//! - `projection` - Ramp curve, tiers and break-even
//! - `comparison` - Current vs. projected table and `N/A` handling
//! - `wizard` - Step validation and transitions
//! - `contact` - Contact form validation and simulated submission
//! - `benchmarks` - Built-in tables and table validation
//! - `builder_dsl` - Fluent builders

mod benchmarks;
mod comparison;
mod contact;
mod recommendations;
mod wizard;
