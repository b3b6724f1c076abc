//! Calculator configuration
//!
//! Benchmark tables live in [`crate::model::Benchmarks`]; this module holds
//! the fluent builders that assemble validated calculator input.

mod builder;

pub use builder::{AllocationBuilder, ProjectionBuilder};
