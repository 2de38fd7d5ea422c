//! Algorithm implementations for the population health data model
//!
//! `population` generates the synthetic population, `metrics` derives the
//! per-view statistics and the analyzer breakdowns from it.

pub mod metrics;
pub mod population;
