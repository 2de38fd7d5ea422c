//! Population generation
//!
//! This module synthesizes patients and the satellite referral and
//! encounter alert collections, and checks the references between them.

pub mod builder;
pub mod catalog;
pub mod integrity;

// Re-export commonly used items
pub use builder::{
    Population, PopulationBuilder, draw_risk, generate_encounter_alerts, generate_patients,
    generate_referrals, generate_test_population,
};
pub use integrity::{OrphanReport, PatientReference, ReferencePolicy};
