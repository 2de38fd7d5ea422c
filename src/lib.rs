//! A Rust library for generating, filtering and aggregating population-health
//! patient risk data.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod navigation;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DisplayLimits, GeneratorConfig};
pub use error::{PopHealthError, Result};
pub use models::{
    AbnormalResult, BehavioralAnomaly, CareGap, CareProgram, CareTransition, EncounterAlert,
    GuidelineAdherence, Milestone, Patient, Referral, SafetyAlert, Vocabulary,
};

// Generation
pub use algorithm::population::{
    OrphanReport, Population, PopulationBuilder, ReferencePolicy, generate_test_population,
};

// Derived metrics
pub use algorithm::metrics::{Distribution, PatientRecord, flatten_records, percentage};

// Filtering capabilities
pub use filter::{FilterCriteria, FilterState, SearchTerm, Selection, apply_filter, display_page};

// Navigation
pub use navigation::{DetailView, NavigationState, Tab};
