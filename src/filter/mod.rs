//! Filtering of patients and flattened records
//!
//! Views narrow their records with typed queries built from
//! [`Selection`] and [`SearchTerm`] predicates. The flat [`FilterState`]
//! converts into those queries.

pub mod core;
pub mod state;
pub mod views;

pub use self::core::{FilterCriteria, SearchTerm, Selection, apply_filter, display_page};
pub use self::state::FilterState;
pub use self::views::{
    AbnormalResultQuery, BehavioralQuery, CareGapQuery, ContinuityQuery, EncounterQuery,
    GuidelineQuery, PatientQuery, ProgramQuery, ReferralQuery, SafetyQuery,
};
