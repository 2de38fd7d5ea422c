//! Domain models for the population health data model
//!
//! The patient is the root entity and owns its clinical collections.
//! Referrals and encounter alerts are separate collections that reference
//! patients by id only.

pub mod care;
pub mod clinical;
pub mod encounter;
pub mod patient;
pub mod referral;
pub mod status;
pub mod types;
pub mod vocabulary;

// Re-export commonly used types
pub use care::{CareProgram, CareTransition, Milestone};
pub use clinical::{AbnormalResult, BehavioralAnomaly, CareGap, GuidelineAdherence, SafetyAlert};
pub use encounter::EncounterAlert;
pub use patient::Patient;
pub use referral::{Referral, ReferralCommunication};
pub use vocabulary::Vocabulary;
