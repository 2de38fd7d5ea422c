//! Derived metrics
//!
//! Generic counting utilities, the per-view summary statistics built on top
//! of them, and the per-patient analyzer derivations.

pub mod analyzer;
pub mod distribution;
pub mod statistics;

pub use analyzer::{
    MilestoneProgress, RiskFactor, StepKind, WaterfallStep, abnormal_waterfall,
    care_gap_waterfall, milestone_progress, risk_factors, safety_waterfall,
};
pub use distribution::{
    Distribution, DistributionEntry, PatientRecord, flatten_records, format_mean, mean,
    percentage, rounded_percent,
};
pub use statistics::{
    AbnormalResultStats, BehavioralStats, CareGapStats, ContinuityStats, DashboardStats,
    EncounterStats, GuidelineStats, PopulationOverview, ProgramStats, ReferralStats,
    SafetyStats, TrendSnapshot,
};
