//! Record-level status vocabularies
//!
//! Small lifecycle and qualitative label sets attached to individual
//! records. They are closed sets like the clinical vocabularies but are not
//! exposed as dashboard filters.

use pophealth_macros::Vocabulary;

/// Clinical impact of a care gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "clinical impact")]
pub enum ClinicalImpact {
    /// High impact
    High,
    /// Medium impact
    Medium,
    /// Low impact
    Low,
}

/// Work-queue priority of a care gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "gap priority")]
pub enum GapPriority {
    /// Critical priority
    Critical,
    /// High priority
    High,
    /// Medium priority
    Medium,
    /// Low priority
    Low,
}

/// Lifecycle of a care gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "gap status")]
pub enum GapStatus {
    /// Not started
    Pending,
    /// Being worked
    #[vocabulary(label = "In Progress")]
    InProgress,
    /// Closed
    Resolved,
}

/// Lifecycle of a safety alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "safety alert status")]
pub enum SafetyAlertStatus {
    /// Open alert
    Active,
    /// Addressed
    Resolved,
    /// Prescriber overrode the rule
    Overridden,
}

/// Impact of a guideline deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "impact level")]
pub enum ImpactLevel {
    /// High impact
    High,
    /// Moderate impact
    Moderate,
    /// Low impact
    Low,
}

/// Direction of an abnormal result relative to the previous value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "result trend")]
pub enum ResultTrend {
    /// Rising
    #[vocabulary(label = "up")]
    Up,
    /// Falling
    #[vocabulary(label = "down")]
    Down,
    /// Unchanged
    #[vocabulary(label = "stable")]
    Stable,
}

/// Trend of a behavioral pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "pattern trend")]
pub enum PatternTrend {
    /// Gradually worsening
    Declining,
    /// Unchanged
    Stable,
    /// Getting better
    Improving,
    /// Sudden deterioration
    #[vocabulary(label = "Rapid Drop")]
    RapidDrop,
}

/// Follow-up state of a behavioral flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "action status")]
pub enum ActionStatus {
    /// Not started
    Pending,
    /// Being worked
    #[vocabulary(label = "In Progress")]
    InProgress,
    /// Action taken
    Actioned,
    /// Booked
    Scheduled,
}

/// State of a care transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "transition status")]
pub enum TransitionStatus {
    /// Planned
    Scheduled,
    /// Past due
    Overdue,
    /// Done
    Complete,
    /// Not documented
    Missing,
}

/// Whether the discharge summary reached the next setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "discharge summary status")]
pub enum DischargeSummaryStatus {
    /// Delivered
    Sent,
    /// Never produced
    Missing,
    /// In preparation
    Pending,
}

/// Medication reconciliation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "medication reconciliation status")]
pub enum MedRecStatus {
    /// Reconciled
    Complete,
    /// Partially reconciled
    Incomplete,
    /// Not started
    #[vocabulary(label = "Not Started")]
    NotStarted,
}

/// State of a program milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "milestone status")]
pub enum MilestoneStatus {
    /// Done
    Completed,
    /// Outstanding
    Pending,
    /// Window passed
    Missed,
    /// Booked
    Scheduled,
}

/// Lifecycle of an encounter alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "encounter alert status")]
pub enum EncounterAlertStatus {
    /// Awaiting triage
    Pending,
    /// Being handled
    Active,
    /// Closed
    Resolved,
    /// Escalated to leadership
    Escalated,
}

/// Severity of a derived risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "risk factor severity")]
pub enum FactorSeverity {
    /// Severe
    Severe,
    /// Moderate
    Moderate,
    /// Mild
    Mild,
}

/// Direction of a derived risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "risk factor trend")]
pub enum FactorTrend {
    /// Getting worse
    Worsening,
    /// Unchanged
    Stable,
    /// Getting better
    Improving,
}

/// Priority of a derived risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "risk factor priority")]
pub enum FactorPriority {
    /// Immediate
    Critical,
    /// Soon
    High,
    /// Normal
    Medium,
    /// Routine review
    Routine,
}

/// Domain a derived risk factor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "risk factor category")]
pub enum FactorCategory {
    /// Clinical findings
    Clinical,
    /// Patient behavior
    Behavioral,
}
