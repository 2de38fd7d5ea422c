//! Care transitions and structured care programs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::status::{
    DischargeSummaryStatus, MedRecStatus, MilestoneStatus, TransitionStatus,
};
use crate::models::types::{
    AdherenceLevel, CareSetting, EnrollmentStatus, GoalStatus, ProgramType, TransitionRisk,
    TransitionType,
};

/// A movement between care settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTransition {
    /// Transition identifier
    pub id: String,
    /// Kind of transition
    #[serde(rename = "type")]
    pub transition_type: TransitionType,
    /// Setting the patient leaves
    pub from_setting: CareSetting,
    /// Setting the patient enters
    pub to_setting: CareSetting,
    /// Lifecycle status
    pub status: TransitionStatus,
    /// Whether the discharge summary reached the next provider
    pub discharge_summary_status: DischargeSummaryStatus,
    /// Medication reconciliation progress
    pub med_rec_status: MedRecStatus,
    /// Scheduled follow-up
    pub follow_up_date: NaiveDate,
    /// Transition risk flag
    pub risk_flag: TransitionRisk,
    /// Handoff completeness, 0 to 100
    pub coordination_score: u32,
}

impl CareTransition {
    /// Whether the transition is flagged high risk
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.risk_flag == TransitionRisk::High
    }
}

/// A step of a care program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Milestone identifier, unique within its program
    pub id: String,
    /// Milestone name
    pub name: String,
    /// Completion status
    pub status: MilestoneStatus,
    /// Completion date, set only for completed milestones with a recorded date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    /// Weight of the milestone in the program outcome
    pub impact_score: u32,
}

/// Enrollment in a structured clinical program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareProgram {
    /// Program identifier
    pub id: String,
    /// Kind of program
    #[serde(rename = "type")]
    pub program_type: ProgramType,
    /// Enrollment date
    pub enrollment_date: NaiveDate,
    /// Enrollment status
    pub status: EnrollmentStatus,
    /// Adherence to the program plan, 0 to 100
    pub adherence_percent: u32,
    /// Ordered milestones
    pub milestones: Vec<Milestone>,
    /// Progress toward the program goal
    pub goal_status: GoalStatus,
    /// Session participation, 0 to 100
    pub participation_rate: u32,
    /// Most recent contact
    pub last_interaction: NaiveDate,
}

impl CareProgram {
    /// Adherence percentage below which a program is at risk
    pub const AT_RISK_ADHERENCE: u32 = 50;

    /// Adherence band of this program
    #[must_use]
    pub const fn adherence_level(&self) -> AdherenceLevel {
        AdherenceLevel::from_percent(self.adherence_percent)
    }

    /// At risk by goal status or by adherence below 50%
    #[must_use]
    pub fn is_at_risk(&self) -> bool {
        self.goal_status == GoalStatus::AtRisk || self.adherence_percent < Self::AT_RISK_ADHERENCE
    }

    /// Number of completed milestones
    #[must_use]
    pub fn completed_milestones(&self) -> usize {
        self.milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count()
    }
}
