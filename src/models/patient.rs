//! Patient entity model
//!
//! The patient is the root of the data model. It owns every clinical
//! collection; no record is shared between patients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::models::care::{CareProgram, CareTransition};
use crate::models::clinical::{
    AbnormalResult, BehavioralAnomaly, CareGap, GuidelineAdherence, SafetyAlert,
};
use crate::models::types::{AgeBand, Condition, Gender, RiskLevel};

/// Core patient risk record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Patient identifier, e.g. `P10042`
    pub id: String,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Composite risk tier, always consistent with `risk_score`
    pub risk_level: RiskLevel,
    /// Composite risk score, 0 to 10 with one decimal
    pub risk_score: f64,
    /// Primary diagnoses
    pub primary_conditions: SmallVec<[Condition; 2]>,
    /// Number of comorbid conditions
    pub comorbidities_count: u32,
    /// Date of the last risk assessment
    pub last_assessment: NaiveDate,
    /// Medication adherence, 0 to 100
    pub medication_adherence: u32,
    /// Next scheduled appointment
    pub next_appointment: NaiveDate,
    /// Treating clinicians
    pub care_team: SmallVec<[String; 2]>,
    /// Social and clinical vulnerability markers
    pub vulnerability_factors: Vec<String>,
    /// Recent change in risk score
    pub trend: f64,
    /// Open care gaps
    pub active_gaps: Vec<CareGap>,
    /// Medication safety alerts
    pub safety_alerts: Vec<SafetyAlert>,
    /// Medication risk score, 0 to 10
    pub medication_risk_score: f64,
    /// Safety alert overrides in the last period
    pub override_frequency: u32,
    /// Protocol adherence records
    pub guideline_adherence: Vec<GuidelineAdherence>,
    /// Share of compliant guideline records, 0 to 100
    pub compliance_score: u32,
    /// Out-of-range findings
    pub abnormal_results: Vec<AbnormalResult>,
    /// Engagement deviations
    pub behavioral_anomalies: Vec<BehavioralAnomaly>,
    /// Engagement, 0 to 100
    pub engagement_score: u32,
    /// Behavioral risk tier, independent of `risk_level`
    pub behavioral_risk_tier: RiskLevel,
    /// Care setting transitions
    pub transitions: Vec<CareTransition>,
    /// Continuity of care, 0 to 100
    pub continuity_score: u32,
    /// Program enrollments
    pub care_programs: Vec<CareProgram>,
}

impl Patient {
    /// Engagement score below which a patient counts as high-risk engagement
    pub const LOW_ENGAGEMENT: u32 = 50;

    /// Whether the patient is in the Critical or High tier
    #[must_use]
    pub const fn is_high_risk(&self) -> bool {
        self.risk_level.is_high_risk()
    }

    /// At least three comorbidities and at least two primary conditions
    #[must_use]
    pub fn has_complex_needs(&self) -> bool {
        self.comorbidities_count >= 3 && self.primary_conditions.len() >= 2
    }

    /// Age band for the "age range" filter
    #[must_use]
    pub const fn age_band(&self) -> AgeBand {
        AgeBand::of_age(self.age)
    }

    /// Whether engagement is below the high-risk threshold
    #[must_use]
    pub const fn has_low_engagement(&self) -> bool {
        self.engagement_score < Self::LOW_ENGAGEMENT
    }
}
