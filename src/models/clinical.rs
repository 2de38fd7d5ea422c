//! Clinical findings owned by a patient
//!
//! Care gaps, safety alerts, guideline adherence records, abnormal results
//! and behavioral anomalies. Each record belongs to exactly one patient.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::status::{
    ActionStatus, ClinicalImpact, GapPriority, GapStatus, ImpactLevel, PatternTrend,
    ResultTrend, SafetyAlertStatus,
};
use crate::models::types::{
    AbnormalCategory, AbnormalResultStatus, BehaviorType, ComplianceStatus, GapType,
    GuardrailType, GuidelineType, MedicationClass, OverdueBand, RiskLevel,
};

/// An unmet clinical action item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGap {
    /// Gap identifier
    pub id: String,
    /// Kind of gap
    #[serde(rename = "type")]
    pub gap_type: GapType,
    /// Free-text description
    pub detail: String,
    /// Days since the action became due
    pub days_overdue: u32,
    /// Qualitative clinical impact
    pub clinical_impact: ClinicalImpact,
    /// Lifecycle status
    pub status: GapStatus,
    /// Responsible clinician
    pub assigned_to: String,
    /// Work priority
    pub priority: GapPriority,
    /// When the action was last performed, if ever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_date: Option<NaiveDate>,
    /// Contribution to the patient's composite risk, 0 to 10
    pub risk_impact_score: f64,
}

impl CareGap {
    /// Days overdue beyond which a gap counts as critical
    pub const CRITICAL_OVERDUE_DAYS: u32 = 90;

    /// Critical by priority or by being overdue for more than 90 days
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.priority == GapPriority::Critical || self.days_overdue > Self::CRITICAL_OVERDUE_DAYS
    }

    /// Overdue band for the "time overdue" filter
    #[must_use]
    pub const fn overdue_band(&self) -> OverdueBand {
        OverdueBand::of_days(self.days_overdue)
    }
}

/// A medication safety violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAlert {
    /// Alert identifier
    pub id: String,
    /// Guardrail that fired
    #[serde(rename = "type")]
    pub guardrail_type: GuardrailType,
    /// Severity tier
    pub severity: RiskLevel,
    /// Implicated medication
    pub medication: String,
    /// Description of the conflict
    pub conflict: String,
    /// Date the alert was raised
    pub detected_on: NaiveDate,
    /// Prescribing provider
    pub provider: String,
    /// Contribution to the patient's composite risk, 0 to 10
    pub risk_impact: f64,
    /// Lifecycle status
    pub status: SafetyAlertStatus,
    /// Suggested remediation
    pub recommendation: String,
}

impl SafetyAlert {
    /// Therapeutic class of the implicated medication, if it has one
    #[must_use]
    pub fn medication_class(&self) -> Option<MedicationClass> {
        MedicationClass::of_medication(&self.medication)
    }
}

/// Compliance against a named clinical protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineAdherence {
    /// Record identifier
    pub id: String,
    /// Protocol name
    pub protocol: String,
    /// Guideline category
    pub category: GuidelineType,
    /// Compliance status
    pub status: ComplianceStatus,
    /// Kind of deviation, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation_type: Option<String>,
    /// Date the protocol step was due
    pub due_date: NaiveDate,
    /// Days past the due date
    pub days_overdue: u32,
    /// Impact of non-adherence
    pub impact_level: ImpactLevel,
    /// What the protocol requires
    pub required_action: String,
    /// What was actually done, if anything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_action: Option<String>,
    /// Evidence citation
    pub evidence_source: String,
    /// Consequence of non-adherence
    pub risk_of_non_adherence: String,
}

/// An out-of-range clinical finding
///
/// `value` and `normal_range` are display strings, not structured units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbnormalResult {
    /// Result identifier
    pub id: String,
    /// Result category
    pub category: AbnormalCategory,
    /// Test name
    pub test_name: String,
    /// Observed value
    pub value: String,
    /// Reference range
    pub normal_range: String,
    /// Severity tier
    pub severity: RiskLevel,
    /// When the result was recorded
    pub timestamp: NaiveDateTime,
    /// Lifecycle status
    pub status: AbnormalResultStatus,
    /// Responsible clinician
    pub assigned_to: String,
    /// Direction of the value over time
    pub trend: ResultTrend,
    /// Conflict with the current care plan, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_conflict: Option<String>,
    /// Contribution to the patient's composite risk, 0 to 10
    pub impact_score: f64,
}

impl AbnormalResult {
    /// Whether the result is critical
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == RiskLevel::Critical
    }
}

/// An engagement or adherence deviation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralAnomaly {
    /// Anomaly identifier
    pub id: String,
    /// Kind of behavior
    #[serde(rename = "type")]
    pub behavior_type: BehaviorType,
    /// Severity tier
    pub severity: RiskLevel,
    /// Direction of the pattern
    pub pattern_trend: PatternTrend,
    /// Days since the last contact with the patient
    pub last_contact_days: u32,
    /// Suggested intervention
    pub recommended_action: String,
    /// Intervention status
    pub status: ActionStatus,
    /// Contribution to behavioral risk, 0 to 15
    pub impact_score: f64,
    /// Free-text description
    pub details: String,
}

impl BehavioralAnomaly {
    /// Last contact as shown to users, e.g. "5 days ago"
    #[must_use]
    pub fn last_contact(&self) -> String {
        match self.last_contact_days {
            1 => "1 day ago".to_string(),
            days => format!("{days} days ago"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(priority: GapPriority, days_overdue: u32) -> CareGap {
        CareGap {
            id: "G0".to_string(),
            gap_type: GapType::Vaccine,
            detail: "Influenza Overdue".to_string(),
            days_overdue,
            clinical_impact: ClinicalImpact::High,
            status: GapStatus::Pending,
            assigned_to: "Dr. Kumar".to_string(),
            priority,
            last_completed_date: None,
            risk_impact_score: 1.5,
        }
    }

    #[test]
    fn test_gap_criticality() {
        assert!(gap(GapPriority::Critical, 0).is_critical());
        assert!(gap(GapPriority::Low, 91).is_critical());
        assert!(!gap(GapPriority::Low, 90).is_critical());
    }

    #[test]
    fn test_gap_serializes_camel_case() {
        let json = serde_json::to_value(gap(GapPriority::High, 12)).unwrap();
        assert_eq!(json["type"], "Vaccine");
        assert_eq!(json["daysOverdue"], 12);
        assert_eq!(json["riskImpactScore"], 1.5);
        assert!(json.get("lastCompletedDate").is_none());
    }
}
