//! Encounter and resourcing alerts

use serde::{Deserialize, Serialize};

use crate::models::status::EncounterAlertStatus;
use crate::models::types::{AlertType, Department, Hospital, RiskLevel};

/// An operational alert raised at a facility
///
/// Like referrals, alerts reference patients only by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterAlert {
    /// Alert identifier, e.g. `A8721`
    pub id: String,
    /// Referenced patient, not guaranteed to exist
    pub patient_id: String,
    /// Patient name as recorded on the alert
    pub patient_name: String,
    /// Facility raising the alert
    pub facility: Hospital,
    /// Department raising the alert
    pub department: Department,
    /// Kind of alert
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Severity tier
    pub severity: RiskLevel,
    /// Response window, e.g. "<24 hrs"
    pub time_sensitive: String,
    /// Resource under pressure
    pub resource_impact: String,
    /// Hours since the alert was triggered
    pub triggered_hours_ago: u32,
    /// Owner of the alert
    pub assigned_to: String,
    /// Lifecycle status
    pub status: EncounterAlertStatus,
    /// Acuity, 0 to 99
    pub acuity_score: u32,
    /// Triage notes
    pub triage_notes: String,
}

impl EncounterAlert {
    /// Whether the alert still needs attention
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != EncounterAlertStatus::Resolved
    }

    /// Trigger time as shown to users, e.g. "3h ago"
    #[must_use]
    pub fn triggered(&self) -> String {
        format!("{}h ago", self.triggered_hours_ago)
    }
}
