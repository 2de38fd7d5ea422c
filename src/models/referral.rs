//! Referral entity model
//!
//! Referrals are generated independently of patients and point at them only
//! through `patient_id`, which may not resolve.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::types::{AuthStatus, Hospital, ReferralStatus, ReferralUrgency, Specialty};

/// A message on a referral's coordination thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCommunication {
    /// Message identifier, unique within the referral
    pub id: String,
    /// When the message was sent
    pub timestamp: NaiveDateTime,
    /// Sender
    pub from: String,
    /// Message body
    pub message: String,
}

/// A referral to a receiving facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    /// Referral identifier, e.g. `R-89452`
    pub id: String,
    /// Referenced patient, not guaranteed to exist
    pub patient_id: String,
    /// Patient name as recorded on the referral
    pub patient_name: String,
    /// Patient age as recorded on the referral
    pub patient_age: u32,
    /// Referring clinician
    pub referring_provider: String,
    /// Requested specialty
    pub specialty: Specialty,
    /// Urgency
    pub urgency: ReferralUrgency,
    /// Lifecycle status
    pub status: ReferralStatus,
    /// Insurance authorization status
    pub auth_status: AuthStatus,
    /// Days since the referral was opened
    pub days_open: u32,
    /// Appointment date, once scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    /// Facility receiving the patient
    pub receiving_facility: Hospital,
    /// Coordinator handling the referral
    pub care_coordinator: String,
    /// Messages exchanged so far
    pub message_count: u32,
    /// Documentation readiness, 0 to 100
    pub readiness_score: u32,
    /// Reason for referral
    pub reason: String,
    /// Clinical summary
    pub clinical_summary: String,
    /// Coordination thread
    pub communications: Vec<ReferralCommunication>,
}

impl Referral {
    /// Urgent or STAT
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        matches!(self.urgency, ReferralUrgency::Urgent | ReferralUrgency::Stat)
    }

    /// Authorization still outstanding
    #[must_use]
    pub fn is_pending_auth(&self) -> bool {
        self.auth_status == AuthStatus::Pending
    }
}
