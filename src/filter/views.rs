//! Per-view queries
//!
//! Each view owns a query holding only the predicates that view exposes.
//! A record passes when every active predicate passes. Patient-level views
//! filter patients; record-level views filter records flattened out of their
//! patients with [`flatten_records`](crate::algorithm::metrics::flatten_records).

use crate::algorithm::metrics::PatientRecord;
use crate::models::types::{
    AbnormalCategory, AbnormalResultStatus, AdherenceLevel, AgeBand, AlertType, AuthStatus,
    BehaviorType, CareSetting, ComplianceStatus, Condition, Department, EnrollmentStatus,
    GapType, Gender, GoalStatus, GuardrailType, GuidelineType, Hospital, MedicationClass,
    OverdueBand, ProgramType, ReferralStatus, ReferralUrgency, RiskLevel, Specialty,
    TransitionRisk, TransitionType,
};
use crate::models::{
    AbnormalResult, BehavioralAnomaly, CareProgram, CareTransition, EncounterAlert, Patient,
    Referral, Vocabulary,
};

use super::core::{FilterCriteria, SearchTerm, Selection};

/// Risk dashboard and population-level patient lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientQuery {
    /// Composite risk tier
    pub risk_level: Selection<RiskLevel>,
    /// Matches patient name or id
    pub search: SearchTerm,
    /// Age band
    pub age_band: Selection<AgeBand>,
    /// Gender
    pub gender: Selection<Gender>,
    /// Any primary condition
    pub condition: Selection<Condition>,
}

impl FilterCriteria<Patient> for PatientQuery {
    fn meets_criteria(&self, patient: &Patient) -> bool {
        self.risk_level.matches(&patient.risk_level)
            && self.age_band.matches(&patient.age_band())
            && self.gender.matches(&patient.gender)
            && self.condition.matches_any(&patient.primary_conditions)
            && self.search.matches_any(&[patient.name.as_str(), patient.id.as_str()])
    }
}

/// Care gap view
///
/// Gap type and time overdue must hold for the same gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareGapQuery {
    /// Type of any open gap
    pub gap_type: Selection<GapType>,
    /// Patient risk tier
    pub risk_level: Selection<RiskLevel>,
    /// Overdue band of any open gap
    pub time_overdue: Selection<OverdueBand>,
    /// Patient age band
    pub age_band: Selection<AgeBand>,
    /// Matches patient name or id
    pub search: SearchTerm,
}

impl FilterCriteria<Patient> for CareGapQuery {
    fn meets_criteria(&self, patient: &Patient) -> bool {
        let gap_filtered = self.gap_type.is_active() || self.time_overdue.is_active();
        let gap_matches = !gap_filtered
            || patient.active_gaps.iter().any(|gap| {
                self.gap_type.matches(&gap.gap_type)
                    && self.time_overdue.matches(&gap.overdue_band())
            });

        gap_matches
            && self.risk_level.matches(&patient.risk_level)
            && self.age_band.matches(&patient.age_band())
            && self.search.matches_any(&[patient.name.as_str(), patient.id.as_str()])
    }
}

/// Safety guardrail view
///
/// Guardrail type and medication class must hold for the same alert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafetyQuery {
    /// Patient risk tier
    pub risk_level: Selection<RiskLevel>,
    /// Guardrail type of any alert
    pub guardrail_type: Selection<GuardrailType>,
    /// Therapeutic class of any alert's medication
    pub medication_class: Selection<MedicationClass>,
    /// Matches patient name or id
    pub search: SearchTerm,
}

impl FilterCriteria<Patient> for SafetyQuery {
    fn meets_criteria(&self, patient: &Patient) -> bool {
        let alert_filtered = self.guardrail_type.is_active() || self.medication_class.is_active();
        let alert_matches = !alert_filtered
            || patient.safety_alerts.iter().any(|alert| {
                self.guardrail_type.matches(&alert.guardrail_type)
                    && self.medication_class.matches_any(alert.medication_class().as_ref())
            });

        self.risk_level.matches(&patient.risk_level)
            && alert_matches
            && self.search.matches_any(&[patient.name.as_str(), patient.id.as_str()])
    }
}

/// Guideline adherence view
///
/// The specialty selection is accepted but never narrows the view, since
/// guideline records carry no specialty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidelineQuery {
    /// Status of any guideline record
    pub compliance_status: Selection<ComplianceStatus>,
    /// Category of any guideline record
    pub guideline_type: Selection<GuidelineType>,
    /// Clinical specialty
    pub specialty: Selection<Specialty>,
    /// Matches patient name or id
    pub search: SearchTerm,
}

impl FilterCriteria<Patient> for GuidelineQuery {
    fn meets_criteria(&self, patient: &Patient) -> bool {
        if !self.search.matches_any(&[patient.name.as_str(), patient.id.as_str()]) {
            return false;
        }
        if !self.compliance_status.is_active() && !self.guideline_type.is_active() {
            return true;
        }
        patient.guideline_adherence.iter().any(|record| {
            self.compliance_status.matches(&record.status)
                && self.guideline_type.matches(&record.category)
        })
    }
}

/// Abnormal results view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbnormalResultQuery {
    /// Result category
    pub category: Selection<AbnormalCategory>,
    /// Result severity
    pub severity: Selection<RiskLevel>,
    /// Workflow status
    pub status: Selection<AbnormalResultStatus>,
    /// Matches patient name or test name
    pub search: SearchTerm,
}

impl FilterCriteria<PatientRecord<'_, AbnormalResult>> for AbnormalResultQuery {
    fn meets_criteria(&self, entry: &PatientRecord<'_, AbnormalResult>) -> bool {
        let result = entry.record;
        self.category.matches(&result.category)
            && self.severity.matches(&result.severity)
            && self.status.matches(&result.status)
            && self
                .search
                .matches_any(&[entry.patient.name.as_str(), result.test_name.as_str()])
    }
}

/// Behavioral anomaly view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehavioralQuery {
    /// Behavior type
    pub behavior_type: Selection<BehaviorType>,
    /// Flag severity
    pub severity: Selection<RiskLevel>,
    /// Matches patient name or behavior type
    pub search: SearchTerm,
}

impl FilterCriteria<PatientRecord<'_, BehavioralAnomaly>> for BehavioralQuery {
    fn meets_criteria(&self, entry: &PatientRecord<'_, BehavioralAnomaly>) -> bool {
        let flag = entry.record;
        self.behavior_type.matches(&flag.behavior_type)
            && self.severity.matches(&flag.severity)
            && self
                .search
                .matches_any(&[entry.patient.name.as_str(), flag.behavior_type.label()])
    }
}

/// Continuity of care view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinuityQuery {
    /// Destination setting
    pub care_setting: Selection<CareSetting>,
    /// Transition type
    pub transition_type: Selection<TransitionType>,
    /// Transition risk flag
    pub risk_flag: Selection<TransitionRisk>,
    /// Matches patient name
    pub search: SearchTerm,
}

impl FilterCriteria<PatientRecord<'_, CareTransition>> for ContinuityQuery {
    fn meets_criteria(&self, entry: &PatientRecord<'_, CareTransition>) -> bool {
        let transition = entry.record;
        self.care_setting.matches(&transition.to_setting)
            && self.transition_type.matches(&transition.transition_type)
            && self.risk_flag.matches(&transition.risk_flag)
            && self.search.matches_any(&[entry.patient.name.as_str()])
    }
}

/// Care program adherence view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramQuery {
    /// Program type
    pub program_type: Selection<ProgramType>,
    /// Enrollment status
    pub enrollment_status: Selection<EnrollmentStatus>,
    /// Goal status
    pub goal_status: Selection<GoalStatus>,
    /// Adherence band
    pub adherence_level: Selection<AdherenceLevel>,
    /// Matches patient name or program type
    pub search: SearchTerm,
}

impl FilterCriteria<PatientRecord<'_, CareProgram>> for ProgramQuery {
    fn meets_criteria(&self, entry: &PatientRecord<'_, CareProgram>) -> bool {
        let program = entry.record;
        self.program_type.matches(&program.program_type)
            && self.enrollment_status.matches(&program.status)
            && self.goal_status.matches(&program.goal_status)
            && self.adherence_level.matches(&program.adherence_level())
            && self
                .search
                .matches_any(&[entry.patient.name.as_str(), program.program_type.label()])
    }
}

/// Encounter and resourcing view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterQuery {
    /// Facility raising the alert
    pub facility: Selection<Hospital>,
    /// Department raising the alert
    pub department: Selection<Department>,
    /// Alert type
    pub alert_type: Selection<AlertType>,
    /// Matches patient name or alert id
    pub search: SearchTerm,
}

impl FilterCriteria<EncounterAlert> for EncounterQuery {
    fn meets_criteria(&self, alert: &EncounterAlert) -> bool {
        self.facility.matches(&alert.facility)
            && self.department.matches(&alert.department)
            && self.alert_type.matches(&alert.alert_type)
            && self.search.matches_any(&[alert.patient_name.as_str(), alert.id.as_str()])
    }
}

/// Referral and coordination view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralQuery {
    /// Receiving facility
    pub receiving_facility: Selection<Hospital>,
    /// Referral status
    pub status: Selection<ReferralStatus>,
    /// Referral urgency
    pub urgency: Selection<ReferralUrgency>,
    /// Target specialty
    pub specialty: Selection<Specialty>,
    /// Prior authorization status
    pub auth_status: Selection<AuthStatus>,
    /// Matches patient name or referral id
    pub search: SearchTerm,
}

impl FilterCriteria<Referral> for ReferralQuery {
    fn meets_criteria(&self, referral: &Referral) -> bool {
        self.receiving_facility.matches(&referral.receiving_facility)
            && self.status.matches(&referral.status)
            && self.urgency.matches(&referral.urgency)
            && self.specialty.matches(&referral.specialty)
            && self.auth_status.matches(&referral.auth_status)
            && self.search.matches_any(&[referral.patient_name.as_str(), referral.id.as_str()])
    }
}
