//! Flat dashboard filter record
//!
//! `FilterState` is the single shared bag of dropdown values the dashboard
//! keeps. It is retained as an input format only; views never read it
//! directly but convert it into their typed query first.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Vocabulary;
use crate::models::types::{AgeBand, Hospital, OverdueBand, RiskLevel};

use super::core::{SearchTerm, Selection};
use super::views::{
    AbnormalResultQuery, BehavioralQuery, CareGapQuery, ContinuityQuery, EncounterQuery,
    GuidelineQuery, PatientQuery, ProgramQuery, ReferralQuery, SafetyQuery,
};

/// Branch list offered while no hospital is selected
pub const ALL_BRANCHES: &[&str] = &["All Branches"];

/// Every dropdown and the search box of the dashboard, as raw strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Facility
    pub hospital: String,
    /// Facility branch
    pub branch: String,
    /// Patient gender
    pub gender: String,
    /// Patient age band
    pub age_range: String,
    /// Risk tier
    pub risk_level: String,
    /// Primary condition
    pub condition_type: String,
    /// Care gap type
    pub gap_type: String,
    /// Care gap overdue band
    pub time_overdue: String,
    /// Safety guardrail type
    pub guardrail_type: String,
    /// Medication class of a safety alert
    pub medication_class: String,
    /// Guideline specialty
    pub specialty: String,
    /// Guideline compliance status
    pub compliance_status: String,
    /// Guideline category
    pub guideline_type: String,
    /// Abnormal result category
    pub abnormal_category: String,
    /// Abnormal result status
    pub abnormal_status: String,
    /// Behavior type
    pub behavior_type: String,
    /// Behavioral flag severity
    pub behavior_severity: String,
    /// Transition destination setting
    pub care_setting: String,
    /// Transition type
    pub transition_type: String,
    /// Transition risk flag
    pub continuity_risk: String,
    /// Care program type
    pub program_type: String,
    /// Program enrollment status
    pub enrollment_status: String,
    /// Program adherence band
    pub adherence_level: String,
    /// Time enrolled in a program
    pub time_in_program: String,
    /// Program goal status
    pub goal_achievement: String,
    /// Encounter alert type
    pub alert_type: String,
    /// Encounter department
    pub department: String,
    /// Encounter provider type
    pub provider_type: String,
    /// Reporting window
    pub time_window: String,
    /// Referral status
    pub referral_status: String,
    /// Referral urgency
    pub referral_urgency: String,
    /// Referral specialty
    pub referral_specialty: String,
    /// Referral authorization status
    pub referral_auth: String,
    /// Free-text search
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        let all = || "All".to_string();
        Self {
            hospital: "All Hospitals".to_string(),
            branch: "All Branches".to_string(),
            gender: "All Genders".to_string(),
            age_range: "All Ages".to_string(),
            risk_level: "All Levels".to_string(),
            condition_type: "All Conditions".to_string(),
            gap_type: all(),
            time_overdue: all(),
            guardrail_type: all(),
            medication_class: all(),
            specialty: "All Specialties".to_string(),
            compliance_status: "All Statuses".to_string(),
            guideline_type: "All Types".to_string(),
            abnormal_category: all(),
            abnormal_status: all(),
            behavior_type: all(),
            behavior_severity: "All Levels".to_string(),
            care_setting: all(),
            transition_type: all(),
            continuity_risk: all(),
            program_type: "All Programs".to_string(),
            enrollment_status: all(),
            adherence_level: all(),
            time_in_program: all(),
            goal_achievement: all(),
            alert_type: all(),
            department: "All Departments".to_string(),
            provider_type: all(),
            time_window: "Last 30 Days".to_string(),
            referral_status: all(),
            referral_urgency: all(),
            referral_specialty: "All Specialties".to_string(),
            referral_auth: all(),
            search: String::new(),
        }
    }
}

impl FilterState {
    fn search_term(&self) -> SearchTerm {
        SearchTerm::new(&self.search)
    }

    /// Query of the risk dashboard
    pub fn patient_query(&self) -> Result<PatientQuery> {
        Ok(PatientQuery {
            risk_level: self.risk_level.parse()?,
            search: self.search_term(),
            age_band: Selection::parse_with(&self.age_range, AgeBand::parse_loose)?,
            gender: self.gender.parse()?,
            condition: self.condition_type.parse()?,
        })
    }

    /// Query of the care gap view
    pub fn care_gap_query(&self) -> Result<CareGapQuery> {
        Ok(CareGapQuery {
            gap_type: self.gap_type.parse()?,
            risk_level: self.risk_level.parse()?,
            time_overdue: Selection::parse_with(&self.time_overdue, OverdueBand::parse_loose)?,
            age_band: Selection::parse_with(&self.age_range, AgeBand::parse_loose)?,
            search: self.search_term(),
        })
    }

    /// Query of the safety guardrail view
    pub fn safety_query(&self) -> Result<SafetyQuery> {
        Ok(SafetyQuery {
            risk_level: self.risk_level.parse()?,
            guardrail_type: self.guardrail_type.parse()?,
            medication_class: self.medication_class.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the guideline adherence view
    pub fn guideline_query(&self) -> Result<GuidelineQuery> {
        Ok(GuidelineQuery {
            compliance_status: self.compliance_status.parse()?,
            guideline_type: self.guideline_type.parse()?,
            specialty: self.specialty.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the abnormal results view
    pub fn abnormal_result_query(&self) -> Result<AbnormalResultQuery> {
        Ok(AbnormalResultQuery {
            category: self.abnormal_category.parse()?,
            severity: self.risk_level.parse()?,
            status: self.abnormal_status.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the behavioral anomaly view
    ///
    /// The dedicated severity dropdown wins; the shared risk level applies
    /// while it is left at its sentinel.
    pub fn behavioral_query(&self) -> Result<BehavioralQuery> {
        let severity = if RiskLevel::is_sentinel(&self.behavior_severity) {
            &self.risk_level
        } else {
            &self.behavior_severity
        };

        Ok(BehavioralQuery {
            behavior_type: self.behavior_type.parse()?,
            severity: severity.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the continuity of care view
    pub fn continuity_query(&self) -> Result<ContinuityQuery> {
        Ok(ContinuityQuery {
            care_setting: self.care_setting.parse()?,
            transition_type: self.transition_type.parse()?,
            risk_flag: self.continuity_risk.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the care program adherence view
    pub fn program_query(&self) -> Result<ProgramQuery> {
        Ok(ProgramQuery {
            program_type: self.program_type.parse()?,
            enrollment_status: self.enrollment_status.parse()?,
            goal_status: self.goal_achievement.parse()?,
            adherence_level: self.adherence_level.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the encounter and resourcing view
    pub fn encounter_query(&self) -> Result<EncounterQuery> {
        Ok(EncounterQuery {
            facility: self.hospital.parse()?,
            department: self.department.parse()?,
            alert_type: self.alert_type.parse()?,
            search: self.search_term(),
        })
    }

    /// Query of the referral and coordination view
    pub fn referral_query(&self) -> Result<ReferralQuery> {
        Ok(ReferralQuery {
            receiving_facility: self.hospital.parse()?,
            status: self.referral_status.parse()?,
            urgency: self.referral_urgency.parse()?,
            specialty: self.referral_specialty.parse()?,
            auth_status: self.referral_auth.parse()?,
            search: self.search_term(),
        })
    }

    /// Branches offered for the selected hospital
    pub fn branch_options(&self) -> Result<&'static [&'static str]> {
        let hospital: Selection<Hospital> = self.hospital.parse()?;
        Ok(match hospital {
            Selection::All => ALL_BRANCHES,
            Selection::Only(hospital) => hospital.branches(),
        })
    }

    /// Select a hospital and reset the branch to its first option
    pub fn set_hospital(&mut self, hospital: Selection<Hospital>) {
        self.hospital = hospital.label().to_string();
        self.branch = match hospital {
            Selection::All => ALL_BRANCHES[0],
            Selection::Only(hospital) => hospital.branches().first().copied().unwrap_or("All Branches"),
        }
        .to_string();
        debug!("Hospital set to {}, branch {}", self.hospital, self.branch);
    }

    /// Reset every field to its sentinel
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PopHealthError;
    use crate::models::types::{BehaviorType, Gender};

    #[test]
    fn test_defaults_are_no_ops() {
        let state = FilterState::default();
        assert_eq!(state.patient_query().unwrap(), PatientQuery::default());
        assert_eq!(state.care_gap_query().unwrap(), CareGapQuery::default());
        assert_eq!(state.safety_query().unwrap(), SafetyQuery::default());
        assert_eq!(state.guideline_query().unwrap(), GuidelineQuery::default());
        assert_eq!(state.abnormal_result_query().unwrap(), AbnormalResultQuery::default());
        assert_eq!(state.behavioral_query().unwrap(), BehavioralQuery::default());
        assert_eq!(state.continuity_query().unwrap(), ContinuityQuery::default());
        assert_eq!(state.program_query().unwrap(), ProgramQuery::default());
        assert_eq!(state.encounter_query().unwrap(), EncounterQuery::default());
        assert_eq!(state.referral_query().unwrap(), ReferralQuery::default());
    }

    #[test]
    fn test_labels_convert_to_selections() {
        let state = FilterState {
            gender: "Female".to_string(),
            age_range: "19-40 years".to_string(),
            behavior_type: "Appointment No-Shows".to_string(),
            ..FilterState::default()
        };
        let query = state.patient_query().unwrap();
        assert_eq!(query.gender, Selection::Only(Gender::Female));
        assert_eq!(query.age_band, Selection::Only(AgeBand::YoungAdult));
        assert_eq!(
            state.behavioral_query().unwrap().behavior_type,
            Selection::Only(BehaviorType::NoShow)
        );
    }

    #[test]
    fn test_care_gap_age_range_accepts_en_dash() {
        let state = FilterState {
            age_range: "41–65".to_string(),
            search: "Hassan".to_string(),
            ..FilterState::default()
        };
        let query = state.care_gap_query().unwrap();
        assert_eq!(query.age_band, Selection::Only(AgeBand::MiddleAged));
        assert_eq!(query.search, SearchTerm::new("hassan"));
        assert_eq!(state.safety_query().unwrap().search, query.search);
        assert_eq!(state.guideline_query().unwrap().search, query.search);
    }

    #[test]
    fn test_behavior_severity_overrides_risk_level() {
        let state = FilterState {
            risk_level: "Low".to_string(),
            ..FilterState::default()
        };
        assert_eq!(
            state.behavioral_query().unwrap().severity,
            Selection::Only(RiskLevel::Low)
        );

        let state = FilterState {
            risk_level: "Low".to_string(),
            behavior_severity: "Critical".to_string(),
            ..FilterState::default()
        };
        assert_eq!(
            state.behavioral_query().unwrap().severity,
            Selection::Only(RiskLevel::Critical)
        );
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let state = FilterState {
            risk_level: "Severe".to_string(),
            ..FilterState::default()
        };
        assert!(matches!(
            state.patient_query(),
            Err(PopHealthError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn test_branch_options_follow_hospital() {
        let mut state = FilterState::default();
        assert_eq!(state.branch_options().unwrap(), ALL_BRANCHES);

        state.set_hospital(Selection::Only(Hospital::KingFahad));
        assert_eq!(state.hospital, "King Fahad Medical City");
        assert_eq!(state.branch, "South Campus");
        assert_eq!(
            state.branch_options().unwrap(),
            &["South Campus", "Main Research Hub"]
        );
    }

    #[test]
    fn test_partial_json_keeps_sentinels() {
        let state: FilterState =
            serde_json::from_str(r#"{ "riskLevel": "High", "search": "ahmed" }"#).unwrap();
        assert_eq!(state.risk_level, "High");
        assert_eq!(state.time_window, "Last 30 Days");
        assert_eq!(state.gap_type, "All");
    }
}
