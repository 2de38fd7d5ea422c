//! Clinical vocabulary definitions
//!
//! This module contains the closed category sets shared by the generator,
//! the filters and the metrics. Labels match the strings shown to users.

use pophealth_macros::Vocabulary;

/// Ordinal clinical severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "risk level", sentinel = "All Levels")]
pub enum RiskLevel {
    /// Score 8.5 to 10.0
    #[vocabulary(label = "Critical")]
    Critical,
    /// Score 6.5 up to 8.5
    #[vocabulary(label = "High")]
    High,
    /// Score 4.0 up to 6.5
    #[vocabulary(label = "Moderate")]
    Moderate,
    /// Score below 4.0
    #[vocabulary(label = "Low")]
    Low,
}

impl RiskLevel {
    /// Ordinal rank, higher is more severe
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Moderate => 2,
            Self::Low => 1,
        }
    }

    /// Inclusive lower bound of the tier's score range
    #[must_use]
    pub const fn min_score(self) -> f64 {
        match self {
            Self::Critical => 8.5,
            Self::High => 6.5,
            Self::Moderate => 4.0,
            Self::Low => 0.0,
        }
    }

    /// Upper bound of the tier's score range (inclusive only for Critical)
    #[must_use]
    pub const fn max_score(self) -> f64 {
        match self {
            Self::Critical => 10.0,
            Self::High => 8.5,
            Self::Moderate => 6.5,
            Self::Low => 4.0,
        }
    }

    /// Whether a score lies in this tier's range
    #[must_use]
    pub fn contains_score(self, score: f64) -> bool {
        match self {
            Self::Critical => (self.min_score()..=self.max_score()).contains(&score),
            _ => (self.min_score()..self.max_score()).contains(&score),
        }
    }

    /// Classify a score into its tier
    ///
    /// Scores above 10 are Critical and scores below 0 are Low.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::Critical.min_score() {
            Self::Critical
        } else if score >= Self::High.min_score() {
            Self::High
        } else if score >= Self::Moderate.min_score() {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Critical or High
    #[must_use]
    pub const fn is_high_risk(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "gender", sentinel = "All Genders")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Non-binary gender
    #[vocabulary(label = "Non-binary")]
    NonBinary,
}

/// Category of an unmet clinical action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "gap type")]
pub enum GapType {
    /// Missing or overdue immunisation
    Vaccine,
    /// Preventive procedure
    Preventive,
    /// Diagnostic test
    Diagnostic,
    /// Treatment initiation or optimisation
    Treatment,
    /// Ongoing monitoring
    Monitoring,
    /// Screening assessment
    Screening,
}

/// Kind of medication safety rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "guardrail type")]
pub enum GuardrailType {
    /// Medication contraindicated by a condition
    Contraindication,
    /// Interaction between two medications
    #[vocabulary(label = "Drug Interaction")]
    DrugInteraction,
    /// Documented allergy or cross-reactivity
    #[vocabulary(label = "Allergy Alert")]
    AllergyAlert,
    /// Dose above the permitted limit
    #[vocabulary(label = "Dosage Limit")]
    DosageLimit,
    /// Medication on the high-risk list
    #[vocabulary(label = "High-Risk Medication")]
    HighRiskMedication,
    /// Observed adverse event
    #[vocabulary(label = "Adverse Event")]
    AdverseEvent,
}

/// Compliance against a clinical protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "compliance status", sentinel = "All Statuses")]
pub enum ComplianceStatus {
    /// Fully compliant
    Compliant,
    /// Partially compliant
    Partial,
    /// Compliance at risk
    #[vocabulary(label = "At Risk")]
    AtRisk,
    /// Not compliant
    #[vocabulary(label = "Non-Compliant")]
    NonCompliant,
}

/// Category of a clinical guideline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "guideline type", sentinel = "All Types")]
pub enum GuidelineType {
    /// Preventive guideline
    Preventive,
    /// Diagnostic guideline
    Diagnostic,
    /// Treatment guideline
    Treatment,
    /// Monitoring guideline
    Monitoring,
    /// Screening guideline
    Screening,
}

/// Lifecycle of an abnormal result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "abnormal result status")]
pub enum AbnormalResultStatus {
    /// Not yet seen
    New,
    /// Seen by a clinician
    Acknowledged,
    /// Action taken
    Actioned,
    /// Closed
    Resolved,
}

/// Source category of an abnormal result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "abnormal category")]
pub enum AbnormalCategory {
    /// Laboratory test
    Lab,
    /// Imaging study
    Imaging,
    /// Vital sign measurement
    #[vocabulary(label = "Vital Signs")]
    VitalSigns,
    /// Other diagnostic procedure
    Diagnostics,
}

/// Kind of engagement or adherence deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "behavior type")]
pub enum BehaviorType {
    /// Missed appointments
    #[vocabulary(label = "Appointment No-Shows")]
    NoShow,
    /// Medication not taken as prescribed
    #[vocabulary(label = "Medication Non-Adherence")]
    NonAdherence,
    /// Treatment declined
    #[vocabulary(label = "Treatment Refusal")]
    Refusal,
    /// Care plan not followed
    #[vocabulary(label = "Care Plan Deviations")]
    Deviation,
    /// Follow-up not attended
    #[vocabulary(label = "Follow-Up Gaps")]
    Gap,
    /// Falling engagement
    #[vocabulary(label = "Engagement Decline")]
    Decline,
}

/// Setting in which care is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "care setting")]
pub enum CareSetting {
    /// Hospital ward
    Inpatient,
    /// Clinic visit
    Outpatient,
    /// Emergency department
    Emergency,
    /// Care at home
    #[vocabulary(label = "Home Care")]
    HomeCare,
    /// Skilled nursing facility
    #[vocabulary(label = "Skilled Nursing")]
    SkilledNursing,
    /// Remote consultation
    Telehealth,
}

/// Kind of movement between care settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "transition type")]
pub enum TransitionType {
    /// Admission followed by discharge
    #[vocabulary(label = "Admission → Discharge")]
    AdmissionDischarge,
    /// Primary care to specialist
    #[vocabulary(label = "PCP → Specialist")]
    PcpSpecialist,
    /// Emergency department to ward
    #[vocabulary(label = "ED → Inpatient")]
    EdInpatient,
    /// Ward to rehabilitation
    #[vocabulary(label = "Inpatient → Rehab")]
    InpatientRehab,
    /// Transfer between facilities
    #[vocabulary(label = "Cross-facility Transfer")]
    CrossFacility,
}

/// Risk flag attached to a care transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "transition risk")]
pub enum TransitionRisk {
    /// High continuity risk
    High,
    /// Moderate continuity risk
    Moderate,
    /// Low continuity risk
    Low,
}

/// Kind of structured care program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "program type", sentinel = "All Programs")]
pub enum ProgramType {
    /// Chronic disease management
    #[vocabulary(label = "Chronic Disease Management")]
    ChronicDisease,
    /// Cardiac rehabilitation
    #[vocabulary(label = "Cardiac Rehab")]
    CardiacRehab,
    /// Diabetes management
    #[vocabulary(label = "Diabetes Management")]
    DiabetesManagement,
    /// Oncology pathway
    #[vocabulary(label = "Oncology Care Pathway")]
    Oncology,
    /// Post-discharge follow-up
    #[vocabulary(label = "Post-Discharge Program")]
    PostDischarge,
    /// Behavioral health
    #[vocabulary(label = "Behavioral Health Program")]
    BehavioralHealth,
    /// Preventive care
    #[vocabulary(label = "Preventive Care Program")]
    Preventive,
}

/// Enrollment state of a care program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "enrollment status")]
pub enum EnrollmentStatus {
    /// Currently enrolled
    Enrolled,
    /// Program completed
    Completed,
    /// Left the program
    Withdrawn,
    /// Eligible but not enrolled
    #[vocabulary(label = "Non-enrolled eligible")]
    Eligible,
}

/// Banded program adherence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "adherence level")]
pub enum AdherenceLevel {
    /// 85% and above
    Excellent,
    /// 70% to 84%
    Good,
    /// 50% to 69%
    Moderate,
    /// Below 50%
    Poor,
}

impl AdherenceLevel {
    /// Band an adherence percentage
    #[must_use]
    pub const fn from_percent(percent: u32) -> Self {
        match percent {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Moderate,
            _ => Self::Poor,
        }
    }
}

/// Progress against a program goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "goal status")]
pub enum GoalStatus {
    /// Goal met
    Achieved,
    /// On track
    #[vocabulary(label = "On Track")]
    OnTrack,
    /// Slipping
    #[vocabulary(label = "At Risk")]
    AtRisk,
    /// Not on track
    #[vocabulary(label = "Off Track")]
    OffTrack,
}

/// Kind of encounter or resourcing alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "alert type")]
pub enum AlertType {
    /// Appointment backlog
    #[vocabulary(label = "Appointment Backlog")]
    Backlog,
    /// Capacity overload
    #[vocabulary(label = "Capacity Overload")]
    Capacity,
    /// Staffing shortage
    #[vocabulary(label = "Staffing Shortage")]
    Staffing,
    /// Urgent visit flag
    #[vocabulary(label = "Urgent Visit Flag")]
    UrgentVisit,
    /// Care coordination delay
    #[vocabulary(label = "Care Coordination Delay")]
    CoordinationDelay,
    /// Bed occupancy alert
    #[vocabulary(label = "Bed Occupancy Alert")]
    BedOccupancy,
    /// Specialist access delay
    #[vocabulary(label = "Specialist Access Delay")]
    SpecialistAccess,
    /// High emergency department wait time
    #[vocabulary(label = "High ED Wait Time")]
    EdWait,
}

/// Lifecycle of a referral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "referral status")]
pub enum ReferralStatus {
    /// Awaiting action
    Pending,
    /// Authorized by the payer
    Authorized,
    /// Appointment booked
    Scheduled,
    /// Seen by the receiving provider
    Completed,
    /// Denied
    Denied,
    /// Expired before use
    Expired,
    /// Cancelled
    Cancelled,
}

/// Clinical urgency of a referral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "referral urgency")]
pub enum ReferralUrgency {
    /// No deadline
    Routine,
    /// Within 72 hours
    #[vocabulary(label = "Urgent (72h)")]
    Urgent,
    /// Within 48 hours
    #[vocabulary(label = "Priority (48h)")]
    Priority,
    /// Within 24 hours
    #[vocabulary(label = "STAT (24h)")]
    Stat,
}

/// Payer authorization state of a referral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "authorization status")]
pub enum AuthStatus {
    /// No authorization needed
    #[vocabulary(label = "Not Required")]
    NotRequired,
    /// Awaiting payer decision
    Pending,
    /// Approved
    Approved,
    /// Denied
    Denied,
    /// Lapsed
    Expired,
}

/// Facility in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "hospital", sentinel = "All Hospitals")]
pub enum Hospital {
    /// Aramco Hospital
    #[vocabulary(label = "Aramco Hospital")]
    Aramco,
    /// King Abdulaziz Hospital
    #[vocabulary(label = "King Abdulaziz Hospital")]
    KingAbdulaziz,
    /// King Fahad Medical City
    #[vocabulary(label = "King Fahad Medical City")]
    KingFahad,
    /// Dubai Healthcare City
    #[vocabulary(label = "Dubai Healthcare City")]
    DubaiHealthcareCity,
    /// Sheikh Khalifa Hospital
    #[vocabulary(label = "Sheikh Khalifa Hospital")]
    SheikhKhalifa,
}

impl Hospital {
    /// Branches operated by this facility
    #[must_use]
    pub const fn branches(self) -> &'static [&'static str] {
        match self {
            Self::Aramco => &["Main Branch", "East Branch", "Oil Sector Unit"],
            Self::KingAbdulaziz => &["Main Branch", "North Wing", "Emergency Care"],
            Self::KingFahad => &["South Campus", "Main Research Hub"],
            Self::DubaiHealthcareCity => &["Specialty Clinic", "Main Campus"],
            Self::SheikhKhalifa => &["East Wing", "Primary Care"],
        }
    }
}

/// Hospital department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "department", sentinel = "All Departments")]
pub enum Department {
    /// Emergency department
    Emergency,
    /// Cardiology
    Cardiology,
    /// Oncology
    Oncology,
    /// Primary care
    #[vocabulary(label = "Primary Care")]
    PrimaryCare,
    /// Surgery
    Surgery,
    /// Imaging
    Imaging,
    /// Intensive care unit
    #[vocabulary(label = "ICU")]
    Icu,
    /// Outpatient clinics
    Outpatient,
}

/// Clinical specialty receiving referrals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "specialty", sentinel = "All Specialties")]
pub enum Specialty {
    /// Cardiology
    Cardiology,
    /// Endocrinology
    Endocrinology,
    /// Oncology
    Oncology,
    /// Neurology
    Neurology,
    /// Nephrology
    Nephrology,
    /// Pulmonology
    Pulmonology,
    /// Surgery
    Surgery,
    /// Behavioral health
    #[vocabulary(label = "Behavioral Health")]
    BehavioralHealth,
    /// Gastroenterology
    Gastroenterology,
    /// Orthopedics
    Orthopedics,
}

/// Therapeutic class used by the medication safety filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "medication class")]
pub enum MedicationClass {
    /// Anticoagulants
    Anticoagulants,
    /// Insulin preparations
    Insulin,
    /// Opioid analgesics
    Opioids,
    /// Cytotoxic chemotherapy
    Chemotherapy,
    /// Biologic agents
    Biologics,
    /// Cardiovascular agents
    #[vocabulary(label = "Cardiac Agents")]
    CardiacAgents,
}

impl MedicationClass {
    /// Classify a medication name from the generator's formulary
    #[must_use]
    pub fn of_medication(medication: &str) -> Option<Self> {
        match medication {
            "Warfarin" | "Heparin" => Some(Self::Anticoagulants),
            name if name.starts_with("Insulin") => Some(Self::Insulin),
            "Morphine" => Some(Self::Opioids),
            "Cisplatin" => Some(Self::Chemotherapy),
            "Rituximab" => Some(Self::Biologics),
            "Lisinopril" | "Atorvastatin" | "Amiodarone" | "Digoxin" | "Furosemide"
            | "Spironolactone" => Some(Self::CardiacAgents),
            _ => None,
        }
    }
}

/// Primary clinical condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "condition", sentinel = "All Conditions")]
pub enum Condition {
    /// Heart failure
    #[vocabulary(label = "Heart Failure")]
    HeartFailure,
    /// Chronic kidney disease, stage 4
    #[vocabulary(label = "CKD Stage 4")]
    CkdStage4,
    /// Chronic obstructive pulmonary disease
    #[vocabulary(label = "COPD")]
    Copd,
    /// Type 2 diabetes
    #[vocabulary(label = "Diabetes Type 2")]
    DiabetesType2,
    /// Hypertension
    Hypertension,
    /// Coronary artery disease
    #[vocabulary(label = "CAD")]
    Cad,
    /// Asthma
    Asthma,
    /// Cirrhosis
    Cirrhosis,
    /// Metastatic cancer
    #[vocabulary(label = "Metastatic Cancer")]
    MetastaticCancer,
    /// Alzheimer's disease
    Alzheimer,
    /// Stroke
    Stroke,
}

/// Patient age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "age range", sentinel = "All Ages")]
pub enum AgeBand {
    /// 0 to 18
    #[vocabulary(label = "0-18 years")]
    Pediatric,
    /// 19 to 40
    #[vocabulary(label = "19-40 years")]
    YoungAdult,
    /// 41 to 65
    #[vocabulary(label = "41-65 years")]
    MiddleAged,
    /// Over 65
    #[vocabulary(label = "65+ years")]
    Senior,
}

impl AgeBand {
    /// Band an age in years
    #[must_use]
    pub const fn of_age(age: u32) -> Self {
        match age {
            0..=18 => Self::Pediatric,
            19..=40 => Self::YoungAdult,
            41..=65 => Self::MiddleAged,
            _ => Self::Senior,
        }
    }

    /// Parse the spellings used by the different dropdowns
    ///
    /// Accepts en dashes and a missing " years" suffix ("19–40", "65+").
    pub fn parse_loose(value: &str) -> crate::error::Result<Self> {
        let normalized = value.trim().replace('–', "-");
        let normalized = if normalized.ends_with(" years") {
            normalized
        } else {
            format!("{normalized} years")
        };
        normalized
            .parse()
            .map_err(|_| crate::error::PopHealthError::unknown_label("age range", value))
    }
}

/// How long a care gap has been overdue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "time overdue")]
pub enum OverdueBand {
    /// Under 90 days
    #[vocabulary(label = "< 3 months")]
    UnderThreeMonths,
    /// 90 to 179 days
    #[vocabulary(label = "3-6 months")]
    ThreeToSixMonths,
    /// 180 to 364 days
    #[vocabulary(label = "6-12 months")]
    SixToTwelveMonths,
    /// A year or more
    #[vocabulary(label = "1 year+")]
    OverAYear,
}

impl OverdueBand {
    /// Band a number of overdue days
    #[must_use]
    pub const fn of_days(days: u32) -> Self {
        match days {
            0..=89 => Self::UnderThreeMonths,
            90..=179 => Self::ThreeToSixMonths,
            180..=364 => Self::SixToTwelveMonths,
            _ => Self::OverAYear,
        }
    }

    /// Parse with en dashes normalized to hyphens
    pub fn parse_loose(value: &str) -> crate::error::Result<Self> {
        value
            .trim()
            .replace('–', "-")
            .parse()
            .map_err(|_| crate::error::PopHealthError::unknown_label("time overdue", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vocabulary::Vocabulary;

    #[test]
    fn test_risk_level_score_ranges() {
        assert!(RiskLevel::Critical.contains_score(10.0));
        assert!(RiskLevel::Critical.contains_score(8.5));
        assert!(!RiskLevel::High.contains_score(8.5));
        assert!(RiskLevel::High.contains_score(6.5));
        assert!(RiskLevel::Low.contains_score(0.0));
        assert!(!RiskLevel::Low.contains_score(4.0));
    }

    #[test]
    fn test_from_score_agrees_with_ranges() {
        for tenth in 0..=100 {
            let score = f64::from(tenth) / 10.0;
            assert!(RiskLevel::from_score(score).contains_score(score), "score {score}");
        }
    }

    #[test]
    fn test_rank_orders_tiers() {
        assert!(RiskLevel::Critical.rank() > RiskLevel::High.rank());
        assert!(RiskLevel::Moderate.rank() > RiskLevel::Low.rank());
    }

    #[test]
    fn test_adherence_bands() {
        assert_eq!(AdherenceLevel::from_percent(100), AdherenceLevel::Excellent);
        assert_eq!(AdherenceLevel::from_percent(85), AdherenceLevel::Excellent);
        assert_eq!(AdherenceLevel::from_percent(84), AdherenceLevel::Good);
        assert_eq!(AdherenceLevel::from_percent(50), AdherenceLevel::Moderate);
        assert_eq!(AdherenceLevel::from_percent(49), AdherenceLevel::Poor);
    }

    #[test]
    fn test_sentinel_defaults() {
        assert_eq!(GapType::SENTINEL, "All");
        assert_eq!(Hospital::SENTINEL, "All Hospitals");
        assert_eq!(ProgramType::SENTINEL, "All Programs");
    }

    #[test]
    fn test_transition_labels() {
        assert_eq!(
            "ED → Inpatient".parse::<TransitionType>().ok(),
            Some(TransitionType::EdInpatient)
        );
    }

    #[test]
    fn test_loose_band_parsing() {
        assert_eq!(AgeBand::parse_loose("19–40").ok(), Some(AgeBand::YoungAdult));
        assert_eq!(AgeBand::parse_loose("65+ years").ok(), Some(AgeBand::Senior));
        assert!(AgeBand::parse_loose("90-100").is_err());
        assert_eq!(
            OverdueBand::parse_loose("3–6 months").ok(),
            Some(OverdueBand::ThreeToSixMonths)
        );
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(AgeBand::of_age(18), AgeBand::Pediatric);
        assert_eq!(AgeBand::of_age(66), AgeBand::Senior);
        assert_eq!(OverdueBand::of_days(89), OverdueBand::UnderThreeMonths);
        assert_eq!(OverdueBand::of_days(365), OverdueBand::OverAYear);
    }

    #[test]
    fn test_medication_classes() {
        assert_eq!(
            MedicationClass::of_medication("Warfarin"),
            Some(MedicationClass::Anticoagulants)
        );
        assert_eq!(MedicationClass::of_medication("Aspirin"), None);
    }

    #[test]
    fn test_oral_antidiabetics_are_not_insulin() {
        assert_eq!(MedicationClass::of_medication("Metformin"), None);
        assert_eq!(
            MedicationClass::of_medication("Insulin Glargine"),
            Some(MedicationClass::Insulin)
        );
    }
}
