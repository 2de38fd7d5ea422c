//! Population builder implementation
//!
//! This module synthesizes the patient population and the satellite
//! referral and encounter alert collections. Every random draw goes
//! through an injected `Rng`, so a seeded builder always produces the same
//! population.

use std::time::Instant;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use rand::prelude::*;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::care::{CareProgram, CareTransition, Milestone};
use crate::models::clinical::{
    AbnormalResult, BehavioralAnomaly, CareGap, GuidelineAdherence, SafetyAlert,
};
use crate::models::status::{MilestoneStatus, EncounterAlertStatus};
use crate::models::types::{Gender, GapType, RiskLevel};
use crate::models::{EncounterAlert, Patient, Referral, ReferralCommunication, Vocabulary};
use crate::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
};

use super::catalog;

/// The generated population and its satellite collections
///
/// Lookups by id go through an index built on construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PopulationData")]
pub struct Population {
    patients: Vec<Patient>,
    referrals: Vec<Referral>,
    encounter_alerts: Vec<EncounterAlert>,
    #[serde(skip)]
    patient_index: FxHashMap<String, usize>,
    #[serde(skip)]
    referral_index: FxHashMap<String, usize>,
    #[serde(skip)]
    alert_index: FxHashMap<String, usize>,
}

/// Serialized shape of a population, without indexes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PopulationData {
    patients: Vec<Patient>,
    #[serde(default)]
    referrals: Vec<Referral>,
    #[serde(default)]
    encounter_alerts: Vec<EncounterAlert>,
}

impl From<PopulationData> for Population {
    fn from(data: PopulationData) -> Self {
        Self::new(data.patients, data.referrals, data.encounter_alerts)
    }
}

fn index_by_id<T>(records: &[T], id: impl Fn(&T) -> &str) -> FxHashMap<String, usize> {
    let mut index = FxHashMap::default();
    for (position, record) in records.iter().enumerate() {
        index.entry(id(record).to_string()).or_insert(position);
    }
    index
}

impl Population {
    /// Create a population and index every collection by id
    ///
    /// When ids repeat, lookups resolve to the first record with that id.
    #[must_use]
    pub fn new(
        patients: Vec<Patient>,
        referrals: Vec<Referral>,
        encounter_alerts: Vec<EncounterAlert>,
    ) -> Self {
        let patient_index = index_by_id(&patients, |p| &p.id);
        let referral_index = index_by_id(&referrals, |r| &r.id);
        let alert_index = index_by_id(&encounter_alerts, |a| &a.id);
        Self {
            patients,
            referrals,
            encounter_alerts,
            patient_index,
            referral_index,
            alert_index,
        }
    }

    /// Patients in generation order
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Referrals in generation order
    #[must_use]
    pub fn referrals(&self) -> &[Referral] {
        &self.referrals
    }

    /// Encounter alerts in generation order
    #[must_use]
    pub fn encounter_alerts(&self) -> &[EncounterAlert] {
        &self.encounter_alerts
    }

    /// Look up a patient by id
    #[must_use]
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patient_index.get(id).map(|&i| &self.patients[i])
    }

    /// Look up a referral by id
    #[must_use]
    pub fn referral(&self, id: &str) -> Option<&Referral> {
        self.referral_index.get(id).map(|&i| &self.referrals[i])
    }

    /// Look up an encounter alert by id
    #[must_use]
    pub fn encounter_alert(&self, id: &str) -> Option<&EncounterAlert> {
        self.alert_index.get(id).map(|&i| &self.encounter_alerts[i])
    }

    /// Whether a patient id resolves
    #[must_use]
    pub fn contains_patient(&self, id: &str) -> bool {
        self.patient_index.contains_key(id)
    }

    pub(crate) fn push_referral(&mut self, referral: Referral) {
        self.referral_index
            .entry(referral.id.clone())
            .or_insert(self.referrals.len());
        self.referrals.push(referral);
    }

    pub(crate) fn push_encounter_alert(&mut self, alert: EncounterAlert) {
        self.alert_index
            .entry(alert.id.clone())
            .or_insert(self.encounter_alerts.len());
        self.encounter_alerts.push(alert);
    }

    /// One-line summary of the collection sizes
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} patients, {} referrals, {} encounter alerts",
            self.patients.len(),
            self.referrals.len(),
            self.encounter_alerts.len()
        )
    }
}

/// Builder for generating a population from a configuration
pub struct PopulationBuilder<R: Rng = StdRng> {
    /// Generation parameters
    config: GeneratorConfig,
    /// Source of every random draw
    rng: R,
    /// Draw a progress bar while generating patients
    show_progress: bool,
}

impl PopulationBuilder<StdRng> {
    /// Create a builder, seeding the random source from the configuration
    ///
    /// Without a configured seed the random source is seeded from the OS.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            config,
            rng,
            show_progress: false,
        })
    }
}

impl<R: Rng> PopulationBuilder<R> {
    /// Create a builder around an existing random source
    ///
    /// The configured seed is ignored.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            show_progress: false,
        })
    }

    /// Draw a progress bar while generating patients
    #[must_use]
    pub fn with_progress(mut self) -> Self {
        log::info!("Initializing population builder with progress tracking");
        self.show_progress = true;
        self
    }

    /// The configuration this builder generates from
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the patients, referrals and encounter alerts
    #[must_use]
    pub fn build(mut self) -> Population {
        let start = Instant::now();
        log_operation_start("Generating population from", "configuration");
        log::debug!("{}", self.config);

        let pb = create_main_progress_bar(
            self.config.patient_count as u64,
            Some("Generating patients"),
            self.show_progress,
        );
        let count = self.config.patient_count;
        let patients: Vec<Patient> = (0..count)
            .map(|i| {
                let patient = generate_patient(i, count, &self.config, &mut self.rng);
                pb.inc(1);
                patient
            })
            .collect();
        finish_progress_bar(&pb, "Patients generated");

        let referrals =
            generate_referrals(self.config.referral_count, &self.config, &mut self.rng);
        let encounter_alerts =
            generate_encounter_alerts(self.config.encounter_alert_count, &mut self.rng);

        let population = Population::new(patients, referrals, encounter_alerts);
        log_operation_complete(
            "generated",
            "patients",
            population.patients().len(),
            Some(start.elapsed()),
        );
        log::info!("Population: {}", population.summary());

        population
    }
}

/// Generate a population with default sizes from a fixed seed
#[must_use]
pub fn generate_test_population(seed: u64) -> Population {
    let config = GeneratorConfig::seeded(seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let patients = generate_patients(config.patient_count, &config, &mut rng);
    let referrals = generate_referrals(config.referral_count, &config, &mut rng);
    let encounter_alerts = generate_encounter_alerts(config.encounter_alert_count, &mut rng);
    Population::new(patients, referrals, encounter_alerts)
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn pick_variant<V: Vocabulary, R: Rng + ?Sized>(rng: &mut R) -> V {
    *pick(rng, V::VARIANTS)
}

fn pick_from<V: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[V]) -> V {
    *pick(rng, options)
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Uniform score in `[0, max)` rounded to one decimal
fn score<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    round1(rng.random::<f64>() * max)
}

fn clinician<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Dr. {}", pick(rng, &catalog::CLINICIANS))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn at_time(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
}

/// Draw a risk tier, then a score from the tier's sub-range
///
/// The score is rounded to one decimal and kept inside the tier's range,
/// so `RiskLevel::contains_score` holds for every generated patient.
pub fn draw_risk<R: Rng + ?Sized>(rng: &mut R) -> (RiskLevel, f64) {
    let draw = rng.random::<f64>();
    let (level, raw) = if draw > 0.85 {
        (RiskLevel::Critical, 8.5 + rng.random::<f64>() * 1.5)
    } else if draw > 0.65 {
        (RiskLevel::High, 6.5 + rng.random::<f64>() * 2.0)
    } else if draw > 0.4 {
        (RiskLevel::Moderate, 4.0 + rng.random::<f64>() * 2.5)
    } else {
        (RiskLevel::Low, draw * 4.0)
    };

    let upper = match level {
        RiskLevel::Critical => level.max_score(),
        _ => round1(level.max_score() - 0.1),
    };
    (level, round1(raw).clamp(level.min_score(), upper))
}

/// Gate a collection with probability `p`, then draw 1 to `max` items
fn gated_count<R: Rng + ?Sized>(rng: &mut R, p: f64, max: usize) -> usize {
    if rng.random_bool(p) {
        rng.random_range(1..=max)
    } else {
        0
    }
}

/// Generate `count` patients
#[must_use]
pub fn generate_patients<R: Rng + ?Sized>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Patient> {
    let patients: Vec<Patient> = (0..count)
        .map(|i| generate_patient(i, count, config, rng))
        .collect();
    log::debug!("Generated {} patients", patients.len());
    patients
}

fn generate_patient<R: Rng + ?Sized>(
    i: usize,
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Patient {
    let reference = config.reference_date;
    let max_items = config.max_items_per_collection;
    let (risk_level, risk_score) = draw_risk(rng);

    let age = 18 + rng.random_range(0..70);
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else if rng.random_bool(0.1) {
        Gender::NonBinary
    } else {
        Gender::Female
    };

    let gap_count = gated_count(rng, config.gap_probability, max_items);
    let active_gaps = (0..gap_count)
        .map(|gi| generate_care_gap(i * 10 + gi, reference, rng))
        .collect();

    let alert_count = gated_count(rng, config.safety_alert_probability, max_items);
    let safety_alerts = (0..alert_count)
        .map(|si| generate_safety_alert(i * 10 + si, reference, rng))
        .collect();

    let guideline_count = gated_count(rng, config.guideline_probability, max_items);
    let guideline_adherence: Vec<GuidelineAdherence> = (0..guideline_count)
        .map(|gi| generate_guideline(i * 10 + gi, reference, rng))
        .collect();

    let compliance_score = if guideline_adherence.is_empty() {
        rng.random_range(60..100)
    } else {
        let compliant = guideline_adherence
            .iter()
            .filter(|g| g.status == crate::models::types::ComplianceStatus::Compliant)
            .count();
        (compliant * 100 / guideline_adherence.len()) as u32
    };

    let result_count = gated_count(rng, config.abnormal_result_probability, max_items);
    let abnormal_results = (0..result_count)
        .map(|ri| generate_abnormal_result(i * 10 + ri, reference, rng))
        .collect();

    let medication_risk_score = score(rng, 10.0);
    let override_frequency = rng.random_range(0..8);

    let anomaly_count = rng.random_range(0..3);
    let behavioral_anomalies = (0..anomaly_count)
        .map(|bi| generate_behavioral_anomaly(i * 10 + bi, rng))
        .collect();

    let transitions = if (i as f64) < count as f64 * config.transition_fraction {
        vec![generate_transition(i, reference, rng)]
    } else {
        Vec::new()
    };

    let care_programs = if (i as f64) < count as f64 * config.program_fraction {
        vec![generate_care_program(i, reference, rng)]
    } else {
        Vec::new()
    };

    let condition_count = rng.random_range(1..=2);
    let primary_conditions: SmallVec<_> = (0..condition_count).map(|_| pick_variant(rng)).collect();

    Patient {
        id: format!("P{}", 10000 + i),
        name: catalog::patient_name(i).to_string(),
        age,
        gender,
        risk_level,
        risk_score,
        primary_conditions,
        comorbidities_count: rng.random_range(0..7),
        last_assessment: reference - Days::new(5) + Days::new(rng.random_range(0..10)),
        medication_adherence: rng.random_range(40..100),
        next_appointment: month_start(reference) + Months::new(1) + Days::new(rng.random_range(0..28)),
        care_team: SmallVec::from_iter([format!(
            "Dr. {}",
            pick(rng, &catalog::CARE_TEAM_CLINICIANS)
        )]),
        vulnerability_factors: Vec::new(),
        trend: round1(rng.random::<f64>() * 2.5 - 1.0),
        active_gaps,
        safety_alerts,
        medication_risk_score,
        override_frequency,
        guideline_adherence,
        compliance_score,
        abnormal_results,
        behavioral_anomalies,
        engagement_score: rng.random_range(30..100),
        behavioral_risk_tier: pick_variant(rng),
        transitions,
        continuity_score: rng.random_range(40..90),
        care_programs,
    }
}

fn generate_care_gap<R: Rng + ?Sized>(n: usize, reference: NaiveDate, rng: &mut R) -> CareGap {
    let gap_type: GapType = pick_variant(rng);
    CareGap {
        id: format!("G{n}"),
        gap_type,
        detail: pick(rng, catalog::gap_details(gap_type)).to_string(),
        days_overdue: rng.random_range(0..400),
        clinical_impact: pick_variant(rng),
        status: pick_variant(rng),
        assigned_to: clinician(rng),
        priority: pick_variant(rng),
        last_completed_date: rng
            .random_bool(0.5)
            .then(|| reference - Days::new(rng.random_range(45..410))),
        risk_impact_score: score(rng, 10.0),
    }
}

fn generate_safety_alert<R: Rng + ?Sized>(n: usize, reference: NaiveDate, rng: &mut R) -> SafetyAlert {
    SafetyAlert {
        id: format!("SA{n}"),
        guardrail_type: pick_variant(rng),
        severity: pick_variant(rng),
        medication: pick(rng, &catalog::MEDICATIONS).to_string(),
        conflict: pick(rng, &catalog::SAFETY_CONFLICTS).to_string(),
        detected_on: reference - Days::new(rng.random_range(0..15)),
        provider: clinician(rng),
        risk_impact: score(rng, 10.0),
        status: pick_variant(rng),
        recommendation: pick(rng, &catalog::SAFETY_RECOMMENDATIONS).to_string(),
    }
}

fn generate_guideline<R: Rng + ?Sized>(n: usize, reference: NaiveDate, rng: &mut R) -> GuidelineAdherence {
    GuidelineAdherence {
        id: format!("GL{n}"),
        protocol: pick(rng, &catalog::PROTOCOLS).to_string(),
        category: pick_variant(rng),
        status: pick_variant(rng),
        deviation_type: Some(pick(rng, &catalog::DEVIATION_TYPES).to_string()),
        due_date: month_start(reference) + Days::new(rng.random_range(0..28)),
        days_overdue: rng.random_range(0..120),
        impact_level: pick_variant(rng),
        required_action: pick(rng, &catalog::REQUIRED_ACTIONS).to_string(),
        actual_action: rng
            .random_bool(0.6)
            .then(|| pick(rng, &catalog::ACTUAL_ACTIONS).to_string()),
        evidence_source: pick(rng, &catalog::EVIDENCE_SOURCES).to_string(),
        risk_of_non_adherence: pick(rng, &catalog::NON_ADHERENCE_RISKS).to_string(),
    }
}

fn generate_abnormal_result<R: Rng + ?Sized>(n: usize, reference: NaiveDate, rng: &mut R) -> AbnormalResult {
    let category = pick_variant(rng);
    let tests = catalog::tests_in(category);
    let test = *pick(rng, &tests);
    let day = reference - Days::new(rng.random_range(0..15));

    AbnormalResult {
        id: format!("AR{n}"),
        category,
        test_name: test.name.to_string(),
        value: pick(rng, test.abnormal_values).to_string(),
        normal_range: test.normal_range.to_string(),
        severity: pick_variant(rng),
        timestamp: at_time(day, rng.random_range(0..24), rng.random_range(0..60)),
        status: pick_variant(rng),
        assigned_to: clinician(rng),
        trend: pick_variant(rng),
        clinical_conflict: rng
            .random_bool(0.4)
            .then(|| pick(rng, &catalog::CLINICAL_CONFLICTS).to_string()),
        impact_score: score(rng, 10.0),
    }
}

fn generate_behavioral_anomaly<R: Rng + ?Sized>(n: usize, rng: &mut R) -> BehavioralAnomaly {
    use crate::models::status::PatternTrend;

    BehavioralAnomaly {
        id: format!("BA{n}"),
        behavior_type: pick_variant(rng),
        severity: pick_variant(rng),
        // Improving is never observed on a flagged anomaly
        pattern_trend: pick_from(
            rng,
            &[PatternTrend::Declining, PatternTrend::Stable, PatternTrend::RapidDrop],
        ),
        last_contact_days: rng.random_range(1..=14),
        recommended_action: pick(rng, &catalog::BEHAVIOR_ACTIONS).to_string(),
        status: pick_variant(rng),
        impact_score: score(rng, 15.0),
        details: pick(rng, &catalog::BEHAVIOR_DETAILS).to_string(),
    }
}

fn generate_transition<R: Rng + ?Sized>(i: usize, reference: NaiveDate, rng: &mut R) -> CareTransition {
    CareTransition {
        id: format!("TR{}", 1000 + i),
        transition_type: pick_variant(rng),
        from_setting: pick_variant(rng),
        to_setting: pick_variant(rng),
        status: pick_variant(rng),
        discharge_summary_status: pick_variant(rng),
        med_rec_status: pick_variant(rng),
        follow_up_date: month_start(reference) + Days::new(rng.random_range(0..28)),
        risk_flag: pick_variant(rng),
        coordination_score: rng.random_range(30..100),
    }
}

fn milestone(
    id: &str,
    name: &str,
    status: MilestoneStatus,
    completion_date: Option<NaiveDate>,
    impact_score: u32,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        name: name.to_string(),
        status,
        completion_date,
        impact_score,
    }
}

/// The five program milestones; the first two are always complete
fn generate_milestones<R: Rng + ?Sized>(reference: NaiveDate, rng: &mut R) -> Vec<Milestone> {
    use MilestoneStatus::{Completed, Missed, Pending, Scheduled};

    vec![
        milestone("m1", "Initial Assessment", Completed, Some(reference - Days::new(126)), 12),
        milestone("m2", "Education Session 1", Completed, Some(reference - Days::new(102)), 8),
        milestone("m3", "Medication Review", pick_from(rng, &[Completed, Pending]), None, 10),
        milestone(
            "m4",
            "Lifestyle Workshop",
            pick_from(rng, &[Completed, Pending, Missed]),
            None,
            15,
        ),
        milestone("m5", "Follow-up Lab", pick_from(rng, &[Pending, Scheduled]), None, 7),
    ]
}

fn generate_care_program<R: Rng + ?Sized>(i: usize, reference: NaiveDate, rng: &mut R) -> CareProgram {
    let program_type = pick_variant(rng);
    let milestones = generate_milestones(reference, rng);
    CareProgram {
        id: format!("CP{}", 2000 + i),
        program_type,
        enrollment_date: reference - Days::new(137),
        status: pick_variant(rng),
        adherence_percent: rng.random_range(40..100),
        milestones,
        goal_status: pick_variant(rng),
        participation_rate: rng.random_range(50..100),
        last_interaction: reference - Days::new(1),
    }
}

/// Generate `count` referrals
///
/// Patient ids follow the referral index, so referrals beyond the patient
/// count reference patients that do not exist.
#[must_use]
pub fn generate_referrals<R: Rng + ?Sized>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Referral> {
    let reference = config.reference_date;
    let confirmed = reference + Days::new(7);
    let communications = vec![
        ReferralCommunication {
            id: "c1".to_string(),
            timestamp: at_time(reference, 9, 22),
            from: "Sara Al-Harbi".to_string(),
            message: "Message sent to insurance for priority pre-auth.".to_string(),
        },
        ReferralCommunication {
            id: "c2".to_string(),
            timestamp: at_time(reference - Days::new(1), 14, 10),
            from: "Receiving Facility".to_string(),
            message: format!(
                "Bed availability confirmed for {}/{}.",
                confirmed.month(),
                confirmed.day()
            ),
        },
    ];

    let referrals: Vec<Referral> = (0..count)
        .map(|i| Referral {
            id: format!("R-{}", 89452 + i),
            patient_id: format!("P{}", 10000 + i),
            patient_name: catalog::patient_name(i).to_string(),
            patient_age: rng.random_range(40..80),
            referring_provider: clinician(rng),
            specialty: pick_variant(rng),
            urgency: pick_variant(rng),
            status: pick_variant(rng),
            auth_status: pick_variant(rng),
            days_open: rng.random_range(0..35),
            scheduled_date: rng
                .random_bool(0.6)
                .then(|| reference + Days::new(rng.random_range(0..10))),
            receiving_facility: pick_variant(rng),
            care_coordinator: pick(rng, &catalog::CARE_COORDINATORS).to_string(),
            message_count: rng.random_range(0..8),
            readiness_score: rng.random_range(60..95),
            reason: catalog::REFERRAL_REASON.to_string(),
            clinical_summary: catalog::REFERRAL_SUMMARY.to_string(),
            communications: communications.clone(),
        })
        .collect();

    log::debug!("Generated {} referrals", referrals.len());
    referrals
}

/// Generate `count` encounter alerts
///
/// Like referrals, patient ids follow the alert index and may not resolve.
#[must_use]
pub fn generate_encounter_alerts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<EncounterAlert> {
    use EncounterAlertStatus::{Active, Escalated, Pending};

    let alerts: Vec<EncounterAlert> = (0..count)
        .map(|i| EncounterAlert {
            id: format!("A{}", 8721 + i),
            patient_id: format!("P{}", 10000 + i),
            patient_name: pick(rng, &catalog::PATIENT_NAMES).to_string(),
            facility: pick_variant(rng),
            department: pick_variant(rng),
            alert_type: pick_variant(rng),
            severity: pick_variant(rng),
            time_sensitive: pick(rng, &catalog::TIME_SENSITIVITY).to_string(),
            resource_impact: pick(rng, &catalog::RESOURCE_IMPACTS).to_string(),
            triggered_hours_ago: rng.random_range(0..24),
            assigned_to: pick(rng, &catalog::ALERT_ASSIGNEES).to_string(),
            // Generated alerts are never already resolved
            status: pick_from(rng, &[Pending, Active, Escalated]),
            acuity_score: rng.random_range(0..100),
            triage_notes: catalog::TRIAGE_NOTES.to_string(),
        })
        .collect();

    log::debug!("Generated {} encounter alerts", alerts.len());
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_is_empty() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_patients(0, &config, &mut rng).is_empty());
        assert!(generate_referrals(0, &config, &mut rng).is_empty());
        assert!(generate_encounter_alerts(0, &mut rng).is_empty());
    }

    #[test]
    fn test_drawn_scores_stay_in_tier() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10_000 {
            let (level, score) = draw_risk(&mut rng);
            assert!(level.contains_score(score), "{level} with score {score}");
            assert_eq!(RiskLevel::from_score(score), level);
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = generate_test_population(42);
        let b = generate_test_population(42);
        assert_eq!(a.patients(), b.patients());
        assert_eq!(a.referrals(), b.referrals());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first_record() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut patients = generate_patients(2, &config, &mut rng);
        patients[1].id = patients[0].id.clone();
        let first = patients[0].name.clone();
        let mut alerts = generate_encounter_alerts(1, &mut rng);

        let mut population = Population::new(patients, Vec::new(), alerts.clone());
        assert_eq!(population.patient("P10000").map(|p| p.name.as_str()), Some(first.as_str()));

        let original = alerts[0].patient_name.clone();
        alerts[0].patient_name = "Second copy".to_string();
        population.push_encounter_alert(alerts.remove(0));
        assert_eq!(population.encounter_alerts().len(), 2);
        assert_eq!(
            population.encounter_alert("A8721").map(|a| a.patient_name.as_str()),
            Some(original.as_str())
        );
    }

    #[test]
    fn test_index_lookup() {
        let population = generate_test_population(3);
        let patient = population.patient("P10007").unwrap();
        assert_eq!(patient.name, catalog::patient_name(7));
        assert!(population.patient("P99999").is_none());
        assert_eq!(population.referral("R-89452").unwrap().patient_id, "P10000");
        assert_eq!(population.encounter_alert("A8721").unwrap().patient_id, "P10000");
    }

    #[test]
    fn test_positional_collections() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let patients = generate_patients(10, &config, &mut rng);
        // 30% of 10 patients get a transition, 60% a program
        assert!(patients[..3].iter().all(|p| p.transitions.len() == 1));
        assert!(patients[3..].iter().all(|p| p.transitions.is_empty()));
        assert!(patients[..6].iter().all(|p| p.care_programs.len() == 1));
        assert!(patients[6..].iter().all(|p| p.care_programs.is_empty()));
    }

    #[test]
    fn test_milestone_dates() {
        let mut rng = StdRng::seed_from_u64(8);
        let milestones = generate_milestones(crate::config::DEFAULT_REFERENCE_DATE, &mut rng);
        assert_eq!(milestones.len(), 5);
        assert_eq!(milestones[0].completion_date.unwrap().to_string(), "2025-10-12");
        assert_eq!(milestones[1].completion_date.unwrap().to_string(), "2025-11-05");
    }
}
