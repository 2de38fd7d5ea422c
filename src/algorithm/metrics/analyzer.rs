//! Per-patient analyzer derivations
//!
//! Risk waterfalls break a patient's score into a baseline plus one step per
//! contributing record. Component impact scores are drawn independently of
//! the risk score, so the steps of a care gap or safety waterfall need not
//! sum to the final total.

use serde::Serialize;

use crate::models::status::{FactorCategory, FactorPriority, FactorSeverity, FactorTrend};
use crate::models::{CareProgram, Patient};

/// Baseline of the abnormal result waterfall
pub const ABNORMAL_BASELINE: f64 = 4.0;

/// Safety baseline used when the alerts outweigh the risk score
pub const SAFETY_FLOOR_BASELINE: f64 = 2.0;

/// Role of a step within a waterfall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Starting value
    Base,
    /// Contribution of one record
    Component,
    /// Final value
    Total,
}

/// One bar of a risk waterfall
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStep {
    /// Bar label
    pub name: String,
    /// Bar value
    pub value: f64,
    /// Role of the bar
    #[serde(rename = "type")]
    pub kind: StepKind,
}

impl WaterfallStep {
    fn new(name: impl Into<String>, value: f64, kind: StepKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Care gap contribution to the risk score
///
/// Baseline is the risk score minus every gap's impact, then one step per
/// gap detail, then the risk score itself.
#[must_use]
pub fn care_gap_waterfall(patient: &Patient) -> Vec<WaterfallStep> {
    let impact: f64 = patient.active_gaps.iter().map(|g| g.risk_impact_score).sum();

    let mut steps = Vec::with_capacity(patient.active_gaps.len() + 2);
    steps.push(WaterfallStep::new(
        "Baseline",
        round1(patient.risk_score - impact),
        StepKind::Base,
    ));
    steps.extend(patient.active_gaps.iter().map(|g| {
        WaterfallStep::new(g.detail.as_str(), g.risk_impact_score, StepKind::Component)
    }));
    steps.push(WaterfallStep::new(
        "Current Total",
        patient.risk_score,
        StepKind::Total,
    ));
    steps
}

/// Safety alert contribution to the risk score
///
/// A negative baseline is replaced by 2.0.
#[must_use]
pub fn safety_waterfall(patient: &Patient) -> Vec<WaterfallStep> {
    let impact: f64 = patient.safety_alerts.iter().map(|a| a.risk_impact).sum();
    let mut baseline = patient.risk_score - impact;
    if baseline < 0.0 {
        baseline = SAFETY_FLOOR_BASELINE;
    }

    let mut steps = Vec::with_capacity(patient.safety_alerts.len() + 2);
    steps.push(WaterfallStep::new(
        "Clinical Baseline",
        round1(baseline),
        StepKind::Base,
    ));
    steps.extend(patient.safety_alerts.iter().map(|a| {
        WaterfallStep::new(a.medication.as_str(), a.risk_impact, StepKind::Component)
    }));
    steps.push(WaterfallStep::new(
        "Final Safety Risk",
        patient.risk_score,
        StepKind::Total,
    ));
    steps
}

/// Abnormality burden on top of a fixed clinical baseline
#[must_use]
pub fn abnormal_waterfall(patient: &Patient) -> Vec<WaterfallStep> {
    let impact: f64 = patient.abnormal_results.iter().map(|r| r.impact_score).sum();

    let mut steps = Vec::with_capacity(patient.abnormal_results.len() + 2);
    steps.push(WaterfallStep::new(
        "Clinical Baseline",
        ABNORMAL_BASELINE,
        StepKind::Base,
    ));
    steps.extend(patient.abnormal_results.iter().map(|r| {
        WaterfallStep::new(r.test_name.as_str(), r.impact_score, StepKind::Component)
    }));
    // summing one-decimal impacts leaves float noise
    steps.push(WaterfallStep::new(
        "Abnormality Burden",
        round1(ABNORMAL_BASELINE + impact),
        StepKind::Total,
    ));
    steps
}

/// A risk factor derived from a patient's scores
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    /// Factor name
    pub factor: String,
    /// Domain of the factor
    pub category: FactorCategory,
    /// How severe the factor is
    pub severity: FactorSeverity,
    /// Finding the factor is based on
    pub clinical_finding: String,
    /// Weight of the factor
    pub impact_score: f64,
    /// Direction of the factor
    pub trend: FactorTrend,
    /// Suggested next step
    pub recommended_action: String,
    /// Urgency of the next step
    pub priority: FactorPriority,
    /// Factor status
    pub status: String,
}

/// Risk score above which a patient gets a composite risk factor
pub const COMPOSITE_RISK_THRESHOLD: f64 = 7.0;

/// Adherence below which a patient gets a non-adherence factor
pub const NON_ADHERENCE_THRESHOLD: u32 = 80;

/// Adherence below which non-adherence is severe
pub const SEVERE_NON_ADHERENCE: u32 = 60;

/// Derive the risk factors of a patient, composite risk first
#[must_use]
pub fn risk_factors(patient: &Patient) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if patient.risk_score > COMPOSITE_RISK_THRESHOLD {
        factors.push(RiskFactor {
            factor: "High Composite Risk".to_string(),
            category: FactorCategory::Clinical,
            severity: FactorSeverity::Severe,
            clinical_finding: format!("Patient risk score is {}/10.", patient.risk_score),
            impact_score: 2.5,
            trend: if patient.trend > 0.0 {
                FactorTrend::Worsening
            } else {
                FactorTrend::Stable
            },
            recommended_action: "Immediate clinical review and care plan escalation.".to_string(),
            priority: FactorPriority::Critical,
            status: "Active".to_string(),
        });
    }

    if patient.medication_adherence < NON_ADHERENCE_THRESHOLD {
        factors.push(RiskFactor {
            factor: "Medication Non-Adherence".to_string(),
            category: FactorCategory::Behavioral,
            severity: if patient.medication_adherence < SEVERE_NON_ADHERENCE {
                FactorSeverity::Severe
            } else {
                FactorSeverity::Moderate
            },
            clinical_finding: format!("Adherence rate at {}%.", patient.medication_adherence),
            impact_score: 1.8,
            trend: FactorTrend::Stable,
            recommended_action: "Pharmacist consultation and adherence support program."
                .to_string(),
            priority: FactorPriority::High,
            status: "Active".to_string(),
        });
    }

    factors
}

/// Completed and total milestones of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    /// Milestones with status Completed
    pub completed: usize,
    /// All milestones
    pub total: usize,
}

impl MilestoneProgress {
    /// Share of completed milestones in percent, rounded
    #[must_use]
    pub fn percent(&self) -> u32 {
        super::distribution::rounded_percent(self.completed, self.total)
    }
}

/// Milestone progress of a program
#[must_use]
pub fn milestone_progress(program: &CareProgram) -> MilestoneProgress {
    MilestoneProgress {
        completed: program.completed_milestones(),
        total: program.milestones.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::population::generate_test_population;

    fn patient_with(score: f64, adherence: u32, trend: f64) -> Patient {
        let population = generate_test_population(3);
        let mut patient = population.patients()[0].clone();
        patient.risk_score = score;
        patient.medication_adherence = adherence;
        patient.trend = trend;
        patient
    }

    #[test]
    fn test_no_factors_for_healthy_patient() {
        assert!(risk_factors(&patient_with(3.0, 95, 0.0)).is_empty());
    }

    #[test]
    fn test_composite_and_adherence_factors() {
        let factors = risk_factors(&patient_with(8.5, 55, 1.2));
        assert_eq!(factors.len(), 2);
        assert_eq!(factors[0].factor, "High Composite Risk");
        assert_eq!(factors[0].clinical_finding, "Patient risk score is 8.5/10.");
        assert_eq!(factors[0].trend, FactorTrend::Worsening);
        assert_eq!(factors[1].severity, FactorSeverity::Severe);
        assert_eq!(factors[1].clinical_finding, "Adherence rate at 55%.");

        let factors = risk_factors(&patient_with(7.0, 70, -0.5));
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].severity, FactorSeverity::Moderate);
    }

    #[test]
    fn test_safety_baseline_floor() {
        let population = generate_test_population(3);
        let Some(mut patient) = population
            .patients()
            .iter()
            .find(|p| !p.safety_alerts.is_empty())
            .cloned()
        else {
            panic!("seeded population has safety alerts");
        };
        patient.risk_score = 0.5;
        for alert in &mut patient.safety_alerts {
            alert.risk_impact = 1.0;
        }

        let steps = safety_waterfall(&patient);
        assert_eq!(steps[0].value, SAFETY_FLOOR_BASELINE);
        assert_eq!(steps.len(), patient.safety_alerts.len() + 2);
        assert_eq!(steps.last().map(|s| s.kind), Some(StepKind::Total));
    }

    #[test]
    fn test_abnormal_waterfall_total() {
        let population = generate_test_population(3);
        for patient in population.patients() {
            let steps = abnormal_waterfall(patient);
            let components: f64 = steps
                .iter()
                .filter(|s| s.kind == StepKind::Component)
                .map(|s| s.value)
                .sum();
            let total = steps.last().map_or(0.0, |s| s.value);
            assert!((total - (ABNORMAL_BASELINE + components)).abs() < 0.051);
        }
    }
}
