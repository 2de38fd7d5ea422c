//! Per-view summary statistics
//!
//! Each view computes its headline numbers from its own filtered subset.
//! Inputs are the references returned by the view's filter; nothing is
//! cached between calls.

use serde::Serialize;

use crate::models::types::{
    AbnormalResultStatus, AdherenceLevel, AlertType, BehaviorType, ComplianceStatus,
    Condition, EnrollmentStatus, GapType, GuardrailType, ReferralStatus, RiskLevel,
};
use crate::models::{
    AbnormalResult, BehavioralAnomaly, CareProgram, CareTransition, EncounterAlert, Patient,
    Referral,
};

use super::distribution::{
    Distribution, DistributionEntry, PatientRecord, format_mean, mean, percentage,
    rounded_percent,
};

/// Headline numbers of the risk dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Patients in view
    pub total: usize,
    /// Critical plus High patients
    pub high_risk_count: usize,
    /// Share of high-risk patients
    pub high_risk_percent: String,
    /// Mean risk score, one decimal
    pub avg_score: String,
    /// Patients with complex needs
    pub complex_needs: usize,
    /// Patients per risk tier
    pub risk_distribution: Distribution<RiskLevel>,
}

impl DashboardStats {
    /// Compute from the filtered patients
    #[must_use]
    pub fn compute(patients: &[&Patient]) -> Self {
        let total = patients.len();
        let high_risk_count = patients.iter().filter(|p| p.is_high_risk()).count();

        Self {
            total,
            high_risk_count,
            high_risk_percent: percentage(high_risk_count, total),
            avg_score: format_mean(mean(patients.iter().map(|p| p.risk_score)), 1),
            complex_needs: patients.iter().filter(|p| p.has_complex_needs()).count(),
            risk_distribution: Distribution::over_variants(patients.iter().map(|p| p.risk_level)),
        }
    }
}

/// Age buckets of the population overview
pub const AGE_BUCKETS: [(&str, u32); 5] = [
    ("18-30", 30),
    ("31-45", 45),
    ("46-60", 60),
    ("61-75", 75),
    ("76+", u32::MAX),
];

/// Population-wide overview across every lens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationOverview {
    /// Patients in view
    pub total: usize,
    /// Critical patients
    pub critical: usize,
    /// High patients
    pub high: usize,
    /// Share of Critical plus High patients
    pub high_risk_percent: String,
    /// Mean risk score, one decimal
    pub avg_risk: String,
    /// Care gaps across all patients
    pub total_gaps: usize,
    /// Safety alerts across all patients
    pub total_safety: usize,
    /// Abnormal results across all patients
    pub total_abnormal: usize,
    /// Behavioral anomalies across all patients
    pub total_behavioral: usize,
    /// Guideline records that are not compliant
    pub guideline_issues: usize,
    /// Mean medication adherence, one decimal
    pub avg_adherence: String,
    /// Mean engagement, whole number
    pub avg_engagement: String,
    /// Patients with at least one transition
    pub with_transitions: usize,
    /// Patients enrolled in at least one program
    pub enrolled_in_programs: usize,
    /// Share of compliant guideline records
    pub compliance_rate: String,
    /// Critical abnormal results
    pub critical_abnormal: usize,
    /// Critical safety alerts
    pub critical_safety: usize,
    /// Patients per risk tier
    pub risk_distribution: Distribution<RiskLevel>,
    /// Patients per age bucket, every bucket present
    pub age_distribution: Vec<DistributionEntry<&'static str>>,
    /// Most frequent primary conditions
    pub top_conditions: Vec<DistributionEntry<Condition>>,
}

impl PopulationOverview {
    /// Compute from the patients in view, ranking `top_n` conditions
    #[must_use]
    pub fn compute(patients: &[&Patient], top_n: usize) -> Self {
        let total = patients.len();
        let critical = count_level(patients, RiskLevel::Critical);
        let high = count_level(patients, RiskLevel::High);
        let guidelines = patients.iter().flat_map(|p| &p.guideline_adherence);
        let total_guidelines = guidelines.clone().count();
        let compliant = guidelines
            .filter(|g| g.status == ComplianceStatus::Compliant)
            .count();

        let mut age_distribution: Vec<DistributionEntry<&'static str>> = AGE_BUCKETS
            .iter()
            .map(|(name, _)| DistributionEntry { name: *name, value: 0 })
            .collect();
        for patient in patients {
            if let Some(i) = AGE_BUCKETS.iter().position(|(_, max)| patient.age <= *max) {
                age_distribution[i].value += 1;
            }
        }

        let conditions = Distribution::count_by(
            patients.iter().flat_map(|p| p.primary_conditions.iter().copied()),
            |c| c,
        );

        Self {
            total,
            critical,
            high,
            high_risk_percent: percentage(critical + high, total),
            avg_risk: format_mean(mean(patients.iter().map(|p| p.risk_score)), 1),
            total_gaps: patients.iter().map(|p| p.active_gaps.len()).sum(),
            total_safety: patients.iter().map(|p| p.safety_alerts.len()).sum(),
            total_abnormal: patients.iter().map(|p| p.abnormal_results.len()).sum(),
            total_behavioral: patients.iter().map(|p| p.behavioral_anomalies.len()).sum(),
            guideline_issues: total_guidelines - compliant,
            avg_adherence: format_mean(
                mean(patients.iter().map(|p| f64::from(p.medication_adherence))),
                1,
            ),
            avg_engagement: format_mean(
                mean(patients.iter().map(|p| f64::from(p.engagement_score))),
                0,
            ),
            with_transitions: patients.iter().filter(|p| !p.transitions.is_empty()).count(),
            enrolled_in_programs: patients.iter().filter(|p| !p.care_programs.is_empty()).count(),
            compliance_rate: percentage(compliant, total_guidelines),
            critical_abnormal: patients
                .iter()
                .flat_map(|p| &p.abnormal_results)
                .filter(|r| r.is_critical())
                .count(),
            critical_safety: patients
                .iter()
                .flat_map(|p| &p.safety_alerts)
                .filter(|a| a.severity == RiskLevel::Critical)
                .count(),
            risk_distribution: Distribution::over_variants(patients.iter().map(|p| p.risk_level)),
            age_distribution,
            top_conditions: conditions.top_n(top_n).into_iter().cloned().collect(),
        }
    }
}

impl PopulationOverview {
    /// Multi-line text report of the overview
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Population Overview:\n");
        summary.push_str(&format!("  Patients: {}\n", self.total));
        summary.push_str(&format!(
            "  Critical / High: {} / {} ({}%)\n",
            self.critical, self.high, self.high_risk_percent
        ));
        summary.push_str(&format!("  Average Risk Score: {}\n", self.avg_risk));
        summary.push_str(&format!("  Average Adherence: {}%\n", self.avg_adherence));
        summary.push_str(&format!("  Average Engagement: {}\n", self.avg_engagement));

        summary.push_str("\nClinical Burden:\n");
        summary.push_str(&format!("  Care Gaps: {}\n", self.total_gaps));
        summary.push_str(&format!(
            "  Safety Alerts: {} ({} critical)\n",
            self.total_safety, self.critical_safety
        ));
        summary.push_str(&format!(
            "  Abnormal Results: {} ({} critical)\n",
            self.total_abnormal, self.critical_abnormal
        ));
        summary.push_str(&format!("  Behavioral Flags: {}\n", self.total_behavioral));
        summary.push_str(&format!(
            "  Guideline Issues: {} (compliance {}%)\n",
            self.guideline_issues, self.compliance_rate
        ));
        summary.push_str(&format!("  With Transitions: {}\n", self.with_transitions));
        summary.push_str(&format!(
            "  Enrolled in Programs: {}\n",
            self.enrolled_in_programs
        ));

        summary.push_str("\nRisk Distribution:\n");
        for entry in self.risk_distribution.entries() {
            summary.push_str(&format!("  {}: {}\n", entry.name, entry.value));
        }

        summary.push_str("\nAge Distribution:\n");
        for entry in &self.age_distribution {
            summary.push_str(&format!("  {}: {}\n", entry.name, entry.value));
        }

        if !self.top_conditions.is_empty() {
            summary.push_str("\nTop Conditions:\n");
            for entry in &self.top_conditions {
                summary.push_str(&format!("  {}: {}\n", entry.name, entry.value));
            }
        }

        summary
    }
}

fn count_level(patients: &[&Patient], level: RiskLevel) -> usize {
    patients.iter().filter(|p| p.risk_level == level).count()
}

/// Current-period numbers of the trend surveillance view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    /// Patients in view
    pub total: usize,
    /// Mean risk score, one decimal
    pub avg_risk: String,
    /// Mean medication adherence, one decimal
    pub avg_adherence: String,
    /// Mean engagement, whole number
    pub avg_engagement: String,
    /// Care gaps across all patients
    pub total_gaps: usize,
    /// Safety alerts across all patients
    pub total_safety: usize,
    /// Critical patients
    pub critical: usize,
    /// High patients
    pub high: usize,
}

impl TrendSnapshot {
    /// Compute from the patients in view
    #[must_use]
    pub fn compute(patients: &[&Patient]) -> Self {
        Self {
            total: patients.len(),
            avg_risk: format_mean(mean(patients.iter().map(|p| p.risk_score)), 1),
            avg_adherence: format_mean(
                mean(patients.iter().map(|p| f64::from(p.medication_adherence))),
                1,
            ),
            avg_engagement: format_mean(
                mean(patients.iter().map(|p| f64::from(p.engagement_score))),
                0,
            ),
            total_gaps: patients.iter().map(|p| p.active_gaps.len()).sum(),
            total_safety: patients.iter().map(|p| p.safety_alerts.len()).sum(),
            critical: count_level(patients, RiskLevel::Critical),
            high: count_level(patients, RiskLevel::High),
        }
    }
}

/// Headline numbers of the care gap view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGapStats {
    /// Patients in view
    pub total_patients: usize,
    /// Gaps with Critical priority or more than 90 days overdue
    pub critical_gaps: usize,
    /// Gaps across the patients in view
    pub total_gaps: usize,
    /// Most common gap type label, "None" without gaps
    pub most_common: String,
    /// Gaps per type
    pub gap_type_distribution: Distribution<GapType>,
}

impl CareGapStats {
    /// Compute from the filtered patients
    #[must_use]
    pub fn compute(patients: &[&Patient]) -> Self {
        let gaps = patients.iter().flat_map(|p| &p.active_gaps);
        let distribution = Distribution::count_by(gaps.clone(), |g| g.gap_type);

        Self {
            total_patients: patients.len(),
            critical_gaps: gaps.clone().filter(|g| g.is_critical()).count(),
            total_gaps: gaps.count(),
            most_common: distribution
                .most_common()
                .map_or_else(|| "None".to_string(), |e| e.name.to_string()),
            gap_type_distribution: distribution,
        }
    }
}

/// Headline numbers of the safety guardrail view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyStats {
    /// Alerts across the patients in view
    pub total_alerts: usize,
    /// Critical alerts
    pub critical: usize,
    /// High alerts
    pub high: usize,
    /// Contraindication alerts
    pub contraindications: usize,
    /// Drug interaction alerts
    pub drug_interactions: usize,
    /// Alerts per guardrail type
    pub guardrail_distribution: Distribution<GuardrailType>,
}

impl SafetyStats {
    /// Compute from the filtered patients
    #[must_use]
    pub fn compute(patients: &[&Patient]) -> Self {
        let alerts = patients.iter().flat_map(|p| &p.safety_alerts);
        let guardrail_distribution = Distribution::count_by(alerts.clone(), |a| a.guardrail_type);

        Self {
            total_alerts: alerts.clone().count(),
            critical: alerts.clone().filter(|a| a.severity == RiskLevel::Critical).count(),
            high: alerts.clone().filter(|a| a.severity == RiskLevel::High).count(),
            contraindications: guardrail_distribution.count(&GuardrailType::Contraindication),
            drug_interactions: guardrail_distribution.count(&GuardrailType::DrugInteraction),
            guardrail_distribution,
        }
    }
}

/// Headline numbers of the guideline adherence view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineStats {
    /// Guideline records across the patients in view
    pub total_cases: usize,
    /// Share of compliant records
    pub compliant_rate: String,
    /// Patients with any Non-Compliant record
    pub non_compliant_patients: usize,
    /// Patients with any At Risk record
    pub at_risk_patients: usize,
    /// Records per compliance status
    pub compliance_distribution: Distribution<ComplianceStatus>,
}

impl GuidelineStats {
    /// Compute from the filtered patients
    #[must_use]
    pub fn compute(patients: &[&Patient]) -> Self {
        let records = patients.iter().flat_map(|p| &p.guideline_adherence);
        let compliance_distribution = Distribution::over_variants(records.clone().map(|g| g.status));
        let total_cases = records.count();
        let any_with = |status: ComplianceStatus| {
            patients
                .iter()
                .filter(|p| p.guideline_adherence.iter().any(|g| g.status == status))
                .count()
        };

        Self {
            total_cases,
            compliant_rate: percentage(
                compliance_distribution.count(&ComplianceStatus::Compliant),
                total_cases,
            ),
            non_compliant_patients: any_with(ComplianceStatus::NonCompliant),
            at_risk_patients: any_with(ComplianceStatus::AtRisk),
            compliance_distribution,
        }
    }
}

/// Headline numbers of the abnormal results view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbnormalResultStats {
    /// Results in view
    pub total: usize,
    /// Critical results
    pub critical: usize,
    /// Results not yet acknowledged
    pub pending: usize,
    /// Share of critical results
    pub critical_percent: String,
    /// Results per severity
    pub severity_distribution: Distribution<RiskLevel>,
    /// Test names with the most critical results
    pub top_critical: Vec<DistributionEntry<String>>,
}

impl AbnormalResultStats {
    /// Compute from the filtered results, ranking `top_n` critical tests
    #[must_use]
    pub fn compute(results: &[&PatientRecord<'_, AbnormalResult>], top_n: usize) -> Self {
        let total = results.len();
        let critical = results.iter().filter(|r| r.record.is_critical()).count();
        let critical_tests = Distribution::count_by(
            results.iter().filter(|r| r.record.is_critical()),
            |r| r.record.test_name.clone(),
        );

        Self {
            total,
            critical,
            pending: results
                .iter()
                .filter(|r| r.record.status == AbnormalResultStatus::New)
                .count(),
            critical_percent: percentage(critical, total),
            severity_distribution: Distribution::count_by(results.iter(), |r| r.record.severity),
            top_critical: critical_tests.top_n(top_n).into_iter().cloned().collect(),
        }
    }
}

/// Headline numbers of the behavioral anomaly view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralStats {
    /// Flags in view
    pub total_flags: usize,
    /// Critical flags
    pub critical: usize,
    /// Flags on patients with engagement below 50
    pub high_risk_count: usize,
    /// Share of such flags, rounded
    pub high_risk_percent: u32,
    /// Mean medication adherence over every patient, one decimal
    pub med_adherence: String,
    /// Flags per behavior type
    pub type_distribution: Distribution<BehaviorType>,
}

impl BehavioralStats {
    /// Compute from the filtered flags
    ///
    /// Medication adherence is averaged over `population`, not the flags.
    #[must_use]
    pub fn compute(flags: &[&PatientRecord<'_, BehavioralAnomaly>], population: &[Patient]) -> Self {
        let total_flags = flags.len();
        let high_risk_count = flags
            .iter()
            .filter(|f| f.patient.has_low_engagement())
            .count();

        Self {
            total_flags,
            critical: flags
                .iter()
                .filter(|f| f.record.severity == RiskLevel::Critical)
                .count(),
            high_risk_count,
            high_risk_percent: rounded_percent(high_risk_count, total_flags),
            med_adherence: format_mean(
                mean(population.iter().map(|p| f64::from(p.medication_adherence))),
                1,
            ),
            type_distribution: Distribution::count_by(flags.iter(), |f| f.record.behavior_type),
        }
    }
}

/// Headline numbers of the continuity of care view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuityStats {
    /// Transitions in view
    pub active_transitions: usize,
    /// Transitions flagged high risk
    pub high_risk_count: usize,
    /// Share of high-risk transitions, rounded
    pub high_risk_percent: u32,
    /// Mean coordination score on a 0 to 10 scale, one decimal
    pub avg_score: String,
}

impl ContinuityStats {
    /// Compute from the filtered transitions
    ///
    /// An empty view averages to "0.0".
    #[must_use]
    pub fn compute(transitions: &[&PatientRecord<'_, CareTransition>]) -> Self {
        let active_transitions = transitions.len();
        let high_risk_count = transitions.iter().filter(|t| t.record.is_high_risk()).count();
        let score_sum: u32 = transitions.iter().map(|t| t.record.coordination_score).sum();
        let avg = f64::from(score_sum) / active_transitions.max(1) as f64 / 10.0;

        Self {
            active_transitions,
            high_risk_count,
            high_risk_percent: rounded_percent(high_risk_count, active_transitions),
            avg_score: format!("{avg:.1}"),
        }
    }
}

/// Headline numbers of the program adherence view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStats {
    /// Enrollments in view
    pub total: usize,
    /// Share of completed enrollments
    pub completion_rate: String,
    /// Mean adherence, whole number
    pub avg_adherence: String,
    /// Enrollments at risk
    pub at_risk: usize,
    /// Enrollments per adherence band
    pub adherence_distribution: Distribution<AdherenceLevel>,
}

impl ProgramStats {
    /// Compute from the filtered enrollments
    #[must_use]
    pub fn compute(programs: &[&PatientRecord<'_, CareProgram>]) -> Self {
        let total = programs.len();
        let completed = programs
            .iter()
            .filter(|p| p.record.status == EnrollmentStatus::Completed)
            .count();

        Self {
            total,
            completion_rate: percentage(completed, total),
            avg_adherence: format_mean(
                mean(programs.iter().map(|p| f64::from(p.record.adherence_percent))),
                0,
            ),
            at_risk: programs.iter().filter(|p| p.record.is_at_risk()).count(),
            adherence_distribution: Distribution::over_variants(
                programs.iter().map(|p| p.record.adherence_level()),
            ),
        }
    }
}

/// Headline numbers of the encounter and resourcing view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterStats {
    /// Alerts in view
    pub active_count: usize,
    /// Critical alerts
    pub critical: usize,
    /// Urgent visit flags
    pub urgent_visits: usize,
    /// Alerts per type
    pub type_distribution: Distribution<AlertType>,
}

impl EncounterStats {
    /// Compute from the filtered alerts
    #[must_use]
    pub fn compute(alerts: &[&EncounterAlert]) -> Self {
        let type_distribution = Distribution::count_by(alerts.iter(), |a| a.alert_type);

        Self {
            active_count: alerts.len(),
            critical: alerts
                .iter()
                .filter(|a| a.severity == RiskLevel::Critical)
                .count(),
            urgent_visits: type_distribution.count(&AlertType::UrgentVisit),
            type_distribution,
        }
    }
}

/// Headline numbers of the referral view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralStats {
    /// Referrals in view
    pub total: usize,
    /// Referrals awaiting authorization
    pub pending_auth: usize,
    /// Urgent and STAT referrals
    pub urgent: usize,
    /// Share of completed referrals, rounded
    pub completion_rate: u32,
    /// Referrals per status
    pub status_distribution: Distribution<ReferralStatus>,
}

impl ReferralStats {
    /// Compute from the filtered referrals
    #[must_use]
    pub fn compute(referrals: &[&Referral]) -> Self {
        let total = referrals.len();
        let status_distribution = Distribution::over_variants(referrals.iter().map(|r| r.status));

        Self {
            total,
            pending_auth: referrals.iter().filter(|r| r.is_pending_auth()).count(),
            urgent: referrals.iter().filter(|r| r.is_urgent()).count(),
            completion_rate: rounded_percent(
                status_distribution.count(&ReferralStatus::Completed),
                total,
            ),
            status_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_views_do_not_divide_by_zero() {
        let dashboard = DashboardStats::compute(&[]);
        assert_eq!(dashboard.high_risk_percent, "0");
        assert_eq!(dashboard.avg_score, "0");
        assert!(dashboard.risk_distribution.is_empty());

        let gaps = CareGapStats::compute(&[]);
        assert_eq!(gaps.most_common, "None");

        let guidelines = GuidelineStats::compute(&[]);
        assert_eq!(guidelines.compliant_rate, "0");

        let abnormal = AbnormalResultStats::compute(&[], 8);
        assert_eq!(abnormal.critical_percent, "0");
        assert!(abnormal.top_critical.is_empty());

        let behavioral = BehavioralStats::compute(&[], &[]);
        assert_eq!(behavioral.high_risk_percent, 0);
        assert_eq!(behavioral.med_adherence, "0");

        let continuity = ContinuityStats::compute(&[]);
        assert_eq!(continuity.avg_score, "0.0");
        assert_eq!(continuity.high_risk_percent, 0);

        let programs = ProgramStats::compute(&[]);
        assert_eq!(programs.completion_rate, "0");
        assert_eq!(programs.avg_adherence, "0");

        assert_eq!(ReferralStats::compute(&[]).completion_rate, 0);
        assert_eq!(EncounterStats::compute(&[]).active_count, 0);

        let overview = PopulationOverview::compute(&[], 8);
        assert_eq!(overview.compliance_rate, "0");
        assert_eq!(overview.age_distribution.len(), AGE_BUCKETS.len());
        assert_eq!(TrendSnapshot::compute(&[]).avg_engagement, "0");
    }
}
