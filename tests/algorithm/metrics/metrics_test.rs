//! Tests for derived metrics over a generated population

use pophealth::algorithm::metrics::{
    AbnormalResultStats, BehavioralStats, CareGapStats, ContinuityStats, DashboardStats,
    EncounterStats, PopulationOverview, ProgramStats, ReferralStats, StepKind, TrendSnapshot,
    abnormal_waterfall, care_gap_waterfall, flatten_records, milestone_progress,
};
use pophealth::models::types::{AuthStatus, RiskLevel};
use pophealth::{Patient, apply_filter};

use crate::utils::{no_match_filters, test_population};

#[test]
fn test_dashboard_counts_agree_with_overview() {
    let population = test_population();
    let all: Vec<&Patient> = population.patients().iter().collect();

    let dashboard = DashboardStats::compute(&all);
    let overview = PopulationOverview::compute(&all, 5);

    assert_eq!(dashboard.total, 400);
    assert_eq!(dashboard.high_risk_count, overview.critical + overview.high);
    assert_eq!(dashboard.high_risk_percent, overview.high_risk_percent);
    assert_eq!(dashboard.avg_score, overview.avg_risk);
    assert_eq!(dashboard.risk_distribution.total(), 400);
    assert_eq!(
        dashboard.risk_distribution.count(&RiskLevel::Critical),
        overview.critical
    );

    let aged: usize = overview.age_distribution.iter().map(|e| e.value).sum();
    assert_eq!(aged, 400);
    assert!(overview.top_conditions.len() <= 5);
    assert!(
        overview
            .top_conditions
            .windows(2)
            .all(|w| w[0].value >= w[1].value)
    );
}

#[test]
fn test_overview_totals_match_flattened_collections() {
    let population = test_population();
    let patients = population.patients();
    let all: Vec<&Patient> = patients.iter().collect();
    let overview = PopulationOverview::compute(&all, 5);

    let gaps = flatten_records(patients, |p| p.active_gaps.as_slice());
    let results = flatten_records(patients, |p| p.abnormal_results.as_slice());
    let flags = flatten_records(patients, |p| p.behavioral_anomalies.as_slice());

    assert_eq!(overview.total_gaps, gaps.len());
    assert_eq!(overview.total_abnormal, results.len());
    assert_eq!(overview.total_behavioral, flags.len());
    assert_eq!(CareGapStats::compute(&all).total_gaps, gaps.len());

    // patient-major order
    let owners: Vec<&str> = gaps.iter().map(|g| g.patient.id.as_str()).collect();
    let mut sorted = owners.clone();
    sorted.sort_unstable();
    assert_eq!(owners, sorted);

    let trend = TrendSnapshot::compute(&all);
    assert_eq!(trend.total_gaps, overview.total_gaps);
    assert_eq!(trend.total_safety, overview.total_safety);
}

#[test]
fn test_flag_and_result_stats_stay_within_totals() {
    let population = test_population();
    let patients = population.patients();

    let results = flatten_records(patients, |p| p.abnormal_results.as_slice());
    let all_results: Vec<_> = results.iter().collect();
    let abnormal = AbnormalResultStats::compute(&all_results, 5);
    assert_eq!(abnormal.total, results.len());
    assert!(abnormal.critical <= abnormal.total);
    assert_eq!(abnormal.severity_distribution.total(), abnormal.total);
    let ranked: usize = abnormal.top_critical.iter().map(|e| e.value).sum();
    assert!(ranked <= abnormal.critical);

    let flags = flatten_records(patients, |p| p.behavioral_anomalies.as_slice());
    let all_flags: Vec<_> = flags.iter().collect();
    let behavioral = BehavioralStats::compute(&all_flags, patients);
    assert_eq!(behavioral.total_flags, flags.len());
    assert!(behavioral.high_risk_percent <= 100);
    assert_eq!(behavioral.type_distribution.total(), flags.len());

    let programs = flatten_records(patients, |p| p.care_programs.as_slice());
    let all_programs: Vec<_> = programs.iter().collect();
    let program = ProgramStats::compute(&all_programs);
    assert_eq!(program.total, programs.len());
    assert!(program.at_risk <= program.total);
}

#[test]
fn test_empty_views_report_zero() {
    let population = test_population();
    let patients = population.patients();
    let filters = no_match_filters();

    let dashboard = DashboardStats::compute(&apply_filter(patients, &filters.patient_query().unwrap()));
    assert_eq!(dashboard.total, 0);
    assert_eq!(dashboard.high_risk_percent, "0");
    assert!(dashboard.risk_distribution.is_empty());

    assert_eq!(CareGapStats::compute(&[]).most_common, "None");

    let transitions = flatten_records(patients, |p| p.transitions.as_slice());
    let continuity = ContinuityStats::compute(&apply_filter(
        &transitions,
        &filters.continuity_query().unwrap(),
    ));
    assert_eq!(continuity.active_transitions, 0);
    assert_eq!(continuity.avg_score, "0.0");
    assert_eq!(continuity.high_risk_percent, 0);

    let encounter = EncounterStats::compute(&apply_filter(
        population.encounter_alerts(),
        &filters.encounter_query().unwrap(),
    ));
    assert_eq!(encounter.active_count, 0);

    let referral = ReferralStats::compute(&apply_filter(
        population.referrals(),
        &filters.referral_query().unwrap(),
    ));
    assert_eq!(referral.total, 0);
    assert_eq!(referral.completion_rate, 0);
}

#[test]
fn test_waterfalls_bracket_every_record() {
    let population = test_population();

    for patient in population.patients().iter().take(50) {
        let gaps = care_gap_waterfall(patient);
        assert_eq!(gaps.len(), patient.active_gaps.len() + 2);
        assert_eq!(gaps[0].kind, StepKind::Base);
        assert_eq!(gaps.last().map(|s| s.kind), Some(StepKind::Total));
        assert_eq!(gaps.last().map(|s| s.value), Some(patient.risk_score));

        let abnormal = abnormal_waterfall(patient);
        assert_eq!(abnormal.len(), patient.abnormal_results.len() + 2);
        assert_eq!(abnormal[0].value, 4.0);
        if patient.abnormal_results.is_empty() {
            assert_eq!(abnormal[1].value, 4.0);
        }
    }
}

#[test]
fn test_milestone_progress_counts_completed() {
    let population = test_population();

    for program in population.patients().iter().flat_map(|p| &p.care_programs) {
        let progress = milestone_progress(program);
        assert_eq!(progress.total, program.milestones.len());
        assert_eq!(progress.completed, program.completed_milestones());
        assert!(progress.percent() <= 100);
    }
}

#[test]
fn test_referral_stats_count_pending_authorizations() {
    let population = test_population();
    let referrals: Vec<_> = population.referrals().iter().collect();
    let stats = ReferralStats::compute(&referrals);

    let pending = population
        .referrals()
        .iter()
        .filter(|r| r.auth_status == AuthStatus::Pending)
        .count();
    assert_eq!(stats.total, population.referrals().len());
    assert_eq!(stats.pending_auth, pending);
    assert_eq!(stats.status_distribution.total(), stats.total);
}
