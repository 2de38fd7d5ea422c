//! Tests for filtering generated populations through the dashboard filters

use pophealth::algorithm::metrics::flatten_records;
use pophealth::filter::{CareGapQuery, PatientQuery};
use pophealth::models::types::{GapType, Gender, OverdueBand, RiskLevel};
use pophealth::{FilterState, Patient, PopHealthError, Selection, apply_filter, display_page};

use crate::utils::{no_match_filters, test_population};

#[test]
fn test_default_filters_keep_everything() {
    let population = test_population();
    let patients = population.patients();
    let filters = FilterState::default();

    assert_eq!(apply_filter(patients, &filters.patient_query().unwrap()).len(), 400);
    assert_eq!(apply_filter(patients, &filters.care_gap_query().unwrap()).len(), 400);
    assert_eq!(apply_filter(patients, &filters.safety_query().unwrap()).len(), 400);
    assert_eq!(apply_filter(patients, &filters.guideline_query().unwrap()).len(), 400);

    let programs = flatten_records(patients, |p| p.care_programs.as_slice());
    assert_eq!(
        apply_filter(&programs, &filters.program_query().unwrap()).len(),
        programs.len()
    );
    assert_eq!(
        apply_filter(population.referrals(), &filters.referral_query().unwrap()).len(),
        population.referrals().len()
    );
}

#[test]
fn test_filtered_subset_preserves_order_and_is_idempotent() {
    let population = test_population();
    let query = PatientQuery {
        risk_level: Selection::Only(RiskLevel::High),
        gender: Selection::Only(Gender::Female),
        ..PatientQuery::default()
    };

    let filtered = apply_filter(population.patients(), &query);
    assert!(
        filtered
            .iter()
            .all(|p| p.risk_level == RiskLevel::High && p.gender == Gender::Female)
    );

    let positions: Vec<usize> = filtered
        .iter()
        .filter_map(|p| population.patients().iter().position(|q| q.id == p.id))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let again = apply_filter(filtered.iter().copied(), &query);
    assert_eq!(again, filtered);
}

#[test]
fn test_predicates_combine_with_and() {
    let population = test_population();
    let patients = population.patients();

    let by_risk = apply_filter(
        patients,
        &PatientQuery {
            risk_level: Selection::Only(RiskLevel::Critical),
            ..PatientQuery::default()
        },
    );
    let by_both = apply_filter(
        patients,
        &PatientQuery {
            risk_level: Selection::Only(RiskLevel::Critical),
            gender: Selection::Only(Gender::Male),
            ..PatientQuery::default()
        },
    );

    assert!(by_both.len() <= by_risk.len());
    assert!(by_both.iter().all(|p| by_risk.contains(p)));
}

#[test]
fn test_search_is_case_insensitive() {
    let population = test_population();
    let target: &Patient = &population.patients()[17];

    let filters = FilterState {
        search: format!("  {}  ", target.name.to_uppercase()),
        ..FilterState::default()
    };
    let found = apply_filter(population.patients(), &filters.patient_query().unwrap());
    assert!(found.iter().any(|p| p.id == target.id));

    let by_id = FilterState {
        search: target.id.to_lowercase(),
        ..FilterState::default()
    };
    let found = apply_filter(population.patients(), &by_id.patient_query().unwrap());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, target.id);
}

#[test]
fn test_gap_type_and_band_hold_on_one_gap() {
    let population = test_population();
    let query = CareGapQuery {
        gap_type: Selection::Only(GapType::Screening),
        time_overdue: Selection::Only(OverdueBand::OverAYear),
        ..CareGapQuery::default()
    };

    let filtered = apply_filter(population.patients(), &query);
    for patient in &filtered {
        assert!(patient.active_gaps.iter().any(|g| {
            g.gap_type == GapType::Screening && g.overdue_band() == OverdueBand::OverAYear
        }));
    }

    let expected = population
        .patients()
        .iter()
        .filter(|p| {
            p.active_gaps.iter().any(|g| {
                g.gap_type == GapType::Screening && g.overdue_band() == OverdueBand::OverAYear
            })
        })
        .count();
    assert_eq!(filtered.len(), expected);
}

#[test]
fn test_unmatched_search_empties_every_view() {
    let population = test_population();
    let patients = population.patients();
    let filters = no_match_filters();

    assert!(apply_filter(patients, &filters.patient_query().unwrap()).is_empty());
    assert!(apply_filter(patients, &filters.care_gap_query().unwrap()).is_empty());
    assert!(apply_filter(patients, &filters.safety_query().unwrap()).is_empty());
    assert!(apply_filter(patients, &filters.guideline_query().unwrap()).is_empty());

    let results = flatten_records(patients, |p| p.abnormal_results.as_slice());
    assert!(apply_filter(&results, &filters.abnormal_result_query().unwrap()).is_empty());

    let flags = flatten_records(patients, |p| p.behavioral_anomalies.as_slice());
    assert!(apply_filter(&flags, &filters.behavioral_query().unwrap()).is_empty());

    let transitions = flatten_records(patients, |p| p.transitions.as_slice());
    assert!(apply_filter(&transitions, &filters.continuity_query().unwrap()).is_empty());

    let programs = flatten_records(patients, |p| p.care_programs.as_slice());
    assert!(apply_filter(&programs, &filters.program_query().unwrap()).is_empty());

    assert!(
        apply_filter(population.encounter_alerts(), &filters.encounter_query().unwrap())
            .is_empty()
    );
    assert!(apply_filter(population.referrals(), &filters.referral_query().unwrap()).is_empty());
}

#[test]
fn test_care_gap_view_narrows_by_age_and_search() {
    let population = test_population();
    let filters = FilterState {
        age_range: "65+".to_string(),
        ..FilterState::default()
    };
    let seniors = apply_filter(population.patients(), &filters.care_gap_query().unwrap());
    let expected = population.patients().iter().filter(|p| p.age > 65).count();
    assert_eq!(seniors.len(), expected);

    let target = &population.patients()[3];
    let by_id = FilterState {
        search: target.id.clone(),
        ..FilterState::default()
    };
    let found = apply_filter(population.patients(), &by_id.safety_query().unwrap());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, target.id);
}

#[test]
fn test_unknown_label_is_an_error() {
    let filters = FilterState {
        risk_level: "Extreme".to_string(),
        ..FilterState::default()
    };
    match filters.patient_query() {
        Err(PopHealthError::UnknownLabel { label, .. }) => assert_eq!(label, "Extreme"),
        other => panic!("expected unknown label, got {other:?}"),
    }
}

#[test]
fn test_filters_load_from_partial_json() {
    let filters: FilterState =
        serde_json::from_str(r#"{"riskLevel": "Critical", "gapType": "Vaccine"}"#).unwrap();
    assert_eq!(filters.time_window, "Last 30 Days");

    let population = test_population();
    let gaps = apply_filter(population.patients(), &filters.care_gap_query().unwrap());
    assert!(gaps.iter().all(|p| p.risk_level == RiskLevel::Critical));
    assert!(
        gaps.iter()
            .all(|p| p.active_gaps.iter().any(|g| g.gap_type == GapType::Vaccine))
    );
}

#[test]
fn test_display_page_truncates() {
    let population = test_population();
    let filtered = apply_filter(population.patients(), &PatientQuery::default());

    assert_eq!(display_page(&filtered, 10).len(), 10);
    assert_eq!(display_page(&filtered, 1000).len(), 400);
    assert_eq!(display_page(&filtered, 10)[0].id, "P10000");
}
