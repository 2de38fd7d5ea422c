//! Tests for population generation

use pophealth::algorithm::population::{PopulationBuilder, ReferencePolicy};
use pophealth::models::types::RiskLevel;
use pophealth::{GeneratorConfig, PopHealthError};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::utils::{seeded_population, small_population, test_population};

#[test]
fn test_risk_tiers_match_scores() {
    let population = test_population();
    assert_eq!(population.patients().len(), 400);

    for patient in population.patients() {
        assert!(
            patient.risk_level.contains_score(patient.risk_score),
            "{} has {} with score {}",
            patient.id,
            patient.risk_level,
            patient.risk_score
        );
        if patient.risk_level == RiskLevel::Critical {
            assert!((8.5..=10.0).contains(&patient.risk_score));
        }
        assert!((0.0..=10.0).contains(&patient.risk_score));
    }
}

#[test]
fn test_same_seed_same_population() {
    let first = seeded_population(7);
    let second = seeded_population(7);
    assert_eq!(first.patients(), second.patients());
    assert_eq!(first.referrals(), second.referrals());
    assert_eq!(first.encounter_alerts(), second.encounter_alerts());

    let other = seeded_population(8);
    assert_ne!(first.patients(), other.patients());
}

#[test]
fn test_injected_rng_ignores_configured_seed() {
    let config = GeneratorConfig {
        patient_count: 20,
        referral_count: 0,
        encounter_alert_count: 0,
        ..GeneratorConfig::seeded(1)
    };
    let injected = PopulationBuilder::with_rng(config.clone(), StdRng::seed_from_u64(99))
        .unwrap()
        .build();
    let seeded = PopulationBuilder::new(GeneratorConfig {
        seed: Some(99),
        ..config
    })
    .unwrap()
    .build();
    assert_eq!(injected.patients(), seeded.patients());
}

#[test]
fn test_identifiers_follow_positions() {
    let population = small_population(10, 3);
    let ids: Vec<&str> = population.patients().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids[0], "P10000");
    assert_eq!(ids[9], "P10009");
    assert_eq!(population.referrals()[0].id, "R-89452");
    assert_eq!(population.encounter_alerts()[0].id, "A8721");

    for patient in population.patients() {
        let found = population.patient(&patient.id).map(|p| p.name.as_str());
        assert_eq!(found, Some(patient.name.as_str()));
    }
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let config = GeneratorConfig {
        transition_fraction: -0.1,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        PopulationBuilder::new(config),
        Err(PopHealthError::InvalidConfig(_))
    ));
}

#[test]
fn test_referrals_beyond_patient_count_are_orphans() {
    let population = test_population();
    let report = population.orphans();
    assert_eq!(report.referrals.len(), 1284 - 400);
    assert!(report.encounter_alerts.is_empty());
    assert!(
        report
            .referrals
            .iter()
            .all(|id| population.referral(id).is_some())
    );
}

#[test]
fn test_strict_ingestion_keeps_population_unchanged() {
    let mut population = small_population(5, 4);
    let mut alert = population.encounter_alerts()[0].clone();
    alert.id = "A1".to_string();
    alert.patient_id = "P99999".to_string();

    let before = population.encounter_alerts().len();
    let err = population
        .ingest_encounter_alerts(vec![alert.clone()], ReferencePolicy::Strict)
        .unwrap_err();
    assert!(err.to_string().contains("P99999"));
    assert_eq!(population.encounter_alerts().len(), before);

    assert_eq!(
        population
            .ingest_encounter_alerts(vec![alert], ReferencePolicy::Lenient)
            .unwrap(),
        1
    );
    assert_eq!(population.encounter_alerts().len(), before + 1);
}

#[test]
fn test_population_json_round_trip_rebuilds_index() {
    let population = small_population(6, 5);
    let json = serde_json::to_string(&population).unwrap();
    let restored: pophealth::Population = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.patients(), population.patients());
    assert!(restored.patient("P10005").is_some());
    assert!(restored.referral("R-89452").is_some());
}
