//! Shared fixtures for the integration tests

use pophealth::{FilterState, GeneratorConfig, Population, PopulationBuilder};

/// Seed used by the default fixture
pub const TEST_SEED: u64 = 42;

/// Population with the default sizes, generated from [`TEST_SEED`]
#[must_use]
pub fn test_population() -> Population {
    seeded_population(TEST_SEED)
}

/// Population with the default sizes, generated from `seed`
#[must_use]
pub fn seeded_population(seed: u64) -> Population {
    PopulationBuilder::new(GeneratorConfig::seeded(seed))
        .expect("default configuration is valid")
        .build()
}

/// Small population for tests that inspect every record
#[must_use]
pub fn small_population(patients: usize, seed: u64) -> Population {
    let config = GeneratorConfig {
        patient_count: patients,
        referral_count: patients,
        encounter_alert_count: patients,
        ..GeneratorConfig::seeded(seed)
    };
    PopulationBuilder::new(config)
        .expect("small configuration is valid")
        .build()
}

/// Filters whose search term matches nothing
#[must_use]
pub fn no_match_filters() -> FilterState {
    FilterState {
        search: "zzz-no-match".to_string(),
        ..FilterState::default()
    }
}
