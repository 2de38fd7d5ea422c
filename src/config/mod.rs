//! Configuration for population generation and display
//!
//! `GeneratorConfig` controls the synthetic population: collection sizes,
//! the random seed, the probability gates of the satellite collections and
//! the reference date every generated date is anchored to. `DisplayLimits`
//! holds the table truncation sizes used by the views.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PopHealthError, Result};

/// Date the generated population is anchored to
pub const DEFAULT_REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 15) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Configuration for population generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of patients to generate
    pub patient_count: usize,
    /// Number of referrals to generate
    pub referral_count: usize,
    /// Number of encounter alerts to generate
    pub encounter_alert_count: usize,
    /// Seed for the random source, `None` draws one from the OS
    pub seed: Option<u64>,
    /// Probability that a patient has care gaps
    pub gap_probability: f64,
    /// Probability that a patient has safety alerts
    pub safety_alert_probability: f64,
    /// Probability that a patient has guideline adherence records
    pub guideline_probability: f64,
    /// Probability that a patient has abnormal results
    pub abnormal_result_probability: f64,
    /// Leading fraction of patients that get a care transition
    pub transition_fraction: f64,
    /// Leading fraction of patients that get a care program
    pub program_fraction: f64,
    /// Upper bound for gated collections (gaps, alerts, guidelines, results)
    pub max_items_per_collection: usize,
    /// Date generated dates are anchored to
    pub reference_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            patient_count: 400,
            referral_count: 1284,
            encounter_alert_count: 142,
            seed: None,
            gap_probability: 0.7,
            safety_alert_probability: 0.5,
            guideline_probability: 0.65,
            abnormal_result_probability: 0.55,
            transition_fraction: 0.3,
            program_fraction: 0.6,
            max_items_per_collection: 3,
            reference_date: DEFAULT_REFERENCE_DATE,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check that every probability and fraction lies in [0, 1] and that
    /// gated collections can hold at least one item
    pub fn validate(&self) -> Result<()> {
        let unit_interval = [
            ("gap_probability", self.gap_probability),
            ("safety_alert_probability", self.safety_alert_probability),
            ("guideline_probability", self.guideline_probability),
            ("abnormal_result_probability", self.abnormal_result_probability),
            ("transition_fraction", self.transition_fraction),
            ("program_fraction", self.program_fraction),
        ];

        for (field, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(PopHealthError::invalid_config(format!(
                    "{field} must be between 0 and 1, got {value}"
                )));
            }
        }

        if self.max_items_per_collection < 1 {
            return Err(PopHealthError::invalid_config(
                "max_items_per_collection must be at least 1",
            ));
        }

        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| PopHealthError::io(path, e))?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Patients: {}", self.patient_count)?;
        writeln!(f, "  Referrals: {}", self.referral_count)?;
        writeln!(f, "  Encounter Alerts: {}", self.encounter_alert_count)?;
        match self.seed {
            Some(seed) => writeln!(f, "  Seed: {seed}")?,
            None => writeln!(f, "  Seed: random")?,
        }
        writeln!(f, "  Gap Probability: {}", self.gap_probability)?;
        writeln!(f, "  Safety Alert Probability: {}", self.safety_alert_probability)?;
        writeln!(f, "  Guideline Probability: {}", self.guideline_probability)?;
        writeln!(
            f,
            "  Abnormal Result Probability: {}",
            self.abnormal_result_probability
        )?;
        writeln!(f, "  Transition Fraction: {}", self.transition_fraction)?;
        writeln!(f, "  Program Fraction: {}", self.program_fraction)?;
        writeln!(f, "  Max Items Per Collection: {}", self.max_items_per_collection)?;
        writeln!(f, "  Reference Date: {}", self.reference_date)?;
        Ok(())
    }
}

/// Table truncation sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayLimits {
    /// Rows in the dashboard patient table
    pub dashboard: usize,
    /// Rows in the care gap and safety patient tables
    pub patient_table: usize,
    /// Rows in every other list view
    pub list: usize,
    /// Entries in "top N" rankings (critical tests, conditions)
    pub top_n: usize,
    /// Patients offered by the focused analyzers' pickers
    pub picker: usize,
    /// Records offered by the overview, guideline, program, alert and
    /// referral analyzers' pickers
    pub wide_picker: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            dashboard: 10,
            patient_table: 10,
            list: 15,
            top_n: 8,
            picker: 15,
            wide_picker: 20,
        }
    }
}
