//! Referential integrity between patients and the satellite collections
//!
//! Referrals and encounter alerts reference patients by id only. The
//! generator does not guarantee that those ids resolve; these checks report
//! orphans and gate ingestion of new records.

use serde::Serialize;

use crate::error::{PopHealthError, Result};
use crate::models::{EncounterAlert, Referral};
use crate::utils::logging::log_warning;

use super::builder::Population;

/// How ingestion treats records whose patient id does not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Keep orphan records and log a warning
    #[default]
    Lenient,
    /// Reject the batch at the first orphan record
    Strict,
}

/// Ids of satellite records whose patient id does not resolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanReport {
    /// Orphan referral ids, in collection order
    pub referrals: Vec<String>,
    /// Orphan encounter alert ids, in collection order
    pub encounter_alerts: Vec<String>,
}

impl OrphanReport {
    /// Total number of orphan records
    #[must_use]
    pub fn len(&self) -> usize {
        self.referrals.len() + self.encounter_alerts.len()
    }

    /// Whether every reference resolves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A record that references a patient by id
pub trait PatientReference {
    /// Collection name used in errors and logs
    const COLLECTION: &'static str;

    /// Id of the record itself
    fn record_id(&self) -> &str;

    /// Referenced patient id
    fn patient_id(&self) -> &str;
}

impl PatientReference for Referral {
    const COLLECTION: &'static str = "referral";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn patient_id(&self) -> &str {
        &self.patient_id
    }
}

impl PatientReference for EncounterAlert {
    const COLLECTION: &'static str = "encounter alert";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn patient_id(&self) -> &str {
        &self.patient_id
    }
}

impl Population {
    /// Whether a record's patient reference resolves
    #[must_use]
    pub fn resolves<T: PatientReference>(&self, record: &T) -> bool {
        self.contains_patient(record.patient_id())
    }

    /// Referrals and encounter alerts whose patient does not exist
    #[must_use]
    pub fn orphans(&self) -> OrphanReport {
        OrphanReport {
            referrals: self
                .referrals()
                .iter()
                .filter(|r| !self.resolves(*r))
                .map(|r| r.id.clone())
                .collect(),
            encounter_alerts: self
                .encounter_alerts()
                .iter()
                .filter(|a| !self.resolves(*a))
                .map(|a| a.id.clone())
                .collect(),
        }
    }

    /// Add referrals, checking patient references under `policy`
    ///
    /// Under `Strict` nothing is added when any record is an orphan.
    /// Returns the number of orphan records accepted.
    pub fn ingest_referrals(
        &mut self,
        referrals: Vec<Referral>,
        policy: ReferencePolicy,
    ) -> Result<usize> {
        let orphans = self.check_references(&referrals, policy)?;
        for referral in referrals {
            self.push_referral(referral);
        }
        Ok(orphans)
    }

    /// Add encounter alerts, checking patient references under `policy`
    ///
    /// Under `Strict` nothing is added when any record is an orphan.
    /// Returns the number of orphan records accepted.
    pub fn ingest_encounter_alerts(
        &mut self,
        alerts: Vec<EncounterAlert>,
        policy: ReferencePolicy,
    ) -> Result<usize> {
        let orphans = self.check_references(&alerts, policy)?;
        for alert in alerts {
            self.push_encounter_alert(alert);
        }
        Ok(orphans)
    }

    fn check_references<T: PatientReference>(
        &self,
        records: &[T],
        policy: ReferencePolicy,
    ) -> Result<usize> {
        let mut orphans = records.iter().filter(|r| !self.resolves(*r));

        match policy {
            ReferencePolicy::Strict => match orphans.next() {
                Some(orphan) => Err(PopHealthError::DanglingReference {
                    collection: T::COLLECTION,
                    record_id: orphan.record_id().to_string(),
                    patient_id: orphan.patient_id().to_string(),
                }),
                None => Ok(0),
            },
            ReferencePolicy::Lenient => {
                let count = orphans.count();
                if count > 0 {
                    log_warning(
                        &format!("Accepting {count} records with unknown patients"),
                        Some(T::COLLECTION),
                    );
                }
                Ok(count)
            }
        }
    }
}
