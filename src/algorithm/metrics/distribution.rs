//! Generic group-by, count and percentage utilities
//!
//! Every view derives its statistics the same way: flatten a collection
//! across patients, count it by some key and turn counts into percentages.

use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::{Patient, Vocabulary};

/// Percentage of `count` in `total` with one decimal, `"0"` when `total` is 0
#[must_use]
pub fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.1}", count as f64 / total as f64 * 100.0)
}

/// Percentage of `count` in `total` rounded to a whole number, 0 when `total` is 0
#[must_use]
pub fn rounded_percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Arithmetic mean, `None` for an empty input
#[must_use]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Format a mean with `decimals` places, `"0"` when there is no mean
#[must_use]
pub fn format_mean(mean: Option<f64>, decimals: usize) -> String {
    match mean {
        Some(value) => format!("{value:.decimals$}"),
        None => "0".to_string(),
    }
}

/// One bucket of a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry<K> {
    /// Bucket key
    pub name: K,
    /// Number of items in the bucket
    pub value: usize,
}

/// Counts keyed by category, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distribution<K> {
    entries: Vec<DistributionEntry<K>>,
}

impl<K> Default for Distribution<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Distribution<K> {
    /// Count items by key, keeping buckets in the order keys first appear
    pub fn count_by<T, I, F>(items: I, mut key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> K,
    {
        let mut positions: FxHashMap<K, usize> = FxHashMap::default();
        let mut entries: Vec<DistributionEntry<K>> = Vec::new();

        for item in items {
            let name = key(item);
            match positions.get(&name) {
                Some(&i) => entries[i].value += 1,
                None => {
                    positions.insert(name.clone(), entries.len());
                    entries.push(DistributionEntry { name, value: 1 });
                }
            }
        }

        Self { entries }
    }

    /// Count of a key, 0 when absent
    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        self.entries
            .iter()
            .find(|e| &e.name == key)
            .map_or(0, |e| e.value)
    }

    /// Share of a key in percent with one decimal, `"0"` when empty
    #[must_use]
    pub fn share(&self, key: &K) -> String {
        percentage(self.count(key), self.total())
    }
}

impl<K: Vocabulary + Hash> Distribution<K> {
    /// Count vocabulary values, with buckets in declaration order and
    /// empty buckets dropped
    pub fn over_variants<I: IntoIterator<Item = K>>(items: I) -> Self {
        let counts = items.into_iter().counts();
        let entries = K::VARIANTS
            .iter()
            .filter_map(|k| {
                counts.get(k).map(|&value| DistributionEntry {
                    name: *k,
                    value,
                })
            })
            .collect();
        Self { entries }
    }
}

impl<K> Distribution<K> {
    /// Buckets in order
    #[must_use]
    pub fn entries(&self) -> &[DistributionEntry<K>] {
        &self.entries
    }

    /// Sum of all bucket counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// Whether there are no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest bucket; ties go to the bucket seen first
    #[must_use]
    pub fn most_common(&self) -> Option<&DistributionEntry<K>> {
        self.entries
            .iter()
            .rev()
            .max_by_key(|e| e.value)
    }

    /// The `n` largest buckets by descending count; ties keep first-seen order
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<&DistributionEntry<K>> {
        self.entries
            .iter()
            .sorted_by(|a, b| b.value.cmp(&a.value))
            .take(n)
            .collect()
    }
}

/// A record flattened out of a patient, together with its owner
#[derive(Debug)]
pub struct PatientRecord<'a, T> {
    /// Owning patient
    pub patient: &'a Patient,
    /// The record
    pub record: &'a T,
}

impl<T> Clone for PatientRecord<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PatientRecord<'_, T> {}

/// Flatten one collection across patients, in patient then record order
pub fn flatten_records<'a, T, I, F>(patients: I, accessor: F) -> Vec<PatientRecord<'a, T>>
where
    I: IntoIterator<Item = &'a Patient>,
    F: Fn(&'a Patient) -> &'a [T],
{
    patients
        .into_iter()
        .flat_map(|patient| {
            accessor(patient)
                .iter()
                .map(move |record| PatientRecord { patient, record })
        })
        .collect()
}
