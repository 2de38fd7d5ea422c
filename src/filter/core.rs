//! Core filtering building blocks
//!
//! Every view narrows its records with a conjunction of optional predicates.
//! A predicate is either a vocabulary selection, which the "All ..." sentinel
//! disables, or a free-text search term, which the empty string disables.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{PopHealthError, Result};
use crate::models::Vocabulary;

/// Defines a criterion for filtering records of type `T`
pub trait FilterCriteria<T: ?Sized> {
    /// Determine if a record meets the filter criteria
    fn meets_criteria(&self, record: &T) -> bool;
}

/// Keep the records that meet `criteria`, in input order
pub fn apply_filter<'a, T, C, I>(records: I, criteria: &C) -> Vec<&'a T>
where
    T: 'a,
    C: FilterCriteria<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    let mut total = 0usize;
    let kept: Vec<&'a T> = records
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|record| criteria.meets_criteria(record))
        .collect();
    debug!("Filter kept {} of {} records", kept.len(), total);
    kept
}

/// The first `limit` records, for table display
#[must_use]
pub fn display_page<T>(records: &[T], limit: usize) -> &[T] {
    &records[..records.len().min(limit)]
}

/// A vocabulary predicate, disabled by the vocabulary's sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    /// Accept every value
    #[default]
    All,
    /// Accept one value
    Only(T),
}

impl<T: Vocabulary> Selection<T> {
    /// Parse a dropdown value: any "All ..." string or a label of `T`
    pub fn from_label(value: &str) -> Result<Self> {
        Self::parse_with(value, str::parse)
    }

    /// Parse a dropdown value with a custom label parser for the non-sentinel case
    pub fn parse_with<F>(value: &str, parse: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Result<T>,
    {
        if T::is_sentinel(value) {
            Ok(Self::All)
        } else {
            parse(value.trim()).map(Self::Only)
        }
    }

    /// Dropdown value of this selection, the sentinel for `All`
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => T::SENTINEL,
            Self::Only(value) => value.label(),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    /// Whether any of `values` passes; an empty input passes only `All`
    pub fn matches_any<'a, I>(&self, values: I) -> bool
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        match self {
            Self::All => true,
            Self::Only(selected) => values.into_iter().any(|v| v == selected),
        }
    }

    /// Whether this selection filters anything
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }
}

impl<T: Vocabulary> FromStr for Selection<T> {
    type Err = PopHealthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl<T: Vocabulary> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

/// Case-insensitive substring search, disabled when empty
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Build a search term; surrounding whitespace is ignored
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// Whether the term filters anything
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Whether any field contains the term
    #[must_use]
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        !self.is_active()
            || fields
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchTerm {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
