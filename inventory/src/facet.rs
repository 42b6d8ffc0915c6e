//! Facet filters for the inventory list.
//!
//! DESIGN
//! ======
//! Facets are a closed enum rather than string keys, and each facet maps to
//! an ordered set of accepted values. An empty set means the facet is
//! inactive. Matching is AND across active facets and OR within one facet.

#[cfg(test)]
#[path = "facet_test.rs"]
mod facet_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::{ServerField, ServerRecord};

/// A dimension the inventory can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    OperatingSystem,
    Location,
    Manufacturer,
    ApplicationOwner,
    ServerType,
    Status,
}

impl Facet {
    pub const ALL: [Self; 6] = [
        Self::OperatingSystem,
        Self::Location,
        Self::Manufacturer,
        Self::ApplicationOwner,
        Self::ServerType,
        Self::Status,
    ];

    /// The record attribute this facet filters on.
    #[must_use]
    pub fn field(self) -> ServerField {
        match self {
            Self::OperatingSystem => ServerField::OperatingSystem,
            Self::Location => ServerField::Location,
            Self::Manufacturer => ServerField::Manufacturer,
            Self::ApplicationOwner => ServerField::ApplicationOwner,
            Self::ServerType => ServerField::ServerType,
            Self::Status => ServerField::Status,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.field().key()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Status => "Server Status",
            other => other.field().label(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown facet: {0}")]
pub struct UnknownFacet(pub String);

impl FromStr for Facet {
    type Err = UnknownFacet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = s.parse::<ServerField>().map_err(|_| UnknownFacet(s.to_owned()))?;
        Self::ALL
            .into_iter()
            .find(|facet| facet.field() == field)
            .ok_or_else(|| UnknownFacet(s.to_owned()))
    }
}

/// Accepted values per facet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    accepted: BTreeMap<Facet, BTreeSet<String>>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterState::accept`] for one facet and many values.
    #[must_use]
    pub fn with<I, S>(mut self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.accept(facet, value);
        }
        self
    }

    /// Add `value` to the accepted set. Returns `true` if it was not present.
    pub fn accept(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        self.accepted.entry(facet).or_default().insert(value.into())
    }

    /// Remove `value` from the accepted set. Returns `true` if it was present.
    pub fn reject(&mut self, facet: Facet, value: &str) -> bool {
        let Some(values) = self.accepted.get_mut(&facet) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.accepted.remove(&facet);
        }
        removed
    }

    /// Flip membership of `value`; returns whether it is accepted afterwards.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        if self.reject(facet, value) {
            false
        } else {
            self.accept(facet, value);
            true
        }
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        self.accepted.remove(&facet);
    }

    pub fn clear(&mut self) {
        self.accepted.clear();
    }

    /// Accepted values for `facet` (empty when inactive).
    pub fn accepted(&self, facet: Facet) -> impl Iterator<Item = &str> {
        self.accepted
            .get(&facet)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    #[must_use]
    pub fn is_facet_active(&self, facet: Facet) -> bool {
        self.accepted.get(&facet).is_some_and(|values| !values.is_empty())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.accepted.values().any(|values| !values.is_empty())
    }

    /// Total number of accepted values across facets (the filter badge count).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.accepted.values().map(BTreeSet::len).sum()
    }

    /// Whether `record` passes every active facet.
    #[must_use]
    pub fn matches(&self, record: &ServerRecord) -> bool {
        self.accepted
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .all(|(facet, values)| values.contains(&*record.field_text(facet.field())))
    }
}

/// One selectable value in the filter panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub count: usize,
}

/// Distinct non-empty values of `facet` present in `records`, sorted, with counts.
#[must_use]
pub fn facet_options(records: &[ServerRecord], facet: Facet) -> Vec<FacetOption> {
    let mut counts = BTreeMap::<String, usize>::new();
    for record in records {
        let value = record.field_text(facet.field());
        if value.is_empty() {
            continue;
        }
        *counts.entry(value.into_owned()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| FacetOption { value, count })
        .collect()
}
