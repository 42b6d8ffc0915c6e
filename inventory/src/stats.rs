//! Dashboard KPIs and breakdowns derived from the inventory.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{ServerField, ServerRecord, ServerStatus};

/// Headline counts for the KPI cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub live: usize,
    pub shutdown: usize,
    pub newly_added: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn compute(records: &[ServerRecord]) -> Self {
        let mut counts = Self { total: records.len(), ..Self::default() };
        for record in records {
            match record.status {
                ServerStatus::Live => counts.live += 1,
                ServerStatus::Shutdown => counts.shutdown += 1,
                ServerStatus::New => counts.newly_added += 1,
            }
        }
        counts
    }
}

/// One slice of a breakdown chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub name: String,
    pub count: usize,
    /// Share of the whole inventory, 0.0 to 100.0.
    pub percent: f64,
}

/// Count records per value of `field`, largest first (ties by name).
///
/// Records with an empty value are grouped under `"Unspecified"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn breakdown(records: &[ServerRecord], field: ServerField) -> Vec<Slice> {
    let mut counts = BTreeMap::<String, usize>::new();
    for record in records {
        let value = record.field_text(field);
        let key = if value.trim().is_empty() { "Unspecified".to_owned() } else { value.into_owned() };
        *counts.entry(key).or_insert(0) += 1;
    }
    let total = records.len();
    let mut slices: Vec<Slice> = counts
        .into_iter()
        .map(|(name, count)| Slice {
            name,
            count,
            percent: if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 },
        })
        .collect();
    // BTreeMap order is by name, and the sort is stable, so ties stay alphabetical.
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

/// Everything the dashboard page shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub counts: StatusCounts,
    pub by_application_owner: Vec<Slice>,
    pub by_location: Vec<Slice>,
    pub by_application_name: Vec<Slice>,
    pub by_operating_system: Vec<Slice>,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(records: &[ServerRecord]) -> Self {
        Self {
            counts: StatusCounts::compute(records),
            by_application_owner: breakdown(records, ServerField::ApplicationOwner),
            by_location: breakdown(records, ServerField::Location),
            by_application_name: breakdown(records, ServerField::ApplicationName),
            by_operating_system: breakdown(records, ServerField::OperatingSystem),
        }
    }
}
