//! Dashboard: KPI cards, breakdown charts and the refresh clock.
//!
//! Stats are recomputed from the inventory on every refresh. The page only
//! tracks when it last refreshed; callers decide when to poll
//! [`Dashboard::refresh_due`].

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use inventory::ServerRecord;
use inventory::stats::DashboardStats;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time period: {0}")]
pub struct UnknownPeriod(pub String);

/// Period selector; only labels the "newly added" card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "24h")]
    Day,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl TimePeriod {
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }

    /// "in last 7 days".
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Day => "in last 24 hours",
            Self::Week => "in last 7 days",
            Self::Month => "in last 30 days",
            Self::Quarter => "in last 90 days",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPeriod(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    stats: DashboardStats,
    period: TimePeriod,
    last_refresh: OffsetDateTime,
    refresh_every: Duration,
}

impl Dashboard {
    #[must_use]
    pub fn new(records: &[ServerRecord], refresh_every: Duration, now: OffsetDateTime) -> Self {
        Self {
            stats: DashboardStats::compute(records),
            period: TimePeriod::default(),
            last_refresh: now,
            refresh_every,
        }
    }

    #[must_use]
    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    #[must_use]
    pub fn period(&self) -> TimePeriod {
        self.period
    }

    pub fn set_period(&mut self, period: TimePeriod) {
        self.period = period;
    }

    #[must_use]
    pub fn last_refresh(&self) -> OffsetDateTime {
        self.last_refresh
    }

    /// Whether the auto-refresh interval has elapsed since the last refresh.
    #[must_use]
    pub fn refresh_due(&self, now: OffsetDateTime) -> bool {
        now - self.last_refresh >= self.refresh_every
    }

    /// Recompute from `records` (manual or automatic refresh).
    pub fn refresh(&mut self, records: &[ServerRecord], now: OffsetDateTime) {
        self.stats = DashboardStats::compute(records);
        self.last_refresh = now;
        debug!(total = self.stats.counts.total, "dashboard refreshed");
    }
}
