//! Domain DTOs for the tracker API.
//!
//! # Design
//! These types mirror the upstream schema but are defined independently from
//! the mock-server crate; integration tests catch schema drift. All counts
//! are `Option<u64>`: absent means "unknown at this point", not zero, and
//! negative counts are unrepresentable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A point-in-time triple of confirmed/death/recovery counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub confirmed: Option<u64>,
    pub deaths: Option<u64>,
    pub recovered: Option<u64>,
}

impl Report {
    /// True when at least one count is populated.
    pub fn has_data(&self) -> bool {
        self.confirmed.is_some() || self.deaths.is_some() || self.recovered.is_some()
    }
}

/// Body of the world-summary endpoint: `{ "latest": Report }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Latest {
    pub latest: Report,
}

/// A country/region entity with a derived latest snapshot and, when
/// requested, the full per-metric history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    pub latest: Report,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timelines: Option<Timelines>,
}

/// One timeline per metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timelines {
    pub confirmed: Timeline,
    pub deaths: Timeline,
    pub recovered: Timeline,
}

/// Mapping from canonical date key (`YYYY-MM-DDT00:00:00Z`) to cumulative
/// count. Key order is irrelevant; the upstream invariant that counts are
/// non-decreasing over time is not enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timeline {
    #[serde(default)]
    pub timeline: BTreeMap<String, u64>,
}

impl Timeline {
    /// Count at the given canonical date key, if present.
    pub fn at(&self, key: &str) -> Option<u64> {
        self.timeline.get(key).copied()
    }
}
