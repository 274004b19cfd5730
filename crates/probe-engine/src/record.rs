//! Probe output records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use element_catalog::ElementId;
use probe_common::ProbeValue;

/// One element/time match: identity plus the per-point values.
///
/// `values` is parallel to the query's point list (or to the grid's cells
/// in storage order for an all-cells probe).
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub element: ElementId,
    /// Name as stored in the input (falls back to the catalog short name).
    pub name: String,
    pub ref_time: DateTime<Utc>,
    pub valid_time: DateTime<Utc>,
    pub sector: String,
    pub unit: String,
    pub values: Vec<ProbeValue>,
}

/// De-duplication key: at most one record per key exists within a query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchKey {
    pub sector: &'static str,
    pub ref_time: DateTime<Utc>,
    pub valid_time: DateTime<Utc>,
    pub element: ElementId,
}

impl MatchKey {
    pub fn new(
        sector: &'static str,
        ref_time: DateTime<Utc>,
        valid_time: DateTime<Utc>,
        element: ElementId,
    ) -> Self {
        Self {
            sector,
            ref_time,
            valid_time,
            element,
        }
    }
}
