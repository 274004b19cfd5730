//! Time-window filtering for probe queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One endpoint of a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBound {
    pub at: DateTime<Utc>,
    /// Whether a valid time exactly equal to `at` passes the filter.
    pub inclusive: bool,
}

impl TimeBound {
    pub fn inclusive(at: DateTime<Utc>) -> Self {
        Self { at, inclusive: true }
    }

    pub fn exclusive(at: DateTime<Utc>) -> Self {
        Self {
            at,
            inclusive: false,
        }
    }
}

/// A possibly open-ended valid-time window.
///
/// A time sample is selected when it passes both endpoints; an absent
/// endpoint passes everything. Inclusivity is configurable per endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<TimeBound>,
    pub end: Option<TimeBound>,
}

impl TimeWindow {
    /// Window with no bounds: every valid time is selected.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Inclusive-start, exclusive-end window, the batch CLI convention.
    pub fn half_open(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(TimeBound::inclusive(start)),
            end: Some(TimeBound::exclusive(end)),
        }
    }

    pub fn contains(&self, valid_time: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            let ok = if start.inclusive {
                valid_time >= start.at
            } else {
                valid_time > start.at
            };
            if !ok {
                return false;
            }
        }
        if let Some(end) = self.end {
            let ok = if end.inclusive {
                valid_time <= end.at
            } else {
                valid_time < end.at
            };
            if !ok {
                return false;
            }
        }
        true
    }

    /// True once `valid_time` is past the end bound. Consumers scanning
    /// time samples in non-decreasing valid-time order may stop here.
    pub fn is_past(&self, valid_time: DateTime<Utc>) -> bool {
        match self.end {
            Some(end) if end.inclusive => valid_time > end.at,
            Some(end) => valid_time >= end.at,
            None => false,
        }
    }
}
