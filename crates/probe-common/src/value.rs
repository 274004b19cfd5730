//! Per-point probe output values.

use serde::{Deserialize, Serialize};

/// The value a probe produced at one point.
///
/// A closed sum type rather than a value-type flag plus raw fields, so
/// every consumer is forced to handle all cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProbeValue {
    /// A plain numeric value.
    Number(f32),
    /// No data at this point (outside the grid, or the missing sentinel).
    Missing,
    /// A weather/hazard cell: the packed numeric code plus its decoded
    /// English rendering.
    Coded { code: f32, text: String },
    /// A weather/hazard cell whose raw string failed to decode. The value
    /// is treated as missing; the raw string is kept for diagnostics.
    Undecodable { code: f32, raw: String },
}

impl ProbeValue {
    /// Numeric value, if this cell has one.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(v) | Self::Coded { code: v, .. } => Some(*v),
            Self::Missing | Self::Undecodable { .. } => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing | Self::Undecodable { .. })
    }
}

impl From<Option<f32>> for ProbeValue {
    fn from(v: Option<f32>) -> Self {
        match v {
            Some(v) => Self::Number(v),
            None => Self::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undecodable_counts_as_missing_but_keeps_raw() {
        let v = ProbeValue::Undecodable {
            code: 3.0,
            raw: "ZZ.Q".to_string(),
        };
        assert!(v.is_missing());
        assert_eq!(v.as_number(), None);
    }

    #[test]
    fn coded_exposes_numeric_code() {
        let v = ProbeValue::Coded {
            code: 2.0,
            text: "Winter Storm Warning".to_string(),
        };
        assert_eq!(v.as_number(), Some(2.0));
        assert!(!v.is_missing());
    }
}
