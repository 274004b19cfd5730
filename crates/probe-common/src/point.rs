//! Probe point representations.

use serde::{Deserialize, Serialize};

/// A location to probe, either geographic or already in grid space.
///
/// Grid cells are 1-based (column 1, row 1 is the first stored point),
/// matching the cube index convention. A point keeps whichever
/// representation it was given for the life of a query; conversion to the
/// other happens per-grid through the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProbePoint {
    /// Geographic coordinates in degrees.
    Geographic { lat: f64, lon: f64 },
    /// Fractional 1-based grid coordinates.
    Cell { col: f64, row: f64 },
}

impl ProbePoint {
    pub fn geographic(lat: f64, lon: f64) -> Self {
        Self::Geographic { lat, lon }
    }

    pub fn cell(col: f64, row: f64) -> Self {
        Self::Cell { col, row }
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self, Self::Geographic { .. })
    }
}

impl std::fmt::Display for ProbePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geographic { lat, lon } => write!(f, "({:.4},{:.4})", lat, lon),
            Self::Cell { col, row } => write!(f, "[{},{}]", col, row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(
            ProbePoint::geographic(38.99, -77.99).to_string(),
            "(38.9900,-77.9900)"
        );
        assert_eq!(ProbePoint::cell(3.0, 7.0).to_string(), "[3,7]");
    }
}
