//! Missing-value screening.
//!
//! Fields advertise zero, one, or two missing sentinels; interpolation
//! must never blend a sentinel into a real value. Fields that declare no
//! sentinel still need one at output time, so [`derive_sentinel`] invents
//! a value guaranteed not to collide with the data range.

/// How many declared sentinels apply to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// No declared sentinel; every stored value is real.
    None,
    /// Only `primary` marks a missing cell.
    Primary,
    /// Both `primary` and `secondary` mark a missing cell.
    PrimaryAndSecondary,
}

/// A field's missing-value declaration.
#[derive(Debug, Clone, Copy)]
pub struct MissingValues {
    pub policy: MissingPolicy,
    pub primary: f32,
    pub secondary: f32,
}

impl MissingValues {
    pub fn none() -> Self {
        Self { policy: MissingPolicy::None, primary: 0.0, secondary: 0.0 }
    }

    pub fn primary(value: f32) -> Self {
        Self { policy: MissingPolicy::Primary, primary: value, secondary: 0.0 }
    }

    pub fn pair(primary: f32, secondary: f32) -> Self {
        Self { policy: MissingPolicy::PrimaryAndSecondary, primary, secondary }
    }

    pub fn is_missing(&self, value: f32) -> bool {
        if value.is_nan() {
            return true;
        }
        match self.policy {
            MissingPolicy::None => false,
            MissingPolicy::Primary => value == self.primary,
            MissingPolicy::PrimaryAndSecondary => {
                value == self.primary || value == self.secondary
            }
        }
    }
}

/// Sentinel to report for a field that declared none of its own.
///
/// Prefers 9999; if 9999 lies inside the observed data range, falls back
/// to one past the maximum so the sentinel stays distinguishable.
pub fn derive_sentinel(declared: Option<f32>, data_min: f32, data_max: f32) -> f32 {
    if let Some(m) = declared {
        return m;
    }
    if data_min <= 9999.0 && 9999.0 <= data_max {
        data_max + 1.0
    } else {
        9999.0
    }
}
