//! Raw metadata fingerprints for decoded messages.

use serde::{Deserialize, Serialize};

/// A scaled integer, as probability thresholds are stored on the wire:
/// actual value = `value / 10^factor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledValue {
    pub value: i32,
    pub factor: i8,
}

impl ScaledValue {
    pub fn new(value: i32, factor: i8) -> Self {
        Self { value, factor }
    }

    /// The represented quantity as an f64.
    pub fn as_f64(&self) -> f64 {
        self.value as f64 / 10f64.powi(self.factor as i32)
    }
}

/// The (first, second) fixed-surface triple of a product definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub surface_type: u8,
    pub value: f64,
    pub second_value: f64,
}

impl SurfaceSpec {
    pub fn single(surface_type: u8, value: f64) -> Self {
        Self {
            surface_type,
            value,
            second_value: 0.0,
        }
    }
}

/// Probability-threshold bounds from a template-9 product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbBounds {
    pub prob_type: u8,
    pub lower: ScaledValue,
    pub upper: ScaledValue,
}

/// The raw metadata of one decoded message, fully populated by the
/// external decoder.
///
/// `template` decides which optional parts participate in matching:
/// forecast-length class only for templates 8 and 9 (time-interval
/// statistics), probability bounds only for template 9.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageFingerprint {
    pub center: u16,
    pub sub_center: u16,
    /// GRIB edition of the source message.
    pub edition: u8,
    pub gen_process: u8,
    pub gen_id: u8,
    /// Discipline / product type.
    pub prod_type: u8,
    /// Product definition template number.
    pub template: u16,
    pub category: u8,
    pub sub_category: u8,
    pub surface: SurfaceSpec,
    /// Forecast-length class; 0 means instantaneous / not applicable.
    pub length_class: u8,
    pub probability: Option<ProbBounds>,
}

impl MessageFingerprint {
    /// Whether the forecast-length class takes part in matching for this
    /// message's template.
    pub fn compares_length(&self) -> bool {
        self.template == 8 || self.template == 9
    }

    /// Whether probability bounds take part in matching.
    pub fn compares_probability(&self) -> bool {
        self.template == 9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_value_applies_factor() {
        assert_eq!(ScaledValue::new(175, 1).as_f64(), 17.5);
        assert_eq!(ScaledValue::new(34, 0).as_f64(), 34.0);
        assert_eq!(ScaledValue::new(5, -1).as_f64(), 50.0);
    }

    #[test]
    fn template_gates() {
        let mut fp = MessageFingerprint {
            center: 8,
            sub_center: 0,
            edition: 2,
            gen_process: 2,
            gen_id: 0,
            prod_type: 0,
            template: 0,
            category: 0,
            sub_category: 4,
            surface: SurfaceSpec::single(1, 0.0),
            length_class: 0,
            probability: None,
        };
        assert!(!fp.compares_length());
        assert!(!fp.compares_probability());

        fp.template = 8;
        assert!(fp.compares_length());
        assert!(!fp.compares_probability());

        fp.template = 9;
        assert!(fp.compares_length());
        assert!(fp.compares_probability());
    }
}
