//! Enumerated element identities.

use serde::{Deserialize, Serialize};

/// Canonical identity of a forecast/observation element.
///
/// Resolved from a [`MessageFingerprint`](crate::MessageFingerprint) via
/// [`resolve`](crate::resolve). `Undefined` means no catalog entry matched;
/// `MatchAll` is a filter sentinel that accepts every element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementId {
    // Core public forecast elements
    MaxTemp,
    MinTemp,
    Temp,
    DewPoint,
    ApparentTemp,
    RelHumidity,
    MaxRelHumidity,
    MinRelHumidity,
    Pop12,
    Qpf,
    SnowAmount,
    IceAccum,
    Sky,
    WindDir,
    WindSpeed,
    WindGust,
    WaveHeight,
    Weather,
    Hazards,
    // Fire weather
    FireWxOutlook,
    FireWxProb,
    LightningActivity,
    // Convective outlook & severe probabilities (day 1)
    ConvOutlook,
    ProbTornado,
    ProbHail,
    ProbTstmWind,
    ProbExtremeTornado,
    ProbExtremeHail,
    ProbExtremeTstmWind,
    ProbSevere,
    ProbExtremeSevere,
    // Tropical cyclone surface wind probabilities, incremental
    ProbWindSpd34Inc,
    ProbWindSpd50Inc,
    ProbWindSpd64Inc,
    // ... and cumulative
    ProbWindSpd34Cum,
    ProbWindSpd50Cum,
    ProbWindSpd64Cum,
    // Climate outlook anomaly probabilities
    TempAbove14Day,
    TempBelow14Day,
    PrcpAbove14Day,
    PrcpBelow14Day,
    TempAbove30Day,
    TempBelow30Day,
    PrcpAbove30Day,
    PrcpBelow30Day,
    TempAbove90Day,
    TempBelow90Day,
    PrcpAbove90Day,
    PrcpBelow90Day,
    // Marine / tropical extras
    SigWaveHeight,
    CycloneHeading,
    StormSurge,
    StormTide,
    // RTMA analyses
    RtmaTemp,
    RtmaTempUnc,
    RtmaDewPoint,
    RtmaDewPointUnc,
    RtmaWindSpeed,
    RtmaWindSpeedUnc,
    RtmaWindDir,
    RtmaSky,
    RtmaPrecip,
    // Sentinels
    Undefined,
    MatchAll,
}

impl ElementId {
    /// True for elements whose cell values are packed coded strings
    /// (decoded through the wx-codes tables rather than read as numbers).
    pub fn is_coded(self) -> bool {
        matches!(self, Self::Weather | Self::Hazards)
    }

    /// True for the two non-element sentinels.
    pub fn is_sentinel(self) -> bool {
        matches!(self, Self::Undefined | Self::MatchAll)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::Undefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coded_elements() {
        assert!(ElementId::Weather.is_coded());
        assert!(ElementId::Hazards.is_coded());
        assert!(!ElementId::MaxTemp.is_coded());
        assert!(!ElementId::Undefined.is_coded());
    }
}
