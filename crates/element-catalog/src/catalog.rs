//! The static element catalog and fingerprint matching.
//!
//! One entry per known element. Fields left as `None` are wildcards: the
//! candidate's value is ignored for that field. The table is ordered so
//! that more specific entries come before overlapping generic ones, and
//! `resolve` returns the first match.

use crate::fingerprint::{MessageFingerprint, ProbBounds, ScaledValue, SurfaceSpec};
use crate::id::ElementId;

/// Which naming convention to render/parse an element name in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameConvention {
    /// Internal short name, e.g. "MaxT".
    InternalShort,
    /// Long hyphenated file name, e.g. "maximum-temperature".
    FileStandard,
    /// Lowercase file abbreviation, e.g. "maxt".
    FileAbbreviated,
}

/// One catalog entry. `None` means wildcard on the candidate side.
#[derive(Debug, Clone)]
pub struct ElementSpec {
    pub id: ElementId,
    pub short: &'static str,
    pub standard: &'static str,
    pub abbrev: &'static str,
    pub unit: &'static str,
    pub center: u16,
    pub sub_center: Option<u16>,
    pub gen_process: Option<u8>,
    pub gen_id: Option<u8>,
    pub prod_type: u8,
    pub template: u16,
    pub category: u8,
    pub sub_category: u8,
    pub surface: Option<SurfaceSpec>,
    /// Forecast-length class: 0 instantaneous, 1 up-to-6h, 2 12h, 3 24h,
    /// 4 weekly, 5 monthly, 6 seasonal. `None` = wildcard.
    pub length_class: Option<u8>,
    pub probability: Option<ProbBounds>,
}

const fn surface(surface_type: u8, value: f64) -> Option<SurfaceSpec> {
    Some(SurfaceSpec {
        surface_type,
        value,
        second_value: 0.0,
    })
}

const fn prob(prob_type: u8, lower: i32, lf: i8, upper: i32, uf: i8) -> Option<ProbBounds> {
    Some(ProbBounds {
        prob_type,
        lower: ScaledValue {
            value: lower,
            factor: lf,
        },
        upper: ScaledValue {
            value: upper,
            factor: uf,
        },
    })
}

/// Shorthand for the common public-forecast entry shape: center 8,
/// wildcard generator, no probability.
macro_rules! entry {
    ($id:ident, $short:literal, $standard:literal, $abbrev:literal, $unit:literal,
     center: $center:literal, prod: $prod:literal, tmpl: $tmpl:literal,
     cat: $cat:literal, sub: $sub:literal,
     surface: $surf:expr, length: $len:expr, prob: $prob:expr) => {
        ElementSpec {
            id: ElementId::$id,
            short: $short,
            standard: $standard,
            abbrev: $abbrev,
            unit: $unit,
            center: $center,
            sub_center: None,
            gen_process: None,
            gen_id: None,
            prod_type: $prod,
            template: $tmpl,
            category: $cat,
            sub_category: $sub,
            surface: $surf,
            length_class: $len,
            probability: $prob,
        }
    };
}

// Wind-speed probability thresholds (34/50/64 kt in m/s, scale factor 3).
const KT34: i32 = 17_491;
const KT50: i32 = 25_722;
const KT64: i32 = 32_924;

/// The full catalog. Bounded (~60 entries); `resolve` is a linear scan.
pub static CATALOG: &[ElementSpec] = &[
    // === Core public forecast elements (center 8) ===
    entry!(MaxTemp, "MaxT", "maximum-temperature", "maxt", "F",
        center: 8, prod: 0, tmpl: 8, cat: 0, sub: 4,
        surface: surface(103, 2.0), length: Some(2), prob: None),
    entry!(MinTemp, "MinT", "minimum-temperature", "mint", "F",
        center: 8, prod: 0, tmpl: 8, cat: 0, sub: 5,
        surface: surface(103, 2.0), length: Some(2), prob: None),
    entry!(Temp, "T", "temperature", "temp", "F",
        center: 8, prod: 0, tmpl: 0, cat: 0, sub: 0,
        surface: surface(103, 2.0), length: None, prob: None),
    entry!(DewPoint, "Td", "dewpoint-temperature", "td", "F",
        center: 8, prod: 0, tmpl: 0, cat: 0, sub: 6,
        surface: surface(103, 2.0), length: None, prob: None),
    entry!(ApparentTemp, "AppT", "apparent-temperature", "appt", "F",
        center: 8, prod: 0, tmpl: 0, cat: 0, sub: 193,
        surface: surface(103, 2.0), length: None, prob: None),
    entry!(RelHumidity, "RH", "relative-humidity", "rhm", "%",
        center: 8, prod: 0, tmpl: 0, cat: 1, sub: 1,
        surface: surface(103, 2.0), length: None, prob: None),
    entry!(MaxRelHumidity, "MaxRH", "maximum-relative-humidity", "maxrh", "%",
        center: 8, prod: 0, tmpl: 8, cat: 1, sub: 27,
        surface: surface(103, 2.0), length: Some(2), prob: None),
    entry!(MinRelHumidity, "MinRH", "minimum-relative-humidity", "minrh", "%",
        center: 8, prod: 0, tmpl: 8, cat: 1, sub: 198,
        surface: surface(103, 2.0), length: Some(2), prob: None),
    entry!(Pop12, "PoP12", "probability-of-precipitation", "pop12", "%",
        center: 8, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(2), prob: prob(1, 0, 0, 254, 3)),
    entry!(Qpf, "QPF", "precipitation-amount", "qpf", "inches",
        center: 8, prod: 0, tmpl: 8, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(1), prob: None),
    entry!(SnowAmount, "SnowAmt", "snow-amount", "snow", "inches",
        center: 8, prod: 0, tmpl: 8, cat: 1, sub: 29,
        surface: surface(1, 0.0), length: Some(1), prob: None),
    entry!(IceAccum, "IceAccum", "ice-accumulation", "iceaccum", "inches",
        center: 8, prod: 0, tmpl: 8, cat: 1, sub: 205,
        surface: surface(1, 0.0), length: Some(1), prob: None),
    entry!(Sky, "Sky", "sky-cover", "sky", "%",
        center: 8, prod: 0, tmpl: 0, cat: 6, sub: 1,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(WindDir, "WindDir", "wind-direction", "wdir", "degrees true",
        center: 8, prod: 0, tmpl: 0, cat: 2, sub: 0,
        surface: surface(103, 10.0), length: None, prob: None),
    entry!(WindSpeed, "WindSpd", "wind-speed", "wspd", "knots",
        center: 8, prod: 0, tmpl: 0, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: None, prob: None),
    entry!(WindGust, "WindGust", "wind-gust", "wgust", "knots",
        center: 8, prod: 0, tmpl: 0, cat: 2, sub: 22,
        surface: surface(103, 10.0), length: None, prob: None),
    entry!(WaveHeight, "WaveHeight", "wave-height", "waveh", "feet",
        center: 8, prod: 10, tmpl: 0, cat: 0, sub: 5,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(Weather, "Wx", "weather", "wx", "wx string",
        center: 8, prod: 0, tmpl: 0, cat: 1, sub: 192,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(Hazards, "WWA", "watches-warnings-advisories", "wwa", "wwa string",
        center: 8, prod: 0, tmpl: 0, cat: 19, sub: 205,
        surface: surface(1, 0.0), length: None, prob: None),
    // === Fire weather (center 8, SPC generators) ===
    entry!(FireWxOutlook, "FireWx", "fire-weather-outlook", "firewx", "category",
        center: 8, prod: 0, tmpl: 0, cat: 19, sub: 208,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(FireWxProb, "ProbFireWx", "fire-weather-probability", "probfirewx", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 208,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(LightningActivity, "LAL", "lightning-activity-level", "lal", "category",
        center: 8, prod: 0, tmpl: 0, cat: 17, sub: 192,
        surface: surface(1, 0.0), length: None, prob: None),
    // === Convective outlook & severe probabilities ===
    entry!(ConvOutlook, "ConvOutlook", "convective-outlook", "conhazo", "category",
        center: 8, prod: 0, tmpl: 0, cat: 19, sub: 194,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(ProbTornado, "PTorn", "tornado-probability", "ptornado", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 197,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbHail, "PHail", "hail-probability", "phail", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 198,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbTstmWind, "PTstmWnd", "damaging-thunderstorm-wind-probability", "ptstmwind", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 199,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbExtremeTornado, "PXTorn", "extreme-tornado-probability", "pxtornado", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 200,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbExtremeHail, "PXHail", "extreme-hail-probability", "pxhail", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 201,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbExtremeTstmWind, "PXTstmWnd", "extreme-thunderstorm-wind-probability", "pxtstmwind", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 202,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbSevere, "PSevere", "severe-thunderstorm-probability", "prbsvr", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 203,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    entry!(ProbExtremeSevere, "PXSevere", "extreme-severe-thunderstorm-probability", "prbxsvr", "%",
        center: 8, prod: 0, tmpl: 9, cat: 19, sub: 204,
        surface: surface(1, 0.0), length: Some(3), prob: prob(1, 0, 0, 0, 0)),
    // === Tropical cyclone surface wind probabilities ===
    entry!(ProbWindSpd34Inc, "ProbWindSpd34i", "wind-speed-34kt-incremental-probability", "tcwspdabv34i", "%",
        center: 8, prod: 0, tmpl: 9, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: Some(1), prob: prob(1, 0, 0, KT34, 3)),
    entry!(ProbWindSpd50Inc, "ProbWindSpd50i", "wind-speed-50kt-incremental-probability", "tcwspdabv50i", "%",
        center: 8, prod: 0, tmpl: 9, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: Some(1), prob: prob(1, 0, 0, KT50, 3)),
    entry!(ProbWindSpd64Inc, "ProbWindSpd64i", "wind-speed-64kt-incremental-probability", "tcwspdabv64i", "%",
        center: 8, prod: 0, tmpl: 9, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: Some(1), prob: prob(1, 0, 0, KT64, 3)),
    entry!(ProbWindSpd34Cum, "ProbWindSpd34c", "wind-speed-34kt-cumulative-probability", "tcwspdabv34c", "%",
        center: 8, prod: 0, tmpl: 9, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: Some(3), prob: prob(1, 0, 0, KT34, 3)),
    entry!(ProbWindSpd50Cum, "ProbWindSpd50c", "wind-speed-50kt-cumulative-probability", "tcwspdabv50c", "%",
        center: 8, prod: 0, tmpl: 9, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: Some(3), prob: prob(1, 0, 0, KT50, 3)),
    entry!(ProbWindSpd64Cum, "ProbWindSpd64c", "wind-speed-64kt-cumulative-probability", "tcwspdabv64c", "%",
        center: 8, prod: 0, tmpl: 9, cat: 2, sub: 1,
        surface: surface(103, 10.0), length: Some(3), prob: prob(1, 0, 0, KT64, 3)),
    // === Climate outlook anomaly probabilities (center 7, CPC) ===
    entry!(TempAbove14Day, "TmpAbv14D", "temperature-above-normal-8-14-day", "tmpabv14d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 0, sub: 0,
        surface: surface(1, 0.0), length: Some(4), prob: prob(3, 0, 0, 0, 0)),
    entry!(TempBelow14Day, "TmpBlw14D", "temperature-below-normal-8-14-day", "tmpblw14d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 0, sub: 0,
        surface: surface(1, 0.0), length: Some(4), prob: prob(0, 0, 0, 0, 0)),
    entry!(PrcpAbove14Day, "PrcpAbv14D", "precipitation-above-normal-8-14-day", "prcpabv14d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(4), prob: prob(3, 0, 0, 0, 0)),
    entry!(PrcpBelow14Day, "PrcpBlw14D", "precipitation-below-normal-8-14-day", "prcpblw14d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(4), prob: prob(0, 0, 0, 0, 0)),
    entry!(TempAbove30Day, "TmpAbv30D", "temperature-above-normal-monthly", "tmpabv30d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 0, sub: 0,
        surface: surface(1, 0.0), length: Some(5), prob: prob(3, 0, 0, 0, 0)),
    entry!(TempBelow30Day, "TmpBlw30D", "temperature-below-normal-monthly", "tmpblw30d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 0, sub: 0,
        surface: surface(1, 0.0), length: Some(5), prob: prob(0, 0, 0, 0, 0)),
    entry!(PrcpAbove30Day, "PrcpAbv30D", "precipitation-above-normal-monthly", "prcpabv30d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(5), prob: prob(3, 0, 0, 0, 0)),
    entry!(PrcpBelow30Day, "PrcpBlw30D", "precipitation-below-normal-monthly", "prcpblw30d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(5), prob: prob(0, 0, 0, 0, 0)),
    entry!(TempAbove90Day, "TmpAbv90D", "temperature-above-normal-seasonal", "tmpabv90d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 0, sub: 0,
        surface: surface(1, 0.0), length: Some(6), prob: prob(3, 0, 0, 0, 0)),
    entry!(TempBelow90Day, "TmpBlw90D", "temperature-below-normal-seasonal", "tmpblw90d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 0, sub: 0,
        surface: surface(1, 0.0), length: Some(6), prob: prob(0, 0, 0, 0, 0)),
    entry!(PrcpAbove90Day, "PrcpAbv90D", "precipitation-above-normal-seasonal", "prcpabv90d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(6), prob: prob(3, 0, 0, 0, 0)),
    entry!(PrcpBelow90Day, "PrcpBlw90D", "precipitation-below-normal-seasonal", "prcpblw90d", "%",
        center: 7, prod: 0, tmpl: 9, cat: 1, sub: 8,
        surface: surface(1, 0.0), length: Some(6), prob: prob(0, 0, 0, 0, 0)),
    // === Marine / tropical extras ===
    entry!(SigWaveHeight, "SigWaveHgt", "significant-wave-height", "htsgw", "feet",
        center: 7, prod: 10, tmpl: 0, cat: 0, sub: 3,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(CycloneHeading, "CycloneHdg", "cyclone-heading", "tchdg", "degrees true",
        center: 7, prod: 0, tmpl: 0, cat: 2, sub: 0,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(StormSurge, "Surge", "storm-surge", "surge", "feet",
        center: 7, prod: 10, tmpl: 0, cat: 3, sub: 192,
        surface: surface(1, 0.0), length: None, prob: None),
    entry!(StormTide, "Tide", "storm-tide", "tide", "feet",
        center: 7, prod: 10, tmpl: 0, cat: 3, sub: 193,
        surface: surface(1, 0.0), length: None, prob: None),
    // === RTMA analyses (center 7, analysis vs uncertainty by generator id) ===
    ElementSpec {
        id: ElementId::RtmaTemp,
        short: "RTMA-T",
        standard: "rtma-temperature",
        abbrev: "rtmatemp",
        unit: "F",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(0),
        gen_id: Some(109),
        prod_type: 0,
        template: 0,
        category: 0,
        sub_category: 0,
        surface: surface(103, 2.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaTempUnc,
        short: "RTMA-TUnc",
        standard: "rtma-temperature-uncertainty",
        abbrev: "rtmautemp",
        unit: "F",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(7),
        gen_id: Some(111),
        prod_type: 0,
        template: 0,
        category: 0,
        sub_category: 0,
        surface: surface(103, 2.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaDewPoint,
        short: "RTMA-Td",
        standard: "rtma-dewpoint",
        abbrev: "rtmatd",
        unit: "F",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(0),
        gen_id: Some(109),
        prod_type: 0,
        template: 0,
        category: 0,
        sub_category: 6,
        surface: surface(103, 2.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaDewPointUnc,
        short: "RTMA-TdUnc",
        standard: "rtma-dewpoint-uncertainty",
        abbrev: "rtmautd",
        unit: "F",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(7),
        gen_id: Some(111),
        prod_type: 0,
        template: 0,
        category: 0,
        sub_category: 6,
        surface: surface(103, 2.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaWindSpeed,
        short: "RTMA-WSpd",
        standard: "rtma-wind-speed",
        abbrev: "rtmawspd",
        unit: "knots",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(0),
        gen_id: Some(109),
        prod_type: 0,
        template: 0,
        category: 2,
        sub_category: 1,
        surface: surface(103, 10.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaWindSpeedUnc,
        short: "RTMA-WSpdUnc",
        standard: "rtma-wind-speed-uncertainty",
        abbrev: "rtmauwspd",
        unit: "knots",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(7),
        gen_id: Some(111),
        prod_type: 0,
        template: 0,
        category: 2,
        sub_category: 1,
        surface: surface(103, 10.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaWindDir,
        short: "RTMA-WDir",
        standard: "rtma-wind-direction",
        abbrev: "rtmawdir",
        unit: "degrees true",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(0),
        gen_id: Some(109),
        prod_type: 0,
        template: 0,
        category: 2,
        sub_category: 0,
        surface: surface(103, 10.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaSky,
        short: "RTMA-Sky",
        standard: "rtma-sky-cover",
        abbrev: "rtmasky",
        unit: "%",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(0),
        gen_id: Some(109),
        prod_type: 0,
        template: 0,
        category: 6,
        sub_category: 1,
        surface: surface(1, 0.0),
        length_class: None,
        probability: None,
    },
    ElementSpec {
        id: ElementId::RtmaPrecip,
        short: "RTMA-Precip",
        standard: "rtma-precipitation",
        abbrev: "rtmaqpf",
        unit: "inches",
        center: 7,
        sub_center: Some(4),
        gen_process: Some(0),
        gen_id: Some(109),
        prod_type: 0,
        template: 8,
        category: 1,
        sub_category: 8,
        surface: surface(1, 0.0),
        length_class: Some(1),
        probability: None,
    },
];

/// Resolve a decoded message's fingerprint to an element identity.
///
/// Linear scan; returns [`ElementId::Undefined`] when nothing matches.
/// Forecast-length class and probability bounds only participate for the
/// templates that carry them (8 and 9); otherwise both sides are treated
/// as wildcards.
pub fn resolve(fp: &MessageFingerprint) -> ElementId {
    for spec in CATALOG {
        if matches(spec, fp) {
            return spec.id;
        }
    }
    ElementId::Undefined
}

fn matches(spec: &ElementSpec, fp: &MessageFingerprint) -> bool {
    if spec.center != fp.center
        || spec.prod_type != fp.prod_type
        || spec.template != fp.template
        || spec.category != fp.category
        || spec.sub_category != fp.sub_category
    {
        return false;
    }
    if spec.sub_center.is_some_and(|sc| sc != fp.sub_center) {
        return false;
    }
    if spec.gen_process.is_some_and(|gp| gp != fp.gen_process) {
        return false;
    }
    if spec.gen_id.is_some_and(|gi| gi != fp.gen_id) {
        return false;
    }
    if let Some(surf) = &spec.surface {
        if surf.surface_type != fp.surface.surface_type
            || surf.value != fp.surface.value
            || surf.second_value != fp.surface.second_value
        {
            return false;
        }
    }
    if fp.compares_length() {
        if spec.length_class.is_some_and(|lc| lc != fp.length_class) {
            return false;
        }
    }
    if fp.compares_probability() {
        match (&spec.probability, &fp.probability) {
            (Some(want), Some(got)) => {
                if want.prob_type != got.prob_type
                    || want.lower != got.lower
                    || want.upper != got.upper
                {
                    return false;
                }
            }
            (Some(_), None) => return false,
            // Wildcard on the catalog side accepts any candidate bounds.
            (None, _) => {}
        }
    }
    true
}

/// Name for an element under one convention. `None` for the sentinels.
pub fn name_for(id: ElementId, convention: NameConvention) -> Option<&'static str> {
    if id.is_sentinel() {
        return None;
    }
    CATALOG.iter().find(|spec| spec.id == id).map(|spec| match convention {
        NameConvention::InternalShort => spec.short,
        NameConvention::FileStandard => spec.standard,
        NameConvention::FileAbbreviated => spec.abbrev,
    })
}

/// Case-insensitive reverse lookup. [`ElementId::Undefined`] if not found.
pub fn lookup_by_name(name: &str, convention: NameConvention) -> ElementId {
    for spec in CATALOG {
        let candidate = match convention {
            NameConvention::InternalShort => spec.short,
            NameConvention::FileStandard => spec.standard,
            NameConvention::FileAbbreviated => spec.abbrev,
        };
        if candidate.eq_ignore_ascii_case(name) {
            return spec.id;
        }
    }
    ElementId::Undefined
}

/// Unit string for an element, as the catalog ships it.
pub fn unit_for(id: ElementId) -> Option<&'static str> {
    CATALOG.iter().find(|spec| spec.id == id).map(|spec| spec.unit)
}
