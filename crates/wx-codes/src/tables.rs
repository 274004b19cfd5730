//! Phenomenon vocabularies and priority tables.
//!
//! Priority tables rank (phenomenon, significance) pairs; rank 1 is most
//! severe. Priorities above a table's `max_rank` exist for bookkeeping but
//! are outside the defined simplified-rank range and clamp to 0.

use crate::decoder::Significance;

/// Which historical priority table to rank against. Parsing is identical
/// across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableVersion {
    /// Original operational table.
    V1,
    /// Revised table (marine hazards re-ranked, tropical entries added).
    #[default]
    V2,
}

pub(crate) struct PriorityTable {
    pub entries: &'static [(&'static str, Significance, u32)],
    /// Largest priority that still maps to a nonzero simplified rank.
    pub max_rank: u32,
}

pub(crate) struct Vocabulary {
    /// abbreviation -> full phenomenon name.
    pub names: &'static [(&'static str, &'static str)],
    pub priority_v1: PriorityTable,
    pub priority_v2: PriorityTable,
}

impl Vocabulary {
    pub fn priority(&self, version: TableVersion) -> &PriorityTable {
        match version {
            TableVersion::V1 => &self.priority_v1,
            TableVersion::V2 => &self.priority_v2,
        }
    }

    #[cfg(test)]
    pub fn name_of(&self, abbrev: &str) -> Option<&'static str> {
        self.names
            .iter()
            .find(|(a, _)| *a == abbrev)
            .map(|(_, n)| *n)
    }
}

/// Hazard phenomenon vocabulary (VTEC-style two-letter codes).
pub(crate) static HAZARD_NAMES: &[(&str, &str)] = &[
    ("AF", "Ashfall"),
    ("AS", "Air Stagnation"),
    ("BS", "Blowing Snow"),
    ("BW", "Brisk Wind"),
    ("BZ", "Blizzard"),
    ("CF", "Coastal Flood"),
    ("DS", "Dust Storm"),
    ("DU", "Blowing Dust"),
    ("EC", "Extreme Cold"),
    ("EH", "Excessive Heat"),
    ("EW", "Extreme Wind"),
    ("FA", "Areal Flood"),
    ("FF", "Flash Flood"),
    ("FG", "Dense Fog"),
    ("FL", "Flood"),
    ("FR", "Frost"),
    ("FW", "Fire Weather"),
    ("FZ", "Freeze"),
    ("GL", "Gale"),
    ("HF", "Hurricane Force Wind"),
    ("HI", "Inland Hurricane Wind"),
    ("HS", "Heavy Snow"),
    ("HT", "Heat"),
    ("HU", "Hurricane"),
    ("HW", "High Wind"),
    ("HZ", "Hard Freeze"),
    ("IP", "Sleet"),
    ("IS", "Ice Storm"),
    ("LB", "Lake Effect Snow and Blowing Snow"),
    ("LE", "Lake Effect Snow"),
    ("LO", "Low Water"),
    ("LS", "Lakeshore Flood"),
    ("LW", "Lake Wind"),
    ("MA", "Special Marine"),
    ("RB", "Small Craft for Rough Bar"),
    ("SB", "Snow and Blowing Snow"),
    ("SC", "Small Craft"),
    ("SE", "Hazardous Seas"),
    ("SI", "Small Craft for Winds"),
    ("SM", "Dense Smoke"),
    ("SN", "Snow"),
    ("SR", "Storm"),
    ("SU", "High Surf"),
    ("SV", "Severe Thunderstorm"),
    ("SW", "Small Craft for Hazardous Seas"),
    ("TI", "Inland Tropical Storm Wind"),
    ("TO", "Tornado"),
    ("TR", "Tropical Storm"),
    ("TS", "Tsunami"),
    ("TY", "Typhoon"),
    ("UP", "Ice Accretion"),
    ("WC", "Wind Chill"),
    ("WI", "Wind"),
    ("WS", "Winter Storm"),
    ("WW", "Winter Weather"),
    ("ZF", "Freezing Fog"),
    ("ZR", "Freezing Rain"),
];

use Significance::{Advisory, Statement, Warning, Watch};

/// Original hazard ranking. Statements sit above `max_rank` and therefore
/// clamp to simplified rank 0.
const HAZARD_PRIORITY_V1: PriorityTable = PriorityTable {
    max_rank: 60,
    entries: &[
        ("TS", Warning, 1),
        ("TO", Warning, 2),
        ("EW", Warning, 3),
        ("HU", Warning, 4),
        ("TY", Warning, 5),
        ("SV", Warning, 6),
        ("EH", Warning, 7),
        ("EC", Warning, 8),
        ("BZ", Warning, 9),
        ("IS", Warning, 10),
        ("HF", Warning, 11),
        ("HI", Warning, 12),
        ("WS", Warning, 13),
        ("FF", Warning, 14),
        ("HS", Warning, 15),
        ("HW", Warning, 16),
        ("TR", Warning, 17),
        ("TI", Warning, 18),
        ("SR", Warning, 19),
        ("FL", Warning, 20),
        ("FA", Warning, 21),
        ("CF", Warning, 22),
        ("LS", Warning, 23),
        ("DS", Warning, 24),
        ("GL", Warning, 25),
        ("HT", Warning, 26),
        ("WC", Warning, 27),
        ("FZ", Warning, 28),
        ("HZ", Warning, 29),
        ("ZR", Warning, 30),
        ("SU", Warning, 31),
        ("LE", Warning, 32),
        ("SB", Warning, 33),
        ("LB", Warning, 34),
        ("SN", Warning, 35),
        ("IP", Warning, 36),
        ("AF", Warning, 37),
        ("FW", Warning, 38),
        ("TS", Watch, 39),
        ("TO", Watch, 40),
        ("HU", Watch, 41),
        ("TY", Watch, 42),
        ("SV", Watch, 43),
        ("EH", Watch, 44),
        ("EC", Watch, 45),
        ("BZ", Watch, 46),
        ("WS", Watch, 47),
        ("FF", Watch, 48),
        ("HW", Watch, 49),
        ("TR", Watch, 50),
        ("FL", Watch, 51),
        ("FA", Watch, 52),
        ("CF", Watch, 53),
        ("WC", Watch, 54),
        ("FZ", Watch, 55),
        ("FW", Watch, 56),
        ("HT", Advisory, 57),
        ("WC", Advisory, 58),
        ("WW", Advisory, 59),
        ("FG", Advisory, 60),
        // Beyond the defined simplified-rank range.
        ("SM", Advisory, 70),
        ("FR", Advisory, 71),
        ("AS", Advisory, 72),
        ("ZF", Advisory, 73),
        ("DU", Advisory, 74),
        ("LW", Advisory, 75),
        ("SC", Advisory, 76),
        ("FL", Statement, 90),
        ("MA", Statement, 91),
    ],
};

/// Revised hazard ranking: marine warnings promoted, extra advisories and
/// small-craft variants given defined ranks.
const HAZARD_PRIORITY_V2: PriorityTable = PriorityTable {
    max_rank: 80,
    entries: &[
        ("TS", Warning, 1),
        ("TO", Warning, 2),
        ("EW", Warning, 3),
        ("HU", Warning, 4),
        ("TY", Warning, 5),
        ("HF", Warning, 6),
        ("SV", Warning, 7),
        ("EH", Warning, 8),
        ("EC", Warning, 9),
        ("BZ", Warning, 10),
        ("IS", Warning, 11),
        ("HI", Warning, 12),
        ("WS", Warning, 13),
        ("FF", Warning, 14),
        ("HS", Warning, 15),
        ("HW", Warning, 16),
        ("TR", Warning, 17),
        ("TI", Warning, 18),
        ("SR", Warning, 19),
        ("GL", Warning, 20),
        ("FL", Warning, 21),
        ("FA", Warning, 22),
        ("CF", Warning, 23),
        ("LS", Warning, 24),
        ("DS", Warning, 25),
        ("HT", Warning, 26),
        ("WC", Warning, 27),
        ("FZ", Warning, 28),
        ("HZ", Warning, 29),
        ("ZR", Warning, 30),
        ("SU", Warning, 31),
        ("LE", Warning, 32),
        ("SB", Warning, 33),
        ("LB", Warning, 34),
        ("SN", Warning, 35),
        ("IP", Warning, 36),
        ("AF", Warning, 37),
        ("FW", Warning, 38),
        ("MA", Warning, 39),
        ("TS", Watch, 40),
        ("TO", Watch, 41),
        ("HU", Watch, 42),
        ("TY", Watch, 43),
        ("SV", Watch, 44),
        ("EH", Watch, 45),
        ("EC", Watch, 46),
        ("BZ", Watch, 47),
        ("WS", Watch, 48),
        ("FF", Watch, 49),
        ("HW", Watch, 50),
        ("TR", Watch, 51),
        ("HF", Watch, 52),
        ("GL", Watch, 53),
        ("FL", Watch, 54),
        ("FA", Watch, 55),
        ("CF", Watch, 56),
        ("LS", Watch, 57),
        ("WC", Watch, 58),
        ("FZ", Watch, 59),
        ("FW", Watch, 60),
        ("SR", Watch, 61),
        ("HT", Advisory, 62),
        ("WC", Advisory, 63),
        ("WW", Advisory, 64),
        ("LE", Advisory, 65),
        ("ZR", Advisory, 66),
        ("SN", Advisory, 67),
        ("IP", Advisory, 68),
        ("FG", Advisory, 69),
        ("SM", Advisory, 70),
        ("SU", Advisory, 71),
        ("CF", Advisory, 72),
        ("LS", Advisory, 73),
        ("SC", Advisory, 74),
        ("SI", Advisory, 75),
        ("SW", Advisory, 76),
        ("RB", Advisory, 77),
        ("BW", Advisory, 78),
        ("LW", Advisory, 79),
        ("LO", Advisory, 80),
        // Beyond the defined simplified-rank range.
        ("FR", Advisory, 85),
        ("AS", Advisory, 86),
        ("ZF", Advisory, 87),
        ("DU", Advisory, 88),
        ("UP", Advisory, 89),
        ("FL", Statement, 95),
        ("MA", Statement, 96),
        ("CF", Statement, 97),
        ("LS", Statement, 98),
    ],
};

pub(crate) static HAZARD_VOCAB: Vocabulary = Vocabulary {
    names: HAZARD_NAMES,
    priority_v1: HAZARD_PRIORITY_V1,
    priority_v2: HAZARD_PRIORITY_V2,
};

/// Weather phenomenon vocabulary (precipitation and obscuration types).
pub(crate) static WEATHER_NAMES: &[(&str, &str)] = &[
    ("BD", "Blowing Dust"),
    ("BN", "Blowing Sand"),
    ("BS", "Blowing Snow"),
    ("DZ", "Drizzle"),
    ("FG", "Fog"),
    ("FR", "Frost"),
    ("GR", "Hail"),
    ("HZ", "Haze"),
    ("IC", "Ice Crystals"),
    ("IF", "Ice Fog"),
    ("IP", "Sleet"),
    ("RA", "Rain"),
    ("RW", "Rain Showers"),
    ("SM", "Smoke"),
    ("SN", "Snow"),
    ("SP", "Snow Pellets"),
    ("SW", "Snow Showers"),
    ("TS", "Thunderstorms"),
    ("VA", "Volcanic Ash"),
    ("ZL", "Freezing Drizzle"),
    ("ZR", "Freezing Rain"),
    ("ZY", "Freezing Spray"),
];

const WEATHER_PRIORITY_V1: PriorityTable = PriorityTable {
    max_rank: 20,
    entries: &[
        ("TS", Warning, 1),
        ("ZR", Warning, 2),
        ("ZL", Warning, 3),
        ("IP", Warning, 4),
        ("SN", Warning, 5),
        ("GR", Warning, 6),
        ("SW", Warning, 7),
        ("BS", Warning, 8),
        ("RA", Warning, 9),
        ("RW", Warning, 10),
        ("TS", Advisory, 11),
        ("ZR", Advisory, 12),
        ("IP", Advisory, 13),
        ("SN", Advisory, 14),
        ("SW", Advisory, 15),
        ("RA", Advisory, 16),
        ("RW", Advisory, 17),
        ("DZ", Advisory, 18),
        ("FG", Advisory, 19),
        ("BD", Advisory, 20),
        // Beyond the defined simplified-rank range.
        ("HZ", Advisory, 25),
        ("SM", Advisory, 26),
        ("FR", Statement, 30),
    ],
};

const WEATHER_PRIORITY_V2: PriorityTable = PriorityTable {
    max_rank: 24,
    entries: &[
        ("TS", Warning, 1),
        ("VA", Warning, 2),
        ("ZR", Warning, 3),
        ("ZL", Warning, 4),
        ("IP", Warning, 5),
        ("SN", Warning, 6),
        ("GR", Warning, 7),
        ("SW", Warning, 8),
        ("BS", Warning, 9),
        ("ZY", Warning, 10),
        ("RA", Warning, 11),
        ("RW", Warning, 12),
        ("TS", Advisory, 13),
        ("ZR", Advisory, 14),
        ("ZL", Advisory, 15),
        ("IP", Advisory, 16),
        ("SN", Advisory, 17),
        ("SW", Advisory, 18),
        ("RA", Advisory, 19),
        ("RW", Advisory, 20),
        ("DZ", Advisory, 21),
        ("FG", Advisory, 22),
        ("IF", Advisory, 23),
        ("BD", Advisory, 24),
        // Beyond the defined simplified-rank range.
        ("BN", Advisory, 27),
        ("HZ", Advisory, 28),
        ("SM", Advisory, 29),
        ("IC", Advisory, 30),
        ("FR", Statement, 35),
    ],
};

pub(crate) static WEATHER_VOCAB: Vocabulary = Vocabulary {
    names: WEATHER_NAMES,
    priority_v1: WEATHER_PRIORITY_V1,
    priority_v2: WEATHER_PRIORITY_V2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_abbreviations_are_unique_two_letter_codes() {
        for (i, (abbrev, _)) in HAZARD_NAMES.iter().enumerate() {
            assert_eq!(abbrev.len(), 2, "bad abbrev {abbrev:?}");
            assert!(
                !HAZARD_NAMES[i + 1..].iter().any(|(a, _)| a == abbrev),
                "duplicate abbrev {abbrev:?}"
            );
        }
    }

    #[test]
    fn priority_entries_reference_known_abbreviations() {
        for vocab in [&HAZARD_VOCAB, &WEATHER_VOCAB] {
            for table in [&vocab.priority_v1, &vocab.priority_v2] {
                for (abbrev, _, _) in table.entries {
                    assert!(vocab.name_of(abbrev).is_some(), "orphan entry {abbrev:?}");
                }
            }
        }
    }

    #[test]
    fn priorities_are_unique_within_a_table() {
        for table in [
            &HAZARD_VOCAB.priority_v1,
            &HAZARD_VOCAB.priority_v2,
            &WEATHER_VOCAB.priority_v1,
            &WEATHER_VOCAB.priority_v2,
        ] {
            let mut seen = std::collections::HashSet::new();
            for (abbrev, sig, priority) in table.entries {
                assert!(seen.insert(priority), "duplicate priority {priority} at {abbrev:?} {sig:?}");
            }
        }
    }
}
