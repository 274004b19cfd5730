//! The shared segment decoder.

use crate::tables::{TableVersion, Vocabulary, HAZARD_VOCAB, WEATHER_VOCAB};
use crate::{CodeError, MAX_SEGMENTS, NONE_TOKEN};

/// Significance of one phenomenon segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Significance {
    Watch,
    Statement,
    Advisory,
    Warning,
}

impl Significance {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(Self::Watch),
            "S" => Some(Self::Statement),
            "Y" => Some(Self::Advisory),
            "W" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Watch => 'A',
            Self::Statement => 'S',
            Self::Advisory => 'Y',
            Self::Warning => 'W',
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Self::Watch => "Watch",
            Self::Statement => "Statement",
            Self::Advisory => "Advisory",
            Self::Warning => "Warning",
        }
    }
}

/// One decoded (phenomenon, significance) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub abbrev: &'static str,
    pub name: &'static str,
    pub significance: Significance,
}

impl Segment {
    /// English phrase, e.g. "Winter Storm Warning".
    pub fn phrase(&self) -> String {
        format!("{} {}", self.name, self.significance.phrase())
    }
}

/// Decoder for one coded-string variant (hazard or weather) at one table
/// version.
#[derive(Clone, Copy)]
pub struct CodedDecoder {
    vocab: &'static Vocabulary,
    version: TableVersion,
}

impl CodedDecoder {
    /// Decoder for hazard (watch/warning/advisory) strings.
    pub fn hazard(version: TableVersion) -> Self {
        Self {
            vocab: &HAZARD_VOCAB,
            version,
        }
    }

    /// Decoder for weather-type strings.
    pub fn weather(version: TableVersion) -> Self {
        Self {
            vocab: &WEATHER_VOCAB,
            version,
        }
    }

    /// Parse a raw coded string into its segment list.
    ///
    /// The `<None>` sentinel decodes to an empty list. Any grammar
    /// violation is an error; the caller's policy is to treat the cell as
    /// missing while keeping the raw string.
    pub fn decode(&self, raw: &str) -> Result<Vec<Segment>, CodeError> {
        if raw.is_empty() {
            return Err(CodeError::Empty);
        }
        if raw == NONE_TOKEN {
            return Ok(Vec::new());
        }

        let pieces: Vec<&str> = raw.split('^').collect();
        if pieces.len() > MAX_SEGMENTS {
            return Err(CodeError::TooManySegments {
                count: pieces.len(),
            });
        }

        let mut segments = Vec::with_capacity(pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            let Some((abbrev, sig)) = piece.split_once('.') else {
                return Err(CodeError::MalformedSegment {
                    text: piece.to_string(),
                    segment: i,
                });
            };
            // Resolve against the vocabulary so the segment borrows the
            // canonical &'static strings.
            let Some((abbrev, name)) = self
                .vocab
                .names
                .iter()
                .find(|(a, _)| *a == abbrev)
                .copied()
            else {
                return Err(CodeError::UnknownAbbrev {
                    abbrev: abbrev.to_string(),
                    segment: i,
                });
            };
            let Some(significance) = Significance::from_letter(sig) else {
                return Err(CodeError::UnknownSignificance {
                    letter: sig.to_string(),
                    segment: i,
                });
            };
            segments.push(Segment {
                abbrev,
                name,
                significance,
            });
        }
        Ok(segments)
    }

    /// Re-pack a segment list into the wire form.
    pub fn encode(&self, segments: &[Segment]) -> String {
        if segments.is_empty() {
            return NONE_TOKEN.to_string();
        }
        segments
            .iter()
            .map(|s| format!("{}.{}", s.abbrev, s.significance.letter()))
            .collect::<Vec<_>>()
            .join("^")
    }

    /// English rendering: phrases joined with ", ", the final separator
    /// becoming " and ".
    pub fn english(&self, segments: &[Segment]) -> String {
        match segments {
            [] => NONE_TOKEN.to_string(),
            [only] => only.phrase(),
            [head @ .., last] => {
                let head = head
                    .iter()
                    .map(Segment::phrase)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} and {}", head, last.phrase())
            }
        }
    }

    /// Simplified numeric rank: the minimum priority over all segments
    /// under this decoder's table version, 0 when no segment's pair is in
    /// the table or the minimum lies above the defined range.
    pub fn simple_rank(&self, segments: &[Segment]) -> u32 {
        let table = self.vocab.priority(self.version);
        let min = segments
            .iter()
            .filter_map(|seg| {
                table
                    .entries
                    .iter()
                    .find(|(a, s, _)| *a == seg.abbrev && *s == seg.significance)
                    .map(|(_, _, priority)| *priority)
            })
            .min();
        match min {
            Some(rank) if rank <= table.max_rank => rank,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_multi_segment_hazard() {
        let dec = CodedDecoder::hazard(TableVersion::V2);
        let segs = dec.decode("WS.W^FL.A^FG.Y").unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].name, "Winter Storm");
        assert_eq!(segs[0].significance, Significance::Warning);
        assert_eq!(segs[1].significance, Significance::Watch);
        assert_eq!(segs[2].name, "Dense Fog");
    }

    #[test]
    fn none_token_decodes_empty() {
        let dec = CodedDecoder::hazard(TableVersion::V2);
        assert!(dec.decode("<None>").unwrap().is_empty());
        assert_eq!(dec.english(&[]), "<None>");
        assert_eq!(dec.simple_rank(&[]), 0);
    }

    #[test]
    fn english_joins_with_final_and() {
        let dec = CodedDecoder::hazard(TableVersion::V2);
        let segs = dec.decode("WS.W^FL.A^FG.Y").unwrap();
        assert_eq!(
            dec.english(&segs),
            "Winter Storm Warning, Flood Watch and Dense Fog Advisory"
        );

        let one = dec.decode("TO.W").unwrap();
        assert_eq!(dec.english(&one), "Tornado Warning");

        let two = dec.decode("TO.W^SV.A").unwrap();
        assert_eq!(
            dec.english(&two),
            "Tornado Warning and Severe Thunderstorm Watch"
        );
    }

    #[test]
    fn round_trip_preserves_order() {
        let dec = CodedDecoder::hazard(TableVersion::V1);
        let raw = "HU.A^CF.W^SC.Y";
        let segs = dec.decode(raw).unwrap();
        assert_eq!(dec.encode(&segs), raw);

        let wx = CodedDecoder::weather(TableVersion::V2);
        let raw = "SN.W^ZR.Y";
        assert_eq!(wx.encode(&wx.decode(raw).unwrap()), raw);
    }

    #[test]
    fn simple_rank_takes_minimum() {
        let dec = CodedDecoder::hazard(TableVersion::V2);
        // FG.Y has rank 69, WS.W rank 13: minimum wins.
        let segs = dec.decode("FG.Y^WS.W").unwrap();
        assert_eq!(dec.simple_rank(&segs), 13);
    }

    #[test]
    fn rank_clamps_above_defined_range() {
        let dec = CodedDecoder::hazard(TableVersion::V2);
        // FR.Y is priority 85, above max_rank 80.
        let segs = dec.decode("FR.Y").unwrap();
        assert_eq!(dec.simple_rank(&segs), 0);
        // A pair absent from the table entirely also clamps to 0.
        let segs = dec.decode("ZF.W").unwrap();
        assert_eq!(dec.simple_rank(&segs), 0);
    }

    #[test]
    fn versions_rank_differently_without_changing_grammar() {
        let raw = "GL.W";
        let v1 = CodedDecoder::hazard(TableVersion::V1);
        let v2 = CodedDecoder::hazard(TableVersion::V2);
        let s1 = v1.decode(raw).unwrap();
        let s2 = v2.decode(raw).unwrap();
        assert_eq!(s1, s2);
        assert_eq!(v1.simple_rank(&s1), 25);
        assert_eq!(v2.simple_rank(&s2), 20);
    }

    #[test]
    fn unknown_abbrev_is_a_decode_failure() {
        let dec = CodedDecoder::hazard(TableVersion::V2);
        assert!(matches!(
            dec.decode("QQ.W"),
            Err(CodeError::UnknownAbbrev { .. })
        ));
        assert!(matches!(
            dec.decode("WS.Q"),
            Err(CodeError::UnknownSignificance { .. })
        ));
        assert!(matches!(
            dec.decode("WSW"),
            Err(CodeError::MalformedSegment { .. })
        ));
        assert_eq!(dec.decode(""), Err(CodeError::Empty));
    }

    #[test]
    fn weather_variant_uses_its_own_vocabulary() {
        let wx = CodedDecoder::weather(TableVersion::V2);
        let segs = wx.decode("RW.Y").unwrap();
        assert_eq!(segs[0].name, "Rain Showers");
        // "WS" is a hazard code, not a weather type.
        assert!(matches!(
            wx.decode("WS.W"),
            Err(CodeError::UnknownAbbrev { .. })
        ));
    }

    #[test]
    fn too_many_segments_rejected() {
        let dec = CodedDecoder::weather(TableVersion::V2);
        let raw = vec!["RA.Y"; 21].join("^");
        assert!(matches!(
            dec.decode(&raw),
            Err(CodeError::TooManySegments { count: 21 })
        ));
    }
}
