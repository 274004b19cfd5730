//! Coded-string decoding for weather and hazard grid cells.
//!
//! Weather and hazard grids store a small integer per cell that indexes a
//! per-time-sample table of packed "coded strings". A coded string is
//! either the sentinel `<None>` or up to [`MAX_SEGMENTS`] caret-separated
//! segments of the form `ABBREV.SIG`, e.g. `WS.W^FG.Y` for a Winter Storm
//! Warning plus a Dense Fog Advisory.
//!
//! Both variants (hazard and weather) share one grammar and decoder; they
//! differ only in phenomenon vocabulary and priority tables. A
//! [`TableVersion`] selects among historical priority tables without
//! changing the parsing grammar.

mod decoder;
mod tables;

pub use decoder::{CodedDecoder, Segment, Significance};
pub use tables::TableVersion;

use thiserror::Error;

/// Maximum number of segments one coded string may carry.
pub const MAX_SEGMENTS: usize = 20;

/// Sentinel token for "no phenomena at this cell".
pub const NONE_TOKEN: &str = "<None>";

/// Coded-string grammar violations.
///
/// Callers recover by treating the cell as missing while surfacing the raw
/// string for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("unknown phenomenon abbreviation {abbrev:?} in segment {segment}")]
    UnknownAbbrev { abbrev: String, segment: usize },

    #[error("unknown significance letter {letter:?} in segment {segment}")]
    UnknownSignificance { letter: String, segment: usize },

    #[error("segment {segment} is not of the form ABBREV.SIG: {text:?}")]
    MalformedSegment { text: String, segment: usize },

    #[error("coded string has {count} segments; at most {max} allowed", max = MAX_SEGMENTS)]
    TooManySegments { count: usize },

    #[error("empty coded string")]
    Empty,
}
