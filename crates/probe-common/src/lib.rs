//! Shared types for the gridprobe workspace.
//!
//! Everything a probe query passes between crates lives here: the error
//! type, the time window, probe points, and probe cell values.

pub mod error;
pub mod point;
pub mod time;
pub mod value;

pub use error::{ProbeError, ProbeResult};
pub use point::ProbePoint;
pub use time::{TimeBound, TimeWindow};
pub use value::ProbeValue;

/// Sentinel written into flat data files for cells with no value.
///
/// Cube data files carry no per-cell missing bitmap; this fixed value
/// stands in for "no data" and is also what `read_cell` returns for
/// out-of-range coordinates.
pub const MISSING_SENTINEL: f32 = 9999.0;
