//! The probe orchestrator.
//!
//! Drives a point-probe query over a set of inputs (cube indexes, or raw
//! message streams behind an injected decoder): builds the element filter,
//! scans each input for matching (element, valid time) fields,
//! de-duplicates on (sector, reference time, valid time, element), samples
//! every requested point, and emits one [`MatchRecord`] per surviving
//! match.
//!
//! Failure policy: an unreadable input is logged and skipped while other
//! inputs remain; a structurally invalid cube index aborts the whole
//! query; a coded-string decode failure degrades that one cell to missing
//! while keeping the raw string on the record.

mod query;
mod record;
mod runner;
mod stream;

pub use query::{PointSet, ProbeQuery};
pub use record::{MatchKey, MatchRecord};
pub use runner::{run, ProbeInput};
pub use stream::{DecodedMessage, MessageStream};
