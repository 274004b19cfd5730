//! The raw-message input seam.
//!
//! Bit-level message decoding lives outside this workspace; a decoder
//! plugs in behind [`MessageStream`] and hands the orchestrator fully
//! decoded grids with their raw metadata fingerprints.

use chrono::{DateTime, Utc};

use cube_index::GridDefinition;
use element_catalog::MessageFingerprint;
use grid_sample::MissingValues;
use probe_common::ProbeResult;

/// One decoded message: metadata plus the full grid of cell values.
#[derive(Debug, Clone)]
pub struct DecodedMessage {
    pub fingerprint: MessageFingerprint,
    pub ref_time: DateTime<Utc>,
    pub valid_time: DateTime<Utc>,
    pub unit: String,
    pub grid: GridDefinition,
    /// `nx * ny` cell values, row-major.
    pub values: Vec<f32>,
    /// True when `values` stores the north row first.
    pub top_first: bool,
    /// The missing-value convention this message declared.
    pub missing: MissingValues,
    /// Coded-string lookup table; empty for plain numeric elements.
    pub wx_table: Vec<String>,
}

/// A sequential source of decoded messages.
///
/// `next_message` returns `Ok(None)` at end of stream. An `Err` means the
/// decoder lost synchronization mid-message and the stream cannot
/// continue; recoverable per-message problems are the decoder's to skip
/// internally before handing the next message over.
pub trait MessageStream {
    fn next_message(&mut self) -> ProbeResult<Option<DecodedMessage>>;
}
