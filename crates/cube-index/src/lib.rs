//! Cube index reading.
//!
//! A "cube" is a pair of on-disk artifacts produced by the indexing step:
//! a binary *index* file describing grids, elements, and time samples, and
//! one or more flat *data* files holding raw 4-byte float cell values. The
//! index maps (element, valid time) to a byte offset in a data file, so a
//! probe can seek straight to the cell of interest without re-decoding any
//! source message.
//!
//! This crate parses the index into an immutable in-memory directory
//! ([`CubeIndex`]), and reads individual cells from the data files through
//! a per-query file-handle cache ([`DataFileCache`]).
//!
//! # Index layout (all integers little-endian)
//!
//! ```text
//! [ HEADLEN-byte preamble: magic "CUBX", u16 format version, reserved ]
//! u16  numGDS
//! numGDS x GDSLEN-byte grid definition records
//! u16  numSuperPDS
//! numSuperPDS x variable-length element blocks:
//!     i32  block length (bytes, including this field)
//!     str  element name          (u16 length prefix)
//!     f64  reference time        (unix seconds)
//!     str  unit
//!     str  comment
//!     u16  gdsIndex (1-based)
//!     u16  center,  u16 subCenter
//!     u16  numPDS
//!     numPDS x time-sample sub-records:
//!         u16  record length (bytes, including this field)
//!         f64  valid time
//!         str  data file name
//!         i32  data offset
//!         u8   endian flag (1 = big)
//!         u8   scan mode  (1 = row 1 is the top row)
//!         u16  numTableEntries, then that many strings
//! ```

pub mod cursor;
pub mod data;
pub mod grid;
pub mod index;

pub use cursor::Cursor;
pub use data::{read_cell, DataFileCache, ScanMode};
pub use grid::{GridDefinition, ProjectionKind};
pub use index::{CubeIndex, ElementTimeSeries, TimeSample};

/// Length of the opaque index-file preamble.
pub const HEADLEN: usize = 32;

/// Length of one fixed-size grid-definition record.
pub const GDSLEN: usize = 84;

/// Magic at the start of the preamble.
pub const MAGIC: &[u8; 4] = b"CUBX";

/// Index format version this reader understands.
pub const FORMAT_VERSION: u16 = 2;
