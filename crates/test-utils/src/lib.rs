//! Shared test utilities for the gridprobe workspace.
//!
//! The main export is [`CubeBuilder`], which writes a synthetic cube
//! (index file plus flat data files) into a directory, usually a
//! [`tempfile::TempDir`]. Tests describe grids, elements, and time
//! samples declaratively and get back the index path to open.
//!
//! ```ignore
//! let dir = tempfile::tempdir().unwrap();
//! let index = CubeBuilder::new()
//!     .grid(GridSpec::geographic(4, 4, 30.0, 260.0, 0.5, 0.5))
//!     .element(
//!         ElementBuilder::new("maxt", "K")
//!             .sample(SampleSpec::new(t0, "maxt.dat", gradient_grid(4, 4))),
//!     )
//!     .write(dir.path(), "cube.ind")
//!     .unwrap();
//! ```

pub mod cube;
pub mod grids;

pub use cube::{CubeBuilder, ElementBuilder, GridSpec, SampleSpec};
pub use grids::{constant_grid, gradient_grid};
