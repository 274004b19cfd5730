//! Grid-space sampling: nearest-cell and bilinear interpolation over a
//! cell source, with missing-value screening and the cyclic-longitude
//! wrap used by global geographic grids.
//!
//! Everything here works in 1-based fractional grid coordinates. Mapping
//! lat/lon into grid space is the projection's job; [`sample_geo`] glues
//! the two together for callers that start from a geographic point.

mod missing;
mod sampler;
mod source;

pub use missing::{derive_sentinel, MissingPolicy, MissingValues};
pub use sampler::{sample, sample_geo, InterpMethod, SampleOptions};
pub use source::{CellSource, SliceSource};
