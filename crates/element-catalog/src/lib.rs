//! Element catalog and fingerprint matcher.
//!
//! Decoded meteorological messages identify themselves only through raw
//! metadata: originating center, generating process, product template,
//! category codes, surface, and probability bounds. This crate maps that
//! raw "fingerprint" to a canonical [`ElementId`], provides the element's
//! name under three conventions, and builds the element filter set a probe
//! query uses.
//!
//! The catalog is static, immutable, process-wide data: a `&'static` table
//! built at compile time, so concurrent queries need no synchronization.

pub mod catalog;
pub mod filter;
pub mod fingerprint;
pub mod id;

pub use catalog::{lookup_by_name, name_for, resolve, unit_for, NameConvention};
pub use filter::{build_filter_set, default_interest};
pub use fingerprint::{MessageFingerprint, ProbBounds, ScaledValue, SurfaceSpec};
pub use id::ElementId;
