//! Map projections for probe grids.
//!
//! Implements the projections from scratch without external dependencies.
//! Every grid geometry exposes the [`GridProjection`] seam: conversion
//! between geographic coordinates and fractional 1-based grid cells, plus
//! the properties the interpolation engine derives policy from (grid
//! dimensions, and whether the grid wraps in the x direction).

pub mod geographic;
pub mod lambert;

pub use geographic::GeographicGrid;
pub use lambert::LambertConformal;

use thiserror::Error;

/// Invalid projection geometry.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(String),
}

/// Coordinate transform between geographic space and 1-based grid cells.
///
/// Cell (1.0, 1.0) is the first stored grid point; fractional coordinates
/// fall between cells and are what the interpolation engine consumes.
pub trait GridProjection {
    /// Geographic (degrees) to fractional grid cell.
    fn to_grid(&self, lat: f64, lon: f64) -> (f64, f64);

    /// Fractional grid cell to geographic (degrees).
    fn to_geo(&self, x: f64, y: f64) -> (f64, f64);

    /// (Nx, Ny).
    fn dimensions(&self) -> (usize, usize);

    /// Whether column Nx+1 wraps around to column 1.
    ///
    /// This is a property derived from the grid's geometry, never a flag a
    /// caller sets: only geographic grids spanning the full circle of
    /// longitude wrap. Projected (e.g. Lambert) grids never do.
    fn is_cyclic(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_objects_are_usable() {
        let grid = GeographicGrid::new(20.0, 230.0, 0.5, 0.5, 100, 80).unwrap();
        let proj: &dyn GridProjection = &grid;
        assert_eq!(proj.dimensions(), (100, 80));
        assert!(!proj.is_cyclic());
    }
}
