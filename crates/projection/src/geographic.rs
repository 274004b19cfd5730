//! Regular geographic (latitude/longitude) grids.

use crate::{GridProjection, ProjectionError};

/// An equidistant lat/lon grid.
///
/// Column 1 sits at `lon1`, row 1 at `lat1`; columns advance east by
/// `dlon` degrees and rows advance by `dlat` (positive north). Whether the
/// grid is cyclic in x is derived from the geometry: a grid whose columns
/// span the full circle of longitude wraps, anything narrower does not.
#[derive(Debug, Clone)]
pub struct GeographicGrid {
    lat1: f64,
    lon1: f64,
    dlat: f64,
    dlon: f64,
    nx: usize,
    ny: usize,
    cyclic: bool,
}

impl GeographicGrid {
    pub fn new(
        lat1: f64,
        lon1: f64,
        dlat: f64,
        dlon: f64,
        nx: usize,
        ny: usize,
    ) -> Result<Self, ProjectionError> {
        if nx == 0 || ny == 0 {
            return Err(ProjectionError::InvalidGeometry(format!(
                "grid dimensions must be nonzero, got {}x{}",
                nx, ny
            )));
        }
        if dlon <= 0.0 || dlat == 0.0 {
            return Err(ProjectionError::InvalidGeometry(format!(
                "grid increments must be nonzero (dlon positive), got dlat={} dlon={}",
                dlat, dlon
            )));
        }
        // Nx cells cover Nx*dlon degrees; the grid wraps when that span
        // reaches 360 (the cell after column Nx is column 1 again).
        let cyclic = (nx as f64) * dlon >= 360.0 - 1e-6;
        Ok(Self {
            lat1,
            lon1,
            dlat,
            dlon,
            nx,
            ny,
            cyclic,
        })
    }
}

impl GridProjection for GeographicGrid {
    fn to_grid(&self, lat: f64, lon: f64) -> (f64, f64) {
        // Normalize the longitude offset into [0, 360) so grids stored in
        // 0..360 space accept -180..180 probes and vice versa.
        let mut dx = (lon - self.lon1) % 360.0;
        if dx < 0.0 {
            dx += 360.0;
        }
        // On a regional grid, a point just west of lon1 is a small
        // negative offset, not a nearly-full circle east.
        if !self.cyclic && dx > (self.nx as f64) * self.dlon {
            dx -= 360.0;
        }
        let x = 1.0 + dx / self.dlon;
        let y = 1.0 + (lat - self.lat1) / self.dlat;
        (x, y)
    }

    fn to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let lat = self.lat1 + (y - 1.0) * self.dlat;
        let lon = self.lon1 + (x - 1.0) * self.dlon;
        (lat, lon)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    fn is_cyclic(&self) -> bool {
        self.cyclic
    }
}
