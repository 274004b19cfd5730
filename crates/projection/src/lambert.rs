//! Lambert Conformal Conic projection.
//!
//! The workhorse projection for regional forecast grids (CONUS sectors).
//! Maps a cone tangent or secant to the Earth's surface onto a plane.

use std::f64::consts::PI;

use crate::{GridProjection, ProjectionError};

/// Lambert Conformal Conic grid geometry.
///
/// Constructed from the parameters a grid definition carries: first grid
/// point, central meridian, standard parallels, mesh spacing, dimensions.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Central meridian in radians.
    lon0: f64,
    /// Longitude of first grid point in radians.
    lon1: f64,
    /// Grid spacing in meters.
    dx: f64,
    dy: f64,
    nx: usize,
    ny: usize,
    earth_radius: f64,
    /// Cone constant.
    n: f64,
    f: f64,
    rho0: f64,
}

impl LambertConformal {
    /// Build the projection from grid-definition parameters (degrees and
    /// meters).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lat1_deg: f64,
        lon1_deg: f64,
        orient_deg: f64,
        latin1_deg: f64,
        latin2_deg: f64,
        dx: f64,
        dy: f64,
        nx: usize,
        ny: usize,
    ) -> Result<Self, ProjectionError> {
        if nx == 0 || ny == 0 {
            return Err(ProjectionError::InvalidGeometry(format!(
                "grid dimensions must be nonzero, got {}x{}",
                nx, ny
            )));
        }
        if dx <= 0.0 || dy <= 0.0 {
            return Err(ProjectionError::InvalidGeometry(format!(
                "mesh spacing must be positive, got dx={} dy={}",
                dx, dy
            )));
        }
        if latin1_deg.abs() >= 90.0 || latin2_deg.abs() >= 90.0 {
            return Err(ProjectionError::InvalidGeometry(format!(
                "standard parallels must lie strictly between the poles, got {} and {}",
                latin1_deg, latin2_deg
            )));
        }

        let to_rad = PI / 180.0;
        let lat1 = lat1_deg * to_rad;
        let lon1 = lon1_deg * to_rad;
        let lon0 = orient_deg * to_rad;
        let latin1 = latin1_deg * to_rad;
        let latin2 = latin2_deg * to_rad;

        let earth_radius = 6_371_229.0;

        // Cone constant: tangent cone when the parallels coincide.
        let n = if (latin1 - latin2).abs() < 1e-10 {
            latin1.sin()
        } else {
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((PI / 4.0 + latin2 / 2.0).tan() / (PI / 4.0 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        let f = (latin1.cos() * (PI / 4.0 + latin1 / 2.0).tan().powf(n)) / n;
        let rho0 = earth_radius * f / (PI / 4.0 + lat1 / 2.0).tan().powf(n);

        Ok(Self {
            lon0,
            lon1,
            dx,
            dy,
            nx,
            ny,
            earth_radius,
            n,
            f,
            rho0,
        })
    }

    /// Projection-plane coordinates of the first grid point.
    fn origin(&self) -> (f64, f64) {
        let theta0 = self.n * normalize(self.lon1 - self.lon0);
        let x0 = self.rho0 * theta0.sin();
        let y0 = self.rho0 - self.rho0 * theta0.cos();
        (x0, y0)
    }
}

fn normalize(mut dlon: f64) -> f64 {
    while dlon > PI {
        dlon -= 2.0 * PI;
    }
    while dlon < -PI {
        dlon += 2.0 * PI;
    }
    dlon
}

impl GridProjection for LambertConformal {
    fn to_grid(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let to_rad = PI / 180.0;
        let lat = lat_deg * to_rad;
        let lon = lon_deg * to_rad;

        let dlon = normalize(lon - self.lon0);
        let rho = self.earth_radius * self.f / (PI / 4.0 + lat / 2.0).tan().powf(self.n);
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        let (x0, y0) = self.origin();
        (1.0 + (x - x0) / self.dx, 1.0 + (y - y0) / self.dy)
    }

    fn to_geo(&self, col: f64, row: f64) -> (f64, f64) {
        let to_deg = 180.0 / PI;
        let (x0, y0) = self.origin();

        let x = x0 + (col - 1.0) * self.dx;
        let y = y0 + (row - 1.0) * self.dy;

        let rho = (x * x + (self.rho0 - y) * (self.rho0 - y)).sqrt();
        let rho = if self.n < 0.0 { -rho } else { rho };
        let theta = (x / (self.rho0 - y)).atan();

        let lat = 2.0 * ((self.earth_radius * self.f / rho).powf(1.0 / self.n)).atan() - PI / 2.0;
        let lon = self.lon0 + theta / self.n;

        (lat * to_deg, lon * to_deg)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    // A projected cone never wraps: is_cyclic stays false.
}
