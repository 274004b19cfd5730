//! Grid-definition records.

use probe_common::{ProbeError, ProbeResult};
use projection::{GeographicGrid, GridProjection, LambertConformal};

use crate::cursor::Cursor;
use crate::GDSLEN;

/// Which projection family a grid definition uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Regular latitude/longitude grid.
    Geographic,
    /// Lambert conformal conic.
    Lambert,
}

impl ProjectionKind {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Geographic),
            3 => Some(Self::Lambert),
            _ => None,
        }
    }
}

/// One fixed-length grid-definition record from the index.
///
/// Geometry parameters are interpreted per projection kind: for
/// geographic grids `dx`/`dy` are degrees and the orientation/parallels
/// are unused; for Lambert grids `dx`/`dy` are meters.
#[derive(Debug, Clone)]
pub struct GridDefinition {
    pub kind: ProjectionKind,
    pub nx: u32,
    pub ny: u32,
    /// First grid point, degrees.
    pub lat1: f64,
    pub lon1: f64,
    /// Central meridian (Lambert only).
    pub orient_lon: f64,
    pub dx: f64,
    pub dy: f64,
    pub latin1: f64,
    pub latin2: f64,
    /// Number of cell values actually stored for this grid.
    pub num_values: u32,
}

impl GridDefinition {
    /// Parse one GDSLEN-byte record. The cursor must sit at the record
    /// start; it ends up exactly GDSLEN bytes later.
    pub(crate) fn parse(cur: &mut Cursor<'_>, path: &str, index: usize) -> ProbeResult<Self> {
        let start = cur.position();
        let code = cur.read_u8()?;
        let kind = ProjectionKind::from_code(code).ok_or_else(|| ProbeError::InvalidGrid {
            path: path.to_string(),
            index,
            reason: format!("unknown projection code {}", code),
        })?;
        cur.skip(1)?; // reserved
        let nx = cur.read_u32()?;
        let ny = cur.read_u32()?;
        let lat1 = cur.read_f64()?;
        let lon1 = cur.read_f64()?;
        let orient_lon = cur.read_f64()?;
        let dx = cur.read_f64()?;
        let dy = cur.read_f64()?;
        let latin1 = cur.read_f64()?;
        let latin2 = cur.read_f64()?;
        let num_values = cur.read_u32()?;
        cur.skip(GDSLEN - (cur.position() - start))?; // reserved tail

        let gds = Self {
            kind,
            nx,
            ny,
            lat1,
            lon1,
            orient_lon,
            dx,
            dy,
            latin1,
            latin2,
            num_values,
        };
        gds.validate().map_err(|reason| ProbeError::InvalidGrid {
            path: path.to_string(),
            index,
            reason,
        })?;
        Ok(gds)
    }

    /// Internal-consistency check: dimensions nonzero, geometry sane, and
    /// room for every stored cell value.
    pub fn validate(&self) -> Result<(), String> {
        if self.nx == 0 || self.ny == 0 {
            return Err(format!("dimensions {}x{} are degenerate", self.nx, self.ny));
        }
        if !(-90.0..=90.0).contains(&self.lat1) {
            return Err(format!("first-point latitude {} out of range", self.lat1));
        }
        if self.dx <= 0.0 || self.dy == 0.0 {
            return Err(format!("increments dx={} dy={} invalid", self.dx, self.dy));
        }
        let cells = self.nx as u64 * self.ny as u64;
        if cells < self.num_values as u64 {
            return Err(format!(
                "{} stored values exceed {}x{} grid",
                self.num_values, self.nx, self.ny
            ));
        }
        Ok(())
    }

    /// Build the coordinate transform for this grid.
    pub fn projection(&self) -> ProbeResult<Box<dyn GridProjection>> {
        let proj: Box<dyn GridProjection> = match self.kind {
            ProjectionKind::Geographic => Box::new(
                GeographicGrid::new(
                    self.lat1,
                    self.lon1,
                    self.dy,
                    self.dx,
                    self.nx as usize,
                    self.ny as usize,
                )
                .map_err(|e| ProbeError::Projection(e.to_string()))?,
            ),
            ProjectionKind::Lambert => Box::new(
                LambertConformal::new(
                    self.lat1,
                    self.lon1,
                    self.orient_lon,
                    self.latin1,
                    self.latin2,
                    self.dx,
                    self.dy,
                    self.nx as usize,
                    self.ny as usize,
                )
                .map_err(|e| ProbeError::Projection(e.to_string()))?,
            ),
        };
        Ok(proj)
    }

    /// Sector tag derived from the grid's footprint. Part of the match
    /// de-duplication key.
    pub fn sector(&self) -> &'static str {
        let lon = if self.lon1 > 180.0 {
            self.lon1 - 360.0
        } else {
            self.lon1
        };
        let lat = self.lat1;
        match self.kind {
            _ if (12.0..=15.0).contains(&lat) && (143.0..=146.0).contains(&lon) => "guam",
            _ if (15.0..=19.5).contains(&lat) && (-68.5..=-63.5).contains(&lon) => "puertori",
            _ if (17.0..=24.0).contains(&lat) && (-162.0..=-153.0).contains(&lon) => "hawaii",
            _ if lat >= 40.0 && (lon >= 150.0 || lon <= -130.0) => "alaska",
            _ if (19.0..=27.0).contains(&lat) && (-135.0..=-60.0).contains(&lon) => "conus",
            _ if lat < 19.0 && (-180.0..=-100.0).contains(&lon) => "npacocn",
            _ => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conus_gds() -> GridDefinition {
        GridDefinition {
            kind: ProjectionKind::Lambert,
            nx: 1073,
            ny: 689,
            lat1: 20.192,
            lon1: -121.554,
            orient_lon: -95.0,
            dx: 5079.0,
            dy: 5079.0,
            latin1: 25.0,
            latin2: 25.0,
            num_values: 1073 * 689,
        }
    }

    #[test]
    fn valid_grid_passes() {
        assert!(conus_gds().validate().is_ok());
    }

    #[test]
    fn too_many_stored_values_rejected() {
        let mut gds = conus_gds();
        gds.num_values = gds.nx * gds.ny + 1;
        assert!(gds.validate().is_err());
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut gds = conus_gds();
        gds.ny = 0;
        assert!(gds.validate().is_err());
    }

    #[test]
    fn sector_classification() {
        assert_eq!(conus_gds().sector(), "conus");

        let mut gds = conus_gds();
        gds.kind = ProjectionKind::Geographic;
        gds.lat1 = 13.35;
        gds.lon1 = 144.6;
        gds.dx = 0.05;
        gds.dy = 0.05;
        assert_eq!(gds.sector(), "guam");

        gds.lat1 = 18.9;
        gds.lon1 = -160.6;
        assert_eq!(gds.sector(), "hawaii");

        gds.lat1 = 44.0;
        gds.lon1 = 185.0; // stored as 0..360 east
        assert_eq!(gds.sector(), "alaska");

        gds.lat1 = -30.0;
        gds.lon1 = 10.0;
        assert_eq!(gds.sector(), "custom");
    }

    #[test]
    fn projection_round_trips_first_point() {
        let gds = GridDefinition {
            kind: ProjectionKind::Geographic,
            nx: 100,
            ny: 80,
            lat1: 20.0,
            lon1: 230.0,
            orient_lon: 0.0,
            dx: 0.5,
            dy: 0.5,
            latin1: 0.0,
            latin2: 0.0,
            num_values: 8000,
        };
        let proj = gds.projection().unwrap();
        let (x, y) = proj.to_grid(20.0, 230.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }
}
