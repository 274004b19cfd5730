use probe_common::ProbeResult;
use projection::GridProjection;
use tracing::trace;

use crate::missing::MissingValues;
use crate::source::CellSource;

/// Interpolation method applied at a probe point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpMethod {
    /// Snap to the closest cell centre.
    Nearest,
    /// Bilinear blend of the four surrounding cells.
    #[default]
    Bilinear,
}

/// Per-field sampling options.
#[derive(Debug, Clone, Copy)]
pub struct SampleOptions {
    pub method: InterpMethod,
    pub missing: MissingValues,
    /// With bilinear, average the valid corners instead of reporting
    /// missing when one to three corners are missing.
    pub average_partial: bool,
}

impl SampleOptions {
    pub fn new(method: InterpMethod, missing: MissingValues) -> Self {
        Self { method, missing, average_partial: false }
    }
}

/// Sample a field at fractional grid coordinates `(x, y)` (1-based).
///
/// `cyclic` enables the longitude wrap of global grids: a bilinear box
/// whose right edge falls one column past `nx` borrows column 1 instead
/// of going missing. Returns `Ok(None)` when the point falls outside the
/// grid or the surrounding cells are missing.
pub fn sample(
    src: &mut dyn CellSource,
    nx: u32,
    ny: u32,
    cyclic: bool,
    x: f64,
    y: f64,
    opts: &SampleOptions,
) -> ProbeResult<Option<f32>> {
    match opts.method {
        InterpMethod::Nearest => nearest(src, nx, ny, x, y, opts),
        InterpMethod::Bilinear => bilinear(src, nx, ny, cyclic, x, y, opts),
    }
}

/// Project a geographic point into grid space and sample there.
pub fn sample_geo(
    src: &mut dyn CellSource,
    proj: &dyn GridProjection,
    lat: f64,
    lon: f64,
    opts: &SampleOptions,
) -> ProbeResult<Option<f32>> {
    let (x, y) = proj.to_grid(lat, lon);
    let (nx, ny) = proj.dimensions();
    sample(src, nx as u32, ny as u32, proj.is_cyclic(), x, y, opts)
}

fn nearest(
    src: &mut dyn CellSource,
    nx: u32,
    ny: u32,
    x: f64,
    y: f64,
    opts: &SampleOptions,
) -> ProbeResult<Option<f32>> {
    let col = x.round();
    let row = y.round();
    if col < 1.0 || col > nx as f64 || row < 1.0 || row > ny as f64 {
        trace!(x, y, nx, ny, "nearest probe outside grid");
        return Ok(None);
    }
    let v = src.cell(col as u32, row as u32)?;
    if opts.missing.is_missing(v) {
        return Ok(None);
    }
    Ok(Some(v))
}

fn bilinear(
    src: &mut dyn CellSource,
    nx: u32,
    ny: u32,
    cyclic: bool,
    x: f64,
    y: f64,
    opts: &SampleOptions,
) -> ProbeResult<Option<f32>> {
    let x1 = x.floor();
    let y1 = y.floor();
    let x2 = x1 + 1.0;
    let y2 = y1 + 1.0;

    if x1 < 1.0 || y1 < 1.0 || y2 > ny as f64 {
        trace!(x, y, nx, ny, "bilinear box outside grid");
        return Ok(None);
    }
    // A right edge one column past nx is legal on a cyclic grid: the
    // wrapped fetch reads column 1 while the weights keep using x2.
    let fetch_x2 = if x2 > nx as f64 {
        if cyclic && x1 <= nx as f64 {
            1
        } else {
            trace!(x, y, nx, ny, "bilinear box outside grid");
            return Ok(None);
        }
    } else {
        x2 as u32
    };
    let (c1, r1, r2) = (x1 as u32, y1 as u32, y2 as u32);

    // Corner layout: d11/d21 sit on row y1, d12/d22 on row y2.
    let d11 = src.cell(c1, r1)?;
    let d21 = src.cell(fetch_x2, r1)?;
    let d12 = src.cell(c1, r2)?;
    let d22 = src.cell(fetch_x2, r2)?;

    let corners = [d11, d21, d12, d22];
    let any_missing = corners.iter().any(|&v| opts.missing.is_missing(v));
    if any_missing {
        if !opts.average_partial {
            return Ok(None);
        }
        let valid: Vec<f64> = corners
            .iter()
            .filter(|&&v| !opts.missing.is_missing(v))
            .map(|&v| v as f64)
            .collect();
        if valid.is_empty() {
            return Ok(None);
        }
        let mean = valid.iter().sum::<f64>() / valid.len() as f64;
        return Ok(Some(mean as f32));
    }

    let (d11, d21, d12, d22) =
        (d11 as f64, d21 as f64, d12 as f64, d22 as f64);
    let t1 = d11 + (x - x1) * (d11 - d21) / (x1 - x2);
    let t2 = d12 + (x - x1) * (d12 - d22) / (x1 - x2);
    let result = t1 + (y - y1) * (t1 - t2) / (y1 - y2);
    Ok(Some(result as f32))
}
