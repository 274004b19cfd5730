//! The query state machine: INIT, SCAN, DEDUP, FILL, EMIT.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use cube_index::{read_cell, CubeIndex, DataFileCache, ElementTimeSeries, ScanMode, TimeSample};
use element_catalog::{build_filter_set, name_for, resolve, unit_for, ElementId, NameConvention};
use grid_sample::{sample, CellSource, MissingValues, SampleOptions, SliceSource};
use probe_common::{ProbeError, ProbePoint, ProbeResult, ProbeValue, MISSING_SENTINEL};
use projection::GridProjection;
use wx_codes::CodedDecoder;

use crate::query::{PointSet, ProbeQuery};
use crate::record::{MatchKey, MatchRecord};
use crate::stream::MessageStream;

/// One probe input: a cube index on disk, or an already-open decoded
/// message stream.
pub enum ProbeInput {
    Cube(PathBuf),
    Raw(Box<dyn MessageStream>),
}

/// Run one query over its inputs and return the matches in scan order.
///
/// An unreadable cube is logged and skipped while other inputs remain; a
/// structurally invalid one aborts the query. A stream error always
/// aborts (it means the decoder lost synchronization).
pub fn run(inputs: Vec<ProbeInput>, query: &ProbeQuery) -> ProbeResult<Vec<MatchRecord>> {
    // INIT: everything that can be rejected before touching a file.
    if query.points.is_empty() {
        return Err(ProbeError::InvalidQuery("no probe points given".into()));
    }
    if inputs.is_empty() {
        return Err(ProbeError::NoInputs);
    }
    let mut filter = build_filter_set(&query.elements, &query.interest);
    if query.elements.contains(&ElementId::MatchAll) {
        // The sentinel rides along so the per-input iterators accept every
        // resolvable element rather than only the weighted winners.
        filter.insert(ElementId::MatchAll);
    }
    if query.expect_single {
        let named = filter.iter().filter(|id| !id.is_sentinel()).count();
        if named != 1 {
            return Err(ProbeError::InvalidQuery(format!(
                "single-element mode needs exactly one element, filter has {}",
                named
            )));
        }
    }

    let sole_input = inputs.len() == 1;
    let mut seen: BTreeSet<MatchKey> = BTreeSet::new();
    let mut records = Vec::new();
    let mut readable = 0usize;

    for input in inputs {
        let outcome = match input {
            ProbeInput::Cube(path) => probe_cube(&path, query, &filter, &mut seen, &mut records),
            ProbeInput::Raw(stream) => {
                // Stream failures desynchronize; no skip policy applies.
                probe_stream(stream, query, &filter, &mut seen, &mut records)?;
                Ok(())
            }
        };
        match outcome {
            Ok(()) => readable += 1,
            Err(e) if e.is_fatal_to_query() || sole_input => return Err(e),
            Err(e) => warn!(error = %e, "skipping unreadable input"),
        }
    }
    if readable == 0 {
        return Err(ProbeError::NoInputs);
    }
    info!(matches = records.len(), "query complete");
    Ok(records)
}

/// Projection state carried across consecutive series on the same grid.
///
/// Rebuilding the transform and re-projecting every probe point is the
/// dominant per-series cost, so it only happens when the referenced grid
/// definition actually changes.
struct GridContext {
    gds_index: u16,
    proj: Box<dyn GridProjection>,
    points: Vec<(f64, f64)>,
}

impl GridContext {
    fn build(
        gds_index: u16,
        grid: &cube_index::GridDefinition,
        points: &PointSet,
    ) -> ProbeResult<Self> {
        let proj = grid.projection()?;
        let points = resolve_points(points, proj.as_ref(), grid.nx, grid.ny);
        Ok(Self {
            gds_index,
            proj,
            points,
        })
    }
}

fn resolve_points(
    points: &PointSet,
    proj: &dyn GridProjection,
    nx: u32,
    ny: u32,
) -> Vec<(f64, f64)> {
    match points {
        PointSet::List(list) => list
            .iter()
            .map(|p| match *p {
                ProbePoint::Geographic { lat, lon } => proj.to_grid(lat, lon),
                ProbePoint::Cell { col, row } => (col, row),
            })
            .collect(),
        PointSet::AllCells => {
            let mut cells = Vec::with_capacity(nx as usize * ny as usize);
            for row in 1..=ny {
                for col in 1..=nx {
                    cells.push((col as f64, row as f64));
                }
            }
            cells
        }
    }
}

fn probe_cube(
    path: &Path,
    query: &ProbeQuery,
    filter: &BTreeSet<ElementId>,
    seen: &mut BTreeSet<MatchKey>,
    records: &mut Vec<MatchRecord>,
) -> ProbeResult<()> {
    let index = CubeIndex::open(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let mut cache = DataFileCache::new(base);
    let result = probe_cube_inner(&index, &mut cache, query, filter, seen, records);
    // Teardown happens on success and error paths alike.
    cache.close_all();
    result
}

fn probe_cube_inner(
    index: &CubeIndex,
    cache: &mut DataFileCache,
    query: &ProbeQuery,
    filter: &BTreeSet<ElementId>,
    seen: &mut BTreeSet<MatchKey>,
    records: &mut Vec<MatchRecord>,
) -> ProbeResult<()> {
    let mut current: Option<GridContext> = None;

    for series in index.iter_time_series(filter) {
        let grid = index.grid_for(series);
        let ctx = match current {
            Some(ref c) if c.gds_index == series.gds_index => c,
            _ => current.insert(GridContext::build(series.gds_index, grid, &query.points)?),
        };
        let sector = grid.sector();

        for sample in &series.samples {
            // Samples arrive in non-decreasing valid-time order.
            if query.window.is_past(sample.valid_time) {
                break;
            }
            if !query.window.contains(sample.valid_time) {
                continue;
            }
            let key = MatchKey::new(sector, series.ref_time, sample.valid_time, series.element);
            if seen.contains(&key) {
                trace!(element = %series.name, valid = %sample.valid_time, "duplicate match skipped");
                continue;
            }
            let values = fill_from_cube(cache, series, sample, grid, ctx, query)?;
            // Committed only once the record is actually emitted, so a
            // skipped input cannot shadow the same match in a later one.
            seen.insert(key);
            records.push(MatchRecord {
                element: series.element,
                name: series.name.clone(),
                ref_time: series.ref_time,
                valid_time: sample.valid_time,
                sector: sector.to_string(),
                unit: unit_or_default(&series.unit, series.element),
                values,
            });
        }
    }
    Ok(())
}

/// Adapter: lazy per-cell reads against an open data file.
struct FileCellSource<'a> {
    file: &'a mut File,
    path: &'a str,
    offset: i64,
    scan: ScanMode,
    big_endian: bool,
    nx: u32,
    ny: u32,
}

impl CellSource for FileCellSource<'_> {
    fn cell(&mut self, col: u32, row: u32) -> ProbeResult<f32> {
        read_cell(
            self.file,
            self.path,
            self.offset,
            self.scan,
            self.big_endian,
            col,
            row,
            self.nx,
            self.ny,
        )
    }
}

fn fill_from_cube(
    cache: &mut DataFileCache,
    series: &ElementTimeSeries,
    sample: &TimeSample,
    grid: &cube_index::GridDefinition,
    ctx: &GridContext,
    query: &ProbeQuery,
) -> ProbeResult<Vec<ProbeValue>> {
    let file = cache.file(&sample.data_file)?;
    let mut src = FileCellSource {
        file,
        path: &sample.data_file,
        offset: sample.data_offset,
        scan: sample.scan_mode,
        big_endian: sample.big_endian,
        nx: grid.nx,
        ny: grid.ny,
    };
    // Cube data files carry the fixed sentinel; no per-series convention.
    let missing = MissingValues::primary(MISSING_SENTINEL);
    fill_values(
        &mut src,
        grid.nx,
        grid.ny,
        ctx.proj.is_cyclic(),
        &ctx.points,
        series.element,
        &sample.wx_table,
        &missing,
        query,
    )
}

/// FILL: one ProbeValue per resolved point.
#[allow(clippy::too_many_arguments)]
fn fill_values(
    src: &mut dyn CellSource,
    nx: u32,
    ny: u32,
    cyclic: bool,
    points: &[(f64, f64)],
    element: ElementId,
    wx_table: &[String],
    missing: &MissingValues,
    query: &ProbeQuery,
) -> ProbeResult<Vec<ProbeValue>> {
    let mut values = Vec::with_capacity(points.len());
    if element.is_coded() {
        let decoder = if element == ElementId::Hazards {
            CodedDecoder::hazard(query.table_version)
        } else {
            CodedDecoder::weather(query.table_version)
        };
        for &(x, y) in points {
            values.push(coded_value(src, nx, ny, x, y, wx_table, missing, &decoder)?);
        }
    } else {
        let opts = SampleOptions {
            method: query.method,
            missing: *missing,
            average_partial: query.average_partial,
        };
        for &(x, y) in points {
            values.push(ProbeValue::from(sample(src, nx, ny, cyclic, x, y, &opts)?));
        }
    }
    Ok(values)
}

/// A coded cell holds a table index, never a blendable quantity, so the
/// probe always snaps to the nearest cell.
#[allow(clippy::too_many_arguments)]
fn coded_value(
    src: &mut dyn CellSource,
    nx: u32,
    ny: u32,
    x: f64,
    y: f64,
    wx_table: &[String],
    missing: &MissingValues,
    decoder: &CodedDecoder,
) -> ProbeResult<ProbeValue> {
    let col = x.round();
    let row = y.round();
    if col < 1.0 || col > nx as f64 || row < 1.0 || row > ny as f64 {
        return Ok(ProbeValue::Missing);
    }
    let code = src.cell(col as u32, row as u32)?;
    if missing.is_missing(code) {
        return Ok(ProbeValue::Missing);
    }
    let idx = code.round() as i64;
    let Some(raw) = usize::try_from(idx).ok().and_then(|i| wx_table.get(i)) else {
        debug!(code, table_len = wx_table.len(), "coded cell outside its table");
        return Ok(ProbeValue::Undecodable {
            code,
            raw: format!("<table index {}>", idx),
        });
    };
    match decoder.decode(raw) {
        Ok(segments) => Ok(ProbeValue::Coded {
            code,
            text: decoder.english(&segments),
        }),
        Err(e) => {
            debug!(raw = %raw, error = %e, "coded cell failed to decode");
            Ok(ProbeValue::Undecodable {
                code,
                raw: raw.clone(),
            })
        }
    }
}

/// A source that carries no unit string inherits the catalog's.
fn unit_or_default(unit: &str, element: ElementId) -> String {
    if unit.is_empty() {
        unit_for(element).unwrap_or("").to_string()
    } else {
        unit.to_string()
    }
}

fn probe_stream(
    mut stream: Box<dyn MessageStream>,
    query: &ProbeQuery,
    filter: &BTreeSet<ElementId>,
    seen: &mut BTreeSet<MatchKey>,
    records: &mut Vec<MatchRecord>,
) -> ProbeResult<()> {
    let match_all = filter.contains(&ElementId::MatchAll);

    while let Some(msg) = stream.next_message()? {
        let element = resolve(&msg.fingerprint);
        if element == ElementId::Undefined {
            trace!("message fingerprint unresolved, skipping");
            continue;
        }
        if !match_all && !filter.contains(&element) {
            continue;
        }
        if !query.window.contains(msg.valid_time) {
            continue;
        }
        msg.grid.validate().map_err(|reason| ProbeError::InvalidGrid {
            path: "<stream>".to_string(),
            index: 0,
            reason,
        })?;

        let sector = msg.grid.sector();
        let key = MatchKey::new(sector, msg.ref_time, msg.valid_time, element);
        if !seen.insert(key) {
            trace!(element = ?element, valid = %msg.valid_time, "duplicate match skipped");
            continue;
        }

        let proj = msg.grid.projection()?;
        let points = resolve_points(&query.points, proj.as_ref(), msg.grid.nx, msg.grid.ny);
        let mut src = SliceSource::new(&msg.values, msg.grid.nx, msg.grid.ny, msg.top_first);
        let values = fill_values(
            &mut src,
            msg.grid.nx,
            msg.grid.ny,
            proj.is_cyclic(),
            &points,
            element,
            &msg.wx_table,
            &msg.missing,
            query,
        )?;
        records.push(MatchRecord {
            element,
            name: name_for(element, NameConvention::InternalShort)
                .unwrap_or("unknown")
                .to_string(),
            ref_time: msg.ref_time,
            valid_time: msg.valid_time,
            sector: sector.to_string(),
            unit: unit_or_default(&msg.unit, element),
            values,
        });
    }
    Ok(())
}
