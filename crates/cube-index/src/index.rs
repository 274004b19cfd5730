//! The in-memory cube index directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, warn};

use element_catalog::{lookup_by_name, ElementId, NameConvention};
use probe_common::{ProbeError, ProbeResult};

use crate::cursor::Cursor;
use crate::data::ScanMode;
use crate::grid::GridDefinition;
use crate::{FORMAT_VERSION, HEADLEN, MAGIC};

/// One time sample of one element: where its grid values live on disk.
#[derive(Debug, Clone)]
pub struct TimeSample {
    pub valid_time: DateTime<Utc>,
    /// Data file name, resolved relative to the index file's directory.
    pub data_file: String,
    /// Byte offset of the first cell value inside the data file.
    pub data_offset: i64,
    pub big_endian: bool,
    pub scan_mode: ScanMode,
    /// Coded-string lookup table; empty for plain numeric elements.
    pub wx_table: Vec<String>,
}

/// One element's time series: identity, metadata, and its samples in
/// non-decreasing valid-time order.
#[derive(Debug, Clone)]
pub struct ElementTimeSeries {
    pub name: String,
    /// Resolved from `name` at parse time; `Undefined` if unknown.
    pub element: ElementId,
    pub ref_time: DateTime<Utc>,
    pub unit: String,
    pub comment: String,
    /// 1-based reference into [`CubeIndex::grids`].
    pub gds_index: u16,
    pub center: u16,
    pub sub_center: u16,
    pub samples: Vec<TimeSample>,
}

/// A fully parsed cube index: immutable once opened, safe to share
/// read-only across query threads.
#[derive(Debug)]
pub struct CubeIndex {
    path: PathBuf,
    grids: Vec<GridDefinition>,
    series: Vec<ElementTimeSeries>,
}

fn epoch_to_utc(secs: f64, path: &str, offset: usize) -> ProbeResult<DateTime<Utc>> {
    if !secs.is_finite() {
        return Err(ProbeError::format(path, offset, "non-finite timestamp"));
    }
    Utc.timestamp_opt(secs as i64, 0)
        .single()
        .ok_or_else(|| ProbeError::format(path, offset, format!("timestamp {} out of range", secs)))
}

impl CubeIndex {
    /// Read and parse an index file.
    pub fn open(path: impl AsRef<Path>) -> ProbeResult<Self> {
        let path = path.as_ref();
        let display_path = path.display().to_string();
        let buf = std::fs::read(path).map_err(|e| ProbeError::io(&display_path, e))?;
        let index = Self::parse(&buf, &display_path)?;
        debug!(
            path = %display_path,
            grids = index.grids.len(),
            series = index.series.len(),
            "opened cube index"
        );
        Ok(Self {
            path: path.to_path_buf(),
            ..index
        })
    }

    /// Parse an index image. `display` is used for error context only.
    pub fn parse(buf: &[u8], display: &str) -> ProbeResult<Self> {
        let mut cur = Cursor::new(buf, display);

        // Preamble: magic and format version up front, rest opaque.
        let magic = cur.read_bytes(4)?;
        if magic != MAGIC {
            return Err(ProbeError::format(display, 0, "bad magic, not a cube index"));
        }
        let version = cur.read_u16()?;
        if version != FORMAT_VERSION {
            return Err(ProbeError::format(
                display,
                4,
                format!("unsupported format version {}", version),
            ));
        }
        cur.seek_to(HEADLEN)?;

        let num_gds = cur.read_u16()?;
        let mut grids = Vec::with_capacity(num_gds as usize);
        for i in 0..num_gds {
            grids.push(GridDefinition::parse(&mut cur, display, i as usize + 1)?);
        }

        let num_super = cur.read_u16()?;
        let mut series = Vec::with_capacity(num_super as usize);
        for _ in 0..num_super {
            series.push(Self::parse_series(&mut cur, display, &grids)?);
        }

        if !cur.at_end() {
            return Err(ProbeError::format(
                display,
                cur.position(),
                format!("{} trailing bytes after last element block", cur.remaining()),
            ));
        }

        Ok(Self {
            path: PathBuf::from(display),
            grids,
            series,
        })
    }

    fn parse_series(
        cur: &mut Cursor<'_>,
        display: &str,
        grids: &[GridDefinition],
    ) -> ProbeResult<ElementTimeSeries> {
        let block_start = cur.position();
        let block_len = cur.read_i32()?;
        if block_len < 4 {
            return Err(ProbeError::format(
                display,
                block_start,
                format!("element block length {} is impossible", block_len),
            ));
        }
        let block_end = block_start + block_len as usize;

        let name = cur.read_string()?;
        let rt_offset = cur.position();
        let ref_time = epoch_to_utc(cur.read_f64()?, display, rt_offset)?;
        let unit = cur.read_string()?;
        let comment = cur.read_string()?;
        let gds_index = cur.read_u16()?;
        if gds_index == 0 || gds_index as usize > grids.len() {
            return Err(ProbeError::format(
                display,
                block_start,
                format!(
                    "element {:?} references grid {} of {}",
                    name,
                    gds_index,
                    grids.len()
                ),
            ));
        }
        let center = cur.read_u16()?;
        let sub_center = cur.read_u16()?;
        let num_pds = cur.read_u16()?;

        let mut samples = Vec::with_capacity(num_pds as usize);
        for _ in 0..num_pds {
            samples.push(Self::parse_sample(cur, display)?);
        }

        if cur.position() != block_end {
            return Err(ProbeError::format(
                display,
                cur.position(),
                format!(
                    "element block for {:?} declared {} bytes but parsed {}",
                    name,
                    block_len,
                    cur.position() - block_start
                ),
            ));
        }

        // Writers emit samples in non-decreasing valid-time order; probe
        // scans early-exit on that assumption.
        if samples.windows(2).any(|w| w[1].valid_time < w[0].valid_time) {
            warn!(element = %name, "time samples out of order; early-exit scans may miss matches");
        }

        let element = resolve_name(&name);
        Ok(ElementTimeSeries {
            name,
            element,
            ref_time,
            unit,
            comment,
            gds_index,
            center,
            sub_center,
            samples,
        })
    }

    fn parse_sample(cur: &mut Cursor<'_>, display: &str) -> ProbeResult<TimeSample> {
        let rec_start = cur.position();
        let rec_len = cur.read_u16()?;
        if rec_len < 2 {
            return Err(ProbeError::format(
                display,
                rec_start,
                format!("time-sample length {} is impossible", rec_len),
            ));
        }
        let rec_end = rec_start + rec_len as usize;

        let vt_offset = cur.position();
        let valid_time = epoch_to_utc(cur.read_f64()?, display, vt_offset)?;
        let data_file = cur.read_string()?;
        let off_pos = cur.position();
        let data_offset = i64::from(cur.read_i32()?);
        if data_offset < 0 {
            return Err(ProbeError::format(
                display,
                off_pos,
                format!("negative data offset {}", data_offset),
            ));
        }
        let big_endian = cur.read_u8()? != 0;
        let scan_mode = ScanMode::from_flag(cur.read_u8()?);
        let num_entries = cur.read_u16()?;
        let mut wx_table = Vec::with_capacity(num_entries as usize);
        for _ in 0..num_entries {
            wx_table.push(cur.read_string()?);
        }

        if cur.position() != rec_end {
            return Err(ProbeError::format(
                display,
                cur.position(),
                format!(
                    "time sample declared {} bytes but parsed {}",
                    rec_len,
                    cur.position() - rec_start
                ),
            ));
        }

        Ok(TimeSample {
            valid_time,
            data_file,
            data_offset,
            big_endian,
            scan_mode,
            wx_table,
        })
    }

    /// The index file's path (data file names resolve relative to its
    /// directory).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn grids(&self) -> &[GridDefinition] {
        &self.grids
    }

    /// Grid definition for a series' 1-based reference.
    pub fn grid_for(&self, series: &ElementTimeSeries) -> &GridDefinition {
        // gds_index was range-checked at parse time.
        &self.grids[series.gds_index as usize - 1]
    }

    pub fn series(&self) -> &[ElementTimeSeries] {
        &self.series
    }

    /// Iterate series whose element is in `filter`. A filter containing
    /// [`ElementId::MatchAll`] accepts every resolvable series.
    pub fn iter_time_series<'a>(
        &'a self,
        filter: &'a BTreeSet<ElementId>,
    ) -> impl Iterator<Item = &'a ElementTimeSeries> {
        let match_all = filter.contains(&ElementId::MatchAll);
        self.series.iter().filter(move |s| {
            if s.element == ElementId::Undefined {
                return false;
            }
            match_all || filter.contains(&s.element)
        })
    }
}

/// Resolve a series' stored element name against the catalog, trying each
/// naming convention.
fn resolve_name(name: &str) -> ElementId {
    for convention in [
        NameConvention::FileAbbreviated,
        NameConvention::InternalShort,
        NameConvention::FileStandard,
    ] {
        let id = lookup_by_name(name, convention);
        if id != ElementId::Undefined {
            return id;
        }
    }
    ElementId::Undefined
}
