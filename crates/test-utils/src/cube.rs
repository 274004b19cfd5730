//! Synthetic cube writer.
//!
//! Emits the same on-disk layout the cube reader parses: a little-endian
//! index file (magic, grid records, element blocks with length-prefixed
//! time samples) plus flat data files of 4-byte floats. The layout
//! constants are duplicated here rather than imported so the writer stays
//! independent of the reader it is used to test.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

const HEADLEN: usize = 32;
const GDSLEN: usize = 84;
const MAGIC: &[u8; 4] = b"CUBX";
const FORMAT_VERSION: u16 = 2;

/// One grid-definition record.
#[derive(Debug, Clone)]
pub struct GridSpec {
    pub proj_code: u8,
    pub nx: u32,
    pub ny: u32,
    pub lat1: f64,
    pub lon1: f64,
    pub orient_lon: f64,
    pub dx: f64,
    pub dy: f64,
    pub latin1: f64,
    pub latin2: f64,
    pub num_values: u32,
}

impl GridSpec {
    /// Regular lat/lon grid; `dlat`/`dlon` in degrees.
    pub fn geographic(nx: u32, ny: u32, lat1: f64, lon1: f64, dlat: f64, dlon: f64) -> Self {
        Self {
            proj_code: 1,
            nx,
            ny,
            lat1,
            lon1,
            orient_lon: 0.0,
            dx: dlon,
            dy: dlat,
            latin1: 0.0,
            latin2: 0.0,
            num_values: nx * ny,
        }
    }

    /// The 5 km CONUS Lambert grid most NDFD-style cubes carry.
    pub fn lambert_conus() -> Self {
        Self {
            proj_code: 3,
            nx: 1073,
            ny: 689,
            lat1: 20.192,
            lon1: -121.554,
            orient_lon: -95.0,
            dx: 5079.406,
            dy: 5079.406,
            latin1: 25.0,
            latin2: 25.0,
            num_values: 1073 * 689,
        }
    }
}

/// One time sample: a valid time plus the grid values it stores.
///
/// `values` land in the data file verbatim, in the byte order and row
/// order the flags declare; the builder only records where they went.
#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub valid_time: DateTime<Utc>,
    pub data_file: String,
    pub values: Vec<f32>,
    pub big_endian: bool,
    pub top_first: bool,
    pub wx_table: Vec<String>,
}

impl SampleSpec {
    pub fn new(valid_time: DateTime<Utc>, data_file: &str, values: Vec<f32>) -> Self {
        Self {
            valid_time,
            data_file: data_file.to_string(),
            values,
            big_endian: false,
            top_first: false,
            wx_table: Vec::new(),
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    /// Declare the values as stored north row first.
    pub fn top_first(mut self) -> Self {
        self.top_first = true;
        self
    }

    pub fn wx_table(mut self, entries: &[&str]) -> Self {
        self.wx_table = entries.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// One element block under construction.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    name: String,
    ref_time: DateTime<Utc>,
    unit: String,
    comment: String,
    gds_index: u16,
    center: u16,
    sub_center: u16,
    samples: Vec<SampleSpec>,
}

impl ElementBuilder {
    pub fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            ref_time: DateTime::<Utc>::UNIX_EPOCH,
            unit: unit.to_string(),
            comment: String::new(),
            gds_index: 1,
            center: 8,
            sub_center: 0,
            samples: Vec::new(),
        }
    }

    pub fn ref_time(mut self, t: DateTime<Utc>) -> Self {
        self.ref_time = t;
        self
    }

    pub fn comment(mut self, c: &str) -> Self {
        self.comment = c.to_string();
        self
    }

    /// 1-based grid-record reference; defaults to the first grid.
    pub fn gds_index(mut self, i: u16) -> Self {
        self.gds_index = i;
        self
    }

    pub fn center(mut self, center: u16, sub_center: u16) -> Self {
        self.center = center;
        self.sub_center = sub_center;
        self
    }

    pub fn sample(mut self, s: SampleSpec) -> Self {
        self.samples.push(s);
        self
    }
}

/// Builds one cube: grids, elements, and the data files behind them.
#[derive(Debug, Default)]
pub struct CubeBuilder {
    grids: Vec<GridSpec>,
    elements: Vec<ElementBuilder>,
}

fn push_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u16).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

fn push_time(buf: &mut Vec<u8>, t: DateTime<Utc>) {
    buf.extend_from_slice(&(t.timestamp() as f64).to_le_bytes());
}

impl CubeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(mut self, g: GridSpec) -> Self {
        self.grids.push(g);
        self
    }

    pub fn element(mut self, e: ElementBuilder) -> Self {
        self.elements.push(e);
        self
    }

    /// Write the index as `index_name` under `dir`, plus every referenced
    /// data file, and return the index path. Samples naming the same data
    /// file are appended in declaration order, so later samples get
    /// nonzero offsets.
    pub fn write(self, dir: &Path, index_name: &str) -> io::Result<PathBuf> {
        let mut data_files: BTreeMap<String, Vec<u8>> = BTreeMap::new();

        let mut index = Vec::new();
        index.extend_from_slice(MAGIC);
        index.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        index.resize(HEADLEN, 0);

        index.extend_from_slice(&(self.grids.len() as u16).to_le_bytes());
        for g in &self.grids {
            let start = index.len();
            index.push(g.proj_code);
            index.push(0);
            index.extend_from_slice(&g.nx.to_le_bytes());
            index.extend_from_slice(&g.ny.to_le_bytes());
            for v in [g.lat1, g.lon1, g.orient_lon, g.dx, g.dy, g.latin1, g.latin2] {
                index.extend_from_slice(&v.to_le_bytes());
            }
            index.extend_from_slice(&g.num_values.to_le_bytes());
            index.resize(start + GDSLEN, 0);
        }

        index.extend_from_slice(&(self.elements.len() as u16).to_le_bytes());
        for e in &self.elements {
            let mut block = Vec::new();
            push_string(&mut block, &e.name);
            push_time(&mut block, e.ref_time);
            push_string(&mut block, &e.unit);
            push_string(&mut block, &e.comment);
            block.extend_from_slice(&e.gds_index.to_le_bytes());
            block.extend_from_slice(&e.center.to_le_bytes());
            block.extend_from_slice(&e.sub_center.to_le_bytes());
            block.extend_from_slice(&(e.samples.len() as u16).to_le_bytes());

            for s in &e.samples {
                let data = data_files.entry(s.data_file.clone()).or_default();
                let offset = data.len() as i32;
                for v in &s.values {
                    let raw = if s.big_endian {
                        v.to_be_bytes()
                    } else {
                        v.to_le_bytes()
                    };
                    data.extend_from_slice(&raw);
                }

                let mut rec = Vec::new();
                push_time(&mut rec, s.valid_time);
                push_string(&mut rec, &s.data_file);
                rec.extend_from_slice(&offset.to_le_bytes());
                rec.push(u8::from(s.big_endian));
                rec.push(u8::from(s.top_first));
                rec.extend_from_slice(&(s.wx_table.len() as u16).to_le_bytes());
                for entry in &s.wx_table {
                    push_string(&mut rec, entry);
                }

                block.extend_from_slice(&((rec.len() + 2) as u16).to_le_bytes());
                block.extend_from_slice(&rec);
            }

            index.extend_from_slice(&((block.len() + 4) as i32).to_le_bytes());
            index.extend_from_slice(&block);
        }

        for (name, bytes) in &data_files {
            std::fs::write(dir.join(name), bytes)?;
        }
        let index_path = dir.join(index_name);
        std::fs::write(&index_path, &index)?;
        Ok(index_path)
    }
}
