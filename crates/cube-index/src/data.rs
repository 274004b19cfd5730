//! Random-access cell reads from flat data files.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use lru::LruCache;
use tracing::{debug, trace};

use probe_common::{ProbeError, ProbeResult, MISSING_SENTINEL};

/// Row-storage order of a grid's cells in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Row 1 is the geographic bottom; rows are stored south to north.
    BottomFirst,
    /// Row 1 is the geographic top; rows are stored north to south.
    TopFirst,
}

impl ScanMode {
    pub fn from_flag(flag: u8) -> Self {
        if flag != 0 {
            Self::TopFirst
        } else {
            Self::BottomFirst
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            Self::BottomFirst => 0,
            Self::TopFirst => 1,
        }
    }
}

/// Read one cell value from an open data file.
///
/// `col`/`row` are 1-based. Out-of-range coordinates yield the missing
/// sentinel without any seek. The linear cell index depends on scan mode:
/// top-first grids store row `Ny` (the south edge) last.
pub fn read_cell(
    file: &mut File,
    path: &str,
    data_offset: i64,
    scan_mode: ScanMode,
    big_endian: bool,
    col: u32,
    row: u32,
    nx: u32,
    ny: u32,
) -> ProbeResult<f32> {
    if col < 1 || col > nx || row < 1 || row > ny {
        return Ok(MISSING_SENTINEL);
    }
    let linear = match scan_mode {
        ScanMode::TopFirst => (col - 1) as u64 + (ny - 1 - (row - 1)) as u64 * nx as u64,
        ScanMode::BottomFirst => (col - 1) as u64 + (row - 1) as u64 * nx as u64,
    };
    let base = u64::try_from(data_offset)
        .map_err(|_| ProbeError::format(path, 0, format!("negative data offset {}", data_offset)))?;
    let byte_offset = base + linear * 4;
    trace!(path, col, row, byte_offset, "cell read");

    file.seek(SeekFrom::Start(byte_offset))
        .map_err(|e| ProbeError::io(path, e))?;
    let mut raw = [0u8; 4];
    file.read_exact(&mut raw).map_err(|e| ProbeError::io(path, e))?;
    Ok(if big_endian {
        f32::from_be_bytes(raw)
    } else {
        f32::from_le_bytes(raw)
    })
}

/// Per-query cache of open data-file handles.
///
/// A probe touches the same data file for every point of every time
/// sample of a series; reopening per read would dominate the query. The
/// cache is owned by exactly one query (seek+read is not atomic, handles
/// must not be shared) and must be closed on every exit path.
pub struct DataFileCache {
    /// Directory data-file names resolve against (the index file's).
    base_dir: PathBuf,
    handles: LruCache<PathBuf, File>,
    opens: u64,
}

impl DataFileCache {
    /// Queries touch one or two data files at a time; a handful of slots
    /// covers interleaved series without growing per-query state.
    const CAPACITY: usize = 4;

    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            handles: LruCache::new(NonZeroUsize::new(Self::CAPACITY).unwrap()),
            opens: 0,
        }
    }

    /// Resolve a data-file name to its on-disk path.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base_dir.join(p)
        }
    }

    /// Fetch (opening lazily) the handle for a data file.
    pub fn file(&mut self, name: &str) -> ProbeResult<&mut File> {
        let path = self.resolve(name);
        if !self.handles.contains(&path) {
            let file = File::open(&path)
                .map_err(|e| ProbeError::io(path.display().to_string(), e))?;
            self.opens += 1;
            debug!(path = %path.display(), "opened data file");
            self.handles.put(path.clone(), file);
        }
        Ok(self.handles.get_mut(&path).unwrap())
    }

    /// Number of distinct opens so far (reuse diagnostics).
    pub fn open_count(&self) -> u64 {
        self.opens
    }

    /// Drop every cached handle. Called on query teardown, including
    /// error paths.
    pub fn close_all(&mut self) {
        self.handles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_grid(dir: &Path, name: &str, values: &[f32], big_endian: bool) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        for v in values {
            let bytes = if big_endian {
                v.to_be_bytes()
            } else {
                v.to_le_bytes()
            };
            f.write_all(&bytes).unwrap();
        }
        path
    }

    #[test]
    fn reads_cells_in_both_scan_orders() {
        let dir = tempfile::tempdir().unwrap();
        // 3x2 grid, stored row-major: 1 2 3 / 4 5 6
        let values = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        write_grid(dir.path(), "g.dat", &values, false);

        let mut cache = DataFileCache::new(dir.path());
        let file = cache.file("g.dat").unwrap();

        // Bottom-first: row 1 is the first stored row.
        let v = read_cell(file, "g.dat", 0, ScanMode::BottomFirst, false, 2, 1, 3, 2).unwrap();
        assert_eq!(v, 2.0);
        let v = read_cell(file, "g.dat", 0, ScanMode::BottomFirst, false, 2, 2, 3, 2).unwrap();
        assert_eq!(v, 5.0);

        // Top-first: row 1 is the last stored row.
        let v = read_cell(file, "g.dat", 0, ScanMode::TopFirst, false, 2, 1, 3, 2).unwrap();
        assert_eq!(v, 5.0);
        let v = read_cell(file, "g.dat", 0, ScanMode::TopFirst, false, 2, 2, 3, 2).unwrap();
        assert_eq!(v, 2.0);
    }

    #[test]
    fn big_endian_and_nonzero_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("be.dat");
        let mut f = File::create(&path).unwrap();
        f.write_all(&[0xAA; 8]).unwrap(); // 8-byte prefix before the grid
        for v in [10.0f32, 20.0, 30.0, 40.0] {
            f.write_all(&v.to_be_bytes()).unwrap();
        }
        drop(f);

        let mut cache = DataFileCache::new(dir.path());
        let file = cache.file("be.dat").unwrap();
        let v = read_cell(file, "be.dat", 8, ScanMode::BottomFirst, true, 2, 2, 2, 2).unwrap();
        assert_eq!(v, 40.0);
    }

    #[test]
    fn out_of_range_yields_sentinel_without_io() {
        let dir = tempfile::tempdir().unwrap();
        write_grid(dir.path(), "g.dat", &[1.0], false);
        let mut cache = DataFileCache::new(dir.path());
        let file = cache.file("g.dat").unwrap();

        for (col, row) in [(0, 1), (1, 0), (2, 1), (1, 2)] {
            let v = read_cell(file, "g.dat", 0, ScanMode::BottomFirst, false, col, row, 1, 1)
                .unwrap();
            assert_eq!(v, MISSING_SENTINEL, "({col},{row})");
        }
    }

    #[test]
    fn negative_offset_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        write_grid(dir.path(), "g.dat", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], false);
        let mut cache = DataFileCache::new(dir.path());
        let file = cache.file("g.dat").unwrap();

        let err = read_cell(file, "g.dat", -8, ScanMode::BottomFirst, false, 3, 1, 3, 2)
            .unwrap_err();
        assert!(matches!(err, ProbeError::Format { .. }));
    }

    #[test]
    fn handle_cache_reuses_open_files() {
        let dir = tempfile::tempdir().unwrap();
        write_grid(dir.path(), "a.dat", &[1.0], false);
        write_grid(dir.path(), "b.dat", &[2.0], false);

        let mut cache = DataFileCache::new(dir.path());
        cache.file("a.dat").unwrap();
        cache.file("a.dat").unwrap();
        cache.file("b.dat").unwrap();
        cache.file("a.dat").unwrap();
        assert_eq!(cache.open_count(), 2);

        cache.close_all();
        cache.file("a.dat").unwrap();
        assert_eq!(cache.open_count(), 3);
    }

    #[test]
    fn missing_data_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DataFileCache::new(dir.path());
        let err = cache.file("nope.dat").unwrap_err();
        assert!(!err.is_fatal_to_query());
    }
}
