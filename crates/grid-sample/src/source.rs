use probe_common::ProbeResult;

/// Random access to the cells of one 2-D field.
///
/// Coordinates are 1-based; `(1, 1)` is the south-west cell regardless of
/// how the backing storage orders its rows. Implementations are free to
/// read lazily (seeking inside a data file per call) or to serve from a
/// decoded in-memory grid.
pub trait CellSource {
    /// Value at `(col, row)`. Callers only pass coordinates inside
    /// `1..=nx` x `1..=ny`; behaviour outside that range is unspecified.
    fn cell(&mut self, col: u32, row: u32) -> ProbeResult<f32>;
}

/// A fully decoded grid held in memory as one flat slice.
pub struct SliceSource<'a> {
    data: &'a [f32],
    nx: u32,
    /// True when `data` stores the northernmost row first.
    top_first: bool,
    ny: u32,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [f32], nx: u32, ny: u32, top_first: bool) -> Self {
        debug_assert_eq!(data.len(), (nx as usize) * (ny as usize));
        Self { data, nx, ny, top_first }
    }
}

impl CellSource for SliceSource<'_> {
    fn cell(&mut self, col: u32, row: u32) -> ProbeResult<f32> {
        let row0 = if self.top_first { self.ny - row } else { row - 1 };
        let idx = (col - 1) as usize + row0 as usize * self.nx as usize;
        Ok(self.data[idx])
    }
}
