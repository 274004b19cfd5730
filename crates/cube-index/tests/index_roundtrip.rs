//! Open synthetic cubes and read cells back through the index.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use cube_index::{read_cell, CubeIndex, DataFileCache, ScanMode};
use element_catalog::ElementId;
use test_utils::{gradient_grid, CubeBuilder, ElementBuilder, GridSpec, SampleSpec};

fn t(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn small_cube(dir: &std::path::Path) -> std::path::PathBuf {
    CubeBuilder::new()
        .grid(GridSpec::geographic(3, 2, 30.0, 260.0, 0.5, 0.5))
        .element(
            ElementBuilder::new("maxt", "K")
                .ref_time(t(1_700_000_000))
                .sample(SampleSpec::new(t(1_700_003_600), "d.dat", gradient_grid(3, 2)))
                .sample(SampleSpec::new(t(1_700_007_200), "d.dat", gradient_grid(3, 2))),
        )
        .element(
            ElementBuilder::new("mint", "K")
                .ref_time(t(1_700_000_000))
                .sample(SampleSpec::new(t(1_700_003_600), "d.dat", gradient_grid(3, 2))),
        )
        .write(dir, "cube.ind")
        .unwrap()
}

#[test]
fn opens_and_resolves_elements() {
    let dir = tempfile::tempdir().unwrap();
    let index = CubeIndex::open(small_cube(dir.path())).unwrap();

    assert_eq!(index.grids().len(), 1);
    assert_eq!(index.series().len(), 2);
    assert_eq!(index.series()[0].element, ElementId::MaxTemp);
    assert_eq!(index.series()[1].element, ElementId::MinTemp);
    assert_eq!(index.series()[0].samples.len(), 2);

    let grid = index.grid_for(&index.series()[0]);
    assert_eq!((grid.nx, grid.ny), (3, 2));
}

#[test]
fn negative_sample_offset_rejected_at_parse() {
    let dir = tempfile::tempdir().unwrap();
    let mut buf = std::fs::read(small_cube(dir.path())).unwrap();
    // The int32 data offset sits right after the data-file name in each
    // time-sample record; corrupt the first one.
    let name_at = buf.windows(5).position(|w| w == b"d.dat").unwrap();
    buf[name_at + 5..name_at + 9].copy_from_slice(&(-8i32).to_le_bytes());

    let err = CubeIndex::parse(&buf, "cube.ind").unwrap_err();
    assert!(matches!(err, probe_common::ProbeError::Format { .. }));
}

#[test]
fn reopen_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = small_cube(dir.path());
    let a = CubeIndex::open(&path).unwrap();
    let b = CubeIndex::open(&path).unwrap();
    assert_eq!(a.series().len(), b.series().len());
    assert_eq!(a.grids().len(), b.grids().len());
    assert_eq!(
        a.series()[0].samples[0].data_offset,
        b.series()[0].samples[0].data_offset
    );
}

#[test]
fn filter_selects_series() {
    let dir = tempfile::tempdir().unwrap();
    let index = CubeIndex::open(small_cube(dir.path())).unwrap();

    let only_max: BTreeSet<ElementId> = [ElementId::MaxTemp].into();
    let hits: Vec<_> = index.iter_time_series(&only_max).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "maxt");

    let all: BTreeSet<ElementId> = [ElementId::MatchAll].into();
    assert_eq!(index.iter_time_series(&all).count(), 2);
}

#[test]
fn reads_cells_through_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let index = CubeIndex::open(small_cube(dir.path())).unwrap();
    let mut cache = DataFileCache::new(dir.path());

    // Second sample of maxt sits past the first grid in the shared file.
    let sample = &index.series()[0].samples[1];
    assert_eq!(sample.data_offset, 6 * 4);

    let file = cache.file(&sample.data_file).unwrap();
    let v = read_cell(
        file,
        &sample.data_file,
        sample.data_offset,
        sample.scan_mode,
        sample.big_endian,
        2,
        2,
        3,
        2,
    )
    .unwrap();
    assert_eq!(v, 2002.0); // gradient encodes (col, row)

    cache.close_all();
}

#[test]
fn top_first_sample_flips_row_addressing() {
    let dir = tempfile::tempdir().unwrap();
    // North row stored first: file order is row 2 then row 1.
    let values = vec![14.0, 16.0, 10.0, 12.0];
    let path = CubeBuilder::new()
        .grid(GridSpec::geographic(2, 2, 30.0, 260.0, 0.5, 0.5))
        .element(
            ElementBuilder::new("maxt", "K")
                .sample(SampleSpec::new(t(0), "d.dat", values).top_first()),
        )
        .write(dir.path(), "cube.ind")
        .unwrap();
    let index = CubeIndex::open(path).unwrap();
    let sample = &index.series()[0].samples[0];
    assert_eq!(sample.scan_mode, ScanMode::TopFirst);

    let mut cache = DataFileCache::new(dir.path());
    let file = cache.file(&sample.data_file).unwrap();
    let v = read_cell(file, "d.dat", 0, sample.scan_mode, false, 1, 1, 2, 2).unwrap();
    assert_eq!(v, 10.0); // (1,1) is still the south-west cell
    let v = read_cell(file, "d.dat", 0, sample.scan_mode, false, 2, 2, 2, 2).unwrap();
    assert_eq!(v, 16.0);
}

#[test]
fn wx_table_rides_along_with_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = CubeBuilder::new()
        .grid(GridSpec::geographic(2, 2, 30.0, 260.0, 0.5, 0.5))
        .element(
            ElementBuilder::new("wx", "wx")
                .sample(
                    SampleSpec::new(t(0), "wx.dat", vec![0.0, 1.0, 0.0, 1.0])
                        .wx_table(&["<None>", "HU.W"]),
                ),
        )
        .write(dir.path(), "cube.ind")
        .unwrap();
    let index = CubeIndex::open(path).unwrap();
    let sample = &index.series()[0].samples[0];
    assert_eq!(sample.wx_table, vec!["<None>".to_string(), "HU.W".to_string()]);
}
