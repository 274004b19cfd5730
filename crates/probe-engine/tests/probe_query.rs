//! End-to-end probe queries against synthetic cubes.

use chrono::{DateTime, TimeZone, Utc};

use element_catalog::ElementId;
use grid_sample::InterpMethod;
use probe_common::{ProbePoint, ProbeValue, TimeWindow};
use probe_engine::{run, PointSet, ProbeInput, ProbeQuery};
use test_utils::{constant_grid, gradient_grid, CubeBuilder, ElementBuilder, GridSpec, SampleSpec};

fn t(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 5, 25, h, 0, 0).unwrap()
}

/// 4x4 one-degree geographic grid anchored at 30N 260E.
fn grid() -> GridSpec {
    GridSpec::geographic(4, 4, 30.0, 260.0, 1.0, 1.0)
}

fn maxt_cube(dir: &std::path::Path, name: &str) -> ProbeInput {
    let path = CubeBuilder::new()
        .grid(grid())
        .element(
            ElementBuilder::new("maxt", "F")
                .ref_time(t(0))
                .sample(SampleSpec::new(t(1), "maxt.dat", gradient_grid(4, 4)))
                .sample(SampleSpec::new(t(6), "maxt.dat", gradient_grid(4, 4)))
                .sample(SampleSpec::new(t(12), "maxt.dat", gradient_grid(4, 4))),
        )
        .write(dir, name)
        .unwrap();
    ProbeInput::Cube(path)
}

fn query(points: PointSet) -> ProbeQuery {
    let mut q = ProbeQuery::new(points);
    q.elements = vec![ElementId::MatchAll];
    q
}

#[test]
fn bilinear_probe_at_geographic_point() {
    let dir = tempfile::tempdir().unwrap();
    // 261.5E 31.5N lands at grid (2.5, 2.5); gradient corners are
    // 2002/3002/2003/3003, so the blend is their mean.
    let q = query(PointSet::List(vec![ProbePoint::geographic(31.5, 261.5)]));
    let records = run(vec![maxt_cube(dir.path(), "a.ind")], &q).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].element, ElementId::MaxTemp);
    assert_eq!(records[0].unit, "F");
    assert_eq!(records[0].values, vec![ProbeValue::Number(2502.5)]);
}

#[test]
fn cell_points_bypass_the_projection() {
    let dir = tempfile::tempdir().unwrap();
    let mut q = query(PointSet::List(vec![ProbePoint::cell(3.0, 2.0)]));
    q.method = InterpMethod::Nearest;
    let records = run(vec![maxt_cube(dir.path(), "a.ind")], &q).unwrap();
    assert_eq!(records[0].values, vec![ProbeValue::Number(3002.0)]);
}

#[test]
fn all_cells_probe_covers_the_grid() {
    let dir = tempfile::tempdir().unwrap();
    let mut q = query(PointSet::AllCells);
    q.window = TimeWindow::half_open(t(1), t(2));
    let records = run(vec![maxt_cube(dir.path(), "a.ind")], &q).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].values.len(), 16);
    // Storage order starts at the south-west cell.
    assert_eq!(records[0].values[0], ProbeValue::Number(1001.0));
}

#[test]
fn half_open_window_excludes_exact_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    q.window = TimeWindow::half_open(t(1), t(6));
    let records = run(vec![maxt_cube(dir.path(), "a.ind")], &q).unwrap();

    // Samples at 01:00, 06:00, 12:00; only 01:00 survives.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].valid_time, t(1));
}

#[test]
fn duplicate_matches_across_inputs_collapse() {
    let dir = tempfile::tempdir().unwrap();
    let a = maxt_cube(dir.path(), "a.ind");
    let b = maxt_cube(dir.path(), "b.ind");

    let q = query(PointSet::List(vec![ProbePoint::cell(2.0, 2.0)]));
    let records = run(vec![a, b], &q).unwrap();

    // Same (sector, refTime, validTime, element) keys in both cubes.
    assert_eq!(records.len(), 3);
}

#[test]
fn skipped_input_does_not_shadow_matches_in_later_ones() {
    let root = tempfile::tempdir().unwrap();
    let dir_a = root.path().join("a");
    let dir_b = root.path().join("b");
    std::fs::create_dir_all(&dir_a).unwrap();
    std::fs::create_dir_all(&dir_b).unwrap();
    let a = maxt_cube(&dir_a, "a.ind");
    let b = maxt_cube(&dir_b, "b.ind");
    // Cube A's index is intact but its data file is gone, so FILL fails
    // and A is skipped. Its keys must not count as emitted.
    std::fs::remove_file(dir_a.join("maxt.dat")).unwrap();

    let q = query(PointSet::List(vec![ProbePoint::cell(2.0, 2.0)]));
    let records = run(vec![a, b], &q).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].values, vec![ProbeValue::Number(2002.0)]);
}

#[test]
fn unreadable_input_is_skipped_when_others_remain() {
    let dir = tempfile::tempdir().unwrap();
    let good = maxt_cube(dir.path(), "a.ind");
    let gone = ProbeInput::Cube(dir.path().join("missing.ind"));

    let q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    let records = run(vec![gone, good], &q).unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn sole_unreadable_input_fails_the_query() {
    let dir = tempfile::tempdir().unwrap();
    let gone = ProbeInput::Cube(dir.path().join("missing.ind"));
    let q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    assert!(run(vec![gone], &q).is_err());
}

#[test]
fn structurally_invalid_cube_aborts_even_with_other_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let bad_path = dir.path().join("bad.ind");
    std::fs::write(&bad_path, b"not a cube at all").unwrap();
    let good = maxt_cube(dir.path(), "a.ind");

    let q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    let err = run(vec![ProbeInput::Cube(bad_path), good], &q).unwrap_err();
    assert!(err.is_fatal_to_query());
}

#[test]
fn single_element_mode_rejects_ambiguity_before_io() {
    let mut q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    q.expect_single = true;
    // MatchAll selects the whole catalog; nonexistent path proves no I/O
    // happened before validation.
    let err = run(
        vec![ProbeInput::Cube("/nonexistent/cube.ind".into())],
        &q,
    )
    .unwrap_err();
    assert!(matches!(err, probe_common::ProbeError::InvalidQuery(_)));
}

#[test]
fn hazard_cells_decode_through_their_table() {
    let dir = tempfile::tempdir().unwrap();
    // Cell (2,2) holds table index 1 = HU.W; the rest are <None>.
    let mut values = constant_grid(4, 4, 0.0);
    values[1 + 4] = 1.0;
    values[2 + 4] = 2.0; // index past the table end
    let path = CubeBuilder::new()
        .grid(grid())
        .element(
            ElementBuilder::new("wwa", "wwa string").ref_time(t(0)).sample(
                SampleSpec::new(t(1), "wwa.dat", values).wx_table(&["<None>", "HU.W"]),
            ),
        )
        .write(dir.path(), "wwa.ind")
        .unwrap();

    let q = query(PointSet::List(vec![
        ProbePoint::cell(2.0, 2.0),
        ProbePoint::cell(1.0, 1.0),
        ProbePoint::cell(3.0, 2.0),
    ]));
    let records = run(vec![ProbeInput::Cube(path)], &q).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].element, ElementId::Hazards);
    assert_eq!(
        records[0].values[0],
        ProbeValue::Coded {
            code: 1.0,
            text: "Hurricane Warning".to_string(),
        }
    );
    assert_eq!(
        records[0].values[1],
        ProbeValue::Coded {
            code: 0.0,
            text: "<None>".to_string(),
        }
    );
    // Out-of-table index degrades to missing but keeps the code.
    assert!(records[0].values[2].is_missing());
    assert_eq!(
        records[0].values[2].as_number(),
        None
    );
}

#[test]
fn empty_unit_falls_back_to_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = CubeBuilder::new()
        .grid(grid())
        .element(
            ElementBuilder::new("maxt", "")
                .ref_time(t(0))
                .sample(SampleSpec::new(t(1), "maxt.dat", gradient_grid(4, 4))),
        )
        .write(dir.path(), "bare.ind")
        .unwrap();

    let q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    let records = run(vec![ProbeInput::Cube(path)], &q).unwrap();
    assert_eq!(records[0].unit, "F");
}

#[test]
fn element_filter_narrows_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = CubeBuilder::new()
        .grid(grid())
        .element(
            ElementBuilder::new("maxt", "F")
                .ref_time(t(0))
                .sample(SampleSpec::new(t(1), "d.dat", gradient_grid(4, 4))),
        )
        .element(
            ElementBuilder::new("mint", "F")
                .ref_time(t(0))
                .sample(SampleSpec::new(t(1), "d.dat", gradient_grid(4, 4))),
        )
        .write(dir.path(), "two.ind")
        .unwrap();

    let mut q = query(PointSet::List(vec![ProbePoint::cell(1.0, 1.0)]));
    q.elements = vec![ElementId::MinTemp];
    let records = run(vec![ProbeInput::Cube(path)], &q).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].element, ElementId::MinTemp);
}
