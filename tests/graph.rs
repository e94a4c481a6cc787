//! Graph construction, copy, and persistence behavior.

use larmor::engine::{FileMode, KeyedFile, MultiPlot};
use larmor::{Graph, GraphKind, LarmorError};
use tempfile::TempDir;

fn linear() -> Graph {
    Graph::new(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![2.0, 4.0, 6.0, 8.0, 10.0],
    )
    .unwrap()
}

#[test]
fn plain_construction_matches_input_length() {
    let graph = linear();
    assert_eq!(graph.kind(), GraphKind::Plain);
    assert_eq!(graph.point_count(), 5);
    assert_eq!(graph.plot().point_count(), 5);
}

#[test]
fn symmetric_construction_matches_input_length() {
    let graph = Graph::with_errors(
        vec![1.0, 2.0, 3.0],
        vec![1.0, 4.0, 9.0],
        vec![0.1, 0.1, 0.1],
        vec![0.2, 0.2, 0.2],
    )
    .unwrap();
    assert_eq!(graph.kind(), GraphKind::SymmetricErrors);
    assert_eq!(graph.plot().point_count(), 3);
}

#[test]
fn mismatched_y_fails_construction() {
    let err = Graph::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, LarmorError::ShapeMismatch { .. }));
}

#[test]
fn short_symmetric_error_array_fails_construction() {
    let err = Graph::with_errors(
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![0.1, 0.1],
        vec![0.1, 0.1, 0.1],
    )
    .unwrap_err();
    match err {
        LarmorError::ShapeMismatch {
            what,
            expected,
            actual,
        } => {
            assert_eq!(what, "ex");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_asymmetric_error_array_fails_construction() {
    let err = Graph::with_asym_errors(
        vec![1.0, 2.0, 3.0],
        vec![1.0, 2.0, 3.0],
        vec![0.1, 0.1, 0.1],
        vec![0.1, 0.1, 0.1],
        vec![0.1, 0.1, 0.1],
        vec![0.1, 0.1],
    )
    .unwrap_err();
    assert!(matches!(err, LarmorError::ShapeMismatch { .. }));
}

#[test]
fn default_style_and_axis_titles() {
    let graph = linear();
    assert_eq!(graph.plot().marker().style, 20);
    assert_eq!(graph.plot().line().width, 2);
    assert_eq!(graph.plot().x_title(), "X Axis");
    assert_eq!(graph.plot().y_title(), "Y Axis");
}

#[test]
fn copy_isolates_style() {
    let mut graph = linear();
    graph.set_line(2, 7, 3);
    graph.set_marker(4, 21, 1.5);

    let mut copy = graph.clone();
    assert_eq!(copy.plot().line(), graph.plot().line());
    assert_eq!(copy.plot().marker(), graph.plot().marker());

    copy.set_line(6, 1, 1);
    copy.set_marker(8, 24, 0.5);
    assert_eq!(graph.plot().line().color, 2);
    assert_eq!(graph.plot().line().style, 7);
    assert_eq!(graph.plot().line().width, 3);
    assert_eq!(graph.plot().marker().style, 21);
}

#[test]
fn copy_replicates_explicit_display_range() {
    let mut graph = linear();
    graph.plot_mut().set_x_range(0.5, 4.5);
    graph.plot_mut().set_y_range(0.0, 12.0);

    let copy = graph.clone();
    assert_eq!(copy.plot().x_range(), Some((0.5, 4.5)));
    assert_eq!(copy.plot().y_range(), Some((0.0, 12.0)));

    let plain_copy = linear().clone();
    assert_eq!(plain_copy.plot().x_range(), None);
}

#[test]
fn save_writes_primitive_under_its_identity() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.json");

    let mut graph = linear();
    graph.set_title("Linear Graph");
    graph.set_axis_titles("X", "Y");
    graph.save_to_file(&path, FileMode::Recreate).unwrap();

    let file = KeyedFile::open(&path, FileMode::Read).unwrap();
    assert!(!file.is_zombie());
    let plot = file.get("Graph").unwrap().as_plot().unwrap();
    assert_eq!(plot.point_count(), 5);
    assert_eq!(plot.title(), "Linear Graph");
    assert_eq!(plot.x_title(), "X");
    assert_eq!(plot.y_title(), "Y");
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("graph.json");
    let err = linear().save_to_file(&path, FileMode::Recreate).unwrap_err();
    assert!(matches!(err, LarmorError::FileOpen { .. }));
}

#[test]
fn multiplot_does_not_take_ownership() {
    let first = linear();
    let second = Graph::new(vec![0.0, 1.0], vec![1.0, 0.0]).unwrap();

    let mut multi = MultiPlot::new();
    first.add_to_multi(&mut multi, "L");
    second.add_to_multi(&mut multi, "");
    assert_eq!(multi.len(), 2);
    multi.draw("A");

    // The graphs are still fully usable after registration.
    assert_eq!(first.point_count(), 5);
    assert_eq!(second.point_count(), 2);
}

#[test]
fn fit_pol1_recovers_slope_and_intercept() {
    let mut graph = linear();
    graph.fit("pol1", "Q");
    let params = graph.plot().fit_params();
    assert_eq!(params.len(), 2);
    assert!((params[0] - 0.0).abs() < 1e-9);
    assert!((params[1] - 2.0).abs() < 1e-9);
}
