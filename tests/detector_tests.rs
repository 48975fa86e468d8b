//! Match detector tests - run discovery across axes and flag semantics

use match_grid::core::{Board, Catalog, SimpleRng};
use match_grid::engine::find_runs;
use match_grid::types::{EngineConfig, MatchAxis, Pos};

fn board(layout: &[&[&str]]) -> Board {
    let catalog = Catalog::from_names(&["a", "b", "c", "d", "e"]).unwrap();
    Board::from_layout(catalog, SimpleRng::new(1), layout).unwrap()
}

fn with_diagonals() -> EngineConfig {
    EngineConfig {
        diagonal_matches: true,
        ..EngineConfig::default()
    }
}

#[test]
fn test_single_run_per_overlap_on_one_axis() {
    // Four in a row is one run of four, not two overlapping runs of three.
    let mut b = board(&[&["c", "d", "e", "b"], &["a", "a", "a", "a"]]);
    let runs = find_runs(&mut b, &EngineConfig::default());
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].axis, MatchAxis::Horizontal);
    assert_eq!(runs[0].cells.len(), 4);
}

#[test]
fn test_parallel_runs_are_distinct() {
    let mut b = board(&[
        &["b", "b", "b"], // row 1
        &["a", "a", "a"], // row 0
    ]);
    let runs = find_runs(&mut b, &EngineConfig::default());
    assert_eq!(runs.len(), 2);
    // Row-major scan finds the bottom run first.
    assert_eq!(runs[0].cells[0], Pos::new(0, 0));
    assert_eq!(runs[1].cells[0], Pos::new(0, 1));
}

#[test]
fn test_multi_axis_overlap_yields_one_run_per_axis() {
    // Plus shape of "a": one horizontal and one vertical run share the
    // center cell.
    let mut b = board(&[
        &["b", "a", "c"],
        &["a", "a", "a"],
        &["d", "a", "e"],
    ]);
    let runs = find_runs(&mut b, &EngineConfig::default());
    assert_eq!(runs.len(), 2);

    let axes: Vec<MatchAxis> = runs.iter().map(|r| r.axis).collect();
    assert_eq!(axes, [MatchAxis::Horizontal, MatchAxis::Vertical]);

    let center = Pos::new(1, 1);
    assert!(runs.iter().all(|r| r.cells.contains(&center)));
}

#[test]
fn test_l_shape_counts_both_arms() {
    let mut b = board(&[
        &["a", "b", "c"], // row 2: "a" at (0,2)
        &["a", "c", "d"], // row 1
        &["a", "a", "a"], // row 0
    ]);
    let runs = find_runs(&mut b, &EngineConfig::default());
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].axis, MatchAxis::Horizontal);
    assert_eq!(runs[1].axis, MatchAxis::Vertical);
    // The corner cell (0,0) belongs to both.
    assert!(runs.iter().all(|r| r.cells.contains(&Pos::new(0, 0))));
}

#[test]
fn test_diagonal_runs_only_when_configured() {
    let layout: &[&[&str]] = &[
        &["c", "d", "a", "e"],
        &["b", "a", "c", "d"],
        &["a", "b", "d", "c"], // row 1: diagonal-right a at (0,1),(1,2),(2,3)
        &["d", "c", "e", "b"],
    ];

    let mut b = board(layout);
    assert!(find_runs(&mut b, &EngineConfig::default()).is_empty());

    let mut b = board(layout);
    let runs = find_runs(&mut b, &with_diagonals());
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].axis, MatchAxis::DiagonalRight);
    assert_eq!(
        runs[0].cells,
        vec![Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 3)]
    );
}

#[test]
fn test_detection_does_not_mutate_occupants() {
    let mut b = board(&[&["a", "a", "a"], &["b", "c", "d"]]);
    let before = b.cells().to_vec();
    let runs = find_runs(&mut b, &EngineConfig::default());
    assert_eq!(runs.len(), 1);
    // Detection flags cells but never moves or clears them.
    assert_eq!(b.cells(), before.as_slice());
}
