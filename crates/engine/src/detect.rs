//! Match detector - finds runs of same-typed cells along the enabled axes
//!
//! A run is a maximal sequence of >= 3 adjacent same-typed cells along one
//! axis. Detection walks each axis in a fixed order over a fixed row-major
//! cell scan, so the set and order of discovered runs is reproducible for
//! any given board.

use arrayvec::ArrayVec;
use match_grid_core::Board;
use match_grid_types::{EngineConfig, MatchAxis, Pos, MIN_RUN_LEN};

/// One detected run: >= 3 same-typed cells along `axis`, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub axis: MatchAxis,
    pub cells: Vec<Pos>,
}

/// The axes a detection pass scans under `config`, in scan order.
pub fn enabled_axes(config: &EngineConfig) -> ArrayVec<MatchAxis, 4> {
    MatchAxis::ALL
        .into_iter()
        .filter(|axis| config.diagonal_matches || !axis.is_diagonal())
        .collect()
}

/// Run one full detection pass over the board.
///
/// Scans each enabled axis over every cell (rows ascending, columns
/// ascending within a row). A cell already claimed for a run on an axis is
/// skipped for that axis, so overlapping runs on the same axis are counted
/// once; the same cell may still be claimed by runs on *other* axes.
///
/// Match flags are reset at the start of the pass and left set on every
/// claimed cell for the clearing phase to consume.
pub fn find_runs(board: &mut Board, config: &EngineConfig) -> Vec<Run> {
    board.clear_match_flags();

    let mut runs = Vec::new();
    for axis in enabled_axes(config) {
        for row in 0..board.rows() as i8 {
            for col in 0..board.columns() as i8 {
                if let Some(run) = scan_from(board, Pos::new(col, row), axis) {
                    runs.push(run);
                }
            }
        }
    }
    runs
}

/// Walk one axis from a starting cell and claim the run if long enough.
fn scan_from(board: &mut Board, start: Pos, axis: MatchAxis) -> Option<Run> {
    if board.flags_at(start.col, start.row).intersects(axis.flag()) {
        return None;
    }
    let ty = board.occupant_or_none(start.col, start.row)?;

    let mut cells = vec![start];
    let mut next = start.step(axis);
    while board.occupant_or_none(next.col, next.row) == Some(ty)
        && !board.flags_at(next.col, next.row).intersects(axis.flag())
    {
        cells.push(next);
        next = next.step(axis);
    }

    if cells.len() < MIN_RUN_LEN {
        return None;
    }

    for cell in &cells {
        board.mark_matched(cell.col, cell.row, axis);
    }
    Some(Run { axis, cells })
}
