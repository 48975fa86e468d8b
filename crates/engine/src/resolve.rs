//! Resolution engine - the detect / clear / shift / refill cycle
//!
//! One resolution cycle is an explicit phase loop:
//!
//! ```text
//! Idle -> Detecting -> Clearing -> Shifting -> Refilling -> Detecting ...
//! ```
//!
//! The loop runs until a detection pass finds zero runs, so a single swap
//! can cascade through several clear/shift/refill rounds before the board
//! is stable again. Each phase commits fully before the next begins; no
//! half-shifted column or stale match flag is observable between
//! operations.
//!
//! Termination is guaranteed by the zero-run exit condition, backed by a
//! safety ceiling on detection passes that catches degenerate
//! configurations (a one-type catalog refills straight into the next
//! match, forever).

use tracing::debug;

use crate::detect::{find_runs, Run};
use match_grid_core::Board;
use match_grid_types::{Effect, EffectLog, EngineConfig, ResolveError, SAFETY_CEILING_PASSES};

/// Phases of one resolution cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detecting,
    Clearing,
    Shifting,
    Refilling,
}

/// Drives resolution cycles and accumulates the match-group counter.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    /// Total distinct runs resolved across the session (runs, not cells).
    match_groups: u32,
    safety_ceiling: u32,
}

impl ResolutionEngine {
    pub fn new() -> Self {
        Self {
            match_groups: 0,
            safety_ceiling: SAFETY_CEILING_PASSES,
        }
    }

    /// Override the detection-pass ceiling (tests use a small one).
    pub fn with_safety_ceiling(passes: u32) -> Self {
        Self {
            match_groups: 0,
            safety_ceiling: passes,
        }
    }

    /// Read-only match-group counter: incremented once per resolved run.
    pub fn match_groups(&self) -> u32 {
        self.match_groups
    }

    /// Resolve the board until a full detection pass finds zero runs.
    ///
    /// Returns the effect log of everything that happened. On
    /// [`ResolveError::SafetyCeilingExceeded`] the board is left in the
    /// state the last completed pass produced.
    pub fn run_until_stable(
        &mut self,
        board: &mut Board,
        config: &EngineConfig,
    ) -> Result<EffectLog, ResolveError> {
        self.resolve(board, config).map(|(log, _)| log)
    }

    /// Like [`run_until_stable`](Self::run_until_stable), but also reports
    /// whether the *first* detection pass found anything - the signal the
    /// swap controller uses for the swap-back policy.
    pub(crate) fn resolve(
        &mut self,
        board: &mut Board,
        config: &EngineConfig,
    ) -> Result<(EffectLog, bool), ResolveError> {
        let mut log = EffectLog::new();
        let mut passes: u32 = 0;
        let mut first_pass_matched = false;
        let mut pending: Vec<Run> = Vec::new();
        let mut phase = Phase::Detecting;

        loop {
            match phase {
                Phase::Detecting => {
                    if passes >= self.safety_ceiling {
                        debug!(passes, "safety ceiling exceeded");
                        return Err(ResolveError::SafetyCeilingExceeded { passes });
                    }
                    passes += 1;

                    let runs = find_runs(board, config);
                    debug!(pass = passes, runs = runs.len(), "detection pass");
                    if runs.is_empty() {
                        break;
                    }
                    if passes == 1 {
                        first_pass_matched = true;
                    }
                    for run in &runs {
                        log.push(Effect::MatchFound {
                            axis: run.axis,
                            cells: run.cells.clone(),
                        });
                    }
                    pending = runs;
                    phase = Phase::Clearing;
                }
                Phase::Clearing => {
                    // Every flagged cell empties once, however many axes
                    // claimed it; the counter counts runs, not cells.
                    let cleared = board.take_matched();
                    self.match_groups += pending.len() as u32;
                    debug!(runs = pending.len(), cells = cleared.len(), "cleared");
                    log.push(Effect::Cleared { cells: cleared });
                    pending.clear();
                    phase = Phase::Shifting;
                }
                Phase::Shifting => {
                    for col in 0..board.columns() as i8 {
                        for (from_row, to_row) in board.compact_column(col) {
                            log.push(Effect::Shifted {
                                column: col,
                                from_row,
                                to_row,
                            });
                        }
                    }
                    phase = Phase::Refilling;
                }
                Phase::Refilling => {
                    for (pos, token) in board.refill_empty() {
                        log.push(Effect::Refilled { pos, token });
                    }
                    phase = Phase::Detecting;
                }
            }
        }

        Ok((log, first_pass_matched))
    }
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::find_runs;
    use match_grid_core::{Catalog, SimpleRng};

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_stable_board_yields_empty_log() {
        let catalog = Catalog::from_names(&["a", "b", "c"]).unwrap();
        let mut board = Board::new(6, 6, catalog, SimpleRng::new(3)).unwrap();
        let mut engine = ResolutionEngine::new();

        let log = engine.run_until_stable(&mut board, &config()).unwrap();
        assert!(log.is_empty());
        assert_eq!(engine.match_groups(), 0);
    }

    #[test]
    fn test_resolution_reaches_stability_from_many_seeds() {
        let catalog = Catalog::from_names(&["a", "b", "c", "d"]).unwrap();
        for seed in 1..30 {
            let mut board = Board::new(7, 7, catalog.clone(), SimpleRng::new(seed)).unwrap();
            // Force a run at the bottom so at least one cycle happens.
            let a = board.catalog().id_of("a");
            for col in 0..3 {
                board.set_occupant(col, 0, a).unwrap();
            }

            let mut engine = ResolutionEngine::new();
            engine.run_until_stable(&mut board, &config()).unwrap();

            assert!(board.is_full(), "seed {seed}");
            assert!(find_runs(&mut board, &config()).is_empty(), "seed {seed}");
            assert!(engine.match_groups() >= 1, "seed {seed}");
        }
    }

    #[test]
    fn test_safety_ceiling_on_single_type_catalog() {
        let catalog = Catalog::from_names(&["only"]).unwrap();
        let mut board = Board::from_layout(
            catalog,
            SimpleRng::new(1),
            &[
                &["only", "only", "only"],
                &["only", "only", "only"],
                &["only", "only", "only"],
            ],
        )
        .unwrap();

        let mut engine = ResolutionEngine::with_safety_ceiling(10);
        let err = engine.run_until_stable(&mut board, &config()).unwrap_err();
        assert_eq!(err, ResolveError::SafetyCeilingExceeded { passes: 10 });
    }
}
