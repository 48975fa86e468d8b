//! Swap controller - validates and applies player swap requests
//!
//! A swap request names a source cell and a direction; the target is one
//! cell over. Requests that walk off an edge (or arrive while a resolution
//! is in flight) are rejected as `InvalidMove` - an expected outcome, not a
//! failure. A valid swap exchanges the two occupants and runs the
//! resolution engine; under the swap-back policy a swap whose first
//! detection pass finds nothing is undone again.

use tracing::debug;

use crate::resolve::ResolutionEngine;
use match_grid_core::Board;
use match_grid_types::{Effect, EffectLog, EngineConfig, Pos, SwapDirection, SwapError};

/// Accepts swap requests against a board and drives resolution.
///
/// Constructed once per session alongside the board and handed to whatever
/// input adapter translates gestures into `(cell, direction)` pairs; there
/// is no ambient global controller.
#[derive(Debug, Clone)]
pub struct SwapController {
    config: EngineConfig,
    engine: ResolutionEngine,
    can_accept_input: bool,
}

impl SwapController {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            engine: ResolutionEngine::new(),
            can_accept_input: true,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// False only while a swap/resolution is in flight.
    pub fn can_accept_input(&self) -> bool {
        self.can_accept_input
    }

    /// Total match groups resolved across the session.
    pub fn match_groups(&self) -> u32 {
        self.engine.match_groups()
    }

    /// Validate and apply a swap of `(col, row)` with its neighbor in
    /// `direction`, then resolve the board to stability.
    ///
    /// Returns [`SwapError::InvalidMove`] when the source or target cell is
    /// out of bounds; the board is left untouched. A swap whose first
    /// detection pass finds no run either commits as-is (default) or is
    /// reverted with a [`Effect::SwapReverted`] record when
    /// [`EngineConfig::swap_back`] is set.
    pub fn request_swap(
        &mut self,
        board: &mut Board,
        col: i8,
        row: i8,
        direction: SwapDirection,
    ) -> Result<EffectLog, SwapError> {
        if !self.can_accept_input {
            return Err(SwapError::InvalidMove);
        }

        // Bounds-check the source before stepping off it, so extreme
        // coordinates never reach the i8 neighbor arithmetic.
        let source = Pos::new(col, row);
        if !board.in_bounds(source.col, source.row) {
            debug!(?source, direction = direction.as_str(), "rejected swap");
            return Err(SwapError::InvalidMove);
        }
        let target = source.neighbor(direction);
        if !board.in_bounds(target.col, target.row) {
            debug!(?source, direction = direction.as_str(), "rejected swap");
            return Err(SwapError::InvalidMove);
        }

        self.can_accept_input = false;
        let result = self.swap_and_resolve(board, source, target);
        self.can_accept_input = true;
        result
    }

    fn swap_and_resolve(
        &mut self,
        board: &mut Board,
        source: Pos,
        target: Pos,
    ) -> Result<EffectLog, SwapError> {
        board
            .swap_occupants(source, target)
            .map_err(|_| SwapError::InvalidMove)?;

        let (log, first_pass_matched) = self.engine.resolve(board, &self.config)?;

        if !first_pass_matched && self.config.swap_back {
            // Non-productive swap under the swap-back policy: undo it.
            board
                .swap_occupants(source, target)
                .map_err(|_| SwapError::InvalidMove)?;
            debug!(?source, ?target, "swap reverted");
            return Ok(vec![Effect::SwapReverted]);
        }

        Ok(log)
    }
}
