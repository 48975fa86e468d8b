//! Board module - manages the match grid
//!
//! The board is an R x C grid where each cell is empty or holds a token id.
//! Uses a flat arena indexed `row * columns + column` for cache locality and
//! to keep in-place swaps free of aliasing hazards.
//!
//! Coordinates: `(column, row)` with column 0 at the left and **row 0 at the
//! bottom**. Gravity compacts occupied cells toward row 0; refills land at
//! the top of a column.
//!
//! The board owns its catalog and RNG: token generation (the constrained
//! initial fill and the unconstrained refill draw) lives here, while run
//! detection and the resolution cycle live in the engine crate.

use arrayvec::ArrayVec;

use crate::catalog::Catalog;
use crate::rng::SimpleRng;
use match_grid_types::{
    BoardError, MatchAxis, MatchFlags, Pos, SetupError, TokenId, MAX_TOKEN_TYPES,
};

/// One cell's occupant: a token id, or `None` while empty mid-cycle.
pub type Cell = Option<TokenId>;

/// The match grid - R rows x C columns using flat arena storage
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    columns: u8,
    /// Flat array of occupants, row-major order (row * columns + column)
    cells: Vec<Cell>,
    /// Per-cell direction match flags, parallel to `cells`
    flags: Vec<MatchFlags>,
    catalog: Catalog,
    rng: SimpleRng,
}

impl Board {
    /// Create a board and fill every cell.
    ///
    /// Each placement excludes the left neighbor's and the below neighbor's
    /// type, so no run of >= 3 exists at start; the pick among remaining
    /// legal types is uniform-random. Placement proceeds row 0 upward,
    /// column 0 rightward, which fixes the order RNG draws are consumed.
    ///
    /// Fails with [`SetupError::GenerationImpossible`] if some cell is left
    /// with no legal type (a catalog of >= 2 types always has one).
    pub fn new(
        rows: u8,
        columns: u8,
        catalog: Catalog,
        rng: SimpleRng,
    ) -> Result<Self, SetupError> {
        let mut board = Self::empty(rows, columns, catalog, rng)?;

        for row in 0..rows as i8 {
            for col in 0..columns as i8 {
                let left = board.occupant_or_none(col - 1, row);
                let below = board.occupant_or_none(col, row - 1);

                let mut legal: ArrayVec<TokenId, MAX_TOKEN_TYPES> = ArrayVec::new();
                for id in board.catalog.ids() {
                    if Some(id) != left && Some(id) != below {
                        legal.push(id);
                    }
                }
                if legal.is_empty() {
                    return Err(SetupError::GenerationImpossible { col, row });
                }

                let pick = legal[board.rng.next_range(legal.len() as u32) as usize];
                let idx = row as usize * columns as usize + col as usize;
                board.cells[idx] = Some(pick);
            }
        }

        Ok(board)
    }

    /// Create a board from an explicit layout, for tests and tooling.
    ///
    /// `layout` is written the way the board looks: the first slice is the
    /// *top* row, the last slice is row 0. Entries are catalog type names;
    /// `""` or `"."` leaves the cell empty. No run constraint is enforced -
    /// a layout may contain pre-existing matches on purpose.
    pub fn from_layout(
        catalog: Catalog,
        rng: SimpleRng,
        layout: &[&[&str]],
    ) -> Result<Self, SetupError> {
        let rows = layout.len();
        let columns = layout.first().map_or(0, |r| r.len());
        if layout.iter().any(|r| r.len() != columns) {
            return Err(SetupError::RaggedLayout);
        }

        let mut board = Self::empty(rows as u8, columns as u8, catalog, rng)?;
        for (i, names) in layout.iter().enumerate() {
            let row = (rows - 1 - i) as i8;
            for (col, name) in names.iter().enumerate() {
                let cell = match *name {
                    "" | "." => None,
                    name => Some(board.catalog.id_of(name).ok_or_else(|| {
                        SetupError::UnknownType {
                            name: name.to_string(),
                        }
                    })?),
                };
                let idx = row as usize * columns + col;
                board.cells[idx] = cell;
            }
        }

        Ok(board)
    }

    fn empty(rows: u8, columns: u8, catalog: Catalog, rng: SimpleRng) -> Result<Self, SetupError> {
        if rows > i8::MAX as u8 || columns > i8::MAX as u8 {
            return Err(SetupError::BoardTooLarge {
                rows: rows as usize,
                columns: columns as usize,
            });
        }
        let size = rows as usize * columns as usize;
        Ok(Self {
            rows,
            columns,
            cells: vec![None; size],
            flags: vec![MatchFlags::empty(); size],
            catalog,
            rng,
        })
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(&self, col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= self.columns as i8 || row < 0 || row >= self.rows as i8 {
            return None;
        }
        Some(row as usize * self.columns as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Check if position is within the grid
    pub fn in_bounds(&self, col: i8, row: i8) -> bool {
        self.index(col, row).is_some()
    }

    /// Get the occupant at (column, row)
    pub fn occupant(&self, col: i8, row: i8) -> Result<Cell, BoardError> {
        self.index(col, row)
            .map(|idx| self.cells[idx])
            .ok_or(BoardError::OutOfBounds { col, row })
    }

    /// Set the occupant at (column, row); `None` empties the cell
    pub fn set_occupant(&mut self, col: i8, row: i8, cell: Cell) -> Result<(), BoardError> {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(BoardError::OutOfBounds { col, row }),
        }
    }

    /// Occupant lookup that folds out-of-bounds into "empty".
    ///
    /// Convenient for neighbor walks where falling off the grid just ends
    /// the walk; direct cell access should use [`Board::occupant`].
    pub fn occupant_or_none(&self, col: i8, row: i8) -> Cell {
        self.index(col, row).and_then(|idx| self.cells[idx])
    }

    /// Exchange the occupants of two cells in O(1).
    ///
    /// No adjacency or productivity validation happens here - that is the
    /// swap controller's job. Only bounds are checked.
    pub fn swap_occupants(&mut self, a: Pos, b: Pos) -> Result<(), BoardError> {
        let ia = self
            .index(a.col, a.row)
            .ok_or(BoardError::OutOfBounds { col: a.col, row: a.row })?;
        let ib = self
            .index(b.col, b.row)
            .ok_or(BoardError::OutOfBounds { col: b.col, row: b.row })?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Compact one column: occupied cells move toward row 0 preserving
    /// relative order, leaving all empties at the top.
    ///
    /// Returns the `(from_row, to_row)` pair for every cell that moved, in
    /// ascending row order. An out-of-range column is a no-op.
    pub fn compact_column(&mut self, col: i8) -> Vec<(i8, i8)> {
        let mut moves = Vec::new();
        if col < 0 || col >= self.columns as i8 {
            return moves;
        }

        let columns = self.columns as usize;
        let mut write: i8 = 0;
        for row in 0..self.rows as i8 {
            let idx = row as usize * columns + col as usize;
            if self.cells[idx].is_none() {
                continue;
            }
            if write != row {
                let widx = write as usize * columns + col as usize;
                self.cells[widx] = self.cells[idx];
                self.cells[idx] = None;
                moves.push((row, write));
            }
            write += 1;
        }

        moves
    }

    /// Empty every cell claimed by the current pass's match flags and reset
    /// the flags.
    ///
    /// Returns the emptied positions in row-major scan order, each listed
    /// once - a cell claimed on several axes still empties only once.
    pub fn take_matched(&mut self) -> Vec<Pos> {
        let mut cleared = Vec::new();
        for row in 0..self.rows as i8 {
            for col in 0..self.columns as i8 {
                let idx = row as usize * self.columns as usize + col as usize;
                if self.flags[idx].is_empty() {
                    continue;
                }
                self.cells[idx] = None;
                self.flags[idx] = MatchFlags::empty();
                cleared.push(Pos::new(col, row));
            }
        }
        cleared
    }

    /// Fill every empty cell with a uniform random token.
    ///
    /// Columns are visited ascending, rows ascending within a column; this
    /// is the order in which RNG draws are consumed. Returns what was
    /// placed where.
    pub fn refill_empty(&mut self) -> Vec<(Pos, TokenId)> {
        let mut refilled = Vec::new();
        for col in 0..self.columns as i8 {
            for row in 0..self.rows as i8 {
                let idx = row as usize * self.columns as usize + col as usize;
                if self.cells[idx].is_some() {
                    continue;
                }
                let token = self.random_token();
                self.cells[idx] = Some(token);
                refilled.push((Pos::new(col, row), token));
            }
        }
        refilled
    }

    /// Draw a uniform random token from the whole catalog.
    ///
    /// Refill draws are unconstrained - unlike the initial fill, no
    /// adjacency exclusion applies.
    pub fn random_token(&mut self) -> TokenId {
        let pick = self.rng.next_range(self.catalog.len() as u32);
        TokenId::new(pick as u8)
    }

    /// Match flags at (column, row); empty outside the grid.
    pub fn flags_at(&self, col: i8, row: i8) -> MatchFlags {
        self.index(col, row)
            .map_or(MatchFlags::empty(), |idx| self.flags[idx])
    }

    /// Claim a cell for a run on `axis`. Returns false outside the grid.
    pub fn mark_matched(&mut self, col: i8, row: i8, axis: MatchAxis) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.flags[idx] |= axis.flag();
                true
            }
            None => false,
        }
    }

    /// Reset every cell's match flags (start of a detection pass).
    pub fn clear_match_flags(&mut self) {
        for f in &mut self.flags {
            *f = MatchFlags::empty();
        }
    }

    /// Whether every cell is occupied (the stable-state invariant).
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Get a reference to the internal cell arena
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
