//! Shared types module - data structures and constants for the match grid
//!
//! This module defines the fundamental types used throughout the engine.
//! It contains no game logic, making the types usable in any context (core
//! grid, resolution engine, presentation adapters).
//!
//! # Coordinate Convention
//!
//! Cells are addressed as `(column, row)` with `0 <= column < C` and
//! `0 <= row < R`. **Row 0 is the bottom row**; rows grow upward. Gravity
//! compacts occupied cells toward row 0, and refilled cells appear at the
//! top of a column. `SwapDirection::Up` therefore means `row + 1`.
//!
//! # Effects
//!
//! The engine never renders. Every operation returns an [`EffectLog`]: an
//! ordered sequence of declarative [`Effect`] records (matches found, cells
//! cleared, cells shifted, cells refilled, swap reverted) that a
//! presentation layer consumes to drive animation. All wire-facing types
//! derive serde so the log can be shipped to a sink as JSON.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum run length that counts as a match.
pub const MIN_RUN_LEN: usize = 3;

/// Hard cap on detection passes per resolution cycle.
///
/// Guards against a misconfigured catalog (a single-type catalog refills
/// deterministically into an infinite match).
pub const SAFETY_CEILING_PASSES: u32 = 1000;

/// Maximum number of token types a catalog may hold.
pub const MAX_TOKEN_TYPES: usize = 32;

/// Index of a token type in the catalog's name-sorted order.
///
/// Cells store ids rather than the token types themselves, so equality and
/// ordering on ids coincide with the catalog's canonical order by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(u8);

impl TokenId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Index into the catalog's sorted type list.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A cell address as `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub col: i8,
    pub row: i8,
}

impl Pos {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Position one unit step along `axis`.
    pub const fn step(self, axis: MatchAxis) -> Self {
        let (dc, dr) = axis.step();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Position one cell over in `direction`.
    pub const fn neighbor(self, direction: SwapDirection) -> Self {
        let (dc, dr) = direction.offset();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Direction of a requested swap, one cell from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwapDirection {
    /// `(column, row)` offset of the target cell relative to the source.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            SwapDirection::Up => (0, 1),
            SwapDirection::Down => (0, -1),
            SwapDirection::Left => (-1, 0),
            SwapDirection::Right => (1, 0),
        }
    }

    /// The reverse direction (used to undo a swap).
    pub const fn opposite(self) -> Self {
        match self {
            SwapDirection::Up => SwapDirection::Down,
            SwapDirection::Down => SwapDirection::Up,
            SwapDirection::Left => SwapDirection::Right,
            SwapDirection::Right => SwapDirection::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(SwapDirection::Up),
            "down" | "d" => Some(SwapDirection::Down),
            "left" | "l" => Some(SwapDirection::Left),
            "right" | "r" => Some(SwapDirection::Right),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SwapDirection::Up => "up",
            SwapDirection::Down => "down",
            SwapDirection::Left => "left",
            SwapDirection::Right => "right",
        }
    }
}

/// An axis along which runs are detected.
///
/// Diagonal axes only participate when [`EngineConfig::diagonal_matches`]
/// is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAxis {
    Horizontal,
    Vertical,
    DiagonalRight,
    DiagonalLeft,
}

impl MatchAxis {
    /// All axes in scan order.
    pub const ALL: [MatchAxis; 4] = [
        MatchAxis::Horizontal,
        MatchAxis::Vertical,
        MatchAxis::DiagonalRight,
        MatchAxis::DiagonalLeft,
    ];

    /// Unit step `(column, row)` walked while extending a run.
    pub const fn step(self) -> (i8, i8) {
        match self {
            MatchAxis::Horizontal => (1, 0),
            MatchAxis::Vertical => (0, 1),
            MatchAxis::DiagonalRight => (1, 1),
            MatchAxis::DiagonalLeft => (-1, 1),
        }
    }

    /// The per-cell flag bit claimed by runs on this axis.
    pub const fn flag(self) -> MatchFlags {
        match self {
            MatchAxis::Horizontal => MatchFlags::HORIZONTAL,
            MatchAxis::Vertical => MatchFlags::VERTICAL,
            MatchAxis::DiagonalRight => MatchFlags::DIAGONAL_RIGHT,
            MatchAxis::DiagonalLeft => MatchFlags::DIAGONAL_LEFT,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(self, MatchAxis::DiagonalRight | MatchAxis::DiagonalLeft)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchAxis::Horizontal => "horizontal",
            MatchAxis::Vertical => "vertical",
            MatchAxis::DiagonalRight => "diagonal_right",
            MatchAxis::DiagonalLeft => "diagonal_left",
        }
    }
}

bitflags! {
    /// Per-cell, per-axis match flags.
    ///
    /// Set while a detection pass claims a cell for a run on an axis, so
    /// overlapping runs on the *same* axis are never double-counted. Reset
    /// at the start of every detection pass; never observable between
    /// operations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MatchFlags: u8 {
        const HORIZONTAL = 1 << 0;
        const VERTICAL = 1 << 1;
        const DIAGONAL_RIGHT = 1 << 2;
        const DIAGONAL_LEFT = 1 << 3;
    }
}

/// Engine configuration recognized by the swap controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Detect runs on the two diagonal axes as well.
    pub diagonal_matches: bool,
    /// Revert a swap whose first detection pass finds no run.
    pub swap_back: bool,
    /// Input-layer hint (continuous drag vs. discrete tap). Only affects
    /// how a caller decides to issue swap requests; core semantics ignore it.
    pub drag_mode: bool,
}

/// One declarative record in an [`EffectLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// A run of >= 3 same-typed cells was found on `axis`.
    MatchFound { axis: MatchAxis, cells: Vec<Pos> },
    /// All cells claimed by this pass's runs became empty (each cell listed
    /// once, even when claimed on several axes).
    Cleared { cells: Vec<Pos> },
    /// An occupied cell dropped from `from_row` to `to_row` in `column`.
    Shifted { column: i8, from_row: i8, to_row: i8 },
    /// An empty cell received a newly generated token.
    Refilled { pos: Pos, token: TokenId },
    /// A non-productive swap was undone under the swap-back policy.
    SwapReverted,
}

/// Ordered sequence of effects produced by one operation.
pub type EffectLog = Vec<Effect>;

/// Contract error on direct cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is out of bounds")]
    OutOfBounds { col: i8, row: i8 },
}

/// Catalog or board-construction failure, surfaced at setup time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("token catalog must not be empty")]
    EmptyCatalog,
    #[error("token catalog holds {count} types, maximum is {MAX_TOKEN_TYPES}")]
    TooManyTypes { count: usize },
    #[error("duplicate token type {name:?} in catalog")]
    DuplicateType { name: String },
    #[error("unknown token type {name:?}")]
    UnknownType { name: String },
    #[error("layout rows must all have the same length")]
    RaggedLayout,
    #[error("board of {rows} x {columns} exceeds the addressable size")]
    BoardTooLarge { rows: usize, columns: usize },
    #[error("no legal token type remains for cell ({col}, {row})")]
    GenerationImpossible { col: i8, row: i8 },
}

/// Resolution-cycle failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("resolution exceeded the safety ceiling of {passes} detection passes")]
    SafetyCeilingExceeded { passes: u32 },
}

/// Swap-request failure.
///
/// `InvalidMove` is the expected, recoverable rejection path: the caller may
/// simply re-prompt the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("swap target is out of bounds or input is not accepted")]
    InvalidMove,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
