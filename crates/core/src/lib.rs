//! Core grid module - pure, deterministic, and testable
//!
//! This module owns the board state and its generation rules. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the injected [`SimpleRng`] seed is the only
//!   nondeterministic input; the same seed produces identical boards
//! - **Testable**: every mutation is an explicit, bounds-checked operation
//! - **Portable**: runs headless in any environment
//!
//! # Module Structure
//!
//! - [`board`]: flat-arena R x C grid with constrained generation, swapping,
//!   per-column compaction, and match-flag plumbing
//! - [`catalog`]: the fixed, name-ordered set of token types
//! - [`rng`]: seedable LCG random source
//!
//! Run detection and the resolution cycle live in the engine crate; this
//! crate only knows how to hold and mutate the grid.

pub mod board;
pub mod catalog;
pub mod rng;

pub use match_grid_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{Catalog, TokenType};
pub use rng::SimpleRng;
