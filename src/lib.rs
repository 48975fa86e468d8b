//! Match grid (workspace facade crate).
//!
//! This package keeps a stable `match_grid::{core,engine,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.
//!
//! # Example
//!
//! ```
//! use match_grid::core::{Board, Catalog, SimpleRng};
//! use match_grid::engine::SwapController;
//! use match_grid::types::{EngineConfig, SwapDirection};
//!
//! let catalog = Catalog::from_names(&["ruby", "topaz", "jade", "opal"]).unwrap();
//! let mut board = Board::new(8, 8, catalog, SimpleRng::new(42)).unwrap();
//! let mut controller = SwapController::new(EngineConfig::default());
//!
//! match controller.request_swap(&mut board, 3, 3, SwapDirection::Right) {
//!     Ok(effects) => {
//!         // Feed the effect log to a presentation layer.
//!         let _ = effects;
//!     }
//!     Err(rejected) => {
//!         // InvalidMove is an expected outcome; re-prompt the player.
//!         let _ = rejected;
//!     }
//! }
//! ```

pub use match_grid_core as core;
pub use match_grid_engine as engine;
pub use match_grid_types as types;
