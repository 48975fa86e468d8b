//! Engine module - run detection, resolution, and swap control
//!
//! This crate turns the passive grid in `match-grid-core` into the playable
//! state machine:
//!
//! - [`detect`]: scans the board along the enabled axes and finds runs of
//!   three or more same-typed cells, flagging claimed cells so overlapping
//!   runs on one axis are never double-counted
//! - [`resolve`]: the detect -> clear -> shift -> refill loop that cascades
//!   until the board is stable, with a safety ceiling and the match-group
//!   counter
//! - [`swap`]: validates and applies player swap requests, including the
//!   swap-back policy for non-productive swaps
//!
//! Everything is synchronous and deterministic apart from the board's
//! injected RNG; each operation returns an effect log for a presentation
//! layer to consume.

pub mod detect;
pub mod resolve;
pub mod swap;

// Re-export commonly used types
pub use detect::{enabled_axes, find_runs, Run};
pub use resolve::ResolutionEngine;
pub use swap::SwapController;
