//! Match orchestration.
//!
//! `Match` owns the world and runs one tick in this order: economy,
//! movement, combat, effects, tower damage, deaths and pruning, win check,
//! then the AI on its own cadence.

pub mod arena;

pub use arena::{Match, MatchBuilder, TickReport};
