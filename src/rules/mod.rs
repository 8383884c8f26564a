//! Win condition.
//!
//! The match calls `check_outcome` after pruning, every tick. Once it
//! returns an outcome the match stops accepting ticks.

pub mod outcome;

pub use outcome::{check_outcome, MatchOutcome};
