//! Per-tick systems.
//!
//! Each system is a free function over `&mut World`, run by the match in a
//! fixed order: movement, combat, effects, tower damage, deaths. Economy
//! and effects live in their own modules; the systems here are the ones
//! that only exist as tick phases.

pub mod combat;
pub mod death;
pub mod movement;
pub mod towers;

pub use combat::resolve_combat;
pub use death::{resolve_deaths, DeathReport};
pub use movement::advance_units;
pub use towers::apply_tower_hits;
