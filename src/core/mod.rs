//! Core match types: unit IDs, sides, world state, RNG, configuration, errors.
//!
//! Everything here is shared by the systems, the ability registry and the
//! AI. The world is passed explicitly to every consumer; nothing in the
//! crate holds global state.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use entity::UnitId;
pub use player::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{normalize_speed, AiConfig, MatchConfig};
pub use error::{AbilityError, DeckError, DeployError, PotionError, RosterError};
pub use state::{SideState, Tower, World, WorldSnapshot};
