//! # lane-war
//!
//! Real-time two-lane tower-push match simulation with a scripted opponent.
//!
//! ## Design Principles
//!
//! 1. **Explicit World**: Every system, ability handler and the AI receives
//!    the world by reference. There is no global state.
//!
//! 2. **Fixed Tick Order**: economy, movement, combat, effects, tower
//!    damage, deaths and pruning, win check, then the AI on its own cadence.
//!
//! 3. **Deterministic**: All randomness comes from seeded `GameRng` streams,
//!    so a match replays exactly from its seed and inputs.
//!
//! ## Architecture
//!
//! - **Closed Ability Set**: Card data names abilities by string; the
//!   registry binds id and parameters into a typed `Ability` when a unit
//!   dies, and handlers match on it exhaustively.
//!
//! - **Clock-Owned Timers**: Timed buffs are modifiers stored on the unit
//!   and counted down by the effect pass. Nothing fires outside a tick.
//!
//! - **Persistent Data Structures**: Units and effects live in `im`
//!   vectors, so the per-tick renderer snapshot is an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: Unit IDs, sides, world state, RNG, configuration, errors
//! - `cards`: Card templates, parameters, catalog, potions, deck builder
//! - `units`: Runtime unit state and expiring modifiers
//! - `abilities`: Death ability registry and handlers
//! - `effects`: Area effects and the effect pass
//! - `economy`: Regenerating resource
//! - `systems`: Movement, combat, tower damage and the death pass
//! - `rules`: Win condition and match outcome
//! - `ai`: Opponent policy, the scripted opponent and its cadence
//! - `game`: The match and its builder

pub mod core;
pub mod cards;
pub mod units;
pub mod abilities;
pub mod effects;
pub mod economy;
pub mod systems;
pub mod rules;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    UnitId, Side, SideMap,
    GameRng, GameRngState,
    AiConfig, MatchConfig,
    DeployError, AbilityError, PotionError, DeckError, RosterError,
    SideState, Tower, World, WorldSnapshot,
};

pub use crate::cards::{
    AttributeValue, Attributes, CardCatalog, CardCategory, CardId, CardTemplate,
    Deck, DeckBuilder, Potion, PotionKind, TroopKind,
};

pub use crate::units::{Modifier, Unit};

pub use crate::abilities::{Ability, AbilityContext, AbilityId, AbilityRegistry};

pub use crate::effects::{BarrierKind, Effect, EffectKind};

pub use crate::economy::ResourceClock;

pub use crate::rules::MatchOutcome;

pub use crate::ai::{AiController, Decision, OpponentPolicy, PassivePolicy, Rule, ScriptedAi};

pub use crate::game::{Match, MatchBuilder, TickReport};
