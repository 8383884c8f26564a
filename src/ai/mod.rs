//! Scripted opponent.
//!
//! - `OpponentPolicy`: Decision procedure over the world
//! - `ScriptedAi`: The shipped priority-rule opponent
//! - `AiController`: Runs a policy on its own slower cadence
//!
//! The controller runs after the win check, against the post-tick world.
//! Units it deploys act from the next tick on.

pub mod controller;
pub mod policy;
pub mod scripted;

pub use controller::AiController;
pub use policy::{Decision, OpponentPolicy, PassivePolicy, Rule};
pub use scripted::ScriptedAi;
