//! Area effects and the pass that advances them.
//!
//! - `Effect`: A duration-bound zone anchored on one lane
//! - `process_effects`: Per-tick countdown, poison damage and modifier expiry
//!
//! Barrier effects are inert markers. They are counted down like any other
//! effect but nothing reads them during a tick.

mod effect;
mod processor;

pub use effect::{BarrierKind, Effect, EffectKind};
pub use processor::{process_effects, EffectPassReport};
