//! Death-triggered abilities.
//!
//! ## Key Types
//!
//! - `AbilityId`: The string key card data uses to name an ability
//! - `Ability`: Closed set of abilities, each with typed parameters
//! - `AbilityRegistry`: Binds an id and a unit's parameters into an `Ability`
//! - `AbilityContext`: World and random stream lent to a handler
//!
//! ## Lifecycle
//!
//! The death pass flags a dying unit, resolves its ability through the
//! registry, and runs the handler. Unknown ids resolve to nothing. Binding
//! errors are reported back to the death pass, which logs and skips them.

mod ability;
pub mod handlers;
mod registry;

pub use ability::{Ability, AbilityId};
pub use handlers::AbilityContext;
pub use registry::{names, AbilityBuilder, AbilityRegistry};
