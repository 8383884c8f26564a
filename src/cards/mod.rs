//! Card data: templates, parameters, the catalog, potions and decks.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Immutable stat blueprint consumed by deploys
//! - `Attributes`: Role and ability tunables carried onto units
//! - `CardCatalog`: Lookup for templates and potions, with the shipped tables
//! - `Potion`: Lane-wide instant stat change with a cooldown
//! - `DeckBuilder` / `Deck`: Validated card selection handed to a match
//!
//! Card stats are static data. Nothing in this module runs during a tick.

pub mod attributes;
pub mod catalog;
pub mod deck;
pub mod definition;
pub mod potion;

pub use attributes::{keys, AttributeValue, Attributes};
pub use catalog::{ids, CardCatalog};
pub use deck::{Deck, DeckBuilder};
pub use definition::{CardCategory, CardId, CardTemplate, TroopKind};
pub use potion::{Potion, PotionKind};
