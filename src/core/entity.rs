//! Unit identification.
//!
//! Every unit placed on the field, whether deployed from a card or summoned
//! by an ability, receives a `UnitId` that is never reused within a match.
//!
//! ```
//! use lane_war::core::UnitId;
//!
//! let id = UnitId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(id.next(), UnitId::new(8));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a unit within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
