//! Units on the field and the expiring modifiers attached to them.

mod modifier;
mod unit;

pub use modifier::Modifier;
pub use unit::Unit;
