//! Deck assembly and validation.
//!
//! A deck holds exactly five characters, three potions and two buildings,
//! all distinct. The builder enforces the per-category limits while cards
//! are added; `build()` enforces the exact counts.

use serde::{Deserialize, Serialize};

use super::catalog::CardCatalog;
use super::definition::{CardCategory, CardId};
use crate::core::DeckError;

pub const MAX_CHARACTERS: usize = 5;
pub const MAX_POTIONS: usize = 3;
pub const MAX_BUILDINGS: usize = 2;

/// A validated deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub characters: Vec<CardId>,
    pub potions: Vec<CardId>,
    pub buildings: Vec<CardId>,
}

impl Deck {
    /// Whether the deck contains the card in any category.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.characters
            .iter()
            .chain(&self.potions)
            .chain(&self.buildings)
            .any(|c| c.as_str() == id)
    }
}

/// Incremental deck builder backed by a catalog.
///
/// ```
/// use lane_war::cards::{CardCatalog, CardCategory, DeckBuilder};
///
/// let catalog = CardCatalog::standard();
/// let mut builder = DeckBuilder::new(&catalog);
/// builder.add("neil", CardCategory::Character).unwrap();
/// assert!(!builder.is_valid());
/// assert!(builder.add("frost", CardCategory::Character).is_err());
/// ```
pub struct DeckBuilder<'a> {
    catalog: &'a CardCatalog,
    characters: Vec<CardId>,
    potions: Vec<CardId>,
    buildings: Vec<CardId>,
}

impl<'a> DeckBuilder<'a> {
    /// Start an empty deck.
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self {
            catalog,
            characters: Vec::new(),
            potions: Vec::new(),
            buildings: Vec::new(),
        }
    }

    fn slots(&self, category: CardCategory) -> (&Vec<CardId>, usize) {
        match category {
            CardCategory::Character => (&self.characters, MAX_CHARACTERS),
            CardCategory::Potion => (&self.potions, MAX_POTIONS),
            CardCategory::Building => (&self.buildings, MAX_BUILDINGS),
        }
    }

    fn slots_mut(&mut self, category: CardCategory) -> &mut Vec<CardId> {
        match category {
            CardCategory::Character => &mut self.characters,
            CardCategory::Potion => &mut self.potions,
            CardCategory::Building => &mut self.buildings,
        }
    }

    /// Add a card to a category.
    ///
    /// Fails when the category is full or the catalog has no such card in
    /// that category. Adding a card that is already selected is a no-op.
    pub fn add(&mut self, id: &str, category: CardCategory) -> Result<(), DeckError> {
        let (selected, limit) = self.slots(category);
        if selected.len() >= limit {
            return Err(DeckError::CategoryFull { category, limit });
        }
        if self.catalog.category(id) != Some(category) {
            return Err(DeckError::UnknownCard {
                card: CardId::new(id),
                category,
            });
        }
        if selected.iter().any(|c| c.as_str() == id) {
            return Ok(());
        }
        self.slots_mut(category).push(CardId::new(id));
        Ok(())
    }

    /// Remove a card from a category. Unknown cards are ignored.
    pub fn remove(&mut self, id: &str, category: CardCategory) {
        self.slots_mut(category).retain(|c| c.as_str() != id);
    }

    /// Clear every selection.
    pub fn reset(&mut self) {
        self.characters.clear();
        self.potions.clear();
        self.buildings.clear();
    }

    /// Whether every category is exactly full.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.characters.len() == MAX_CHARACTERS
            && self.potions.len() == MAX_POTIONS
            && self.buildings.len() == MAX_BUILDINGS
    }

    /// Produce the deck, or report the first category with the wrong count.
    pub fn build(&self) -> Result<Deck, DeckError> {
        for category in [CardCategory::Character, CardCategory::Potion, CardCategory::Building] {
            let (selected, expected) = self.slots(category);
            if selected.len() != expected {
                return Err(DeckError::WrongCount {
                    category,
                    expected,
                    actual: selected.len(),
                });
            }
        }
        Ok(Deck {
            characters: self.characters.clone(),
            potions: self.potions.clone(),
            buildings: self.buildings.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::ids;

    #[test]
    fn test_duplicate_is_noop() {
        let catalog = CardCatalog::standard();
        let mut builder = DeckBuilder::new(&catalog);
        builder.add(ids::NEIL, CardCategory::Character).unwrap();
        builder.add(ids::NEIL, CardCategory::Character).unwrap();
        assert_eq!(builder.characters.len(), 1);
    }

    #[test]
    fn test_category_full() {
        let catalog = CardCatalog::standard();
        let mut builder = DeckBuilder::new(&catalog);
        builder.add(ids::CATAPULT, CardCategory::Building).unwrap();
        builder.add(ids::DUUS, CardCategory::Building).unwrap();
        assert_eq!(
            builder.add(ids::IRON_WALL, CardCategory::Building),
            Err(DeckError::CategoryFull {
                category: CardCategory::Building,
                limit: 2
            })
        );
    }

    #[test]
    fn test_remove() {
        let catalog = CardCatalog::standard();
        let mut builder = DeckBuilder::new(&catalog);
        builder.add(ids::HEAL, CardCategory::Potion).unwrap();
        builder.remove(ids::HEAL, CardCategory::Potion);
        assert!(builder.potions.is_empty());
    }
}
