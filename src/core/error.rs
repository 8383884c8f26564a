//! Error types for fallible match operations.
//!
//! None of these are fatal to a running match: deploy and potion errors are
//! rejections the caller may retry, ability errors are logged by the death
//! pass and skipped.

use thiserror::Error;

use crate::abilities::AbilityId;
use crate::cards::{CardCategory, CardId};

/// Why a deploy request was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DeployError {
    #[error("insufficient resource: need {needed}, have {available}")]
    InsufficientResource { needed: u32, available: u32 },

    #[error("lane {lane} does not exist (match has {lanes} lanes)")]
    InvalidLane { lane: usize, lanes: usize },

    #[error("unknown card `{card}`")]
    UnknownCard { card: CardId },

    #[error("card `{card}` is not in the deck")]
    NotInDeck { card: CardId },

    #[error("match is already over")]
    MatchOver,
}

/// Why a registered ability could not run.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AbilityError {
    #[error("ability {ability} requires parameter `{key}`")]
    MissingParameter { ability: AbilityId, key: &'static str },

    #[error("ability {ability} has invalid parameter `{key}`: {reason}")]
    InvalidParameter {
        ability: AbilityId,
        key: &'static str,
        reason: String,
    },
}

/// Why a potion cast was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PotionError {
    #[error("potion on cooldown for another {remaining_ms} ms")]
    OnCooldown { remaining_ms: f64 },

    #[error("lane {lane} does not exist (match has {lanes} lanes)")]
    InvalidLane { lane: usize, lanes: usize },

    #[error("unknown potion `{potion}`")]
    UnknownPotion { potion: CardId },

    #[error("potion `{potion}` is not in the deck")]
    NotInDeck { potion: CardId },

    #[error("match is already over")]
    MatchOver,
}

/// Why a deck could not be assembled.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DeckError {
    #[error("unknown {category} card `{card}`")]
    UnknownCard { card: CardId, category: CardCategory },

    #[error("{category} slots are full ({limit})")]
    CategoryFull { category: CardCategory, limit: usize },

    #[error("deck needs exactly {expected} {category} cards, has {actual}")]
    WrongCount {
        category: CardCategory,
        expected: usize,
        actual: usize,
    },
}

/// A card the scripted opponent depends on is missing from the catalog.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("AI roster card `{card}` is missing from the catalog")]
pub struct RosterError {
    pub card: CardId,
}
