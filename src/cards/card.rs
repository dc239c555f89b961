//! Card definitions.

use serde::{Deserialize, Serialize};

use super::effect::CardEffect;

/// Which deck a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Chance,
    LuckyDraw,
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCategory::Chance => f.write_str("Chance"),
            CardCategory::LuckyDraw => f.write_str("Lucky Draw"),
        }
    }
}

/// A drawable card: flavour text plus the effect it applies.
///
/// ```
/// use surfopoly::cards::{Card, CardCategory, CardEffect};
///
/// let card = Card::new("Win local surf competition. Collect $100", CardCategory::LuckyDraw, CardEffect::Collect(100));
/// assert_eq!(card.category, CardCategory::LuckyDraw);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub description: String,
    pub category: CardCategory,
    pub effect: CardEffect,
}

impl Card {
    /// Create a card.
    pub fn new(description: impl Into<String>, category: CardCategory, effect: CardEffect) -> Self {
        Self {
            description: description.into(),
            category,
            effect,
        }
    }

    /// Create a Chance card.
    pub fn chance(description: impl Into<String>, effect: CardEffect) -> Self {
        Self::new(description, CardCategory::Chance, effect)
    }

    /// Create a Lucky Draw card.
    pub fn lucky_draw(description: impl Into<String>, effect: CardEffect) -> Self {
        Self::new(description, CardCategory::LuckyDraw, effect)
    }
}
