//! Cyclic card decks.
//!
//! A deck is shuffled once when it is filled. Drawing takes the front card
//! and puts it straight back at the bottom, so a deck never runs out and is
//! never reshuffled.

use std::collections::VecDeque;

use super::card::{Card, CardCategory};
use crate::core::{GameError, GameRng};

/// A circular queue of cards of one category.
///
/// ## Example
///
/// ```
/// use surfopoly::cards::{Card, CardCategory, CardEffect, Deck};
///
/// let mut deck = Deck::new(CardCategory::Chance);
/// deck.fill([
///     Card::chance("A", CardEffect::Collect(10)),
///     Card::chance("B", CardEffect::Pay(10)),
/// ]);
///
/// assert_eq!(deck.draw().unwrap().description, "A");
/// assert_eq!(deck.draw().unwrap().description, "B");
/// assert_eq!(deck.draw().unwrap().description, "A");
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    category: CardCategory,
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(category: CardCategory) -> Self {
        Self {
            category,
            cards: VecDeque::new(),
        }
    }

    /// The category of cards this deck holds.
    #[must_use]
    pub fn category(&self) -> CardCategory {
        self.category
    }

    /// Replace the contents with `cards`, in the given order.
    pub fn fill(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.clear();
        self.cards.extend(cards);
    }

    /// Shuffle the deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Draw the front card and requeue it at the back.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.cards.pop_front().ok_or(GameError::EmptyDeck(self.category))?;
        self.cards.push_back(card.clone());
        Ok(card)
    }

    /// The card that would be drawn next.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
