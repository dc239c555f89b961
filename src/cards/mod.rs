//! Card system: categories, effects and cyclic decks.
//!
//! ## Key Types
//!
//! - `CardCategory`: Chance or Lucky Draw
//! - `CardEffect`: tagged description of what a card does
//! - `Card`: description, category and effect
//! - `Deck`: circular queue, drawn from the front and requeued at the back

pub mod card;
pub mod catalog;
pub mod deck;
pub mod effect;

pub use card::{Card, CardCategory};
pub use deck::Deck;
pub use effect::CardEffect;
