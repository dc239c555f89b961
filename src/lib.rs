//! # surfopoly
//!
//! Turn-resolution engine for Surfopoly, a surf-themed take on the classic
//! property trading board game.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seeded `GameRng` drives every dice roll and
//!    deck shuffle, so a seed replays a whole game.
//!
//! 2. **Rules are data**: Money amounts, jail rules, dice and special
//!    square positions come from `RulesConfig`; card effects are a tagged
//!    enum rather than callbacks.
//!
//! 3. **Misuse fails, rules don't**: Bad player ids or positions are
//!    `GameError`s. Not affording a property, or paying rent into debt, is
//!    ordinary play and shows up as a `TurnEvent`.
//!
//! ## Modules
//!
//! - `core`: Player ids and state, RNG and dice, configuration, errors
//! - `board`: Properties, special squares and the fixed board layout
//! - `cards`: Card effects and cyclic decks
//! - `rules`: The game aggregate and turn engine
//!
//! ## Example
//!
//! ```
//! use surfopoly::{GameBuilder, RulesConfig};
//!
//! let mut game = GameBuilder::new()
//!     .config(RulesConfig::default())
//!     .player("Kelly")
//!     .player("Layne")
//!     .build(7)
//!     .unwrap();
//!
//! game.start_game();
//! for _ in 0..20 {
//!     if game.is_game_over() {
//!         break;
//!     }
//!     game.take_turn().unwrap();
//! }
//! assert_eq!(game.history().len() as u32, game.turn_number());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceRoll, DiceSource, GameError, GameRng, JailCounterPolicy, LoadedDice, Player, PlayerId, RulesConfig,
};

pub use crate::board::{Board, ColorGroup, Property, PropertyKind, Space, SpecialSquare};

pub use crate::cards::{Card, CardCategory, CardEffect, Deck};

pub use crate::rules::{Game, GameBuilder, GameResult, Movement, Standing, TurnEvent, TurnEvents, TurnReport};
