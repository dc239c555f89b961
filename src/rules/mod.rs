//! The game and its turn engine.
//!
//! - `Game`: board, decks, players and turn order
//! - `take_turn`: dice, movement, landing, jail
//! - `TurnReport` / `TurnEvent`: what happened, for renderers and replays

pub mod game;
pub mod landing;
pub mod report;
pub mod turn;

pub use game::{Game, GameBuilder, MAX_PLAYERS, TOKENS};
pub use report::{GameResult, Movement, Standing, TurnEvent, TurnEvents, TurnReport};
