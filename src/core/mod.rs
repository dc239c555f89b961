//! Core engine types: players, RNG and dice, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{JailCounterPolicy, RulesConfig};
pub use error::GameError;
pub use player::{Player, PlayerId};
pub use rng::{DiceRoll, DiceSource, GameRng, LoadedDice};
