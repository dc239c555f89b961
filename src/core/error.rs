//! Engine errors.
//!
//! These signal misuse of the API: asking for a player that does not
//! exist, taking a turn with an empty table, looking past the end of the
//! board. Rule outcomes such as being unable to afford a property are not
//! errors; they show up as `TurnEvent`s.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardCategory;

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no players have been added to the game")]
    NoPlayers,

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("at most {max} players are supported")]
    TooManyPlayers { max: usize },

    #[error("position {position} is outside the board (length {len})")]
    PositionOutOfBounds { position: usize, len: usize },

    #[error("position {0} is not a property")]
    NotAProperty(usize),

    #[error("the {0} deck has no cards")]
    EmptyDeck(CardCategory),

    #[error("the board has no spaces")]
    EmptyBoard,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::UnknownPlayer(PlayerId::new(4)).to_string(),
            "Player 4 is not seated at this table"
        );
        assert_eq!(
            GameError::PositionOutOfBounds { position: 40, len: 40 }.to_string(),
            "position 40 is outside the board (length 40)"
        );
        assert_eq!(
            GameError::EmptyDeck(CardCategory::LuckyDraw).to_string(),
            "the Lucky Draw deck has no cards"
        );
    }
}
