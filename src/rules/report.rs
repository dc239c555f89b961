//! What happened during a turn, and how the game ended.
//!
//! Every rule outcome, including the silent ones like not being able to
//! afford a property, is recorded as a `TurnEvent` so a renderer can
//! replay the turn without re-deriving it from state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::SpecialSquare;
use crate::cards::CardCategory;
use crate::core::{DiceRoll, PlayerId};

/// A single move along the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub from: usize,
    pub to: usize,
    /// Whether the move wrapped past GO and paid the bonus.
    pub passed_go: bool,
}

/// One step of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    Rolled(DiceRoll),
    Moved(Movement),
    Purchased { position: usize, price: i64 },
    CannotAfford { position: usize, price: i64 },
    PaidRent { position: usize, owner: PlayerId, amount: i64 },
    OwnProperty { position: usize },
    LandedOnSpecial { position: usize, square: SpecialSquare },
    SentToJail,
    JailAttempt { attempt: u32 },
    PaidJailFine { amount: i64 },
    EscapedJail,
    DrewCard { category: CardCategory, description: String },
    PaidTax { amount: i64 },
}

/// Events of one turn, in order.
pub type TurnEvents = SmallVec<[TurnEvent; 4]>;

/// Result of a single `take_turn` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn counter, starting at 1.
    pub turn: u32,
    /// Who acted.
    pub player: PlayerId,
    pub events: TurnEvents,
    /// The same player goes again (doubles outside jail).
    pub extra_turn: bool,
}

impl TurnReport {
    /// Dice rolled during the turn, in order.
    pub fn rolls(&self) -> impl Iterator<Item = DiceRoll> + '_ {
        self.events.iter().filter_map(|event| match event {
            TurnEvent::Rolled(roll) => Some(*roll),
            _ => None,
        })
    }

    /// Moves made during the turn, in order.
    pub fn moves(&self) -> impl Iterator<Item = Movement> + '_ {
        self.events.iter().filter_map(|event| match event {
            TurnEvent::Moved(movement) => Some(*movement),
            _ => None,
        })
    }

    /// Whether any event matches.
    pub fn has(&self, predicate: impl Fn(&TurnEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The only player left with money.
    Winner(PlayerId),
    /// Nobody has money left.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// A row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub money: i64,
    /// Money plus the purchase price of every owned property.
    pub net_worth: i64,
}
