//! Card effect descriptors.
//!
//! Effects are plain data. The game resolves them against the drawing
//! player (see `Game::apply_card_effect`), so cards can be compared,
//! serialized and listed without touching game state.

use serde::{Deserialize, Serialize};

/// What a card does to the player who draws it.
///
/// ## Money Effects
///
/// - `Collect`: bank pays the player
/// - `Pay`: player pays the bank (may go negative)
/// - `CollectFromEachPlayer` / `PayEachPlayer`: transfers with every
///   other player at the table
///
/// ## Movement Effects
///
/// - `AdvanceTo`: move forward to a position, collecting the pass-GO
///   bonus if the move wraps. The destination is not resolved as a landing.
/// - `MoveBack`: move backwards, never collecting the bonus
/// - `GoToJail`: straight to jail
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    Collect(i64),
    Pay(i64),
    CollectFromEachPlayer(i64),
    PayEachPlayer(i64),
    AdvanceTo(usize),
    MoveBack(usize),
    GoToJail,
}

impl CardEffect {
    /// Net change to the drawing player's money, when it does not depend
    /// on the table.
    #[must_use]
    pub fn money_delta(&self) -> Option<i64> {
        match self {
            CardEffect::Collect(amount) => Some(*amount),
            CardEffect::Pay(amount) => Some(-amount),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardEffect::Collect(amount) => write!(f, "+${amount}"),
            CardEffect::Pay(amount) => write!(f, "-${amount}"),
            CardEffect::CollectFromEachPlayer(amount) => write!(f, "+${amount} from each player"),
            CardEffect::PayEachPlayer(amount) => write!(f, "-${amount} to each player"),
            CardEffect::AdvanceTo(position) => write!(f, "advance to {position}"),
            CardEffect::MoveBack(steps) => write!(f, "back {steps}"),
            CardEffect::GoToJail => f.write_str("go to jail"),
        }
    }
}
