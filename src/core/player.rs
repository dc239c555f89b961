//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 256 players (ids 0 to 255).
//!
//! ## Player
//!
//! A surfer on the board: money, position, jail status and the
//! board positions of the properties they own.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Player identifier supporting up to 256 players (ids 0 to 255).
///
/// Player indices are 0-based: the first player added is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use surfopoly::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize + 1)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player in the game.
///
/// Money is signed: rent and jail fines are charged unconditionally and
/// may leave a player in debt. Players are never removed; a balance at or
/// below zero only counts them out for the game-over check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Display token assigned at registration.
    pub token: String,
    /// Current balance.
    pub money: i64,
    /// Board index, always `< board.len()`.
    pub position: usize,
    /// Whether the player is serving jail time.
    pub in_jail: bool,
    /// Jail turns counted so far.
    pub jail_turns: u32,
    /// Board positions of owned properties, in purchase order.
    pub properties: SmallVec<[usize; 8]>,
}

impl Player {
    /// Create a player on GO with the given balance.
    pub fn new(name: impl Into<String>, token: impl Into<String>, money: i64) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            money,
            position: 0,
            in_jail: false,
            jail_turns: 0,
            properties: SmallVec::new(),
        }
    }

    /// Add to the balance.
    pub fn add_money(&mut self, amount: i64) {
        self.money += amount;
    }

    /// Subtract from the balance. No floor: the result may be negative.
    pub fn subtract_money(&mut self, amount: i64) {
        self.money -= amount;
    }

    /// Place the player on a board index.
    pub fn move_to_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Record ownership of the property at `position`.
    pub fn add_property(&mut self, position: usize) {
        if !self.properties.contains(&position) {
            self.properties.push(position);
        }
    }

    /// Check whether the player owns the property at `position`.
    #[must_use]
    pub fn owns(&self, position: usize) -> bool {
        self.properties.contains(&position)
    }

    /// Still in the running: strictly positive money.
    #[must_use]
    pub fn is_solvent(&self) -> bool {
        self.money > 0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ${} @{:02}", self.token, self.name, self.money, self.position)?;
        if self.in_jail {
            write!(f, " (J)")?;
        }
        Ok(())
    }
}
