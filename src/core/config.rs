//! Game configuration.
//!
//! `RulesConfig` collects every tunable rule: money amounts, jail rules,
//! dice, and where the fixed special squares sit. Defaults give the
//! standard Surfopoly rules.
//!
//! ```
//! use surfopoly::core::RulesConfig;
//!
//! let config = RulesConfig::default()
//!     .with_starting_money(2000)
//!     .with_max_jail_turns(2);
//!
//! assert_eq!(config.starting_money, 2000);
//! assert_eq!(config.pass_go_bonus, 200);
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// What happens to a player's jail-turn counter when they are sent to jail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailCounterPolicy {
    /// Keep counting across stays. A player jailed a second time after
    /// serving a full sentence pays the fine on their next turn.
    #[default]
    Accumulate,
    /// Start every stay from zero.
    ResetOnEntry,
}

/// Rule configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Money each player starts with.
    pub starting_money: i64,

    /// Paid whenever a move wraps past GO.
    pub pass_go_bonus: i64,

    /// Paid on forced release after `max_jail_turns` jailed turns.
    pub jail_fine: i64,

    /// Jailed turns before the fine is forced.
    pub max_jail_turns: u32,

    /// Faces per die. Two dice are always rolled.
    pub dice_sides: u8,

    /// Index of the jail square; players sent to jail are placed here.
    pub jail_position: usize,

    /// Index of free parking.
    pub free_parking_position: usize,

    /// Index of the go-to-jail square.
    pub go_to_jail_position: usize,

    /// Jail-turn counter handling on entry.
    pub jail_counter_policy: JailCounterPolicy,

    /// When set, chance, lucky draw and community chest squares draw a
    /// card and income tax squares charge `income_tax`. Off by default,
    /// which leaves those squares without effect.
    pub card_squares_active: bool,

    /// Charged on income tax squares when `card_squares_active` is set.
    pub income_tax: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_money: 1500,
            pass_go_bonus: 200,
            jail_fine: 50,
            max_jail_turns: 3,
            dice_sides: 6,
            jail_position: 10,
            free_parking_position: 20,
            go_to_jail_position: 30,
            jail_counter_policy: JailCounterPolicy::Accumulate,
            card_squares_active: false,
            income_tax: 200,
        }
    }
}

impl RulesConfig {
    /// Set the starting money.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the pass-GO bonus.
    #[must_use]
    pub fn with_pass_go_bonus(mut self, bonus: i64) -> Self {
        self.pass_go_bonus = bonus;
        self
    }

    /// Set the jail fine.
    #[must_use]
    pub fn with_jail_fine(mut self, fine: i64) -> Self {
        self.jail_fine = fine;
        self
    }

    /// Set how many jailed turns pass before the fine is forced.
    #[must_use]
    pub fn with_max_jail_turns(mut self, turns: u32) -> Self {
        self.max_jail_turns = turns;
        self
    }

    /// Set the number of faces per die.
    #[must_use]
    pub fn with_dice_sides(mut self, sides: u8) -> Self {
        self.dice_sides = sides;
        self
    }

    /// Set the jail, free parking and go-to-jail indices.
    #[must_use]
    pub fn with_special_positions(mut self, jail: usize, free_parking: usize, go_to_jail: usize) -> Self {
        self.jail_position = jail;
        self.free_parking_position = free_parking;
        self.go_to_jail_position = go_to_jail;
        self
    }

    /// Set the jail-turn counter policy.
    #[must_use]
    pub fn with_jail_counter_policy(mut self, policy: JailCounterPolicy) -> Self {
        self.jail_counter_policy = policy;
        self
    }

    /// Make card and tax squares take effect.
    #[must_use]
    pub fn with_card_squares(mut self, active: bool) -> Self {
        self.card_squares_active = active;
        self
    }

    /// Set the income tax amount.
    #[must_use]
    pub fn with_income_tax(mut self, tax: i64) -> Self {
        self.income_tax = tax;
        self
    }

    /// Check the configuration against a board of `board_len` spaces.
    pub fn validate(&self, board_len: usize) -> Result<(), GameError> {
        if board_len == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.dice_sides == 0 {
            return Err(GameError::InvalidConfig("dice need at least one face".into()));
        }
        let specials = [
            ("jail_position", self.jail_position),
            ("free_parking_position", self.free_parking_position),
            ("go_to_jail_position", self.go_to_jail_position),
        ];
        for (name, position) in specials {
            if position >= board_len {
                return Err(GameError::InvalidConfig(format!(
                    "{name} {position} is outside a board of {board_len} spaces"
                )));
            }
        }
        Ok(())
    }
}
