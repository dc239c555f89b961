//! The turn engine.
//!
//! ## States
//!
//! Each turn starts in one of two states, decided by the player's jail flag:
//!
//! - **Normal**: roll two dice, move, resolve the landing space. Doubles
//!   keep the dice with the same player (`TurnReport::extra_turn`);
//!   otherwise the next player is up.
//! - **Jailed**: count a jailed turn. At `max_jail_turns` the fine is
//!   charged, the player is released and the turn continues as a full
//!   Normal turn. Before that, doubles release the player and move them,
//!   but the dice always pass on afterwards.

use tracing::debug;

use super::game::Game;
use super::report::{Movement, TurnEvent, TurnEvents, TurnReport};
use crate::core::{DiceSource, GameError, GameRng, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnPhase {
    Normal,
    Jailed,
}

/// How a jailed turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JailOutcome {
    /// Fine paid; the player now takes a Normal turn.
    FinePaid,
    /// The turn is over, whether or not the player escaped.
    Over,
}

impl Game {
    /// Play the current player's turn with the game's own dice.
    pub fn take_turn(&mut self) -> Result<TurnReport, GameError> {
        let seed = self.rng.seed();
        let mut rng = std::mem::replace(&mut self.rng, GameRng::new(seed));
        let report = self.take_turn_with(&mut rng);
        self.rng = rng;
        report
    }

    /// Play the current player's turn with caller-supplied dice.
    pub fn take_turn_with<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> Result<TurnReport, GameError> {
        let id = self.current_player_id()?;
        let mut events = TurnEvents::new();

        let mut phase = if self.player(id)?.in_jail {
            TurnPhase::Jailed
        } else {
            TurnPhase::Normal
        };

        let extra_turn = loop {
            match phase {
                TurnPhase::Jailed => match self.jailed_turn(id, dice, &mut events)? {
                    JailOutcome::FinePaid => phase = TurnPhase::Normal,
                    JailOutcome::Over => {
                        self.next_player();
                        break false;
                    }
                },
                TurnPhase::Normal => {
                    let roll = dice.roll_pair(self.config.dice_sides);
                    debug!(player = %id, roll = %roll, "rolled");
                    events.push(TurnEvent::Rolled(roll));

                    self.advance_player(id, roll.total(), &mut events)?;
                    self.land(id, &mut events)?;

                    if roll.is_double() {
                        break true;
                    }
                    self.next_player();
                    break false;
                }
            }
        };

        self.turn_number += 1;
        let report = TurnReport {
            turn: self.turn_number,
            player: id,
            events,
            extra_turn,
        };
        self.history.push_back(report.clone());
        Ok(report)
    }

    fn jailed_turn<D: DiceSource + ?Sized>(
        &mut self,
        id: PlayerId,
        dice: &mut D,
        events: &mut TurnEvents,
    ) -> Result<JailOutcome, GameError> {
        let max_turns = self.config.max_jail_turns;
        let fine = self.config.jail_fine;

        let player = self.player_mut(id)?;
        player.jail_turns += 1;
        let attempt = player.jail_turns;
        events.push(TurnEvent::JailAttempt { attempt });

        if attempt >= max_turns {
            player.subtract_money(fine);
            player.in_jail = false;
            debug!(player = %id, fine, money = player.money, "paid jail fine");
            events.push(TurnEvent::PaidJailFine { amount: fine });
            return Ok(JailOutcome::FinePaid);
        }

        let roll = dice.roll_pair(self.config.dice_sides);
        debug!(player = %id, roll = %roll, attempt, "rolled in jail");
        events.push(TurnEvent::Rolled(roll));

        if roll.is_double() {
            self.player_mut(id)?.in_jail = false;
            debug!(player = %id, "escaped jail");
            events.push(TurnEvent::EscapedJail);
            self.advance_player(id, roll.total(), events)?;
            self.land(id, events)?;
        }

        Ok(JailOutcome::Over)
    }

    /// Move a player forward by `spaces`, paying the pass-GO bonus when the
    /// move wraps around the board.
    pub fn move_player(&mut self, id: PlayerId, spaces: usize) -> Result<Movement, GameError> {
        let mut events = TurnEvents::new();
        self.advance_player(id, spaces, &mut events)
    }

    pub(crate) fn advance_player(
        &mut self,
        id: PlayerId,
        spaces: usize,
        events: &mut TurnEvents,
    ) -> Result<Movement, GameError> {
        let len = self.board.len();
        let bonus = self.config.pass_go_bonus;

        let player = self.player_mut(id)?;
        let from = player.position;
        let to = (from + spaces % len) % len;
        let passed_go = to < from;
        if passed_go {
            player.add_money(bonus);
        }
        player.move_to_position(to);

        debug!(player = %id, from, to, passed_go, "moved");
        let movement = Movement { from, to, passed_go };
        events.push(TurnEvent::Moved(movement));
        Ok(movement)
    }

    /// Move a player backwards. Never pays the pass-GO bonus.
    pub(crate) fn retreat_player(
        &mut self,
        id: PlayerId,
        spaces: usize,
        events: &mut TurnEvents,
    ) -> Result<Movement, GameError> {
        let len = self.board.len();
        let player = self.player_mut(id)?;
        let from = player.position;
        let to = (from + len - spaces % len) % len;
        player.move_to_position(to);

        debug!(player = %id, from, to, "moved back");
        let movement = Movement { from, to, passed_go: false };
        events.push(TurnEvent::Moved(movement));
        Ok(movement)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{DiceRoll, GameRng, JailCounterPolicy, LoadedDice, PlayerId, RulesConfig};
    use crate::rules::{Game, GameBuilder, TurnEvent};

    fn game_with(config: RulesConfig) -> Game {
        let mut game = GameBuilder::new()
            .config(config)
            .player("Kelly")
            .player("Carissa")
            .build(42)
            .unwrap();
        game.start_game();
        game
    }

    fn dice(rolls: &[(u8, u8)]) -> LoadedDice {
        LoadedDice::new(rolls.iter().map(|&(a, b)| DiceRoll::new(a, b)), GameRng::new(0))
    }

    const KELLY: PlayerId = PlayerId::new(0);
    const CARISSA: PlayerId = PlayerId::new(1);

    #[test]
    fn test_normal_turn_moves_and_passes_dice() {
        let mut game = game_with(RulesConfig::default());
        // 2 + 4 = 6: Teahupo'o, bought for 100
        let report = game.take_turn_with(&mut dice(&[(2, 4)])).unwrap();

        assert_eq!(report.player, KELLY);
        assert!(!report.extra_turn);
        assert_eq!(game.player(KELLY).unwrap().position, 6);
        assert_eq!(game.player(KELLY).unwrap().money, 1400);
        assert_eq!(game.current_player_id().unwrap(), CARISSA);
    }

    #[test]
    fn test_doubles_keep_the_dice() {
        let mut game = game_with(RulesConfig::default());
        let report = game.take_turn_with(&mut dice(&[(1, 1)])).unwrap();

        assert!(report.extra_turn);
        assert_eq!(game.current_player_id().unwrap(), KELLY);
        // Exactly one roll per call
        assert_eq!(report.rolls().count(), 1);
    }

    #[test]
    fn test_pass_go_bonus() {
        let mut game = game_with(RulesConfig::default());
        game.player_mut(KELLY).unwrap().position = 38;

        let movement = game.move_player(KELLY, 5).unwrap();
        assert_eq!(movement.to, 3);
        assert!(movement.passed_go);
        assert_eq!(game.player(KELLY).unwrap().money, 1700);
    }

    #[test]
    fn test_landing_exactly_on_go_pays_once() {
        let mut game = game_with(RulesConfig::default());
        game.player_mut(KELLY).unwrap().position = 36;

        // 36 + 4 = 40 -> 0: bonus for the wrap, nothing extra for the square
        game.take_turn_with(&mut dice(&[(1, 3)])).unwrap();
        assert_eq!(game.player(KELLY).unwrap().position, 0);
        assert_eq!(game.player(KELLY).unwrap().money, 1700);
    }

    #[test]
    fn test_go_to_jail_square() {
        let mut game = game_with(RulesConfig::default());
        game.player_mut(KELLY).unwrap().position = 25;

        let report = game.take_turn_with(&mut dice(&[(2, 3)])).unwrap();
        let kelly = game.player(KELLY).unwrap();
        assert!(kelly.in_jail);
        assert_eq!(kelly.position, 10);
        assert!(report.has(|e| matches!(e, TurnEvent::SentToJail)));
    }

    #[test]
    fn test_jail_escape_with_doubles_passes_dice() {
        let mut game = game_with(RulesConfig::default());
        game.send_to_jail(KELLY).unwrap();

        // 10 + 4 = 14: Snapper Rocks
        let report = game.take_turn_with(&mut dice(&[(2, 2)])).unwrap();
        let kelly = game.player(KELLY).unwrap();

        assert!(!kelly.in_jail);
        assert_eq!(kelly.position, 14);
        assert!(!report.extra_turn);
        assert!(report.has(|e| matches!(e, TurnEvent::EscapedJail)));
        assert_eq!(game.current_player_id().unwrap(), CARISSA);
    }

    #[test]
    fn test_jail_without_doubles_stays() {
        let mut game = game_with(RulesConfig::default());
        game.send_to_jail(KELLY).unwrap();

        game.take_turn_with(&mut dice(&[(1, 2)])).unwrap();
        let kelly = game.player(KELLY).unwrap();
        assert!(kelly.in_jail);
        assert_eq!(kelly.position, 10);
        assert_eq!(kelly.jail_turns, 1);
        assert_eq!(game.current_player_id().unwrap(), CARISSA);
    }

    #[test]
    fn test_third_jail_turn_pays_fine_and_plays_on() {
        let mut game = game_with(RulesConfig::default());
        game.send_to_jail(KELLY).unwrap();
        game.player_mut(KELLY).unwrap().jail_turns = 2;

        // No roll in jail: the fine is paid, then a Normal turn rolls 3+4 to Community Chest.
        let report = game.take_turn_with(&mut dice(&[(3, 4)])).unwrap();
        let kelly = game.player(KELLY).unwrap();

        assert!(!kelly.in_jail);
        assert_eq!(kelly.money, 1450);
        assert_eq!(kelly.position, 17);
        assert_eq!(report.rolls().count(), 1);
        assert!(report.has(|e| matches!(e, TurnEvent::PaidJailFine { amount: 50 })));
        assert_eq!(game.current_player_id().unwrap(), CARISSA);
    }

    #[test]
    fn test_forced_release_then_doubles_keeps_dice() {
        let mut game = game_with(RulesConfig::default());
        game.send_to_jail(KELLY).unwrap();
        game.player_mut(KELLY).unwrap().jail_turns = 2;

        let report = game.take_turn_with(&mut dice(&[(5, 5)])).unwrap();
        assert!(report.extra_turn);
        assert_eq!(game.current_player_id().unwrap(), KELLY);
    }

    #[test]
    fn test_zero_max_jail_turns_does_not_recurse() {
        let config = RulesConfig::default().with_max_jail_turns(0);
        let mut game = game_with(config);
        game.send_to_jail(KELLY).unwrap();

        let report = game.take_turn_with(&mut dice(&[(1, 2)])).unwrap();
        assert!(!game.player(KELLY).unwrap().in_jail);
        assert_eq!(game.player(KELLY).unwrap().position, 13);
        assert_eq!(report.rolls().count(), 1);
    }

    /// Serve a full sentence ending in the fine, then go back to jail
    /// holding the dice.
    fn jail_twice(config: RulesConfig) -> Game {
        let mut game = game_with(config);
        game.send_to_jail(KELLY).unwrap();

        let mut dice = dice(&[(1, 2); 6]);
        for _ in 0..6 {
            game.take_turn_with(&mut dice).unwrap();
        }
        let kelly = game.player(KELLY).unwrap();
        assert!(!kelly.in_jail);
        assert_eq!(kelly.jail_turns, 3);

        game.send_to_jail(KELLY).unwrap();
        assert_eq!(game.current_player_id().unwrap(), KELLY);
        game
    }

    #[test]
    fn test_second_stay_pays_at_once_by_default() {
        let mut game = jail_twice(RulesConfig::default());

        let report = game.take_turn_with(&mut dice(&[(1, 2)])).unwrap();

        assert_eq!(report.events[0], TurnEvent::JailAttempt { attempt: 4 });
        assert!(report.has(|e| matches!(e, TurnEvent::PaidJailFine { amount: 50 })));
        let kelly = game.player(KELLY).unwrap();
        assert!(!kelly.in_jail);
        assert_eq!(kelly.position, 13);
    }

    #[test]
    fn test_second_stay_starts_over_with_reset_policy() {
        let config = RulesConfig::default().with_jail_counter_policy(JailCounterPolicy::ResetOnEntry);
        let mut game = jail_twice(config);
        assert_eq!(game.player(KELLY).unwrap().jail_turns, 0);

        let report = game.take_turn_with(&mut dice(&[(1, 2)])).unwrap();

        assert_eq!(report.events[0], TurnEvent::JailAttempt { attempt: 1 });
        assert_eq!(report.rolls().count(), 1);
        assert!(!report.has(|e| matches!(e, TurnEvent::PaidJailFine { .. })));
        let kelly = game.player(KELLY).unwrap();
        assert!(kelly.in_jail);
        assert_eq!(kelly.position, 10);
        assert_eq!(game.current_player_id().unwrap(), CARISSA);
    }

    #[test]
    fn test_history_records_each_turn() {
        let mut game = game_with(RulesConfig::default());
        game.take_turn_with(&mut dice(&[(1, 2), (2, 3)])).unwrap();
        game.take_turn_with(&mut dice(&[(2, 3)])).unwrap();

        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[0].player, KELLY);
        assert_eq!(game.history()[1].player, CARISSA);
    }

    #[test]
    fn test_take_turn_without_players() {
        let mut game = Game::new(RulesConfig::default(), 3).unwrap();
        assert_eq!(game.take_turn(), Err(crate::core::GameError::NoPlayers));
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let mut a = game_with(RulesConfig::default());
        let mut b = game_with(RulesConfig::default());

        for _ in 0..50 {
            assert_eq!(a.take_turn().unwrap(), b.take_turn().unwrap());
        }
        assert_eq!(a.players(), b.players());
    }

    #[test]
    fn test_take_turn_continues_the_game_rng() {
        let mut a = game_with(RulesConfig::default());
        let mut b = a.clone();
        let mut rng = b.rng.clone();

        for _ in 0..10 {
            assert_eq!(a.take_turn().unwrap(), b.take_turn_with(&mut rng).unwrap());
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_retreat_wraps_without_bonus() {
        let mut game = game_with(RulesConfig::default());
        game.player_mut(KELLY).unwrap().position = 1;

        let mut events = crate::rules::TurnEvents::new();
        let movement = game.retreat_player(KELLY, 3, &mut events).unwrap();
        assert_eq!(movement.to, 38);
        assert!(!movement.passed_go);
        assert_eq!(game.player(KELLY).unwrap().money, 1500);
    }
}
