//! Landing resolution: properties, special squares and cards.
//!
//! Rule outcomes never fail. A player who cannot afford a property simply
//! does not buy it; rent, fines, taxes and card payments are charged in
//! full even when they push a balance below zero.

use tracing::debug;

use super::game::Game;
use super::report::{TurnEvent, TurnEvents};
use crate::board::{Space, SpecialSquare};
use crate::cards::{Card, CardCategory, CardEffect};
use crate::core::{GameError, JailCounterPolicy, PlayerId};

impl Game {
    /// Resolve the space a player is standing on.
    pub fn resolve_landing(&mut self, id: PlayerId) -> Result<TurnEvents, GameError> {
        let mut events = TurnEvents::new();
        self.land(id, &mut events)?;
        Ok(events)
    }

    pub(crate) fn land(&mut self, id: PlayerId, events: &mut TurnEvents) -> Result<(), GameError> {
        let position = self.player(id)?.position;

        let (price, rent, owner) = match self.board.space(position)? {
            Space::Special(square) => {
                let square = *square;
                return self.land_on_special(id, position, square, events);
            }
            Space::Property(property) => (property.price, property.rent(), property.owner),
        };

        match owner {
            None => {
                if self.player(id)?.money >= price {
                    self.buy(id, position, price, events)?;
                } else {
                    debug!(player = %id, position, price, "cannot afford property");
                    events.push(TurnEvent::CannotAfford { position, price });
                }
            }
            Some(owner) if owner == id => {
                events.push(TurnEvent::OwnProperty { position });
            }
            Some(owner) => {
                self.player_mut(id)?.subtract_money(rent);
                self.player_mut(owner)?.add_money(rent);
                debug!(player = %id, owner = %owner, position, rent, "paid rent");
                events.push(TurnEvent::PaidRent {
                    position,
                    owner,
                    amount: rent,
                });
            }
        }
        Ok(())
    }

    fn land_on_special(
        &mut self,
        id: PlayerId,
        position: usize,
        square: SpecialSquare,
        events: &mut TurnEvents,
    ) -> Result<(), GameError> {
        events.push(TurnEvent::LandedOnSpecial { position, square });

        if position == self.config.go_to_jail_position {
            return self.jail(id, events);
        }
        if position == 0
            || position == self.config.jail_position
            || position == self.config.free_parking_position
            || !self.config.card_squares_active
        {
            return Ok(());
        }

        if let Some(category) = square.deck() {
            self.draw_into(id, category, events)?;
        } else if square == SpecialSquare::IncomeTax {
            let tax = self.config.income_tax;
            self.player_mut(id)?.subtract_money(tax);
            debug!(player = %id, tax, "paid income tax");
            events.push(TurnEvent::PaidTax { amount: tax });
        }
        Ok(())
    }

    /// Buy the unowned property at `position` for a player.
    ///
    /// Returns `Ok(false)` without changing anything when the property is
    /// already owned or the player cannot afford it.
    pub fn purchase_property(&mut self, id: PlayerId, position: usize) -> Result<bool, GameError> {
        let property = self
            .board
            .property(position)?
            .ok_or(GameError::NotAProperty(position))?;
        let price = property.price;
        if !property.is_unowned() || self.player(id)?.money < price {
            return Ok(false);
        }

        let mut events = TurnEvents::new();
        self.buy(id, position, price, &mut events)?;
        Ok(true)
    }

    fn buy(&mut self, id: PlayerId, position: usize, price: i64, events: &mut TurnEvents) -> Result<(), GameError> {
        let player = self.player_mut(id)?;
        player.subtract_money(price);
        player.add_property(position);
        if let Some(property) = self.board.property_mut(position)? {
            property.owner = Some(id);
        }
        debug!(player = %id, position, price, "bought property");
        events.push(TurnEvent::Purchased { position, price });
        Ok(())
    }

    /// Send a player straight to jail. No pass-GO bonus is paid.
    pub fn send_to_jail(&mut self, id: PlayerId) -> Result<(), GameError> {
        let mut events = TurnEvents::new();
        self.jail(id, &mut events)
    }

    fn jail(&mut self, id: PlayerId, events: &mut TurnEvents) -> Result<(), GameError> {
        let jail_position = self.config.jail_position;
        let policy = self.config.jail_counter_policy;

        let player = self.player_mut(id)?;
        player.in_jail = true;
        player.move_to_position(jail_position);
        if policy == JailCounterPolicy::ResetOnEntry {
            player.jail_turns = 0;
        }
        debug!(player = %id, jail_turns = player.jail_turns, "sent to jail");
        events.push(TurnEvent::SentToJail);
        Ok(())
    }

    /// Draw the top card of a deck for the current player and apply it.
    ///
    /// The card goes back to the bottom of its deck and is returned.
    pub fn draw_card(&mut self, category: CardCategory) -> Result<Card, GameError> {
        let id = self.current_player_id()?;
        let mut events = TurnEvents::new();
        self.draw_into(id, category, &mut events)
    }

    fn draw_into(&mut self, id: PlayerId, category: CardCategory, events: &mut TurnEvents) -> Result<Card, GameError> {
        let card = self.deck_mut(category).draw()?;
        debug!(player = %id, category = %category, card = %card.description, "drew card");
        events.push(TurnEvent::DrewCard {
            category,
            description: card.description.clone(),
        });
        self.resolve_effect(id, &card.effect, events)?;
        Ok(card)
    }

    /// Apply a card effect to a player.
    pub fn apply_card_effect(&mut self, id: PlayerId, effect: &CardEffect) -> Result<TurnEvents, GameError> {
        let mut events = TurnEvents::new();
        self.resolve_effect(id, effect, &mut events)?;
        Ok(events)
    }

    fn resolve_effect(&mut self, id: PlayerId, effect: &CardEffect, events: &mut TurnEvents) -> Result<(), GameError> {
        // Fail on an unknown player before touching anyone else's balance.
        self.player(id)?;

        match *effect {
            CardEffect::Collect(amount) => self.player_mut(id)?.add_money(amount),
            CardEffect::Pay(amount) => self.player_mut(id)?.subtract_money(amount),
            CardEffect::CollectFromEachPlayer(amount) => self.transfer_with_table(id, amount),
            CardEffect::PayEachPlayer(amount) => self.transfer_with_table(id, -amount),
            CardEffect::AdvanceTo(destination) => {
                self.board.space(destination)?;
                let len = self.board.len();
                let from = self.player(id)?.position;
                let steps = (destination + len - from) % len;
                self.advance_player(id, steps, events)?;
            }
            CardEffect::MoveBack(steps) => {
                self.retreat_player(id, steps, events)?;
            }
            CardEffect::GoToJail => self.jail(id, events)?,
        }
        Ok(())
    }

    /// Every other player pays `amount` to `id` (negative: `id` pays them).
    fn transfer_with_table(&mut self, id: PlayerId, amount: i64) {
        let mut collected = 0;
        for (index, other) in self.players.iter_mut().enumerate() {
            if index != id.index() {
                other.subtract_money(amount);
                collected += amount;
            }
        }
        self.players[id.index()].add_money(collected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, ColorGroup, Property};
    use crate::core::RulesConfig;
    use crate::rules::GameBuilder;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);
    const C: PlayerId = PlayerId::new(2);

    fn game() -> Game {
        GameBuilder::new().player("a").player("b").player("c").build(1).unwrap()
    }

    fn place(game: &mut Game, id: PlayerId, position: usize) {
        game.player_mut(id).unwrap().position = position;
    }

    #[test]
    fn test_buy_with_exact_money() {
        let mut game = game();
        game.player_mut(A).unwrap().money = 60;
        place(&mut game, A, 1);

        let events = game.resolve_landing(A).unwrap();
        assert_eq!(game.player(A).unwrap().money, 0);
        assert!(game.player(A).unwrap().owns(1));
        assert_eq!(game.get_property(1).unwrap().unwrap().owner, Some(A));
        assert_eq!(events.as_slice(), &[TurnEvent::Purchased { position: 1, price: 60 }]);
    }

    #[test]
    fn test_cannot_afford() {
        let mut game = game();
        game.player_mut(A).unwrap().money = 59;
        place(&mut game, A, 1);

        let events = game.resolve_landing(A).unwrap();
        assert_eq!(game.player(A).unwrap().money, 59);
        assert!(game.get_property(1).unwrap().unwrap().is_unowned());
        assert_eq!(events.as_slice(), &[TurnEvent::CannotAfford { position: 1, price: 60 }]);
    }

    #[test]
    fn test_rent_goes_to_owner() {
        let mut game = game();
        assert!(game.purchase_property(A, 3).unwrap());
        place(&mut game, B, 3);

        let before = game.player(A).unwrap().money + game.player(B).unwrap().money;
        game.resolve_landing(B).unwrap();

        assert_eq!(game.player(B).unwrap().money, 1496);
        assert_eq!(game.player(A).unwrap().money, 1440 + 4);
        assert_eq!(game.player(A).unwrap().money + game.player(B).unwrap().money, before);
    }

    #[test]
    fn test_rent_can_push_below_zero() {
        let mut game = game();
        game.purchase_property(A, 39).unwrap();
        game.player_mut(B).unwrap().money = 10;
        place(&mut game, B, 39);

        game.resolve_landing(B).unwrap();
        assert_eq!(game.player(B).unwrap().money, -40);
    }

    #[test]
    fn test_own_property_is_free() {
        let mut game = game();
        game.purchase_property(A, 1).unwrap();
        place(&mut game, A, 1);
        let money = game.player(A).unwrap().money;

        let events = game.resolve_landing(A).unwrap();
        assert_eq!(game.player(A).unwrap().money, money);
        assert_eq!(events.as_slice(), &[TurnEvent::OwnProperty { position: 1 }]);
    }

    #[test]
    fn test_purchase_property_rules() {
        let mut game = game();
        assert_eq!(game.purchase_property(A, 0), Err(GameError::NotAProperty(0)));
        assert!(game.purchase_property(A, 1).unwrap());
        assert!(!game.purchase_property(B, 1).unwrap());

        game.player_mut(C).unwrap().money = 10;
        assert!(!game.purchase_property(C, 3).unwrap());
        assert!(matches!(game.purchase_property(A, 41), Err(GameError::PositionOutOfBounds { .. })));
    }

    #[test]
    fn test_quiet_special_squares() {
        let mut game = game();
        for position in [0, 10, 20, 2, 4, 7] {
            place(&mut game, A, position);
            game.resolve_landing(A).unwrap();
            let a = game.player(A).unwrap();
            assert_eq!(a.money, 1500);
            assert!(!a.in_jail);
            assert_eq!(a.position, position);
        }
    }

    #[test]
    fn test_go_to_jail_square() {
        let mut game = game();
        place(&mut game, A, 30);
        game.resolve_landing(A).unwrap();

        let a = game.player(A).unwrap();
        assert!(a.in_jail);
        assert_eq!(a.position, 10);
        assert_eq!(a.money, 1500);
    }

    #[test]
    fn test_active_card_squares() {
        let config = RulesConfig::default().with_card_squares(true).with_income_tax(75);
        let mut game = GameBuilder::new().config(config).player("a").player("b").build(1).unwrap();
        game.set_decks(
            vec![Card::chance("Collect 5", CardEffect::Collect(5))],
            vec![Card::lucky_draw("Pay 7", CardEffect::Pay(7))],
        )
        .unwrap();

        place(&mut game, A, 7);
        game.resolve_landing(A).unwrap();
        assert_eq!(game.player(A).unwrap().money, 1505);

        // Community chest draws lucky draw
        place(&mut game, A, 2);
        game.resolve_landing(A).unwrap();
        assert_eq!(game.player(A).unwrap().money, 1498);

        place(&mut game, A, 4);
        let events = game.resolve_landing(A).unwrap();
        assert_eq!(game.player(A).unwrap().money, 1423);
        assert!(events.contains(&TurnEvent::PaidTax { amount: 75 }));
    }

    #[test]
    fn test_jail_and_parking_stay_quiet_with_card_squares() {
        let config = RulesConfig::default().with_card_squares(true);
        let mut game = GameBuilder::new().config(config).player("a").build(1).unwrap();

        for position in [0, 10, 20] {
            place(&mut game, A, position);
            game.resolve_landing(A).unwrap();
        }
        assert_eq!(game.player(A).unwrap().money, 1500);
    }

    #[test]
    fn test_draw_card_cycles_and_applies() {
        let mut game = game();
        game.set_decks(
            vec![Card::chance("only", CardEffect::Collect(25))],
            vec![],
        )
        .unwrap();
        game.start_game();

        let card = game.draw_card(CardCategory::Chance).unwrap();
        assert_eq!(card.description, "only");
        assert_eq!(game.player(A).unwrap().money, 1525);
        assert_eq!(game.deck(CardCategory::Chance).len(), 1);

        assert_eq!(
            game.draw_card(CardCategory::LuckyDraw),
            Err(GameError::EmptyDeck(CardCategory::LuckyDraw))
        );
    }

    #[test]
    fn test_draw_card_targets_current_player() {
        let mut game = game();
        game.set_decks(vec![Card::chance("pay", CardEffect::Pay(100))], vec![]).unwrap();
        game.start_game();
        game.next_player();

        game.draw_card(CardCategory::Chance).unwrap();
        assert_eq!(game.player(A).unwrap().money, 1500);
        assert_eq!(game.player(B).unwrap().money, 1400);
    }

    #[test]
    fn test_table_transfers() {
        let mut game = game();
        game.apply_card_effect(A, &CardEffect::CollectFromEachPlayer(10)).unwrap();
        assert_eq!(game.player(A).unwrap().money, 1520);
        assert_eq!(game.player(B).unwrap().money, 1490);
        assert_eq!(game.player(C).unwrap().money, 1490);

        game.apply_card_effect(B, &CardEffect::PayEachPlayer(20)).unwrap();
        assert_eq!(game.player(A).unwrap().money, 1540);
        assert_eq!(game.player(B).unwrap().money, 1450);
        assert_eq!(game.player(C).unwrap().money, 1510);

        let total: i64 = game.players().iter().map(|p| p.money).sum();
        assert_eq!(total, 4500);
    }

    #[test]
    fn test_advance_to_go_pays_bonus() {
        let mut game = game();
        place(&mut game, A, 36);

        let events = game.apply_card_effect(A, &CardEffect::AdvanceTo(0)).unwrap();
        assert_eq!(game.player(A).unwrap().position, 0);
        assert_eq!(game.player(A).unwrap().money, 1700);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_advance_to_outside_board() {
        let mut game = game();
        assert!(matches!(
            game.apply_card_effect(A, &CardEffect::AdvanceTo(40)),
            Err(GameError::PositionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_card_to_jail() {
        let mut game = game();
        place(&mut game, A, 7);
        game.apply_card_effect(A, &CardEffect::GoToJail).unwrap();
        assert!(game.player(A).unwrap().in_jail);
        assert_eq!(game.player(A).unwrap().position, 10);
    }

    #[test]
    fn test_unknown_player_effect_touches_nobody() {
        let mut game = game();
        let result = game.apply_card_effect(PlayerId::new(9), &CardEffect::CollectFromEachPlayer(10));
        assert_eq!(result, Err(GameError::UnknownPlayer(PlayerId::new(9))));
        assert!(game.players().iter().all(|p| p.money == 1500));
    }

    #[test]
    fn test_custom_board_special_positions() {
        let board = Board::new(vec![
            SpecialSquare::Go.into(),
            Property::beach("Rincon", 60, 5, ColorGroup::Brown).into(),
            SpecialSquare::Jail.into(),
            SpecialSquare::GoToJail.into(),
        ])
        .unwrap();
        let config = RulesConfig::default().with_special_positions(2, 0, 3);
        let mut game = GameBuilder::new().config(config).board(board).player("a").build(1).unwrap();

        place(&mut game, A, 3);
        game.resolve_landing(A).unwrap();
        assert!(game.player(A).unwrap().in_jail);
        assert_eq!(game.player(A).unwrap().position, 2);
    }
}
