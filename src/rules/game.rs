//! The game aggregate: board, decks, players and whose turn it is.
//!
//! Setup and read-only queries live here. The turn engine is in
//! `turn.rs`, landing and card resolution in `landing.rs`.

use im::Vector;
use tracing::{debug, info};

use super::report::{GameResult, Standing, TurnReport};
use crate::board::{Board, ColorGroup, Property};
use crate::cards::{catalog, Card, CardCategory, CardEffect, Deck};
use crate::core::{GameError, GameRng, Player, PlayerId, RulesConfig};

/// Tokens handed out to players in join order, wrapping around.
pub const TOKENS: [&str; 5] = ["🌊", "🏖", "🌴", "🏄", "🎯"];

/// Maximum number of players at one table.
pub const MAX_PLAYERS: usize = u8::MAX as usize + 1;

/// A game of Surfopoly.
///
/// One instance is driven by one caller, one turn at a time. Cloning is
/// cheap enough for what-if exploration; the turn history is a
/// persistent vector.
///
/// ## Example
///
/// ```
/// use surfopoly::rules::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .player("Kelly")
///     .player("Stephanie")
///     .build(42)
///     .unwrap();
///
/// game.start_game();
/// let report = game.take_turn().unwrap();
/// assert_eq!(report.turn, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) config: RulesConfig,
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) chance: Deck,
    pub(crate) lucky_draw: Deck,
    pub(crate) current: usize,
    pub(crate) rng: GameRng,
    pub(crate) turn_number: u32,
    pub(crate) history: Vector<TurnReport>,
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: RulesConfig,
    board: Option<Board>,
    players: Vec<String>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom board instead of the standard one.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Build the game with a fixed seed for dice and shuffles.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the game with a randomly chosen seed.
    pub fn build_from_entropy(self) -> Result<Game, GameError> {
        self.build_with_rng(GameRng::from_entropy())
    }

    fn build_with_rng(self, rng: GameRng) -> Result<Game, GameError> {
        let board = self.board.unwrap_or_else(Board::standard);
        self.config.validate(board.len())?;

        let mut game = Game {
            config: self.config,
            board,
            players: Vec::new(),
            chance: Deck::new(CardCategory::Chance),
            lucky_draw: Deck::new(CardCategory::LuckyDraw),
            current: 0,
            rng,
            turn_number: 0,
            history: Vector::new(),
        };
        game.initialize_cards()?;

        for name in self.players {
            game.add_player(name)?;
        }

        Ok(game)
    }
}

impl Game {
    /// Create a game on the standard board with no players yet.
    pub fn new(config: RulesConfig, seed: u64) -> Result<Self, GameError> {
        GameBuilder::new().config(config).build(seed)
    }

    // === Setup ===

    /// Reset to the standard board. All ownership is cleared.
    pub fn initialize_board(&mut self) -> Result<(), GameError> {
        self.set_board(Board::standard())
    }

    /// Install a board. All ownership is cleared.
    ///
    /// Fails without changing anything if the rules or the loaded cards
    /// do not fit the new board.
    pub fn set_board(&mut self, board: Board) -> Result<(), GameError> {
        self.config.validate(board.len())?;
        check_decks(&self.config, board.len(), [&self.chance, &self.lucky_draw])?;
        self.board = board;
        self.board.clear_owners();
        for player in &mut self.players {
            player.properties.clear();
            player.position %= self.board.len();
        }
        Ok(())
    }

    /// Refill both decks with the standard cards and shuffle each.
    pub fn initialize_cards(&mut self) -> Result<(), GameError> {
        self.set_decks(catalog::chance_cards(), catalog::lucky_draw_cards())
    }

    /// Refill both decks with the given cards and shuffle each.
    ///
    /// With card squares active neither deck may be empty, and every
    /// `AdvanceTo` card must point inside the board. On error the current
    /// decks are kept.
    pub fn set_decks(&mut self, chance: Vec<Card>, lucky_draw: Vec<Card>) -> Result<(), GameError> {
        let mut chance_deck = Deck::new(CardCategory::Chance);
        let mut lucky_draw_deck = Deck::new(CardCategory::LuckyDraw);
        chance_deck.fill(chance);
        lucky_draw_deck.fill(lucky_draw);
        check_decks(&self.config, self.board.len(), [&chance_deck, &lucky_draw_deck])?;

        chance_deck.shuffle(&mut self.rng);
        lucky_draw_deck.shuffle(&mut self.rng);
        self.chance = chance_deck;
        self.lucky_draw = lucky_draw_deck;
        debug!(
            chance = self.chance.len(),
            lucky_draw = self.lucky_draw.len(),
            "decks shuffled"
        );
        Ok(())
    }

    /// Seat a new player on GO with the starting money.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        let index = self.players.len();
        if index >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers { max: MAX_PLAYERS });
        }

        let id = PlayerId::new(index as u8);
        let token = TOKENS[index % TOKENS.len()];
        let player = Player::new(name, token, self.config.starting_money);
        debug!(player = %id, name = %player.name, "player added");
        self.players.push(player);
        Ok(id)
    }

    /// Hand the dice to the first player.
    pub fn start_game(&mut self) {
        self.current = 0;
        info!(players = self.players.len(), seed = self.rng.seed(), "game started");
    }

    // === Queries ===

    /// The rules in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id.index()).ok_or(GameError::UnknownPlayer(id))
    }

    /// Mutable access for drivers that need to set up a position.
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players.get_mut(id.index()).ok_or(GameError::UnknownPlayer(id))
    }

    /// Whose turn it is.
    pub fn current_player_id(&self) -> Result<PlayerId, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(PlayerId::new(self.current as u8))
    }

    pub fn current_player(&self) -> Result<&Player, GameError> {
        let id = self.current_player_id()?;
        self.player(id)
    }

    /// The property at `position`, or `None` for a special square.
    pub fn get_property(&self, position: usize) -> Result<Option<&Property>, GameError> {
        self.board.property(position)
    }

    /// All properties in a colour group, in board order.
    #[must_use]
    pub fn get_properties_by_color(&self, group: ColorGroup) -> Vec<&Property> {
        self.board.properties_by_color(group).collect()
    }

    /// The deck for a category.
    #[must_use]
    pub fn deck(&self, category: CardCategory) -> &Deck {
        match category {
            CardCategory::Chance => &self.chance,
            CardCategory::LuckyDraw => &self.lucky_draw,
        }
    }

    pub(crate) fn deck_mut(&mut self, category: CardCategory) -> &mut Deck {
        match category {
            CardCategory::Chance => &mut self.chance,
            CardCategory::LuckyDraw => &mut self.lucky_draw,
        }
    }

    /// Number of turns taken so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Reports of every turn taken, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnReport> {
        &self.history
    }

    /// The seed driving dice and shuffles.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Turn order and end ===

    /// Pass the dice to the next player in seat order.
    ///
    /// Players with no money keep their seat.
    pub fn next_player(&mut self) {
        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }
    }

    /// True once at most one player has money left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.players.iter().filter(|p| p.is_solvent()).count() <= 1
    }

    /// The outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let winner = self
            .players
            .iter()
            .position(Player::is_solvent)
            .map(|index| PlayerId::new(index as u8));
        Some(match winner {
            Some(id) => GameResult::Winner(id),
            None => GameResult::Draw,
        })
    }

    /// Net worth of a player: money plus the price of every property held.
    pub fn net_worth(&self, id: PlayerId) -> Result<i64, GameError> {
        let player = self.player(id)?;
        let holdings: i64 = player
            .properties
            .iter()
            .filter_map(|&position| self.board.property(position).ok().flatten())
            .map(|property| property.price)
            .sum();
        Ok(player.money + holdings)
    }

    /// Leaderboard, richest first. Ties keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = PlayerId::all(self.players.len())
            .filter_map(|id| {
                let player = self.player(id).ok()?;
                Some(Standing {
                    player: id,
                    name: player.name.clone(),
                    money: player.money,
                    net_worth: self.net_worth(id).ok()?,
                })
            })
            .collect();
        standings.sort_by(|a, b| b.net_worth.cmp(&a.net_worth));
        standings
    }
}

/// Rule out card draws that would fail in the middle of a turn.
fn check_decks(config: &RulesConfig, board_len: usize, decks: [&Deck; 2]) -> Result<(), GameError> {
    for deck in decks {
        if config.card_squares_active && deck.is_empty() {
            return Err(GameError::EmptyDeck(deck.category()));
        }
        for card in deck.iter() {
            if let CardEffect::AdvanceTo(position) = card.effect {
                if position >= board_len {
                    return Err(GameError::PositionOutOfBounds { position, len: board_len });
                }
            }
        }
    }
    Ok(())
}
