//! Game driver: the turn loop.

use crate::core::{
    Action, ActionEffect, ActionRecord, Card, Deck, GameConfig, GameRng, GameState, Side,
};
use crate::error::GameError;
use crate::policy::{HeuristicPolicy, TurnPolicy};
use crate::rules::Outcome;
use crate::search::{Search, SearchConfig, SearchStats};

/// One game: the searching player against a turn policy.
pub struct Game {
    state: GameState,
    search: Search,
    opponent: Box<dyn TurnPolicy>,
    /// Search statistics summed over every player decision.
    search_totals: SearchStats,
}

/// Builder for creating a Game.
pub struct GameBuilder {
    config: GameConfig,
    search: SearchConfig,
    deck_order: Option<Vec<Card>>,
    opponent: Box<dyn TurnPolicy>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            search: SearchConfig::default(),
            deck_order: None,
            opponent: Box::new(HeuristicPolicy),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deck_count(mut self, count: u32) -> Self {
        self.config.deck_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Skip the shuffle and deal from this exact order.
    pub fn deck_order(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck_order = Some(cards.into_iter().collect());
        self
    }

    /// Replace the opponent's policy.
    pub fn opponent<P: TurnPolicy + 'static>(mut self, policy: P) -> Self {
        self.opponent = Box::new(policy);
        self
    }

    /// Shuffle (or lay out) the deck and deal the opening hands.
    pub fn build(self) -> Result<Game, GameError> {
        let state = match self.deck_order {
            Some(order) => GameState::with_deck(&self.config, Deck::from_order(order))?,
            None => {
                let mut rng = match self.config.seed {
                    Some(seed) => GameRng::new(seed),
                    None => GameRng::from_entropy(),
                };
                GameState::new(&self.config, &mut rng)?
            }
        };

        Ok(Game {
            state,
            search: Search::new(self.search),
            opponent: self.opponent,
            search_totals: SearchStats::default(),
        })
    }
}

impl Game {
    /// A shuffled game with default search and the heuristic opponent.
    pub fn new(deck_count: u32) -> Result<Self, GameError> {
        GameBuilder::new().deck_count(deck_count).build()
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Search statistics accumulated over the game so far.
    pub fn search_totals(&self) -> &SearchStats {
        &self.search_totals
    }

    /// Both sides have stopped.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Result if the game ended now.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Ask `side`'s decision maker for its next move.
    ///
    /// A failing opponent policy stops instead of aborting the game.
    pub fn choose_action(&mut self, side: Side) -> Action {
        match side {
            Side::Player => {
                let decision = self.search.decide(&self.state, side);
                self.search_totals.merge(self.search.stats());
                decision.action
            }
            Side::Opponent => match self.opponent.choose_action(&self.state.view(side)) {
                Ok(action) => action,
                Err(err) => {
                    log::warn!("{} policy failed ({}), stopping", side, err);
                    Action::Stop
                }
            },
        }
    }

    /// Let `side` choose and apply one move.
    ///
    /// A side that has stopped passes: nothing is applied and `None` is
    /// returned.
    pub fn play_turn(&mut self, side: Side) -> Option<ActionRecord> {
        if self.state.player(side).has_stopped() {
            return None;
        }
        let action = self.choose_action(side);
        self.state.apply_action(side, action);
        self.state.history().back().copied()
    }

    /// Apply a typed command for `side` (human input path).
    ///
    /// Unknown commands leave the game unchanged.
    pub fn apply_command(&mut self, side: Side, command: &str) -> Result<ActionEffect, GameError> {
        self.state.apply_command(side, command)
    }

    /// Alternate turns, player first, until both sides have stopped.
    ///
    /// A side that has stopped is skipped.
    pub fn run(&mut self) -> Outcome {
        let mut turn = Side::Player;
        while !self.state.is_terminal() {
            self.play_turn(turn);
            turn = turn.other();
        }

        let outcome = self.state.outcome();
        log::debug!(
            "game over after {} actions: player {} vs opponent {}, winner {}",
            self.state.history().len(),
            self.state.player(Side::Player).sum(),
            self.state.player(Side::Opponent).sum(),
            outcome.winner().map_or("none".to_string(), |side| side.to_string())
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{PolicyError, TableView};

    struct Faulty;

    impl TurnPolicy for Faulty {
        fn choose_action(&self, _view: &TableView<'_>) -> Result<Action, PolicyError> {
            Err(PolicyError::Overflow("test"))
        }
    }

    #[test]
    fn test_game_creation() {
        let game = GameBuilder::new().deck_count(21).seed(42).build().unwrap();
        assert_eq!(game.state().deck().len(), 17);
        assert_eq!(game.state().player(Side::Player).cards().len(), 2);
        assert_eq!(game.state().player(Side::Opponent).cards().len(), 2);
        assert!(!game.is_over());
    }

    #[test]
    fn test_invalid_deck_count() {
        assert_eq!(Game::new(0).err(), Some(GameError::InvalidDeckCount(0)));
    }

    #[test]
    fn test_game_to_completion() {
        let mut game = GameBuilder::new().deck_count(21).seed(7).build().unwrap();
        let outcome = game.run();

        assert!(game.is_over());
        assert_eq!(outcome, game.outcome());
        assert!(game.search_totals().nodes > 0);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut game1 = GameBuilder::new().deck_count(13).seed(99).build().unwrap();
        let mut game2 = GameBuilder::new().deck_count(13).seed(99).build().unwrap();

        assert_eq!(game1.run(), game2.run());
        assert_eq!(game1.state(), game2.state());
    }

    #[test]
    fn test_faulty_opponent_stops() {
        let mut game = GameBuilder::new()
            .deck_order(1..=10)
            .deck_count(10)
            .opponent(Faulty)
            .build()
            .unwrap();

        let record = game.play_turn(Side::Opponent).unwrap();
        assert_eq!(record.action, Action::Stop);
        assert!(game.state().player(Side::Opponent).has_stopped());

        game.run();
        assert!(game.is_over());
    }

    #[test]
    fn test_play_turn_records() {
        let mut game = GameBuilder::new().deck_order(1..=5).deck_count(5).build().unwrap();
        let record = game.play_turn(Side::Opponent).unwrap();
        assert_eq!(record.side, Side::Opponent);
        assert_eq!(record.sequence, 0);
        assert_eq!(game.state().history().back(), Some(&record));

        let record = game.play_turn(Side::Player).unwrap();
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_stopped_side_passes() {
        let mut game = GameBuilder::new().deck_order(1..=10).deck_count(10).build().unwrap();
        game.apply_command(Side::Player, "s").unwrap();
        let before = game.state().clone();

        assert_eq!(game.play_turn(Side::Player), None);
        assert_eq!(game.state(), &before);
        assert_eq!(game.state().player(Side::Player).cards().len(), 2);
    }

    #[test]
    fn test_apply_command() {
        let mut game = GameBuilder::new().deck_order(1..=5).deck_count(5).build().unwrap();
        assert_eq!(game.apply_command(Side::Player, "s"), Ok(ActionEffect::Applied));
        assert!(game.state().player(Side::Player).has_stopped());
        assert!(game.apply_command(Side::Opponent, "hold").is_err());
        assert!(!game.state().player(Side::Opponent).has_stopped());
    }
}
