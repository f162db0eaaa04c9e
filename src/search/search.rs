//! Depth-bounded lookahead for the searching side.
//!
//! Both sides are explored adversarially: the player maximizes the outcome,
//! the opponent minimizes it. Selection is first-good-enough rather than a
//! full minimax:
//!
//! - Branches are tried in the order Draw, EraseSelf, EraseOpponent, Stop.
//!   The first branch that wins outright for the side to move is returned
//!   immediately.
//! - Otherwise the first branch that reaches a draw is returned, looking in
//!   the order Draw, Stop, EraseSelf, EraseOpponent.
//! - Otherwise the side reports `(Draw, loss)`, whether or not Draw was legal.
//!
//! Every branch works on its own clone of the state.

use std::time::Instant;

use crate::core::{Action, GameState, Side};
use crate::rules::Outcome;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Order in which branches are expanded.
const EXPANSION_ORDER: [Action; 4] = [
    Action::Draw,
    Action::EraseSelf,
    Action::EraseOpponent,
    Action::Stop,
];

/// The chosen action and the outcome the search expects from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub outcome: Outcome,
}

impl Decision {
    /// Outcome as `1`, `0` or `-1` from the player's seat.
    #[must_use]
    pub fn score(&self) -> i8 {
        self.outcome.score()
    }
}

/// Recursive lookahead search.
#[derive(Clone, Debug, Default)]
pub struct Search {
    config: SearchConfig,
    stats: SearchStats,
}

impl Search {
    /// Create a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the most recent `decide`.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose an action for `turn` from the root position.
    pub fn decide(&mut self, state: &GameState, turn: Side) -> Decision {
        let start = Instant::now();
        self.stats.reset();

        let decision = self.decide_at(state, turn, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "{} searches {} ({}) over {} nodes, {} leaves",
            turn,
            decision.action,
            decision.score(),
            self.stats.nodes,
            self.stats.leaves
        );
        decision
    }

    /// Search from `state` with `turn` to move, `depth` plies below the root.
    ///
    /// Statistics accumulate until the next `decide`.
    pub fn decide_at(&mut self, state: &GameState, turn: Side, depth: u32) -> Decision {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if state.is_terminal() || depth >= self.config.max_depth {
            self.stats.leaves += 1;
            return Decision {
                action: Action::Stop,
                outcome: state.outcome(),
            };
        }

        // A stopped side passes; its reply is whatever the other side finds.
        if state.player(turn).has_stopped() {
            return self.decide_at(state, turn.other(), depth + 1);
        }

        let decisive = Outcome::win_for(turn);
        let mut drawn = [false; 4];

        for action in state.legal_actions(turn, &EXPANSION_ORDER) {
            let mut branch = state.clone();
            branch.apply_action(turn, action);
            let outcome = self.decide_at(&branch, turn.other(), depth + 1).outcome;

            if outcome == decisive {
                self.stats.cutoffs += 1;
                return Decision { action, outcome };
            }
            drawn[action.index()] = outcome == Outcome::Draw;
        }

        if let Some(action) = Action::ALL.into_iter().find(|a| drawn[a.index()]) {
            return Decision {
                action,
                outcome: Outcome::Draw,
            };
        }

        Decision {
            action: Action::Draw,
            outcome: Outcome::loss_for(turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Deck, PlayerState};

    fn position(player: PlayerState, opponent: PlayerState, deck: &[Card]) -> GameState {
        GameState::from_parts(5, Deck::from_order(deck.iter().copied()), player, opponent)
    }

    fn stopped(mut state: GameState, side: Side) -> GameState {
        state.apply_action(side, Action::Stop);
        state
    }

    #[test]
    fn test_terminal_position_is_scored() {
        let state = position(PlayerState::with_cards(5, &[9]), PlayerState::with_cards(5, &[1]), &[2]);
        let state = stopped(stopped(state, Side::Player), Side::Opponent);

        let mut search = Search::default();
        let decision = search.decide(&state, Side::Player);
        assert_eq!(decision, Decision { action: Action::Stop, outcome: Outcome::PlayerWin });
        assert_eq!(search.stats().nodes, 1);
        assert_eq!(search.stats().leaves, 1);
    }

    #[test]
    fn test_depth_bound_scores_as_is() {
        let state = position(PlayerState::with_cards(5, &[10]), PlayerState::with_cards(5, &[9]), &[1]);
        let mut search = Search::default();
        let decision = search.decide_at(&state, Side::Player, 5);
        assert_eq!(decision.action, Action::Stop);
        assert_eq!(decision.score(), -1);
    }

    #[test]
    fn test_maximizer_takes_winning_draw() {
        let player = PlayerState::with_cards(5, &[4, 3]).with_erase_tokens(0);
        let opponent = PlayerState::with_cards(5, &[1, 5]).with_erase_tokens(0);
        let state = stopped(position(player, opponent, &[2]), Side::Opponent);

        let mut search = Search::default();
        let decision = search.decide(&state, Side::Player);
        assert_eq!(decision, Decision { action: Action::Draw, outcome: Outcome::PlayerWin });
        assert!(search.stats().cutoffs >= 1);
    }

    #[test]
    fn test_shallow_search_sees_one_ply() {
        let player = PlayerState::with_cards(5, &[4, 3]);
        let opponent = PlayerState::with_cards(5, &[1, 5]);
        let state = position(player, opponent, &[2]);

        let mut search = Search::new(SearchConfig::default().with_max_depth(1));
        let decision = search.decide(&state, Side::Player);
        assert_eq!(decision, Decision { action: Action::Draw, outcome: Outcome::PlayerWin });
        assert_eq!(search.stats().max_depth, 1);
    }

    #[test]
    fn test_minimizer_takes_winning_stop() {
        // Drawing the 9 would bust the opponent; stopping wins.
        let player = PlayerState::with_cards(5, &[1]).with_erase_tokens(0);
        let opponent = PlayerState::with_cards(5, &[4, 3]).with_erase_tokens(0);
        let state = stopped(position(player, opponent, &[9]), Side::Player);

        let mut search = Search::default();
        let decision = search.decide(&state, Side::Opponent);
        assert_eq!(decision, Decision { action: Action::Stop, outcome: Outcome::OpponentWin });
    }

    #[test]
    fn test_first_draw_in_canonical_order() {
        // Both sides bust, nothing left to change the result.
        let player = PlayerState::with_cards(5, &[5, 7]).with_erase_tokens(0);
        let opponent = PlayerState::with_cards(5, &[4, 6]).with_erase_tokens(0);
        let state = stopped(position(player, opponent, &[1]), Side::Opponent);

        let mut search = Search::default();
        let decision = search.decide(&state, Side::Player);
        // Draw and Stop both reach a draw; Draw comes first.
        assert_eq!(decision, Decision { action: Action::Draw, outcome: Outcome::Draw });
    }

    #[test]
    fn test_draw_only_via_stop() {
        let player = PlayerState::with_cards(5, &[5, 7]).with_erase_tokens(0);
        let opponent = PlayerState::with_cards(5, &[4, 6]).with_erase_tokens(0);
        let state = stopped(position(player, opponent, &[]), Side::Opponent);

        let decision = Search::default().decide(&state, Side::Player);
        assert_eq!(decision, Decision { action: Action::Stop, outcome: Outcome::Draw });
    }

    /// Legacy behavior: a lost position reports Draw even when the deck is
    /// empty and Draw is not a legal move.
    #[test]
    fn test_lost_position_reports_draw_legacy_fallback() {
        let player = PlayerState::with_cards(5, &[5, 7]).with_erase_tokens(0);
        let opponent = PlayerState::with_cards(5, &[9]).with_erase_tokens(0);
        let state = stopped(position(player, opponent, &[]), Side::Opponent);

        let decision = Search::default().decide(&state, Side::Player);
        assert_eq!(decision, Decision { action: Action::Draw, outcome: Outcome::OpponentWin });
        assert!(!state.is_legal(Side::Player, Action::Draw));
    }

    #[test]
    fn test_root_state_untouched() {
        let state = position(PlayerState::with_cards(5, &[2, 3]), PlayerState::with_cards(5, &[1, 4]), &[5]);
        let before = state.clone();
        Search::default().decide(&state, Side::Player);
        assert_eq!(state, before);
    }

    #[test]
    fn test_leaf_bound() {
        let state = position(PlayerState::with_cards(5, &[2]), PlayerState::with_cards(5, &[1]), &[3, 4, 5]);
        for depth in 0..=5u32 {
            let mut search = Search::default();
            search.decide_at(&state, Side::Player, depth);
            assert!(search.stats().leaves <= 4u64.pow(5 - depth));
            assert!(search.stats().max_depth <= 5);
        }
    }
}
