//! Batch play: many games, one aggregate.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameRng, Side, SideMap, DEFAULT_DECK_COUNT};
use crate::error::GameError;
use crate::rules::Outcome;
use crate::search::{SearchConfig, SearchStats};

use super::game::GameBuilder;

/// How many games to play and how.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Games to play.
    pub games: u32,

    /// Deck size for every game.
    pub deck_count: u32,

    /// Master seed; each game forks its own stream. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Player search settings.
    pub search: SearchConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 500,
            deck_count: DEFAULT_DECK_COUNT,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_deck_count(mut self, deck_count: u32) -> Self {
        self.deck_count = deck_count;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// Aggregate results of a batch.
#[derive(Clone, Debug, Default)]
pub struct SimulationSummary {
    pub games: u32,
    pub player_wins: u32,
    pub draws: u32,
    pub opponent_wins: u32,
    /// Actions taken by each side across all games.
    pub actions: SideMap<FxHashMap<Action, u32>>,
    /// Player search effort across all games.
    pub search: SearchStats,
}

impl SimulationSummary {
    /// Count one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::OpponentWin => self.opponent_wins += 1,
        }
    }

    /// Fraction of games the player won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.player_wins) / f64::from(self.games)
        }
    }

    /// Times `side` took `action`.
    #[must_use]
    pub fn action_count(&self, side: Side, action: Action) -> u32 {
        self.actions[side].get(&action).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "games: {}  player: {}  draw: {}  opponent: {}",
            self.games, self.player_wins, self.draws, self.opponent_wins
        )?;
        for side in Side::ALL {
            write!(f, "{:<10}", side)?;
            for action in Action::ALL {
                write!(f, "{:>16}", format!("{}={}", action, self.action_count(side, action)))?;
            }
            writeln!(f)?;
        }
        write!(f, "player's win percentage: {:.2} %", self.win_rate() * 100.0)
    }
}

/// Play `config.games` games and aggregate the results.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationSummary, GameError> {
    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut summary = SimulationSummary::default();

    for index in 0..config.games {
        let mut game = GameBuilder::new()
            .deck_count(config.deck_count)
            .seed(rng.fork().seed())
            .search(config.search.clone())
            .build()?;

        let outcome = game.run();
        summary.record(outcome);
        summary.search.merge(game.search_totals());
        for record in game.state().history() {
            *summary.actions[record.side].entry(record.action).or_insert(0) += 1;
        }
        log::debug!("game {}: {}", index, outcome);
    }

    log::info!(
        "{} games, player win rate {:.3}",
        summary.games,
        summary.win_rate()
    );
    for (side, tally) in summary.actions.iter() {
        log::debug!("{} action tally: {:?}", side, tally);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_win_rate() {
        let mut summary = SimulationSummary::default();
        assert_eq!(summary.win_rate(), 0.0);

        summary.record(Outcome::PlayerWin);
        summary.record(Outcome::Draw);
        summary.record(Outcome::OpponentWin);
        summary.record(Outcome::PlayerWin);

        assert_eq!(summary.games, 4);
        assert_eq!(summary.player_wins, 2);
        assert_eq!(summary.win_rate(), 0.5);
    }

    #[test]
    fn test_simulate_counts_every_game() {
        let config = SimulationConfig::default().with_games(5).with_deck_count(10).with_seed(1);
        let summary = simulate(&config).unwrap();

        assert_eq!(summary.games, 5);
        assert_eq!(summary.player_wins + summary.draws + summary.opponent_wins, 5);
        assert!(summary.search.nodes > 0);
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let config = SimulationConfig::default().with_games(4).with_deck_count(8).with_seed(77);
        let a = simulate(&config).unwrap();
        let b = simulate(&config).unwrap();

        assert_eq!(a.player_wins, b.player_wins);
        assert_eq!(a.draws, b.draws);
        assert_eq!(a.actions, b.actions);
    }

    #[test]
    fn test_simulate_rejects_empty_deck() {
        let config = SimulationConfig::default().with_games(1).with_deck_count(0).with_seed(1);
        assert_eq!(simulate(&config).err(), Some(GameError::InvalidDeckCount(0)));
    }

    #[test]
    fn test_display() {
        let mut summary = SimulationSummary::default();
        summary.record(Outcome::PlayerWin);
        let text = summary.to_string();
        assert!(text.contains("games: 1"));
        assert!(text.ends_with("player's win percentage: 100.00 %"));
    }

    #[test]
    fn test_config_serialization() {
        let config = SimulationConfig::default().with_games(3).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
