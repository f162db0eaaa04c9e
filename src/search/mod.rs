//! Lookahead search for the player side.
//!
//! ## Usage
//!
//! ```rust
//! use blacksin::core::{GameConfig, GameRng, GameState, Side};
//! use blacksin::search::{Search, SearchConfig};
//!
//! let mut rng = GameRng::new(42);
//! let state = GameState::new(&GameConfig::new(21), &mut rng).unwrap();
//!
//! let mut search = Search::new(SearchConfig::default());
//! let decision = search.decide(&state, Side::Player);
//! println!("{} (expects {})", decision.action, decision.outcome);
//! println!("{} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod search;
pub mod stats;

pub use config::SearchConfig;
pub use search::{Decision, Search};
pub use stats::SearchStats;
