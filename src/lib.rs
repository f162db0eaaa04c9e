//! # blacksin
//!
//! A two-player card-accumulation game with a lookahead player and a
//! rule-based opponent.
//!
//! ## Design Principles
//!
//! 1. **Closed Action Set**: Draw, Stop, EraseSelf, EraseOpponent. Text is
//!    parsed only at the command boundary.
//!
//! 2. **Cheap Branching**: State uses `im` persistent collections, so search
//!    clones a whole game per branch in O(1) with full isolation.
//!
//! 3. **Never Abort a Turn**: Declined erases and an exhausted deck are
//!    effects, not errors. A failing opponent policy stops instead.
//!
//! ## Modules
//!
//! - `core`: Deck, sides, actions, RNG, configuration, game state
//! - `rules`: Outcome determination
//! - `policy`: Turn policies (the opponent's heuristic)
//! - `search`: Depth-bounded lookahead for the player
//! - `games`: The turn loop and batch simulation

pub mod core;
pub mod error;
pub mod games;
pub mod policy;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionEffect, ActionRecord, Card, Deck, GameConfig, GameRng, GameState, PlayerState,
    Side, SideMap,
};

pub use crate::error::GameError;

pub use crate::rules::Outcome;

pub use crate::policy::{HeuristicPolicy, PolicyError, TableView, TurnPolicy};

pub use crate::search::{Decision, Search, SearchConfig, SearchStats};

pub use crate::games::blacksin::{
    simulate, Game, GameBuilder, SimulationConfig, SimulationSummary,
};
