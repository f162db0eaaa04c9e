//! Blacksin: race to `2N - 1` without going over.
//!
//! - The deck holds the cards `1..=N`, shuffled; each side is dealt two
//! - On your turn: draw, stop, or spend an erase token to drop the last
//!   card of your own or the other hand
//! - Once both sides stop, the side closer to the target wins; a bust hand
//!   loses to any hand that is not bust
//!
//! The player side searches ahead; the opponent follows a fixed heuristic.

mod game;
mod simulation;

pub use game::{Game, GameBuilder};
pub use simulation::{simulate, SimulationConfig, SimulationSummary};
