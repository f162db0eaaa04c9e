//! Core engine types: deck, sides, actions, RNG, configuration and state.

pub mod action;
pub mod config;
pub mod deck;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionEffect, ActionRecord};
pub use config::{GameConfig, DEFAULT_DECK_COUNT, OPENING_HAND};
pub use deck::{Card, Deck};
pub use player::{PlayerState, Side, SideMap};
pub use rng::GameRng;
pub use state::GameState;
