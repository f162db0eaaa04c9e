//! Actions, their effects and the action history.
//!
//! The action set is closed: draw, stop, erase own last card, erase the
//! other side's last card. Text is parsed into `Action` only at the command
//! boundary; the engine and search work with the enum directly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::Side;
use crate::error::GameError;

/// A turn's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Draw,
    Stop,
    EraseSelf,
    EraseOpponent,
}

impl Action {
    /// All actions in their canonical order.
    pub const ALL: [Action; 4] = [
        Action::Draw,
        Action::Stop,
        Action::EraseSelf,
        Action::EraseOpponent,
    ];

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Action::Draw => 0,
            Action::Stop => 1,
            Action::EraseSelf => 2,
            Action::EraseOpponent => 3,
        }
    }

    /// Long command name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::Draw => "draw",
            Action::Stop => "stop",
            Action::EraseSelf => "erase_self",
            Action::EraseOpponent => "erase_opponent",
        }
    }

    /// Short command alias.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Action::Draw => "d",
            Action::Stop => "s",
            Action::EraseSelf => "es",
            Action::EraseOpponent => "eo",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = GameError;

    /// Parse `draw`/`d`, `stop`/`s`, `erase_self`/`es`, `erase_opponent`/`eo`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draw" | "d" => Ok(Action::Draw),
            "stop" | "s" => Ok(Action::Stop),
            "erase_self" | "es" => Ok(Action::EraseSelf),
            "erase_opponent" | "eo" => Ok(Action::EraseOpponent),
            other => Err(GameError::UnrecognizedCommand(other.to_string())),
        }
    }
}

/// What applying an action actually did.
///
/// Every action succeeds at the state-machine level; this flag records
/// whether it changed anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionEffect {
    /// The action took effect.
    Applied,
    /// An erase with no tokens or an empty target hand; nothing changed.
    Declined,
    /// A draw on an empty deck; both sides were forced to stop.
    DeckExhausted,
}

/// A recorded action for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// What it did.
    pub effect: ActionEffect,

    /// Position in the game's action sequence (0-based).
    pub sequence: u32,
}
