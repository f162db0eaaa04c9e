//! Win determination.
//!
//! The side closest to the target without going over wins. Two busted hands
//! draw, as do two hands at the same non-negative margin.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{PlayerState, Side};

/// Result of a finished (or hypothetical) game, from the player's seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    Draw,
    OpponentWin,
}

impl Outcome {
    /// Compare the player's margin `m1` against the opponent's `m2`.
    ///
    /// ```
    /// use blacksin::rules::Outcome;
    ///
    /// assert_eq!(Outcome::from_margins(0, 8), Outcome::PlayerWin);
    /// assert_eq!(Outcome::from_margins(-1, 0), Outcome::OpponentWin);
    /// assert_eq!(Outcome::from_margins(-3, -1), Outcome::Draw);
    /// ```
    #[must_use]
    pub fn from_margins(m1: i64, m2: i64) -> Self {
        match (m1 >= 0, m2 >= 0) {
            (true, false) => Outcome::PlayerWin,
            (false, true) => Outcome::OpponentWin,
            (false, false) => Outcome::Draw,
            (true, true) => match m1.cmp(&m2) {
                Ordering::Less => Outcome::PlayerWin,
                Ordering::Equal => Outcome::Draw,
                Ordering::Greater => Outcome::OpponentWin,
            },
        }
    }

    /// Evaluate two hands.
    #[must_use]
    pub fn between(player: &PlayerState, opponent: &PlayerState) -> Self {
        Self::from_margins(player.margin(), opponent.margin())
    }

    /// The outcome in which `side` wins.
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWin,
            Side::Opponent => Outcome::OpponentWin,
        }
    }

    /// The outcome in which `side` loses.
    #[must_use]
    pub const fn loss_for(side: Side) -> Self {
        Self::win_for(side.other())
    }

    /// `1` player win, `0` draw, `-1` opponent win.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            Outcome::PlayerWin => 1,
            Outcome::Draw => 0,
            Outcome::OpponentWin => -1,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWin => Some(Side::Player),
            Outcome::Draw => None,
            Outcome::OpponentWin => Some(Side::Opponent),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWin => write!(f, "the winner is the player"),
            Outcome::Draw => write!(f, "the game ends in a draw"),
            Outcome::OpponentWin => write!(f, "the winner is the opponent"),
        }
    }
}
