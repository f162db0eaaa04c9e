//! Turn policies for the non-searching side.
//!
//! A policy sees a `TableView` (its own state, the other hand, the deck and
//! the draw history) and names an action. Policies return `Result` so a
//! faulty evaluation can be reported rather than panic; the turn loop treats
//! any error as a Stop.

pub mod heuristic;

use im::Vector;
use thiserror::Error;

use crate::core::{Action, Card, Deck, PlayerState};

pub use heuristic::HeuristicPolicy;

/// Everything a side may consult when choosing a move.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    /// Cards drawn so far by either side.
    pub seen: &'a Vector<Card>,
    /// Remaining draw pile, front first.
    pub deck: &'a Deck,
    /// The other side's hand.
    pub opponent_cards: &'a Vector<Card>,
    /// The deciding side's own state.
    pub own: &'a PlayerState,
}

/// Failure while evaluating a policy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// An intermediate quantity did not fit in an `i64`.
    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

/// Chooses an action for one turn.
pub trait TurnPolicy: Send + Sync {
    /// Pick an action for the side described by `view`.
    fn choose_action(&self, view: &TableView<'_>) -> Result<Action, PolicyError>;
}
