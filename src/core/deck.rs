//! The shared draw pile.
//!
//! Cards are the integers `1..=N`, each present once. The front of the deck
//! is the next card drawn. Drawn cards never return.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A card's face value.
pub type Card = u32;

/// Ordered draw pile, front first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// A uniformly random permutation of `1..=count`.
    #[must_use]
    pub fn shuffled(count: u32, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = (1..=count).collect();
        rng.shuffle(&mut cards);
        Self::from_order(cards)
    }

    /// A deck in exactly the given order.
    #[must_use]
    pub fn from_order(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card, or `None` if exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The card `offset` positions from the front, without drawing it.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<Card> {
        self.cards.get(offset).copied()
    }

    /// Cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Holds each card of `1..=count` exactly once.
    #[must_use]
    pub fn is_complete(&self, count: u32) -> bool {
        let mut cards: Vec<Card> = self.iter().collect();
        cards.sort_unstable();
        cards.into_iter().eq(1..=count)
    }

    /// Remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
