//! Sides and per-side state.
//!
//! ## Side
//!
//! The game always has exactly two sides: the searching `Player` and the
//! heuristic-driven `Opponent`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.
//!
//! ## PlayerState
//!
//! A side's hand, its remaining erase tokens and whether it has stopped.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::GameConfig;
use super::deck::Card;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The searching side (moves first).
    Player,
    /// The heuristic side.
    Opponent,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Slot index (player = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use blacksin::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::default();
/// wins[Side::Opponent] += 1;
/// assert_eq!(wins[Side::Player], 0);
/// assert_eq!(wins[Side::Opponent], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Mutable record of one side's holdings.
///
/// `cards` is persistent (`im::Vector`) so cloning a whole game for a
/// search branch costs O(1) and never shares mutation between branches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    cards: Vector<Card>,
    target: i64,
    erase_tokens: u32,
    stopped: bool,
}

impl PlayerState {
    /// Fresh state for a game played with `deck_count` cards.
    ///
    /// Target is `2 * deck_count - 1`, tokens are `deck_count / 5`.
    #[must_use]
    pub fn new(deck_count: u32) -> Self {
        let rules = GameConfig::new(deck_count);
        Self {
            cards: Vector::new(),
            target: rules.target(),
            erase_tokens: rules.erase_tokens(),
            stopped: false,
        }
    }

    /// State holding the given cards, otherwise fresh.
    #[must_use]
    pub fn with_cards(deck_count: u32, cards: &[Card]) -> Self {
        let mut state = Self::new(deck_count);
        state.cards = cards.iter().copied().collect();
        state
    }

    /// Override the remaining erase tokens.
    #[must_use]
    pub fn with_erase_tokens(mut self, tokens: u32) -> Self {
        self.erase_tokens = tokens;
        self
    }

    /// Held cards, oldest first.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// The sum both sides aim for.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Remaining erase tokens.
    #[must_use]
    pub fn erase_tokens(&self) -> u32 {
        self.erase_tokens
    }

    /// Whether this side has stopped.
    #[must_use]
    pub fn has_stopped(&self) -> bool {
        self.stopped
    }

    /// Sum of held cards.
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.cards.iter().map(|&c| i64::from(c)).sum()
    }

    /// Distance left to the target; negative once bust.
    #[must_use]
    pub fn margin(&self) -> i64 {
        self.target - self.sum()
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn stop(&mut self) {
        self.stopped = true;
    }

    pub(crate) fn pop_card(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    pub(crate) fn spend_erase_token(&mut self) {
        debug_assert!(self.erase_tokens > 0);
        self.erase_tokens -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
        assert_eq!(format!("{}", Side::Player), "player");
    }

    #[test]
    fn test_side_map_index() {
        let mut map: SideMap<i32> = SideMap::new(|s| s.index() as i32 * 10);
        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Opponent], 10);

        map[Side::Player] = 5;
        assert_eq!(map[Side::Player], 5);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &5), (Side::Opponent, &10)]);
    }

    #[test]
    fn test_new_player_state() {
        let state = PlayerState::new(21);
        assert_eq!(state.target(), 41);
        assert_eq!(state.erase_tokens(), 4);
        assert!(!state.has_stopped());
        assert_eq!(state.sum(), 0);
        assert_eq!(state.margin(), 41);
    }

    #[test]
    fn test_small_deck_has_no_tokens() {
        assert_eq!(PlayerState::new(4).erase_tokens(), 0);
        assert_eq!(PlayerState::new(5).erase_tokens(), 1);
    }

    #[test]
    fn test_margin_goes_negative() {
        let state = PlayerState::with_cards(5, &[10]);
        assert_eq!(state.target(), 9);
        assert_eq!(state.margin(), -1);
    }

    #[test]
    fn test_take_and_pop() {
        let mut state = PlayerState::new(5);
        state.take(3);
        state.take(4);
        assert_eq!(state.sum(), 7);
        assert_eq!(state.pop_card(), Some(4));
        assert_eq!(state.cards().iter().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_serialization() {
        let state = PlayerState::with_cards(10, &[2, 7]).with_erase_tokens(1);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
