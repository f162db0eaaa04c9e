//! Game state and its transitions.
//!
//! `GameState` owns the deck, both sides' holdings, the history of every
//! drawn card and the action log. All collections are persistent (`im`), so
//! `clone()` is O(1) and a clone never observes mutations made to another.
//! Search relies on that to explore branches independently.
//!
//! ## Transitions
//!
//! - Stop: the acting side stops for the rest of the game.
//! - Draw: the front card moves to the acting side's hand. Drawing from an
//!   empty deck forces both sides to stop instead.
//! - EraseSelf / EraseOpponent: spend an erase token to drop the last card of
//!   a hand. Declined (no change) without tokens or with an empty hand.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionEffect, ActionRecord};
use super::config::{GameConfig, OPENING_HAND};
use super::deck::{Card, Deck};
use super::player::{PlayerState, Side, SideMap};
use super::rng::GameRng;
use crate::error::GameError;
use crate::policy::TableView;
use crate::rules::Outcome;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck_count: u32,

    deck: Deck,

    players: SideMap<PlayerState>,

    /// Every card drawn so far, in draw order, whoever drew it.
    seen: Vector<Card>,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Shuffle a fresh deck for `config` and deal the opening hands.
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Result<Self, GameError> {
        config.validate()?;
        let deck = Deck::shuffled(config.deck_count, rng);
        Ok(Self::dealt(config.deck_count, deck))
    }

    /// Deal the opening hands from a deck in a fixed order.
    ///
    /// The deck must hold each card of `1..=deck_count` exactly once.
    pub fn with_deck(config: &GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        if !deck.is_complete(config.deck_count) {
            return Err(GameError::InvalidDeckOrder {
                deck_count: config.deck_count,
                order: deck.iter().collect(),
            });
        }
        Ok(Self::dealt(config.deck_count, deck))
    }

    /// Assemble a position directly, without dealing.
    ///
    /// Cards already in either hand are recorded as seen.
    #[must_use]
    pub fn from_parts(deck_count: u32, deck: Deck, player: PlayerState, opponent: PlayerState) -> Self {
        let seen = player.cards().iter().chain(opponent.cards().iter()).copied().collect();
        Self {
            deck_count,
            deck,
            players: SideMap::new(|side| match side {
                Side::Player => player.clone(),
                Side::Opponent => opponent.clone(),
            }),
            seen,
            history: Vector::new(),
        }
    }

    fn dealt(deck_count: u32, deck: Deck) -> Self {
        let mut state = Self::from_parts(
            deck_count,
            deck,
            PlayerState::new(deck_count),
            PlayerState::new(deck_count),
        );
        state.deal_opening_hands();
        state
    }

    /// Alternate opening cards, player first.
    fn deal_opening_hands(&mut self) {
        for _ in 0..OPENING_HAND {
            for side in Side::ALL {
                match self.draw_card() {
                    Some(card) => self.players[side].take(card),
                    None => return,
                }
            }
        }
    }

    // === Accessors ===

    /// Configured number of cards.
    #[must_use]
    pub fn deck_count(&self) -> u32 {
        self.deck_count
    }

    /// Sum both sides aim for.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.players[Side::Player].target()
    }

    /// Remaining draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A side's holdings.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    /// Every card drawn so far.
    #[must_use]
    pub fn seen(&self) -> &Vector<Card> {
        &self.seen
    }

    /// Actions applied so far.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// What `side` is allowed to know when choosing a move.
    #[must_use]
    pub fn view(&self, side: Side) -> TableView<'_> {
        TableView {
            seen: &self.seen,
            deck: &self.deck,
            opponent_cards: self.players[side.other()].cards(),
            own: &self.players[side],
        }
    }

    // === Terminal ===

    /// Both sides have stopped.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        Side::ALL.iter().all(|&side| self.players[side].has_stopped())
    }

    /// Evaluate the current hands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::between(&self.players[Side::Player], &self.players[Side::Opponent])
    }

    // === Transitions ===

    /// Draw the front card into the seen history.
    ///
    /// On an empty deck both sides are forced to stop and `None` is returned.
    fn draw_card(&mut self) -> Option<Card> {
        match self.deck.draw() {
            Some(card) => {
                self.seen.push_back(card);
                Some(card)
            }
            None => {
                log::debug!("deck exhausted, stopping both sides");
                for side in Side::ALL {
                    self.players[side].stop();
                }
                None
            }
        }
    }

    /// `actor` spends a token to remove the last card of `target`'s hand.
    fn erase(&mut self, actor: Side, target: Side) -> ActionEffect {
        if self.players[target].cards().is_empty() || self.players[actor].erase_tokens() == 0 {
            return ActionEffect::Declined;
        }
        self.players[actor].spend_erase_token();
        self.players[target].pop_card();
        ActionEffect::Applied
    }

    /// Whether `action` would do anything for `side` right now.
    ///
    /// Stop is always legal.
    #[must_use]
    pub fn is_legal(&self, side: Side, action: Action) -> bool {
        let own = &self.players[side];
        match action {
            Action::Draw => !self.deck.is_empty(),
            Action::Stop => true,
            Action::EraseSelf => own.erase_tokens() > 0 && !own.cards().is_empty(),
            Action::EraseOpponent => {
                own.erase_tokens() > 0 && !self.players[side.other()].cards().is_empty()
            }
        }
    }

    /// Legal actions for `side`, in the order they appear in `order`.
    #[must_use]
    pub fn legal_actions(&self, side: Side, order: &[Action]) -> SmallVec<[Action; 4]> {
        order
            .iter()
            .copied()
            .filter(|&action| self.is_legal(side, action))
            .collect()
    }

    /// Apply `action` for `side` and record it.
    pub fn apply_action(&mut self, side: Side, action: Action) -> ActionEffect {
        let effect = match action {
            Action::Stop => {
                self.players[side].stop();
                ActionEffect::Applied
            }
            Action::Draw => match self.draw_card() {
                Some(card) => {
                    self.players[side].take(card);
                    ActionEffect::Applied
                }
                None => ActionEffect::DeckExhausted,
            },
            Action::EraseSelf => self.erase(side, side),
            Action::EraseOpponent => self.erase(side, side.other()),
        };

        let record = ActionRecord {
            side,
            action,
            effect,
            sequence: self.history.len() as u32,
        };
        log::trace!("{} {} -> {:?}", side, action, effect);
        self.history.push_back(record);

        effect
    }

    /// Parse a textual command and apply it.
    ///
    /// Unrecognized commands leave the state untouched.
    pub fn apply_command(&mut self, side: Side, command: &str) -> Result<ActionEffect, GameError> {
        let action: Action = command.parse()?;
        Ok(self.apply_action(side, action))
    }
}
