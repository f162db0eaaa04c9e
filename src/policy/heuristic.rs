//! Fixed-rule policy for the opponent side.
//!
//! Looks one card ahead for itself (the front of the deck) and one card
//! further for the other side, then applies the first matching rule:
//!
//! 1. Stop when the next card would overshoot and no erase tokens are left.
//! 2. Draw when the next card still fits under the target.
//! 3. Erase own last card when already bust.
//! 4. Erase the other side's last card when it is close to the target, or at
//!    least as close as we are.
//! 5. Otherwise stop.

use crate::core::{Action, Card};

use super::{PolicyError, TableView, TurnPolicy};

/// Rule-based policy; stateless and deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

fn hand_sum<'a>(cards: impl IntoIterator<Item = &'a Card>, what: &'static str) -> Result<i64, PolicyError> {
    cards
        .into_iter()
        .try_fold(0i64, |acc, &card| acc.checked_add(i64::from(card)))
        .ok_or(PolicyError::Overflow(what))
}

fn remaining(target: i64, sum: i64, extra: i64, what: &'static str) -> Result<i64, PolicyError> {
    sum.checked_add(extra)
        .and_then(|total| target.checked_sub(total))
        .ok_or(PolicyError::Overflow(what))
}

impl TurnPolicy for HeuristicPolicy {
    fn choose_action(&self, view: &TableView<'_>) -> Result<Action, PolicyError> {
        let own = view.own;
        let target = own.target();
        let has_tokens = own.erase_tokens() > 0;

        let next = i64::from(view.deck.peek(0).unwrap_or(0));
        let next_for_other = i64::from(view.deck.peek(1).unwrap_or(0));

        let own_sum = hand_sum(own.cards(), "own hand")?;
        let other_sum = hand_sum(view.opponent_cards, "opponent hand")?;

        let to_target = remaining(target, own_sum, 0, "own margin")?;
        let with_next = remaining(target, own_sum, next, "own margin after draw")?;
        let other_to_target = remaining(target, other_sum, 0, "opponent margin")?;
        let other_with_next = remaining(target, other_sum, next_for_other, "opponent margin after draw")?;

        let threshold = target / 7;

        if to_target < next && !has_tokens {
            return Ok(Action::Stop);
        }
        if next != 0 && with_next >= 0 {
            return Ok(Action::Draw);
        }
        if to_target < 0 && has_tokens {
            return Ok(Action::EraseSelf);
        }

        let other_is_close = other_to_target < threshold
            || other_with_next < threshold
            || other_with_next <= with_next
            || other_to_target <= to_target;
        if has_tokens && other_is_close {
            return Ok(Action::EraseOpponent);
        }

        Ok(Action::Stop)
    }
}
