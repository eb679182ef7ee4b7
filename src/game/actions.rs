use alloc::vec::Vec;

use crate::error::ActionError;
use crate::result::ActionOutcome;
use crate::strategy::{self, Action};

use super::{RoundEngine, RoundPhase};

impl RoundEngine {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != RoundPhase::PlayerTurns {
            return Err(ActionError::InvalidState);
        }

        if self.queue.is_empty() {
            return Err(ActionError::NoActiveHand);
        }

        Ok(())
    }

    /// Returns the chart's advice for the active hand.
    #[must_use]
    pub fn recommended_action(&self) -> Option<Action> {
        let hand = self.active_hand()?;
        strategy::recommend(hand, self.dealer_up_value()?)
    }

    /// Returns the actions that are structurally legal for the active hand.
    ///
    /// Hit and Stand are always offered. Double and Surrender need a hand on
    /// its first two cards, Split needs a pair; Double and Split also need the
    /// bankroll to cover a second stake.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        let Some(hand) = self.active_hand() else {
            return Vec::new();
        };

        let covered = self.session.can_cover(hand.bet());
        Action::ALL
            .into_iter()
            .filter(|action| match action {
                Action::Hit | Action::Stand => true,
                Action::Double => hand.can_double() && covered,
                Action::Split => hand.can_split() && covered,
                Action::Surrender => hand.can_surrender(),
            })
            .collect()
    }

    /// Applies the player's `action` to the active hand.
    ///
    /// The decision is graded against the chart before it is applied and
    /// counted only if the action succeeds. A split replaces the active hand
    /// with its two children, which then act in order.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the players' turn, the action is not
    /// legal for the active hand, the bankroll cannot cover a Double or
    /// Split, or the shoe runs out. A rejected action changes nothing; after
    /// an empty-shoe error the shoe can be rebuilt and the action retried.
    pub fn submit_action(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        let outcome = self.apply_action(action);
        if let Err(ActionError::EmptyShoe(_)) = outcome {
            log::debug!("{action} needs more cards than the shoe holds");
            self.exhausted = true;
        }
        outcome
    }

    fn apply_action(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        self.ensure_player_turn()?;

        let recommended = self.recommended_action();
        let mut drawn = Vec::new();

        match action {
            Action::Hit => {
                let hand = self.queue.front_mut().ok_or(ActionError::NoActiveHand)?;
                hand.hit(&mut self.shoe)?;
                drawn.extend(hand.cards().last().copied());
            }
            Action::Stand => {
                let hand = self.queue.front_mut().ok_or(ActionError::NoActiveHand)?;
                hand.stand();
            }
            Action::Double => {
                let hand = self.queue.front_mut().ok_or(ActionError::NoActiveHand)?;
                drawn.push(hand.double(&mut self.shoe, &mut self.session)?);
            }
            Action::Surrender => {
                let hand = self.queue.front_mut().ok_or(ActionError::NoActiveHand)?;
                let refund = hand.surrender(&mut self.session)?;
                log::debug!("hand surrendered, {refund} refunded");
            }
            Action::Split => {
                let hand = self.queue.front().ok_or(ActionError::NoActiveHand)?;
                let [first, second] = hand.split(&mut self.shoe, &mut self.session)?;
                drawn.extend(first.cards().last().copied());
                drawn.extend(second.cards().last().copied());

                self.queue.pop_front();
                self.queue.push_front(second);
                self.queue.push_front(first);
                log::debug!("hand split, {} hand(s) waiting", self.queue.len());
            }
        }

        let correct = self.session.record_decision(action, recommended);
        self.advance_turns();

        Ok(ActionOutcome {
            action,
            recommended,
            correct,
            drawn,
        })
    }

    /// Moves finished hands off the head of the queue.
    ///
    /// Once no hand is left to act, the round passes to the dealer.
    pub(super) fn advance_turns(&mut self) {
        while self.queue.front().is_some_and(|hand| hand.is_finished()) {
            if let Some(hand) = self.queue.pop_front() {
                log::trace!("hand done at {} ({:?})", hand.total(), hand.state());
                self.completed.push(hand);
            }
        }

        if self.queue.is_empty() {
            self.phase = RoundPhase::DealerTurn;
            log::debug!("player turns over, dealer to play");
        }
    }
}
