use alloc::vec::Vec;

use crate::error::{BetError, DealError, EmptyShoe};
use crate::hand::Hand;

use super::{RoundEngine, RoundPhase};

impl RoundEngine {
    /// Places the opening bet for `seat`.
    ///
    /// The bet is debited immediately and counted towards the session's hands
    /// played and total wagered. A zero bet is allowed; that seat is played
    /// but not settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, the seat
    /// does not exist or already has a bet, the amount is negative or not a
    /// number, or the bankroll cannot cover it.
    pub fn place_bet(&mut self, seat: usize, amount: f64) -> Result<(), BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::InvalidState);
        }

        let slot = self.bets.get(seat).ok_or(BetError::SeatNotFound)?;
        if slot.is_some() {
            return Err(BetError::AlreadyPlaced);
        }

        if !amount.is_finite() || amount < 0.0 {
            return Err(BetError::InvalidAmount);
        }

        if !self.session.can_cover(amount) {
            return Err(BetError::InsufficientFunds);
        }

        self.session.record_bet(amount);
        self.bets[seat] = Some(amount);

        log::debug!("seat {seat} bets {amount}");
        Ok(())
    }

    /// Deals two cards to the dealer and every seat.
    ///
    /// Cards go to the dealer first, then to each seat in order, and the pass
    /// repeats once. Hands dealt a natural 21 never take a decision; if no
    /// hand needs one, the round moves straight to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, a seat has
    /// no bet, or the shoe cannot cover the deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Betting {
            return Err(DealError::InvalidState);
        }

        let bets = self
            .bets
            .iter()
            .copied()
            .collect::<Option<Vec<f64>>>()
            .ok_or(DealError::MissingBets)?;

        let cards_needed = (bets.len() + 1) * 2;
        if self.shoe.len() < cards_needed {
            return Err(DealError::EmptyShoe(EmptyShoe));
        }

        self.phase = RoundPhase::Dealing;

        let mut hands: Vec<Hand> = bets.into_iter().map(Hand::new).collect();
        self.dealer = Hand::dealer();
        self.hole_revealed = false;

        for _ in 0..2 {
            self.dealer.add_card(self.shoe.draw()?);
            for hand in &mut hands {
                hand.add_card(self.shoe.draw()?);
            }
        }

        log::debug!(
            "dealt {} hand(s), dealer shows {}",
            hands.len(),
            self.dealer.cards()[0]
        );

        self.completed.clear();
        self.queue = hands.into();
        self.phase = RoundPhase::PlayerTurns;
        self.advance_turns();

        Ok(())
    }
}
