use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{RoundEngine, RoundPhase};

/// Dealer draws while below this total, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Total return on a winning blackjack, as a multiple of the bet.
pub const BLACKJACK_RETURN: f64 = 2.5;

/// Total return on an ordinary win, as a multiple of the bet.
pub const WIN_RETURN: f64 = 2.0;

/// Settles one player hand against the dealer. Returns the outcome and the
/// amount returned to the bankroll (stake included).
fn settle_hand(hand: &Hand, dealer: &Hand) -> (HandOutcome, f64) {
    let bet = hand.bet();
    let total = hand.total();
    let dealer_total = dealer.total();

    if hand.is_surrendered() {
        // Half the bet was refunded when the hand was given up.
        (HandOutcome::Surrendered, 0.0)
    } else if hand.is_blackjack() {
        if dealer.is_blackjack() {
            (HandOutcome::Push, bet)
        } else {
            (HandOutcome::Blackjack, bet * BLACKJACK_RETURN)
        }
    } else if total < 22 && (dealer_total > 21 || dealer_total < total) {
        (HandOutcome::Win, bet * WIN_RETURN)
    } else if total < 22 && dealer_total == total {
        (HandOutcome::Push, bet)
    } else {
        (HandOutcome::Lose, 0.0)
    }
}

impl RoundEngine {
    /// Dealer reveals the hole card and draws until reaching 17 or more.
    ///
    /// The dealer stands on every 17, soft or hard, and draws even when every
    /// player hand has already lost. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe runs out.
    /// After an empty-shoe error the round stays on the dealer's turn, so the
    /// caller can rebuild the shoe and call again.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.hole_revealed = true;

        let mut drawn_cards = Vec::new();
        while self.dealer.total() < DEALER_STANDS_ON {
            let card = self.shoe.draw().inspect_err(|_| self.exhausted = true)?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer stands at {} after drawing {} card(s)",
            self.dealer.total(),
            drawn_cards.len()
        );
        self.phase = RoundPhase::Tally;

        Ok(drawn_cards)
    }

    /// Settles every player hand and pays the session.
    ///
    /// Hands with no bet are skipped. A blackjack returns 2.5× the bet
    /// (1× against a dealer blackjack), a win 2×, a push 1×, and a loss,
    /// bust or surrender nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.phase != RoundPhase::Tally {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_total = self.dealer.total();
        let mut hands = Vec::new();
        let mut total_payout = 0.0;

        for (hand_index, hand) in self.completed.iter().enumerate() {
            if hand.bet() <= 0.0 {
                continue;
            }

            let (outcome, payout) = settle_hand(hand, &self.dealer);
            self.session.credit(payout);
            total_payout += payout;

            log::debug!(
                "hand {hand_index}: {} vs {dealer_total} -> {outcome:?}, pays {payout}",
                hand.total()
            );

            hands.push(HandResult {
                hand_index,
                outcome,
                bet: hand.bet(),
                payout,
                player_total: hand.total(),
                dealer_total,
            });
        }

        self.phase = RoundPhase::RoundComplete;

        Ok(RoundResult {
            hands,
            total_payout,
            dealer_total,
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack: self.dealer.is_blackjack(),
        })
    }
}
