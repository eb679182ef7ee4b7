//! Round engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{BetError, ReshuffleError, SessionError};
use crate::hand::Hand;
use crate::options::SessionOptions;
use crate::session::{Session, SessionStats};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{BLACKJACK_RETURN, DEALER_STANDS_ON, WIN_RETURN};
pub use state::RoundPhase;

/// A single-player blackjack engine that grades decisions against basic
/// strategy.
///
/// The engine owns the shoe, the session ledger and every hand of the current
/// round. A round runs `start_round` → `place_bet` per seat → `deal` →
/// `submit_action` until the dealer's turn → `dealer_play` → `settle`.
///
/// Player hands waiting for a decision sit in a queue; the head of the queue
/// is the active hand. A split replaces the head with its two children so they
/// act next, before the hands that were already waiting.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Session options.
    options: SessionOptions,
    /// Cards in the shoe.
    shoe: Shoe,
    /// Random number generator used to rebuild the shoe.
    rng: ChaCha8Rng,
    /// Bankroll and adherence ledger.
    session: Session,
    /// Current round phase.
    phase: RoundPhase,
    /// Bet per seat for the current round.
    bets: Vec<Option<f64>>,
    /// Player hands still to act, active hand first.
    queue: VecDeque<Hand>,
    /// Player hands whose turn is over, in play order.
    completed: Vec<Hand>,
    /// Dealer's hand.
    dealer: Hand,
    /// Whether the dealer's hole card is revealed.
    hole_revealed: bool,
    /// Whether a draw failed this round for lack of cards.
    exhausted: bool,
}

impl RoundEngine {
    /// Starts a session with the given seed.
    ///
    /// The engine is ready for bets once created.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`SessionOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{RoundEngine, RoundPhase, SessionOptions};
    ///
    /// let engine = RoundEngine::new(SessionOptions::default(), 42).unwrap();
    /// assert_eq!(engine.phase(), RoundPhase::Betting);
    /// assert_eq!(engine.bankroll(), 1000.0);
    /// ```
    pub fn new(options: SessionOptions, seed: u64) -> Result<Self, SessionError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);
        let session = Session::new(options.bankroll, options.active_hands);
        let seats = usize::from(options.active_hands);

        log::debug!(
            "session started: bankroll {}, {seats} seat(s), {} deck(s)",
            options.bankroll,
            options.decks
        );

        Ok(Self {
            options,
            shoe,
            rng,
            session,
            phase: RoundPhase::Betting,
            bets: alloc::vec![None; seats],
            queue: VecDeque::new(),
            completed: Vec::new(),
            dealer: Hand::dealer(),
            hole_revealed: false,
            exhausted: false,
        })
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn can_replace_shoe(&self) -> bool {
        !self.phase.is_in_progress() || self.shoe.is_empty() || self.exhausted
    }

    /// Rebuilds and reshuffles the shoe.
    ///
    /// Allowed between rounds, or mid-round once the shoe is empty or a
    /// call has failed because it could not cover a draw.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress and the shoe can still
    /// deal.
    pub fn rebuild_shoe(&mut self) -> Result<(), ReshuffleError> {
        if !self.can_replace_shoe() {
            return Err(ReshuffleError::InvalidState);
        }

        self.shoe = Shoe::new(self.options.decks, &mut self.rng);
        self.exhausted = false;
        Ok(())
    }

    /// Replaces the shoe with `shoe`, returning the previous one.
    ///
    /// Same timing rules as [`RoundEngine::rebuild_shoe`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress and the shoe can still
    /// deal.
    pub fn replace_shoe(&mut self, shoe: Shoe) -> Result<Shoe, ReshuffleError> {
        if !self.can_replace_shoe() {
            return Err(ReshuffleError::InvalidState);
        }

        self.exhausted = false;
        Ok(core::mem::replace(&mut self.shoe, shoe))
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Starts the betting phase of a new round, clearing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or bets have already been
    /// placed for this round.
    pub fn start_round(&mut self) -> Result<(), BetError> {
        let bets_placed = self.bets.iter().any(Option::is_some);
        match self.phase {
            RoundPhase::RoundComplete => {}
            RoundPhase::Betting if !bets_placed => {}
            _ => return Err(BetError::InvalidState),
        }

        self.bets.iter_mut().for_each(|bet| *bet = None);
        self.queue.clear();
        self.completed.clear();
        self.dealer = Hand::dealer();
        self.hole_revealed = false;
        self.exhausted = false;
        self.phase = RoundPhase::Betting;

        log::debug!("round started, {} cards in shoe", self.shoe.len());
        Ok(())
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the session ledger.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.session.bankroll()
    }

    /// Returns the session statistics.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    /// Returns the bet placed on `seat` this round.
    #[must_use]
    pub fn seat_bet(&self, seat: usize) -> Option<f64> {
        self.bets.get(seat).copied().flatten()
    }

    /// Returns the hand whose turn it is.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.phase == RoundPhase::PlayerTurns {
            self.queue.front()
        } else {
            None
        }
    }

    /// Returns the player hands still waiting to act, active hand first.
    pub fn waiting_hands(&self) -> impl Iterator<Item = &Hand> {
        self.queue.iter()
    }

    /// Returns the player hands whose turn is over, in play order.
    #[must_use]
    pub fn completed_hands(&self) -> &[Hand] {
        &self.completed
    }

    /// Returns the dealer's up-card once dealt.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the dealer's up-card value for strategy lookups
    /// (Ace = 11, face cards = 10).
    fn dealer_up_value(&self) -> Option<u8> {
        self.dealer_up_card().map(Card::up_value)
    }

    /// Returns the dealer cards visible to the player: the up-card only until
    /// the hole card is revealed.
    #[must_use]
    pub fn dealer_visible_cards(&self) -> &[Card] {
        let cards = self.dealer.cards();
        if self.hole_revealed {
            cards
        } else {
            &cards[..cards.len().min(1)]
        }
    }

    /// Returns the dealer's full hand once the hole card is revealed.
    #[must_use]
    pub const fn dealer_hand(&self) -> Option<&Hand> {
        if self.hole_revealed {
            Some(&self.dealer)
        } else {
            None
        }
    }

    /// Returns whether the dealer's hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }
}
