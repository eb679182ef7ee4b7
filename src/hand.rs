//! Hand representation, totaling and the per-hand actions.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, EmptyShoe};
use crate::session::Session;
use crate::shoe::Shoe;

/// Total forced onto a surrendered hand so it can never win at settlement.
pub const SURRENDER_TOTAL: u8 = 22;

/// Sums the cards with at most one Ace counted as 11.
///
/// Every Ace is first counted as 1; if the total still has room, one of them
/// is promoted to 11 and the hand is soft. Returns `(total, is_soft)`.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.hard_value());
    }

    if aces > 0 && total <= 11 {
        (total + 10, true)
    } else {
        (total, false)
    }
}

/// How a hand's total is read for strategy purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    /// No Ace counts as 11.
    Hard,
    /// One Ace counts as 11.
    Soft,
    /// Exactly two cards of equal rank.
    Pair,
    /// Two cards totaling 21.
    Blackjack,
}

/// A player or dealer hand.
///
/// The dealer's hand is an ordinary hand with a zero bet.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Derived total.
    total: u8,
    /// Derived state.
    state: HandState,
    /// Amount riding on this hand.
    bet: f64,
    /// Whether the hand's turn is over.
    finished: bool,
    /// Whether the bet was doubled.
    doubled: bool,
    /// Whether the hand was surrendered.
    surrendered: bool,
    /// Whether this hand came out of a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: f64) -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            state: HandState::Hard,
            bet,
            finished: false,
            doubled: false,
            surrendered: false,
            from_split: false,
        }
    }

    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(0.0)
    }

    /// Creates a hand holding `cards` in order.
    #[must_use]
    pub fn from_cards(cards: &[Card], bet: f64) -> Self {
        let mut hand = Self::new(bet);
        hand.cards.extend_from_slice(cards);
        hand.recalculate_total();
        hand
    }

    /// Creates a split child seeded with one card of the parent pair.
    fn from_split(card: Card, bet: f64) -> Self {
        let mut hand = Self::from_cards(&[card], bet);
        hand.from_split = true;
        hand
    }

    /// Adds a card to the hand and re-derives its total and state.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.recalculate_total();
    }

    /// Re-derives total, state and the finished flag from the cards.
    ///
    /// Idempotent for a given card sequence. A hand reaching 21 or more is
    /// finished; a surrendered hand keeps [`SURRENDER_TOTAL`].
    pub fn recalculate_total(&mut self) {
        if self.surrendered {
            self.total = SURRENDER_TOTAL;
            self.finished = true;
            return;
        }

        let (total, soft) = evaluate_cards(&self.cards);
        self.total = total;

        self.state = if self.is_pair() {
            HandState::Pair
        } else if soft {
            HandState::Soft
        } else {
            HandState::Hard
        };

        if total == 21 && self.cards.len() == 2 {
            self.state = HandState::Blackjack;
        }
        if total >= 21 {
            self.finished = true;
        }
    }

    fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the hand state.
    #[must_use]
    pub const fn state(&self) -> HandState {
        self.state
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Returns whether the hand's turn is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns whether the hand is a natural 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.state == HandState::Blackjack
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand was surrendered.
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand is still on its first decision.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        !self.finished && self.cards.len() == 2
    }

    /// Returns whether the hand can be doubled.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.is_opening()
    }

    /// Returns whether the hand can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        !self.finished && self.is_pair()
    }

    /// Returns whether the hand can be surrendered.
    #[must_use]
    pub fn can_surrender(&self) -> bool {
        self.is_opening()
    }

    /// Draws one card into the hand.
    ///
    /// Returns whether the hand is now finished (bust or 21).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoe`] if the shoe has no cards; the hand is unchanged.
    pub fn hit(&mut self, shoe: &mut Shoe) -> Result<bool, EmptyShoe> {
        let card = shoe.draw()?;
        self.add_card(card);
        Ok(self.finished)
    }

    /// Ends the hand's turn without drawing.
    pub const fn stand(&mut self) {
        self.finished = true;
    }

    /// Doubles the bet, draws exactly one card and ends the turn.
    ///
    /// The extra stake is debited from `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is past its first decision, the bankroll
    /// cannot cover the extra stake, or the shoe is empty. Nothing is
    /// changed on error.
    pub fn double(&mut self, shoe: &mut Shoe, session: &mut Session) -> Result<Card, ActionError> {
        if !self.can_double() {
            return Err(ActionError::CannotDouble);
        }
        if !session.can_cover(self.bet) {
            return Err(ActionError::InsufficientFunds);
        }

        let card = shoe.draw()?;
        session.debit(self.bet);
        self.bet *= 2.0;
        self.doubled = true;
        self.add_card(card);
        self.finished = true;

        Ok(card)
    }

    /// Splits a pair into two child hands.
    ///
    /// A second stake equal to the bet is debited from `session`. Each child
    /// keeps one card of the pair and immediately draws a second one, first
    /// child first. The caller replaces this hand with the children.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not an unfinished pair, the bankroll
    /// cannot cover the second stake, or the shoe holds fewer than two cards.
    /// Nothing is changed on error.
    pub fn split(&self, shoe: &mut Shoe, session: &mut Session) -> Result<[Self; 2], ActionError> {
        if !self.can_split() {
            return Err(ActionError::CannotSplit);
        }
        if !session.can_cover(self.bet) {
            return Err(ActionError::InsufficientFunds);
        }
        if shoe.len() < 2 {
            return Err(ActionError::EmptyShoe(EmptyShoe));
        }

        session.debit(self.bet);

        let mut first = Self::from_split(self.cards[0], self.bet);
        let mut second = Self::from_split(self.cards[1], self.bet);
        first.hit(shoe)?;
        second.hit(shoe)?;

        Ok([first, second])
    }

    /// Gives up the hand, refunding half the bet to `session`.
    ///
    /// Returns the refunded amount.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSurrender`] unless the hand is on its
    /// first decision.
    pub fn surrender(&mut self, session: &mut Session) -> Result<f64, ActionError> {
        if !self.can_surrender() {
            return Err(ActionError::CannotSurrender);
        }

        let refund = self.bet / 2.0;
        session.credit(refund);
        self.surrendered = true;
        self.recalculate_total();

        Ok(refund)
    }
}
