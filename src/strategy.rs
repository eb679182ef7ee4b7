//! Basic-strategy decision chart.
//!
//! The chart targets 4–8 decks, dealer stands on all 17s, double after split
//! and late surrender, with no count-based deviations. It is consulted only to
//! grade the player's decisions; the engine never forces its advice.

use core::fmt;

use crate::hand::{Hand, HandState};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw exactly one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet and end the hand.
    Surrender,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Hit,
        Self::Stand,
        Self::Double,
        Self::Split,
        Self::Surrender,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
            Self::Surrender => "surrender",
        })
    }
}

/// Recommended actions for one `(total, dealer)` cell, one per way of reading
/// the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEntry {
    /// Advice when the total is hard.
    pub hard: Option<Action>,
    /// Advice when the total is soft.
    pub soft: Option<Action>,
    /// Advice when the hand is a pair making this total.
    pub pair: Option<Action>,
}

/// Largest total with a chart row.
pub const MAX_TOTAL: usize = 21;

/// Largest normalized dealer up-card value (Ace).
pub const MAX_DEALER: usize = 11;

/// The chart, indexed `[total][dealer up value]`.
pub type Chart = [[ChartEntry; MAX_DEALER + 1]; MAX_TOTAL + 1];

const H: Option<Action> = Some(Action::Hit);
const S: Option<Action> = Some(Action::Stand);
const D: Option<Action> = Some(Action::Double);
const P: Option<Action> = Some(Action::Split);
const R: Option<Action> = Some(Action::Surrender);
const X: Option<Action> = None;

const EMPTY: ChartEntry = ChartEntry {
    hard: X,
    soft: X,
    pair: X,
};

const NO_ROW: [ChartEntry; MAX_DEALER + 1] = [EMPTY; MAX_DEALER + 1];

/// Builds one chart row from the advice against dealer 2 through Ace.
/// Dealer values 0 and 1 cannot occur and stay empty.
const fn row(
    hard: [Option<Action>; 10],
    soft: [Option<Action>; 10],
    pair: [Option<Action>; 10],
) -> [ChartEntry; MAX_DEALER + 1] {
    let mut cells = NO_ROW;
    let mut i = 0;
    while i < 10 {
        cells[i + 2] = ChartEntry {
            hard: hard[i],
            soft: soft[i],
            pair: pair[i],
        };
        i += 1;
    }
    cells
}

const NONE: [Option<Action>; 10] = [X; 10];

#[rustfmt::skip]
static CHART: Chart = [
    NO_ROW,
    NO_ROW,
    NO_ROW,
    NO_ROW,
    //        2  3  4  5  6  7  8  9  10 A
    // 4
    row(NONE, NONE, [P, P, P, P, P, P, H, H, H, H]),
    // 5
    row([H, H, H, H, H, H, H, H, H, H], NONE, NONE),
    // 6
    row([H, H, H, H, H, H, H, H, H, H], NONE, [P, P, P, P, P, P, H, H, H, H]),
    // 7
    row([H, H, H, H, H, H, H, H, H, H], NONE, NONE),
    // 8
    row([H, H, H, H, H, H, H, H, H, H], NONE, [H, H, H, P, P, H, H, H, H, H]),
    // 9
    row([H, D, D, D, D, H, H, H, H, H], NONE, NONE),
    // 10
    row([D, D, D, D, D, D, D, D, H, H], NONE, [D, D, D, D, D, D, D, D, H, H]),
    // 11
    row([D, D, D, D, D, D, D, D, D, H], NONE, NONE),
    // 12
    row([H, H, S, S, S, H, H, H, H, H], NONE, [P, P, P, P, P, H, H, H, H, H]),
    // 13
    row([S, S, S, S, S, H, H, H, H, H], [H, H, H, D, D, H, H, H, H, H], NONE),
    // 14
    row([S, S, S, S, S, H, H, H, H, H], [H, H, H, D, D, H, H, H, H, H], [P, P, P, P, P, P, H, H, H, H]),
    // 15
    row([S, S, S, S, S, H, H, H, R, H], [H, H, D, D, D, H, H, H, H, H], NONE),
    // 16
    row([S, S, S, S, S, H, H, R, R, R], [H, H, D, D, D, H, H, H, H, H], [P, P, P, P, P, P, P, P, P, P]),
    // 17
    row([S, S, S, S, S, S, S, S, S, S], [H, D, D, D, D, H, H, H, H, H], NONE),
    // 18
    row([S, S, S, S, S, S, S, S, S, S], [S, D, D, D, D, S, S, H, H, H], [P, P, P, P, P, S, P, P, S, S]),
    // 19
    row([S, S, S, S, S, S, S, S, S, S], [S, S, S, S, S, S, S, S, S, S], NONE),
    // 20
    row([S, S, S, S, S, S, S, S, S, S], [S, S, S, S, S, S, S, S, S, S], [S, S, S, S, S, S, S, S, S, S]),
    // 21: the hand is already finished
    NO_ROW,
];

/// Returns the full chart.
#[must_use]
pub const fn chart() -> &'static Chart {
    &CHART
}

/// Returns the raw chart cell, or `None` outside the table.
#[must_use]
pub fn entry(total: u8, dealer_up: u8) -> Option<&'static ChartEntry> {
    CHART
        .get(usize::from(total))
        .and_then(|cells| cells.get(usize::from(dealer_up)))
}

/// Looks up the raw chart advice for a total read as `state`.
///
/// Blackjack hands have no row: they never take a decision.
#[must_use]
pub fn lookup(total: u8, state: HandState, dealer_up: u8) -> Option<Action> {
    let cell = entry(total, dealer_up)?;
    match state {
        HandState::Hard => cell.hard,
        HandState::Soft => cell.soft,
        HandState::Pair => cell.pair,
        HandState::Blackjack => None,
    }
}

/// Recommends an action for `hand` against a dealer up-card value
/// (Ace = 11, face cards = 10).
///
/// A pair of Aces is always split. A Double or Surrender suggestion for a
/// hand past its first two cards becomes Hit, since neither is allowed there.
///
/// # Example
///
/// ```
/// use bjtrainer::{Action, Card, Hand, Suit, strategy};
///
/// let hand = Hand::from_cards(&[Card::new(Suit::Hearts, 6), Card::new(Suit::Spades, 5)], 10.0);
/// assert_eq!(strategy::recommend(&hand, 6), Some(Action::Double));
/// ```
#[must_use]
pub fn recommend(hand: &Hand, dealer_up: u8) -> Option<Action> {
    if hand.is_surrendered() {
        return None;
    }

    if hand.state() == HandState::Pair && hand.cards().first().is_some_and(|c| c.is_ace()) {
        return Some(Action::Split);
    }

    let advice = lookup(hand.total(), hand.state(), dealer_up)?;
    match advice {
        Action::Double | Action::Surrender if hand.len() > 2 => Some(Action::Hit),
        other => Some(other),
    }
}
