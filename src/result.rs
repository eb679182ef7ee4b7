//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::strategy::Action;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie), including a blackjack against a dealer blackjack.
    Push,
    /// Player has blackjack.
    Blackjack,
    /// Player surrendered.
    Surrendered,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// Position of the hand in play order (split hands take their parent's place).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet on the hand.
    pub bet: f64,
    /// Amount returned to the bankroll at settlement.
    pub payout: f64,
    /// The player's hand total.
    pub player_total: u8,
    /// The dealer's hand total.
    pub dealer_total: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Results for each settled hand.
    pub hands: Vec<HandResult>,
    /// Sum of all payouts.
    pub total_payout: f64,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

/// What happened when a player action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// The action that was applied.
    pub action: Action,
    /// The chart's advice for the hand before the action.
    pub recommended: Option<Action>,
    /// Whether the action matched the advice.
    pub correct: bool,
    /// Cards drawn by the action, in draw order.
    pub drawn: Vec<Card>,
}
