//! Error types for session setup and round operations.

use thiserror::Error;

/// The shoe ran out of cards.
///
/// The engine never reshuffles on its own; the caller decides when to call
/// [`RoundEngine::rebuild_shoe`](crate::RoundEngine::rebuild_shoe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoe;

/// Errors that can occur when starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Starting bankroll is not a positive, finite amount.
    #[error("starting bankroll must be a positive amount")]
    InvalidBankroll,
    /// Number of hands per round is outside 1..=6.
    #[error("number of hands per round must be between 1 and 6")]
    InvalidHandCount,
    /// The shoe needs at least one deck.
    #[error("the shoe needs at least one deck")]
    InvalidDecks,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round phase for betting.
    #[error("invalid round phase for betting")]
    InvalidState,
    /// Seat index is outside the configured number of hands.
    #[error("seat not found")]
    SeatNotFound,
    /// Bet amount is negative or not a number.
    #[error("bet amount must be a non-negative number")]
    InvalidAmount,
    /// Bet exceeds the current bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A bet has already been placed on this seat.
    #[error("a bet has already been placed on this seat")]
    AlreadyPlaced,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// Not every seat has placed a bet.
    #[error("not every seat has placed a bet")]
    MissingBets,
    /// Not enough cards in the shoe for the initial deal.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoe),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// No hand is waiting for a decision.
    #[error("no hand is waiting for a decision")]
    NoActiveHand,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Cannot surrender this hand.
    #[error("cannot surrender this hand")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoe),
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round phase for this step.
    #[error("invalid round phase for showdown")]
    InvalidState,
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoe),
}

/// Errors that can occur when rebuilding the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is in progress.
    #[error("cannot rebuild the shoe while a round is in progress")]
    InvalidState,
}
