//! Round phase types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer is done; hands can be settled.
    Tally,
    /// Round has been settled.
    RoundComplete,
}

impl RoundPhase {
    /// Returns whether cards are in play (between the deal and settlement).
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(
            self,
            Self::Dealing | Self::PlayerTurns | Self::DealerTurn | Self::Tally
        )
    }
}
