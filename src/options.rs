//! Session configuration options.

use crate::error::SessionError;

/// Most seats a single player may play per round.
pub const MAX_ACTIVE_HANDS: u8 = 6;

/// Configuration for a training session.
///
/// Table rules are fixed; only the session parameters are configurable.
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtrainer::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_decks(8)
///     .with_bankroll(500.0)
///     .with_active_hands(3);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Starting bankroll.
    pub bankroll: f64,
    /// Seats played each round (1..=6).
    pub active_hands: u8,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            bankroll: 1000.0,
            active_hands: 1,
        }
    }
}

impl SessionOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_decks(4);
    /// assert_eq!(options.decks, 4);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_bankroll(250.0);
    /// assert_eq!(options.bankroll, 250.0);
    /// ```
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: f64) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the number of seats played each round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_active_hands(2);
    /// assert_eq!(options.active_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_active_hands(mut self, active_hands: u8) -> Self {
        self.active_hands = active_hands;
        self
    }

    /// Checks that the options describe a playable session.
    ///
    /// # Errors
    ///
    /// Returns an error if the bankroll is not positive and finite, the seat
    /// count is outside `1..=6`, or there are no decks.
    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.bankroll.is_finite() || self.bankroll <= 0.0 {
            return Err(SessionError::InvalidBankroll);
        }
        if !(1..=MAX_ACTIVE_HANDS).contains(&self.active_hands) {
            return Err(SessionError::InvalidHandCount);
        }
        if self.decks == 0 {
            return Err(SessionError::InvalidDecks);
        }
        Ok(())
    }
}
