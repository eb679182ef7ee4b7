//! Bankroll ledger and strategy-adherence counters for a play session.

use crate::strategy::Action;

/// Mutable ledger for a whole play session.
///
/// Bankroll changes are routed through the round engine and the hand actions;
/// the adherence counters only move through [`Session::record_decision`], so
/// `correct_actions <= total_actions` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    bankroll_start: f64,
    bankroll: f64,
    total_bet: f64,
    hands_played: u32,
    correct_actions: u32,
    total_actions: u32,
    active_hands: u8,
}

/// Summary statistics derived from a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    /// Current bankroll minus starting bankroll.
    pub net: f64,
    /// Percentage of decisions that matched the chart (`None` before the first decision).
    pub adherence: Option<f64>,
    /// Average initial bet per hand played (`None` before the first hand).
    pub average_bet: Option<f64>,
    /// Net result per hand played (`None` before the first hand).
    pub net_per_hand: Option<f64>,
}

impl Session {
    /// Starts a ledger with the given bankroll and seats per round.
    ///
    /// Values are not validated here; see
    /// [`SessionOptions::validate`](crate::SessionOptions::validate).
    #[must_use]
    pub const fn new(bankroll: f64, active_hands: u8) -> Self {
        Self {
            bankroll_start: bankroll,
            bankroll,
            total_bet: 0.0,
            hands_played: 0,
            correct_actions: 0,
            total_actions: 0,
            active_hands,
        }
    }

    /// Returns the starting bankroll.
    #[must_use]
    pub const fn bankroll_start(&self) -> f64 {
        self.bankroll_start
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the cumulative amount wagered at the betting step.
    #[must_use]
    pub const fn total_bet(&self) -> f64 {
        self.total_bet
    }

    /// Returns the number of hands bet on.
    #[must_use]
    pub const fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Returns the number of decisions that matched the chart.
    #[must_use]
    pub const fn correct_actions(&self) -> u32 {
        self.correct_actions
    }

    /// Returns the number of decisions made.
    #[must_use]
    pub const fn total_actions(&self) -> u32 {
        self.total_actions
    }

    /// Returns the number of seats dealt each round.
    #[must_use]
    pub const fn active_hands(&self) -> u8 {
        self.active_hands
    }

    /// Returns whether the bankroll covers `amount`.
    #[must_use]
    pub fn can_cover(&self, amount: f64) -> bool {
        amount <= self.bankroll
    }

    /// Removes `amount` from the bankroll.
    pub(crate) fn debit(&mut self, amount: f64) {
        self.bankroll -= amount;
    }

    /// Adds `amount` to the bankroll.
    pub(crate) fn credit(&mut self, amount: f64) {
        self.bankroll += amount;
    }

    /// Debits an opening bet and counts it towards the session totals.
    pub(crate) fn record_bet(&mut self, amount: f64) {
        self.debit(amount);
        self.total_bet += amount;
        self.hands_played += 1;
    }

    /// Records one player decision and returns whether it matched the chart.
    ///
    /// A missing recommendation never counts as a match.
    pub fn record_decision(&mut self, chosen: Action, recommended: Option<Action>) -> bool {
        let correct = recommended == Some(chosen);
        self.total_actions += 1;
        if correct {
            self.correct_actions += 1;
        }
        log::trace!(
            "decision {chosen:?} vs chart {recommended:?}: {}/{}",
            self.correct_actions,
            self.total_actions
        );
        correct
    }

    /// Computes the session statistics.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{Action, Session};
    ///
    /// let mut session = Session::new(100.0, 1);
    /// assert_eq!(session.stats().adherence, None);
    ///
    /// session.record_decision(Action::Hit, Some(Action::Hit));
    /// session.record_decision(Action::Stand, Some(Action::Hit));
    /// assert_eq!(session.stats().adherence, Some(50.0));
    /// ```
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        let net = self.bankroll - self.bankroll_start;
        let hands = f64::from(self.hands_played);

        let adherence = (self.total_actions > 0).then(|| {
            100.0 * f64::from(self.correct_actions) / f64::from(self.total_actions)
        });
        let average_bet = (self.hands_played > 0).then(|| self.total_bet / hands);
        let net_per_hand = (self.hands_played > 0).then(|| net / hands);

        SessionStats {
            net,
            adherence,
            average_bet,
            net_per_hand,
        }
    }
}
