//! A blackjack basic-strategy trainer engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that runs single-player rounds from
//! betting through settlement, grading every decision against a fixed
//! basic-strategy chart and keeping session statistics.
//!
//! # Example
//!
//! ```
//! use bjtrainer::{RoundEngine, RoundPhase, SessionOptions};
//!
//! let mut engine = RoundEngine::new(SessionOptions::default(), 42).unwrap();
//! engine.place_bet(0, 10.0).unwrap();
//! engine.deal().unwrap();
//!
//! while engine.phase() == RoundPhase::PlayerTurns {
//!     let action = engine.recommended_action().unwrap();
//!     engine.submit_action(action).unwrap();
//! }
//!
//! engine.dealer_play().unwrap();
//! engine.settle().unwrap();
//! assert_eq!(engine.stats().adherence, Some(100.0));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, Suit};
pub use error::{
    ActionError, BetError, DealError, EmptyShoe, ReshuffleError, SessionError, ShowdownError,
};
pub use game::{RoundEngine, RoundPhase};
pub use hand::{Hand, HandState, SURRENDER_TOTAL};
pub use options::{MAX_ACTIVE_HANDS, SessionOptions};
pub use result::{ActionOutcome, HandOutcome, HandResult, RoundResult};
pub use session::{Session, SessionStats};
pub use shoe::Shoe;
pub use strategy::{Action, ChartEntry};
