//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in sorted-deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Single-letter symbol used when rendering a card.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
            Self::Clubs => 'C',
        }
    }
}

/// Rank of the Ace.
pub const ACE: u8 = 14;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Value of a non-Ace card towards a hand total (face cards count 10).
    ///
    /// Aces return 1 here; the hand decides whether one of them counts 11.
    #[must_use]
    pub const fn hard_value(&self) -> u8 {
        match self.rank {
            ACE => 1,
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Value of the card when it is the dealer's up-card (Ace counts 11).
    #[must_use]
    pub const fn up_value(&self) -> u8 {
        match self.rank {
            ACE => 11,
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Short rank label: `2`..`10`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            ACE => "A",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Appends one sorted 52-card deck to `cards`: ranks ascending, suits in
/// [`Suit::ALL`] order within each rank.
pub(crate) fn push_sorted_deck(cards: &mut alloc::vec::Vec<Card>) {
    for rank in 2..=ACE {
        for suit in Suit::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
}
