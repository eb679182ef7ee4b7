//! The multi-deck card supply.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, push_sorted_deck};
use crate::error::EmptyShoe;

/// A shuffled supply of cards drawn from one or more standard decks.
///
/// The next card to deal is kept at the end of the backing vector so drawing
/// is a `pop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `decks` sorted decks and shuffles them with `rng`.
    ///
    /// The shuffle is the unbiased Fisher–Yates provided by
    /// [`SliceRandom::shuffle`].
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            push_sorted_deck(&mut cards);
        }

        cards.shuffle(rng);
        log::debug!("built shoe with {decks} deck(s), {} cards", cards.len());

        Self { cards }
    }

    /// Builds a shuffled shoe from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::from_seed(2, 7);
    /// assert_eq!(shoe.len(), 2 * DECK_SIZE);
    /// assert_eq!(shoe, Shoe::from_seed(2, 7));
    /// ```
    #[must_use]
    pub fn from_seed(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(decks, &mut rng)
    }

    /// Builds an unshuffled shoe that deals `draws` in the given order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{Card, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::stacked(&[Card::new(Suit::Hearts, 9), Card::new(Suit::Clubs, 4)]);
    /// assert_eq!(shoe.draw().unwrap().rank, 9);
    /// assert_eq!(shoe.draw().unwrap().rank, 4);
    /// assert!(shoe.draw().is_err());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoe`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyShoe> {
        let card = self.cards.pop().ok_or(EmptyShoe)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the next card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
