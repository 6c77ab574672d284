//! The shoe: every card of `decks` standard decks, shuffled and drawn from
//! the top.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// Cards below which the shoe is rebuilt at the end of a round.
pub const RESHUFFLE_THRESHOLD: usize = DECK_SIZE;

/// A multi-deck shoe.
///
/// The top of the shoe is the end of the undealt pile. Drawn cards move to
/// the dealt pile until the next rebuild, so `undealt + dealt` always equals
/// `decks * 52`.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u8,
    undealt: Vec<Card>,
    dealt: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds and shuffles a shoe of `decks` decks with the given seed.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            decks,
            undealt: Vec::new(),
            dealt: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        shoe
    }

    /// Collects every card, rebuilds the full shoe and shuffles it.
    pub fn reshuffle(&mut self) {
        self.dealt.clear();
        self.undealt.clear();
        self.undealt.reserve(self.total_cards());

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.undealt.push(Card::new(suit, rank));
                }
            }
        }

        self.undealt.shuffle(&mut self.rng);
        log::debug!("shoe rebuilt: {} decks, {} cards", self.decks, self.undealt.len());
    }

    /// Replaces the deck count and rebuilds, discarding cards in play.
    pub fn set_deck_count(&mut self, decks: u8) {
        self.decks = decks;
        self.reshuffle();
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no undealt cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.undealt.pop().ok_or(ShoeError::Empty)?;
        self.dealt.push(card);
        Ok(card)
    }

    /// Moves the given cards to the top of the shoe so they are drawn in the
    /// given order. The shoe still holds the same cards afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if more cards are requested than remain,
    /// or [`ShoeError::CardUnavailable`] if a card is not in the undealt pile
    /// (or has already been claimed by an earlier entry).
    pub fn place_on_top(&mut self, cards: &[Card]) -> Result<(), ShoeError> {
        if cards.is_empty() {
            return Ok(());
        }
        if cards.len() > self.undealt.len() {
            return Err(ShoeError::Empty);
        }

        let top = self.undealt.len() - 1;
        for (offset, &card) in cards.iter().enumerate() {
            let target = top - offset;
            let found = self.undealt[..=target]
                .iter()
                .rposition(|&c| c == card)
                .ok_or(ShoeError::CardUnavailable(card))?;
            self.undealt.swap(found, target);
        }

        Ok(())
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.decks
    }

    /// Total cards in a full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.undealt.len()
    }

    /// Undealt cards expressed in decks (fractional).
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn decks_remaining(&self) -> f64 {
        self.undealt.len() as f64 / DECK_SIZE as f64
    }

    /// Cards drawn since the last rebuild, oldest first.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Returns whether fewer than one deck remains.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.undealt.len() < RESHUFFLE_THRESHOLD
    }
}
