//! Hi-Lo running and true count.

use crate::card::Card;

#[cfg(feature = "std")]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_half_up(value: f64) -> f64 {
    libm::floor(value + 0.5)
}

/// Running and true count over the cards exposed since the last reshuffle.
///
/// Feed every card exactly once, at the moment it becomes visible. The hole
/// card is observed when it is turned over, not when it is dealt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountTracker {
    running: i32,
    true_count: i32,
}

impl CountTracker {
    /// Creates a tracker at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            running: 0,
            true_count: 0,
        }
    }

    /// Adds the card's Hi-Lo weight and recomputes the true count against
    /// `decks_remaining` (undealt cards / 52). With no decks remaining the
    /// true count is zero.
    pub fn observe(&mut self, card: Card, decks_remaining: f64) {
        self.running += card.hi_lo();
        self.true_count = if decks_remaining <= 0.0 {
            0
        } else {
            round_half_up(f64::from(self.running) / decks_remaining) as i32
        };
        log::trace!(
            "observed {card}: running {}, true {}",
            self.running,
            self.true_count
        );
    }

    /// Zeroes both counts.
    pub const fn reset(&mut self) {
        self.running = 0;
        self.true_count = 0;
    }

    /// Sum of Hi-Lo weights seen since the last reset.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running
    }

    /// Running count per remaining deck, rounded to the nearest integer
    /// (halves round up).
    #[must_use]
    pub const fn true_count(&self) -> i32 {
        self.true_count
    }
}
