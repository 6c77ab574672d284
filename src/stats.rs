//! Session statistics.

/// Counters kept across rounds until a new game starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Rounds in which at least one hand won.
    pub hands_won: u32,
    /// Rounds played.
    pub total_hands: u32,
    /// `hands_won / total_hands` as a rounded percentage.
    pub win_rate: u32,
    /// Rounds in which the player was dealt a natural.
    pub player_blackjacks: u32,
    /// Rounds in which the dealer was dealt a natural.
    pub dealer_blackjacks: u32,
}

impl Statistics {
    /// Records one finished round and recomputes the win rate.
    pub const fn record_round(&mut self, won: bool, player_blackjack: bool, dealer_blackjack: bool) {
        self.total_hands += 1;
        if won {
            self.hands_won += 1;
        }
        if player_blackjack {
            self.player_blackjacks += 1;
        }
        if dealer_blackjack {
            self.dealer_blackjacks += 1;
        }
        self.win_rate = win_rate(self.hands_won, self.total_hands);
    }
}

// Integer round-half-up of won / total * 100.
const fn win_rate(won: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (won * 200 + total) / (total * 2)
}

