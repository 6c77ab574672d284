//! Round result types for settlement.

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses to the dealer's higher value or dealer blackjack.
    Lose,
    /// Player busted.
    Bust,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
    /// Player took even money on a blackjack.
    EvenMoney,
}

impl HandOutcome {
    /// Returns whether the outcome pays more than the stake back.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack | Self::EvenMoney)
    }

    /// Player-facing message for a single-hand round.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Bust => "Bust! You lose!",
            Self::Push => "Push!",
            Self::Blackjack => "Blackjack!",
            Self::EvenMoney => "Even money taken! 1:1 payout.",
        }
    }

    /// Short label used when several hands are summarized.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Bust => "bust",
            Self::Push => "push",
            Self::Blackjack => "blackjack",
            Self::EvenMoney => "even money",
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// This hand's even share of the round's total wager.
    pub stake: usize,
    /// The amount credited back to the balance for this hand.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, in hand order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Whether the player was dealt a natural.
    pub player_blackjack: bool,
    /// Insurance bet amount (0 if no insurance taken).
    pub insurance_bet: usize,
    /// Insurance payout (0 if dealer didn't have blackjack or no insurance taken).
    pub insurance_payout: usize,
    /// Total credited to the balance, insurance included.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Player-facing summary of the round.
    pub summary: String,
}

impl RoundResult {
    /// Returns whether at least one hand won.
    #[must_use]
    pub fn any_won(&self) -> bool {
        self.hands.iter().any(|hand| hand.outcome.is_win())
    }
}
