//! Read-only projection of the game for rendering.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

use super::{Game, GameState, InsuranceKind};

/// One player hand as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Hand value.
    pub value: u8,
    /// Amount put down for the hand.
    pub stake: usize,
    /// Whether the hand has taken a card by hit or double.
    pub acted: bool,
    /// Whether the hand accepts no further actions.
    pub completed: bool,
}

/// The dealer's hand as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerView {
    /// Face-up cards.
    pub cards: Vec<Card>,
    /// Whether a face-down hole card is on the table.
    pub hole_hidden: bool,
    /// Value of the face-up cards.
    pub value: u8,
}

/// Counting and session statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsView {
    /// Running Hi-Lo count.
    pub running_count: i32,
    /// True count.
    pub true_count: i32,
    /// Undealt cards.
    pub cards_remaining: usize,
    /// Undealt cards in decks.
    pub decks_remaining: f64,
    /// Rounds with at least one winning hand.
    pub hands_won: u32,
    /// Rounds played.
    pub total_hands: u32,
    /// Win rate in percent.
    pub win_rate: u32,
    /// Player naturals.
    pub player_blackjacks: u32,
    /// Dealer naturals.
    pub dealer_blackjacks: u32,
}

/// Everything the presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current state.
    pub state: GameState,
    /// Player balance.
    pub balance: usize,
    /// Selected bet, or total staked during a round.
    pub current_bet: usize,
    /// Most recently selected bet.
    pub last_bet: usize,
    /// Player hands of the current or last round.
    pub hands: Vec<HandView>,
    /// Hand receiving actions, while playing.
    pub active_hand: Option<usize>,
    /// Dealer hand.
    pub dealer: DealerView,
    /// Offer awaiting an answer.
    pub insurance: Option<InsuranceKind>,
    /// Whether a split would be accepted now.
    pub can_split: bool,
    /// Whether a double down would be accepted now.
    pub can_double: bool,
    /// Counting and session statistics.
    pub stats: StatsView,
    /// Decks in the shoe.
    pub deck_count: u8,
    /// Transient user message.
    pub message: Option<String>,
    /// Most recent exposed cards, oldest first.
    pub recent_cards: Vec<Card>,
}

impl Game {
    /// Builds a snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let hands = self
            .hands
            .iter()
            .map(|hand| HandView {
                cards: hand.hand().cards().to_vec(),
                value: hand.hand().value(),
                stake: hand.stake(),
                acted: hand.has_acted(),
                completed: hand.is_completed(),
            })
            .collect();

        let dealer = DealerView {
            cards: self.dealer.visible_cards().to_vec(),
            hole_hidden: self.dealer.len() > 1 && !self.dealer.is_hole_revealed(),
            value: self.dealer.visible_value(),
        };

        let stats = StatsView {
            running_count: self.count.running_count(),
            true_count: self.count.true_count(),
            cards_remaining: self.shoe.cards_remaining(),
            decks_remaining: self.shoe.decks_remaining(),
            hands_won: self.stats.hands_won,
            total_hands: self.stats.total_hands,
            win_rate: self.stats.win_rate,
            player_blackjacks: self.stats.player_blackjacks,
            dealer_blackjacks: self.stats.dealer_blackjacks,
        };

        Snapshot {
            state: self.state,
            balance: self.balance,
            current_bet: self.current_bet,
            last_bet: self.last_bet,
            hands,
            active_hand: self.active_hand(),
            dealer,
            insurance: self.insurance_offer,
            can_split: self.can_split(),
            can_double: self.can_double(),
            stats,
            deck_count: self.shoe.deck_count(),
            message: self.message().map(String::from),
            recent_cards: self.recent_cards(),
        }
    }

    /// Returns whether a split would be accepted now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.state == GameState::Playing
            && self.hands.len() < self.options.max_hands
            && self.balance >= self.wager
            && self.hands.get(self.active).is_some_and(|hand| {
                !hand.is_completed() && !hand.has_acted() && hand.hand().is_pair()
            })
    }

    /// Returns whether a double down would be accepted now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.state == GameState::Playing
            && self.hands.get(self.active).is_some_and(|hand| {
                !hand.is_completed() && !hand.has_acted() && self.balance >= self.wager
            })
    }
}
