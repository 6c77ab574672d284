//! Game state, intents and events.

use alloc::string::String;

use crate::card::Card;
use crate::error::Rejection;
use crate::result::RoundResult;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds: bets, deck changes and dealing are accepted.
    Betting,
    /// Dealer shows an ace and an insurance (or even-money) answer is due.
    Insurance,
    /// Waiting for actions on the active hand.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The round is decided and waits for its display pause to elapse.
    Resolving,
}

impl GameState {
    /// Returns whether `action` may be attempted in this state.
    ///
    /// Hand-level preconditions (pairs, funds, hand limits) are checked on
    /// top of this table.
    #[must_use]
    pub const fn permits(self, action: Action) -> bool {
        matches!(
            (self, action),
            (
                Self::Betting,
                Action::PlaceBet(_) | Action::ClearBet | Action::Deal | Action::SetDeckCount(_)
            ) | (
                Self::Insurance,
                Action::TakeInsurance | Action::DeclineInsurance
            ) | (
                Self::Playing,
                Action::Hit | Action::Stand | Action::DoubleDown | Action::Split
            ) | (_, Action::NewGame | Action::ClearRecentCards)
        )
    }

    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn in_round(self) -> bool {
        !matches!(self, Self::Betting)
    }
}

/// An intent dispatched by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the bet for the next round.
    PlaceBet(usize),
    /// Zero the selected bet.
    ClearBet,
    /// Start a round with the selected bet.
    Deal,
    /// Draw a card to the active hand.
    Hit,
    /// Finish the active hand.
    Stand,
    /// Double the active hand's stake and take exactly one card.
    DoubleDown,
    /// Split the active pair into two hands.
    Split,
    /// Accept insurance, or even money when holding blackjack.
    TakeInsurance,
    /// Decline insurance or even money.
    DeclineInsurance,
    /// Reset balance, statistics and shoe.
    NewGame,
    /// Rebuild the shoe with a new number of decks.
    SetDeckCount(u8),
    /// Empty the recent-card strip.
    ClearRecentCards,
}

/// Outcome of dispatching an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    /// The intent changed the game.
    Applied,
    /// The intent was not legal; nothing changed.
    Ignored(Rejection),
}

impl Transition {
    /// Returns whether the intent was applied.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns whether the intent was ignored.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Flavor of the side offer made against a dealer ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceKind {
    /// Side bet of half the wager, paying 2:1 on dealer blackjack.
    Insurance,
    /// Guaranteed 1:1 on a player blackjack.
    EvenMoney,
}

/// Where a card went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// A player hand, by index.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// Something the presentation layer may want to render.
///
/// Events accumulate until [`Game::drain_events`](super::Game::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The game moved between states.
    StateChanged {
        /// Previous state.
        from: GameState,
        /// New state.
        to: GameState,
    },
    /// A card left the shoe. Face-down cards carry no card.
    CardDealt {
        /// Receiving hand.
        seat: Seat,
        /// The card, if dealt face up.
        card: Option<Card>,
    },
    /// The dealer turned the hole card over.
    HoleCardRevealed(Card),
    /// Insurance or even money is on offer.
    InsuranceOffered(InsuranceKind),
    /// A hand was split; the new hand sits at `new_index`.
    HandSplit {
        /// Index of the hand that was split.
        from_index: usize,
        /// Index of the newly created hand.
        new_index: usize,
    },
    /// The shoe was rebuilt and the count reset.
    Reshuffled {
        /// Decks in the new shoe.
        decks: u8,
    },
    /// A round was settled.
    RoundSettled(RoundResult),
    /// A user message was posted.
    Message(String),
}
