//! Round controller and session state.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;
use core::time::Duration;

use crate::card::Card;
use crate::count::CountTracker;
use crate::error::{Rejection, ShoeError};
use crate::hand::{DealerHand, PlayerHand};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::stats::Statistics;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod snapshot;
pub mod state;

pub use snapshot::{DealerView, HandView, Snapshot, StatsView};
pub use state::{Action, GameEvent, GameState, InsuranceKind, Seat, Transition};

/// Deck counts accepted by [`Game::set_deck_count`].
pub const DECK_COUNT_RANGE: core::ops::RangeInclusive<u8> = 1..=8;

#[derive(Debug, Clone)]
struct Message {
    text: String,
    remaining: Duration,
}

#[derive(Debug, Clone)]
struct PendingResolution {
    remaining: Duration,
    result: RoundResult,
}

/// A single-player blackjack session that keeps a Hi-Lo count.
///
/// The game owns the shoe, the hands of the current round, the count and the
/// session statistics. Every intent runs to completion before returning;
/// the presentation layer reads [`Game::snapshot`] and
/// [`Game::drain_events`] and advances display pauses with [`Game::tick`].
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    shoe: Shoe,
    count: CountTracker,
    state: GameState,
    balance: usize,
    /// Selected bet between rounds, total on the table during a round.
    current_bet: usize,
    last_bet: usize,
    /// Bet unit of the current round; each split costs one more unit.
    wager: usize,
    hands: Vec<PlayerHand>,
    active: usize,
    dealer: DealerHand,
    insurance_offer: Option<InsuranceKind>,
    insurance_bet: usize,
    /// Whether the blackjack check has run this round.
    naturals_checked: bool,
    pending: Option<PendingResolution>,
    stats: Statistics,
    recent: VecDeque<Card>,
    message: Option<Message>,
    events: Vec<GameEvent>,
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.cards_remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        let recent = VecDeque::with_capacity(options.recent_cards);

        Self {
            shoe,
            count: CountTracker::new(),
            state: GameState::Betting,
            balance: options.starting_balance,
            current_bet: options.default_bet,
            last_bet: options.default_bet,
            wager: 0,
            hands: Vec::new(),
            active: 0,
            dealer: DealerHand::new(),
            insurance_offer: None,
            insurance_bet: 0,
            naturals_checked: false,
            pending: None,
            stats: Statistics::default(),
            recent,
            message: None,
            events: Vec::new(),
            last_result: None,
            options,
        }
    }

    /// Routes an intent through the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe runs out of cards mid-action.
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, ShoeError> {
        match action {
            Action::PlaceBet(amount) => Ok(self.place_bet(amount)),
            Action::ClearBet => Ok(self.clear_bet()),
            Action::Deal => self.deal(),
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::DoubleDown => self.double_down(),
            Action::Split => self.split(),
            Action::TakeInsurance => self.take_insurance(),
            Action::DeclineInsurance => self.decline_insurance(),
            Action::NewGame => Ok(self.new_game()),
            Action::SetDeckCount(decks) => Ok(self.set_deck_count(decks)),
            Action::ClearRecentCards => Ok(self.clear_recent_cards()),
        }
    }

    /// Returns `Some(Ignored)` when the current state does not permit `action`.
    fn guard(&self, action: Action) -> Option<Transition> {
        if self.state.permits(action) {
            None
        } else {
            log::trace!("ignored {action:?} in {:?}", self.state);
            Some(Transition::Ignored(Rejection::InvalidState))
        }
    }

    /// Starts over: full balance, zeroed statistics, fresh shoe and count.
    ///
    /// Legal in any state; a round in progress is abandoned.
    pub fn new_game(&mut self) -> Transition {
        log::info!("new game: balance {}", self.options.starting_balance);

        self.hands.clear();
        self.active = 0;
        self.dealer.clear();
        self.wager = 0;
        self.insurance_offer = None;
        self.insurance_bet = 0;
        self.naturals_checked = false;
        self.pending = None;
        self.last_result = None;
        self.balance = self.options.starting_balance;
        self.current_bet = self.last_bet;
        self.stats = Statistics::default();
        self.set_state(GameState::Betting);
        self.reshuffle();
        self.post_message("New game started!");

        Transition::Applied
    }

    /// Rebuilds the shoe with `decks` decks and resets the count.
    ///
    /// Only legal between rounds; `decks` must be within
    /// [`DECK_COUNT_RANGE`].
    pub fn set_deck_count(&mut self, decks: u8) -> Transition {
        if let Some(ignored) = self.guard(Action::SetDeckCount(decks)) {
            return ignored;
        }
        if !DECK_COUNT_RANGE.contains(&decks) {
            return Transition::Ignored(Rejection::InvalidDeckCount);
        }

        log::info!("deck count changed to {decks}");
        self.options.decks = decks;
        self.shoe.set_deck_count(decks);
        self.reset_count(decks);

        let plural = if decks > 1 { "s" } else { "" };
        self.post_message(alloc::format!(
            "Deck changed to {decks} deck{plural}. Cards shuffled!"
        ));

        Transition::Applied
    }

    /// Empties the recent-card strip. The count is unaffected.
    pub fn clear_recent_cards(&mut self) -> Transition {
        self.recent.clear();
        Transition::Applied
    }

    /// Stacks the shoe so the given cards are drawn next, in order.
    ///
    /// Only legal between rounds. Intended for drills and tests.
    ///
    /// # Errors
    ///
    /// Returns a [`ShoeError`] if a card is not available in the shoe. An
    /// intent outside betting is reported as `Ok(Ignored)`.
    pub fn place_on_top(&mut self, cards: &[Card]) -> Result<Transition, ShoeError> {
        if self.state != GameState::Betting {
            return Ok(Transition::Ignored(Rejection::InvalidState));
        }
        self.shoe.place_on_top(cards)?;
        Ok(Transition::Applied)
    }

    /// Advances display timers by `elapsed`.
    ///
    /// Expires the current message and, once its pause has elapsed, settles
    /// a pending round.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(message) = &mut self.message {
            message.remaining = message.remaining.saturating_sub(elapsed);
            if message.remaining.is_zero() {
                self.message = None;
            }
        }

        let due = match &mut self.pending {
            Some(pending) => {
                pending.remaining = pending.remaining.saturating_sub(elapsed);
                pending.remaining.is_zero()
            }
            None => false,
        };
        if due {
            self.settle_pending();
        }
    }

    /// Settles a pending round immediately, skipping the rest of its pause.
    pub fn finish_pending(&mut self) -> Transition {
        if self.settle_pending() {
            Transition::Applied
        } else {
            Transition::Ignored(Rejection::InvalidState)
        }
    }

    fn settle_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.complete_round(pending.result);
                true
            }
            None => false,
        }
    }

    /// Returns and clears the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Selected bet between rounds; total staked during a round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// The most recently selected bet.
    #[must_use]
    pub const fn last_bet(&self) -> usize {
        self.last_bet
    }

    /// Returns the player hands of the current round.
    #[must_use]
    pub fn hands(&self) -> &[PlayerHand] {
        &self.hands
    }

    /// Index of the hand receiving actions while playing.
    #[must_use]
    pub fn active_hand(&self) -> Option<usize> {
        (self.state == GameState::Playing).then_some(self.active)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the insurance offer awaiting an answer, if any.
    #[must_use]
    pub const fn insurance_offer(&self) -> Option<InsuranceKind> {
        self.insurance_offer
    }

    /// Returns the insurance stake of the current round.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Returns the running and true count.
    #[must_use]
    pub const fn count(&self) -> &CountTracker {
        &self.count
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.cards_remaining()
    }

    /// Returns the exposed cards of the strip, oldest first.
    #[must_use]
    pub fn recent_cards(&self) -> Vec<Card> {
        self.recent.iter().copied().collect()
    }

    /// Returns the current user message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    fn set_state(&mut self, to: GameState) {
        let from = self.state;
        if from != to {
            log::trace!("state {from:?} -> {to:?}");
            self.state = to;
            self.events.push(GameEvent::StateChanged { from, to });
        }
    }

    fn post_message(&mut self, text: impl Into<String>) {
        self.post_message_for(text, self.options.message_duration);
    }

    fn post_message_for(&mut self, text: impl Into<String>, duration: Duration) {
        let text = text.into();
        self.events.push(GameEvent::Message(text.clone()));
        self.message = Some(Message {
            text,
            remaining: duration,
        });
    }

    /// Records a card the player can now see: count, strip and event.
    fn expose(&mut self, card: Card) {
        self.count.observe(card, self.shoe.decks_remaining());
        if self.options.recent_cards > 0 {
            if self.recent.len() == self.options.recent_cards {
                self.recent.pop_front();
            }
            self.recent.push_back(card);
        }
    }

    /// Draws a face-up card for `seat`.
    fn draw_exposed(&mut self, seat: Seat) -> Result<Card, ShoeError> {
        let card = self.shoe.draw()?;
        self.expose(card);
        self.events.push(GameEvent::CardDealt {
            seat,
            card: Some(card),
        });
        Ok(card)
    }

    /// Turns the hole card over; counted on the first reveal only.
    fn reveal_hole(&mut self) {
        if let Some(hole) = self.dealer.reveal_hole() {
            log::debug!("dealer reveals {hole}");
            self.expose(hole);
            self.events.push(GameEvent::HoleCardRevealed(hole));
        }
    }

    fn reset_count(&mut self, decks: u8) {
        self.count.reset();
        self.recent.clear();
        self.events.push(GameEvent::Reshuffled { decks });
    }

    /// Rebuilds the shoe and zeroes the count.
    fn reshuffle(&mut self) {
        self.shoe.reshuffle();
        self.reset_count(self.shoe.deck_count());
    }
}
