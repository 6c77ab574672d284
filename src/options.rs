//! Game configuration options.

use core::time::Duration;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a training session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_starting_balance(500)
///     .with_insurance(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe (1 to 8).
    pub decks: u8,
    /// Balance at the start of every new game.
    pub starting_balance: usize,
    /// Bet preselected at the start of a session.
    pub default_bet: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether insurance (or even money) is offered against a dealer ace.
    pub insurance: bool,
    /// Maximum number of player hands after splitting.
    pub max_hands: usize,
    /// How many exposed cards the recent-card strip keeps.
    pub recent_cards: usize,
    /// Display pause before a bust or even-money round is settled.
    pub resolution_delay: Duration,
    /// How long a user message stays visible.
    pub message_duration: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_balance: 1000,
            default_bet: 25,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            insurance: true,
            max_hands: 4,
            recent_cards: 20,
            resolution_delay: Duration::from_millis(1500),
            message_duration: Duration::from_millis(3000),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the preselected bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_default_bet(10);
    /// assert_eq!(options.default_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: usize) -> Self {
        self.default_bet = bet;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_insurance(false);
    /// assert_eq!(options.insurance, false);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the maximum number of hands after splitting.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, hands: usize) -> Self {
        self.max_hands = hands;
        self
    }

    /// Sets the length of the recent-card strip.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_recent_cards(10);
    /// assert_eq!(options.recent_cards, 10);
    /// ```
    #[must_use]
    pub const fn with_recent_cards(mut self, cards: usize) -> Self {
        self.recent_cards = cards;
        self
    }

    /// Sets the pause before bust and even-money rounds are settled.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_resolution_delay(Duration::ZERO);
    /// assert_eq!(options.resolution_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Sets how long user messages stay visible.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_message_duration(Duration::from_secs(1));
    /// assert_eq!(options.message_duration, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub const fn with_message_duration(mut self, duration: Duration) -> Self {
        self.message_duration = duration;
        self
    }
}
