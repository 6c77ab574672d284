//! A blackjack engine for practicing Hi-Lo card counting, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that runs single-player rounds
//! (betting, insurance, hit/stand/double/split, dealer play, settlement)
//! while keeping the running and true count of every card the player sees.
//! A presentation layer dispatches [`Action`]s, renders [`Snapshot`]s and
//! drives display pauses with [`Game::tick`].
//!
//! # Example
//!
//! ```
//! use bjcount::{Action, Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! assert!(game.dispatch(Action::PlaceBet(10)).unwrap().is_applied());
//! assert!(game.dispatch(Action::Deal).unwrap().is_applied());
//! assert_ne!(game.state(), GameState::DealerTurn);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use count::CountTracker;
pub use error::{Rejection, ShoeError};
pub use game::{
    Action, DECK_COUNT_RANGE, DealerView, Game, GameEvent, GameState, HandView, InsuranceKind,
    Seat, Snapshot, StatsView, Transition,
};
pub use hand::{DealerHand, Hand, PlayerHand};
pub use options::{GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::{RESHUFFLE_THRESHOLD, Shoe};
pub use stats::Statistics;
