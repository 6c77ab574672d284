use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ShoeError;
use crate::hand::Hand;
use crate::options::RoundingMode;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, GameEvent, GameState, PendingResolution, Seat};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// How a round is being settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Settlement {
    /// Right after the deal, because someone holds a natural.
    Naturals,
    /// The player took even money.
    EvenMoney,
    /// Hands compared against the dealer's final total.
    Showdown,
}

fn showdown(hand: &Hand, stake: usize, dealer_value: u8, dealer_bust: bool) -> (HandOutcome, usize) {
    let value = hand.value();
    if hand.is_busted() {
        (HandOutcome::Bust, 0)
    } else if dealer_bust || value > dealer_value {
        (HandOutcome::Win, stake * 2)
    } else if value == dealer_value {
        (HandOutcome::Push, stake)
    } else {
        (HandOutcome::Lose, 0)
    }
}

fn summarize(hands: &[HandResult], insurance_payout: usize) -> String {
    let mut summary = String::new();
    if insurance_payout > 0 {
        summary.push_str("Insurance pays 2:1! ");
    }

    if let [hand] = hands {
        summary.push_str(hand.outcome.message());
        return summary;
    }

    for (i, hand) in hands.iter().enumerate() {
        if i > 0 {
            summary.push_str(" | ");
        }
        summary.push_str(&format!(
            "Hand {}: {} ({} vs {})",
            i + 1,
            hand.outcome.label(),
            hand.player_value,
            hand.dealer_value
        ));
    }
    summary
}

impl Game {
    /// Dealer plays their hand: reveal the hole card, then draw while under
    /// 17. The dealer stands on every 17, soft or hard.
    pub(super) fn play_dealer(&mut self) -> Result<(), ShoeError> {
        self.set_state(GameState::DealerTurn);
        self.reveal_hole();

        while self.dealer.value() < 17 {
            let card = self.draw_exposed(Seat::Dealer)?;
            self.dealer.add_card(card);
        }

        log::debug!("dealer stands on {}", self.dealer.value());
        Ok(())
    }

    fn blackjack_payout(&self, stake: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (stake as f64) * self.options.blackjack_pays;
        stake + round_amount(winnings, self.options.rounding_blackjack)
    }

    /// Splits the round's total wager evenly across the hands. Leftover
    /// chips go to the first hands, so the shares always sum to the wager.
    fn wager_shares(&self) -> Vec<usize> {
        let count = self.hands.len().max(1);
        let share = self.current_bet / count;
        let extra = self.current_bet % count;
        (0..self.hands.len())
            .map(|i| share + usize::from(i < extra))
            .collect()
    }

    /// Decides every hand, credits the payouts and builds the result.
    ///
    /// Each hand is paid on its even share of the total wager. The hole
    /// card is turned over if it has not been already.
    pub(super) fn settle(&mut self, settlement: Settlement) -> RoundResult {
        self.reveal_hole();

        let dealer_value = self.dealer.value();
        let dealer_bust = self.dealer.is_bust();
        let dealer_blackjack = self.dealer.is_blackjack();
        let player_blackjack = self.hands.len() == 1 && self.hands[0].hand().is_blackjack();

        let shares = self.wager_shares();
        let mut hands = Vec::with_capacity(self.hands.len());
        for (hand_index, (seat, &stake)) in self.hands.iter().zip(&shares).enumerate() {
            let (outcome, payout) = match settlement {
                Settlement::EvenMoney => (HandOutcome::EvenMoney, stake * 2),
                Settlement::Naturals if player_blackjack && dealer_blackjack => {
                    (HandOutcome::Push, stake)
                }
                Settlement::Naturals if player_blackjack => {
                    (HandOutcome::Blackjack, self.blackjack_payout(stake))
                }
                Settlement::Naturals | Settlement::Showdown => {
                    showdown(seat.hand(), stake, dealer_value, dealer_bust)
                }
            };

            hands.push(HandResult {
                hand_index,
                outcome,
                stake,
                payout,
                player_value: seat.hand().value(),
                dealer_value,
            });
        }

        // Insurance pays 2:1 plus the stake back.
        let insurance_payout = if dealer_blackjack {
            self.insurance_bet * 3
        } else {
            0
        };

        let total_payout = hands.iter().map(|h| h.payout).sum::<usize>() + insurance_payout;
        let staked = self.current_bet + self.insurance_bet;
        self.balance += total_payout;

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - staked as isize;

        let summary = summarize(&hands, insurance_payout);
        log::debug!("settled: {summary} (net {net}, balance {})", self.balance);

        RoundResult {
            hands,
            dealer_value,
            dealer_bust,
            dealer_blackjack,
            player_blackjack,
            insurance_bet: self.insurance_bet,
            insurance_payout,
            total_payout,
            net,
            summary,
        }
    }

    /// Completes a settled round after the display pause, or at once when
    /// the pause is zero.
    pub(super) fn defer_round(&mut self, result: RoundResult) {
        let delay = self.options.resolution_delay;
        if delay.is_zero() {
            self.complete_round(result);
            return;
        }

        self.pending = Some(PendingResolution {
            remaining: delay,
            result,
        });
        self.set_state(GameState::Resolving);
    }

    /// End-of-round bookkeeping: statistics, bet reset, back to betting and
    /// a reshuffle once fewer than one deck remains.
    pub(super) fn complete_round(&mut self, result: RoundResult) {
        self.stats.record_round(
            result.any_won(),
            result.player_blackjack,
            result.dealer_blackjack,
        );
        self.insurance_offer = None;
        self.current_bet = self.last_bet;
        self.set_state(GameState::Betting);

        let mut message = result.summary.clone();
        self.events.push(GameEvent::RoundSettled(result.clone()));
        self.last_result = Some(result);

        if self.shoe.needs_reshuffle() {
            log::debug!("{} cards left, reshuffling", self.shoe.cards_remaining());
            self.reshuffle();
            message.push_str(" Deck reshuffled!");
        }
        self.post_message(message);
    }
}
