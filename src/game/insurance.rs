use crate::error::{Rejection, ShoeError};

use super::dealer::Settlement;
use super::{Action, Game, GameState, InsuranceKind, Transition};

impl Game {
    /// Returns whether insurance or even money is currently being offered.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.state == GameState::Insurance
    }

    /// Accepts the pending offer.
    ///
    /// Even money pays 1:1 at once and ends the round after the display
    /// pause. Insurance stakes half the wager (rounded down); if the balance
    /// cannot cover it the offer is declined instead and a message is posted.
    /// Either way the round then proceeds to the blackjack check.
    ///
    /// # Errors
    ///
    /// Infallible for now; returns `Result` like the other round intents.
    pub fn take_insurance(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.guard(Action::TakeInsurance) {
            return Ok(ignored);
        }
        let Some(kind) = self.insurance_offer.take() else {
            return Ok(Transition::Ignored(Rejection::InvalidState));
        };

        match kind {
            InsuranceKind::EvenMoney => {
                log::debug!("even money taken on {}", self.wager);
                let result = self.settle(Settlement::EvenMoney);
                self.post_message("Even money taken! 1:1 payout.");
                self.defer_round(result);
            }
            InsuranceKind::Insurance => {
                let cost = self.wager / 2;
                if self.balance < cost {
                    self.post_message("Insufficient funds for insurance!");
                } else {
                    log::debug!("insurance taken: {cost}");
                    self.balance -= cost;
                    self.insurance_bet = cost;
                }
                self.set_state(GameState::Playing);
                self.resolve_naturals();
            }
        }

        Ok(Transition::Applied)
    }

    /// Declines the pending offer and proceeds to the blackjack check.
    ///
    /// # Errors
    ///
    /// Infallible for now; returns `Result` like the other round intents.
    pub fn decline_insurance(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.guard(Action::DeclineInsurance) {
            return Ok(ignored);
        }

        self.insurance_offer = None;
        self.set_state(GameState::Playing);
        self.resolve_naturals();
        Ok(Transition::Applied)
    }

    /// Checks both hands for naturals before any player action.
    ///
    /// Turns the dealer's hole card over, counting it on this first reveal.
    /// The check runs once per round; the deal and the insurance answer run
    /// it already, so a repeated call is ignored.
    pub fn check_for_blackjacks(&mut self) -> Transition {
        let untouched = self.hands.len() == 1 && !self.hands[0].has_acted();
        if self.state != GameState::Playing || !untouched || self.naturals_checked {
            return Transition::Ignored(Rejection::InvalidState);
        }

        self.resolve_naturals();
        Transition::Applied
    }

    /// Reveals the hole card and settles the round at once if either side
    /// holds a natural.
    pub(super) fn resolve_naturals(&mut self) {
        self.naturals_checked = true;
        self.reveal_hole();

        let player_blackjack = self.hands[0].hand().is_blackjack();
        let dealer_blackjack = self.dealer.is_blackjack();

        if player_blackjack || dealer_blackjack {
            log::debug!("naturals: player {player_blackjack}, dealer {dealer_blackjack}");
            let result = self.settle(Settlement::Naturals);
            self.complete_round(result);
        } else if self.insurance_bet > 0 {
            self.post_message("Dealer does not have blackjack. Insurance lost.");
        }
    }
}
