use crate::error::{Rejection, ShoeError};
use crate::hand::PlayerHand;

use super::{Action, Game, GameEvent, GameState, InsuranceKind, Seat, Transition};

impl Game {
    /// Selects the bet for the next round.
    ///
    /// The amount must be between 1 and the balance; otherwise a message is
    /// posted and the bet is left unchanged.
    pub fn place_bet(&mut self, amount: usize) -> Transition {
        if let Some(ignored) = self.guard(Action::PlaceBet(amount)) {
            return ignored;
        }

        if amount == 0 || amount > self.balance {
            self.post_message("Invalid bet amount!");
            return Transition::Ignored(Rejection::InvalidBet);
        }

        self.current_bet = amount;
        self.last_bet = amount;
        Transition::Applied
    }

    /// Clears the selected bet.
    pub fn clear_bet(&mut self) -> Transition {
        if let Some(ignored) = self.guard(Action::ClearBet) {
            return ignored;
        }

        self.current_bet = 0;
        Transition::Applied
    }

    /// Deals a new round with the selected bet.
    ///
    /// Debits the bet, deals two cards each (the dealer's second face down)
    /// and either offers insurance against a dealer ace or checks for
    /// naturals straight away.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe cannot cover the initial deal.
    pub fn deal(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.guard(Action::Deal) {
            return Ok(ignored);
        }

        let wager = self.current_bet;
        if wager == 0 {
            self.post_message("Please place a bet first!");
            return Ok(Transition::Ignored(Rejection::InvalidBet));
        }
        if wager > self.balance {
            self.post_message("Insufficient funds for this bet!");
            return Ok(Transition::Ignored(Rejection::InsufficientFunds));
        }
        if self.shoe.cards_remaining() < 4 {
            return Err(ShoeError::Empty);
        }

        log::debug!("deal: wager {wager}, balance {}", self.balance);

        self.balance -= wager;
        self.wager = wager;
        self.insurance_offer = None;
        self.insurance_bet = 0;
        self.naturals_checked = false;

        self.hands.clear();
        self.hands.push(PlayerHand::new(wager));
        self.active = 0;
        self.dealer.clear();
        self.set_state(GameState::Playing);

        let card = self.draw_exposed(Seat::Player(0))?;
        self.hands[0].hand_mut().add_card(card);
        let card = self.draw_exposed(Seat::Dealer)?;
        self.dealer.add_card(card);
        let card = self.draw_exposed(Seat::Player(0))?;
        self.hands[0].hand_mut().add_card(card);

        // Hole card: counted when revealed, not now.
        let hole = self.shoe.draw()?;
        self.dealer.add_card(hole);
        self.events.push(GameEvent::CardDealt {
            seat: Seat::Dealer,
            card: None,
        });

        let dealer_shows_ace = self.dealer.up_card().is_some_and(|c| c.is_ace());
        if dealer_shows_ace && self.options.insurance {
            let kind = if self.hands[0].hand().is_blackjack() {
                InsuranceKind::EvenMoney
            } else {
                InsuranceKind::Insurance
            };
            log::debug!("offering {kind:?}");
            self.insurance_offer = Some(kind);
            self.events.push(GameEvent::InsuranceOffered(kind));
            self.set_state(GameState::Insurance);
            return Ok(Transition::Applied);
        }

        self.resolve_naturals();
        Ok(Transition::Applied)
    }
}
