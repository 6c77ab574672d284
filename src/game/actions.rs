use crate::error::{Rejection, ShoeError};
use crate::hand::PlayerHand;

use super::dealer::Settlement;
use super::{Action, Game, GameEvent, Seat, Transition};

impl Game {
    /// Returns the rejection for acting on the active hand, if any.
    fn playable(&self, action: Action) -> Option<Transition> {
        if let Some(ignored) = self.guard(action) {
            return Some(ignored);
        }
        let hand = self.hands.get(self.active)?;
        hand.is_completed().then_some(Transition::Ignored(Rejection::HandCompleted))
    }

    /// Player action: Hit (draw a card to the active hand).
    ///
    /// A bust completes the hand. Reaching exactly 21 completes it too and
    /// turns the dealer's hole card over.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe is exhausted.
    pub fn hit(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.playable(Action::Hit) {
            return Ok(ignored);
        }

        let index = self.active;
        let card = self.draw_exposed(Seat::Player(index))?;
        let hand = &mut self.hands[index];
        hand.hand_mut().add_card(card);
        hand.mark_acted();

        let value = hand.hand().value();
        if value > 21 {
            log::debug!("hand {index} busts with {value}");
            hand.complete();
            self.advance()?;
        } else if value == 21 {
            hand.complete();
            self.reveal_hole();
            self.advance()?;
        }

        Ok(Transition::Applied)
    }

    /// Player action: Stand (keep the active hand).
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the dealer runs the shoe dry.
    pub fn stand(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.playable(Action::Stand) {
            return Ok(ignored);
        }

        self.hands[self.active].complete();
        self.advance()?;
        Ok(Transition::Applied)
    }

    /// Player action: Double down (raise the wager, take one card, stand).
    ///
    /// Only before the hand has acted, and only if the balance covers one
    /// more bet. The round's total wager grows by that bet and payouts are
    /// shared evenly across hands. The hand is completed whatever the card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe is exhausted.
    pub fn double_down(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.playable(Action::DoubleDown) {
            return Ok(ignored);
        }

        let index = self.active;
        if self.hands[index].has_acted() {
            return Ok(Transition::Ignored(Rejection::AlreadyActed));
        }
        if self.balance < self.wager {
            return Ok(Transition::Ignored(Rejection::InsufficientFunds));
        }
        if self.shoe.cards_remaining() == 0 {
            return Err(ShoeError::Empty);
        }

        self.balance -= self.wager;
        self.current_bet += self.wager;
        self.hands[index].add_stake(self.wager);

        let card = self.draw_exposed(Seat::Player(index))?;
        let hand = &mut self.hands[index];
        hand.hand_mut().add_card(card);
        hand.mark_acted();
        hand.complete();
        log::debug!("hand {index} doubles, wager {}, draws {card}", self.current_bet);

        self.advance()?;
        Ok(Transition::Applied)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand inserted right after the active
    /// one; each hand then receives one fresh card. Costs one more bet unit.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe cannot cover both cards.
    pub fn split(&mut self) -> Result<Transition, ShoeError> {
        if let Some(ignored) = self.playable(Action::Split) {
            return Ok(ignored);
        }

        let index = self.active;
        let hand = &self.hands[index];
        if hand.has_acted() {
            return Ok(Transition::Ignored(Rejection::AlreadyActed));
        }
        if !hand.hand().is_pair() {
            return Ok(Transition::Ignored(Rejection::NotAPair));
        }
        if self.hands.len() >= self.options.max_hands {
            return Ok(Transition::Ignored(Rejection::MaxHandsReached));
        }
        if self.balance < self.wager {
            return Ok(Transition::Ignored(Rejection::InsufficientFunds));
        }
        if self.shoe.cards_remaining() < 2 {
            return Err(ShoeError::Empty);
        }

        let Some(card) = self.hands[index].hand_mut().take_split_card() else {
            return Ok(Transition::Ignored(Rejection::NotAPair));
        };
        self.balance -= self.wager;
        self.current_bet += self.wager;

        let new_index = index + 1;
        self.hands.insert(new_index, PlayerHand::from_split(card, self.wager));
        self.events.push(GameEvent::HandSplit {
            from_index: index,
            new_index,
        });
        log::debug!("hand {index} split, {} hands", self.hands.len());

        let card = self.draw_exposed(Seat::Player(index))?;
        self.hands[index].hand_mut().add_card(card);
        let card = self.draw_exposed(Seat::Player(new_index))?;
        self.hands[new_index].hand_mut().add_card(card);

        Ok(Transition::Applied)
    }

    /// Moves to the next open hand, or finishes the player's turn.
    ///
    /// When every hand has busted the dealer does not draw and the round is
    /// settled after the display pause.
    fn advance(&mut self) -> Result<(), ShoeError> {
        let next = (self.active + 1..self.hands.len()).find(|&i| !self.hands[i].is_completed());
        if let Some(next) = next {
            self.active = next;
            return Ok(());
        }

        if self.hands.iter().all(|hand| hand.hand().is_busted()) {
            let result = self.settle(Settlement::Showdown);
            self.defer_round(result);
            return Ok(());
        }

        self.play_dealer()?;
        let result = self.settle(Settlement::Showdown);
        self.complete_round(result);
        Ok(())
    }
}
