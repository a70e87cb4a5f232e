// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player types.
use knock_hand::{Card, Hand, HandError};

/// The deadwood threshold for knocking.
pub const KNOCK_SCORE: u32 = 10;

/// A draw decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Draw the top card of the stock.
    Stock,
    /// Take the top card of the discard pile.
    Discard,
}

/// A gin rummy bot strategy.
///
/// A strategy makes the turn decisions for the player that owns it, the hand
/// state is passed in at every decision point.
pub trait Strategy {
    /// Decides whether to take the face up card on the first turn.
    fn decide_first_pickup(&mut self, stock_top: Card, discard_top: Card, hand: &Hand) -> bool;

    /// Decides where to draw from this turn.
    fn decide_draw(&mut self, stock_top: Card, discard_top: Card, hand: &Hand) -> Draw;

    /// Decides whether to knock and end the hand.
    fn decide_knock(&mut self, hand: &Hand) -> bool;

    /// Picks the card to discard, the hand must not be empty.
    fn decide_discard(&mut self, hand: &Hand) -> Card;
}

/// A player that owns a hand driven by a strategy.
#[derive(Debug)]
pub struct Player<S> {
    nickname: String,
    hand: Hand,
    strategy: S,
}

impl<S: Strategy> Player<S> {
    /// Creates a player with an empty hand.
    pub fn new(nickname: impl Into<String>, strategy: S) -> Self {
        Self {
            nickname: nickname.into(),
            hand: Hand::new(),
            strategy,
        }
    }

    /// This player nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// This player hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// This player hand.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// This player deadwood score.
    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    /// Adds the dealt cards to the hand.
    pub fn deal<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.hand.add(card)?;
        }
        Ok(())
    }

    /// Checks if this player may knock.
    ///
    /// Rematches the hand, knocking needs a deadwood score of at most
    /// [KNOCK_SCORE] and at least one matched meld.
    pub fn can_knock(&mut self) -> bool {
        self.hand.auto_match();
        self.hand.score() <= KNOCK_SCORE && !self.hand.melds().is_empty()
    }

    /// Checks if this player may knock and wants to.
    pub fn knock(&mut self) -> bool {
        self.can_knock() && self.strategy.decide_knock(&self.hand)
    }

    /// Asks the strategy whether to take the face up card on the first turn.
    pub fn first_pickup(&mut self, stock_top: Card, discard_top: Card) -> bool {
        self.strategy
            .decide_first_pickup(stock_top, discard_top, &self.hand)
    }

    /// Asks the strategy where to draw from this turn.
    pub fn draw(&mut self, stock_top: Card, discard_top: Card) -> Draw {
        self.strategy.decide_draw(stock_top, discard_top, &self.hand)
    }

    /// Buffers a card picked up this turn.
    pub fn pick_up(&mut self, card: Card) {
        self.hand.set_drawn_card(card);
    }

    /// The card picked up this turn, if any.
    pub fn drawn_card(&self) -> Option<Card> {
        self.hand.drawn_card()
    }

    /// Discards the card picked by the strategy, removing it from the hand.
    pub fn discard(&mut self) -> Card {
        let card = self.strategy.decide_discard(&self.hand);
        self.hand.remove(card);
        card
    }

    /// Commits the card picked up this turn into the hand.
    ///
    /// On failure the card stays buffered and the hand is unchanged.
    pub fn end_turn(&mut self) -> Result<(), HandError> {
        if let Some(card) = self.hand.take_drawn_card() {
            if let Err(err) = self.hand.add(card) {
                self.hand.set_drawn_card(card);
                return Err(err);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreedyStrategy;
    use knock_hand::{Rank, Suit};

    /// Draws from the stock, never knocks, discards the first unmatched card.
    struct Passive;

    impl Strategy for Passive {
        fn decide_first_pickup(&mut self, _: Card, _: Card, _: &Hand) -> bool {
            false
        }

        fn decide_draw(&mut self, _: Card, _: Card, _: &Hand) -> Draw {
            Draw::Stock
        }

        fn decide_knock(&mut self, _: &Hand) -> bool {
            false
        }

        fn decide_discard(&mut self, hand: &Hand) -> Card {
            hand.unmatched_cards()[0]
        }
    }

    fn knockable_cards() -> Vec<Card> {
        vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Nine, Suit::Clubs),
        ]
    }

    #[test]
    fn can_knock_low_deadwood() {
        let mut player = Player::new("Alice", Passive);
        player.deal(knockable_cards()).unwrap();

        assert!(player.can_knock());
        assert_eq!(player.score(), 9);
        assert_eq!(player.hand().melds().len(), 2);
    }

    #[test]
    fn cannot_knock_high_deadwood() {
        let mut player = Player::new("Bob", Passive);
        player
            .deal([
                Card::new(Rank::King, Suit::Spades),
                Card::new(Rank::King, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Queen, Suit::Clubs),
                Card::new(Rank::Jack, Suit::Clubs),
            ])
            .unwrap();

        // The kings match but the deadwood is over the threshold.
        assert!(!player.can_knock());
        assert_eq!(player.hand().melds().len(), 1);
    }

    #[test]
    fn cannot_knock_without_melds() {
        let mut player = Player::new("Bob", Passive);
        player
            .deal([
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Two, Suit::Hearts),
                Card::new(Rank::Three, Suit::Diamonds),
            ])
            .unwrap();

        assert!(player.score() <= KNOCK_SCORE);
        assert!(!player.can_knock());
    }

    #[test]
    fn knock_follows_strategy() {
        // Passive never knocks even when it could.
        let mut player = Player::new("Alice", Passive);
        player.deal(knockable_cards()).unwrap();
        assert!(player.can_knock());
        assert!(!player.knock());

        // Greedy knocks whenever it may.
        let mut player = Player::new("Carol", GreedyStrategy::default());
        player.deal(knockable_cards()).unwrap();
        assert!(player.knock());
    }

    #[test]
    fn end_turn_commits_drawn_card() {
        let mut player = Player::new("Alice", Passive);
        player
            .deal([
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Two, Suit::Spades),
            ])
            .unwrap();

        let kd = Card::new(Rank::King, Suit::Diamonds);
        player.pick_up(kd);
        assert_eq!(player.drawn_card(), Some(kd));

        // The buffered card is not in the hand yet.
        assert!(!player.hand().contains(kd));
        assert_eq!(player.hand().len(), 2);

        player.end_turn().unwrap();
        assert_eq!(player.drawn_card(), None);
        assert!(player.hand().contains(kd));
        assert_eq!(player.hand().len(), 3);

        // Without a pickup ending the turn does nothing.
        player.end_turn().unwrap();
        assert_eq!(player.hand().len(), 3);
    }

    #[test]
    fn end_turn_on_full_hand_keeps_card_buffered() {
        let mut player = Player::new("Alice", Passive);
        player
            .deal(Rank::ranks().take(Hand::SIZE).map(|r| Card::new(r, Suit::Spades)))
            .unwrap();
        assert!(player.hand().is_complete());

        let kh = Card::new(Rank::King, Suit::Hearts);
        player.pick_up(kh);
        assert_eq!(player.end_turn(), Err(HandError::Full));
        assert_eq!(player.drawn_card(), Some(kh));

        // Discarding makes room to commit the pickup.
        player.discard();
        player.end_turn().unwrap();
        assert!(player.hand().contains(kh));
        assert!(player.hand().is_complete());
    }

    #[test]
    fn discard_removes_card() {
        let mut player = Player::new("Alice", Passive);
        player
            .deal([
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Hearts),
            ])
            .unwrap();

        // Hearts sort below spades, KH is the first unmatched card.
        let card = player.discard();
        assert_eq!(card, Card::new(Rank::King, Suit::Hearts));
        assert!(!player.hand().contains(card));
        assert_eq!(player.hand().len(), 1);
    }
}
