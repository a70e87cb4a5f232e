// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Gin Rummy cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A Gin Rummy card.
///
/// A card is an immutable (rank, suit) value, two cards are equal if they
/// have the same rank and suit. The total order compares the suit first and
/// the rank second, with the ace low per gin rules.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The deadwood point value of this card.
    ///
    /// Aces score one, face cards and tens score ten, all other cards score
    /// their rank value.
    pub fn score(&self) -> u32 {
        self.rank.score()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then(self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank, ordered with the ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 0,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Ace, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// The deadwood point value for this rank.
    pub fn score(self) -> u32 {
        const HIGH_CARD_SCORE: u32 = 10;
        (self as u32 + 1).min(HIGH_CARD_SCORE)
    }

    /// The next rank up, if any.
    pub fn succ(self) -> Option<Rank> {
        Self::ranks().nth(self as usize + 1)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };

        write!(f, "{rank}")
    }
}

/// Card suit, ordered with the spades high.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits in ascending order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    ///
    /// Panics if the deck is empty.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_scores() {
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).score(), 1);
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).score(), 2);
        assert_eq!(Card::new(Rank::Nine, Suit::Spades).score(), 9);
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).score(), 10);
        assert_eq!(Card::new(Rank::Jack, Suit::Clubs).score(), 10);
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).score(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Spades).score(), 10);
    }

    #[test]
    fn card_ordering() {
        // Suits compare first, clubs low and spades high.
        let kc = Card::new(Rank::King, Suit::Clubs);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let a_spades = Card::new(Rank::Ace, Suit::Spades);
        assert!(kc < ad);
        assert!(ad < ah);
        assert!(ah < a_spades);

        // Ranks compare second with the ace low.
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let tc = Card::new(Rank::Ten, Suit::Clubs);
        assert!(ac < kc);
        assert!(tc < kc);
        assert!(ac < tc);

        // Equality is by (rank, suit) only.
        assert_eq!(ac, Card::new(Rank::Ace, Suit::Clubs));
        assert_ne!(ac, ad);
    }

    #[test]
    fn rank_succ() {
        assert_eq!(Rank::Ace.succ(), Some(Rank::Two));
        assert_eq!(Rank::Nine.succ(), Some(Rank::Ten));
        assert_eq!(Rank::Queen.succ(), Some(Rank::King));
        assert_eq!(Rank::King.succ(), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
    }

    #[test]
    fn deck_deal_all() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while !deck.is_empty() {
            cards.insert(deck.deal());
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let kd = Card::new(Rank::King, Suit::Diamonds);

        assert!(deck.contains(kd));
        deck.remove(kd);
        assert!(!deck.contains(kd));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        // Removing a missing card leaves the deck unchanged.
        deck.remove(kd);
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }
}
