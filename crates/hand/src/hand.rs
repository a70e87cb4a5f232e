// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand state and matching.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use knock_cards::{Card, Rank, Suit};

use crate::{HandError, Meld, MeldKind};

/// A gin rummy hand of up to ten cards.
///
/// The hand is a set, the same card cannot appear twice. Its cards are
/// partitioned between an unmatched pool and a collection of disjoint melds,
/// a card is never in more than one place. The partition changes through
/// [Hand::create_group], [Hand::create_run], [Hand::auto_match], and
/// [Hand::remove], which dissolves the meld of the removed card.
///
/// A card picked up during a turn is buffered with [Hand::set_drawn_card]
/// and only joins the hand when the owning player commits it at the end of
/// the turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    unmatched: AHashSet<Card>,
    matched: Vec<Meld>,
    drawn: Option<Card>,
}

impl Hand {
    /// The number of cards in a complete hand.
    pub const SIZE: usize = 10;

    /// Creates a new empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card to the unmatched cards.
    ///
    /// Fails with [HandError::Full] on a complete hand and with
    /// [HandError::Duplicate] if the card is already in the hand, matched or
    /// not.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_complete() {
            return Err(HandError::Full);
        }

        if self.contains(card) {
            return Err(HandError::Duplicate(card));
        }

        self.unmatched.insert(card);
        Ok(())
    }

    /// Removes a card from the hand and dissolves any meld the card is part
    /// of, moving the other meld cards back to the unmatched pool.
    ///
    /// Does nothing if the card is not in the hand.
    pub fn remove(&mut self, card: Card) {
        if let Some(pos) = self.matched.iter().position(|m| m.contains(card)) {
            let meld = self.matched.remove(pos);
            self.unmatched.extend(meld.iter().filter(|&c| c != card));
        } else {
            self.unmatched.remove(&card);
        }
    }

    /// Removes every card in `cards` from the hand, one at a time.
    pub fn remove_all<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.remove(card);
        }
    }

    /// Removes all the cards from the hand.
    pub fn clear(&mut self) {
        self.unmatched.clear();
        self.matched.clear();
    }

    /// Checks if the hand holds a full ten cards.
    pub fn is_complete(&self) -> bool {
        self.len() == Self::SIZE
    }

    /// Checks if the card is in the hand, matched or not.
    pub fn contains(&self, card: Card) -> bool {
        self.unmatched.contains(&card) || self.matched.iter().any(|m| m.contains(card))
    }

    /// The number of cards in the hand.
    pub fn len(&self) -> usize {
        self.unmatched.len() + self.matched.iter().map(Meld::len).sum::<usize>()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.unmatched.is_empty() && self.matched.is_empty()
    }

    /// The deadwood score, the total point value of the unmatched cards.
    ///
    /// Matched cards do not count against the player.
    pub fn score(&self) -> u32 {
        self.unmatched.iter().map(|c| c.score()).sum()
    }

    /// The matched melds.
    pub fn melds(&self) -> &[Meld] {
        &self.matched
    }

    /// The unmatched cards in sorted order.
    pub fn unmatched_cards(&self) -> Vec<Card> {
        let mut cards = self.unmatched.iter().copied().collect::<Vec<_>>();
        cards.sort();
        cards
    }

    /// The cards of all the matched melds in sorted order.
    pub fn matched_cards(&self) -> Vec<Card> {
        let mut cards = self.matched.iter().flat_map(Meld::iter).collect::<Vec<_>>();
        cards.sort();
        cards
    }

    /// Creates a group from unmatched cards of the hand and registers it as
    /// matched.
    ///
    /// The cards must all be unmatched cards of the hand and form a valid
    /// group of one rank. On success the cards move atomically from the
    /// unmatched pool into the new meld, on failure the hand is unchanged.
    pub fn create_group<I>(&mut self, cards: I) -> Result<&Meld, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards = self.free_cards(cards)?;
        let meld = Meld::group(cards)?;
        Ok(self.register(meld))
    }

    /// Creates a run from unmatched cards of the hand and registers it as
    /// matched.
    ///
    /// The cards must all be unmatched cards of the hand and form a valid
    /// run of contiguous ranks in one suit. On success the cards move
    /// atomically from the unmatched pool into the new meld, on failure the
    /// hand is unchanged.
    pub fn create_run<I>(&mut self, cards: I) -> Result<&Meld, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards = self.free_cards(cards)?;
        let meld = Meld::run(cards)?;
        Ok(self.register(meld))
    }

    /// Recomputes the meld partition from scratch.
    ///
    /// Any current meld is first dissolved back into the unmatched pool.
    /// The matcher then generates one candidate group per rank with three or
    /// more unmatched cards, taking every unmatched card of that rank, and
    /// one candidate run per maximal stretch of three or more contiguous
    /// ranks in a suit. Candidates are packed greedily from the highest
    /// scoring down, skipping any candidate that overlaps an accepted one.
    /// Ties keep generation order: groups by ascending rank, then runs by
    /// ascending suit.
    ///
    /// The packing is deterministic but not guaranteed optimal: when a high
    /// scoring run overlaps a group the run wins, even if accepting the
    /// group instead would leave less deadwood.
    pub fn auto_match(&mut self) {
        for meld in self.matched.drain(..) {
            self.unmatched.extend(meld.iter());
        }

        let mut candidates = self.group_candidates();
        candidates.extend(self.run_candidates());
        candidates.sort_by(|a, b| b.score().cmp(&a.score()));

        for meld in candidates {
            if meld.iter().all(|c| self.unmatched.contains(&c)) {
                self.register(meld);
            }
        }
    }

    /// Returns the unmatched cards that would complete or extend at least
    /// one of the proposed melds, in sorted order.
    ///
    /// The proposed melds do not have to be melds of this hand. Does not
    /// change the hand.
    pub fn completions(&self, melds: &[Meld]) -> Vec<Card> {
        let mut cards = self
            .unmatched
            .iter()
            .filter(|&&card| melds.iter().any(|meld| meld.completed_by(card)))
            .copied()
            .collect::<Vec<_>>();
        cards.sort();
        cards
    }

    /// The card picked up this turn, if any.
    pub fn drawn_card(&self) -> Option<Card> {
        self.drawn
    }

    /// Buffers a card picked up this turn.
    pub fn set_drawn_card(&mut self, card: Card) {
        self.drawn = Some(card);
    }

    /// Takes the picked up card out of the buffer.
    pub fn take_drawn_card(&mut self) -> Option<Card> {
        self.drawn.take()
    }

    /// Checks that all the cards are unmatched cards of the hand.
    fn free_cards<I>(&self, cards: I) -> Result<Vec<Card>, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards = cards.into_iter().collect::<Vec<_>>();
        if cards.iter().all(|c| self.unmatched.contains(c)) {
            Ok(cards)
        } else {
            Err(HandError::InvalidMeld(
                "cards must be unmatched cards of the hand",
            ))
        }
    }

    /// Moves the meld cards out of the unmatched pool and registers the meld.
    fn register(&mut self, meld: Meld) -> &Meld {
        for card in meld.iter() {
            self.unmatched.remove(&card);
        }

        self.matched.push(meld);
        &self.matched[self.matched.len() - 1]
    }

    /// One candidate group per rank with all the unmatched cards of that
    /// rank, in ascending rank order.
    fn group_candidates(&self) -> Vec<Meld> {
        let mut candidates = Vec::new();

        for rank in Rank::ranks() {
            let cards = self
                .unmatched
                .iter()
                .filter(|c| c.rank() == rank)
                .copied()
                .collect::<Vec<_>>();

            if cards.len() >= Meld::MIN_SIZE {
                candidates.push(Meld::new_unchecked(MeldKind::Group, cards));
            }
        }

        candidates
    }

    /// One candidate run per maximal stretch of three or more contiguous
    /// ranks in a suit, in ascending suit order.
    fn run_candidates(&self) -> Vec<Meld> {
        let mut candidates = Vec::new();

        for suit in Suit::suits() {
            let mut cards = self
                .unmatched
                .iter()
                .filter(|c| c.suit() == suit)
                .copied()
                .collect::<Vec<_>>();
            cards.sort();

            let mut run: Vec<Card> = Vec::new();
            for card in cards {
                let contiguous = run
                    .last()
                    .is_some_and(|prev| prev.rank().succ() == Some(card.rank()));

                if !contiguous {
                    // A break in contiguity ends the current candidate.
                    if run.len() >= Meld::MIN_SIZE {
                        let run = std::mem::take(&mut run);
                        candidates.push(Meld::new_unchecked(MeldKind::Run, run));
                    } else {
                        run.clear();
                    }
                }

                run.push(card);
            }

            if run.len() >= Meld::MIN_SIZE {
                candidates.push(Meld::new_unchecked(MeldKind::Run, run));
            }
        }

        candidates
    }
}
