// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Meld types.
use serde::{Deserialize, Serialize};
use std::fmt;

use knock_cards::Card;

use crate::HandError;

/// The kind of a meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Three or four cards of the same rank.
    Group,
    /// Three or more cards of the same suit with contiguous ranks.
    Run,
}

/// A valid meld of at least three matched cards.
///
/// A meld is immutable once created, removing a card from a matched hand
/// dissolves the whole meld instead of shrinking it. Melds are built with the
/// validated [Meld::group] and [Meld::run] factories, or created and
/// registered in a hand with [Hand::create_group](crate::Hand::create_group)
/// and [Hand::create_run](crate::Hand::create_run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
}

impl Meld {
    /// The minimum number of cards in a meld.
    pub const MIN_SIZE: usize = 3;

    /// Creates a group of at least three cards of the same rank.
    pub fn group<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        cards.sort();

        if cards.len() < Self::MIN_SIZE {
            return Err(HandError::InvalidMeld("a group needs at least three cards"));
        }

        if cards.windows(2).any(|w| w[0] == w[1]) {
            return Err(HandError::InvalidMeld("group cards must be distinct"));
        }

        if cards.windows(2).any(|w| w[0].rank() != w[1].rank()) {
            return Err(HandError::InvalidMeld("group cards must have the same rank"));
        }

        Ok(Self {
            kind: MeldKind::Group,
            cards,
        })
    }

    /// Creates a run of at least three cards of the same suit with contiguous
    /// ascending ranks.
    pub fn run<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        cards.sort();

        if cards.len() < Self::MIN_SIZE {
            return Err(HandError::InvalidMeld("a run needs at least three cards"));
        }

        if cards.windows(2).any(|w| w[0].suit() != w[1].suit()) {
            return Err(HandError::InvalidMeld("run cards must have the same suit"));
        }

        if cards.windows(2).any(|w| w[0].rank().succ() != Some(w[1].rank())) {
            return Err(HandError::InvalidMeld("run ranks must be contiguous"));
        }

        Ok(Self {
            kind: MeldKind::Run,
            cards,
        })
    }

    /// Creates a meld from cards known to form a valid meld of `kind`.
    pub(crate) fn new_unchecked(kind: MeldKind, mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self { kind, cards }
    }

    /// The meld kind.
    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    /// Checks if this meld is a group.
    pub fn is_group(&self) -> bool {
        self.kind == MeldKind::Group
    }

    /// Checks if this meld is a run.
    pub fn is_run(&self) -> bool {
        self.kind == MeldKind::Run
    }

    /// Checks if this meld contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The number of cards in this meld.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false, a meld holds at least three cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The meld cards in sorted order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the meld cards.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The total point value of the meld cards.
    pub fn score(&self) -> u32 {
        self.cards.iter().map(|c| c.score()).sum()
    }

    /// Checks if a card would complete or extend this meld.
    ///
    /// A card completes a group if it has the group rank, and a run if it has
    /// the run suit and the rank right below or right above the run ends.
    pub fn completed_by(&self, card: Card) -> bool {
        match self.kind {
            MeldKind::Group => card.rank() == self.cards[0].rank(),
            MeldKind::Run => {
                let low = self.cards[0];
                let high = self.cards[self.cards.len() - 1];
                card.suit() == low.suit()
                    && (card.rank().succ() == Some(low.rank())
                        || high.rank().succ() == Some(card.rank()))
            }
        }
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
