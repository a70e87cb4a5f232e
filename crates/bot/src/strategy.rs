// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Built in bot strategies.
use rand::{Rng, SeedableRng, rngs::StdRng};

use knock_hand::{Card, Hand};

use crate::{Draw, Strategy};

/// A strategy that makes random choices.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy with operating system randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a strategy with seeded randomness.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn decide_first_pickup(&mut self, _stock_top: Card, _discard_top: Card, _hand: &Hand) -> bool {
        self.rng.random_bool(0.5)
    }

    fn decide_draw(&mut self, _stock_top: Card, _discard_top: Card, _hand: &Hand) -> Draw {
        if self.rng.random_bool(0.5) {
            Draw::Discard
        } else {
            Draw::Stock
        }
    }

    fn decide_knock(&mut self, _hand: &Hand) -> bool {
        self.rng.random_bool(0.5)
    }

    fn decide_discard(&mut self, hand: &Hand) -> Card {
        // Prefer unmatched cards to keep the melds together.
        let cards = hand.unmatched_cards();
        if cards.is_empty() {
            let cards = hand.matched_cards();
            cards[self.rng.random_range(0..cards.len())]
        } else {
            cards[self.rng.random_range(0..cards.len())]
        }
    }
}

/// A strategy that grows melds and discards the highest deadwood.
#[derive(Debug, Default, Clone)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Checks if a card would complete or extend a meld of the rematched
    /// hand.
    fn completes_meld(card: Card, hand: &Hand) -> bool {
        let mut scratch = hand.clone();
        scratch.auto_match();
        scratch.melds().iter().any(|meld| meld.completed_by(card))
    }
}

impl Strategy for GreedyStrategy {
    fn decide_first_pickup(&mut self, _stock_top: Card, discard_top: Card, hand: &Hand) -> bool {
        Self::completes_meld(discard_top, hand)
    }

    fn decide_draw(&mut self, _stock_top: Card, discard_top: Card, hand: &Hand) -> Draw {
        if Self::completes_meld(discard_top, hand) {
            Draw::Discard
        } else {
            Draw::Stock
        }
    }

    fn decide_knock(&mut self, _hand: &Hand) -> bool {
        true
    }

    fn decide_discard(&mut self, hand: &Hand) -> Card {
        let mut scratch = hand.clone();
        scratch.auto_match();

        // The highest scoring unmatched card, or the lowest matched card on
        // a fully matched hand.
        scratch
            .unmatched_cards()
            .into_iter()
            .max_by_key(|card| card.score())
            .or_else(|| {
                scratch
                    .matched_cards()
                    .into_iter()
                    .min_by_key(|card| card.score())
            })
            .expect("the hand is empty")
    }
}
