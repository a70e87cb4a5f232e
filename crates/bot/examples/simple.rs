// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A simple example bot strategy playing one turn.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;

use knock_bot::{
    Draw, Player, Strategy,
    hand::{Card, Deck, Hand},
};

/// Draws from the stock and discards the first unmatched card.
struct FirstCardDiscard;

impl Strategy for FirstCardDiscard {
    fn decide_first_pickup(&mut self, _stock_top: Card, _discard_top: Card, _hand: &Hand) -> bool {
        false
    }

    fn decide_draw(&mut self, _stock_top: Card, _discard_top: Card, _hand: &Hand) -> Draw {
        Draw::Stock
    }

    fn decide_knock(&mut self, _hand: &Hand) -> bool {
        true
    }

    fn decide_discard(&mut self, hand: &Hand) -> Card {
        hand.unmatched_cards()[0]
    }
}

fn main() -> Result<()> {
    let mut rng = rand::rng();
    let mut deck = Deck::new_and_shuffled(&mut rng);

    let mut player = Player::new("Alice", FirstCardDiscard);
    for _ in 0..Hand::SIZE {
        player.deal([deck.deal()])?;
    }

    // Play one turn, draw, discard, and check the knock.
    let stock_top = deck.deal();
    let discard_top = deck.deal();

    match player.draw(stock_top, discard_top) {
        Draw::Stock => player.pick_up(stock_top),
        Draw::Discard => player.pick_up(discard_top),
    }

    let discarded = player.discard();
    player.end_turn()?;

    println!("{} discards {discarded}", player.nickname());

    if player.knock() {
        println!("{} knocks with deadwood {}", player.nickname(), player.score());
    } else {
        println!("{} cannot knock, deadwood {}", player.nickname(), player.score());
    }

    for meld in player.hand().melds() {
        println!("Matched {meld}");
    }

    Ok(())
}
