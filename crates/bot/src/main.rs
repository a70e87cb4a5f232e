// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Knock Gin Rummy dealing simulation.
//!
//! Deals random ten card hands, matches them, and reports deadwood and
//! knock statistics.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use knock_bot::KNOCK_SCORE;
use knock_hand::{Deck, Hand};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to deal.
    #[clap(long, short = 'n', default_value_t = 10_000)]
    hands: u32,
    /// Seed for the shuffling randomness.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut knockable = 0u32;
    let mut gins = 0u32;
    let mut deadwood = 0u64;

    for _ in 0..cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);

        let mut hand = Hand::new();
        for _ in 0..Hand::SIZE {
            hand.add(deck.deal())?;
        }

        hand.auto_match();

        let score = hand.score();
        deadwood += u64::from(score);

        if score == 0 {
            gins += 1;
        }

        if score <= KNOCK_SCORE && !hand.melds().is_empty() {
            knockable += 1;
        }
    }

    let hands = f64::from(cli.hands.max(1));
    info!("Dealt {} hands", cli.hands);
    info!("Average deadwood {:.1}", deadwood as f64 / hands);
    info!(
        "Knockable on the deal {knockable} ({:.2}%)",
        100.0 * f64::from(knockable) / hands
    );
    info!("Gin on the deal {gins}");

    Ok(())
}
