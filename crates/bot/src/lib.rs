// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Knock Gin Rummy bot strategies.
//!
//! This crate defines the [Strategy] trait with the turn decisions a bot
//! makes for the [Player] that owns it, and built in strategies:
//!
//! ```
//! # use knock_bot::{GreedyStrategy, Player};
//! # use knock_bot::hand::{Card, Rank, Suit};
//! let mut player = Player::new("Alice", GreedyStrategy::default());
//! player.deal([
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Diamonds),
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Spades),
//! ])?;
//! assert!(player.can_knock());
//! # Ok::<(), knock_bot::hand::HandError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod player;
mod strategy;

pub use player::{Draw, KNOCK_SCORE, Player, Strategy};
pub use strategy::{GreedyStrategy, RandomStrategy};

// Reexport the hand engine types.
pub use knock_hand as hand;
