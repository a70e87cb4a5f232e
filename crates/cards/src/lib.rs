// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Knock Gin Rummy cards types.
//!
//! This crate defines the card values used by the hand engine:
//!
//! ```
//! # use knock_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let th = Card::new(Rank::Ten, Suit::Hearts);
//! assert!(ah < th);
//! assert_eq!(ah.score(), 1);
//! assert_eq!(th.score(), 10);
//! ```
//!
//! and a [Deck] type for dealing shuffled cards:
//!
//! ```
//! # use knock_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal();
//! assert_eq!(deck.count(), 51);
//! assert!(!deck.contains(card));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
