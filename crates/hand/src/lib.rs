// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Knock Gin Rummy hand engine.
//!
//! This crate models a gin rummy hand of up to ten cards. The [Hand] type
//! partitions its cards into an unmatched pool and a collection of disjoint
//! [Meld]s, computes the deadwood score, and automatically matches the hand
//! with a deterministic greedy matcher:
//!
//! ```
//! # use knock_hand::{Card, Hand, Rank, Suit};
//! let mut hand = Hand::new();
//! for card in [
//!     Card::new(Rank::Three, Suit::Diamonds),
//!     Card::new(Rank::Three, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Seven, Suit::Clubs),
//! ] {
//!     hand.add(card)?;
//! }
//!
//! hand.auto_match();
//!
//! assert_eq!(hand.melds().len(), 1);
//! assert_eq!(hand.score(), 7);
//! # Ok::<(), knock_hand::HandError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
mod hand;
mod meld;

pub use error::HandError;
pub use hand::Hand;
pub use meld::{Meld, MeldKind};

// Reexport cards types.
pub use knock_cards::{Card, Deck, Rank, Suit};
