// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand error types.
use thiserror::Error;

use knock_cards::Card;

/// Errors raised by hand operations.
///
/// These all report caller mistakes, a failed operation leaves the hand
/// unchanged and is never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Adding to a hand that already holds a full ten cards.
    #[error("the hand is full")]
    Full,
    /// Adding a card that is already in the hand.
    #[error("{0} is already in the hand")]
    Duplicate(Card),
    /// Creating a meld from cards that do not form a valid group or run.
    #[error("invalid meld: {0}")]
    InvalidMeld(&'static str),
}
