// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

/// Errors returned when building cards, hands and decks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// A suit value outside `0..4`.
    #[error("invalid suit value {0}")]
    InvalidSuit(u8),
    /// A rank value outside `0..13`.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
    /// A card code outside `0..52`.
    #[error("invalid card code {0}")]
    InvalidCode(u8),
    /// A card string that doesn't parse.
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    /// Adding a card to a full hand.
    #[error("hand is full, capacity {capacity}")]
    HandFull {
        /// The hand capacity.
        capacity: usize,
    },
    /// Reading a card past the end of a hand.
    #[error("card index {index} out of bounds for hand of length {len}")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The hand length.
        len: usize,
    },
    /// Cards codes with a non digit character.
    #[error("unexpected character {0:?} in cards codes")]
    InvalidDigit(char),
    /// Cards codes with a dangling digit.
    #[error("cards codes must be pairs of digits, got {0} digits")]
    OddDigits(usize),
    /// A document without cards data.
    #[error("document has no data field")]
    MissingData,
}
