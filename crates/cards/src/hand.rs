// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fixed capacity hand of cards.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use crate::{Card, CardsError, Rank};

/// A fixed capacity sequence of cards.
///
/// Cards are kept in insertion order until the hand is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    capacity: usize,
}

impl Hand {
    /// Creates an empty hand that can hold `capacity` cards.
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a card to this hand.
    pub fn add(&mut self, card: Card) -> Result<(), CardsError> {
        if self.is_full() {
            return Err(CardsError::HandFull {
                capacity: self.capacity,
            });
        }

        self.cards.push(card);
        Ok(())
    }

    /// Gets the card at the given index.
    pub fn get(&self, index: usize) -> Result<Card, CardsError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(CardsError::OutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The maximum number of cards.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks if this hand cannot take more cards.
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    /// Sorts the cards in ascending order.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// The card with the highest value.
    ///
    /// When the lowest card is an ace all the cards are aces and the hand
    /// highest card collapses to that ace.
    pub fn max(&self) -> Option<Card> {
        let min = self.cards.iter().min()?;
        if min.rank() == Rank::Ace {
            Some(*min)
        } else {
            self.cards.iter().max().copied()
        }
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the hand cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Concatenates two hands, the new hand capacity is the sum of the hands lengths.
impl ops::Add for &Hand {
    type Output = Hand;

    fn add(self, rhs: Self) -> Self::Output {
        let mut cards = Vec::with_capacity(self.len() + rhs.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(&rhs.cards);

        Hand {
            capacity: cards.len(),
            cards,
        }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let cards = iter.into_iter().collect::<Vec<_>>();
        Hand {
            capacity: cards.len(),
            cards,
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
