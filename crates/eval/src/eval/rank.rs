// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and values.
use serde::{Deserialize, Serialize};
use std::fmt;

use podium_cards::{Card, Hand};

use super::detect;

/// A hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category matches.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two disjoint pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight and a flush.
    StraightFlush,
    /// A ten to ace straight.
    RoyalFlush,
}

impl HandRank {
    /// Returns all the categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category display name.
    pub fn description(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A classified hand.
///
/// Values compare by category and then by tie-break card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tie_break: Card,
}

impl HandValue {
    /// Creates a value from a category and its tie-break card.
    pub fn new(rank: HandRank, tie_break: Card) -> Self {
        Self { rank, tie_break }
    }

    /// Classifies a hand of any size, the cards don't need to be sorted.
    pub fn eval(cards: &[Card]) -> Self {
        let mut hand = cards.iter().copied().collect::<Hand>();
        hand.sort();
        detect::classify(hand.cards())
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The card that ranks this hand within its category.
    pub fn tie_break(&self) -> Card {
        self.tie_break
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank, self.tie_break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_cards::{Rank, Suit};

    #[test]
    fn ranks_order() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), 10);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ranks.first(), Some(&HandRank::HighCard));
        assert_eq!(ranks.last(), Some(&HandRank::RoyalFlush));

        for (idx, rank) in ranks.iter().enumerate() {
            assert_eq!(*rank as usize, idx);
        }
    }

    #[test]
    fn rank_to_string() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::TwoPair.to_string(), "Two Pair");
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(HandRank::FourOfAKind.description(), "Four of a Kind");
        assert_eq!(HandRank::RoyalFlush.description(), "Royal Flush");
    }

    #[test]
    fn values_order() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let king = Card::new(Rank::King, Suit::Clubs);

        let v1 = HandValue::new(HandRank::OnePair, ace);
        let v2 = HandValue::new(HandRank::OnePair, king);
        let v3 = HandValue::new(HandRank::TwoPair, Card::LOWEST);
        assert!(v1 > v2);
        assert!(v3 > v1);
        assert_eq!(v1.to_string(), "One Pair (ace of hearts)");
    }
}
