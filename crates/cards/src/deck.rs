// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::VecDeque, fmt, str::FromStr};

use crate::CardsError;

/// A Poker card.
///
/// A card is identified by its rank and suit only. Cards are ordered by rank
/// with the ace above the king, and by suit for cards of the same rank:
///
/// ```text
///   2H < 2S < 2D < 2C < 3H < ... < KC < AH < AS < AD < AC
/// ```
///
/// As the ace is always the highest card there is no ace low ordering, an
/// A-2-3-4-5 sequence is never consecutive.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// The lowest card in the deck.
    pub const LOWEST: Card = Card::new(Rank::Deuce, Suit::Hearts);

    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from raw suit and rank values.
    pub fn from_parts(suit: u8, rank: u8) -> Result<Card, CardsError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// Decodes a card code, the code encodes the suit as `code / 13` and the
    /// rank as `code % 13`.
    pub fn from_code(code: u8) -> Result<Card, CardsError> {
        if code as usize >= Deck::SIZE {
            return Err(CardsError::InvalidCode(code));
        }

        Card::from_parts(code / 13, code % 13)
    }

    /// This card code.
    pub fn code(&self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the highest of two cards.
    pub fn max(a: Card, b: Card) -> Card {
        if b > a { b } else { a }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .strength()
            .cmp(&other.rank.strength())
            .then(self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses a card from its short form like `AH`, `Td`, `10c` or `7S`.
impl FromStr for Card {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardsError::InvalidCard(s.to_string());

        let s = s.trim();
        let split = s.char_indices().last().map(|(idx, _)| idx).ok_or_else(invalid)?;
        let (rank, suit) = s.split_at(split);

        let rank = match rank.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(invalid()),
        };

        let suit = match suit.to_ascii_uppercase().as_str() {
            "H" => Suit::Hearts,
            "S" => Suit::Spades,
            "D" => Suit::Diamonds,
            "C" => Suit::Clubs,
            _ => return Err(invalid()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// Discriminants follow the cards codes with the ace as rank 0, use
/// [Rank::strength] to compare ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 0,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Returns all ranks in code order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// The rank strength, deuce is 1 and ace is 13.
    pub fn strength(self) -> u8 {
        match self {
            Rank::Ace => 13,
            rank => rank as u8,
        }
    }

    /// The rank that follows this one in a straight.
    ///
    /// The ace follows the king and is followed by no rank.
    pub fn successor(self) -> Option<Rank> {
        match self {
            Rank::Ace => None,
            Rank::King => Some(Rank::Ace),
            rank => Rank::try_from(rank as u8 + 1).ok(),
        }
    }

    /// The rank short symbol.
    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .nth(value as usize)
            .ok_or(CardsError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => "ace",
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits in code order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit short symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::suits()
            .nth(value as usize)
            .ok_or(CardsError::InvalidSuit(value))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck, cards are dealt from the top of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Marker for the cards codes in a document.
    const DATA_MARKER: &'static str = "data";

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.make_contiguous().shuffle(rng);
        deck
    }

    /// Creates a deck from a string of two digits cards codes.
    pub fn from_codes(codes: &str) -> Result<Self, CardsError> {
        let digits = codes
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(CardsError::InvalidDigit(c))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if digits.len() % 2 != 0 {
            return Err(CardsError::OddDigits(digits.len()));
        }

        let cards = digits
            .chunks_exact(2)
            .map(|pair| Card::from_code(pair[0] * 10 + pair[1]))
            .collect::<Result<VecDeque<_>, _>>()?;

        Ok(Self { cards })
    }

    /// Creates a deck from the cards codes in a document.
    ///
    /// The codes are the digits that follow the first `data` marker in the
    /// document, any other character is ignored.
    pub fn from_document(document: &str) -> Result<Self, CardsError> {
        let start = document
            .find(Self::DATA_MARKER)
            .ok_or(CardsError::MissingData)?;

        let codes = document[start..]
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();

        Self::from_codes(&codes)
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

/// The full deck in code order.
impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<VecDeque<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
