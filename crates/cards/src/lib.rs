// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Podium Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use podium_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah > kd);
//! assert_eq!(ah.to_string(), "ace of hearts");
//! ```
//!
//! a fixed capacity [Hand] that collects the cards dealt to a place:
//!
//! ```
//! # use podium_cards::{Card, Hand, Rank, Suit};
//! let mut hole = Hand::new(2);
//! hole.add(Card::new(Rank::Ten, Suit::Spades)).unwrap();
//! hole.add(Card::new(Rank::Ace, Suit::Clubs)).unwrap();
//! assert!(hole.add(Card::new(Rank::Deuce, Suit::Clubs)).is_err());
//!
//! let board = ["KD", "KC", "2S"]
//!     .iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<Hand>();
//!
//! let mut hand = &hole + &board;
//! hand.sort();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(hand.get(4).unwrap(), Card::new(Rank::Ace, Suit::Clubs));
//! ```
//!
//! and a [Deck] type that decodes the two digits cards codes sent by the table
//! scanner:
//!
//! ```
//! # use podium_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::from_document(r#"{"data": "001351"}"#).unwrap();
//! assert_eq!(deck.deal(), Some(Card::new(Rank::Ace, Suit::Hearts)));
//! assert_eq!(deck.deal(), Some(Card::new(Rank::Ace, Suit::Spades)));
//! assert_eq!(deck.deal(), Some(Card::new(Rank::King, Suit::Clubs)));
//! assert!(deck.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::CardsError;

mod hand;
pub use hand::Hand;
