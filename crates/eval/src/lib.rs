// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Podium Poker hand evaluator.
//!
//! Classifies hands of any size into one of the ten Poker categories and ranks
//! players sharing the same community cards. Each category detector reports a
//! single tie-break card used to order hands of the same category.
//!
//! To classify a single hand use [HandValue::eval]:
//!
//! ```
//! # use podium_eval::*;
//! let cards = ["TH", "JH", "QH", "KH", "AH", "2C", "3D"]
//!     .iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! let value = HandValue::eval(&cards);
//! assert_eq!(value.rank(), HandRank::RoyalFlush);
//! ```
//!
//! To rank players create an [Evaluator], evaluate the hands and extract the
//! players from best to worst:
//!
//! ```
//! # use podium_eval::*;
//! let hand = |s: &str| s.split_whitespace().map(|c| c.parse::<Card>().unwrap()).collect::<Hand>();
//!
//! let mut eval = Evaluator::new([
//!     ("alice", hand("AH AS KD KC 2S 3H 9D")),
//!     ("bob", hand("7C 8D KD KC 2S 3H 9D")),
//! ]);
//! eval.evaluate();
//!
//! let (winner, rank) = eval.best_hand().unwrap();
//! assert_eq!((winner, rank), ("alice", HandRank::TwoPair));
//! eval.remove(&winner);
//!
//! let (second, rank) = eval.best_hand().unwrap();
//! assert_eq!((second, rank), ("bob", HandRank::OnePair));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, Evaluator, HandRank, HandValue, Standing};

// Reexport cards types.
pub use podium_cards::{Card, Hand, Rank, Suit};
