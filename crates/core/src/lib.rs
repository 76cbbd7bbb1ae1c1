// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Podium dealing and scoring session.
//!
//! A [Session] deals cards from a [Deck] to the places the user assigned
//! them to, then ranks the players hands against the table cards:
//!
//! ```
//! use podium_core::{Config, Deck, HandRank, Place, Session};
//!
//! // Deals player 1 two aces, player 2 a pair of kings and three table cards.
//! let deck = Deck::from_codes("00132512274717").unwrap();
//! let mut session = Session::new(Config::default(), deck);
//! for place in "p1 p1 p2 p2 t t t".split_whitespace() {
//!     session.assign(place.parse().unwrap());
//! }
//!
//! let standings = session.score().unwrap();
//! assert_eq!(standings[0].player, Place::Player1);
//! assert_eq!(standings[0].rank, HandRank::OnePair);
//! assert_eq!(standings[1].player, Place::Player2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod place;
pub use place::{ParsePlaceError, Place};

mod session;
pub use session::{Config, Seats, Session, SessionError, announcement};

pub use podium_cards::{Card, CardsError, Deck, Hand, Rank, Suit};
pub use podium_eval::{EvalError, Evaluator, HandRank, HandValue, Standing};
