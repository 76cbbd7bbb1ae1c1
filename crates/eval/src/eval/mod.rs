// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The detectors in this module work on hands sorted in ascending order, they
//! run from the strongest category to the weakest and the first match wins.
//! Hands of the same category are ordered by the tie-break card chosen by the
//! detector and then by the hand highest card, this is not a full kicker
//! comparison and two hands that differ only in the suit of their tie-break
//! cards never split.

mod detect;

mod evaluator;
pub use evaluator::{EvalError, Evaluator, Standing};

mod rank;
pub use rank::{HandRank, HandValue};
