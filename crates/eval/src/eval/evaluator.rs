// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players hands ranking.
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash::Hash};
use thiserror::Error;

use podium_cards::Hand;

use super::{
    detect,
    rank::{HandRank, HandValue},
};

/// Evaluator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hands ranking was queried before evaluating the hands.
    #[error("hands have not been evaluated")]
    NotEvaluated,
    /// There are no players left to rank.
    #[error("no players")]
    NoPlayers,
}

/// A player place in the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing<P> {
    /// The place position starting from 1.
    pub position: usize,
    /// The player at this position.
    pub player: P,
    /// The player hand category.
    pub rank: HandRank,
}

/// Ranks the hands of a set of players.
///
/// Hands are sorted when the evaluator is created, [Evaluator::evaluate]
/// classifies every hand and then players are extracted from the best to the
/// worst with [Evaluator::best_hand] and [Evaluator::remove].
#[derive(Debug)]
pub struct Evaluator<P> {
    players: AHashMap<P, Hand>,
    values: Option<AHashMap<P, HandValue>>,
}

impl<P> Evaluator<P>
where
    P: Copy + Eq + Hash + Ord + fmt::Debug,
{
    /// Creates an evaluator for the given players hands.
    pub fn new<I>(players: I) -> Self
    where
        I: IntoIterator<Item = (P, Hand)>,
    {
        let players = players
            .into_iter()
            .map(|(player, mut hand)| {
                hand.sort();
                (player, hand)
            })
            .collect();

        Self {
            players,
            values: None,
        }
    }

    /// Classifies all the players hands.
    ///
    /// Evaluating again restores any removed player.
    pub fn evaluate(&mut self) {
        let values = self
            .players
            .iter()
            .map(|(player, hand)| {
                let value = detect::classify(hand.cards());
                debug!("{player:?} has {value} with {hand}");
                (*player, value)
            })
            .collect();

        self.values = Some(values);
    }

    /// The player with the best hand among the players still ranked.
    ///
    /// Players are compared by hand category, then by tie-break card, then by
    /// the highest card in their hands. Equal players resolve to the lowest
    /// player.
    pub fn best_hand(&self) -> Result<(P, HandRank), EvalError> {
        let values = self.values.as_ref().ok_or(EvalError::NotEvaluated)?;

        let mut candidates = values.iter().collect::<Vec<_>>();
        candidates.sort_by_key(|(player, _)| **player);

        let mut best: Option<(P, HandValue)> = None;
        for (&player, &value) in candidates {
            match best {
                Some((leader, leader_value))
                    if self.compare((player, value), (leader, leader_value))
                        != Ordering::Greater => {}
                _ => best = Some((player, value)),
            }
        }

        best.map(|(player, value)| (player, value.rank()))
            .ok_or(EvalError::NoPlayers)
    }

    /// Removes a player from the ranking, does nothing if the player is not
    /// ranked.
    pub fn remove(&mut self, player: &P) {
        if let Some(values) = self.values.as_mut() {
            values.remove(player);
        }
    }

    /// Awards up to `places` positions, removing each awarded player.
    ///
    /// Positions start from 1 at every call.
    pub fn award(&mut self, places: usize) -> Result<Vec<Standing<P>>, EvalError> {
        if self.values.is_none() {
            return Err(EvalError::NotEvaluated);
        }

        let mut standings = Vec::with_capacity(places.min(self.remaining()));
        while standings.len() < places && self.remaining() > 0 {
            let (player, rank) = self.best_hand()?;
            self.remove(&player);

            standings.push(Standing {
                position: standings.len() + 1,
                player,
                rank,
            });
        }

        Ok(standings)
    }

    /// The number of players this evaluator was created with.
    ///
    /// This is not affected by [Evaluator::remove], use [Evaluator::remaining]
    /// for the number of players still ranked.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Checks if this evaluator has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The number of players still ranked, zero before evaluation.
    pub fn remaining(&self) -> usize {
        self.values.as_ref().map_or(0, |values| values.len())
    }

    /// The classified hand of a player still ranked.
    pub fn value(&self, player: &P) -> Option<HandValue> {
        self.values.as_ref()?.get(player).copied()
    }

    /// The sorted hand of a player.
    pub fn hand(&self, player: &P) -> Option<&Hand> {
        self.players.get(player)
    }

    fn compare(&self, (p1, v1): (P, HandValue), (p2, v2): (P, HandValue)) -> Ordering {
        let high_card = |player: &P| self.players.get(player).and_then(Hand::max);
        v1.cmp(&v2)
            .then_with(|| high_card(&p1).cmp(&high_card(&p2)))
    }
}
