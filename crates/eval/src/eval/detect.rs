// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category detectors.
//!
//! All detectors expect the cards sorted in ascending order.
use podium_cards::{Card, Hand, Rank};

use super::rank::{HandRank, HandValue};

/// A detector result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Detection {
    /// The category doesn't match.
    NoMatch,
    /// The category matches with the given tie-break card.
    Match(Card),
}

impl Detection {
    fn from_option(card: Option<Card>) -> Self {
        card.map_or(Detection::NoMatch, Detection::Match)
    }

    fn card(self) -> Option<Card> {
        match self {
            Detection::NoMatch => None,
            Detection::Match(card) => Some(card),
        }
    }
}

type Detector = fn(&[Card]) -> Detection;

/// Detectors from the strongest to the weakest category.
const DETECTORS: [(HandRank, Detector); 9] = [
    (HandRank::RoyalFlush, royal_flush),
    (HandRank::StraightFlush, straight_flush),
    (HandRank::FourOfAKind, four_of_a_kind),
    (HandRank::FullHouse, full_house),
    (HandRank::Flush, flush),
    (HandRank::Straight, straight),
    (HandRank::ThreeOfAKind, three_of_a_kind),
    (HandRank::TwoPair, two_pair),
    (HandRank::OnePair, one_pair),
];

/// Classifies sorted cards with the first detector that matches.
pub(crate) fn classify(cards: &[Card]) -> HandValue {
    DETECTORS
        .iter()
        .find_map(|(rank, detector)| detector(cards).card().map(|c| HandValue::new(*rank, c)))
        .unwrap_or_else(|| HandValue::new(HandRank::HighCard, high_card(cards)))
}

fn same_rank(a: &Card, b: &Card) -> bool {
    a.rank() == b.rank()
}

/// Scans for runs of at least five consecutive ranks and returns the top card
/// of the last qualifying run.
///
/// Cards with the same rank as the current top card don't break a run. When
/// `start` is set a run can only begin with a card of that rank.
fn straight_run(cards: &[Card], start: Option<Rank>) -> Detection {
    let mut found = None;
    let mut top: Option<Card> = None;
    let mut len = 0;

    for &card in cards {
        match top {
            Some(t) if same_rank(&t, &card) => {}
            Some(t) if t.rank().successor() == Some(card.rank()) => len += 1,
            _ if start.is_none_or(|r| r == card.rank()) => len = 1,
            _ => {
                top = None;
                len = 0;
                continue;
            }
        }

        top = Some(card);
        if len >= 5 {
            found = top;
        }
    }

    Detection::from_option(found)
}

fn straight(cards: &[Card]) -> Detection {
    straight_run(cards, None)
}

fn flush(cards: &[Card]) -> Detection {
    let mut counts = [0usize; 4];
    for card in cards {
        counts[card.suit() as usize] += 1;
    }

    // A flush has no distinguishing card.
    if counts.iter().any(|&n| n >= 5) {
        Detection::Match(Card::LOWEST)
    } else {
        Detection::NoMatch
    }
}

/// A straight and a flush anywhere in the hand, the straight cards don't need to
/// have the flush suit.
fn straight_flush(cards: &[Card]) -> Detection {
    match (straight(cards), flush(cards)) {
        (Detection::Match(s), Detection::Match(f)) => Detection::Match(Card::max(s, f)),
        _ => Detection::NoMatch,
    }
}

/// A run starting at a ten that the straight scan also reports, ranked by the
/// straight top card. No flush is required.
fn royal_flush(cards: &[Card]) -> Detection {
    match (straight_run(cards, Some(Rank::Ten)), straight(cards)) {
        (Detection::Match(_), Detection::Match(top)) => Detection::Match(top),
        _ => Detection::NoMatch,
    }
}

/// The top card of the first run of `n` cards of the same rank.
fn of_a_kind(cards: &[Card], n: usize) -> Detection {
    let run = cards
        .windows(n)
        .find(|w| w.iter().all(|c| same_rank(c, &w[0])))
        .and_then(|w| w.last().copied());
    Detection::from_option(run)
}

fn four_of_a_kind(cards: &[Card]) -> Detection {
    of_a_kind(cards, 4)
}

fn three_of_a_kind(cards: &[Card]) -> Detection {
    of_a_kind(cards, 3)
}

/// The first three of a kind and a disjoint pair, ranked by the three of a kind.
///
/// The scan covers the whole hand, a pair in the last two cards completes a
/// full house.
fn full_house(cards: &[Card]) -> Detection {
    let mut three = None;
    let mut pair = false;
    let mut idx = 0;

    while idx + 1 < cards.len() {
        let is_three = idx + 2 < cards.len()
            && same_rank(&cards[idx], &cards[idx + 1])
            && same_rank(&cards[idx + 1], &cards[idx + 2]);

        if three.is_none() && is_three {
            three = Some(cards[idx + 2]);
            idx += 3;
        } else if !pair && same_rank(&cards[idx], &cards[idx + 1]) {
            pair = true;
            idx += 2;
        } else {
            idx += 1;
        }
    }

    match three {
        Some(card) if pair => Detection::Match(card),
        _ => Detection::NoMatch,
    }
}

/// Disjoint adjacent pairs and the top card of the last one.
fn pairs(cards: &[Card]) -> (usize, Option<Card>) {
    let mut count = 0;
    let mut top = None;
    let mut idx = 1;

    while idx < cards.len() {
        if same_rank(&cards[idx - 1], &cards[idx]) {
            count += 1;
            top = Some(cards[idx]);
            idx += 2;
        } else {
            idx += 1;
        }
    }

    (count, top)
}

fn two_pair(cards: &[Card]) -> Detection {
    match pairs(cards) {
        (count, top) if count >= 2 => Detection::from_option(top),
        _ => Detection::NoMatch,
    }
}

fn one_pair(cards: &[Card]) -> Detection {
    of_a_kind(cards, 2)
}

/// The hand highest card, empty hands rank with the lowest card.
fn high_card(cards: &[Card]) -> Card {
    let hand = cards.iter().copied().collect::<Hand>();
    hand.max().unwrap_or(Card::LOWEST)
}
