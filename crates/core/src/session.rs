// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealing and scoring session.
use ahash::AHashMap;
use log::{debug, info, warn};
use thiserror::Error;

use podium_cards::{CardsError, Deck, Hand};
use podium_eval::{EvalError, Evaluator, Standing};

use crate::Place;

/// Session config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The number of cards dealt to a seated player.
    pub hole_cards: usize,
    /// The minimum number of table cards to score the hands.
    pub min_table_cards: usize,
    /// The maximum number of table cards.
    pub table_cards: usize,
    /// The number of places awarded when scoring.
    pub podium: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hole_cards: 2,
            min_table_cards: 3,
            table_cards: 5,
            podium: 3,
        }
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A player was assigned a partial set of hole cards.
    #[error("{place} has {count} cards, expected {expected}")]
    HoleCards {
        /// The player place.
        place: Place,
        /// The number of assigned cards.
        count: usize,
        /// The number of hole cards.
        expected: usize,
    },
    /// The table was assigned too few or too many cards.
    #[error("table has {count} cards, expected between {min} and {max}")]
    TableCards {
        /// The number of assigned cards.
        count: usize,
        /// The minimum number of table cards.
        min: usize,
        /// The maximum number of table cards.
        max: usize,
    },
    /// No player was assigned any card.
    #[error("no players seated")]
    NoPlayers,
    /// The deck doesn't have enough cards for the deal.
    #[error("deck has {available} cards, {needed} needed")]
    DeckExhausted {
        /// The number of cards to deal.
        needed: usize,
        /// The number of cards in the deck.
        available: usize,
    },
    /// Cards error.
    #[error(transparent)]
    Cards(#[from] CardsError),
    /// Evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// The cards dealt to the table and the seated players.
#[derive(Debug, Clone)]
pub struct Seats {
    table: Hand,
    players: AHashMap<Place, Hand>,
}

impl Seats {
    /// The cards dealt to a place, burned cards are not kept.
    pub fn hand(&self, place: Place) -> Option<&Hand> {
        match place {
            Place::Table => Some(&self.table),
            Place::Burn => None,
            player => self.players.get(&player),
        }
    }

    /// The table cards.
    pub fn table(&self) -> &Hand {
        &self.table
    }

    /// The seated players in order.
    pub fn players(&self) -> Vec<Place> {
        let mut players = self.players.keys().copied().collect::<Vec<_>>();
        players.sort();
        players
    }

    /// Each seated player hole cards followed by the table cards.
    pub fn player_hands(&self) -> impl Iterator<Item = (Place, Hand)> + '_ {
        self.players()
            .into_iter()
            .filter_map(move |place| {
                self.players
                    .get(&place)
                    .map(|hole| (place, hole + &self.table))
            })
    }
}

/// A dealing session.
///
/// The session deals cards from the top of its deck to places in the order
/// they have been assigned.
#[derive(Debug)]
pub struct Session {
    deck: Deck,
    config: Config,
    deal_order: Vec<Place>,
}

impl Session {
    /// Creates a session that deals from the given deck.
    pub fn new(config: Config, deck: Deck) -> Self {
        Self {
            deck,
            config,
            deal_order: Vec::new(),
        }
    }

    /// Assigns the next card to a place.
    pub fn assign(&mut self, place: Place) {
        self.deal_order.push(place);
    }

    /// The places in assignment order.
    pub fn deal_order(&self) -> &[Place] {
        &self.deal_order
    }

    /// The session config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Checks that the assigned places make a valid deal.
    pub fn check_input(&self) -> Result<(), SessionError> {
        let res = self.validate();
        if let Err(e) = &res {
            warn!("Invalid deal: {e}");
        }

        res
    }

    fn validate(&self) -> Result<(), SessionError> {
        let mut counts = AHashMap::<Place, usize>::default();
        for place in &self.deal_order {
            *counts.entry(*place).or_default() += 1;
        }

        let mut seated = 0;
        for place in Place::players() {
            match counts.get(&place).copied().unwrap_or_default() {
                0 => {}
                count if count == self.config.hole_cards => seated += 1,
                count => {
                    return Err(SessionError::HoleCards {
                        place,
                        count,
                        expected: self.config.hole_cards,
                    });
                }
            }
        }

        let table = counts.get(&Place::Table).copied().unwrap_or_default();
        if table < self.config.min_table_cards || table > self.config.table_cards {
            return Err(SessionError::TableCards {
                count: table,
                min: self.config.min_table_cards,
                max: self.config.table_cards,
            });
        }

        if seated == 0 {
            return Err(SessionError::NoPlayers);
        }

        Ok(())
    }

    /// Deals a card from the deck to each assigned place.
    pub fn deal(&mut self) -> Result<Seats, SessionError> {
        self.check_input()?;

        if self.deck.count() < self.deal_order.len() {
            return Err(SessionError::DeckExhausted {
                needed: self.deal_order.len(),
                available: self.deck.count(),
            });
        }

        let mut burn = Hand::new(Deck::SIZE);
        let mut table = Hand::new(self.config.table_cards);
        let mut players = AHashMap::default();

        for place in &self.deal_order {
            let Some(card) = self.deck.deal() else {
                break;
            };

            match place {
                Place::Burn => burn.add(card)?,
                Place::Table => table.add(card)?,
                player => players
                    .entry(*player)
                    .or_insert_with(|| Hand::new(self.config.hole_cards))
                    .add(card)?,
            }
        }

        debug!("Burned {} cards: {burn}", burn.len());
        Ok(Seats { table, players })
    }

    /// Deals the cards and awards the podium places to the best hands.
    pub fn score(&mut self) -> Result<Vec<Standing<Place>>, SessionError> {
        let seats = self.deal()?;
        debug!("Table: {}", seats.table());

        let mut eval = Evaluator::new(seats.player_hands());
        eval.evaluate();

        let standings = eval.award(self.config.podium)?;
        for standing in &standings {
            info!("{}", announcement(standing));
        }

        Ok(standings)
    }
}

/// The text announcing a podium place.
pub fn announcement(standing: &Standing<Place>) -> String {
    let Standing {
        position,
        player,
        rank,
    } = standing;

    match *position {
        1 => format!("{player} wins with a {rank}"),
        2 => format!("{player} comes second with a {rank}"),
        3 => format!("{player} comes third with a {rank}"),
        n => format!("{player} comes {n}{} with a {rank}", ordinal_suffix(n)),
    }
}

fn ordinal_suffix(n: usize) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_cards::Card;
    use podium_eval::HandRank;
    use rand::{SeedableRng, rngs::StdRng};

    fn deck(cards: &str) -> Deck {
        let codes = cards
            .split_whitespace()
            .map(|c| format!("{:02}", c.parse::<Card>().unwrap().code()))
            .collect::<String>();
        Deck::from_codes(&codes).unwrap()
    }

    fn session(cards: &str, order: &str) -> Session {
        let mut session = Session::new(Config::default(), deck(cards));
        for place in order.split_whitespace() {
            session.assign(place.parse().unwrap());
        }
        session
    }

    fn hand(cards: &str) -> Hand {
        cards
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect()
    }

    #[test]
    fn check_valid_input() {
        let s = session("", "p1 p1 t t t");
        assert_eq!(s.check_input(), Ok(()));

        // Burned cards are ignored and players can be skipped.
        let s = session("", "b p3 b p3 p1 t p1 t b t t t");
        assert_eq!(s.check_input(), Ok(()));
        assert_eq!(s.deal_order().len(), 12);
    }

    #[test]
    fn check_hole_cards() {
        let s = session("", "p1 p1 p2 t t t");
        assert_eq!(
            s.check_input(),
            Err(SessionError::HoleCards {
                place: Place::Player2,
                count: 1,
                expected: 2
            })
        );

        let s = session("", "p1 p1 p1 t t t");
        assert_eq!(
            s.check_input(),
            Err(SessionError::HoleCards {
                place: Place::Player1,
                count: 3,
                expected: 2
            })
        );
    }

    #[test]
    fn check_table_cards() {
        let s = session("", "p1 p1 t t");
        assert_eq!(
            s.check_input(),
            Err(SessionError::TableCards {
                count: 2,
                min: 3,
                max: 5
            })
        );

        let s = session("", "p1 p1 t t t t t t");
        assert!(matches!(
            s.check_input(),
            Err(SessionError::TableCards { count: 6, .. })
        ));
    }

    #[test]
    fn check_no_players() {
        let s = session("", "t t t b");
        assert_eq!(s.check_input(), Err(SessionError::NoPlayers));

        let s = session("", "");
        assert!(s.check_input().is_err());
    }

    #[test]
    fn deal_to_places() {
        let mut s = session("AH AS 2C KD 7H 9S 3D JC", "p2 p1 b p2 p1 t t t");
        let seats = s.deal().unwrap();

        assert_eq!(seats.players(), vec![Place::Player1, Place::Player2]);
        assert_eq!(seats.hand(Place::Player1), Some(&hand("AS 7H")));
        assert_eq!(seats.hand(Place::Player2), Some(&hand("AH KD")));
        assert_eq!(seats.hand(Place::Player3), None);
        assert_eq!(seats.hand(Place::Burn), None);

        let table = seats.hand(Place::Table).unwrap();
        assert_eq!(table.cards(), hand("9S 3D JC").cards());
        assert_eq!(table.capacity(), 5);

        // The whole deck has been dealt.
        assert_eq!(s.deck().count(), 0);

        let hands = seats.player_hands().collect::<Vec<_>>();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0], (Place::Player1, hand("AS 7H 9S 3D JC")));
        assert_eq!(hands[1], (Place::Player2, hand("AH KD 9S 3D JC")));

        // Merging leaves the dealt hands untouched.
        assert_eq!(seats.hand(Place::Player1).unwrap().len(), 2);
        assert_eq!(seats.table().len(), 3);
    }

    #[test]
    fn deal_from_short_deck() {
        let mut s = session("AH AS 2C KD", "p1 p1 t t t");
        assert_eq!(
            s.deal().unwrap_err(),
            SessionError::DeckExhausted {
                needed: 5,
                available: 4
            }
        );

        // Nothing has been dealt.
        assert_eq!(s.deck().count(), 4);
    }

    #[test]
    fn deal_rejects_invalid_input() {
        let mut s = session("AH AS 2C KD 7H 9S", "p1 t t t");
        assert!(matches!(s.deal(), Err(SessionError::HoleCards { .. })));
        assert_eq!(s.deck().count(), 6);
    }

    #[test]
    fn score_podium() {
        // Player 3 flush, player 1 pair of aces, player 2 pair of nines,
        // player 4 high card.
        let cards = "AH AS 9C 9D KH QH JS 2C 4D 3C 6H TH 8D 5H";
        let order = "p1 p1 p2 p2 p3 p3 p4 p4 b t t t t t";
        let mut s = session(cards, order);

        let standings = s.score().unwrap();
        assert_eq!(standings.len(), 3);

        let podium = standings
            .iter()
            .map(|s| (s.position, s.player, s.rank))
            .collect::<Vec<_>>();
        assert_eq!(
            podium,
            vec![
                (1, Place::Player3, HandRank::Flush),
                (2, Place::Player1, HandRank::OnePair),
                (3, Place::Player2, HandRank::OnePair),
            ]
        );
    }

    #[test]
    fn score_fewer_players_than_podium() {
        let mut s = session("AH AS 9C 7D KH", "p1 p1 t t t");
        let standings = s.score().unwrap();
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].player, Place::Player1);
        assert_eq!(standings[0].rank, HandRank::OnePair);
    }

    #[test]
    fn score_shuffled_deck() {
        let mut rng = StdRng::seed_from_u64(42);
        let order = "p1 p1 p2 p2 p3 p3 p4 p4 p5 p5 p6 p6 p7 p7 b t t t b t b t";

        for _ in 0..50 {
            let mut s = Session::new(Config::default(), Deck::new_and_shuffled(&mut rng));
            for place in order.split_whitespace() {
                s.assign(place.parse().unwrap());
            }

            let standings = s.score().unwrap();
            assert_eq!(standings.len(), 3);
            assert!(standings.windows(2).all(|w| w[0].rank >= w[1].rank));
            assert!(standings.windows(2).all(|w| w[0].player != w[1].player));
            assert_eq!(s.deck().count(), Deck::SIZE - 22);
        }
    }

    #[test]
    fn custom_config() {
        let config = Config {
            hole_cards: 4,
            min_table_cards: 5,
            table_cards: 5,
            podium: 1,
        };

        let mut s = Session::new(config, deck("AH AS AD AC 2C 3D 4H 5S 7C 9D"));
        for place in "p1 p1 p1 p1 p2 p2 p2 p2 t t".split_whitespace() {
            s.assign(place.parse().unwrap());
        }
        assert!(matches!(
            s.check_input(),
            Err(SessionError::TableCards { count: 2, .. })
        ));
    }

    #[test]
    fn announcements() {
        let standing = |position, player, rank| Standing {
            position,
            player,
            rank,
        };

        assert_eq!(
            announcement(&standing(1, Place::Player2, HandRank::Flush)),
            "Player 2 wins with a Flush"
        );
        assert_eq!(
            announcement(&standing(2, Place::Player1, HandRank::TwoPair)),
            "Player 1 comes second with a Two Pair"
        );
        assert_eq!(
            announcement(&standing(3, Place::Player7, HandRank::HighCard)),
            "Player 7 comes third with a High Card"
        );
        assert_eq!(
            announcement(&standing(4, Place::Player5, HandRank::OnePair)),
            "Player 5 comes 4th with a One Pair"
        );

        let places = [11, 12, 13, 21, 22, 23, 101, 111]
            .map(|n| announcement(&standing(n, Place::Player1, HandRank::Flush)));
        assert_eq!(
            places,
            [
                "Player 1 comes 11th with a Flush",
                "Player 1 comes 12th with a Flush",
                "Player 1 comes 13th with a Flush",
                "Player 1 comes 21st with a Flush",
                "Player 1 comes 22nd with a Flush",
                "Player 1 comes 23rd with a Flush",
                "Player 1 comes 101st with a Flush",
                "Player 1 comes 111th with a Flush",
            ]
        );
    }
}
