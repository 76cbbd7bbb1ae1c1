// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Places cards are dealt to.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A place cards can be dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Place {
    /// The first player.
    Player1,
    /// The second player.
    Player2,
    /// The third player.
    Player3,
    /// The fourth player.
    Player4,
    /// The fifth player.
    Player5,
    /// The sixth player.
    Player6,
    /// The seventh player.
    Player7,
    /// The community cards shared by all players.
    Table,
    /// Discarded cards.
    Burn,
}

impl Place {
    /// The number of player places.
    pub const PLAYERS: usize = 7;

    /// Returns all the player places in order.
    pub fn players() -> impl DoubleEndedIterator<Item = Place> {
        use Place::*;
        [Player1, Player2, Player3, Player4, Player5, Player6, Player7].into_iter()
    }

    /// The player place with the given number starting from 1.
    pub fn player(number: usize) -> Option<Place> {
        number.checked_sub(1).and_then(|idx| Self::players().nth(idx))
    }

    /// Checks if this is a player place.
    pub fn is_player(self) -> bool {
        !matches!(self, Place::Table | Place::Burn)
    }

    /// The place display name.
    pub fn description(self) -> &'static str {
        match self {
            Place::Player1 => "Player 1",
            Place::Player2 => "Player 2",
            Place::Player3 => "Player 3",
            Place::Player4 => "Player 4",
            Place::Player5 => "Player 5",
            Place::Player6 => "Player 6",
            Place::Player7 => "Player 7",
            Place::Table => "Table",
            Place::Burn => "Burn",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Error returned when a place name doesn't parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid place {0:?}, expected p1..p7, table or burn")]
pub struct ParsePlaceError(String);

impl FromStr for Place {
    type Err = ParsePlaceError;

    /// Parses `p1`/`player1` to `p7`/`player7`, `t`/`table` and `b`/`burn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "t" | "table" => Ok(Place::Table),
            "b" | "burn" => Ok(Place::Burn),
            _ => name
                .strip_prefix("player")
                .or_else(|| name.strip_prefix('p'))
                .and_then(|number| number.parse::<usize>().ok())
                .and_then(Place::player)
                .ok_or_else(|| ParsePlaceError(s.to_string())),
        }
    }
}
