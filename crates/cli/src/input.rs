// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck sources.
use anyhow::{Result, anyhow};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{fs, io, path::PathBuf};

use podium_core::Deck;

/// Where the deck cards come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A document with a `data` field, `-` reads the document from stdin.
    Document(PathBuf),
    /// Two digits cards codes.
    Codes(String),
    /// A deck shuffled with the given seed.
    Seed(u64),
    /// A randomly shuffled deck.
    Random,
}

impl Source {
    /// Loads the deck from this source.
    pub fn load(&self) -> Result<Deck> {
        let deck = match self {
            Source::Document(path) => {
                let document = if path.as_os_str() == "-" {
                    io::read_to_string(io::stdin())?
                } else {
                    fs::read_to_string(path)
                        .map_err(|e| anyhow!("Cannot read {}: {e}", path.display()))?
                };

                Deck::from_document(&document)?
            }
            Source::Codes(codes) => Deck::from_codes(codes.trim())?,
            Source::Seed(seed) => Deck::new_and_shuffled(&mut StdRng::seed_from_u64(*seed)),
            Source::Random => Deck::new_and_shuffled(&mut rand::rng()),
        };

        info!("Loaded {} cards from {self:?}", deck.count());
        Ok(deck)
    }
}
