// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Podium CLI, deals a deck and ranks the players hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use podium_core::{Config, Place, Session};

pub mod input;

#[derive(Debug, Parser)]
struct Cli {
    /// Read the deck from a document with a data field, `-` reads stdin.
    #[clap(long, short, conflicts_with_all = ["codes", "seed"])]
    document: Option<PathBuf>,
    /// The deck as two digits cards codes.
    #[clap(long, short, conflicts_with = "seed")]
    codes: Option<String>,
    /// Shuffle the deck with this seed.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The places the cards are dealt to in order (p1..p7, t, b).
    #[clap(
        long,
        value_delimiter = ',',
        default_values = ["p1", "p1", "p2", "p2", "b", "t", "t", "t", "b", "t", "b", "t"]
    )]
    deal: Vec<Place>,
    /// The number of places to award.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=7))]
    podium: u8,
    /// Print the standings as JSON.
    #[clap(long)]
    json: bool,
    /// Log every classified hand.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn source(&self) -> input::Source {
        if let Some(path) = &self.document {
            input::Source::Document(path.clone())
        } else if let Some(codes) = &self.codes {
            input::Source::Codes(codes.clone())
        } else if let Some(seed) = self.seed {
            input::Source::Seed(seed)
        } else {
            input::Source::Random
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let deck = cli.source().load()?;
    let config = Config {
        podium: cli.podium as usize,
        ..Config::default()
    };

    let mut session = Session::new(config, deck);
    for place in &cli.deal {
        session.assign(*place);
    }

    let standings = session.score()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
    } else {
        for standing in &standings {
            println!(
                "{}. {:<8}  {}",
                standing.position,
                standing.player.description(),
                standing.rank
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args() {
        let cli = Cli::parse_from(["podium", "--codes", "001351", "--deal", "p1,p1,t,t,t"]);
        assert_eq!(cli.source(), input::Source::Codes("001351".to_string()));
        assert_eq!(
            cli.deal,
            vec![
                Place::Player1,
                Place::Player1,
                Place::Table,
                Place::Table,
                Place::Table
            ]
        );
        assert_eq!(cli.podium, 3);
        assert!(!cli.json);

        let cli = Cli::parse_from(["podium", "--seed", "9", "--podium", "1", "--json"]);
        assert_eq!(cli.source(), input::Source::Seed(9));
        assert_eq!(cli.deal.len(), 12);
        assert!(cli.json);

        let cli = Cli::parse_from(["podium", "-d", "-"]);
        assert_eq!(cli.source(), input::Source::Document(PathBuf::from("-")));

        assert_eq!(Cli::parse_from(["podium"]).source(), input::Source::Random);
    }

    #[test]
    fn reject_args() {
        assert!(Cli::try_parse_from(["podium", "--deal", "p1,x"]).is_err());
        assert!(Cli::try_parse_from(["podium", "--podium", "0"]).is_err());
        assert!(Cli::try_parse_from(["podium", "--codes", "00", "--seed", "1"]).is_err());
    }
}
