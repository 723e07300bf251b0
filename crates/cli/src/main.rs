// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

mod output;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays hands at a table with scripted players.
    Play {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=10))]
        players: u8,
        /// Number of hands to play.
        #[clap(long, default_value_t = 1)]
        hands: usize,
        /// Seed for reproducible shuffling.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Resolves a showdown for the given board and players hole cards.
    Eval {
        /// The five board cards, like "QS JS TS 2H 3D".
        #[clap(long, short)]
        board: String,
        /// Each player hole cards, like "AS,KS".
        #[clap(required = true)]
        holes: Vec<String>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Play {
            players,
            hands,
            seed,
        } => {
            let config = showdown_core::Config {
                players: players as usize,
                hands,
                seed,
            };

            showdown_core::run(&config, |outcome| {
                println!("{}", output::hand_outcome(outcome));
            })
        }
        Command::Eval { board, holes } => {
            let board = showdown_cards::parse_cards(&board)?;
            let holes = holes
                .iter()
                .map(|h| output::parse_hole(h))
                .collect::<Result<Vec<_>>>()?;

            let res = showdown_eval::resolve_board(&board, holes.iter().copied().enumerate())?;
            println!("{}", output::showdown(&board, &holes, &res)?);
            Ok(())
        }
    }
}
