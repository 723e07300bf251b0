// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals random hands and prints the showdown results:
//
// ```bash
// $ cargo r --example showdown -- --players 4 --hands 3 --seed 7
// ```
use clap::{Parser, value_parser};
use rand::{SeedableRng, rngs::StdRng};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at showdown.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u8).range(2..=10))]
    players: u8,
    /// Number of hands to deal.
    #[clap(long, default_value_t = 5)]
    hands: usize,
    /// Seed for the deck shuffling.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for hand_no in 1..=cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);

        let holes = (0..cli.players as usize)
            .map(|player| {
                let cards = deck.deal_cards(2).unwrap();
                (player, [cards[0], cards[1]])
            })
            .collect::<Vec<_>>();

        let board = deck.deal_cards(5).unwrap();
        let res = resolve_board(&board, holes.iter().copied())?;

        let board_str = board.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        println!("Hand {hand_no} board {}", board_str.join(" "));

        for (player, value) in &res.ranking {
            let [c1, c2] = holes[*player].1;
            let mark = if res.winners.contains(player) { "*" } else { " " };
            println!("  {mark} player {player} {c1} {c2}  {value}");
        }

        if res.plays_board {
            println!("  board plays, pot split {} ways", res.winners.len());
        } else if res.is_split() {
            println!("  pot split {} ways", res.winners.len());
        }
    }

    Ok(())
}
