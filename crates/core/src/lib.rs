// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker table types.
//!
//! The table picks a dealer with a one card draw, deals hole cards and the
//! board, lets each seat act with a [Strategy](strategy::Strategy) and
//! resolves the showdown with the `showdown-eval` crate. Bet sizes and pots
//! are not tracked, a hand result is the set of winning seats.
//!
//! ```
//! # use showdown_core::{Config, hand::Table};
//! let config = Config {
//!     players: 4,
//!     hands: 1,
//!     seed: Some(42),
//! };
//!
//! let mut table = Table::new(&config).unwrap();
//! let hand = table.play_hand().unwrap();
//! assert!(!hand.winners.is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;

pub mod hand;
pub mod seats;
pub mod strategy;

/// Table configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// Number of hands to play.
    pub hands: usize,
    /// Seed for shuffling, a random seed if `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            hands: 1,
            seed: None,
        }
    }
}

/// Plays `config.hands` hands with scripted players calling `f` with the
/// outcome of each hand.
pub fn run<F>(config: &Config, mut f: F) -> Result<()>
where
    F: FnMut(&hand::HandOutcome),
{
    let mut table = hand::Table::new(config)?;

    for _ in 0..config.hands {
        let outcome = table.play_hand()?;
        f(&outcome);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_hands() {
        let config = Config {
            players: 3,
            hands: 10,
            seed: Some(1),
        };

        let mut hands = Vec::new();
        run(&config, |outcome| hands.push(outcome.hand_no)).unwrap();
        assert_eq!(hands, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn run_invalid_config() {
        let config = Config {
            players: 1,
            ..Config::default()
        };

        assert!(run(&config, |_| {}).is_err());
    }
}
