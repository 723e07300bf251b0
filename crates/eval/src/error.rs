// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation and showdown errors.
use thiserror::Error;

use showdown_cards::Card;

/// Result type for evaluation and showdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the evaluator and the showdown resolver.
///
/// All errors are contract violations of the caller (a dealing bug or a
/// showdown with everybody folded) and are never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hand with the wrong number of cards.
    #[error("invalid hand: wrong number of cards {0}")]
    WrongCardCount(usize),
    /// A board without exactly five cards.
    #[error("invalid board: expected 5 cards, got {0}")]
    WrongBoardSize(usize),
    /// The same card appears twice.
    #[error("invalid hand: duplicate card {0}")]
    DuplicateCard(Card),
    /// A showdown with no players.
    #[error("showdown without players")]
    NoPlayers,
}

impl Error {
    /// Checks if this error comes from malformed cards.
    pub fn is_invalid_hand(&self) -> bool {
        !matches!(self, Error::NoPlayers)
    }
}
