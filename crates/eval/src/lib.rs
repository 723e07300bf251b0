// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Texas hold'em hand evaluator and showdown resolver. The evaluator finds the
//! best five cards hand out of a player two hole cards and the five board
//! cards, the resolver ranks all the players at showdown and finds the
//! winners, more than one when the pot is split.
//!
//! To evaluate a hand use [evaluate] and compare the resulting descriptors:
//!
//! ```
//! # use showdown_eval::*;
//! let flush = evaluate(&parse_cards("AH 9H 7H 4H 2H KS QC").unwrap()).unwrap();
//! let straight = evaluate(&parse_cards("AS KD QH JC TS 2H 3D").unwrap()).unwrap();
//! assert_eq!(flush.category(), HandCategory::Flush);
//! assert!(flush > straight);
//! ```
//!
//! To resolve a showdown use [resolve] with each player seven cards, or
//! [resolve_board] with the board and each player hole cards:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("9S 9H 9D 5C 5S").unwrap();
//! let alice = [Card::new(Rank::Deuce, Suit::Clubs), Card::new(Rank::Trey, Suit::Hearts)];
//! let bob = [Card::new(Rank::Four, Suit::Diamonds), Card::new(Rank::Seven, Suit::Clubs)];
//!
//! let res = resolve_board(&board, [("alice", alice), ("bob", bob)]).unwrap();
//! assert_eq!(res.winners, vec!["alice", "bob"]);
//! assert_eq!(res.category, HandCategory::FullHouse);
//! assert!(res.plays_board);
//! ```
//!
//! The **`parallel`** feature enables `par_resolve` that evaluates each player
//! hand on a separate thread.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{Error, Result};

pub mod eval;
pub use eval::{HandCategory, HandDescriptor, evaluate, evaluate_any, evaluate_with_best_hand};

pub mod showdown;
#[cfg(feature = "parallel")]
pub use showdown::par_resolve;
pub use showdown::{ShowdownResult, resolve, resolve_board};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit, parse_cards};
