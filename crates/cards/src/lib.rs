// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to deal two hole cards and a board from a shuffled deck:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hole = deck.deal_cards(2).unwrap();
//! let board = deck.deal_cards(5).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - hole.len() - board.len());
//! ```
//!
//! or to iterate through all the 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
