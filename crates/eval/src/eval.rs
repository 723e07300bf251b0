// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator finds the best five cards hand out of a seven cards hand by
//! direct detection on rank and suit bitmasks instead of trying all the 21
//! five cards combinations. The result is a [HandDescriptor] with the hand
//! category and the ranks needed to break ties inside the category, most
//! significant first, so that any two hands compare with a single
//! lexicographic comparison.
//!
//! The [evaluate] function computes the descriptor and [evaluate_with_best_hand]
//! also returns the five cards that make the hand, useful to show a winning
//! hand.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Rank};

use crate::{Error, Result};

/// The number of cards in a hand, two hole cards and five board cards.
pub const HAND_SIZE: usize = 7;

/// The number of cards on the board.
pub const BOARD_SIZE: usize = 5;

/// Bit for the ace as the lowest card in the wheel straight.
const LOW_ACE_BIT: u16 = 1 << 1;

/// The poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Straight with all cards of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The category strength used for comparisons.
    ///
    /// A royal flush is the ace high straight flush, so it shares the
    /// straight flush tier and the top card decides.
    pub fn tier(self) -> u8 {
        match self {
            HandCategory::RoyalFlush => HandCategory::StraightFlush as u8,
            c => c as u8,
        }
    }

    /// All categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            Pair,
            HighCard,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

/// The value of a hand: its category and the ranks that break ties.
///
/// Descriptors are ordered by category tier and then by tiebreak ranks, two
/// descriptors are equal only if the hands split the pot.
#[derive(Clone, Copy)]
pub struct HandDescriptor {
    category: HandCategory,
    ranks: [Rank; 5],
    len: u8,
}

impl HandDescriptor {
    fn new<I>(category: HandCategory, tiebreak: I) -> Self
    where
        I: IntoIterator<Item = Rank>,
    {
        let mut ranks = [Rank::Deuce; 5];
        let mut len = 0;
        for (slot, rank) in ranks.iter_mut().zip(tiebreak) {
            *slot = rank;
            len += 1;
        }

        Self {
            category,
            ranks,
            len,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tiebreak ranks, most significant first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl Ord for HandDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .tier()
            .cmp(&other.category.tier())
            .then_with(|| self.tiebreak().cmp(other.tiebreak()))
    }
}

impl PartialOrd for HandDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandDescriptor {}

impl fmt::Debug for HandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandDescriptor")
            .field("category", &self.category)
            .field("tiebreak", &self.tiebreak())
            .finish()
    }
}

impl fmt::Display for HandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (idx, rank) in self.tiebreak().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{rank}")?;
        }
        f.write_str(")")
    }
}

/// Evaluates a seven cards hand.
///
/// Returns an error if the hand doesn't have exactly seven distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<HandDescriptor> {
    check_hand(cards)?;
    Ok(classify(cards))
}

/// Evaluates a hand of five, six or seven cards.
///
/// Used to evaluate a player hand before the river, returns an error if the
/// cards are not distinct or there are less than five or more than seven.
pub fn evaluate_any(cards: &[Card]) -> Result<HandDescriptor> {
    if !(5..=HAND_SIZE).contains(&cards.len()) {
        return Err(Error::WrongCardCount(cards.len()));
    }

    check_distinct(cards, 0)?;
    Ok(classify(cards))
}

/// Evaluates a seven cards hand and returns the five cards that make the hand.
pub fn evaluate_with_best_hand(cards: &[Card]) -> Result<(HandDescriptor, [Card; 5])> {
    let value = evaluate(cards)?;

    let mut best_hand = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let mut best_value = classify(&best_hand);
    for hand in five_of_seven(cards) {
        let hand_value = classify(&hand);
        if hand_value > best_value {
            best_hand = hand;
            best_value = hand_value;
        }
    }

    debug_assert_eq!(value, best_value);
    Ok((value, best_hand))
}

/// Checks that a hand has seven distinct cards.
fn check_hand(cards: &[Card]) -> Result<()> {
    if cards.len() != HAND_SIZE {
        return Err(Error::WrongCardCount(cards.len()));
    }

    check_distinct(cards, 0).map(|_| ())
}

/// Checks that cards are distinct and not in the `seen` mask, returns the mask
/// updated with the given cards.
pub(crate) fn check_distinct(cards: &[Card], mut seen: u64) -> Result<u64> {
    for card in cards {
        if seen & card.mask() != 0 {
            return Err(Error::DuplicateCard(*card));
        }
        seen |= card.mask();
    }

    Ok(seen)
}

/// Iterates the 21 five cards hands of a seven cards hand.
pub(crate) fn five_of_seven(cards: &[Card]) -> impl Iterator<Item = [Card; 5]> + '_ {
    debug_assert_eq!(cards.len(), HAND_SIZE);

    // Each hand leaves out two of the seven cards.
    (0..HAND_SIZE)
        .flat_map(|i| ((i + 1)..HAND_SIZE).map(move |j| (i, j)))
        .map(move |(i, j)| {
            let mut hand = [cards[0]; 5];
            let kept = cards
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != i && idx != j);
            for (slot, (_, card)) in hand.iter_mut().zip(kept) {
                *slot = *card;
            }
            hand
        })
}

/// Classifies a hand of five to seven distinct cards.
pub(crate) fn classify(cards: &[Card]) -> HandDescriptor {
    debug_assert!((5..=HAND_SIZE).contains(&cards.len()));

    let mut counts = [0u8; 15];
    let mut suits = [0u16; 4];
    let mut ranks = 0u16;

    for card in cards {
        let rank = card.rank();
        counts[rank.value() as usize] += 1;
        suits[card.suit() as usize] |= bit(rank);
        ranks |= bit(rank);
    }

    // Group ranks by multiplicity, at most one suit can hold five cards.
    let (mut quads, mut trips, mut pairs) = (0u16, 0u16, 0u16);
    for rank in Rank::ranks() {
        match counts[rank.value() as usize] {
            4 => quads |= bit(rank),
            3 => trips |= bit(rank),
            2 => pairs |= bit(rank),
            _ => {}
        }
    }

    let flush = suits.into_iter().find(|s| s.count_ones() >= 5);

    if let Some(top) = flush.and_then(straight_top) {
        let category = if top == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return HandDescriptor::new(category, [top]);
    }

    if let Some(quad) = highest(quads) {
        let kickers = descending(ranks & !bit(quad)).take(1);
        return HandDescriptor::new(HandCategory::FourOfAKind, [quad].into_iter().chain(kickers));
    }

    if let Some(trip) = highest(trips) {
        // A second three of a kind plays as the pair.
        if let Some(pair) = highest((trips & !bit(trip)) | pairs) {
            return HandDescriptor::new(HandCategory::FullHouse, [trip, pair]);
        }
    }

    if let Some(suited) = flush {
        return HandDescriptor::new(HandCategory::Flush, descending(suited).take(5));
    }

    if let Some(top) = straight_top(ranks) {
        return HandDescriptor::new(HandCategory::Straight, [top]);
    }

    if let Some(trip) = highest(trips) {
        let kickers = descending(ranks & !bit(trip)).take(2);
        return HandDescriptor::new(HandCategory::ThreeOfAKind, [trip].into_iter().chain(kickers));
    }

    let mut pair_ranks = descending(pairs);
    match (pair_ranks.next(), pair_ranks.next()) {
        (Some(high), Some(low)) => {
            // A third pair can still play as the kicker.
            let kickers = descending(ranks & !bit(high) & !bit(low)).take(1);
            HandDescriptor::new(
                HandCategory::TwoPair,
                [high, low].into_iter().chain(kickers),
            )
        }
        (Some(pair), None) => {
            let kickers = descending(ranks & !bit(pair)).take(3);
            HandDescriptor::new(HandCategory::Pair, [pair].into_iter().chain(kickers))
        }
        _ => HandDescriptor::new(HandCategory::HighCard, descending(ranks).take(5)),
    }
}

#[inline]
fn bit(rank: Rank) -> u16 {
    1 << rank.value()
}

/// Returns the top rank of the highest straight in a ranks mask.
fn straight_top(mask: u16) -> Option<Rank> {
    let mask = if mask & bit(Rank::Ace) != 0 {
        mask | LOW_ACE_BIT
    } else {
        mask
    };

    Rank::ranks()
        .rev()
        .take_while(|&top| top >= Rank::Five)
        .find(|&top| {
            let window = 0b1_1111 << (top.value() - 4);
            mask & window == window
        })
}

/// Iterates the ranks in a mask from the highest to the lowest.
fn descending(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ranks().rev().filter(move |&r| mask & bit(r) != 0)
}

fn highest(mask: u16) -> Option<Rank> {
    descending(mask).next()
}
