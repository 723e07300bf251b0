// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Number of ranks in a suit.
const NUM_RANKS: u8 = 13;

/// A Poker card.
///
/// A card is stored as a dense id in `0..52` with the following layout:
///
/// ```text
///   id = suit * 13 + (rank - 2)
///   suit = hearts=0, diamonds=1, clubs=2, spades=3
///   rank = deuce=2, trey=3, ..., king=13, ace=14
/// ```
///
/// Two cards are equal only if both rank and suit match, hand comparisons look
/// at [Card::rank] and use the suit only to detect flushes.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * NUM_RANKS + (rank as u8 - 2))
    }

    /// Creates a card from its id, returns `None` if `id >= 52`.
    pub fn from_id(id: u8) -> Option<Card> {
        (id < Deck::SIZE as u8).then_some(Self(id))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 / NUM_RANKS) as usize]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 % NUM_RANKS) as usize]
    }

    /// Returns a mask with only this card bit set, cards in a hand can be
    /// or-ed together to check for duplicates.
    #[inline]
    pub fn mask(&self) -> u64 {
        1 << self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseCardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::from_id(id).ok_or(ParseCardError::InvalidId(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card like `AS`, `th`, `10D` or `2c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::Format(s.to_string()))?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::Suit(suit))?;

        let rank = chars.as_str();
        let rank = match rank {
            "10" => Rank::Ten,
            r if r.chars().count() == 1 => {
                let c = r.chars().next().unwrap_or_default();
                Rank::from_char(c).ok_or(ParseCardError::Rank(r.to_string()))?
            }
            "" => return Err(ParseCardError::Format(s.to_string())),
            r => return Err(ParseCardError::Rank(r.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by spaces or commas, like `"AS KD, 7h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a rank followed by a suit.
    #[error("invalid card format {0:?}")]
    Format(String),
    /// Unknown rank.
    #[error("invalid card rank {0:?}")]
    Rank(String),
    /// Unknown suit.
    #[error("invalid card suit {0:?}")]
    Suit(char),
    /// Card id out of range.
    #[error("invalid card id {0}")]
    InvalidId(u8),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a rank from its numeric value in `2..=14`.
    pub fn from_value(value: u8) -> Option<Rank> {
        (2..=14)
            .contains(&value)
            .then(|| Self::ALL[(value - 2) as usize])
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2'..='9' => Self::from_value(c as u8 - b'0')?,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Clubs suit.
    Clubs = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'H' | '♥' => Some(Suit::Hearts),
            'D' | '♦' => Some(Suit::Diamonds),
            'C' | '♣' => Some(Suit::Clubs),
            'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards from the deck, `None` if there are not enough cards.
    pub fn deal_cards(&mut self, n: usize) -> Option<Vec<Card>> {
        let len = self.cards.len();
        (n <= len).then(|| self.cards.split_off(len - n))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns a card to the deck and reshuffles it.
    pub fn put_back<R: Rng>(&mut self, card: Card, rng: &mut R) {
        if !self.cards.contains(&card) {
            self.cards.push(card);
        }

        self.cards.shuffle(rng);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();

        // Positions of the current subset, advanced like an odometer.
        let mut pos: [usize; 7] = [0, 1, 2, 3, 4, 5, 6];
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];

        loop {
            for i in 0..k {
                h[i] = self.cards[pos[i]];
            }

            f(&h[0..k]);

            // Find the rightmost position that can still move right.
            let mut i = k;
            while i > 0 && pos[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                break;
            }

            pos[i - 1] += 1;
            for j in i..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
