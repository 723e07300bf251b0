// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seats and positions.
use anyhow::{Result, bail};

use showdown_cards::Card;

/// The positions of the players at a table.
///
/// Seats are numbered from 0, the small blind sits after the dealer and the
/// big blind after the small blind, wrapping around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    count: usize,
    dealer: usize,
}

impl Seats {
    /// Minimum number of players at a table.
    pub const MIN: usize = 3;
    /// Maximum number of players at a table.
    pub const MAX: usize = 10;

    /// Creates the seats for `count` players with the button at `dealer`.
    pub fn new(count: usize, dealer: usize) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            bail!(
                "Invalid number of players {count}, must be {}..={}",
                Self::MIN,
                Self::MAX
            );
        }

        if dealer >= count {
            bail!("Invalid dealer seat {dealer} for {count} players");
        }

        Ok(Self { count, dealer })
    }

    /// The number of seats.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The small blind seat.
    pub fn small_blind(&self) -> usize {
        self.next(self.dealer)
    }

    /// The big blind seat.
    pub fn big_blind(&self) -> usize {
        self.next(self.small_blind())
    }

    /// The seat after the given one.
    pub fn next(&self, seat: usize) -> usize {
        (seat + 1) % self.count
    }

    /// The pre-flop action order, from the seat after the big blind to the
    /// big blind.
    pub fn preflop_order(&self) -> impl Iterator<Item = usize> + use<> {
        self.order_from(self.next(self.big_blind()))
    }

    /// The post-flop action order, from the seat after the dealer to the
    /// dealer.
    pub fn postflop_order(&self) -> impl Iterator<Item = usize> + use<> {
        self.order_from(self.small_blind())
    }

    /// Moves the button to the next seat.
    pub fn rotate(&mut self) {
        self.dealer = self.next(self.dealer);
    }

    fn order_from(&self, first: usize) -> impl Iterator<Item = usize> + use<> {
        let count = self.count;
        (0..count).map(move |i| (first + i) % count)
    }
}

/// Chooses the dealer from one card drawn for each seat.
///
/// The highest rank gets the button, on equal ranks the first seat that
/// drew wins. Returns `None` if there are no cards.
pub fn choose_dealer(draws: &[Card]) -> Option<usize> {
    draws
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|(_, card)| card.rank())
        .map(|(seat, _)| seat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::parse_cards;

    #[test]
    fn positions() {
        let seats = Seats::new(4, 0).unwrap();
        assert_eq!(seats.small_blind(), 1);
        assert_eq!(seats.big_blind(), 2);
        assert_eq!(seats.preflop_order().collect::<Vec<_>>(), vec![3, 0, 1, 2]);
        assert_eq!(seats.postflop_order().collect::<Vec<_>>(), vec![1, 2, 3, 0]);

        // Blinds wrap around the table.
        let seats = Seats::new(3, 2).unwrap();
        assert_eq!(seats.small_blind(), 0);
        assert_eq!(seats.big_blind(), 1);
        assert_eq!(seats.preflop_order().collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_eq!(seats.postflop_order().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn rotate_button() {
        let mut seats = Seats::new(5, 3).unwrap();
        seats.rotate();
        assert_eq!(seats.dealer(), 4);
        seats.rotate();
        assert_eq!(seats.dealer(), 0);
        assert_eq!(seats.small_blind(), 1);
        assert_eq!(seats.count(), 5);
    }

    #[test]
    fn invalid_seats() {
        assert!(Seats::new(2, 0).is_err());
        assert!(Seats::new(11, 0).is_err());
        assert!(Seats::new(4, 4).is_err());
        assert!(Seats::new(10, 9).is_ok());
    }

    #[test]
    fn dealer_draw() {
        let draws = parse_cards("7S KD 2H KC").unwrap();
        assert_eq!(choose_dealer(&draws), Some(1));

        let draws = parse_cards("7S 5D AH").unwrap();
        assert_eq!(choose_dealer(&draws), Some(2));

        assert_eq!(choose_dealer(&[]), None);
    }
}
