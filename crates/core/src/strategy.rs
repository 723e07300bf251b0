// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players actions and the scripted decision table.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};
use showdown_eval::{HandCategory, evaluate_any};

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop, only hole cards.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// Number of board cards dealt on this street.
    pub fn board_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The street that follows this one.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        f.write_str(street)
    }
}

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Player folds.
    Fold,
    /// Player checks.
    Check,
    /// Player calls.
    Call,
    /// Player raises.
    Raise,
}

impl Action {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Check => "CHECK",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        }
    }
}

/// The game state a player can observe when it is its turn to act.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    /// The player seat.
    pub seat: usize,
    /// The player hole cards.
    pub hole: [Card; 2],
    /// The board cards dealt so far.
    pub board: &'a [Card],
    /// The current street.
    pub street: Street,
    /// Number of raises on this street before this player.
    pub raises: u8,
    /// The player has a bet to match.
    pub facing_bet: bool,
}

/// A player decision strategy.
pub trait Strategy {
    /// Chooses an action given the player view of the game.
    fn execute(&mut self, view: &PlayerView<'_>) -> Action;
}

/// A strategy that follows the fixed decision table in [decide].
#[derive(Debug, Clone, Copy, Default)]
pub struct Scripted;

impl Strategy for Scripted {
    fn execute(&mut self, view: &PlayerView<'_>) -> Action {
        decide(view)
    }
}

/// The scripted decision table.
///
/// Pre-flop decisions look at the hole cards only, later streets look at the
/// category of the best hand made with the board so far. A player that has no
/// bet to match checks instead of calling or folding.
pub fn decide(view: &PlayerView<'_>) -> Action {
    let action = match view.street {
        Street::Preflop => preflop_action(view.hole, view.raises),
        _ => {
            let mut cards = view.hole.to_vec();
            cards.extend_from_slice(view.board);

            // An invalid deal is reported at showdown.
            evaluate_any(&cards).map_or(Action::Call, |value| {
                postflop_action(value.category(), view.raises)
            })
        }
    };

    match action {
        Action::Call | Action::Fold if !view.facing_bet => Action::Check,
        action => action,
    }
}

/// Pre-flop action for the given hole cards and number of raises.
pub fn preflop_action(hole: [Card; 2], raises: u8) -> Action {
    use Rank::*;

    let (r1, r2) = (hole[0].rank(), hole[1].rank());
    let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

    match (high, low) {
        // Raise and re-raise premium hands.
        (Ace, Ace) | (King, King) | (Ace, King) => {
            if raises < 2 {
                Action::Raise
            } else {
                Action::Call
            }
        }
        (_, low) if low >= Ten => {
            if raises == 0 {
                Action::Raise
            } else {
                Action::Call
            }
        }
        (Seven, Trey) | (Jack, Trey) | (Nine, Deuce) => Action::Fold,
        _ => Action::Call,
    }
}

/// Post-flop action for the current hand category and number of raises.
pub fn postflop_action(category: HandCategory, raises: u8) -> Action {
    match category {
        HandCategory::RoyalFlush | HandCategory::StraightFlush => Action::Raise,
        HandCategory::FourOfAKind
        | HandCategory::FullHouse
        | HandCategory::Flush
        | HandCategory::Straight => {
            if raises < 2 {
                Action::Raise
            } else {
                Action::Call
            }
        }
        _ => Action::Call,
    }
}
