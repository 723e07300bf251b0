// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text rendering of hands and showdowns.
use anyhow::{Result, bail};
use std::fmt::Write;

use showdown_cards::{Card, parse_cards};
use showdown_core::hand::HandOutcome;
use showdown_eval::{ShowdownResult, evaluate_with_best_hand};

/// Parses a player hole cards, like "AS,KS" or "AS KS".
pub fn parse_hole(s: &str) -> Result<[Card; 2]> {
    match parse_cards(s)?[..] {
        [c1, c2] => Ok([c1, c2]),
        ref cards => bail!("Expected 2 hole cards got {} in {s:?}", cards.len()),
    }
}

/// Renders a played hand.
pub fn hand_outcome(hand: &HandOutcome) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Hand {} dealer {} board [{}]",
        hand.hand_no,
        hand.seats.dealer() + 1,
        cards(&hand.board)
    );

    for (seat, hole) in hand.holes.iter().enumerate() {
        let state = if hand.winners.contains(&seat) {
            "WIN"
        } else if hand.folded.contains(&seat) {
            "FOLD"
        } else {
            ""
        };

        let _ = writeln!(out, "  Seat {:<2} [{}] {state}", seat + 1, cards(hole));
    }

    match &hand.showdown {
        Some(res) => {
            let _ = write!(out, "  {}", summary(res));
        }
        None => {
            let _ = write!(out, "  Won without showdown");
        }
    }

    out
}

/// Renders a showdown for the given board and holes, with each player best hand.
pub fn showdown(board: &[Card], holes: &[[Card; 2]], res: &ShowdownResult<usize>) -> Result<String> {
    let mut out = String::new();

    let _ = writeln!(out, "Board [{}]", cards(board));
    for (player, descriptor) in &res.ranking {
        let mut all = holes[*player].to_vec();
        all.extend_from_slice(board);
        let (_, best) = evaluate_with_best_hand(&all)?;

        let _ = writeln!(
            out,
            "  Player {:<2} [{}] {descriptor} best [{}]",
            player + 1,
            cards(&holes[*player]),
            cards(&best)
        );
    }

    let _ = write!(out, "{}", summary(res));
    Ok(out)
}

fn summary(res: &ShowdownResult<usize>) -> String {
    let players = res
        .winners
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut s = if res.is_split() {
        format!("Split pot {players} with {}", res.descriptor)
    } else {
        format!("Winner {players} with {}", res.descriptor)
    };

    if res.plays_board {
        s.push_str(", plays the board");
    }

    s
}

fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::resolve_board;

    #[test]
    fn hole_parsing() {
        let hole = parse_hole("AS,KS").unwrap();
        assert_eq!(hole[0].to_string(), "AS");
        assert_eq!(hole[1].to_string(), "KS");

        assert!(parse_hole("AS").is_err());
        assert!(parse_hole("AS KS QS").is_err());
        assert!(parse_hole("AS XX").is_err());
    }

    #[test]
    fn split_on_the_board() {
        let board = parse_cards("AS KS QS JS TS").unwrap();
        let holes = [parse_hole("2H 3D").unwrap(), parse_hole("4C 5H").unwrap()];
        let res = resolve_board(&board, holes.iter().copied().enumerate()).unwrap();

        let out = showdown(&board, &holes, &res).unwrap();
        assert!(out.starts_with("Board [AS KS QS JS TS]"));
        assert!(out.ends_with("Split pot 1, 2 with Royal Flush (A), plays the board"));
    }

    #[test]
    fn single_winner() {
        let board = parse_cards("QS JS TS 2H 3D").unwrap();
        let holes = [parse_hole("AS KS").unwrap(), parse_hole("AH AD").unwrap()];
        let res = resolve_board(&board, holes.iter().copied().enumerate()).unwrap();

        let out = showdown(&board, &holes, &res).unwrap();
        assert!(out.contains("Player 1  [AS KS]"));
        assert!(out.ends_with("Winner 1 with Royal Flush (A)"));
    }
}
