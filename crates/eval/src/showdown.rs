// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution.
//!
//! Evaluates every player hand and ranks the players with the descriptors
//! order, all the players that share the best descriptor split the pot.
use showdown_cards::Card;

use crate::{
    Error, Result,
    eval::{BOARD_SIZE, HAND_SIZE, HandCategory, HandDescriptor, check_distinct, classify, evaluate},
};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_resolve;

/// The result of a showdown.
#[derive(Debug, Clone)]
pub struct ShowdownResult<P> {
    /// The players with the best hand, more than one for a split pot.
    pub winners: Vec<P>,
    /// The winning hand category.
    pub category: HandCategory,
    /// The winning hand.
    pub descriptor: HandDescriptor,
    /// All the players with their hands from the best to the worst, tied
    /// players keep their input order.
    pub ranking: Vec<(P, HandDescriptor)>,
    /// The winning hand is the board hand, set by [resolve_board].
    pub plays_board: bool,
}

impl<P> ShowdownResult<P> {
    /// Checks if the pot is split between more than one player.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Resolves a showdown given each player id and the player seven cards.
///
/// Returns [Error::NoPlayers] if there are no players, or the first
/// evaluation error if any player hand is invalid.
pub fn resolve<P, I, C>(players: I) -> Result<ShowdownResult<P>>
where
    P: Clone,
    I: IntoIterator<Item = (P, C)>,
    C: AsRef<[Card]>,
{
    let ranking = players
        .into_iter()
        .map(|(player, cards)| evaluate(cards.as_ref()).map(|value| (player, value)))
        .collect::<Result<Vec<_>>>()?;

    rank_players(ranking)
}

/// Resolves a showdown given the board cards and each player hole cards.
///
/// All cards must be distinct across the board and the players, the result
/// [plays_board](ShowdownResult::plays_board) flag is set if the best hand
/// is the board itself.
pub fn resolve_board<P, I>(board: &[Card], holes: I) -> Result<ShowdownResult<P>>
where
    P: Clone,
    I: IntoIterator<Item = (P, [Card; 2])>,
{
    if board.len() != BOARD_SIZE {
        return Err(Error::WrongBoardSize(board.len()));
    }

    let mut seen = check_distinct(board, 0)?;

    let hands = holes
        .into_iter()
        .map(|(player, hole)| {
            seen = check_distinct(&hole, seen)?;

            let mut cards = [hole[0]; HAND_SIZE];
            cards[..2].copy_from_slice(&hole);
            cards[2..].copy_from_slice(board);
            Ok((player, cards))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut result = resolve(hands)?;
    result.plays_board = classify(board) == result.descriptor;
    Ok(result)
}

/// Sorts the evaluated players and collects the winners.
fn rank_players<P: Clone>(mut ranking: Vec<(P, HandDescriptor)>) -> Result<ShowdownResult<P>> {
    // Stable sort, tied players keep their input order.
    ranking.sort_by(|(_, v1), (_, v2)| v2.cmp(v1));

    let best = ranking
        .first()
        .map(|(_, value)| *value)
        .ok_or(Error::NoPlayers)?;

    let winners = ranking
        .iter()
        .take_while(|(_, value)| *value == best)
        .map(|(player, _)| player.clone())
        .collect();

    Ok(ShowdownResult {
        winners,
        category: best.category(),
        descriptor: best,
        ranking,
        plays_board: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashMap;
    use rand::{SeedableRng, rngs::StdRng};
    use showdown_cards::{Deck, Rank, parse_cards};

    use Rank::*;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn hole(s: &str) -> [Card; 2] {
        let c = cards(s);
        [c[0], c[1]]
    }

    fn seven(hole: &str, board: &str) -> Vec<Card> {
        cards(&format!("{hole} {board}"))
    }

    #[test]
    fn royal_flush_beats_pair() {
        let board = "QS JS TS 2H 3D";
        let res = resolve([("A", seven("AS KS", board)), ("B", seven("AH AD", board))]).unwrap();

        assert_eq!(res.winners, vec!["A"]);
        assert_eq!(res.category, HandCategory::RoyalFlush);
        assert!(!res.is_split());

        let (player, value) = res.ranking[1];
        assert_eq!(player, "B");
        assert_eq!(value.category(), HandCategory::Pair);
        assert_eq!(value.tiebreak(), &[Ace, Queen, Jack, Ten]);
    }

    #[test]
    fn board_full_house_splits() {
        let board = cards("9S 9H 9D 5C 5S");
        let res = resolve_board(&board, [(1, hole("2C 3H")), (2, hole("4D 7C"))]).unwrap();

        assert_eq!(res.winners, vec![1, 2]);
        assert!(res.is_split());
        assert!(res.plays_board);
        assert_eq!(res.category, HandCategory::FullHouse);
        assert_eq!(res.descriptor.tiebreak(), &[Nine, Five]);

        for (_, value) in &res.ranking {
            assert_eq!(value.tiebreak(), &[Nine, Five]);
        }
    }

    #[test]
    fn same_straight_splits() {
        let board = cards("AS JS TS 4H 2D");
        let res = resolve_board(&board, [(1, hole("KC QC")), (2, hole("KD QD"))]).unwrap();

        assert_eq!(res.winners, vec![1, 2]);
        assert_eq!(res.category, HandCategory::Straight);
        assert_eq!(res.descriptor.tiebreak(), &[Ace]);
        assert!(!res.plays_board);
    }

    #[test]
    fn pocket_trips_full_house_beats_two_pair() {
        let board = cards("7S 2H 9D 9S 3C");
        let res = resolve_board(&board, [("A", hole("7C 7D")), ("B", hole("KC KD"))]).unwrap();

        assert_eq!(res.winners, vec!["A"]);
        assert_eq!(res.category, HandCategory::FullHouse);
        assert_eq!(res.descriptor.tiebreak(), &[Seven, Nine]);

        let (_, b) = res.ranking[1];
        assert_eq!(b.category(), HandCategory::TwoPair);
        assert_eq!(b.tiebreak(), &[King, Nine, Seven]);
    }

    #[test]
    fn board_trips_with_pocket_pairs() {
        // Both players use the board trips, the highest pocket pair wins.
        let board = cards("9C 9D 9S 2H 3C");
        let res = resolve_board(&board, [("A", hole("7C 7D")), ("B", hole("KC KD"))]).unwrap();

        assert_eq!(res.winners, vec!["B"]);
        assert_eq!(res.descriptor.tiebreak(), &[Nine, King]);

        let (_, a) = res.ranking[1];
        assert_eq!(a.category(), HandCategory::FullHouse);
        assert_eq!(a.tiebreak(), &[Nine, Seven]);
        assert!(!res.plays_board);
    }

    #[test]
    fn board_royal_flush_splits_all() {
        let board = cards("AH KH QH JH TH");
        let res = resolve_board(
            &board,
            [(1, hole("2C 3C")), (2, hole("9H 8H")), (3, hole("AS AD"))],
        )
        .unwrap();

        assert_eq!(res.winners, vec![1, 2, 3]);
        assert_eq!(res.category, HandCategory::RoyalFlush);
        assert!(res.plays_board);
    }

    #[test]
    fn kicker_decides() {
        let board = cards("AS 9D 7H 4C 2S");
        let res = resolve_board(
            &board,
            [(1, hole("AD QC")), (2, hole("AH KC")), (3, hole("AC QD"))],
        )
        .unwrap();

        assert_eq!(res.winners, vec![2]);
        assert_eq!(res.descriptor.tiebreak(), &[Ace, King, Nine, Seven]);

        // Players 1 and 3 tie in input order.
        let order = res.ranking.iter().map(|(p, _)| *p).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(res.ranking[1].1, res.ranking[2].1);
    }

    #[test]
    fn kicker_outside_best_five_splits() {
        // The fifth best card is on the board, hole kickers below it don't play.
        let board = cards("AS AD KH QC JS");
        let res = resolve_board(&board, [(1, hole("3C 2D")), (2, hole("4C 2H"))]).unwrap();

        assert_eq!(res.winners, vec![1, 2]);
        assert_eq!(res.category, HandCategory::Pair);
        assert!(res.plays_board);
    }

    #[test]
    fn single_player_wins() {
        let res = resolve([(7u8, seven("2C 3H", "9S 8H 6D KC QS"))]).unwrap();
        assert_eq!(res.winners, vec![7]);
        assert_eq!(res.ranking.len(), 1);
    }

    #[test]
    fn map_of_players() {
        let board = "QS JS TS 2H 3D";
        let mut players = HashMap::default();
        players.insert("A".to_string(), seven("AS KS", board));
        players.insert("B".to_string(), seven("AH AD", board));

        let res = resolve(players).unwrap();
        assert_eq!(res.winners, vec!["A".to_string()]);
        assert_eq!(res.ranking.len(), 2);
    }

    #[test]
    fn no_players() {
        let res = resolve(Vec::<(u8, Vec<Card>)>::new());
        assert!(matches!(res, Err(Error::NoPlayers)));

        let board = cards("9S 9H 9D 5C 5S");
        let res = resolve_board(&board, Vec::<(u8, [Card; 2])>::new());
        assert!(matches!(res, Err(Error::NoPlayers)));
        assert!(!Error::NoPlayers.is_invalid_hand());
    }

    #[test]
    fn invalid_hand_propagates() {
        let res = resolve([(1, seven("AS KS", "QS JS TS 2H 3D")), (2, cards("AS KS"))]);
        assert!(matches!(res, Err(Error::WrongCardCount(2))));

        let board = cards("9S 9H 9D 5C");
        let res = resolve_board(&board, [(1, hole("2C 3H"))]);
        assert!(matches!(res, Err(Error::WrongBoardSize(4))));

        // The same card dealt to a player and the board.
        let board = cards("9S 9H 9D 5C 5S");
        let res = resolve_board(&board, [(1, hole("2C 9S"))]);
        assert!(matches!(res, Err(Error::DuplicateCard(c)) if c.to_string() == "9S"));

        // The same card dealt to two players.
        let res = resolve_board(&board, [(1, hole("2C 3H")), (2, hole("4D 2C"))]);
        assert!(matches!(res, Err(Error::DuplicateCard(c)) if c.to_string() == "2C"));
    }

    #[test]
    fn winners_match_max() {
        let mut rng = StdRng::seed_from_u64(29);

        for num_players in 2..=10 {
            for _ in 0..200 {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let board = deck.deal_cards(BOARD_SIZE).unwrap();
                let holes = (0..num_players)
                    .map(|p| {
                        let c = deck.deal_cards(2).unwrap();
                        (p, [c[0], c[1]])
                    })
                    .collect::<Vec<_>>();

                let res = resolve_board(&board, holes.clone()).unwrap();
                assert!(!res.winners.is_empty());
                assert_eq!(res.ranking.len(), num_players);

                let best = holes
                    .iter()
                    .map(|(_, h)| {
                        let mut cards = h.to_vec();
                        cards.extend_from_slice(&board);
                        evaluate(&cards).unwrap()
                    })
                    .max()
                    .unwrap();
                assert_eq!(res.descriptor, best);

                for (player, value) in &res.ranking {
                    assert!(*value <= best);
                    assert_eq!(res.winners.contains(player), *value == best);
                }

                assert!(res.ranking.windows(2).all(|w| w[0].1 >= w[1].1));
            }
        }
    }

    #[test]
    fn comparator_is_total_preorder() {
        let mut rng = StdRng::seed_from_u64(3);
        let values = (0..60)
            .map(|_| {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                evaluate(&deck.deal_cards(HAND_SIZE).unwrap()).unwrap()
            })
            .collect::<Vec<_>>();

        for a in &values {
            assert_eq!(a, a);
            for b in &values {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                assert_eq!(a == b, a.tiebreak() == b.tiebreak() && a.category() == b.category());
                for c in &values {
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }
}
