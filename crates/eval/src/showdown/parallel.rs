// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel showdown resolution.
use std::{panic, thread};

use showdown_cards::Card;

use super::{ShowdownResult, rank_players};
use crate::{Result, eval::evaluate};

/// Resolves a showdown evaluating each player hand on its own thread.
///
/// The result is the same as [resolve](super::resolve), the ranking is done
/// on the calling thread once all hands have been evaluated.
pub fn par_resolve<P, C>(players: Vec<(P, C)>) -> Result<ShowdownResult<P>>
where
    P: Clone,
    C: AsRef<[Card]> + Sync,
{
    let values = thread::scope(|s| {
        let handles = players
            .iter()
            .map(|(_, cards)| s.spawn(move || evaluate(cards.as_ref())))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let ranking = players
        .into_iter()
        .zip(values)
        .map(|((player, _), value)| value.map(|v| (player, v)))
        .collect::<Result<Vec<_>>>()?;

    rank_players(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showdown::resolve;
    use rand::{SeedableRng, rngs::StdRng};
    use showdown_cards::Deck;

    #[test]
    fn same_as_sequential() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let board = deck.deal_cards(5).unwrap();
            let players = (0..6)
                .map(|p| {
                    let mut cards = deck.deal_cards(2).unwrap();
                    cards.extend_from_slice(&board);
                    (p, cards)
                })
                .collect::<Vec<_>>();

            let seq = resolve(players.clone()).unwrap();
            let par = par_resolve(players).unwrap();

            assert_eq!(seq.winners, par.winners);
            assert_eq!(seq.descriptor, par.descriptor);
            assert_eq!(seq.ranking, par.ranking);
        }
    }

    #[test]
    fn errors() {
        assert!(par_resolve(Vec::<(u8, Vec<Card>)>::new()).is_err());

        let res = par_resolve(vec![(1, Deck::default().into_iter().take(6).collect::<Vec<_>>())]);
        assert!(res.unwrap_err().is_invalid_hand());
    }
}
