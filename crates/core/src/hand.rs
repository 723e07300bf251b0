// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand play at a table.
use ahash::AHashSet;
use anyhow::{Result, anyhow, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use showdown_cards::{Card, Deck};
use showdown_eval::{ShowdownResult, eval::BOARD_SIZE, resolve_board};

use crate::{
    Config,
    seats::{Seats, choose_dealer},
    strategy::{Action, PlayerView, Scripted, Strategy, Street},
};

/// A player action during a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRecord {
    /// The street of the action.
    pub street: Street,
    /// The player seat.
    pub seat: usize,
    /// The player action.
    pub action: Action,
}

/// The result of a played hand.
#[derive(Debug, Clone)]
pub struct HandOutcome {
    /// The hand number starting from 1.
    pub hand_no: usize,
    /// The seats positions for this hand.
    pub seats: Seats,
    /// The hole cards for each seat.
    pub holes: Vec<[Card; 2]>,
    /// The board cards dealt before the hand ended.
    pub board: Vec<Card>,
    /// The players actions in order.
    pub actions: Vec<ActionRecord>,
    /// The seats that folded in fold order.
    pub folded: Vec<usize>,
    /// The seats that won the hand.
    pub winners: Vec<usize>,
    /// The showdown result if more than one player reached the river.
    pub showdown: Option<ShowdownResult<usize>>,
}

/// A table with one strategy per seat that plays hands to showdown.
pub struct Table {
    seats: Seats,
    strategies: Vec<Box<dyn Strategy>>,
    rng: StdRng,
    hands_played: usize,
}

impl Table {
    /// Creates a table with scripted players.
    pub fn new(config: &Config) -> Result<Self> {
        let strategies = (0..config.players)
            .map(|_| Box::new(Scripted) as Box<dyn Strategy>)
            .collect();
        Self::with_strategies(config, strategies)
    }

    /// Creates a table with the given strategy for each seat.
    ///
    /// The dealer is chosen drawing a card for each seat.
    pub fn with_strategies(config: &Config, strategies: Vec<Box<dyn Strategy>>) -> Result<Self> {
        // Validates the number of players.
        Seats::new(config.players, 0)?;

        if strategies.len() != config.players {
            bail!(
                "Expected {} strategies got {}",
                config.players,
                strategies.len()
            );
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut deck = Deck::new_and_shuffled(&mut rng);
        let draws = deck
            .deal_cards(config.players)
            .ok_or_else(|| anyhow!("Not enough cards for {} players", config.players))?;
        let dealer = choose_dealer(&draws).ok_or_else(|| anyhow!("No cards drawn"))?;

        info!(
            "Seat {} draws {} and gets the button",
            dealer + 1,
            draws[dealer]
        );

        Ok(Self {
            seats: Seats::new(config.players, dealer)?,
            strategies,
            rng,
            hands_played: 0,
        })
    }

    /// The seats for the next hand.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Number of hands played.
    pub fn hands_played(&self) -> usize {
        self.hands_played
    }

    /// Plays a hand and moves the button to the next seat.
    pub fn play_hand(&mut self) -> Result<HandOutcome> {
        let seats = self.seats;
        let hand_no = self.hands_played + 1;
        let mut deck = Deck::new_and_shuffled(&mut self.rng);

        let holes = (0..seats.count())
            .map(|_| deck.deal_cards(2).map(|c| [c[0], c[1]]))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| anyhow!("Deck out of cards"))?;

        info!(
            "Hand {hand_no} dealer seat {} small blind {} big blind {}",
            seats.dealer() + 1,
            seats.small_blind() + 1,
            seats.big_blind() + 1
        );

        let mut board = Vec::with_capacity(BOARD_SIZE);
        let mut folded = AHashSet::default();
        let mut fold_order = Vec::new();
        let mut actions = Vec::new();
        let mut street = Street::Preflop;

        loop {
            let missing = street.board_cards() - board.len();
            let cards = deck
                .deal_cards(missing)
                .ok_or_else(|| anyhow!("Deck out of cards"))?;
            board.extend(cards);

            if street != Street::Preflop {
                debug!("{street} {}", cards_to_string(&board));
            }

            let order = match street {
                Street::Preflop => seats.preflop_order().collect::<Vec<_>>(),
                _ => seats.postflop_order().collect::<Vec<_>>(),
            };

            let mut raises = 0u8;
            for seat in order {
                if seats.count() - folded.len() < 2 {
                    break;
                }

                if folded.contains(&seat) {
                    continue;
                }

                let view = PlayerView {
                    seat,
                    hole: holes[seat],
                    board: &board,
                    street,
                    raises,
                    // Pre-flop everybody but the big blind faces the blind bet.
                    facing_bet: raises > 0
                        || (street == Street::Preflop && seat != seats.big_blind()),
                };

                let action = self.strategies[seat].execute(&view);
                debug!("{street} seat {} {}", seat + 1, action.label());

                match action {
                    Action::Fold => {
                        folded.insert(seat);
                        fold_order.push(seat);
                    }
                    Action::Raise => raises = raises.saturating_add(1),
                    Action::Call | Action::Check => {}
                }

                actions.push(ActionRecord {
                    street,
                    seat,
                    action,
                });
            }

            if seats.count() - folded.len() < 2 {
                break;
            }

            match street.next() {
                Some(next) => street = next,
                None => break,
            }
        }

        let remaining = (0..seats.count())
            .filter(|seat| !folded.contains(seat))
            .collect::<Vec<_>>();

        let (winners, showdown) = match remaining[..] {
            [] => bail!("All players folded"),
            [winner] => {
                info!(
                    "Hand {hand_no} seat {} wins, all other players folded",
                    winner + 1
                );
                (vec![winner], None)
            }
            _ => {
                let res = resolve_board(&board, remaining.iter().map(|&seat| (seat, holes[seat])))?;

                let seats_str = res
                    .winners
                    .iter()
                    .map(|seat| (seat + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                info!(
                    "Hand {hand_no} board {} winners seats {seats_str} with {}",
                    cards_to_string(&board),
                    res.descriptor
                );

                (res.winners.clone(), Some(res))
            }
        };

        self.hands_played += 1;
        self.seats.rotate();

        Ok(HandOutcome {
            hand_no,
            seats,
            holes,
            board,
            actions,
            folded: fold_order,
            winners,
            showdown,
        })
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
