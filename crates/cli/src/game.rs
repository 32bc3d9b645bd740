// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Rounds dealing and showdown.
use ahash::AHashSet;
use anyhow::{Context, Result, anyhow, bail};
use log::debug;

use pokerank_eval::{Card, Deck, Evaluator, HandValue, Rules, parse_cards};

/// The number of hole cards dealt to each player.
pub const HOLE_CARDS: usize = 2;
/// The number of community cards.
pub const BOARD_CARDS: usize = 5;

/// The game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The rules used to rank hands.
    pub rules: Rules,
    /// The number of players.
    pub players: usize,
    /// The deck shuffling seed.
    pub seed: u64,
    /// The number of rounds to play, unlimited if not set.
    pub rounds: Option<u32>,
}

/// A round of cards: each player cards and the community cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Each player cards.
    pub hands: Vec<Vec<Card>>,
    /// The community cards.
    pub board: Vec<Card>,
}

/// A player hand value at showdown.
#[derive(Debug, Clone)]
pub struct PlayerResult {
    /// The player hand value.
    pub value: HandValue,
    /// Whether this player won or tied for the win.
    pub winner: bool,
}

impl Round {
    /// Deals a round from a deck, two hole cards to each player one at a time
    /// and then the community cards.
    pub fn deal(deck: &mut Deck, players: usize) -> Result<Self> {
        let mut hands = vec![Vec::with_capacity(HOLE_CARDS); players];
        for _ in 0..HOLE_CARDS {
            for hand in hands.iter_mut() {
                hand.push(deck.deal().ok_or_else(|| anyhow!("Deck is empty"))?);
            }
        }

        let board = deck
            .deal_many(BOARD_CARDS)
            .ok_or_else(|| anyhow!("Not enough cards for the board"))?;

        Ok(Self { hands, board })
    }

    /// Parses a round from the board and each player cards text.
    ///
    /// Fails if a card is repeated anywhere in the round.
    pub fn parse<S: AsRef<str>>(board: &str, hands: &[S]) -> Result<Self> {
        let board = parse_cards(board).with_context(|| format!("Invalid board '{board}'"))?;
        let hands = hands
            .iter()
            .map(|h| {
                let h = h.as_ref();
                parse_cards(h).with_context(|| format!("Invalid hand '{h}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        let round = Self { hands, board };

        let mut seen = AHashSet::with_capacity(Deck::SIZE);
        for card in round.hands.iter().flatten().chain(&round.board) {
            if !seen.insert(*card) {
                bail!("Card {card} is dealt more than once");
            }
        }

        Ok(round)
    }

    /// Each player pool, the player cards followed by the community cards.
    pub fn pools(&self) -> Vec<Vec<Card>> {
        self.hands
            .iter()
            .map(|h| h.iter().chain(&self.board).copied().collect())
            .collect()
    }

    /// Evaluates each player pool and finds the winners.
    pub fn showdown(&self, evaluator: &Evaluator) -> Result<Vec<PlayerResult>> {
        let pools = self.pools();
        let (values, winners) = evaluator
            .showdown(&pools)
            .with_context(|| format!("Showdown of {} players", pools.len()))?;

        let results = values
            .into_iter()
            .zip(&pools)
            .enumerate()
            .map(|(player, (value, pool))| {
                debug!("Player {} {:?} -> {value}", player + 1, pool);
                PlayerResult {
                    value,
                    winner: winners.contains(&player),
                }
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerank_eval::{Comparison, HandCategory, compare};

    #[test]
    fn deal_round() {
        let mut deck = Deck::with_seed(42);
        let round = Round::deal(&mut deck, 3).unwrap();

        assert_eq!(round.hands.len(), 3);
        assert!(round.hands.iter().all(|h| h.len() == HOLE_CARDS));
        assert_eq!(round.board.len(), BOARD_CARDS);
        assert_eq!(deck.count(), Deck::SIZE - 3 * HOLE_CARDS - BOARD_CARDS);

        let cards = round
            .hands
            .iter()
            .flatten()
            .chain(&round.board)
            .collect::<AHashSet<_>>();
        assert_eq!(cards.len(), 3 * HOLE_CARDS + BOARD_CARDS);

        // Same seed same round.
        let mut deck = Deck::with_seed(42);
        assert_eq!(Round::deal(&mut deck, 3).unwrap(), round);
    }

    #[test]
    fn deal_empty_deck() {
        let mut deck = Deck::with_seed(1);
        deck.deal_many(Deck::SIZE - 6).unwrap();
        assert!(Round::deal(&mut deck, 2).is_err());
    }

    #[test]
    fn parse_round() {
        let round = Round::parse("2c 7d 9h Js Kc", &["Ah Qd", "Jc 8d"]).unwrap();
        assert_eq!(round.hands.len(), 2);
        assert_eq!(round.board.len(), 5);

        let pools = round.pools();
        assert_eq!(pools[0], parse_cards("Ah Qd 2c 7d 9h Js Kc").unwrap());
        assert_eq!(pools[1], parse_cards("Jc 8d 2c 7d 9h Js Kc").unwrap());

        assert!(Round::parse("2c 7d 9h Js Kc", &["Ah Qd", "Ah 8d"]).is_err());
        assert!(Round::parse("2c 7d 9h Js Kc", &["Ah Kc"]).is_err());
        assert!(Round::parse("2c 7d 9h Js Kx", &["Ah Qd"]).is_err());
    }

    #[test]
    fn showdown_results() {
        let round = Round::parse("2c 7d 9h Js Kc", &["Ah Qd", "Jc 8d", "As Qc"]).unwrap();
        let results = round.showdown(&Evaluator::default()).unwrap();

        let winners = results.iter().map(|r| r.winner).collect::<Vec<_>>();
        assert_eq!(winners, [false, true, false]);
        assert_eq!(results[1].value.category(), HandCategory::OnePair);

        // Split pot.
        let round = Round::parse("2c 7d 9h Js Kc", &["Ah Qd", "As Qc"]).unwrap();
        let results = round.showdown(&Evaluator::default()).unwrap();
        assert!(results.iter().all(|r| r.winner));
    }

    #[test]
    fn showdown_agrees_with_compare() {
        let mut deck = Deck::with_seed(7);
        for _ in 0..5 {
            let round = Round::deal(&mut deck, 2).unwrap();
            let results = round.showdown(&Evaluator::default()).unwrap();

            let pools = round.pools();
            let (a, b) = (&pools[0], &pools[1]);
            let cmp = compare(a, results[0].value.category(), b, results[1].value.category());
            let expected = match (results[0].winner, results[1].winner) {
                (true, false) => Comparison::FirstWins,
                (false, true) => Comparison::SecondWins,
                _ => Comparison::Tie,
            };
            assert_eq!(cmp, expected);
        }
    }

    #[test]
    fn showdown_values_match_eval() {
        let round = Round::parse("2c 7d 9h Js Kc", &["Ah Qd", "Jc 8d", "3c 3d"]).unwrap();
        let evaluator = Evaluator::new(Rules::PoolWide);
        let results = round.showdown(&evaluator).unwrap();

        assert_eq!(results.len(), 3);
        for (pool, result) in round.pools().iter().zip(&results) {
            let value = evaluator.eval(pool).unwrap();
            assert_eq!(result.value.category(), value.category());
            assert_eq!(result.value.key(), value.key());
        }
    }

    #[test]
    fn showdown_invalid_pool() {
        // Three cards on the flop plus one hole card are not enough.
        let round = Round::parse("2c 7d 9h", &["Ah", "Jc 8d"]).unwrap();
        assert!(round.showdown(&Evaluator::default()).is_err());
    }
}
