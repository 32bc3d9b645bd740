// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequencies of a pool.
use pokerank_cards::{Card, Rank, Suit};

/// Rank and suit frequencies of a cards pool, computed once per evaluation.
#[derive(Debug, Clone)]
pub(crate) struct PoolStats {
    /// Number of cards for each rank value.
    counts: [u8; Rank::COUNT],
    /// Number of cards for each suit.
    suits: [u8; Suit::COUNT],
    /// Bitmask of the rank values for each suit.
    suit_ranks: [u16; Suit::COUNT],
    /// Bitmask of the distinct rank values in the pool.
    ranks: u16,
}

impl PoolStats {
    pub fn new(pool: &[Card]) -> Self {
        let mut stats = Self {
            counts: [0; Rank::COUNT],
            suits: [0; Suit::COUNT],
            suit_ranks: [0; Suit::COUNT],
            ranks: 0,
        };

        for card in pool {
            let (rank, suit) = (card.rank().value(), card.suit().index());
            stats.counts[rank as usize] = stats.counts[rank as usize].saturating_add(1);
            stats.suits[suit] = stats.suits[suit].saturating_add(1);
            stats.suit_ranks[suit] |= 1 << rank;
            stats.ranks |= 1 << rank;
        }

        stats
    }

    /// How many cards of the given rank are in the pool.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Ranks that appear exactly `n` times, highest first.
    pub fn ranks_with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.count(r) == n)
    }

    /// Checks if some rank appears exactly `n` times.
    pub fn has_count(&self, n: u8) -> bool {
        self.counts.contains(&n)
    }

    /// The suit with at least five cards.
    ///
    /// A pool of at most 9 cards can only have one such suit.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|s| self.suits[s.index()] >= 5)
    }

    /// The highest card of the best straight formed by all the pool ranks.
    pub fn straight_high(&self) -> Option<Rank> {
        straight_high(&distinct_ranks(self.ranks))
    }

    /// The highest card of the best straight formed by the cards of a suit.
    pub fn suited_straight_high(&self, suit: Suit) -> Option<Rank> {
        straight_high(&distinct_ranks(self.suit_ranks[suit.index()]))
    }

    /// The pool cards ranks highest first.
    pub fn ranks_desc(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .flat_map(move |r| std::iter::repeat_n(r, self.count(r) as usize))
    }

    /// The ranks of the cards of a suit highest first.
    pub fn suited_ranks_desc(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        let mask = self.suit_ranks[suit.index()];
        Rank::ranks()
            .rev()
            .filter(move |r| mask & (1 << r.value()) != 0)
    }

    /// The highest rank in the pool.
    pub fn top_rank(&self) -> Option<Rank> {
        Rank::ranks().rev().find(|&r| self.count(r) > 0)
    }
}

/// The sorted distinct rank values in a ranks bitmask.
fn distinct_ranks(mask: u16) -> Vec<u8> {
    (0..Rank::COUNT as u8)
        .filter(|r| mask & (1 << r) != 0)
        .collect()
}

/// Finds the highest straight in sorted distinct rank values.
///
/// Slides a window of five ranks from the top looking for a run with
/// `max - min == 4`, the wheel (A-2-3-4-5) plays the ace low and returns five
/// as the highest card.
fn straight_high(ranks: &[u8]) -> Option<Rank> {
    if ranks.len() < 5 {
        return None;
    }

    let run = ranks
        .windows(5)
        .rev()
        .find(|w| w[4] - w[0] == 4)
        .map(|w| w[4]);

    let ace = Rank::Ace.value();
    let wheel = ranks.starts_with(&[0, 1, 2, 3]) && ranks.contains(&ace);

    match run {
        Some(high) => Rank::from_value(high),
        None if wheel => Some(Rank::Five),
        None => None,
    }
}
