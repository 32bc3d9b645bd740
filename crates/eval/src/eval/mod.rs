// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator works directly on a pool of 5 to 7 cards (hole cards plus
//! community cards). It computes the rank and suit frequencies of the pool
//! once, checks the categories from the strongest to the weakest, and for
//! pools of the same category compares the category tie-break ranks from the
//! most to the least significant.
//!
//! [classify] and [compare] use the [Rules::Standard] rules, an [Evaluator]
//! can be created with a different [Rules] value.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::EvalError;
use pokerank_cards::{Card, Rank};

mod category;
mod predicates;
mod stats;
mod tiebreak;

pub use category::HandCategory;
use stats::PoolStats;

/// The smallest pool that can be evaluated.
pub const MIN_POOL_SIZE: usize = 5;
/// The largest pool that can be evaluated.
pub const MAX_POOL_SIZE: usize = 7;

/// Classifies a pool with the standard rules.
///
/// Returns an error if the pool doesn't have 5 to 7 cards or has duplicate
/// cards.
pub fn classify(pool: &[Card]) -> Result<HandCategory, EvalError> {
    Evaluator::default().classify(pool)
}

/// Compares two classified pools with the standard rules.
///
/// Each category must be the category returned by [classify] for its pool,
/// this is not checked.
pub fn compare(
    pool_a: &[Card],
    category_a: HandCategory,
    pool_b: &[Card],
    category_b: HandCategory,
) -> Comparison {
    Evaluator::default().compare(pool_a, category_a, pool_b, category_b)
}

/// The rules used to classify and compare pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rules {
    /// Standard poker rules, the result is the same as the best five cards
    /// hand out of the pool.
    ///
    /// A straight flush needs five consecutive cards of the flush suit, two
    /// three of a kind make a full house, a flush compares the flush suit
    /// cards, and kickers only count up to five cards.
    #[default]
    Standard,
    /// Checks each category on the whole pool.
    ///
    /// A straight flush is any pool with both a flush and a straight, a full
    /// house needs a rank that appears exactly twice, four of a kind have no
    /// kicker, and all the remaining cards in the pool are compared.
    PoolWide,
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rules::Standard => f.write_str("standard"),
            Rules::PoolWide => f.write_str("pool-wide"),
        }
    }
}

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// The first hand is stronger.
    FirstWins,
    /// The second hand is stronger.
    SecondWins,
    /// The hands have the same strength.
    Tie,
}

impl Comparison {
    /// Swaps the winner.
    pub fn reverse(self) -> Comparison {
        match self {
            Comparison::FirstWins => Comparison::SecondWins,
            Comparison::SecondWins => Comparison::FirstWins,
            Comparison::Tie => Comparison::Tie,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::FirstWins,
            Ordering::Less => Comparison::SecondWins,
            Ordering::Equal => Comparison::Tie,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::FirstWins => Ordering::Greater,
            Comparison::SecondWins => Ordering::Less,
            Comparison::Tie => Ordering::Equal,
        }
    }
}

/// A classified pool with its tie-break ranks.
///
/// Values are ordered by category and then by tie-break ranks, a stronger
/// hand is greater.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    category: HandCategory,
    key: Vec<Rank>,
}

impl HandValue {
    /// Evaluates a pool with the standard rules.
    pub fn eval(pool: &[Card]) -> Result<Self, EvalError> {
        Evaluator::default().eval(pool)
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break ranks from the most significant.
    pub fn key(&self) -> &[Rank] {
        &self.key
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| cmp_ranks(&self.key, &other.key))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if let Some(first) = self.key.first() {
            write!(f, " ({first}")?;
            for rank in &self.key[1..] {
                write!(f, " {rank}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

/// Compares ranks position by position, stops at the first difference.
///
/// When one key is a prefix of the other the longer key, from the larger
/// pool, is greater so that the order stays total.
fn cmp_ranks(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(a, b)| a.cmp(b))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// A hand evaluator configured with a set of [Rules].
///
/// The evaluator has no state besides the rules and can be shared between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    rules: Rules,
}

impl Evaluator {
    /// Creates an evaluator with the given rules.
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The evaluator rules.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Classifies a pool.
    ///
    /// Returns an error if the pool doesn't have 5 to 7 cards or has duplicate
    /// cards.
    pub fn classify(&self, pool: &[Card]) -> Result<HandCategory, EvalError> {
        validate(pool)?;
        Ok(predicates::classify(&PoolStats::new(pool), self.rules))
    }

    /// Compares two classified pools.
    ///
    /// Each category must be the category returned by [Evaluator::classify]
    /// for its pool, this is not checked.
    pub fn compare(
        &self,
        pool_a: &[Card],
        category_a: HandCategory,
        pool_b: &[Card],
        category_b: HandCategory,
    ) -> Comparison {
        if category_a != category_b {
            return category_a.cmp(&category_b).into();
        }

        let key_a = tiebreak::tie_break_key(&PoolStats::new(pool_a), category_a, self.rules);
        let key_b = tiebreak::tie_break_key(&PoolStats::new(pool_b), category_b, self.rules);
        cmp_ranks(&key_a, &key_b).into()
    }

    /// Evaluates a pool to its category and tie-break ranks.
    pub fn eval(&self, pool: &[Card]) -> Result<HandValue, EvalError> {
        validate(pool)?;

        let stats = PoolStats::new(pool);
        let category = predicates::classify(&stats, self.rules);
        let key = tiebreak::tie_break_key(&stats, category, self.rules);
        Ok(HandValue { category, key })
    }

    /// Evaluates a set of pools and returns the positions of the best pools,
    /// more than one position when the best pools tie.
    pub fn winners<P>(&self, pools: &[P]) -> Result<Vec<usize>, EvalError>
    where
        P: AsRef<[Card]>,
    {
        self.showdown(pools).map(|(_, winners)| winners)
    }

    /// Evaluates a set of pools once, returns each pool value and the
    /// positions of the best pools.
    pub fn showdown<P>(&self, pools: &[P]) -> Result<(Vec<HandValue>, Vec<usize>), EvalError>
    where
        P: AsRef<[Card]>,
    {
        let values = pools
            .iter()
            .map(|p| self.eval(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let best = values.iter().max().ok_or(EvalError::NoPools)?;
        let winners = values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == best)
            .map(|(pos, _)| pos)
            .collect::<Vec<_>>();

        debug!("Showdown of {} pools won by {winners:?} with {best}", values.len());

        Ok((values, winners))
    }
}

/// Checks the pool size and that all the cards are distinct.
fn validate(pool: &[Card]) -> Result<(), EvalError> {
    if !(MIN_POOL_SIZE..=MAX_POOL_SIZE).contains(&pool.len()) {
        return Err(EvalError::InvalidPool { len: pool.len() });
    }

    let mut seen = 0u64;
    for card in pool {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }
        seen |= bit;
    }

    Ok(())
}
