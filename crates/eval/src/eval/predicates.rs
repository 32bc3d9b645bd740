// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand category predicates.
use super::{HandCategory, Rules, stats::PoolStats};

/// Classifies a pool checking the categories from the strongest, the first
/// category that holds is the pool category.
pub(crate) fn classify(stats: &PoolStats, rules: Rules) -> HandCategory {
    if is_straight_flush(stats, rules) {
        HandCategory::StraightFlush
    } else if stats.has_count(4) {
        HandCategory::FourOfAKind
    } else if is_full_house(stats, rules) {
        HandCategory::FullHouse
    } else if stats.flush_suit().is_some() {
        HandCategory::Flush
    } else if stats.straight_high().is_some() {
        HandCategory::Straight
    } else if stats.has_count(3) {
        HandCategory::ThreeOfAKind
    } else if stats.ranks_with_count(2).count() >= 2 {
        HandCategory::TwoPair
    } else if stats.has_count(2) {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    }
}

fn is_straight_flush(stats: &PoolStats, rules: Rules) -> bool {
    match rules {
        Rules::Standard => stats
            .flush_suit()
            .and_then(|s| stats.suited_straight_high(s))
            .is_some(),
        Rules::PoolWide => stats.flush_suit().is_some() && stats.straight_high().is_some(),
    }
}

fn is_full_house(stats: &PoolStats, rules: Rules) -> bool {
    match rules {
        Rules::Standard => stats.ranks_with_count(3).next().is_some_and(|trips| {
            // The pair may come from a second three of a kind.
            stats
                .ranks_with_count(2)
                .chain(stats.ranks_with_count(3))
                .any(|r| r != trips)
        }),
        Rules::PoolWide => stats.has_count(3) && stats.has_count(2),
    }
}
